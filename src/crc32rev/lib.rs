//! Recovery of numeric identifiers from their CRC32.
//!
//! Comment records expose the viewer's numeric identifier only through its CRC32. Since the
//! identifier is made of a bounded number of decimal digits, it can be recovered:
//! - the indices of the table entries used for the last four bytes are unwound from the checksum
//!   ([`unwind()`]);
//! - every prefix below a bound is hashed, and kept only if its last byte used the first of those
//!   indices ([`Cracker`]);
//! - the three remaining indices are replayed on the prefix's register, each step having to
//!   decode to a digit ([`suffix::validate`]).
//!
//! ```
//! use crc32rev::Checksum;
//!
//! let checksum: Checksum = "9ae0daaf".parse().unwrap();
//! assert_eq!(crc32rev::crack(checksum).unwrap(), "12345678");
//! ```

pub mod batch;
pub mod checksum;
pub mod error;
pub mod hasher;
pub mod interrupt;
pub mod prefix;
pub mod search;
pub mod suffix;
pub mod table;
pub mod unwind;

pub use checksum::{Checksum, ParseChecksumError};
pub use error::CrackError;
pub use hasher::{Finalize, Hasher};
pub use interrupt::{Deadline, Interrupt, Never};
pub use search::{Cracker, DEFAULT_PREFIX_BOUND, SearchConfig, crack};
pub use suffix::SUFFIX_LEN;
pub use table::{CrcTable, POLYNOM};
pub use unwind::{Unwound, unwind};
