//! Errors of a recovery attempt.

use crate::checksum::Checksum;
use thiserror::Error;

/// The reason why an identifier could not be recovered from a checksum.
///
/// Each error concerns a single checksum and never affects other recovery attempts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CrackError {
    /// No table entry has the top byte required to unwind the checksum.
    #[error("cannot unwind checksum {checksum}: no table entry has top byte {byte:#04x}")]
    Decode { checksum: Checksum, byte: u8 },
    /// Every prefix below the bound has been tried without success.
    #[error("no identifier with a prefix below {bound} has checksum {checksum}")]
    NotFound { checksum: Checksum, bound: u64 },
    /// The caller interrupted the search. `next` is the first prefix that has not been tried.
    #[error("search for checksum {checksum} interrupted before prefix {next}")]
    Interrupted { checksum: Checksum, next: u64 },
}
