//! Reconstruction of the identifier's trailing digits.

use crate::table::CrcTable;

/// The number of trailing digits recovered from the unwound indices.
pub const SUFFIX_LEN: usize = 3;

/// Replays the updates at `indices` from `register`, the raw register after hashing a prefix.
///
/// The input byte of each update is `(register & 0xff) ^ index`. If every such byte is an ASCII
/// digit, the function returns them. Else, the prefix cannot precede the indices in a numeric
/// identifier.
pub fn validate(
    table: &CrcTable,
    mut register: u32,
    indices: [u8; SUFFIX_LEN],
) -> Option<[u8; SUFFIX_LEN]> {
    let mut digits = [0; SUFFIX_LEN];
    for (digit, index) in digits.iter_mut().zip(indices) {
        let c = (register as u8) ^ index;
        if !c.is_ascii_digit() {
            return None;
        }
        *digit = c;
        register = table.step(register, index);
    }
    Some(digits)
}
