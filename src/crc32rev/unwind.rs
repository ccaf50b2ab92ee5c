/*
 * Copyright 2025 Luc Lenôtre
 *
 * This file is part of Maestro.
 *
 * Maestro is free software: you can redistribute it and/or modify it under the
 * terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or (at your option) any later
 * version.
 *
 * Maestro is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
 * A PARTICULAR PURPOSE. See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * Maestro. If not, see <https://www.gnu.org/licenses/>.
 */

//! Unwinding of the last steps of a CRC32 computation.
//!
//! A single update `register' = table[i] ^ (register >> 8)` copies the top byte of `table[i]` into
//! `register'`, so `i` can be found from `register'` alone. Repeating this on the lower bytes
//! gives the indices of the last four updates without knowing the input bytes.

use crate::checksum::Checksum;
use crate::error::CrackError;
use crate::table::CrcTable;

/// The table indices used by the last four updates that led to a register.
///
/// `self.0[0]` is the index of the very last update, `self.0[3]` the one of the fourth from last.
/// The value only makes sense along with the register it was unwound from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unwound(pub [u8; 4]);

impl Unwound {
    /// Returns the index of the earliest of the four updates.
    #[inline]
    pub fn first(&self) -> u8 {
        self.0[3]
    }

    /// Returns the indices of the last three updates, in processing order.
    #[inline]
    pub fn rest(&self) -> [u8; 3] {
        [self.0[2], self.0[1], self.0[0]]
    }
}

/// Deduces the indices of the last four updates leading to the raw `register`.
///
/// On failure, the register cannot have been produced by `table`.
pub fn unwind(table: &CrcTable, register: u32) -> Result<Unwound, CrackError> {
    let mut indices = [0; 4];
    let mut reg = register;
    for k in (0..4).rev() {
        let byte = (reg >> (k * 8)) as u8;
        let i = table.locate(byte).ok_or(CrackError::Decode {
            checksum: Checksum::from_register(register),
            byte,
        })?;
        indices[3 - k] = i;
        // Cancel the entry out, leaving the upper bytes at zero
        reg ^= table.entry(i) >> ((3 - k) * 8);
    }
    Ok(Unwound(indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns the indices of the last four updates when hashing `data`, most recent first.
    fn forward_indices(table: &CrcTable, data: &[u8]) -> [u8; 4] {
        let mut indices = Vec::new();
        let mut hasher = table.hasher();
        for b in data {
            hasher.update(&[*b]);
            indices.push(hasher.last_index().unwrap());
        }
        let mut last: Vec<u8> = indices.into_iter().rev().take(4).collect();
        last.resize(4, 0);
        last.try_into().unwrap()
    }

    #[test]
    fn inverts_forward_hashing() {
        let table = CrcTable::standard();
        for id in ["1000", "12345678", "208259", "99999999999", "31415926535"] {
            let checksum = Checksum::of(id);
            let unwound = unwind(table, checksum.register()).unwrap();
            assert_eq!(unwound.0, forward_indices(table, id.as_bytes()), "{id}");
        }
    }

    #[test]
    fn accessors() {
        let unwound = Unwound([1, 2, 3, 4]);
        assert_eq!(unwound.first(), 4);
        assert_eq!(unwound.rest(), [3, 2, 1]);
    }

    #[test]
    fn every_register_unwinds_with_standard_table() {
        let table = CrcTable::standard();
        for register in [0, 1, 0xff, 0xffffffff, 0xdeadbeef, 0x80000000] {
            unwind(table, register).unwrap();
        }
    }

    #[test]
    fn decode_error() {
        let table = CrcTable::new(0);
        assert_eq!(
            unwind(&table, 0x01000000),
            Err(CrackError::Decode {
                checksum: Checksum::from_register(0x01000000),
                byte: 1,
            })
        );
    }
}
