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

//! CRC32 lookup table, along with the inverse lookup used to unwind checksums.

use crate::hasher::{Finalize, Hasher};
use std::sync::OnceLock;

/// The reflected generator polynomial of the standard CRC32.
pub const POLYNOM: u32 = 0xedb88320;

/// A 256-entry table for a reflected CRC32.
///
/// The table is never mutated once built. The standard one is shared by the whole process through
/// [`CrcTable::standard`].
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable([u32; 256]);

impl CrcTable {
    /// Computes the lookup table for the given generator polynomial.
    ///
    /// Arguments:
    /// - `polynom` is the polynom, in reflected (little endian) form.
    pub const fn new(polynom: u32) -> Self {
        let mut table = [0; 256];
        let mut n = 0;
        while n < table.len() {
            let mut crc = n as u32;
            let mut bit = 0;
            while bit < 8 {
                if crc & 1 != 0 {
                    crc = (crc >> 1) ^ polynom;
                } else {
                    crc >>= 1;
                }
                bit += 1;
            }
            table[n] = crc;
            n += 1;
        }
        Self(table)
    }

    /// Returns the table of the standard CRC32, building it on first use.
    pub fn standard() -> &'static Self {
        static TABLE: OnceLock<CrcTable> = OnceLock::new();
        TABLE.get_or_init(|| Self::new(POLYNOM))
    }

    /// Returns the entry at index `i`.
    #[inline]
    pub fn entry(&self, i: u8) -> u32 {
        self.0[i as usize]
    }

    /// Returns all the entries of the table.
    pub fn entries(&self) -> &[u32; 256] {
        &self.0
    }

    /// Performs one table-driven update of `register` with the entry at `index`.
    #[inline]
    pub fn step(&self, register: u32, index: u8) -> u32 {
        self.entry(index) ^ (register >> 8)
    }

    /// Returns the lowest index whose entry has `top` as its most significant byte.
    ///
    /// Since one update sets the register's top byte to the top byte of the entry it uses, this
    /// tells which entry produced a given register without trying any input byte.
    pub fn locate(&self, top: u8) -> Option<u8> {
        self.0
            .iter()
            .position(|e| (e >> 24) as u8 == top)
            .map(|i| i as u8)
    }

    /// Returns a new hasher using this table.
    pub fn hasher(&self) -> Hasher<'_> {
        Hasher::new(self)
    }

    /// Computes the CRC32 of `data`.
    ///
    /// `finalize` tells whether the final all-ones XOR is applied.
    pub fn checksum(&self, data: &[u8], finalize: Finalize) -> u32 {
        let mut hasher = self.hasher();
        hasher.update(data);
        hasher.finish(finalize)
    }
}

impl std::fmt::Debug for CrcTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrcTable")
            .field("polynom", &format_args!("{:#010x}", self.0[128]))
            .finish()
    }
}
