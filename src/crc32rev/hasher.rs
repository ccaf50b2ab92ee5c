//! Forward, table-driven CRC32 computation (Sarwate algorithm).

use crate::table::CrcTable;

/// Tells whether the final all-ones XOR of the conventional CRC32 is applied to the register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finalize {
    /// Return the conventional checksum.
    Yes,
    /// Return the raw register.
    No,
}

/// An incremental CRC32 computation.
#[derive(Clone, Debug)]
pub struct Hasher<'t> {
    table: &'t CrcTable,
    register: u32,
    /// The table index used for the last byte, if any.
    last_index: Option<u8>,
}

impl<'t> Hasher<'t> {
    /// Creates a hasher with the register set to all ones.
    pub fn new(table: &'t CrcTable) -> Self {
        Self {
            table,
            register: !0,
            last_index: None,
        }
    }

    /// Feeds `data` into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        for b in data {
            let i = (self.register as u8) ^ *b;
            self.register = self.table.step(self.register, i);
            self.last_index = Some(i);
        }
    }

    /// Returns the current, non-finalized register.
    #[inline]
    pub fn register(&self) -> u32 {
        self.register
    }

    /// Returns the table index consulted while processing the most recent byte.
    #[inline]
    pub fn last_index(&self) -> Option<u8> {
        self.last_index
    }

    /// Returns the digest.
    pub fn finish(self, finalize: Finalize) -> u32 {
        match finalize {
            Finalize::Yes => !self.register,
            Finalize::No => self.register,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer() {
        let table = CrcTable::standard();
        assert_eq!(table.checksum(b"", Finalize::Yes), 0);
        assert_eq!(table.checksum(b"", Finalize::No), 0xffffffff);
        assert_eq!(table.hasher().last_index(), None);
    }

    #[test]
    fn test_vectors() {
        let table = CrcTable::standard();
        let test_vectors = [
            ("123456789", 0xcbf43926),
            ("The quick brown fox jumps over the lazy dog", 0x414fa339),
            ("a", 0xe8b7be43),
            ("Hello, World!", 0xec4ac3d0),
        ];
        for (data, expected) in test_vectors {
            assert_eq!(table.checksum(data.as_bytes(), Finalize::Yes), expected);
            assert_eq!(table.checksum(data.as_bytes(), Finalize::No), !expected);
        }
    }

    #[test]
    fn incremental_matches_oneshot() {
        let table = CrcTable::standard();
        let mut hasher = table.hasher();
        hasher.update(b"1234");
        hasher.update(b"5678");
        assert_eq!(hasher.finish(Finalize::No), table.checksum(b"12345678", Finalize::No));
    }

    #[test]
    fn last_index() {
        let table = CrcTable::standard();
        let mut hasher = table.hasher();
        hasher.update(b"1");
        // The register starts at all ones
        assert_eq!(hasher.last_index(), Some(0xff ^ b'1'));
        let before = hasher.register();
        hasher.update(b"2");
        let i = (before as u8) ^ b'2';
        assert_eq!(hasher.last_index(), Some(i));
        assert_eq!(hasher.register(), table.entry(i) ^ (before >> 8));
    }
}
