//! Enumeration of candidate prefixes.

use std::fmt;
use std::ops::Range;

/// The maximum number of decimal digits of a `u64`.
const MAX_DIGITS: usize = 20;

/// A candidate prefix along with its decimal representation.
#[derive(Clone, Copy)]
pub struct Prefix {
    value: u64,
    buf: [u8; MAX_DIGITS],
    /// The offset of the first digit in `buf`.
    start: usize,
}

impl Prefix {
    /// Creates the prefix for `value`.
    pub fn new(value: u64) -> Self {
        let mut buf = [b'0'; MAX_DIGITS];
        let mut start = MAX_DIGITS - 1;
        let mut n = value;
        loop {
            buf[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
            start -= 1;
        }
        Self { value, buf, start }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the canonical decimal representation, without leading zeros.
    pub fn digits(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    /// Moves to the next value, updating the digits in place.
    fn increment(&mut self) {
        self.value += 1;
        let mut i = MAX_DIGITS;
        loop {
            i -= 1;
            if self.buf[i] == b'9' {
                self.buf[i] = b'0';
            } else {
                self.buf[i] += 1;
                break;
            }
        }
        self.start = self.start.min(i);
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prefix({})", self.value)
    }
}

/// A finite sequence of prefixes, in strictly increasing order.
///
/// A sequence can start at any value, which allows a search to stop between two candidates and
/// continue later.
#[derive(Clone, Debug)]
pub struct Prefixes {
    /// The next prefix to yield.
    next: Prefix,
    /// The exclusive upper bound.
    end: u64,
}

impl Prefixes {
    /// Creates a sequence over `range`.
    pub fn new(range: Range<u64>) -> Self {
        Self {
            next: Prefix::new(range.start),
            end: range.end,
        }
    }
}

impl Iterator for Prefixes {
    type Item = Prefix;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.value >= self.end {
            return None;
        }
        let cur = self.next;
        self.next.increment();
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end.saturating_sub(self.next.value);
        match usize::try_from(len) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        for n in [0, 7, 10, 99, 100, 12345, u64::MAX] {
            assert_eq!(Prefix::new(n).digits(), n.to_string().as_bytes());
        }
    }

    #[test]
    fn increments_across_carries() {
        let prefixes: Vec<_> = Prefixes::new(0..1_001).collect();
        assert_eq!(prefixes.len(), 1_001);
        for (n, p) in prefixes.iter().enumerate() {
            assert_eq!(p.value(), n as u64);
            assert_eq!(p.digits(), n.to_string().as_bytes());
        }
    }

    #[test]
    fn empty_range() {
        assert_eq!(Prefixes::new(5..5).next().map(|p| p.value()), None);
        assert_eq!(Prefixes::new(0..0).size_hint(), (0, Some(0)));
    }

    #[test]
    fn starts_anywhere() {
        let values: Vec<_> = Prefixes::new(998..1_002).map(|p| p.value()).collect();
        assert_eq!(values, [998, 999, 1_000, 1_001]);
        let last = Prefixes::new(998..1_002).last().unwrap();
        assert_eq!(last.digits(), b"1001");
    }
}
