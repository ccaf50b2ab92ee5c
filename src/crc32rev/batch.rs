//! Recovery of identifiers for many records at once.
//!
//! Every checksum is solved independently, so records are spread over the rayon thread pool.

use crate::checksum::Checksum;
use crate::error::CrackError;
use crate::interrupt::Interrupt;
use crate::search::Cracker;
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;

/// Recovers the identifier of each of `checksums`, in parallel.
///
/// The results are in the same order as `checksums`. A checksum appearing several times (the same
/// viewer posting several comments) is solved once. Every search stops once `interrupt` is raised.
pub fn crack_all<I: Interrupt + Sync + ?Sized>(
    cracker: &Cracker<'_>,
    checksums: &[Checksum],
    interrupt: &I,
) -> Vec<Result<String, CrackError>> {
    let mut unique = checksums.to_vec();
    unique.sort_unstable();
    unique.dedup();
    debug!(
        "solving {} distinct checksums out of {}",
        unique.len(),
        checksums.len()
    );
    let solved: HashMap<_, _> = unique
        .into_par_iter()
        .map(|checksum| (checksum, cracker.crack_until(checksum, interrupt)))
        .collect();
    checksums.iter().map(|c| solved[c].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interrupt::Never;
    use crate::search::SearchConfig;
    use crate::table::CrcTable;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn keeps_order_and_duplicates() {
        let cracker = Cracker::standard();
        let ids = ["4321", "12345678", "4321", "20825", "7777777"];
        let checksums: Vec<_> = ids.iter().map(|id| Checksum::of(id)).collect();
        let results = crack_all(&cracker, &checksums, &Never);
        assert_eq!(results.len(), ids.len());
        for (id, res) in ids.iter().zip(results) {
            assert_eq!(res.unwrap(), *id);
        }
    }

    #[test]
    fn failures_are_isolated() {
        let config = SearchConfig::default().with_prefix_bound(100_000);
        let cracker = Cracker::new(CrcTable::standard(), config);
        let checksums = [Checksum::of("1234"), Checksum(0xdeadbeef), Checksum::of("5678")];
        let results = crack_all(&cracker, &checksums, &Never);
        assert_eq!(results[0].as_deref(), Ok("1234"));
        assert!(matches!(results[1], Err(CrackError::NotFound { .. })));
        assert_eq!(results[2].as_deref(), Ok("5678"));
    }

    #[test]
    fn interrupted() {
        let flag = AtomicBool::new(true);
        let checksums = [Checksum::of("1234"), Checksum::of("5678")];
        let results = crack_all(&Cracker::standard(), &checksums, &flag);
        assert!(results
            .iter()
            .all(|r| matches!(r, Err(CrackError::Interrupted { next: 0, .. }))));
    }

    #[test]
    fn empty() {
        assert!(crack_all(&Cracker::standard(), &[], &Never).is_empty());
    }
}
