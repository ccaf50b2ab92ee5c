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

//! The prefix search recovering an identifier from its checksum.

use crate::checksum::Checksum;
use crate::error::CrackError;
use crate::hasher::Finalize;
use crate::interrupt::{Interrupt, Never};
use crate::prefix::{Prefix, Prefixes};
use crate::suffix::{self, SUFFIX_LEN};
use crate::table::CrcTable;
use crate::unwind::{self, Unwound};
use log::{debug, trace};

/// The default exclusive upper bound of the prefix search.
pub const DEFAULT_PREFIX_BOUND: u64 = 100_000_000;
/// The number of candidates tried between two polls of the interrupt.
const POLL_INTERVAL: u64 = 1 << 12;

/// Search parameters.
///
/// Along with [`SUFFIX_LEN`], the prefix bound sets the length of the longest identifier the search
/// can return. Since the smallest matching prefix wins, long identifiers often come back as a
/// shorter identifier with the same checksum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    prefix_bound: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            prefix_bound: DEFAULT_PREFIX_BOUND,
        }
    }
}

impl SearchConfig {
    /// Sets the exclusive upper bound of the prefixes to try.
    pub fn with_prefix_bound(self, prefix_bound: u64) -> Self {
        Self { prefix_bound }
    }

    /// Returns the exclusive upper bound of the prefixes to try.
    pub fn prefix_bound(&self) -> u64 {
        self.prefix_bound
    }

    /// Returns the length of the longest identifier the search can return, or `None` if the bound
    /// excludes every prefix.
    ///
    /// Identifiers of that length are not always recovered: an identifier with a smaller prefix
    /// and the same checksum is returned instead. Close to 10 digits, such collisions are the
    /// common case.
    pub fn max_id_len(&self) -> Option<usize> {
        let largest = self.prefix_bound.checked_sub(1)?;
        Some(Prefix::new(largest).digits().len() + SUFFIX_LEN)
    }
}

/// Recovers identifiers from their checksum.
#[derive(Clone, Copy, Debug)]
pub struct Cracker<'t> {
    table: &'t CrcTable,
    config: SearchConfig,
}

impl Cracker<'static> {
    /// Returns a cracker using the standard table and the default configuration.
    pub fn standard() -> Self {
        Self::new(CrcTable::standard(), SearchConfig::default())
    }
}

impl<'t> Cracker<'t> {
    /// Creates a new instance.
    ///
    /// Arguments:
    /// - `table` is the table the checksums were computed with.
    /// - `config` is the search configuration.
    pub fn new(table: &'t CrcTable, config: SearchConfig) -> Self {
        Self { table, config }
    }

    /// Returns the search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Recovers the identifier whose checksum is `checksum`.
    ///
    /// If several identifiers match, the one with the smallest prefix is returned.
    pub fn crack(&self, checksum: Checksum) -> Result<String, CrackError> {
        self.crack_until(checksum, &Never)
    }

    /// Same as [`Self::crack`], but gives up with [`CrackError::Interrupted`] once `interrupt` is
    /// raised.
    pub fn crack_until<I: Interrupt + ?Sized>(
        &self,
        checksum: Checksum,
        interrupt: &I,
    ) -> Result<String, CrackError> {
        self.crack_from(checksum, 0, interrupt)
    }

    /// Same as [`Self::crack_until`], but skips the prefixes below `start`.
    ///
    /// This resumes a search that failed with [`CrackError::Interrupted`], using the error's `next`
    /// field as `start`.
    pub fn crack_from<I: Interrupt + ?Sized>(
        &self,
        checksum: Checksum,
        start: u64,
        interrupt: &I,
    ) -> Result<String, CrackError> {
        let unwound = unwind::unwind(self.table, checksum.register())?;
        debug!("checksum {checksum}: unwound indices {:?}", unwound.0);
        let prefixes = Prefixes::new(start..self.config.prefix_bound);
        match self.search(unwound, prefixes, interrupt) {
            Search::Found(id) => {
                debug_assert_eq!(self.table.checksum(id.as_bytes(), Finalize::Yes), checksum.0);
                debug!("checksum {checksum}: found `{id}`");
                Ok(id)
            }
            Search::Exhausted => {
                debug!("checksum {checksum}: no match below {}", self.config.prefix_bound);
                Err(CrackError::NotFound {
                    checksum,
                    bound: self.config.prefix_bound,
                })
            }
            Search::Interrupted(next) => Err(CrackError::Interrupted { checksum, next }),
        }
    }

    /// Tries each of `prefixes` in order.
    fn search<I: Interrupt + ?Sized>(
        &self,
        unwound: Unwound,
        prefixes: Prefixes,
        interrupt: &I,
    ) -> Search {
        let first = unwound.first();
        let rest = unwound.rest();
        for (tried, prefix) in (0u64..).zip(prefixes) {
            if tried % POLL_INTERVAL == 0 && interrupt.is_raised() {
                return Search::Interrupted(prefix.value());
            }
            let mut hasher = self.table.hasher();
            hasher.update(prefix.digits());
            if hasher.last_index() != Some(first) {
                continue;
            }
            match suffix::validate(self.table, hasher.register(), rest) {
                Some(digits) => {
                    let mut id = String::with_capacity(prefix.digits().len() + SUFFIX_LEN);
                    id.extend(prefix.digits().iter().chain(&digits).map(|b| *b as char));
                    return Search::Found(id);
                }
                None => trace!("prefix {prefix} passes the filter, rejected by its suffix"),
            }
        }
        Search::Exhausted
    }
}

/// The outcome of a run over prefixes.
enum Search {
    Found(String),
    Exhausted,
    /// Holds the first prefix not tried.
    Interrupted(u64),
}

/// Recovers the identifier whose checksum is `checksum` with the standard table and the default
/// configuration.
pub fn crack(checksum: Checksum) -> Result<String, CrackError> {
    Cracker::standard().crack(checksum)
}
