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

//! The `crack` command recovers identifiers from the checksums exposed by comment records.

use crate::{error, signal};
use crc32rev::batch::crack_all;
use crc32rev::{Checksum, CrcTable, Cracker, DEFAULT_PREFIX_BOUND, Deadline, SearchConfig};
use log::info;
use rayon::ThreadPoolBuilder;
use std::env::ArgsOs;
use std::io;
use std::io::BufRead;
use std::process::exit;
use std::str::FromStr;
use std::time::Duration;

/// Input arguments.
struct Args {
    /// The exclusive upper bound of the prefixes to try.
    bound: u64,
    /// The time after which every search still running is abandoned.
    timeout: Option<Duration>,
    /// The number of threads. If `None`, rayon's default is used.
    jobs: Option<usize>,
    /// The checksums to solve. If empty, they are read from stdin.
    checksums: Vec<String>,
}

/// Returns the value following the option `opt`, parsed.
fn option_value<T: FromStr>(args: &mut ArgsOs, opt: &str) -> T {
    let Some(val) = args.next() else {
        error("crack", format_args!("a value must follow `{opt}`"));
    };
    val.to_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            error(
                "crack",
                format_args!("invalid value `{}` for `{opt}`", val.to_string_lossy()),
            )
        })
}

/// Parses arguments from the given array.
fn parse_args(mut args: ArgsOs) -> Args {
    let mut res = Args {
        bound: DEFAULT_PREFIX_BOUND,
        timeout: None,
        jobs: None,
        checksums: Vec::new(),
    };
    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some("-b" | "--bound") => res.bound = option_value(&mut args, "-b"),
            Some("-t" | "--timeout") => {
                let secs: f64 = option_value(&mut args, "-t");
                let timeout = Duration::try_from_secs_f64(secs).unwrap_or_else(|e| {
                    error("crack", format_args!("invalid timeout: {e}"));
                });
                res.timeout = Some(timeout);
            }
            Some("-j" | "--jobs") => res.jobs = Some(option_value(&mut args, "-j")),
            Some(s) if !s.starts_with('-') => res.checksums.push(s.to_owned()),
            _ => error(
                "crack",
                format_args!("invalid argument `{}`", arg.to_string_lossy()),
            ),
        }
    }
    res
}

/// Reads one checksum per line, ignoring blank lines.
///
/// Invalid UTF-8 is replaced rather than rejected, so that the line fails to parse as a checksum
/// and gets reported along with the other invalid records.
fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        let line = String::from_utf8_lossy(&line?).into_owned();
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

pub fn main(args: ArgsOs) {
    let mut args = parse_args(args);
    if args.checksums.is_empty() {
        args.checksums = read_lines(io::stdin().lock())
            .unwrap_or_else(|e| error("crack", format_args!("stdin: {e}")));
    }
    let parsed: Vec<_> = args
        .checksums
        .iter()
        .map(|s| Checksum::from_str(s))
        .collect();
    let valid: Vec<_> = parsed.iter().filter_map(|c| c.as_ref().ok().copied()).collect();

    let config = SearchConfig::default().with_prefix_bound(args.bound);
    let cracker = Cracker::new(CrcTable::standard(), config);
    if let Some(len) = cracker.config().max_id_len() {
        info!("searching identifiers of up to {len} digits");
    }
    let interrupt = (signal::install(), args.timeout.and_then(Deadline::after));
    let results = match args.jobs {
        Some(jobs) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .unwrap_or_else(|e| error("crack", format_args!("cannot start threads: {e}")));
            pool.install(|| crack_all(&cracker, &valid, &interrupt))
        }
        None => crack_all(&cracker, &valid, &interrupt),
    };

    // Print results in input order, invalid input included
    let mut results = results.into_iter();
    let mut failed = false;
    for (input, checksum) in args.checksums.iter().zip(parsed) {
        let checksum = match checksum {
            Ok(c) => c,
            Err(e) => {
                eprintln!("crack: error: `{}`: {e}", input.trim());
                failed = true;
                continue;
            }
        };
        let Some(res) = results.next() else {
            break;
        };
        match res {
            Ok(id) => println!("{checksum}\t{id}"),
            Err(e) => {
                eprintln!("crack: error: {e}");
                failed = true;
            }
        }
    }
    if failed {
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_utf8_line_is_kept_as_invalid_record() {
        let input: &[u8] = b"9ae0daaf\n\xff\xfe\n\n  \ncbf43926\n";
        let lines = read_lines(input).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "9ae0daaf");
        assert!(Checksum::from_str(&lines[1]).is_err());
        assert_eq!(lines[2], "cbf43926");
    }

    #[test]
    fn no_trailing_newline() {
        let lines = read_lines(&b"beef"[..]).unwrap();
        assert_eq!(lines, ["beef"]);
    }
}
