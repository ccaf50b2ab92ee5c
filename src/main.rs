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

//! Main of the `uidcrack` command.

mod crack;
mod hash;
mod signal;

use std::env;
use std::fmt;
use std::process::exit;

/// Prints the command line usage on the standard error output.
fn print_usage() {
    eprintln!("Usage:");
    eprintln!(" uidcrack crack [-b bound] [-t seconds] [-j jobs] [checksum...]");
    eprintln!(" uidcrack hash [-r] id...");
    eprintln!();
    eprintln!("Recovers numeric identifiers from their CRC32.");
    eprintln!();
    eprintln!("Commands:");
    eprintln!(" crack\trecover the identifiers of the given checksums, or of each line of stdin");
    eprintln!(" hash\tprint the checksum of each identifier");
}

/// Writes an error to stderr, then exits.
pub fn error<M: fmt::Display>(bin: &str, msg: M) -> ! {
    eprintln!("{bin}: error: {msg}");
    exit(1);
}

fn setup_logger() {
    let filters = env::var("RUST_LOG")
        .unwrap_or_else(|_| concat!(env!("CARGO_CRATE_NAME"), "=info,crc32rev=info").to_owned());
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&filters)
        .init();
}

fn main() {
    setup_logger();
    let mut args = env::args_os();
    args.next();
    let Some(cmd) = args.next() else {
        print_usage();
        exit(1);
    };
    match cmd.to_str() {
        Some("crack") => crack::main(args),
        Some("hash") => hash::main(args),
        Some("-h" | "--help") => print_usage(),
        _ => {
            print_usage();
            error(
                "uidcrack",
                format_args!("invalid command `{}`", cmd.to_string_lossy()),
            );
        }
    }
}
