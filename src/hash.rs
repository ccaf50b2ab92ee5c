//! The `hash` command prints the checksum of identifiers, as comment records expose them.

use crate::error;
use crc32rev::{Checksum, CrcTable, Finalize};
use std::env::ArgsOs;

pub fn main(args: ArgsOs) {
    let mut raw = false;
    let mut ids = Vec::new();
    for arg in args {
        match arg.to_str() {
            Some("-r" | "--raw") => raw = true,
            Some(s) if !s.starts_with('-') => ids.push(s.to_owned()),
            _ => error(
                "hash",
                format_args!("invalid argument `{}`", arg.to_string_lossy()),
            ),
        }
    }
    if ids.is_empty() {
        error("hash", "no identifier given");
    }
    for id in ids {
        if raw {
            let register = CrcTable::standard().checksum(id.as_bytes(), Finalize::No);
            println!("{register:08x}\t{id}");
        } else {
            println!("{}\t{id}", Checksum::of(&id));
        }
    }
}
