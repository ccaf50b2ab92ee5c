//! Interruption of running searches with `SIGINT`.

use libc::{SIG_ERR, SIGINT, c_int, sighandler_t};
use log::warn;
use std::sync::atomic::{AtomicBool, Ordering};

/// Raised once `SIGINT` has been received.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

extern "C" fn on_interrupt(_: c_int) {
    INTERRUPTED.store(true, Ordering::Relaxed);
}

/// Installs the `SIGINT` handler, then returns the flag it raises.
///
/// If the handler cannot be installed, the flag is never raised and `SIGINT` keeps its default
/// behaviour.
pub fn install() -> &'static AtomicBool {
    let handler = on_interrupt as extern "C" fn(c_int);
    let prev = unsafe { libc::signal(SIGINT, handler as sighandler_t) };
    if prev == SIG_ERR {
        warn!("cannot install SIGINT handler");
    }
    &INTERRUPTED
}
