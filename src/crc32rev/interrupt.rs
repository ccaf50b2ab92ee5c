//! Cooperative interruption of a search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// A condition polled by the search between candidates.
///
/// Implementations must be cheap, since they may be polled many times per second.
pub trait Interrupt {
    /// Tells whether the search must stop.
    fn is_raised(&self) -> bool;
}

/// An interrupt that is never raised.
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl Interrupt for Never {
    fn is_raised(&self) -> bool {
        false
    }
}

impl Interrupt for AtomicBool {
    fn is_raised(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// An interrupt raised once a point in time has been reached.
#[derive(Clone, Copy, Debug)]
pub struct Deadline(pub Instant);

impl Deadline {
    /// Returns a deadline `d` from now, or `None` if that point in time cannot be represented.
    pub fn after(d: Duration) -> Option<Self> {
        Instant::now().checked_add(d).map(Self)
    }
}

impl Interrupt for Deadline {
    fn is_raised(&self) -> bool {
        Instant::now() >= self.0
    }
}

impl<I: Interrupt + ?Sized> Interrupt for &I {
    fn is_raised(&self) -> bool {
        (**self).is_raised()
    }
}

impl<I: Interrupt> Interrupt for Option<I> {
    fn is_raised(&self) -> bool {
        self.as_ref().is_some_and(I::is_raised)
    }
}

/// Raised when either interrupt is.
impl<A: Interrupt, B: Interrupt> Interrupt for (A, B) {
    fn is_raised(&self) -> bool {
        self.0.is_raised() || self.1.is_raised()
    }
}
