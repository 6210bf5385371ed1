//! External cancel / reset signals, e.g., a push button.

use std::sync::atomic::{AtomicBool, Ordering};

/// A boolean input sampled once per generation.
///
/// When it is asserted, the current run stops early.
pub trait CancelSignal {
    /// Whether the signal is asserted right now.
    fn is_asserted(&mut self) -> bool;
}

/// A signal that is never asserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Never;

impl CancelSignal for Never {
    fn is_asserted(&mut self) -> bool {
        false
    }
}

impl<F: FnMut() -> bool> CancelSignal for F {
    fn is_asserted(&mut self) -> bool {
        self()
    }
}

/// Asserted while the flag is set.
impl CancelSignal for &AtomicBool {
    fn is_asserted(&mut self) -> bool {
        self.load(Ordering::Relaxed)
    }
}
