//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Width / height / oscillation threshold should be positive.
    NonPositiveError,
    /// Width / height should be at most 4096.
    SizeError,
    /// Display brightness should be between 0 and 15, got {0}.
    BrightnessError(u8),
    /// Generation delay / timeline pause should be a finite non-negative number of seconds.
    DurationError,
    /// Unable to render a generation: {0}.
    RenderError(String),
}
