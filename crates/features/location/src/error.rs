use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`LocationError`] enum of this crate.
#[derive(Debug, Error)]
pub enum LocationError {
    /// Internal fallback for unexpected issues or logic errors.
    #[error("internal location feature error: {message}")]
    Internal { message: Cow<'static, str> },
}
