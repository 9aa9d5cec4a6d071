//! Error taxonomy for the calculators.

use thiserror::Error;

/// Errors returned by [`crate::core`] operations.
///
/// Both variants indicate a programming error in the caller: the fixed inputs
/// used by the CLI never produce them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No fuel efficiency entry exists for the requested speed.
    #[error("no fuel efficiency entry for {speed} mph")]
    Lookup { speed: u32 },
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
