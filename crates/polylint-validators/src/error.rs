//! Errors raised at the host/validator boundary

use thiserror::Error;

use crate::registry::ValidatorKind;

/// Errors that can occur while handling a validator call.
///
/// Validator bodies are total and never fail; every variant here comes from
/// decoding, encoding, or resolving which validator to run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not a `[string, integer, string]` JSON array
    #[error("malformed call envelope: {0}")]
    Decode(#[source] serde_json::Error),
    /// A validator's output was not `{"value": <bool>}`
    #[error("malformed verdict: {0}")]
    MalformedVerdict(#[source] serde_json::Error),
    /// A value could not be serialized
    #[error("failed to encode: {0}")]
    Encode(#[source] serde_json::Error),
    /// The host asked for a validator name that does not exist
    #[error("unknown validator: {0}")]
    UnknownValidator(String),
    /// The validator exists but this set has nothing registered for it
    #[error("no validator registered for {0}")]
    NotRegistered(ValidatorKind),
}

/// Result alias for validator calls.
pub type Result<T, E = Error> = std::result::Result<T, E>;
