//! Call envelope and verdict codec
//!
//! The wire shapes are fixed: the host sends a three element JSON array
//! `[path, index, payload]` and reads back an object with a single `value`
//! key. Both are decoded into typed values at the edge so validators never
//! see raw strings.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Positional wire form of an [`Envelope`].
type EnvelopeWire = (String, i64, String);

/// The `(path, index, payload)` triple supplied with every validator call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EnvelopeWire", into = "EnvelopeWire")]
pub struct Envelope {
    /// Path of the file the action touches
    pub path: String,
    /// Opaque ordinal from the host, `-1` for whole-file and path checks
    pub index: i64,
    /// Validator specific: path context, full file content, or one line
    pub payload: String,
}

impl Envelope {
    /// Create a new envelope.
    pub fn new(path: impl Into<String>, index: i64, payload: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            index,
            payload: payload.into(),
        }
    }

    /// Decode an envelope from the host's JSON input.
    ///
    /// Anything other than a `[string, integer, string]` array is rejected;
    /// there is no fallback verdict for malformed input.
    pub fn decode(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(Error::Decode)
    }

    /// Encode this envelope the way a host sends it.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Encode)
    }
}

impl From<EnvelopeWire> for Envelope {
    fn from((path, index, payload): EnvelopeWire) -> Self {
        Self {
            path,
            index,
            payload,
        }
    }
}

impl From<Envelope> for EnvelopeWire {
    fn from(envelope: Envelope) -> Self {
        (envelope.path, envelope.index, envelope.payload)
    }
}

/// The admission decision returned for a single call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Verdict {
    /// `true` admits the action, `false` rejects it
    pub value: bool,
}

impl Verdict {
    /// The action is admitted.
    pub const ADMIT: Verdict = Verdict { value: true };
    /// The action is rejected, or no policy admits it.
    pub const DENY: Verdict = Verdict { value: false };

    /// Returns true if the action is admitted.
    pub fn is_admitted(&self) -> bool {
        self.value
    }

    /// Encode as `{"value":true}` or `{"value":false}`.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Encode)
    }

    /// Decode a verdict returned by a validator.
    pub fn decode(output: &str) -> Result<Self> {
        serde_json::from_str(output).map_err(Error::MalformedVerdict)
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        Self { value }
    }
}
