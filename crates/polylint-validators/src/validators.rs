//! The exported validator bodies.

use std::sync::LazyLock;

use crate::envelope::{Envelope, Verdict};
use crate::error::Result;
use crate::registry::{ValidatorKind, ValidatorSet};

static STANDARD: LazyLock<ValidatorSet> = LazyLock::new(ValidatorSet::standard);

/// Admits actions whose path contains `.py` anywhere.
///
/// This is substring containment, not an extension check: `foo.pyx` and
/// `notes.py.bak` are admitted too.
pub fn path_validator(envelope: &Envelope) -> Verdict {
    Verdict::from(envelope.path.contains(".py"))
}

/// Denies every whole-file write.
///
/// No content policy exists yet; denial is the conservative default that
/// callers composing verdicts rely on.
pub fn file_content_validator(_envelope: &Envelope) -> Verdict {
    Verdict::DENY
}

/// Denies every single-line write. Same pending policy as
/// [`file_content_validator`].
pub fn line_validator(_envelope: &Envelope) -> Verdict {
    Verdict::DENY
}

/// String-in/string-out entry point for `path_validator`.
pub fn call_path_validator(input: &str) -> Result<String> {
    STANDARD.call(ValidatorKind::Path, input)
}

/// String-in/string-out entry point for `file_content_validator`.
pub fn call_file_content_validator(input: &str) -> Result<String> {
    STANDARD.call(ValidatorKind::FileContent, input)
}

/// String-in/string-out entry point for `line_validator`.
pub fn call_line_validator(input: &str) -> Result<String> {
    STANDARD.call(ValidatorKind::Line, input)
}
