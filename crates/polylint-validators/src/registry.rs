//! The validator set: a fixed registry of named decision functions.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::envelope::{Envelope, Verdict};
use crate::error::{Error, Result};
use crate::validators;

/// The resource class a validator decides on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The path of the file being touched
    Path,
    /// The full candidate content of a file
    File,
    /// A single candidate line
    Line,
}

/// Identifies one of the exported validators.
///
/// The host addresses validators by name; resolving the name into this enum
/// up front means a typo fails loudly instead of silently matching nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValidatorKind {
    /// `path_validator`
    #[serde(rename = "path_validator")]
    Path,
    /// `file_content_validator`
    #[serde(rename = "file_content_validator")]
    FileContent,
    /// `line_validator`
    #[serde(rename = "line_validator")]
    Line,
}

impl ValidatorKind {
    /// Every exported validator, in export order.
    pub const ALL: [ValidatorKind; 3] = [
        ValidatorKind::Path,
        ValidatorKind::FileContent,
        ValidatorKind::Line,
    ];

    /// The exact name the host uses to look this validator up.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorKind::Path => "path_validator",
            ValidatorKind::FileContent => "file_content_validator",
            ValidatorKind::Line => "line_validator",
        }
    }

    /// The resource class this validator decides on.
    pub fn scope(&self) -> Scope {
        match self {
            ValidatorKind::Path => Scope::Path,
            ValidatorKind::FileContent => Scope::File,
            ValidatorKind::Line => Scope::Line,
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidatorKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        ValidatorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| Error::UnknownValidator(name.to_string()))
    }
}

/// A pure admission check over a decoded call envelope.
///
/// Implementations must be total and stateless: the same envelope always
/// yields the same verdict, and "no opinion" is expressed as
/// [`Verdict::DENY`], never as a panic.
pub trait Validator: Send + Sync {
    /// Decide whether the action described by `envelope` is admitted.
    fn validate(&self, envelope: &Envelope) -> Verdict;
}

impl<F> Validator for F
where
    F: Fn(&Envelope) -> Verdict + Send + Sync,
{
    fn validate(&self, envelope: &Envelope) -> Verdict {
        self(envelope)
    }
}

/// A mapping from validator name to decision function.
///
/// Built once and then only read, so a single set can be shared across
/// threads and called concurrently.
#[derive(Clone)]
pub struct ValidatorSet {
    validators: BTreeMap<ValidatorKind, Arc<dyn Validator>>,
}

impl fmt::Debug for ValidatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorSet")
            .field("validators", &self.validators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for ValidatorSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl ValidatorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            validators: BTreeMap::new(),
        }
    }

    /// The set exported to hosts: path, file content and line validators.
    pub fn standard() -> Self {
        Self::new()
            .register(ValidatorKind::Path, validators::path_validator)
            .register(ValidatorKind::FileContent, validators::file_content_validator)
            .register(ValidatorKind::Line, validators::line_validator)
    }

    /// Register `validator` under `kind`, replacing any previous entry.
    pub fn register(mut self, kind: ValidatorKind, validator: impl Validator + 'static) -> Self {
        self.validators.insert(kind, Arc::new(validator));
        self
    }

    /// Look up the validator registered under `kind`.
    pub fn get(&self, kind: ValidatorKind) -> Option<&dyn Validator> {
        self.validators.get(&kind).map(|v| &**v)
    }

    /// The registered kinds, in export order.
    pub fn kinds(&self) -> impl Iterator<Item = ValidatorKind> + '_ {
        self.validators.keys().copied()
    }

    /// Number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Run the validator for `kind` on an already decoded envelope.
    pub fn validate(&self, kind: ValidatorKind, envelope: &Envelope) -> Result<Verdict> {
        let validator = self.get(kind).ok_or(Error::NotRegistered(kind))?;
        let verdict = validator.validate(envelope);
        tracing::debug!(
            validator = %kind,
            path = %envelope.path,
            index = envelope.index,
            admitted = verdict.value,
            "validator verdict"
        );
        Ok(verdict)
    }

    /// Handle one host call: decode the input, validate, encode the verdict.
    pub fn call(&self, kind: ValidatorKind, input: &str) -> Result<String> {
        let envelope = Envelope::decode(input).inspect_err(|e| {
            tracing::warn!(validator = %kind, "rejecting call: {}", e);
        })?;
        self.validate(kind, &envelope)?.encode()
    }

    /// Like [`call`](Self::call), resolving the validator by its exported name.
    pub fn call_by_name(&self, name: &str, input: &str) -> Result<String> {
        self.call(name.parse()?, input)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ValidatorKind::ALL {
            assert_eq!(kind.as_str().parse::<ValidatorKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_unknown_kind_name() {
        let err = "path-validator".parse::<ValidatorKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownValidator(ref name) if name == "path-validator"));
        assert!("".parse::<ValidatorKind>().is_err());
        assert!("Path_Validator".parse::<ValidatorKind>().is_err());
    }

    #[test]
    fn test_kind_serde_uses_exported_name() {
        assert_eq!(
            serde_json::to_string(&ValidatorKind::FileContent).unwrap(),
            r#""file_content_validator""#
        );
        let kind: ValidatorKind = serde_json::from_str(r#""line_validator""#).unwrap();
        assert_eq!(kind, ValidatorKind::Line);
    }

    #[test]
    fn test_kind_scope() {
        assert_eq!(ValidatorKind::Path.scope(), Scope::Path);
        assert_eq!(ValidatorKind::FileContent.scope(), Scope::File);
        assert_eq!(ValidatorKind::Line.scope(), Scope::Line);
    }

    #[test]
    fn test_standard_set_has_all_kinds() {
        let set = ValidatorSet::standard();
        assert_eq!(set.len(), 3);
        assert_eq!(set.kinds().collect::<Vec<_>>(), ValidatorKind::ALL.to_vec());
    }

    #[test]
    fn test_empty_set() {
        let set = ValidatorSet::new();
        assert!(set.is_empty());
        let err = set
            .validate(ValidatorKind::Path, &Envelope::new("a.py", 0, ""))
            .unwrap_err();
        assert!(matches!(err, Error::NotRegistered(ValidatorKind::Path)));
    }

    #[test]
    fn test_register_replaces_entry() {
        let set = ValidatorSet::standard()
            .register(ValidatorKind::Line, |e: &Envelope| {
                Verdict::from(!e.payload.contains("print("))
            });
        assert_eq!(set.len(), 3);

        let out = set.call(ValidatorKind::Line, r#"["a.py", 1, "x = 1"]"#).unwrap();
        assert_eq!(out, r#"{"value":true}"#);
        let out = set.call(ValidatorKind::Line, r#"["a.py", 2, "print(x)"]"#).unwrap();
        assert_eq!(out, r#"{"value":false}"#);
    }

    #[test]
    fn test_call_by_name() {
        let set = ValidatorSet::standard();
        let out = set
            .call_by_name("path_validator", r#"["src/main.py", 0, ""]"#)
            .unwrap();
        assert_eq!(out, r#"{"value":true}"#);

        let err = set
            .call_by_name("content_validator", r#"["src/main.py", 0, ""]"#)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownValidator(_)));
    }

    #[test]
    fn test_call_propagates_decode_failure() {
        let set = ValidatorSet::standard();
        for kind in ValidatorKind::ALL {
            let err = set.call(kind, r#"["a.py", 0]"#).unwrap_err();
            assert!(matches!(err, Error::Decode(_)), "{kind}: {err}");
        }
    }

    #[test]
    fn test_debug_lists_kinds() {
        let debug = format!("{:?}", ValidatorSet::standard());
        assert!(debug.contains("FileContent"), "{debug}");
    }
}
