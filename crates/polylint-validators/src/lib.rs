//! Polylint Validators: admission checks for proposed file-system actions
//!
//! A host hands each validator a JSON call envelope `[path, index, payload]`
//! describing an action it is about to take (editing a path, writing a whole
//! file, writing one line) and gets back `{"value": <bool>}`. `true` admits
//! the action, `false` rejects it. Validators are pure: the verdict depends
//! on the envelope alone, so any number of calls may run concurrently.
//!
//! ```rust
//! use polylint_validators::{ValidatorKind, ValidatorSet};
//!
//! let set = ValidatorSet::standard();
//! let out = set.call(ValidatorKind::Path, r#"["src/main.py", 0, ""]"#).unwrap();
//! assert_eq!(out, r#"{"value":true}"#);
//! ```

mod envelope;
mod error;
mod registry;
mod validators;


pub mod ffi;

pub use envelope::{Envelope, Verdict};
pub use error::{Error, Result};
pub use registry::{Scope, Validator, ValidatorKind, ValidatorSet};
pub use validators::{
    call_file_content_validator, call_line_validator, call_path_validator,
    file_content_validator, line_validator, path_validator,
};
