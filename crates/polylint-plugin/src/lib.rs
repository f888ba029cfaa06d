//! Polylint Plugin - WASM Component
//!
//! Exports the polylint validators through the WebAssembly Component Model
//! so hosts can load them as a sandboxed plugin. The JSON calling convention
//! is unchanged; decode failures come back on the `result` error arm.

#![allow(missing_docs)] // WIT-generated code doesn't have docs

use polylint_validators::{call_file_content_validator, call_line_validator, call_path_validator};

// Generate WIT bindings for the validators world.
// This creates the `Guest` trait we need to implement.
wit_bindgen::generate!({
    path: "wit/validators.wit",
    world: "validators",
});

/// Our implementation of the validators component.
struct ValidatorsComponent;

impl Guest for ValidatorsComponent {
    fn path_validator(input: String) -> Result<String, String> {
        call_path_validator(&input).map_err(|e| e.to_string())
    }

    fn file_content_validator(input: String) -> Result<String, String> {
        call_file_content_validator(&input).map_err(|e| e.to_string())
    }

    fn line_validator(input: String) -> Result<String, String> {
        call_line_validator(&input).map_err(|e| e.to_string())
    }
}

// Export the component.
export!(ValidatorsComponent);

// ============================================================================
// Tests (run natively, not in WASM)
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_path_validator() {
        let out = ValidatorsComponent::path_validator(r#"["src/main.py", 0, ""]"#.into()).unwrap();
        assert_eq!(out, r#"{"value":true}"#);

        let out =
            ValidatorsComponent::path_validator(r#"["archive.py.bak", 3, ""]"#.into()).unwrap();
        assert_eq!(out, r#"{"value":true}"#);
    }

    #[test]
    fn test_deny_validators() {
        let out = ValidatorsComponent::file_content_validator(
            r#"["any.py", 0, "print(1)"]"#.into(),
        )
        .unwrap();
        let verdict: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(verdict, serde_json::json!({ "value": false }));

        let out = ValidatorsComponent::line_validator(r#"["any.py", 5, "x = 1"]"#.into()).unwrap();
        assert_eq!(out, r#"{"value":false}"#);
    }

    #[test]
    fn test_decode_failure_is_error() {
        let err = ValidatorsComponent::line_validator("{}".into()).unwrap_err();
        assert!(err.starts_with("malformed call envelope"), "{err}");
    }
}
