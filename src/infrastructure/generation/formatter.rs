//! Rust source formatter backed by `syn` and `prettyplease`

use crate::generation::{GenerationError, SourceFormatter};

/// Parses rendered text as a Rust file and pretty-prints it.
///
/// Plain `//` comments do not survive the round trip; doc comments do.
pub struct RustFormatter;

impl RustFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFormatter for RustFormatter {
    fn format(&self, source: &str) -> Result<String, GenerationError> {
        let file = syn::parse_file(source).map_err(|e| {
            let start = e.span().start();
            GenerationError::Format(format!(
                "{} at line {}, column {}",
                e,
                start.line,
                start.column + 1
            ))
        })?;

        Ok(prettyplease::unparse(&file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_canonicalizes_layout() {
        let formatted = RustFormatter::new()
            .format("pub struct   OrderRegistry ;fn register( ){ let x=1;   }")
            .unwrap();

        assert!(formatted.contains("pub struct OrderRegistry;\n"));
        assert!(formatted.contains("fn register() {\n    let x = 1;\n}\n"));
    }

    #[test]
    fn test_format_is_idempotent() {
        let formatter = RustFormatter::new();
        let once = formatter
            .format(
                "use std::collections::HashMap;\n/// Registry\npub struct R{inner:HashMap<String,u32>}\nimpl R{pub fn new()->Self{Self{inner:HashMap::new()}}}",
            )
            .unwrap();
        let twice = formatter.format(&once).unwrap();

        assert_eq!(once, twice);
        assert!(once.contains("/// Registry"));
    }

    #[test]
    fn test_format_rejects_invalid_source() {
        let err = RustFormatter::new()
            .format("pub struct {\n")
            .unwrap_err();

        match err {
            GenerationError::Format(message) => assert!(message.contains("line 1")),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_format_empty_source() {
        let formatted = RustFormatter::new().format("").unwrap();
        assert!(formatted.trim().is_empty());
    }
}
