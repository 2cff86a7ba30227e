//! Structured formats backed by serde

use super::registry::{FormatError, Formatter};
use crate::gift::ast::Document;

/// Pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut out = serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    fn description(&self) -> &str {
        "Document as pretty-printed JSON"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Document as YAML"
    }
}
