use serde_json::Value;
use tracing::debug;

use crate::{error::IntakeError, file_parsers::FileParser};

pub mod types;

use types::SourceDocument;

const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];

/// Reads an uploaded Piwik PRO container export
pub struct PiwikParser;

impl FileParser for PiwikParser {
    type Output = SourceDocument;
    type Error = IntakeError;

    fn parse(&self, bytes: &[u8]) -> Result<Self::Output, Self::Error> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let contents = std::str::from_utf8(bytes)?;

        let value: Value = serde_json::from_str(contents)?;
        if !value.is_object() {
            return Err(IntakeError::NotAnObject {
                found: json_kind(&value),
            });
        }

        let document: SourceDocument = serde_json::from_value(value)?;
        debug!(
            triggers = document.triggers.len(),
            tags = document.tags.len(),
            variables = document.variables.len(),
            "Parsed source document"
        );

        Ok(document)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
