use super::Format;
use crate::ast::ParsedLine;
use crate::error::FormatError;
use crate::options::RenderOptions;

/// Pretty-printed JSON of the classified lines and their segments.
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Classified lines and segments as JSON"
    }

    fn serialize(&self, lines: &[ParsedLine], _options: &RenderOptions) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(lines)?)
    }
}
