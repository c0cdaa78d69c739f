use serde::Serialize;

use crate::Result;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Serialize any lookup result to JSON
pub fn convert_to_json<T: Serialize + ?Sized>(value: &T, config: &JsonConfig) -> Result<String> {
    if config.pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        convert_to_json(value, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrase::PhraseScrapeResult;
    use crate::ruby::SentencePiece;

    #[test]
    fn test_compact_json() {
        let piece = SentencePiece { lifted: "くるま".to_string(), unlifted: "車".to_string() };
        let json = convert_to_json(&piece, &JsonConfig::default()).unwrap();
        assert_eq!(json, r#"{"lifted":"くるま","unlifted":"車"}"#);
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new(JsonConfig { pretty: true });
        let json = formatter.convert(&PhraseScrapeResult::not_found("車")).unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains(r#""found": false"#));
    }
}
