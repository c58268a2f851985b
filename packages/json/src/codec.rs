//! JSON codec implementation.

use confreg_core::{Error, Format, FormatCodec, Result, Value};

/// A codec that reads and writes JSON documents.
///
/// Output is compact by default; [`JsonCodec::pretty`] indents it for files
/// people are expected to edit by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        JsonCodec { pretty: true }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl FormatCodec for JsonCodec {
    fn decode(&self, text: &str) -> Result<Value> {
        serde_json::from_str(text).map_err(|e| Error::decode(Format::JSON, e))
    }

    fn encode(&self, value: &Value) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|e| Error::encode(Format::JSON, e))
    }
}
