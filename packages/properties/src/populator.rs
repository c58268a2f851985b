//! Populates config instances from properties files.

use confreg_core::{Error, FileIo, Format, LocalFiles, Populator, Result, Value};
use serde_json::{Map, Number};

use crate::text::Properties;

const HEADER: &str = "Generated by confreg";

/// The properties-backed [`Populator`].
///
/// Only top-level fields the instance already has are assigned; each value is
/// coerced to the kind of the field's current value. Unknown keys are
/// ignored. Nested structures round-trip as JSON text.
///
/// `null` always means an absent value. Strings that would read back as
/// some other JSON value (`42`, `true`, `null`, `"x"`) are written quoted, and
/// a quoted value is unquoted again on load.
#[derive(Debug, Clone, Default)]
pub struct PropertiesPopulator<F = LocalFiles> {
    files: F,
}

impl PropertiesPopulator<LocalFiles> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FileIo> PropertiesPopulator<F> {
    /// Read and write through `files` instead of the local filesystem.
    pub fn with_files(files: F) -> Self {
        PropertiesPopulator { files }
    }

    pub fn files(&self) -> &F {
        &self.files
    }
}

fn fields_of(instance: Value, operation: &str) -> Result<Map<String, Value>> {
    match instance {
        Value::Object(fields) => Ok(fields),
        other => Err(Error::decode(
            Format::PROPERTIES,
            format!(
                "cannot {} properties for a non-struct value: {}",
                operation, other
            ),
        )),
    }
}

/// Convert `raw` to the JSON kind of `current`.
fn coerce(key: &str, current: &Value, raw: &str) -> Result<Value> {
    let invalid = |expected: &str| {
        Error::decode(
            Format::PROPERTIES,
            format!("property '{}': expected {}, found '{}'", key, expected, raw),
        )
    };

    if raw.trim() == "null" {
        return Ok(Value::Null);
    }

    match current {
        Value::String(_) => Ok(match serde_json::from_str::<Value>(raw) {
            Ok(quoted @ Value::String(_)) => quoted,
            _ => Value::String(raw.to_string()),
        }),
        Value::Bool(_) => match raw.trim() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(invalid("a boolean")),
        },
        Value::Number(n) if n.is_f64() => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| invalid("a number")),
        Value::Number(_) => {
            let trimmed = raw.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                Ok(Value::from(i))
            } else if let Ok(u) = trimmed.parse::<u64>() {
                Ok(Value::from(u))
            } else {
                Err(invalid("an integer"))
            }
        }
        Value::Array(_) | Value::Object(_) => {
            serde_json::from_str(raw).map_err(|e| invalid(&format!("JSON ({})", e)))
        }
        Value::Null => {
            Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
        }
    }
}

/// Text that reads back as JSON in any slot must be quoted to stay a string.
fn render_string(s: &str) -> Result<String> {
    if serde_json::from_str::<Value>(s).is_err() {
        return Ok(s.to_string());
    }
    serde_json::to_string(s).map_err(|e| Error::encode(Format::PROPERTIES, e))
}

fn render(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => render_string(s),
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).map_err(|e| Error::encode(Format::PROPERTIES, e))
        }
    }
}

impl<F: FileIo> Populator for PropertiesPopulator<F> {
    fn populate(&self, path: &str, instance: Value) -> Result<Value> {
        let mut fields = fields_of(instance, "populate")?;
        let properties = Properties::parse(&self.files.read(path)?)?;

        let mut assigned = 0usize;
        for (key, raw) in properties {
            match fields.get_mut(&key) {
                Some(slot) => {
                    *slot = coerce(&key, slot, &raw)?;
                    assigned += 1;
                }
                None => tracing::trace!(path, key = %key, "ignoring unknown property"),
            }
        }
        tracing::debug!(path, assigned, "populated from properties");

        Ok(Value::Object(fields))
    }

    fn write_out(&self, path: &str, instance: &Value) -> Result<()> {
        let Value::Object(fields) = instance else {
            return Err(Error::encode(
                Format::PROPERTIES,
                format!("cannot write properties for a non-struct value: {}", instance),
            ));
        };

        let mut properties = Properties::new();
        for (key, value) in fields {
            properties.insert(key.clone(), render(value)?);
        }
        self.files.write(path, &properties.to_text(Some(HEADER)))
    }
}
