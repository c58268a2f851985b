//! Capability traits: FormatCodec, Populator, FileIo, FieldConverter.
//!
//! The registry never parses or touches files itself. Instances cross these
//! boundaries as a `serde_json::Value` tree; the registry does the typed
//! conversion on either side.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;

/// Converts between a value tree and JSON text.
///
/// Malformed input must surface as [`Error::Decode`](crate::Error::Decode).
pub trait FormatCodec: Send + Sync {
    fn decode(&self, text: &str) -> Result<Value>;

    fn encode(&self, value: &Value) -> Result<String>;
}

/// Reads a key/value text file onto an existing instance, and writes an
/// instance back out.
pub trait Populator: Send + Sync {
    /// Assign the fields found in the file at `path` onto `instance`.
    ///
    /// Returns the populated instance, which may be a different tree than
    /// the one passed in.
    fn populate(&self, path: &str, instance: Value) -> Result<Value>;

    fn write_out(&self, path: &str, instance: &Value) -> Result<()>;
}

/// Whole-file text I/O.
///
/// Implementations must not hold handles open across calls.
pub trait FileIo: Send + Sync {
    fn read(&self, path: &str) -> Result<String>;

    fn write(&self, path: &str, content: &str) -> Result<()>;
}

/// Captures the state of a live component as a config value, and restores it.
///
/// ```rust
/// use confreg_core::FieldConverter;
///
/// struct Slider {
///     position: u8,
/// }
///
/// struct SliderState;
///
/// impl FieldConverter<Slider, u8> for SliderState {
///     fn config_of(&self, target: &Slider) -> u8 {
///         target.position
///     }
///
///     fn restore(&self, target: &mut Slider, state: u8) {
///         target.position = state;
///     }
/// }
///
/// let mut slider = Slider { position: 3 };
/// let saved = SliderState.config_of(&slider);
/// slider.position = 9;
/// SliderState.restore(&mut slider, saved);
/// assert_eq!(slider.position, 3);
/// ```
pub trait FieldConverter<T, C> {
    fn config_of(&self, target: &T) -> C;

    fn restore(&self, target: &mut T, state: C);
}

// Blanket implementations for boxes and shared handles

impl<T: FormatCodec + ?Sized> FormatCodec for Box<T> {
    fn decode(&self, text: &str) -> Result<Value> {
        self.as_ref().decode(text)
    }

    fn encode(&self, value: &Value) -> Result<String> {
        self.as_ref().encode(value)
    }
}

impl<T: Populator + ?Sized> Populator for Box<T> {
    fn populate(&self, path: &str, instance: Value) -> Result<Value> {
        self.as_ref().populate(path, instance)
    }

    fn write_out(&self, path: &str, instance: &Value) -> Result<()> {
        self.as_ref().write_out(path, instance)
    }
}

impl<T: FileIo + ?Sized> FileIo for Box<T> {
    fn read(&self, path: &str) -> Result<String> {
        self.as_ref().read(path)
    }

    fn write(&self, path: &str, content: &str) -> Result<()> {
        self.as_ref().write(path, content)
    }
}

impl<T: FileIo + ?Sized> FileIo for Arc<T> {
    fn read(&self, path: &str) -> Result<String> {
        self.as_ref().read(path)
    }

    fn write(&self, path: &str, content: &str) -> Result<()> {
        self.as_ref().write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Format};

    struct UpperCodec;

    impl FormatCodec for UpperCodec {
        fn decode(&self, text: &str) -> Result<Value> {
            Ok(Value::String(text.to_lowercase()))
        }

        fn encode(&self, value: &Value) -> Result<String> {
            match value {
                Value::String(s) => Ok(s.to_uppercase()),
                other => Err(Error::encode(Format::JSON, format!("not a string: {}", other))),
            }
        }
    }

    #[test]
    fn boxed_codec_is_object_safe() {
        let codec: Box<dyn FormatCodec> = Box::new(UpperCodec);
        assert_eq!(codec.encode(&Value::from("abc")).unwrap(), "ABC");
        assert_eq!(codec.decode("ABC").unwrap(), Value::from("abc"));
        assert!(codec.encode(&Value::from(1)).is_err());
    }
}
