//! Format hints for persisted configuration.

use std::borrow::Cow;
use std::fmt;

/// The on-disk format of a config type.
///
/// Two formats are understood by the registry: [`Format::PROPERTIES`]
/// (key/value text) and [`Format::JSON`]. Any other string is carried through
/// as an unrecognized format: paths synthesized for it get no extension and
/// load/save report it as unsupported.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Format(pub Cow<'static, str>);

impl Format {
    /// Key/value properties text (`text/x-java-properties`)
    pub const PROPERTIES: Format = Format(Cow::Borrowed("text/x-java-properties"));

    /// JSON document (`application/json`)
    pub const JSON: Format = Format(Cow::Borrowed("application/json"));

    /// Create a format from a static string.
    pub const fn from_static(s: &'static str) -> Self {
        Format(Cow::Borrowed(s))
    }

    /// Create a format from an owned string.
    pub fn new(s: impl Into<String>) -> Self {
        Format(Cow::Owned(s.into()))
    }

    /// Get the format string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_properties(&self) -> bool {
        self == &Self::PROPERTIES
    }

    pub fn is_json(&self) -> bool {
        self == &Self::JSON
    }

    /// File extension appended during default path synthesis.
    ///
    /// `None` for unrecognized formats.
    pub fn extension(&self) -> Option<&'static str> {
        if self.is_properties() {
            Some(".properties")
        } else if self.is_json() {
            Some(".json")
        } else {
            None
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::PROPERTIES
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&'static str> for Format {
    fn from(s: &'static str) -> Self {
        Format(Cow::Borrowed(s))
    }
}

impl From<String> for Format {
    fn from(s: String) -> Self {
        Format(Cow::Owned(s))
    }
}

impl AsRef<str> for Format {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_work() {
        assert_eq!(Format::JSON.as_str(), "application/json");
        assert!(Format::JSON.is_json());
        assert!(!Format::JSON.is_properties());
        assert!(Format::PROPERTIES.is_properties());
    }

    #[test]
    fn default_is_properties() {
        assert_eq!(Format::default(), Format::PROPERTIES);
    }

    #[test]
    fn extensions() {
        assert_eq!(Format::PROPERTIES.extension(), Some(".properties"));
        assert_eq!(Format::JSON.extension(), Some(".json"));
        assert_eq!(Format::from_static("application/toml").extension(), None);
    }

    #[test]
    fn owned_and_borrowed_compare_equal() {
        assert_eq!(Format::JSON, Format::new("application/json".to_string()));
        assert!(Format::from("application/json").is_json());
    }

    #[test]
    fn display_impl() {
        assert_eq!(format!("{}", Format::PROPERTIES), "text/x-java-properties");
    }
}
