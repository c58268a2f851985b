//! Static per-type storage metadata.

use crate::format::Format;

/// Where and how a config type is persisted.
///
/// Declared once per type as [`Config::DESCRIPTOR`](crate::Config::DESCRIPTOR)
/// and never mutated. Path precedence during resolution is
/// `real_path`, then `path`, then a synthesized default.
///
/// # Example
///
/// ```rust
/// use confreg_core::{Descriptor, Format};
///
/// const PREFS: Descriptor = Descriptor::json().with_real_path("/etc/app.json");
/// assert_eq!(PREFS.format, Format::JSON);
/// assert_eq!(PREFS.real_path, Some("/etc/app.json"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub format: Format,
    /// Explicit override path. Used verbatim; wins over everything else.
    pub real_path: Option<&'static str>,
    /// Explicit relative path. Used verbatim when no `real_path` is set.
    pub path: Option<&'static str>,
    /// Synthesize the default file name from the fully qualified type name
    /// instead of the simple name.
    pub use_package_name: bool,
}

impl Descriptor {
    /// Properties format, no explicit paths, simple naming.
    pub const DEFAULT: Descriptor = Descriptor::new(Format::PROPERTIES);

    pub const fn new(format: Format) -> Self {
        Descriptor {
            format,
            real_path: None,
            path: None,
            use_package_name: false,
        }
    }

    pub const fn properties() -> Self {
        Self::new(Format::PROPERTIES)
    }

    pub const fn json() -> Self {
        Self::new(Format::JSON)
    }

    pub const fn with_real_path(mut self, real_path: &'static str) -> Self {
        self.real_path = Some(real_path);
        self
    }

    pub const fn with_path(mut self, path: &'static str) -> Self {
        self.path = Some(path);
        self
    }

    pub const fn use_package_name(mut self) -> Self {
        self.use_package_name = true;
        self
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::DEFAULT
    }
}
