//! Registry construction.

use std::sync::Arc;

use confreg_core::{FileIo, FormatCodec, LocalFiles, Populator};
use confreg_properties::PropertiesPopulator;

use crate::registry::ConfigRegistry;

/// Builds a [`ConfigRegistry`].
///
/// Defaults: empty root path, [`LocalFiles`], a [`PropertiesPopulator`] over
/// the same file I/O, and no format codec.
///
/// ```rust
/// use confreg::{ConfigRegistry, MemoryFiles};
///
/// let registry = ConfigRegistry::builder()
///     .root("./data/")
///     .file_io(MemoryFiles::new())
///     .build();
/// assert_eq!(registry.root(), "./data/");
/// assert!(!registry.has_format_codec());
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    root: String,
    codec: Option<Box<dyn FormatCodec>>,
    populator: Option<Box<dyn Populator>>,
    files: Option<Arc<dyn FileIo>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix for synthesized paths. Concatenated as-is, so include the
    /// trailing separator.
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Root at `<user config dir>/<app>/`, e.g. `~/.config/<app>/` on Linux.
    ///
    /// Keeps the current root if the platform has no config directory.
    pub fn user_config_root(mut self, app: &str) -> Self {
        match dirs::config_dir() {
            Some(dir) => {
                let mut root = dir.join(app).display().to_string();
                root.push(std::path::MAIN_SEPARATOR);
                self.root = root;
            }
            None => tracing::warn!(app, "no user config directory; keeping root path"),
        }
        self
    }

    pub fn format_codec(mut self, codec: impl FormatCodec + 'static) -> Self {
        self.codec = Some(Box::new(codec));
        self
    }

    pub fn populator(mut self, populator: impl Populator + 'static) -> Self {
        self.populator = Some(Box::new(populator));
        self
    }

    /// Raw file I/O for JSON, and for the default populator.
    pub fn file_io(mut self, files: impl FileIo + 'static) -> Self {
        self.files = Some(Arc::new(files));
        self
    }

    pub fn build(self) -> ConfigRegistry {
        let files: Arc<dyn FileIo> = self.files.unwrap_or_else(|| Arc::new(LocalFiles));
        let populator = self
            .populator
            .unwrap_or_else(|| Box::new(PropertiesPopulator::with_files(files.clone())));
        ConfigRegistry::from_parts(self.root, self.codec, populator, files)
    }
}
