//! confreg: descriptor-driven typed configuration
//!
//! Each config type declares a static [`Descriptor`] (format plus optional
//! path hints) and a factory. The [`ConfigRegistry`] resolves one storage
//! path per type, loads the persisted state into an instance, caches it, and
//! writes it back on demand.
//!
//! Path precedence: `real_path`, then `path`, then
//! `root + TypeName + ".properties"|".json"`.
//!
//! # Example
//!
//! ```rust
//! use confreg::{Config, ConfigClass, ConfigRegistry, Descriptor, InstantiationError, MemoryFiles};
//! use confreg_json::JsonCodec;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct Window {
//!     width: u32,
//!     height: u32,
//! }
//!
//! impl Config for Window {
//!     fn instantiate() -> Result<Self, InstantiationError> {
//!         Ok(Window { width: 800, height: 600 })
//!     }
//! }
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct Prefs {
//!     volume: u8,
//! }
//!
//! impl Config for Prefs {
//!     const DESCRIPTOR: Descriptor = Descriptor::json();
//!
//!     fn instantiate() -> Result<Self, InstantiationError> {
//!         Ok(Prefs::default())
//!     }
//! }
//!
//! let files = MemoryFiles::new();
//! files.insert("conf/Window.properties", "width=1024\n");
//! files.insert("conf/Prefs.json", r#"{"volume": 7}"#);
//!
//! let mut registry = ConfigRegistry::builder()
//!     .root("conf/")
//!     .file_io(files)
//!     .format_codec(JsonCodec::new())
//!     .build();
//!
//! let report = registry.init_for_classes([ConfigClass::of::<Window>(), ConfigClass::of::<Prefs>()]);
//! assert!(report.is_success());
//!
//! let window = registry.get::<Window>().unwrap();
//! assert_eq!((window.width, window.height), (1024, 600));
//! assert_eq!(registry.get::<Prefs>().unwrap().volume, 7);
//! ```

mod builder;
mod class;
mod registry;
mod report;

pub use builder::RegistryBuilder;
pub use class::{ConfigClass, ErasedConfig};
pub use registry::{ClassState, ConfigRegistry};
pub use report::{InitFailure, InitReport};

// Re-export core types for convenience
pub use confreg_core::{
    format_of, resolve_path, Config, Descriptor, Error, FieldConverter, FileIo, Format,
    FormatCodec, InstantiationError, LocalFiles, MemoryFiles, PathResolver, Populator, Result,
    Value,
};
pub use confreg_properties::{Properties, PropertiesPopulator};
