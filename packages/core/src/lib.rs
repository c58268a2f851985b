//! confreg core: descriptors, capabilities and path resolution
//!
//! This layer holds everything the registry needs that is not orchestration:
//! - `Format`: properties or JSON (or an unrecognized hint)
//! - `Descriptor`: static per-type storage metadata
//! - `Config`: the trait every persisted type implements
//! - `FormatCodec`, `Populator`, `FileIo`: capabilities the registry calls into
//! - `PathResolver`: one cached path per type
//!
//! # Example
//!
//! ```rust
//! use confreg_core::{Config, Descriptor, InstantiationError, PathResolver};
//! use serde::{Deserialize, Serialize};
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
//! let mut resolver = PathResolver::new("./data/");
//! assert_eq!(resolver.resolve::<Prefs>(), "./data/Prefs.json");
//! ```

mod config;
mod descriptor;
mod error;
mod files;
mod format;
mod path;
mod traits;

pub use config::{format_of, package_qualified_name, simple_name, Config};
pub use descriptor::Descriptor;
pub use error::{Error, InstantiationError, Result};
pub use files::{LocalFiles, MemoryFiles};
pub use format::Format;
pub use path::{resolve_path, PathResolver};
pub use traits::{FieldConverter, FileIo, FormatCodec, Populator};

// Re-export the value tree that crosses capability boundaries
pub use serde_json::Value;
