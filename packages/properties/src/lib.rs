//! Properties support for confreg
//!
//! - [`Properties`]: parse and render `.properties` text
//! - [`PropertiesPopulator`]: the [`Populator`](confreg_core::Populator)
//!   the registry uses for types declared with `Format::PROPERTIES`
//!
//! ```rust
//! use confreg_core::{MemoryFiles, Populator};
//! use confreg_properties::PropertiesPopulator;
//! use serde_json::json;
//!
//! let files = MemoryFiles::new();
//! files.insert("app.properties", "volume = 7\n");
//!
//! let populator = PropertiesPopulator::with_files(files);
//! let prefs = populator
//!     .populate("app.properties", json!({"volume": 0, "theme": "light"}))
//!     .unwrap();
//! assert_eq!(prefs, json!({"volume": 7, "theme": "light"}));
//! ```

mod populator;
mod text;

pub use populator::PropertiesPopulator;
pub use text::Properties;
