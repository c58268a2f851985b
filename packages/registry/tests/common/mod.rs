//! Config types shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use confreg::{Config, ConfigRegistry, Descriptor, Format, InstantiationError, MemoryFiles};
use confreg_json::JsonCodec;
use serde::{Deserialize, Serialize};

pub fn memory_registry(root: &str) -> (ConfigRegistry, MemoryFiles) {
    let files = MemoryFiles::new();
    let registry = ConfigRegistry::builder()
        .root(root)
        .file_io(files.clone())
        .format_codec(JsonCodec::new())
        .build();
    (registry, files)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    pub volume: u8,
}

impl Config for Prefs {
    const DESCRIPTOR: Descriptor = Descriptor::json();

    fn instantiate() -> Result<Self, InstantiationError> {
        Ok(Prefs { volume: 0 })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefs2 {
    pub theme: String,
}

impl Config for Prefs2 {
    const DESCRIPTOR: Descriptor = Descriptor::properties().with_real_path("/etc/app.conf");

    fn instantiate() -> Result<Self, InstantiationError> {
        Ok(Prefs2 {
            theme: "light".to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub maximized: bool,
    pub scale: f64,
    pub recent: Vec<String>,
}

impl Config for Window {
    fn instantiate() -> Result<Self, InstantiationError> {
        Ok(Window {
            title: "untitled".to_string(),
            width: 800,
            height: 600,
            maximized: false,
            scale: 1.0,
            recent: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qualified {
    pub level: i32,
}

impl Config for Qualified {
    const DESCRIPTOR: Descriptor = Descriptor::json().use_package_name();

    fn instantiate() -> Result<Self, InstantiationError> {
        Ok(Qualified { level: 1 })
    }

    fn type_name() -> &'static str {
        "my_app::settings::Qualified"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relative {
    pub enabled: bool,
}

impl Config for Relative {
    const DESCRIPTOR: Descriptor = Descriptor::properties().with_path("conf/relative.cfg");

    fn instantiate() -> Result<Self, InstantiationError> {
        Ok(Relative { enabled: false })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toml {
    pub value: u8,
}

impl Config for Toml {
    const DESCRIPTOR: Descriptor = Descriptor::new(Format::from_static("application/toml"));

    fn instantiate() -> Result<Self, InstantiationError> {
        Ok(Toml { value: 0 })
    }
}

pub static BROKEN_ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broken {
    pub value: u8,
}

impl Config for Broken {
    const DESCRIPTOR: Descriptor = Descriptor::json();

    fn instantiate() -> Result<Self, InstantiationError> {
        BROKEN_ATTEMPTS.fetch_add(1, Ordering::SeqCst);
        Err(InstantiationError::new("Broken has no usable defaults"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub nickname: Option<String>,
    pub limit: Option<u32>,
}

impl Config for Profile {
    fn instantiate() -> Result<Self, InstantiationError> {
        Ok(Profile {
            nickname: None,
            limit: Some(5),
        })
    }
}
