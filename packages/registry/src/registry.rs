//! The config registry: path/instance caches and load/save dispatch.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use confreg_core::{
    format_of, Config, Error, FileIo, Format, FormatCodec, PathResolver, Populator, Result,
    Value,
};
use serde::Serialize;

use crate::builder::RegistryBuilder;
use crate::class::{ConfigClass, ErasedConfig};
use crate::report::{InitFailure, InitReport};

/// Where a type stands within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassState {
    /// Never touched.
    Unresolved,
    /// Path computed by a load, save or explicit resolve; nothing cached.
    PathResolved,
    /// An instance is cached.
    Loaded,
}

/// Resolves, loads, caches and saves config types.
///
/// Each type gets exactly one resolved path and at most one cached instance
/// for the lifetime of the registry. Loading a type again replaces its cached
/// instance; nothing is ever evicted.
///
/// The registry is single-owner: every operation that touches a cache takes
/// `&mut self`. Wrap it in a `Mutex` to share it between threads.
///
/// # Example
///
/// ```rust
/// use confreg::{Config, ConfigRegistry, Descriptor, InstantiationError, MemoryFiles};
/// use confreg_json::JsonCodec;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
/// struct Prefs {
///     volume: u8,
/// }
///
/// impl Config for Prefs {
///     const DESCRIPTOR: Descriptor = Descriptor::json();
///
///     fn instantiate() -> Result<Self, InstantiationError> {
///         Ok(Prefs::default())
///     }
/// }
///
/// let mut registry = ConfigRegistry::builder()
///     .root("./data/")
///     .file_io(MemoryFiles::new())
///     .format_codec(JsonCodec::new())
///     .build();
///
/// registry.save(&Prefs { volume: 7 }).unwrap();
/// let prefs = registry.init_for::<Prefs>().unwrap();
/// assert_eq!(prefs.volume, 7);
/// assert_eq!(registry.cached_path::<Prefs>(), Some("./data/Prefs.json"));
/// ```
pub struct ConfigRegistry {
    paths: PathResolver,
    configs: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    codec: Option<Box<dyn FormatCodec>>,
    populator: Box<dyn Populator>,
    files: Arc<dyn FileIo>,
}

impl ConfigRegistry {
    /// A registry with an empty root path, local files and no codec.
    pub fn new() -> Self {
        RegistryBuilder::new().build()
    }

    /// A registry that prefixes synthesized paths with `root`.
    pub fn with_root(root: impl Into<String>) -> Self {
        RegistryBuilder::new().root(root).build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn from_parts(
        root: String,
        codec: Option<Box<dyn FormatCodec>>,
        populator: Box<dyn Populator>,
        files: Arc<dyn FileIo>,
    ) -> Self {
        ConfigRegistry {
            paths: PathResolver::new(root),
            configs: HashMap::new(),
            codec,
            populator,
            files,
        }
    }

    pub fn root(&self) -> &str {
        self.paths.root()
    }

    /// Install the codec used by JSON loads and saves.
    pub fn set_format_codec(&mut self, codec: impl FormatCodec + 'static) {
        self.codec = Some(Box::new(codec));
    }

    pub fn has_format_codec(&self) -> bool {
        self.codec.is_some()
    }

    /// Build a fresh `T` with its factory and load it.
    ///
    /// A factory failure leaves both caches untouched and is returned as
    /// [`Error::Instantiation`].
    pub fn init_for<T: Config>(&mut self) -> Result<&T> {
        let instance = instantiate::<T>().inspect_err(|error| {
            tracing::warn!(
                type_name = T::type_name(),
                error = %error,
                "config instantiation failed"
            );
        })?;
        self.load(instance)
    }

    /// Run [`init_for`](Self::init_for) for every class.
    ///
    /// A failing class never stops the batch; every failure is logged and
    /// recorded in the returned report.
    pub fn init_for_classes(
        &mut self,
        classes: impl IntoIterator<Item = ConfigClass>,
    ) -> InitReport {
        let mut report = InitReport::default();
        for class in classes {
            match class.init(self) {
                Ok(()) => report.loaded.push(class.type_name()),
                Err(error) => {
                    tracing::warn!(
                        type_name = class.type_name(),
                        error = %error,
                        "skipping config in batch init"
                    );
                    report.failures.push(InitFailure {
                        type_name: class.type_name(),
                        error,
                    });
                }
            }
        }
        report
    }

    /// Load `T` starting from a caller-built instance.
    ///
    /// For properties, fields missing from the file keep the values of
    /// `instance`. For JSON, `instance` is discarded and the document decides
    /// every field. Either way the registry owns the result.
    pub fn init<T: Config>(&mut self, instance: T) -> Result<&T> {
        self.load(instance)
    }

    /// Load each caller-built instance in order, stopping at the first error.
    pub fn init_all(
        &mut self,
        instances: impl IntoIterator<Item = Box<dyn ErasedConfig>>,
    ) -> Result<()> {
        for instance in instances {
            let type_name = instance.config_type_name();
            if let Err(error) = instance.init_into(self) {
                tracing::warn!(type_name, error = %error, "batch init stopped");
                return Err(error);
            }
        }
        Ok(())
    }

    fn load<T: Config>(&mut self, instance: T) -> Result<&T> {
        let format = format_of::<T>();
        let path = self.paths.resolve::<T>();

        let loaded: T = if format.is_properties() {
            let tree = to_tree(&instance, &format)?;
            let populated = self.populator.populate(path, tree)?;
            serde_json::from_value(populated).map_err(|e| Error::decode(format.clone(), e))?
        } else if format.is_json() {
            let codec = self.codec.as_ref().ok_or(Error::MissingCapability {
                capability: "format codec",
            })?;
            let text = self.files.read(path)?;
            let tree = codec.decode(&text)?;
            serde_json::from_value(tree).map_err(|e| Error::decode(format.clone(), e))?
        } else {
            return Err(Error::UnsupportedFormat(format));
        };

        tracing::debug!(type_name = T::type_name(), path, "loaded config");
        self.configs.insert(TypeId::of::<T>(), Box::new(loaded));
        self.get::<T>().ok_or_else(|| {
            Error::decode(format, format!("cached {} has another type", T::type_name()))
        })
    }

    /// The cached instance of `T`, if it was ever loaded.
    pub fn get<T: Config>(&self) -> Option<&T> {
        self.configs
            .get(&TypeId::of::<T>())
            .and_then(|config| config.downcast_ref::<T>())
    }

    /// Mutable access to the cached instance, e.g. to edit before [`save`](Self::save).
    pub fn get_mut<T: Config>(&mut self) -> Option<&mut T> {
        self.configs
            .get_mut(&TypeId::of::<T>())
            .and_then(|config| config.downcast_mut::<T>())
    }

    pub fn contains<T: Config>(&self) -> bool {
        self.configs.contains_key(&TypeId::of::<T>())
    }

    /// Write `instance` to its resolved path.
    ///
    /// Never touches the instance cache.
    pub fn save<T: Config>(&mut self, instance: &T) -> Result<()> {
        let tree = to_tree(instance, &format_of::<T>())?;
        self.save_tree::<T>(tree)
    }

    /// Save the cached instance of `T`. Returns `false` if none is cached.
    pub fn save_cached<T: Config>(&mut self) -> Result<bool> {
        let tree = match self.get::<T>() {
            Some(instance) => to_tree(instance, &format_of::<T>())?,
            None => return Ok(false),
        };
        self.save_tree::<T>(tree).map(|()| true)
    }

    fn save_tree<T: Config>(&mut self, tree: Value) -> Result<()> {
        let format = format_of::<T>();
        let path = self.paths.resolve::<T>();

        if format.is_properties() {
            self.populator.write_out(path, &tree)?;
        } else if format.is_json() {
            let codec = self.codec.as_ref().ok_or(Error::MissingCapability {
                capability: "format codec",
            })?;
            let text = codec.encode(&tree)?;
            self.files.write(path, &text)?;
        } else {
            return Err(Error::UnsupportedFormat(format));
        }

        tracing::debug!(type_name = T::type_name(), path, "saved config");
        Ok(())
    }

    /// The storage path for `T`, resolving and caching it on first use.
    pub fn resolve_path<T: Config>(&mut self) -> &str {
        self.paths.resolve::<T>()
    }

    /// The storage path for `T` if it was already resolved.
    pub fn cached_path<T: Config>(&self) -> Option<&str> {
        self.paths.cached::<T>()
    }

    pub fn state_of<T: Config>(&self) -> ClassState {
        if self.contains::<T>() {
            ClassState::Loaded
        } else if self.paths.cached::<T>().is_some() {
            ClassState::PathResolved
        } else {
            ClassState::Unresolved
        }
    }

    /// Number of cached instances.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

/// Run the factory of `T`, wrapping its failure.
pub(crate) fn instantiate<T: Config>() -> Result<T> {
    T::instantiate().map_err(|source| Error::Instantiation {
        type_name: T::type_name(),
        source,
    })
}

fn to_tree<T: Serialize>(instance: &T, format: &Format) -> Result<Value> {
    serde_json::to_value(instance).map_err(|e| Error::encode(format.clone(), e))
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigRegistry")
            .field("root", &self.paths.root())
            .field("resolved_paths", &self.paths.len())
            .field("loaded", &self.configs.len())
            .field("format_codec", &self.codec.is_some())
            .finish()
    }
}
