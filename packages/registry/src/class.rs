//! Type-erased handles for batch initialization.

use std::fmt;

use confreg_core::{Config, Result};

use crate::registry::{instantiate, ConfigRegistry};

/// A config type named at runtime, for [`ConfigRegistry::init_for_classes`].
///
/// ```rust
/// use confreg::ConfigClass;
/// # use confreg::{Config, InstantiationError};
/// # #[derive(serde::Serialize, serde::Deserialize)]
/// # struct Prefs { volume: u8 }
/// # impl Config for Prefs {
/// #     fn instantiate() -> Result<Self, InstantiationError> { Ok(Prefs { volume: 0 }) }
/// # }
///
/// let class = ConfigClass::of::<Prefs>();
/// assert!(class.type_name().ends_with("Prefs"));
/// ```
#[derive(Clone, Copy)]
pub struct ConfigClass {
    type_name: &'static str,
    init: fn(&mut ConfigRegistry) -> Result<()>,
}

fn init_class<T: Config>(registry: &mut ConfigRegistry) -> Result<()> {
    registry.init(instantiate::<T>()?).map(|_| ())
}

impl ConfigClass {
    pub fn of<T: Config>() -> Self {
        ConfigClass {
            type_name: T::type_name(),
            init: init_class::<T>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn init(&self, registry: &mut ConfigRegistry) -> Result<()> {
        (self.init)(registry)
    }
}

impl fmt::Debug for ConfigClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConfigClass").field(&self.type_name).finish()
    }
}

/// A caller-built config instance whose type is erased, for
/// [`ConfigRegistry::init_all`].
///
/// Implemented for every [`Config`] type.
pub trait ErasedConfig: Send {
    /// [`Config::type_name`] of the concrete type.
    fn config_type_name(&self) -> &'static str;

    /// Load this instance into `registry` under its concrete type.
    fn init_into(self: Box<Self>, registry: &mut ConfigRegistry) -> Result<()>;
}

impl<T: Config> ErasedConfig for T {
    fn config_type_name(&self) -> &'static str {
        <T as Config>::type_name()
    }

    fn init_into(self: Box<Self>, registry: &mut ConfigRegistry) -> Result<()> {
        registry.init(*self).map(|_| ())
    }
}
