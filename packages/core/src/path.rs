//! Storage path resolution with a per-type cache.

use std::any::TypeId;
use std::collections::HashMap;

use crate::config::{package_qualified_name, simple_name, Config};
use crate::descriptor::Descriptor;

/// Compute the storage path for a type from its descriptor.
///
/// Precedence:
/// 1. `real_path`, verbatim
/// 2. `path`, verbatim
/// 3. `root + name + extension`, where `name` is the simple type name (or
///    the package-qualified name when `use_package_name` is set) and the
///    extension comes from the format (none for unrecognized formats)
///
/// ```rust
/// use confreg_core::{resolve_path, Descriptor};
///
/// assert_eq!(resolve_path(&Descriptor::json(), "app::Prefs", "./data/"), "./data/Prefs.json");
///
/// let pinned = Descriptor::properties().with_real_path("/etc/app.conf");
/// assert_eq!(resolve_path(&pinned, "app::Prefs", "./data/"), "/etc/app.conf");
/// ```
pub fn resolve_path(descriptor: &Descriptor, type_name: &str, root: &str) -> String {
    if let Some(real_path) = descriptor.real_path {
        return real_path.to_string();
    }
    if let Some(path) = descriptor.path {
        return path.to_string();
    }

    let mut path = String::from(root);
    if descriptor.use_package_name {
        path.push_str(&package_qualified_name(type_name));
    } else {
        path.push_str(&simple_name(type_name));
    }
    if let Some(extension) = descriptor.format.extension() {
        path.push_str(extension);
    }
    path
}

/// Resolves and caches one path per config type.
///
/// Entries are never invalidated: descriptors are constant, so the first
/// resolution for a type is the only one.
#[derive(Debug, Default)]
pub struct PathResolver {
    root: String,
    cache: HashMap<TypeId, String>,
    synthesized: usize,
}

impl PathResolver {
    pub fn new(root: impl Into<String>) -> Self {
        PathResolver {
            root: root.into(),
            cache: HashMap::new(),
            synthesized: 0,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// The path for `T`, computing it on first use.
    pub fn resolve<T: Config>(&mut self) -> &str {
        let root = &self.root;
        let synthesized = &mut self.synthesized;
        self.cache.entry(TypeId::of::<T>()).or_insert_with(|| {
            *synthesized += 1;
            let path = resolve_path(&T::DESCRIPTOR, T::type_name(), root);
            tracing::debug!(type_name = T::type_name(), path = %path, "resolved config path");
            path
        })
    }

    /// The path for `T` if it was already resolved.
    pub fn cached<T: Config>(&self) -> Option<&str> {
        self.cache.get(&TypeId::of::<T>()).map(String::as_str)
    }

    /// Number of paths computed so far (cache misses).
    pub fn synthesized(&self) -> usize {
        self.synthesized
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Format, InstantiationError};
    use serde::{Deserialize, Serialize};

    macro_rules! config_type {
        ($name:ident, $descriptor:expr) => {
            #[derive(Serialize, Deserialize)]
            struct $name;

            impl Config for $name {
                const DESCRIPTOR: Descriptor = $descriptor;

                fn instantiate() -> Result<Self, InstantiationError> {
                    Ok($name)
                }
            }
        };
    }

    config_type!(Prefs, Descriptor::json());
    config_type!(Plain, Descriptor::DEFAULT);
    config_type!(Qualified, Descriptor::properties().use_package_name());
    config_type!(Pinned, Descriptor::json().with_real_path("/etc/app.conf"));
    config_type!(Relative, Descriptor::json().with_path("conf/relative.cfg"));
    config_type!(
        Custom,
        Descriptor::new(Format::from_static("application/toml"))
    );

    #[test]
    fn real_path_wins_over_everything() {
        let both = Descriptor::json()
            .with_real_path("/etc/app.conf")
            .with_path("ignored.json")
            .use_package_name();
        for root in ["", "./data/", "/var/lib/"] {
            assert_eq!(resolve_path(&both, "a::B", root), "/etc/app.conf");
        }
        let props = Descriptor::properties().with_real_path("/etc/app.conf");
        assert_eq!(resolve_path(&props, "a::B", "./data/"), "/etc/app.conf");
    }

    #[test]
    fn relative_path_is_verbatim() {
        let d = Descriptor::properties().with_path("conf/app");
        assert_eq!(resolve_path(&d, "a::B", "./data/"), "conf/app");
    }

    #[test]
    fn synthesized_paths_by_format() {
        assert_eq!(
            resolve_path(&Descriptor::properties(), "app::Prefs", "R/"),
            "R/Prefs.properties"
        );
        assert_eq!(
            resolve_path(&Descriptor::json(), "app::Prefs", "R/"),
            "R/Prefs.json"
        );
        assert_eq!(
            resolve_path(&Descriptor::json(), "app::Prefs", ""),
            "Prefs.json"
        );
    }

    #[test]
    fn unrecognized_format_gets_no_extension() {
        let d = Descriptor::new(Format::from_static("application/toml"));
        assert_eq!(resolve_path(&d, "app::Prefs", "R/"), "R/Prefs");
    }

    #[test]
    fn package_qualified_naming() {
        let d = Descriptor::json().use_package_name();
        assert_eq!(
            resolve_path(&d, "my_app::settings::Prefs", "./data/"),
            "./data/my_app_settings_Prefs.json"
        );
    }

    #[test]
    fn resolver_uses_root_and_descriptor() {
        let mut resolver = PathResolver::new("./data/");
        assert_eq!(resolver.resolve::<Prefs>(), "./data/Prefs.json");
        assert_eq!(resolver.resolve::<Plain>(), "./data/Plain.properties");
        assert_eq!(resolver.resolve::<Pinned>(), "/etc/app.conf");
        assert_eq!(resolver.resolve::<Relative>(), "conf/relative.cfg");
        assert_eq!(resolver.resolve::<Custom>(), "./data/Custom");

        let qualified = resolver.resolve::<Qualified>().to_string();
        assert!(qualified.starts_with("./data/confreg_core_path_tests_"));
        assert!(qualified.ends_with("_Qualified.properties"));
        assert!(!qualified.contains("::"));
    }

    #[test]
    fn generic_instantiations_get_distinct_paths() {
        #[derive(Serialize, Deserialize)]
        struct Slot<T>(T);

        impl<T> Config for Slot<T>
        where
            T: Serialize + serde::de::DeserializeOwned + Default + Send + Sync + 'static,
        {
            const DESCRIPTOR: Descriptor = Descriptor::json();

            fn instantiate() -> Result<Self, InstantiationError> {
                Ok(Slot(T::default()))
            }
        }

        let mut resolver = PathResolver::new("R/");
        assert_eq!(resolver.resolve::<Slot<u8>>(), "R/Slot_u8.json");
        assert_eq!(resolver.resolve::<Slot<String>>(), "R/Slot_String.json");
        assert_eq!(resolver.len(), 2);
    }

    #[test]
    fn resolution_is_cached() {
        let mut resolver = PathResolver::new("./data/");
        assert!(resolver.cached::<Prefs>().is_none());

        let first = resolver.resolve::<Prefs>().as_ptr();
        let second = resolver.resolve::<Prefs>().as_ptr();

        assert_eq!(first, second);
        assert_eq!(resolver.synthesized(), 1);
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.cached::<Prefs>(), Some("./data/Prefs.json"));
    }

    #[test]
    fn empty_resolver() {
        let resolver = PathResolver::default();
        assert!(resolver.is_empty());
        assert_eq!(resolver.root(), "");
    }
}
