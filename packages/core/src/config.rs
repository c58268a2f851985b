//! The `Config` trait implemented by every persisted type.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::descriptor::Descriptor;
use crate::error::InstantiationError;
use crate::format::Format;

/// A plain data type whose state is persisted by the registry.
///
/// The descriptor defaults to [`Descriptor::DEFAULT`] (properties format,
/// synthesized path), so a type only has to provide a factory.
///
/// # Example
///
/// ```rust
/// use confreg_core::{Config, Descriptor, InstantiationError};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Default, Serialize, Deserialize)]
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
/// ```
pub trait Config: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Storage metadata for this type.
    const DESCRIPTOR: Descriptor = Descriptor::DEFAULT;

    /// Build a fresh instance to load into.
    fn instantiate() -> Result<Self, InstantiationError>;

    /// Fully qualified name used for default path synthesis.
    ///
    /// Generic arguments are part of the synthesized file name, so
    /// `Wrapper<A>` and `Wrapper<B>` are stored apart. Override to keep file
    /// names stable across module moves.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The format a type is stored in.
///
/// Types that never declare one get [`Format::PROPERTIES`] through
/// [`Descriptor::DEFAULT`].
pub fn format_of<T: Config>() -> Format {
    T::DESCRIPTOR.format
}

fn last_segment(path: &str) -> &str {
    match path.rfind("::") {
        Some(i) => &path[i + 2..],
        None => path,
    }
}

/// Split generic arguments at top-level commas.
fn split_args(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in args.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(args[start..].trim());
    parts
}

/// `a::Wrapper<b::Inner, c::Other>` becomes `Wrapper<Inner, Other>`.
fn strip_paths(type_name: &str) -> String {
    let Some(open) = type_name.find('<') else {
        return last_segment(type_name).to_string();
    };
    let close = type_name
        .rfind('>')
        .filter(|&close| close > open)
        .unwrap_or(type_name.len());
    let args: Vec<String> = split_args(&type_name[open + 1..close])
        .into_iter()
        .map(strip_paths)
        .collect();
    format!("{}<{}>", last_segment(&type_name[..open]), args.join(", "))
}

/// Flatten generic syntax so the name is usable as a file name.
fn file_safe(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            '<' | ',' => Some('_'),
            '>' | ' ' => None,
            c if c.is_alphanumeric() || c == '_' => Some(c),
            _ => Some('_'),
        })
        .collect()
}

/// The last path segment of a type name, with generic arguments kept:
/// `a::Wrapper<b::Inner>` becomes `Wrapper_Inner`.
pub fn simple_name(type_name: &str) -> String {
    file_safe(&strip_paths(type_name))
}

/// The fully qualified type name with `::` separators replaced by `_`.
pub fn package_qualified_name(type_name: &str) -> String {
    file_safe(&type_name.replace("::", "_"))
}
