//! Host types with an attached registry.

use crate::{
    case::{CaseResult, Cases},
    registry::Registry,
};
use indexmap::IndexMap;
use roster_core::{CaseError, Entry, Key, UninitializedConstantError, Value};
use std::sync::Arc;

/// A type that owns an enumeration.
///
/// Implementors provide [`registry`](Enumeration::registry); every query is
/// a provided method that forwards to it. The `enumeration!` macro generates
/// implementations, including the lazily built static registry.
///
/// # Example
///
/// ```rust,ignore
/// struct Colors;
///
/// impl Enumeration for Colors {
///     fn registry() -> &'static Arc<Registry> {
///         static REGISTRY: LazyLock<Arc<Registry>> = LazyLock::new(|| { ... });
///         &REGISTRY
///     }
/// }
///
/// assert_eq!(Colors::parse("red"), Some(&Value::from("red")));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an enumeration",
    label = "missing `Enumeration` implementation",
    note = "Declare the type with `enumeration!` or implement `Enumeration::registry`."
)]
pub trait Enumeration {
    /// The registry holding this type's members.
    fn registry() -> &'static Arc<Registry>;

    /// Name of the declaring type.
    fn name() -> &'static str {
        Self::registry().name()
    }

    /// Const-style access by key.
    fn access(key: impl AsRef<str>) -> Result<&'static Value, UninitializedConstantError> {
        Self::registry().access(key)
    }

    /// Look up a member by key.
    fn lookup_by_key(key: impl AsRef<str>) -> Option<&'static Entry> {
        Self::registry().lookup_by_key(key)
    }

    /// Look up a member by value.
    fn lookup_by_value(value: &Value) -> Option<&'static Entry> {
        Self::registry().lookup_by_value(value)
    }

    /// Iterate over `(key, entry)` pairs, inherited members first.
    fn iter() -> impl Iterator<Item = (&'static Key, &'static Entry)> {
        Self::registry().iter()
    }

    /// Iterate over keys.
    fn iter_keys() -> impl Iterator<Item = &'static Key> {
        Self::registry().iter_keys()
    }

    /// Iterate over values.
    fn iter_values() -> impl Iterator<Item = &'static Value> {
        Self::registry().iter_values()
    }

    /// Case-insensitive parse of a key.
    fn parse<'a>(input: impl Into<Option<&'a str>>) -> Option<&'static Value> {
        Self::registry().parse(input)
    }

    /// Check if `key` is a member.
    fn contains_key(key: impl AsRef<str>) -> bool {
        Self::registry().contains_key(key)
    }

    /// Check if `value` is a member.
    fn contains_value(value: &Value) -> bool {
        Self::registry().contains_value(value)
    }

    /// Key of the member holding `value`.
    fn key_for(value: &Value) -> Option<&'static Key> {
        Self::registry().key_for(value)
    }

    /// Value of the member named `key`.
    fn value_for(key: impl AsRef<str>) -> Option<&'static Value> {
        Self::registry().value_for(key)
    }

    /// Snapshot of the keys.
    fn keys() -> Vec<Key> {
        Self::registry().keys()
    }

    /// Snapshot of the values.
    fn values() -> Vec<Value> {
        Self::registry().values()
    }

    /// Owned key → value map.
    fn to_map() -> IndexMap<Key, Value> {
        Self::registry().to_map()
    }

    /// Number of members, inherited ones included.
    fn len() -> usize {
        Self::registry().len()
    }

    /// Exhaustive dispatch of `input` over this enumeration.
    fn case<T>(input: &Value, cases: &Cases<'_, T>) -> Result<CaseResult<T>, CaseError> {
        Self::registry().dispatch(input, cases)
    }

    /// Exhaustive dispatch with fallible handlers.
    fn try_case<U, E>(input: &Value, cases: &Cases<'_, Result<U, E>>) -> Result<CaseResult<U>, E>
    where
        E: From<CaseError>,
    {
        Self::registry().try_dispatch(input, cases)
    }
}
