//! Enumeration registry.
//!
//! A [`Registry`] owns the members declared on one enumeration type and,
//! optionally, a shared reference to the registry of the type it extends.
//!
//! # Effective set
//!
//! Every query runs over the *effective* set: the registry's own members plus
//! all of its ancestors' members. Ancestors come first when iterating, each
//! group in declaration order. A parent never sees members that were added by
//! a registry extending it.
//!
//! Keys and values are unique across the effective set. `define` is the only
//! mutation point; a rejected `define` leaves the registry untouched.

use indexmap::IndexMap;
use roster_core::{
    DefineError, DuplicateKeyError, DuplicateValueError, Entry, Key, UninitializedConstantError,
    Value,
};
use std::{collections::HashMap, iter, sync::Arc};

/// The members of one enumeration type.
///
/// # Example
///
/// ```rust,ignore
/// let mut colors = Registry::new("Colors");
/// colors.define("RED", Some(Value::from("red")))?;
/// colors.define("GREEN", Some(Value::from("green")))?;
///
/// assert_eq!(colors.access("RED")?, &Value::from("red"));
/// assert_eq!(colors.parse("gReEn"), Some(&Value::from("green")));
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    name: String,
    entries: IndexMap<Key, Entry>,
    by_value: HashMap<Value, usize>,
    parent: Option<Arc<Registry>>,
}

impl Registry {
    /// Create an empty registry for the type called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
            by_value: HashMap::new(),
            parent: None,
        }
    }

    /// Create an empty registry that extends `parent`.
    pub fn extending(name: impl Into<String>, parent: Arc<Registry>) -> Self {
        Self {
            parent: Some(parent),
            ..Self::new(name)
        }
    }

    /// Start building a registry for the type called `name`.
    pub fn builder(name: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder::new(name)
    }

    /// Define a member. A missing `value` defaults to the key as a symbol.
    ///
    /// Fails with [`DefineError::DuplicateKey`] if the key is already in the
    /// effective set, then with [`DefineError::DuplicateValue`] if the value
    /// is.
    pub fn define(
        &mut self,
        key: impl Into<Key>,
        value: Option<Value>,
    ) -> Result<&Entry, DefineError> {
        let entry = Entry::new(key.into(), value);

        if self.contains_key(entry.key()) {
            #[cfg(feature = "tracing")]
            tracing::warn!(registry = %self.name, key = %entry.key(), "rejected duplicate key");
            return Err(DuplicateKeyError {
                name: self.name.clone(),
                key: entry.key().clone(),
            }
            .into());
        }

        if self.contains_value(entry.value()) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                registry = %self.name,
                value = %entry.value(),
                "rejected duplicate value"
            );
            return Err(DuplicateValueError {
                name: self.name.clone(),
                value: entry.value().clone(),
            }
            .into());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            registry = %self.name,
            key = %entry.key(),
            value = %entry.value(),
            "defined entry"
        );

        let index = self.entries.len();
        self.by_value.insert(entry.value().clone(), index);
        self.entries.insert(entry.key().clone(), entry);
        Ok(&self.entries[index])
    }

    /// Name of the declaring type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The registry this one extends, if any.
    pub fn parent(&self) -> Option<&Arc<Registry>> {
        self.parent.as_ref()
    }

    /// This registry followed by its ancestors, nearest first.
    fn ancestry(&self) -> impl Iterator<Item = &Registry> {
        iter::successors(Some(self), |r| r.parent.as_deref())
    }

    /// Look up a member of the effective set by key.
    pub fn lookup_by_key(&self, key: impl AsRef<str>) -> Option<&Entry> {
        let key = key.as_ref();
        self.ancestry().find_map(|r| r.entries.get(key))
    }

    /// Look up a member of the effective set by value.
    pub fn lookup_by_value(&self, value: &Value) -> Option<&Entry> {
        self.ancestry()
            .find_map(|r| r.by_value.get(value).map(|&index| &r.entries[index]))
    }

    /// Const-style access: the value stored under `key`.
    pub fn access(&self, key: impl AsRef<str>) -> Result<&Value, UninitializedConstantError> {
        let key = key.as_ref();
        self.lookup_by_key(key)
            .map(Entry::value)
            .ok_or_else(|| UninitializedConstantError {
                name: self.name.clone(),
                key: Key::new(key.to_string()),
            })
    }

    /// Iterate over the effective set: ancestors first, then own members,
    /// each in declaration order.
    ///
    /// The iterator borrows the registry; every call starts from the top.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Entry)> {
        let mut lineage: Vec<&Registry> = self.ancestry().collect();
        lineage.reverse();
        lineage.into_iter().flat_map(|r| r.entries.iter())
    }

    /// Iterate over the members of the effective set.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.iter().map(|(_, entry)| entry)
    }

    /// Iterate over the keys of the effective set.
    pub fn iter_keys(&self) -> impl Iterator<Item = &Key> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterate over the values of the effective set.
    pub fn iter_values(&self) -> impl Iterator<Item = &Value> {
        self.iter().map(|(_, entry)| entry.value())
    }

    /// Match `input` against the keys, ignoring case. Returns the value of the
    /// first matching member.
    ///
    /// Absent or empty input never matches.
    pub fn parse<'a>(&self, input: impl Into<Option<&'a str>>) -> Option<&Value> {
        let input = input.into().filter(|s| !s.is_empty())?;
        let wanted = input.to_uppercase();
        self.iter()
            .find(|(key, _)| key.as_str().to_uppercase() == wanted)
            .map(|(_, entry)| entry.value())
    }

    /// Check if `key` is in the effective set.
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.lookup_by_key(key).is_some()
    }

    /// Check if `value` is in the effective set.
    pub fn contains_value(&self, value: &Value) -> bool {
        self.lookup_by_value(value).is_some()
    }

    /// The key of the member holding `value`.
    pub fn key_for(&self, value: &Value) -> Option<&Key> {
        self.lookup_by_value(value).map(Entry::key)
    }

    /// The value of the member named `key`.
    pub fn value_for(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.lookup_by_key(key).map(Entry::value)
    }

    /// Snapshot of all keys in iteration order.
    pub fn keys(&self) -> Vec<Key> {
        self.iter_keys().cloned().collect()
    }

    /// Snapshot of all values in iteration order.
    pub fn values(&self) -> Vec<Value> {
        self.iter_values().cloned().collect()
    }

    /// An owned key → value map in iteration order.
    ///
    /// Changing the map does not affect the registry.
    pub fn to_map(&self) -> IndexMap<Key, Value> {
        self.iter()
            .map(|(key, entry)| (key.clone(), entry.value().clone()))
            .collect()
    }

    /// Number of members in the effective set.
    pub fn len(&self) -> usize {
        self.ancestry().map(|r| r.entries.len()).sum()
    }

    /// Check if the effective set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of members defined on this registry itself.
    pub fn own_len(&self) -> usize {
        self.entries.len()
    }
}

// ============================================================================
// RegistryBuilder
// ============================================================================

/// Builder for constructing a [`Registry`].
///
/// Each `define` forwards to [`Registry::define`], so duplicates are reported
/// at the call that introduces them.
///
/// # Example
/// ```ignore
/// let colors = Registry::builder("Colors")
///     .define("RED", "red")?
///     .define("GREEN", "green")?
///     .build_shared();
///
/// let shades = RegistryBuilder::extending("Shades", colors)
///     .define("ORANGE", "orange")?
///     .define_key("PINK")?
///     .build();
/// ```
#[derive(Debug)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Create a builder for the type called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            registry: Registry::new(name),
        }
    }

    /// Create a builder whose registry extends `parent`.
    pub fn extending(name: impl Into<String>, parent: Arc<Registry>) -> Self {
        Self {
            registry: Registry::extending(name, parent),
        }
    }

    /// Define a member with an explicit value.
    pub fn define(
        mut self,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> Result<Self, DefineError> {
        self.registry.define(key, Some(value.into()))?;
        Ok(self)
    }

    /// Define a member whose value is its own key.
    pub fn define_key(mut self, key: impl Into<Key>) -> Result<Self, DefineError> {
        self.registry.define(key, None)?;
        Ok(self)
    }

    /// Define a member (mutable version).
    pub fn define_mut(
        &mut self,
        key: impl Into<Key>,
        value: Option<Value>,
    ) -> Result<(), DefineError> {
        self.registry.define(key, value)?;
        Ok(())
    }

    /// Number of members in the effective set so far.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if nothing is defined yet.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Finish building.
    pub fn build(self) -> Registry {
        self.registry
    }

    /// Finish building and wrap the registry for sharing with extensions.
    pub fn build_shared(self) -> Arc<Registry> {
        Arc::new(self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::{Registry, RegistryBuilder};
    use roster_core::{DefineError, Key, Value};
    use std::sync::Arc;

    fn colors() -> Arc<Registry> {
        Registry::builder("Colors")
            .define("RED", "red")
            .and_then(|b| b.define("GREEN", "green"))
            .unwrap()
            .build_shared()
    }

    #[test]
    fn define_and_lookup() {
        let colors = colors();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.lookup_by_key("RED").unwrap().value(), &Value::from("red"));
        assert_eq!(
            colors.lookup_by_value(&Value::from("green")).unwrap().key(),
            &Key::from("GREEN")
        );
        assert!(colors.lookup_by_key("BLUE").is_none());
    }

    #[test]
    fn rejected_define_leaves_state_untouched() {
        let mut registry = Registry::new("Colors");
        registry.define("RED", Some(Value::from("red"))).unwrap();

        let err = registry.define("RED", Some(Value::from("some"))).unwrap_err();
        assert!(matches!(err, DefineError::DuplicateKey(_)));

        let err = registry.define("Other", Some(Value::from("red"))).unwrap_err();
        assert!(matches!(err, DefineError::DuplicateValue(_)));

        assert_eq!(registry.len(), 1);
        assert!(!registry.contains_key("Other"));
        assert!(!registry.contains_value(&Value::from("some")));
    }

    #[test]
    fn duplicate_key_is_reported_before_duplicate_value() {
        let mut registry = Registry::new("Colors");
        registry.define("RED", Some(Value::from("red"))).unwrap();
        let err = registry.define("RED", Some(Value::from("red"))).unwrap_err();
        assert!(matches!(err, DefineError::DuplicateKey(_)));
    }

    #[test]
    fn extension_checks_ancestor_entries() {
        let mut shades = Registry::extending("Shades", colors());
        assert!(matches!(
            shades.define("RED", Some(Value::from("crimson"))),
            Err(DefineError::DuplicateKey(_))
        ));
        assert!(matches!(
            shades.define("CRIMSON", Some(Value::from("red"))),
            Err(DefineError::DuplicateValue(_))
        ));
        assert_eq!(shades.own_len(), 0);
    }

    #[test]
    fn iteration_lists_ancestors_first() {
        let parent = colors();
        let child = RegistryBuilder::extending("Shades", Arc::clone(&parent))
            .define("ORANGE", "orange")
            .unwrap()
            .build();

        assert_eq!(
            child.values(),
            vec![Value::from("red"), Value::from("green"), Value::from("orange")]
        );
        assert_eq!(parent.values(), vec![Value::from("red"), Value::from("green")]);
        assert!(!parent.contains_key("ORANGE"));
    }

    #[test]
    fn to_map_is_a_detached_copy() {
        let colors = colors();
        let mut map = colors.to_map();
        map.insert(Key::from("BLUE"), Value::from("blue"));
        assert_eq!(map.len(), 3);
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn builder_reports_len() {
        let mut builder = RegistryBuilder::new("States");
        assert!(builder.is_empty());
        builder.define_mut("created", Some(Value::from("Created"))).unwrap();
        builder.define_mut("undefined", None).unwrap();
        assert_eq!(builder.len(), 2);
        assert_eq!(
            builder.build().value_for("undefined"),
            Some(&Value::symbol("undefined"))
        );
    }

    #[test]
    fn define_key_uses_key_as_value() {
        let registry = Registry::builder("States")
            .define_key("draft")
            .and_then(|b| b.define_key("published"))
            .unwrap()
            .build();

        let entries: Vec<(Key, Value)> = registry
            .entries()
            .map(|entry| entry.clone().into_parts())
            .collect();
        assert_eq!(
            entries,
            vec![
                (Key::from("draft"), Value::symbol("draft")),
                (Key::from("published"), Value::symbol("published")),
            ]
        );
    }

    #[test]
    fn define_key_rejects_symbol_already_taken() {
        let err = Registry::builder("States")
            .define("OPEN", Value::symbol("CLOSED"))
            .and_then(|b| b.define_key("CLOSED"))
            .unwrap_err();
        assert!(matches!(err, DefineError::DuplicateValue(_)));
    }
}
