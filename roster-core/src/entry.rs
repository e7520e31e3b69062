//! Enumeration members.

use crate::{key::Key, value::Value};

/// One member of an enumeration: a key and the value it stands for.
///
/// Entries are created by a registry's `define` and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    key: Key,
    value: Value,
}

impl Entry {
    /// Create an entry. A missing value defaults to the key as a symbol.
    pub fn new(key: Key, value: Option<Value>) -> Self {
        let value = value.unwrap_or_else(|| Value::Symbol(key.clone()));
        Self { key, value }
    }

    /// The member's key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The member's value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Split the entry into its key and value.
    pub fn into_parts(self) -> (Key, Value) {
        (self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;
    use crate::{key::Key, value::Value};

    #[test]
    fn value_defaults_to_key_symbol() {
        let entry = Entry::new(Key::from("KEY"), None);
        assert_eq!(entry.value(), &Value::symbol("KEY"));
    }

    #[test]
    fn explicit_value_is_kept() {
        let entry = Entry::new(Key::from("RED"), Some(Value::from("red")));
        assert_eq!(entry.key(), &Key::from("RED"));
        assert_eq!(entry.value(), &Value::from("red"));
    }

    #[test]
    fn into_parts_returns_key_and_value() {
        let (key, value) = Entry::new(Key::from("PINK"), None).into_parts();
        assert_eq!(key, Key::from("PINK"));
        assert_eq!(value, Value::symbol("PINK"));
    }
}
