//! Member payloads.

use crate::key::Key;
use std::{borrow::Cow, fmt};

/// The payload carried by an enumeration member.
///
/// Every variant can be built in `const` context, which is what lets
/// generated enumeration types expose their members as associated constants.
///
/// # Example
///
/// ```rust,ignore
/// const RED: Value = Value::from_static_str("red");
/// const DEFAULTED: Value = Value::symbol("KEY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// A symbolic value. Members declared without a value carry their own key.
    Symbol(Key),
    /// A string value.
    Str(Cow<'static, str>),
    /// An integer value.
    Int(i64),
    /// A boolean value.
    Bool(bool),
}

impl Value {
    /// A symbol value from a static name.
    pub const fn symbol(name: &'static str) -> Self {
        Value::Symbol(Key::from_static(name))
    }

    /// A string value from a static string.
    pub const fn from_static_str(s: &'static str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }

    /// Returns the string payload if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the symbol if this is a [`Value::Symbol`].
    pub fn as_symbol(&self) -> Option<&Key> {
        match self {
            Value::Symbol(key) => Some(key),
            _ => None,
        }
    }

    /// Returns the integer payload if this is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(key) => fmt::Display::fmt(key, f),
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => fmt::Display::fmt(i, f),
            Value::Bool(b) => fmt::Display::fmt(b, f),
        }
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        Value::Symbol(key)
    }
}

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Value::from_static_str(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use crate::key::Key;

    #[test]
    fn display_renders_bare_payload() {
        assert_eq!(Value::symbol("red").to_string(), "red");
        assert_eq!(Value::from("Created").to_string(), "Created");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(true).to_string(), "true");
    }

    #[test]
    fn symbol_and_string_with_same_text_differ() {
        assert_ne!(Value::symbol("red"), Value::from("red"));
        assert_eq!(Value::from(Key::from("red")), Value::symbol("red"));
    }

    #[test]
    fn accessors_match_only_their_variant() {
        assert_eq!(Value::symbol("red").as_symbol(), Some(&Key::from("red")));
        assert_eq!(Value::from("red").as_symbol(), None);
        assert_eq!(Value::from("red").as_str(), Some("red"));
        assert_eq!(Value::from(-7).as_int(), Some(-7));
        assert_eq!(Value::from(true).as_int(), None);
    }
}
