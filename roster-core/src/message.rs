//! Message keys and translators.
//!
//! Errors raised by Roster never format prose on their own. Each one exposes a
//! [`MessageKey`] and a set of [`MessageParams`]; a [`Translator`] turns that
//! pair into text. The same key and parameters are produced no matter which
//! translator is used, so only the rendered text changes when a different
//! locale is plugged in.
//!
//! # Translators
//!
//! - [`EnglishTranslator`] - built-in English templates (used by `Display`)
//! - [`MessageKeyTranslator`] - renders the dotted message path, the output
//!   when no translation backend is configured
//! - [`TemplateTranslator`] - caller-supplied templates with English fallback
//! - any `Fn(MessageKey, &MessageParams) -> String`

use std::{borrow::Cow, collections::HashMap, fmt, str::FromStr};
use thiserror::Error;

/// Identifies the message a structured error should be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Const-style access to a key that was never defined.
    UninitializedConstant,
    /// A key was defined twice in the same effective set.
    DuplicateKey,
    /// A value was defined twice in the same effective set.
    DuplicateValue,
    /// A case mapping names values outside the enumeration.
    ValuesNotDefined,
    /// A case mapping leaves members uncovered and has no default.
    NotAllCasesHandled,
}

impl MessageKey {
    /// Every message key, in a stable order.
    pub const ALL: [MessageKey; 5] = [
        MessageKey::UninitializedConstant,
        MessageKey::DuplicateKey,
        MessageKey::DuplicateValue,
        MessageKey::ValuesNotDefined,
        MessageKey::NotAllCasesHandled,
    ];

    /// The short name, e.g. `duplicate_key`.
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKey::UninitializedConstant => "uninitialized_constant",
            MessageKey::DuplicateKey => "duplicate_key",
            MessageKey::DuplicateValue => "duplicate_value",
            MessageKey::ValuesNotDefined => "values_not_defined",
            MessageKey::NotAllCasesHandled => "not_all_cases_handled",
        }
    }

    /// The full dotted lookup path used by translation tables.
    pub const fn path(self) -> &'static str {
        match self {
            MessageKey::UninitializedConstant => {
                "roster.errors.messages.uninitialized_constant.summary"
            }
            MessageKey::DuplicateKey => "roster.errors.messages.duplicate_key.summary",
            MessageKey::DuplicateValue => "roster.errors.messages.duplicate_value.summary",
            MessageKey::ValuesNotDefined => "roster.errors.messages.values_not_defined.summary",
            MessageKey::NotAllCasesHandled => {
                "roster.errors.messages.not_all_cases_handled.summary"
            }
        }
    }

    /// The built-in English template.
    pub const fn english_template(self) -> &'static str {
        match self {
            MessageKey::UninitializedConstant => {
                "The constant %{name}::%{key} has not been defined."
            }
            MessageKey::DuplicateKey => "The constant %{name}::%{key} has already been defined.",
            MessageKey::DuplicateValue => "The value %{value} has already been defined.",
            MessageKey::ValuesNotDefined => "Value(s) not defined: %{values}",
            MessageKey::NotAllCasesHandled => "Not all cases handled: %{values}",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message name that matches no [`MessageKey`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown message key: {0}")]
pub struct UnknownMessageKey(pub String);

impl FromStr for MessageKey {
    type Err = UnknownMessageKey;

    /// Accepts either the short name or the full dotted path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s || key.path() == s)
            .ok_or_else(|| UnknownMessageKey(s.to_string()))
    }
}

/// Named parameters attached to a message, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageParams {
    params: Vec<(&'static str, String)>,
}

impl MessageParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter rendered through `Display`.
    pub fn with(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    /// Add a parameter holding a list, joined with `", "`.
    pub fn with_list<I>(self, name: &'static str, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let joined = items
            .into_iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.with(name, joined)
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.params.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Renders a message key and its parameters into text.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot render Roster messages",
    label = "missing `Translator` implementation",
    note = "Implement `render(key, params)` or pass a `Fn(MessageKey, &MessageParams) -> String`."
)]
pub trait Translator {
    /// Render `key` with `params`.
    fn render(&self, key: MessageKey, params: &MessageParams) -> String;
}

impl<F> Translator for F
where
    F: Fn(MessageKey, &MessageParams) -> String,
{
    fn render(&self, key: MessageKey, params: &MessageParams) -> String {
        (self)(key, params)
    }
}

/// Substitute `%{name}` placeholders in `template`.
///
/// Placeholders without a matching parameter are left untouched.
pub fn interpolate(template: &str, params: &MessageParams) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match params.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// The default translator: built-in English templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTranslator;

impl Translator for EnglishTranslator {
    fn render(&self, key: MessageKey, params: &MessageParams) -> String {
        interpolate(key.english_template(), params)
    }
}

/// Renders the dotted message path and ignores the parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageKeyTranslator;

impl Translator for MessageKeyTranslator {
    fn render(&self, key: MessageKey, _params: &MessageParams) -> String {
        key.path().to_string()
    }
}

/// A translator backed by a caller-supplied template table.
///
/// Keys missing from the table fall back to the English template.
///
/// # Example
///
/// ```rust,ignore
/// let fr = TemplateTranslator::new()
///     .with_template(MessageKey::DuplicateValue, "La valeur %{value} existe déjà.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateTranslator {
    templates: HashMap<MessageKey, Cow<'static, str>>,
}

impl TemplateTranslator {
    /// Create a translator with an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template for one key.
    pub fn with_template(
        mut self,
        key: MessageKey,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.templates.insert(key, template.into());
        self
    }

    /// Build a table from `(name, template)` pairs, where `name` is a short
    /// name or a dotted path.
    pub fn from_table<I, N, T>(table: I) -> Result<Self, UnknownMessageKey>
    where
        I: IntoIterator<Item = (N, T)>,
        N: AsRef<str>,
        T: Into<Cow<'static, str>>,
    {
        table.into_iter().try_fold(Self::new(), |acc, (name, template)| {
            let key = name.as_ref().parse::<MessageKey>()?;
            Ok(acc.with_template(key, template))
        })
    }

    /// The template that will be used for `key`.
    pub fn template(&self, key: MessageKey) -> &str {
        self.templates
            .get(&key)
            .map(|t| t.as_ref())
            .unwrap_or_else(|| key.english_template())
    }
}

impl Translator for TemplateTranslator {
    fn render(&self, key: MessageKey, params: &MessageParams) -> String {
        interpolate(self.template(key), params)
    }
}

/// An error that can be rendered through a [`Translator`].
pub trait Localized {
    /// The message this error is rendered with.
    fn message_key(&self) -> MessageKey;

    /// The parameters substituted into the message.
    fn params(&self) -> MessageParams;

    /// Render with the given translator.
    fn render(&self, translator: &dyn Translator) -> String {
        translator.render(self.message_key(), &self.params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> MessageParams {
        MessageParams::new().with("name", "Colors").with("key", "RED")
    }

    #[test]
    fn interpolate_replaces_known_placeholders() {
        let out = interpolate("The constant %{name}::%{key} is here.", &params());
        assert_eq!(out, "The constant Colors::RED is here.");
    }

    #[test]
    fn interpolate_keeps_unknown_and_unterminated_placeholders() {
        assert_eq!(interpolate("%{missing} %{name}", &params()), "%{missing} Colors");
        assert_eq!(interpolate("tail %{name", &params()), "tail %{name");
    }

    #[test]
    fn english_and_key_translators_differ_only_in_text() {
        let english = EnglishTranslator.render(MessageKey::DuplicateKey, &params());
        let keyed = MessageKeyTranslator.render(MessageKey::DuplicateKey, &params());
        assert_eq!(english, "The constant Colors::RED has already been defined.");
        assert_eq!(keyed, "roster.errors.messages.duplicate_key.summary");
    }

    #[test]
    fn message_key_parses_short_name_and_path() {
        assert_eq!(
            "duplicate_value".parse::<MessageKey>(),
            Ok(MessageKey::DuplicateValue)
        );
        assert_eq!(
            "roster.errors.messages.not_all_cases_handled.summary".parse::<MessageKey>(),
            Ok(MessageKey::NotAllCasesHandled)
        );
        assert!("nope".parse::<MessageKey>().is_err());
    }

    #[test]
    fn template_translator_falls_back_to_english() {
        let translator = TemplateTranslator::from_table([(
            "duplicate_key",
            "La constante %{name}::%{key} existe déjà.",
        )])
        .unwrap();

        assert_eq!(
            translator.render(MessageKey::DuplicateKey, &params()),
            "La constante Colors::RED existe déjà."
        );
        assert_eq!(
            translator.render(MessageKey::UninitializedConstant, &params()),
            "The constant Colors::RED has not been defined."
        );
    }

    #[test]
    fn closures_are_translators() {
        let upper = |key: MessageKey, _: &MessageParams| key.as_str().to_uppercase();
        assert_eq!(upper.render(MessageKey::DuplicateKey, &params()), "DUPLICATE_KEY");
    }

    #[test]
    fn with_list_joins_items() {
        let p = MessageParams::new().with_list("values", ["red", "green"]);
        assert_eq!(p.get("values"), Some("red, green"));
        assert_eq!(p.len(), 1);
    }
}
