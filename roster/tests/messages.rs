//! Integration tests for rendering errors through translators.

mod common;

use common::{colors, s};
use roster::{
    Cases, Localized, MessageKey, MessageParams, RosterError, TemplateTranslator,
    UnknownMessageKey, testing::RecordingTranslator,
};

fn duplicate_value() -> RosterError {
    colors()
        .define("SCARLET", Some(s("red")))
        .unwrap_err()
        .into()
}

#[test]
fn test_english_is_the_default_rendering() {
    let err = duplicate_value();

    assert_eq!(err.to_string(), "The value red has already been defined.");
}

#[test]
fn test_template_translator_replaces_text_only() {
    let french = TemplateTranslator::new().with_template(
        MessageKey::DuplicateValue,
        "La valeur %{value} est déjà définie dans %{name}.",
    );
    let err = duplicate_value();

    assert_eq!(err.render(&french), "La valeur red est déjà définie dans Colors.");
    // Keys without a template fall back to English.
    assert_eq!(
        french.template(MessageKey::DuplicateKey),
        MessageKey::DuplicateKey.english_template()
    );
}

#[test]
fn test_template_table_accepts_paths_and_short_names() {
    let table = TemplateTranslator::from_table([
        ("roster.errors.messages.not_all_cases_handled.summary", "Manque : %{values}"),
        ("values_not_defined", "Inconnu : %{values}"),
    ])
    .unwrap();

    let colors = colors();
    let cases = Cases::new().when(s("red"), || ());
    let err = colors.dispatch(&s("red"), &cases).unwrap_err();

    assert_eq!(err.render(&table), "Manque : green, blue");
    assert_eq!(
        table.template(MessageKey::ValuesNotDefined),
        "Inconnu : %{values}"
    );
}

#[test]
fn test_template_table_rejects_unknown_names() {
    let err = TemplateTranslator::from_table([("no_such_message", "?")]).unwrap_err();

    assert_eq!(err, UnknownMessageKey("no_such_message".to_string()));
}

#[test]
fn test_same_key_and_params_with_or_without_translation() {
    let english = RecordingTranslator::new();
    let french = RecordingTranslator::wrapping(
        TemplateTranslator::new().with_template(MessageKey::DuplicateValue, "%{value} existe"),
    );
    let err = duplicate_value();

    assert_eq!(err.render(&english), "The value red has already been defined.");
    assert_eq!(err.render(&french), "red existe");
    assert_eq!(english.calls(), french.calls());
    assert_eq!(english.keys(), vec![MessageKey::DuplicateValue]);
}

#[test]
fn test_closures_are_translators() {
    let shout = |key: MessageKey, params: &MessageParams| {
        format!("{}! {}", key.as_str().to_uppercase(), params.get("key").unwrap_or("?"))
    };
    let err = colors().access("PURPLE").unwrap_err();

    assert_eq!(err.render(&shout), "UNINITIALIZED_CONSTANT! PURPLE");
}
