//! Error types for Roster.
//!
//! Every error carries structured fields and implements [`Localized`]; its
//! `Display` output is the [`EnglishTranslator`] rendering.
//!
//! - [`RosterError`] - Top-level error type
//! - [`DefineError`] - Rejected `define` calls
//! - [`UninitializedConstantError`] - Const-style access to an unknown key
//! - [`CaseError`] - Case mapping validation failures

use crate::{
    key::Key,
    message::{EnglishTranslator, Localized, MessageKey, MessageParams},
    value::Value,
};
use std::fmt;
use thiserror::Error;

fn display_english(err: &impl Localized, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&err.render(&EnglishTranslator))
}

/// A key already present in the effective set was defined again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError {
    /// Name of the declaring type.
    pub name: String,
    /// The offending key.
    pub key: Key,
}

impl Localized for DuplicateKeyError {
    fn message_key(&self) -> MessageKey {
        MessageKey::DuplicateKey
    }

    fn params(&self) -> MessageParams {
        MessageParams::new()
            .with("name", &self.name)
            .with("key", &self.key)
    }
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_english(self, f)
    }
}

/// A value already present in the effective set was defined again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct DuplicateValueError {
    /// Name of the declaring type.
    pub name: String,
    /// The offending value.
    pub value: Value,
}

impl Localized for DuplicateValueError {
    fn message_key(&self) -> MessageKey {
        MessageKey::DuplicateValue
    }

    fn params(&self) -> MessageParams {
        MessageParams::new()
            .with("name", &self.name)
            .with("value", &self.value)
    }
}

impl fmt::Display for DuplicateValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_english(self, f)
    }
}

/// Const-style access to a key that is not in the effective set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct UninitializedConstantError {
    /// Name of the declaring type.
    pub name: String,
    /// The requested key.
    pub key: Key,
}

impl Localized for UninitializedConstantError {
    fn message_key(&self) -> MessageKey {
        MessageKey::UninitializedConstant
    }

    fn params(&self) -> MessageParams {
        MessageParams::new()
            .with("name", &self.name)
            .with("key", &self.key)
    }
}

impl fmt::Display for UninitializedConstantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_english(self, f)
    }
}

/// A case mapping names values that do not belong to the enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValuesNotDefinedError {
    /// Name of the enumeration type.
    pub name: String,
    /// The superfluous values, in mapping order.
    pub values: Vec<Value>,
}

impl Localized for ValuesNotDefinedError {
    fn message_key(&self) -> MessageKey {
        MessageKey::ValuesNotDefined
    }

    fn params(&self) -> MessageParams {
        MessageParams::new()
            .with("name", &self.name)
            .with_list("values", &self.values)
    }
}

impl fmt::Display for ValuesNotDefinedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_english(self, f)
    }
}

/// A case mapping without a default leaves members uncovered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct NotAllCasesHandledError {
    /// Name of the enumeration type.
    pub name: String,
    /// The uncovered values, in declaration order.
    pub values: Vec<Value>,
}

impl Localized for NotAllCasesHandledError {
    fn message_key(&self) -> MessageKey {
        MessageKey::NotAllCasesHandled
    }

    fn params(&self) -> MessageParams {
        MessageParams::new()
            .with("name", &self.name)
            .with_list("values", &self.values)
    }
}

impl fmt::Display for NotAllCasesHandledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_english(self, f)
    }
}

/// Errors raised by a registry's `define`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefineError {
    /// The key is already defined.
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),

    /// The value is already defined.
    #[error(transparent)]
    DuplicateValue(#[from] DuplicateValueError),
}

impl Localized for DefineError {
    fn message_key(&self) -> MessageKey {
        match self {
            DefineError::DuplicateKey(e) => e.message_key(),
            DefineError::DuplicateValue(e) => e.message_key(),
        }
    }

    fn params(&self) -> MessageParams {
        match self {
            DefineError::DuplicateKey(e) => e.params(),
            DefineError::DuplicateValue(e) => e.params(),
        }
    }
}

/// Errors raised while validating a case mapping, before any handler runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// The mapping references values outside the enumeration.
    #[error(transparent)]
    ValuesNotDefined(#[from] ValuesNotDefinedError),

    /// The mapping does not cover every member and has no default.
    #[error(transparent)]
    NotAllCasesHandled(#[from] NotAllCasesHandledError),
}

impl Localized for CaseError {
    fn message_key(&self) -> MessageKey {
        match self {
            CaseError::ValuesNotDefined(e) => e.message_key(),
            CaseError::NotAllCasesHandled(e) => e.message_key(),
        }
    }

    fn params(&self) -> MessageParams {
        match self {
            CaseError::ValuesNotDefined(e) => e.params(),
            CaseError::NotAllCasesHandled(e) => e.params(),
        }
    }
}

/// Top-level error type for all Roster operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A `define` call was rejected.
    #[error(transparent)]
    Define(#[from] DefineError),

    /// Const-style access to an unknown key.
    #[error(transparent)]
    UninitializedConstant(#[from] UninitializedConstantError),

    /// A case mapping failed validation.
    #[error(transparent)]
    Case(#[from] CaseError),
}

impl Localized for RosterError {
    fn message_key(&self) -> MessageKey {
        match self {
            RosterError::Define(e) => e.message_key(),
            RosterError::UninitializedConstant(e) => e.message_key(),
            RosterError::Case(e) => e.message_key(),
        }
    }

    fn params(&self) -> MessageParams {
        match self {
            RosterError::Define(e) => e.params(),
            RosterError::UninitializedConstant(e) => e.params(),
            RosterError::Case(e) => e.params(),
        }
    }
}

// Convenience conversions
impl From<DuplicateKeyError> for RosterError {
    fn from(err: DuplicateKeyError) -> Self {
        RosterError::Define(err.into())
    }
}

impl From<DuplicateValueError> for RosterError {
    fn from(err: DuplicateValueError) -> Self {
        RosterError::Define(err.into())
    }
}

impl From<ValuesNotDefinedError> for RosterError {
    fn from(err: ValuesNotDefinedError) -> Self {
        RosterError::Case(err.into())
    }
}

impl From<NotAllCasesHandledError> for RosterError {
    fn from(err: NotAllCasesHandledError) -> Self {
        RosterError::Case(err.into())
    }
}
