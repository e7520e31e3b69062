//! # roster-core
//!
//! Core types for the Roster enumeration registry.
//!
//! This crate has minimal dependencies and holds the vocabulary shared by the
//! registry, the case dispatcher and anything that renders their errors:
//!
//! - [`Key`], [`Value`], [`Entry`] - the members of an enumeration
//! - [`CaseHandler`], [`IntoCaseHandler`] - arity-resolved case handlers
//! - [`MessageKey`], [`Translator`], [`Localized`] - structured error messages
//!
//! # Error Types
//!
//! - [`RosterError`] - Top-level error type
//! - [`DefineError`] - Duplicate keys and values at definition time
//! - [`UninitializedConstantError`] - Const-style access to unknown keys
//! - [`CaseError`] - Case mapping validation failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod entry;
mod error;
mod handler;
mod key;
mod message;
mod value;

// Re-exports
pub use entry::Entry;
pub use error::{
    CaseError, DefineError, DuplicateKeyError, DuplicateValueError, NotAllCasesHandledError,
    RosterError, UninitializedConstantError, ValuesNotDefinedError,
};
pub use handler::{CaseHandler, IntoCaseHandler, NoArgs, WithValue};
pub use key::Key;
pub use message::{
    EnglishTranslator, Localized, MessageKey, MessageKeyTranslator, MessageParams,
    TemplateTranslator, Translator, UnknownMessageKey, interpolate,
};
pub use value::Value;
