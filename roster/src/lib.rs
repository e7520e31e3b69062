//! # roster - Enumerations with Exhaustive Case Dispatch
//!
//! `roster` lets a type own a closed set of named constants, each a
//! `(key, value)` pair, and dispatch over them with a case mapping that is
//! checked for exhaustiveness before any handler runs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster::{enumeration, Cases, Enumeration, Value};
//!
//! enumeration! {
//!     pub struct Colors {
//!         RED = "red",
//!         GREEN = "green",
//!     }
//! }
//!
//! assert_eq!(Colors::parse("Red"), Some(&Colors::RED));
//!
//! let cases = Cases::new()
//!     .when(Colors::RED, || "stop")
//!     .when(Colors::GREEN, || "go");
//! assert_eq!(Colors::case(&Colors::GREEN, &cases)?.one(), Some("go"));
//! ```
//!
//! ## Runtime Registries
//!
//! Registries can also be built without the macro:
//!
//! ```rust,ignore
//! let sizes = Registry::builder("Sizes")
//!     .define("SMALL", 1)?
//!     .define("LARGE", 2)?
//!     .build();
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use roster_core::{
    // Handlers
    CaseHandler,
    // Errors
    CaseError,
    DefineError,
    DuplicateKeyError,
    DuplicateValueError,
    // Messages
    EnglishTranslator,
    // Members
    Entry,
    IntoCaseHandler,
    Key,
    Localized,
    MessageKey,
    MessageKeyTranslator,
    MessageParams,
    NoArgs,
    NotAllCasesHandledError,
    RosterError,
    TemplateTranslator,
    Translator,
    UninitializedConstantError,
    UnknownMessageKey,
    Value,
    ValuesNotDefinedError,
    WithValue,
    interpolate,
};

pub use roster_std::{CaseResult, Cases, Enumeration, Registry, RegistryBuilder, ValueGroup};

/// Ordered map returned by `to_map`.
pub use indexmap::IndexMap;

/// Message rendering and translation tables.
pub mod messages {
    pub use roster_core::{
        EnglishTranslator, Localized, MessageKey, MessageKeyTranslator, MessageParams,
        TemplateTranslator, Translator, UnknownMessageKey, interpolate,
    };
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use roster_std::testing::*;
}

/// Prelude module - common imports for Roster.
///
/// # Usage
///
/// ```rust,ignore
/// use roster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CaseError,
        CaseResult,
        Cases,
        DefineError,
        Enumeration,
        Key,
        Localized,
        Registry,
        RegistryBuilder,
        RosterError,
        Value,
    };

    #[cfg(feature = "macros")]
    pub use crate::enumeration;
}

#[cfg(feature = "macros")]
pub use roster_macros::enumeration;
