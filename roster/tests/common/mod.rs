//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use lazy_static::lazy_static;
use roster::{Registry, RegistryBuilder, Value};
use std::sync::Arc;

// ============================================================================
// Runtime Registries
// ============================================================================

/// Build `Colors { RED = "red", GREEN = "green", BLUE = "blue" }`.
pub fn colors() -> Registry {
    colors_builder().build()
}

fn colors_builder() -> RegistryBuilder {
    Registry::builder("Colors")
        .define("RED", "red")
        .and_then(|b| b.define("GREEN", "green"))
        .and_then(|b| b.define("BLUE", "blue"))
        .expect("colors fixture is valid")
}

lazy_static! {
    /// `Colors`, shared so it can be extended.
    pub static ref COLORS: Arc<Registry> = colors_builder().build_shared();

    /// `FirstSubclass < Colors { ORANGE = "orange" }`.
    pub static ref FIRST_SUBCLASS: Arc<Registry> =
        RegistryBuilder::extending("FirstSubclass", Arc::clone(&COLORS))
            .define("ORANGE", "orange")
            .expect("first subclass fixture is valid")
            .build_shared();

    /// `SecondSubclass < FirstSubclass { PINK = "pink" }`.
    pub static ref SECOND_SUBCLASS: Arc<Registry> =
        RegistryBuilder::extending("SecondSubclass", Arc::clone(&FIRST_SUBCLASS))
            .define("PINK", "pink")
            .expect("second subclass fixture is valid")
            .build_shared();
}

// ============================================================================
// Helpers
// ============================================================================

/// Shorthand for a string value.
pub fn s(text: &'static str) -> Value {
    Value::from(text)
}

/// Values of `registry` rendered as plain strings.
pub fn rendered_values(registry: &Registry) -> Vec<String> {
    registry.iter_values().map(ToString::to_string).collect()
}
