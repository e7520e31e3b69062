//! # roster-std
//!
//! Standard implementations for the Roster enumeration registry.
//!
//! This crate provides:
//! - **Registry**: [`Registry`], [`RegistryBuilder`]
//! - **Host types**: the [`Enumeration`] trait
//! - **Case dispatch**: [`Cases`], [`ValueGroup`], [`CaseResult`]
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use roster_core;

// Modules
pub mod case;
pub mod enumeration;
pub mod registry;
pub mod testing;

pub use case::{CaseResult, Cases, ValueGroup};
pub use enumeration::Enumeration;
pub use registry::{Registry, RegistryBuilder};
