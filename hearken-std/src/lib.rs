//! # hearken-std
//!
//! Standard implementations for the Hearken listener dispatch core.
//!
//! This crate provides:
//! - **Listener types**: [`ByType`], [`ByName`] and their event-type resolvers
//! - **Listen resolvers**: [`TypedListenResolver`], [`NamedListenResolver`],
//!   [`ExtractListenResolver`]
//! - **Testing utilities**: [`testing::CallRecorder`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use hearken_core;

// Modules
pub mod listener_types;
pub mod resolvers;
pub mod testing;

pub use listener_types::{ByName, ByType, NameEventTypeResolver, TypeEventTypeResolver};
pub use resolvers::{ExtractListenResolver, NamedListenResolver, TypedListenResolver};
