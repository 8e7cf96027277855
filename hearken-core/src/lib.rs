//! # hearken-core
//!
//! Core traits for the Hearken listener dispatch core.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! discovery layers and strategy implementations that don't need the
//! executors in `hearken`.
//!
//! # Dispatch Model
//!
//! A listener declares one [`ListenerType`] and any number of listen
//! routines. Dispatching an event to it takes two strategy calls:
//!
//! ## Classification ([`EventTypeResolver`])
//!
//! The listener type's resolver turns the event into an [`EventType`] key.
//! Keys are opaque: equal keys mean the same event type for routing.
//!
//! ## Argument Resolution ([`ListenResolver`])
//!
//! Each listen routine owns a resolver that fixes the key the routine claims
//! and computes its arguments from a matching event. The routine itself is a
//! typed callable ([`ListenRoutine`]), bound at registration time.
//!
//! ## Ordering Data ([`PriorityType`])
//!
//! Each routine carries an ordering intent that an outer event bus combines
//! with the listener's priority. The core only stores it.
//!
//! # Error Types
//!
//! - [`RegistrationError`] - Construction-time defects
//! - [`ParamsError`] - Mechanical argument-resolution failures
//! - [`BoxError`] - Dispatch results; routine failures pass through untouched

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod event;
mod event_type;
mod extract;
mod priority;
mod resolver;
mod routine;

// Re-exports
pub use error::{BoxError, ExtractError, ParamsError, RegistrationError};
pub use event::{Event, short_type_name};
pub use event_type::{
    EventType, EventTypeResolver, KeyKind, ListenerType, ListenerTypeId, TypeKey,
};
pub use extract::{FromEvent, FromEventParams, Payload};
pub use priority::PriorityType;
pub use resolver::{ListenDescriptor, ListenResolver, Visibility};
pub use routine::{IntoListenResult, ListenRoutine};
