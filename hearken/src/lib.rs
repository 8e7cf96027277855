//! # hearken - Per-Listener Event Dispatch
//!
//! `hearken` routes an incoming event to the listen routine a listener
//! declared for the event's type. It is the dispatch layer of an event
//! framework: discovering listeners, and fanning events out across many of
//! them, belong to the layers around it.
//!
//! ## Quick Start
//!
//! ```rust
//! use hearken::prelude::*;
//! use hearken::{ByType, TypedListenResolver};
//!
//! #[derive(Clone)]
//! struct UserSignedUp { email: String }
//! impl Event for UserSignedUp {}
//!
//! struct Mailer;
//!
//! impl Mailer {
//!     fn welcome(&self, event: UserSignedUp) -> Result<(), std::io::Error> {
//!         assert!(event.email.contains('@'));
//!         Ok(())
//!     }
//! }
//!
//! let executor = ListenerExecutor::builder::<ByType>(Mailer)
//!     .listen(Listen::new("welcome", TypedListenResolver::<UserSignedUp>::new(), Mailer::welcome))
//!     .build()?;
//!
//! executor.execute(&UserSignedUp { email: "a@b.c".into() })?;
//! assert!(executor.event_types(PriorityType::Desc).is_empty());
//! # Ok::<(), BoxError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing`: debug events while building executors, trace events on
//!   dispatch.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod builder;
pub mod executor;

pub use builder::{Listen, ListenerExecutorBuilder};
pub use executor::{DynListenerExecutor, ListenExecutor, ListenerExecutor};

pub use hearken_core::{
    // Errors
    BoxError,
    // Events and keys
    Event,
    EventType,
    EventTypeResolver,
    ExtractError,
    // Extraction
    FromEvent,
    FromEventParams,
    IntoListenResult,
    KeyKind,
    ListenDescriptor,
    // Strategies
    ListenResolver,
    ListenRoutine,
    ListenerType,
    ListenerTypeId,
    ParamsError,
    Payload,
    PriorityType,
    RegistrationError,
    TypeKey,
    Visibility,
    short_type_name,
};

pub use hearken_std::{
    ByName, ByType, ExtractListenResolver, NameEventTypeResolver, NamedListenResolver,
    TypeEventTypeResolver, TypedListenResolver,
};

/// Testing utilities.
pub mod testing {
    pub use hearken_std::testing::{CallRecorder, FailingRoutineError};
}

/// Prelude module - common imports for Hearken.
///
/// # Usage
///
/// ```rust
/// use hearken::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, DynListenerExecutor, Event, EventType, Listen, ListenerExecutor, PriorityType,
        RegistrationError,
    };
}
