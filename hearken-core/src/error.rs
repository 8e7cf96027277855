//! Error types for Hearken.
//!
//! This module provides the two failure classes of the dispatch core:
//!
//! - [`RegistrationError`] - Structural defects found while building a
//!   listener executor
//! - [`ParamsError`] - Mechanical failures while resolving the arguments of a
//!   listen routine
//!
//! Failures raised by listen routines themselves are not wrapped: they travel
//! as the [`BoxError`] the routine produced.

use crate::event_type::EventType;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort the registration of one listener.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Two listen routines claim the same event type.
    #[error(
        "listener `{listener}` has multiple listen routines for event type {event_type}: `{first}` and `{second}`"
    )]
    DuplicateEventType {
        /// The listener being registered.
        listener: String,
        /// The contested key.
        event_type: EventType,
        /// The routine registered first.
        first: &'static str,
        /// The routine that claimed the key again.
        second: &'static str,
    },

    /// The listen routine is not callable from outside the listener.
    #[error("listen routine `{listener}::{listen}` must be public")]
    NotInvocable {
        /// The listener being registered.
        listener: String,
        /// The offending routine.
        listen: &'static str,
    },

    /// The routine's declaration does not fit its resolver.
    #[error("listen routine `{listener}::{listen}` does not fit its resolver: {reason}")]
    IncompatibleListen {
        /// The listener being registered.
        listener: String,
        /// The offending routine.
        listen: &'static str,
        /// What the resolver rejected.
        reason: String,
    },
}

/// Errors while computing the arguments of a listen routine.
///
/// These indicate a registration defect that escaped construction-time
/// validation, such as two event types sharing one name.
#[derive(Error, Debug)]
pub enum ParamsError {
    /// The event is not of the type the routine takes.
    #[error("expected event of type `{expected}`, got `{actual}`")]
    TypeMismatch {
        /// Type the resolver downcasts to.
        expected: &'static str,
        /// Concrete type of the dispatched event.
        actual: &'static str,
    },

    /// An extractor failed.
    #[error("failed to extract parameter {index} (`{param}`)")]
    Extract {
        /// Zero-based position in the routine's parameter list.
        index: usize,
        /// Type name of the extractor.
        param: &'static str,
        /// The extractor's error.
        #[source]
        source: BoxError,
    },
}

/// Error type for extraction failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("extraction failed: {message}")]
pub struct ExtractError {
    message: String,
}

impl ExtractError {
    /// Create a new extraction error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
