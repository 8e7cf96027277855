//! # Listen Resolution
//!
//! A [`ListenResolver`] is the per-routine strategy that fixes which event
//! type a listen routine claims and turns a matching event into the
//! routine's argument list.
//!
//! # Lifecycle
//!
//! 1. The discovery layer creates the resolver and describes the routine in a
//!    [`ListenDescriptor`].
//! 2. The executor builder calls [`ListenResolver::init`] exactly once.
//!    Declarations the resolver cannot serve fail here, aborting the
//!    listener's registration.
//! 3. From then on the resolver is immutable: [`ListenResolver::event_type`]
//!    is constant and [`ListenResolver::resolve_params`] is a pure function.
//!
//! Parameter count and types are carried by [`ListenResolver::Args`]; the
//! compiler rejects a routine whose signature does not take them.

use crate::{
    error::{ParamsError, RegistrationError},
    event::Event,
    event_type::EventType,
};
use std::{borrow::Cow, fmt};

/// Whether a listen routine may be invoked from outside its listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Callable by the dispatch core.
    #[default]
    Public,
    /// Declared for internal use only; registering it is an error.
    Restricted,
}

/// The declared shape of a listen routine, as seen by its resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenDescriptor {
    listener: String,
    name: &'static str,
    visibility: Visibility,
    event_name: Option<Cow<'static, str>>,
}

impl ListenDescriptor {
    /// Describes routine `name` of `listener`, public and without a declared
    /// event name.
    pub fn new(listener: impl Into<String>, name: &'static str) -> Self {
        Self {
            listener: listener.into(),
            name,
            visibility: Visibility::Public,
            event_name: None,
        }
    }

    /// Sets the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Declares the event name the routine listens to.
    pub fn with_event_name(mut self, event_name: impl Into<Cow<'static, str>>) -> Self {
        self.event_name = Some(event_name.into());
        self
    }

    /// Name of the owning listener.
    pub fn listener(&self) -> &str {
        &self.listener
    }

    /// Name of the routine.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Declared event name, if any.
    pub fn event_name(&self) -> Option<&Cow<'static, str>> {
        self.event_name.as_ref()
    }

    /// Builds an [`RegistrationError::IncompatibleListen`] for this routine.
    pub fn incompatible(&self, reason: impl fmt::Display) -> RegistrationError {
        RegistrationError::IncompatibleListen {
            listener: self.listener.clone(),
            listen: self.name,
            reason: reason.to_string(),
        }
    }
}

/// Per-routine strategy fixing the claimed event type and computing the
/// routine's arguments.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `ListenResolver`",
    label = "missing `ListenResolver` implementation",
    note = "Resolvers must implement `init`, `event_type` and `resolve_params`."
)]
pub trait ListenResolver: Send + Sync + 'static {
    /// The routine's arguments, in parameter order.
    type Args: Send;

    /// One-time initialization from the routine's declaration.
    ///
    /// Called by the builder before any other method.
    fn init(&mut self, listen: &ListenDescriptor) -> Result<(), RegistrationError>;

    /// The event type the routine claims. Constant after [`init`](Self::init).
    fn event_type(&self) -> &EventType;

    /// Computes the arguments for one invocation.
    fn resolve_params(&self, event: &dyn Event) -> Result<Self::Args, ParamsError>;
}
