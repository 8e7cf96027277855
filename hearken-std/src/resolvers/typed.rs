//! Resolver for routines taking the event itself, routed by type.

use super::downcast_event;
use hearken_core::{
    Event, EventType, ListenDescriptor, ListenResolver, ParamsError, RegistrationError,
};
use std::marker::PhantomData;

/// Claims the Rust type `E` and passes a clone of the event.
pub struct TypedListenResolver<E> {
    event_type: EventType,
    _phantom: PhantomData<fn() -> E>,
}

impl<E: Event> TypedListenResolver<E> {
    /// Create a resolver for events of type `E`.
    pub fn new() -> Self {
        Self {
            event_type: EventType::of::<E>(),
            _phantom: PhantomData,
        }
    }
}

impl<E: Event> Default for TypedListenResolver<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event + Clone> ListenResolver for TypedListenResolver<E> {
    type Args = (E,);

    fn init(&mut self, listen: &ListenDescriptor) -> Result<(), RegistrationError> {
        if let Some(name) = listen.event_name() {
            return Err(listen.incompatible(format!(
                "declares event name `{name}` but routes by type `{}`",
                std::any::type_name::<E>()
            )));
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            listen = listen.name(),
            event_type = %self.event_type,
            "typed listen resolved"
        );
        Ok(())
    }

    fn event_type(&self) -> &EventType {
        &self.event_type
    }

    fn resolve_params(&self, event: &dyn Event) -> Result<Self::Args, ParamsError> {
        downcast_event::<E>(event).map(|event| (event.clone(),))
    }
}
