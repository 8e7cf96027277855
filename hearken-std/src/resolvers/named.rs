//! Resolver for routines taking the event itself, routed by name.

use super::downcast_event;
use hearken_core::{
    Event, EventType, ListenDescriptor, ListenResolver, ParamsError, RegistrationError,
    short_type_name,
};
use std::marker::PhantomData;

/// Claims an event name and passes a clone of the event, downcast to `E`.
///
/// The claimed name is the routine's declared event name or, when none is
/// declared, the short type name of `E`.
pub struct NamedListenResolver<E> {
    event_type: EventType,
    _phantom: PhantomData<fn() -> E>,
}

impl<E: Event> NamedListenResolver<E> {
    /// Create a resolver for events of type `E`.
    pub fn new() -> Self {
        Self {
            event_type: EventType::name(short_type_name(std::any::type_name::<E>())),
            _phantom: PhantomData,
        }
    }
}

impl<E: Event> Default for NamedListenResolver<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event + Clone> ListenResolver for NamedListenResolver<E> {
    type Args = (E,);

    fn init(&mut self, listen: &ListenDescriptor) -> Result<(), RegistrationError> {
        if let Some(name) = listen.event_name() {
            if name.trim().is_empty() {
                return Err(listen.incompatible("declared event name is blank"));
            }
            self.event_type = EventType::Name(name.clone());
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            listen = listen.name(),
            event_type = %self.event_type,
            "named listen resolved"
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
