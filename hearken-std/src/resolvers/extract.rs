//! Resolver for routines whose parameters are extracted from the event.

use super::downcast_event;
use hearken_core::{
    Event, EventType, FromEventParams, ListenDescriptor, ListenResolver, ParamsError,
    RegistrationError,
};
use std::marker::PhantomData;

/// Claims the Rust type `E` and builds the argument tuple `Args` with
/// [`FromEvent`](hearken_core::FromEvent) extractors, left to right.
///
/// # Example
///
/// ```rust,ignore
/// // fn on_paid(&self, id: OrderId, amount: Amount)
/// let resolver = ExtractListenResolver::<OrderPaid, (OrderId, Amount)>::new();
/// ```
pub struct ExtractListenResolver<E, Args> {
    event_type: EventType,
    _phantom: PhantomData<fn() -> (E, Args)>,
}

impl<E: Event, Args> ExtractListenResolver<E, Args> {
    /// Create a resolver for events of type `E`.
    pub fn new() -> Self {
        Self {
            event_type: EventType::of::<E>(),
            _phantom: PhantomData,
        }
    }
}

impl<E: Event, Args> Default for ExtractListenResolver<E, Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, Args> ListenResolver for ExtractListenResolver<E, Args>
where
    E: Event,
    Args: FromEventParams<E> + 'static,
{
    type Args = Args;

    fn init(&mut self, listen: &ListenDescriptor) -> Result<(), RegistrationError> {
        if let Some(name) = listen.event_name() {
            return Err(listen.incompatible(format!(
                "declares event name `{name}` but routes by type `{}`",
                std::any::type_name::<E>()
            )));
        }
        Ok(())
    }

    fn event_type(&self) -> &EventType {
        &self.event_type
    }

    fn resolve_params(&self, event: &dyn Event) -> Result<Self::Args, ParamsError> {
        Args::from_event_params(downcast_event::<E>(event)?)
    }
}
