//! # Standard Listen Resolvers
//!
//! | Resolver | Arguments | Claimed key | Listener type |
//! |----------|-----------|-------------|---------------|
//! | [`TypedListenResolver<E>`] | `(E,)` | type of `E` | [`ByType`](crate::ByType) |
//! | [`NamedListenResolver<E>`] | `(E,)` | declared name, else short name of `E` | [`ByName`](crate::ByName) |
//! | [`ExtractListenResolver<E, Args>`] | extractor tuple | type of `E` | [`ByType`](crate::ByType) |
//!
//! All of them downcast the dispatched event to `E`; an event of another type
//! reaching them is a [`ParamsError::TypeMismatch`].

mod extract;
mod named;
mod typed;

pub use extract::ExtractListenResolver;
pub use named::NamedListenResolver;
pub use typed::TypedListenResolver;

use hearken_core::{Event, ParamsError};

fn downcast_event<E: Event>(event: &dyn Event) -> Result<&E, ParamsError> {
    event
        .downcast_ref::<E>()
        .ok_or_else(|| ParamsError::TypeMismatch {
            expected: std::any::type_name::<E>(),
            actual: event.type_name(),
        })
}
