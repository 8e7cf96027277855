//! Standard listener types and their event-type resolvers.
//!
//! | Listener type | Resolver | Key |
//! |---------------|----------|-----|
//! | [`ByType`] | [`TypeEventTypeResolver`] | concrete Rust type of the event |
//! | [`ByName`] | [`NameEventTypeResolver`] | [`Event::event_name`] |

use hearken_core::{Event, EventType, EventTypeResolver, KeyKind, ListenerType};
use std::sync::Arc;

/// Keys events by their concrete Rust type.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeEventTypeResolver;

impl EventTypeResolver for TypeEventTypeResolver {
    fn resolve(&self, event: &dyn Event) -> EventType {
        EventType::of_val(event)
    }
}

/// Keys events by their name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameEventTypeResolver;

impl EventTypeResolver for NameEventTypeResolver {
    fn resolve(&self, event: &dyn Event) -> EventType {
        EventType::Name(event.event_name())
    }
}

/// Listener type routing by event type.
///
/// Accepts only type-keyed resolvers such as
/// [`TypedListenResolver`](crate::resolvers::TypedListenResolver) and
/// [`ExtractListenResolver`](crate::resolvers::ExtractListenResolver).
#[derive(Debug, Clone, Copy, Default)]
pub struct ByType;

impl ListenerType for ByType {
    fn resolver() -> Arc<dyn EventTypeResolver> {
        Arc::new(TypeEventTypeResolver)
    }

    fn key_kind() -> Option<KeyKind> {
        Some(KeyKind::Type)
    }
}

/// Listener type routing by event name.
///
/// Accepts only name-keyed resolvers such as
/// [`NamedListenResolver`](crate::resolvers::NamedListenResolver).
#[derive(Debug, Clone, Copy, Default)]
pub struct ByName;

impl ListenerType for ByName {
    fn resolver() -> Arc<dyn EventTypeResolver> {
        Arc::new(NameEventTypeResolver)
    }

    fn key_kind() -> Option<KeyKind> {
        Some(KeyKind::Name)
    }
}
