//! # Event-Type Keys
//!
//! Every dispatch starts by classifying the incoming event into an
//! [`EventType`] key. A listener executor owns one [`EventTypeResolver`] for
//! this, chosen once from the listener's declared [`ListenerType`], and looks
//! the key up in its routing table.
//!
//! Two events with equal keys are the same event type for routing purposes.

use crate::event::Event;
use std::{
    any::{Any, TypeId},
    borrow::Cow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A Rust type identity with its name attached for diagnostics.
///
/// Equality, ordering, and hashing only consider the [`TypeId`].
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// The key of a static type.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The key of the concrete type behind an event reference.
    pub fn of_val(event: &dyn Event) -> Self {
        let any: &dyn Any = event;
        Self {
            id: any.type_id(),
            name: event.type_name(),
        }
    }

    /// The underlying [`TypeId`].
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The full type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this key identifies `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for TypeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The two shapes an [`EventType`] key can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// [`EventType::Type`] keys.
    Type,
    /// [`EventType::Name`] keys.
    Name,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Type => f.write_str("type"),
            KeyKind::Name => f.write_str("name"),
        }
    }
}

/// The routing key classifying an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventType {
    /// Keyed by the concrete Rust type of the event.
    Type(TypeKey),
    /// Keyed by a name, independent of the Rust type.
    Name(Cow<'static, str>),
}

impl EventType {
    /// Type key for events of type `E`.
    pub fn of<E: Event>() -> Self {
        EventType::Type(TypeKey::of::<E>())
    }

    /// Type key for the concrete type behind `event`.
    pub fn of_val(event: &dyn Event) -> Self {
        EventType::Type(TypeKey::of_val(event))
    }

    /// Name key.
    pub fn name(name: impl Into<Cow<'static, str>>) -> Self {
        EventType::Name(name.into())
    }

    /// The shape of this key.
    pub fn kind(&self) -> KeyKind {
        match self {
            EventType::Type(_) => KeyKind::Type,
            EventType::Name(_) => KeyKind::Name,
        }
    }

    /// Returns the name if this is a name key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            EventType::Name(name) => Some(name),
            EventType::Type(_) => None,
        }
    }

    /// Returns the type key if this is a type key.
    pub fn as_type(&self) -> Option<TypeKey> {
        match self {
            EventType::Type(key) => Some(*key),
            EventType::Name(_) => None,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Type(key) => write!(f, "type `{key}`"),
            EventType::Name(name) => write!(f, "`{name}`"),
        }
    }
}

impl From<&'static str> for EventType {
    fn from(name: &'static str) -> Self {
        EventType::name(name)
    }
}

impl From<String> for EventType {
    fn from(name: String) -> Self {
        EventType::name(name)
    }
}

/// Computes the event-type key of an incoming event.
///
/// Resolvers must be pure functions of the event. An event the resolver
/// cannot classify should map to a key no listener registers, which turns
/// dispatch into a no-op rather than an error.
///
/// Closures are resolvers too:
///
/// ```rust
/// use hearken_core::{Event, EventType, EventTypeResolver};
///
/// let by_len = |event: &dyn Event| EventType::name(format!("len-{}", event.event_name().len()));
/// assert_eq!(by_len.resolve(&"abc"), EventType::name("len-3"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `EventTypeResolver`",
    label = "missing `EventTypeResolver` implementation",
    note = "Implement `resolve`, or use a closure `Fn(&dyn Event) -> EventType`."
)]
pub trait EventTypeResolver: Send + Sync + 'static {
    /// Classifies the event.
    fn resolve(&self, event: &dyn Event) -> EventType;
}

impl<F> EventTypeResolver for F
where
    F: Fn(&dyn Event) -> EventType + Send + Sync + 'static,
{
    fn resolve(&self, event: &dyn Event) -> EventType {
        (self)(event)
    }
}

/// The declared kind of a listener, selecting its [`EventTypeResolver`].
///
/// Implemented by zero-sized marker types. A listener declares exactly one.
pub trait ListenerType: 'static {
    /// Creates the event-type resolver used by listeners of this kind.
    fn resolver() -> Arc<dyn EventTypeResolver>;

    /// The only key shape the resolver produces, if it produces only one.
    ///
    /// Registration rejects a listen routine claiming a key of another
    /// shape, since no event could ever reach it. `None` accepts both.
    fn key_kind() -> Option<KeyKind> {
        None
    }
}

/// Identity of a [`ListenerType`] marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerTypeId(TypeKey);

impl ListenerTypeId {
    /// Identity of the listener type `T`.
    pub fn of<T: ListenerType>() -> Self {
        Self(TypeKey::of::<T>())
    }

    /// Returns `true` if this identifies `T`.
    pub fn is<T: ListenerType>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Full type name of the marker.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl fmt::Display for ListenerTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
