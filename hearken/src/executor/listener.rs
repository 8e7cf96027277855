//! # Listener Executor
//!
//! The per-listener dispatch record. It holds the listener instance, the
//! event-type resolver of its declared listener type, and a routing table
//! from event-type key to [`ListenExecutor`].
//!
//! # Dispatch
//!
//! ```text
//! event ──► EventTypeResolver::resolve ──► key ──► table[key]
//!                                                    │
//!                          no entry: Ok(()) ◄────────┤
//!                                                    ▼
//!                              ListenExecutor::execute(listener, event)
//! ```
//!
//! Not every listener handles every event, so a missing entry is a silent
//! no-op. Everything is immutable after construction; a `ListenerExecutor`
//! can be shared through `Arc` and dispatched from many threads at once.

use super::listen::ListenExecutor;
use crate::builder::ListenerExecutorBuilder;
use hearken_core::{
    BoxError, Event, EventType, EventTypeResolver, ListenerType, ListenerTypeId, PriorityType,
};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

/// Routes events to the listen routines of one listener.
pub struct ListenerExecutor<L> {
    name: String,
    listener_type: ListenerTypeId,
    priority: i32,
    listener: L,
    resolver: Arc<dyn EventTypeResolver>,
    listens: HashMap<EventType, ListenExecutor<L>>,
}

impl<L> ListenerExecutor<L> {
    /// Starts building an executor for `listener`, keyed by listener type `T`.
    pub fn builder<T: ListenerType>(listener: L) -> ListenerExecutorBuilder<L> {
        ListenerExecutorBuilder::new::<T>(listener)
    }

    /// Assembles an executor from a table whose keys already match their
    /// entries.
    pub(crate) fn from_parts(
        name: String,
        listener_type: ListenerTypeId,
        priority: i32,
        listener: L,
        resolver: Arc<dyn EventTypeResolver>,
        listens: HashMap<EventType, ListenExecutor<L>>,
    ) -> Self {
        debug_assert!(listens.iter().all(|(key, listen)| listen.event_type() == key));
        Self {
            name,
            listener_type,
            priority,
            listener,
            resolver,
            listens,
        }
    }

    /// Dispatches `event` to the routine claiming its event type, if any.
    ///
    /// Returns `Ok(())` without invoking anything when no routine matches.
    /// Any failure of the matched routine is returned unchanged.
    pub fn execute(&self, event: &dyn Event) -> Result<(), BoxError> {
        let event_type = self.resolver.resolve(event);
        let listen = self.listens.get(&event_type);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            listener = %self.name,
            event_type = %event_type,
            listen = listen.map(ListenExecutor::name),
            "dispatching event"
        );

        match listen {
            Some(listen) => listen.execute(&self.listener, event),
            None => Ok(()),
        }
    }

    /// Returns `true` if [`execute`](Self::execute) would invoke a routine.
    pub fn handles(&self, event: &dyn Event) -> bool {
        self.listens.contains_key(&self.resolver.resolve(event))
    }

    /// The event types whose routine was declared with `priority_type`.
    ///
    /// The set is a snapshot; changing it does not affect the executor.
    pub fn event_types(&self, priority_type: PriorityType) -> HashSet<EventType> {
        self.listens
            .iter()
            .filter(|(_, listen)| listen.priority_type() == priority_type)
            .map(|(event_type, _)| event_type.clone())
            .collect()
    }

    /// All event types this listener handles.
    pub fn all_event_types(&self) -> HashSet<EventType> {
        self.listens.keys().cloned().collect()
    }

    /// The routine claiming `event_type`.
    pub fn listen(&self, event_type: &EventType) -> Option<&ListenExecutor<L>> {
        self.listens.get(event_type)
    }

    /// The declared listener type.
    pub fn listener_type(&self) -> ListenerTypeId {
        self.listener_type
    }

    /// The declared priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The listener instance.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// The listener's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of listen routines.
    pub fn len(&self) -> usize {
        self.listens.len()
    }

    /// Check if the listener has no listen routines.
    pub fn is_empty(&self) -> bool {
        self.listens.is_empty()
    }
}

impl<L> fmt::Debug for ListenerExecutor<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerExecutor")
            .field("name", &self.name)
            .field("listener_type", &self.listener_type)
            .field("priority", &self.priority)
            .field("listens", &self.listens.values().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Object-safe view of a [`ListenerExecutor`] with the listener type erased.
///
/// An event bus holds `Arc<dyn DynListenerExecutor>` for listeners of
/// different types, dispatches to each, and orders them using
/// [`priority`](Self::priority) and [`event_types`](Self::event_types).
pub trait DynListenerExecutor: Send + Sync {
    /// See [`ListenerExecutor::execute`].
    fn execute(&self, event: &dyn Event) -> Result<(), BoxError>;

    /// See [`ListenerExecutor::handles`].
    fn handles(&self, event: &dyn Event) -> bool;

    /// See [`ListenerExecutor::event_types`].
    fn event_types(&self, priority_type: PriorityType) -> HashSet<EventType>;

    /// See [`ListenerExecutor::listener_type`].
    fn listener_type(&self) -> ListenerTypeId;

    /// See [`ListenerExecutor::priority`].
    fn priority(&self) -> i32;

    /// See [`ListenerExecutor::name`].
    fn name(&self) -> &str;
}

impl<L: Send + Sync> DynListenerExecutor for ListenerExecutor<L> {
    fn execute(&self, event: &dyn Event) -> Result<(), BoxError> {
        ListenerExecutor::execute(self, event)
    }

    fn handles(&self, event: &dyn Event) -> bool {
        ListenerExecutor::handles(self, event)
    }

    fn event_types(&self, priority_type: PriorityType) -> HashSet<EventType> {
        ListenerExecutor::event_types(self, priority_type)
    }

    fn listener_type(&self) -> ListenerTypeId {
        self.listener_type
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn name(&self) -> &str {
        &self.name
    }
}
