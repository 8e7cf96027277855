//! # Registration
//!
//! Assembles a [`ListenerExecutor`] from a listener instance and its declared
//! listen routines. The discovery layer (annotations, inventories, hand
//! written setup code) decides *what* to register; this module validates it:
//!
//! 1. every routine must be [`Visibility::Public`];
//! 2. every resolver is initialized once from its routine's declaration;
//! 3. every claimed key has the shape the listener type's resolver produces;
//! 4. no two routines may claim the same event type;
//! 5. the listener type's event-type resolver is created once.
//!
//! Any failure aborts this one listener's registration. Builders share no
//! state, so independent listeners can be built concurrently.
//!
//! # Example
//!
//! ```rust
//! use hearken::{ByName, Listen, ListenerExecutor, NamedListenResolver, PriorityType};
//! use hearken::Event;
//!
//! #[derive(Clone)]
//! struct OrderCreated { id: u64 }
//! impl Event for OrderCreated {}
//!
//! struct Orders;
//!
//! impl Orders {
//!     fn on_order_created(&self, event: OrderCreated) {
//!         let _ = event.id;
//!     }
//! }
//!
//! let executor = ListenerExecutor::builder::<ByName>(Orders)
//!     .priority(10)
//!     .listen(
//!         Listen::new(
//!             "on_order_created",
//!             NamedListenResolver::<OrderCreated>::new(),
//!             Orders::on_order_created,
//!         )
//!         .priority_type(PriorityType::Asc),
//!     )
//!     .build()
//!     .unwrap();
//!
//! executor.execute(&OrderCreated { id: 1 }).unwrap();
//! ```

use crate::executor::{ListenExecutor, ListenerExecutor};
use hearken_core::{
    EventType, EventTypeResolver, KeyKind, ListenDescriptor, ListenResolver, ListenRoutine,
    ListenerType, ListenerTypeId, PriorityType, RegistrationError, Visibility, short_type_name,
};
use std::{
    borrow::Cow,
    collections::{HashMap, hash_map::Entry},
    fmt,
    sync::Arc,
};

/// A resolver and routine waiting for the resolver's initialization.
trait PendingListen<L>: Send {
    fn bind(
        self: Box<Self>,
        descriptor: &ListenDescriptor,
        priority_type: PriorityType,
    ) -> Result<ListenExecutor<L>, RegistrationError>;
}

struct Unbound<R, F> {
    resolver: R,
    routine: F,
}

impl<L, R, F> PendingListen<L> for Unbound<R, F>
where
    R: ListenResolver,
    F: ListenRoutine<L, R::Args>,
{
    fn bind(
        self: Box<Self>,
        descriptor: &ListenDescriptor,
        priority_type: PriorityType,
    ) -> Result<ListenExecutor<L>, RegistrationError> {
        let Unbound {
            mut resolver,
            routine,
        } = *self;
        resolver.init(descriptor)?;
        Ok(ListenExecutor::new(
            descriptor.name(),
            resolver,
            priority_type,
            routine,
        ))
    }
}

/// The declaration of one listen routine.
pub struct Listen<L> {
    name: &'static str,
    visibility: Visibility,
    event_name: Option<Cow<'static, str>>,
    priority_type: PriorityType,
    pending: Box<dyn PendingListen<L>>,
}

impl<L> Listen<L> {
    /// Declares routine `name`, resolved by `resolver`.
    ///
    /// Defaults: [`PriorityType::Asc`], [`Visibility::Public`], no declared
    /// event name.
    pub fn new<R, F>(name: &'static str, resolver: R, routine: F) -> Self
    where
        R: ListenResolver,
        F: ListenRoutine<L, R::Args>,
    {
        Self {
            name,
            visibility: Visibility::Public,
            event_name: None,
            priority_type: PriorityType::Asc,
            pending: Box::new(Unbound { resolver, routine }),
        }
    }

    /// Sets the ordering intent.
    pub fn priority_type(mut self, priority_type: PriorityType) -> Self {
        self.priority_type = priority_type;
        self
    }

    /// Sets the declared visibility.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Declares the event name the routine listens to, for name-keyed
    /// resolvers.
    pub fn event_name(mut self, event_name: impl Into<Cow<'static, str>>) -> Self {
        self.event_name = Some(event_name.into());
        self
    }

    /// The routine's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn descriptor(&self, listener: &str) -> ListenDescriptor {
        let descriptor =
            ListenDescriptor::new(listener, self.name).with_visibility(self.visibility);
        match &self.event_name {
            Some(event_name) => descriptor.with_event_name(event_name.clone()),
            None => descriptor,
        }
    }
}

impl<L> fmt::Debug for Listen<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listen")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("event_name", &self.event_name)
            .field("priority_type", &self.priority_type)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`ListenerExecutor`].
pub struct ListenerExecutorBuilder<L> {
    name: String,
    listener_type: ListenerTypeId,
    key_kind: Option<KeyKind>,
    resolver: fn() -> Arc<dyn EventTypeResolver>,
    priority: i32,
    listener: L,
    listens: Vec<Listen<L>>,
}

impl<L> ListenerExecutorBuilder<L> {
    /// Create a builder for `listener` of listener type `T`, with priority 0.
    ///
    /// The diagnostic name defaults to the short type name of `L`.
    pub fn new<T: ListenerType>(listener: L) -> Self {
        Self {
            name: short_type_name(std::any::type_name::<L>()).to_string(),
            listener_type: ListenerTypeId::of::<T>(),
            key_kind: T::key_kind(),
            resolver: T::resolver,
            priority: 0,
            listener,
            listens: Vec::new(),
        }
    }

    /// Override the name used in errors and logs.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the listener's priority.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Declare a listen routine.
    pub fn listen(mut self, listen: Listen<L>) -> Self {
        self.listens.push(listen);
        self
    }

    /// Validate the declarations and build the executor.
    pub fn build(self) -> Result<ListenerExecutor<L>, RegistrationError> {
        let Self {
            name,
            listener_type,
            key_kind,
            resolver,
            priority,
            listener,
            listens: declared,
        } = self;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            listener = %name,
            listener_type = %listener_type,
            priority,
            "parsing listener"
        );

        let mut listens: HashMap<EventType, ListenExecutor<L>> =
            HashMap::with_capacity(declared.len());
        for listen in declared {
            let descriptor = listen.descriptor(&name);
            let listen = parse_listen(&descriptor, listen)?;
            if let Some(expected) = key_kind {
                let claimed = listen.event_type().kind();
                if claimed != expected {
                    return Err(descriptor.incompatible(format!(
                        "claims a {claimed} key but listener type `{}` routes by {expected}",
                        short_type_name(listener_type.name())
                    )));
                }
            }
            match listens.entry(listen.event_type().clone()) {
                Entry::Occupied(entry) => {
                    return Err(RegistrationError::DuplicateEventType {
                        listener: name,
                        event_type: entry.key().clone(),
                        first: entry.get().name(),
                        second: listen.name(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(listen);
                }
            }
        }

        Ok(ListenerExecutor::from_parts(
            name,
            listener_type,
            priority,
            listener,
            resolver(),
            listens,
        ))
    }
}

fn parse_listen<L>(
    descriptor: &ListenDescriptor,
    listen: Listen<L>,
) -> Result<ListenExecutor<L>, RegistrationError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        listener = descriptor.listener(),
        listen = listen.name,
        "parsing listen routine"
    );

    if listen.visibility != Visibility::Public {
        return Err(RegistrationError::NotInvocable {
            listener: descriptor.listener().to_string(),
            listen: listen.name,
        });
    }
    listen.pending.bind(descriptor, listen.priority_type)
}

impl<L> fmt::Debug for ListenerExecutorBuilder<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerExecutorBuilder")
            .field("name", &self.name)
            .field("listener_type", &self.listener_type)
            .field("key_kind", &self.key_kind)
            .field("priority", &self.priority)
            .field("listens", &self.listens)
            .finish_non_exhaustive()
    }
}
