//! Executor binding one listen routine to its resolver.

use hearken_core::{BoxError, Event, EventType, ListenResolver, ListenRoutine, PriorityType};
use std::fmt;

/// Type-erased resolver and routine pair for listener `L`.
///
/// This trait allows routines with different argument tuples to be stored
/// in one routing table and called uniformly.
trait ErasedListen<L>: Send + Sync {
    fn event_type(&self) -> &EventType;

    fn execute(&self, listener: &L, event: &dyn Event) -> Result<(), BoxError>;
}

/// Wrapper implementing [`ErasedListen`] for a typed resolver and routine.
struct BoundListen<R, F> {
    resolver: R,
    routine: F,
}

impl<L, R, F> ErasedListen<L> for BoundListen<R, F>
where
    R: ListenResolver,
    F: ListenRoutine<L, R::Args>,
{
    fn event_type(&self) -> &EventType {
        self.resolver.event_type()
    }

    fn execute(&self, listener: &L, event: &dyn Event) -> Result<(), BoxError> {
        let args = self.resolver.resolve_params(event)?;
        self.routine.invoke(listener, args)
    }
}

/// An immutable binding of one listen routine to its resolver and ordering
/// intent.
///
/// The event type it claims is its resolver's, fixed for its lifetime.
pub struct ListenExecutor<L> {
    name: &'static str,
    priority_type: PriorityType,
    listen: Box<dyn ErasedListen<L>>,
}

impl<L> ListenExecutor<L> {
    /// Binds `routine` to an already initialized `resolver`.
    ///
    /// [`ListenerExecutorBuilder`](crate::ListenerExecutorBuilder) initializes
    /// resolvers itself; use this directly only with a resolver whose
    /// [`init`](ListenResolver::init) has run.
    pub fn new<R, F>(
        name: &'static str,
        resolver: R,
        priority_type: PriorityType,
        routine: F,
    ) -> Self
    where
        R: ListenResolver,
        F: ListenRoutine<L, R::Args>,
    {
        Self {
            name,
            priority_type,
            listen: Box::new(BoundListen { resolver, routine }),
        }
    }

    /// Resolves the routine's arguments from `event` and invokes it on
    /// `listener`.
    ///
    /// A failure of the routine is returned exactly as the routine produced
    /// it. A failure to resolve the arguments is a boxed
    /// [`ParamsError`](hearken_core::ParamsError).
    pub fn execute(&self, listener: &L, event: &dyn Event) -> Result<(), BoxError> {
        self.listen.execute(listener, event)
    }

    /// The event type this routine claims.
    pub fn event_type(&self) -> &EventType {
        self.listen.event_type()
    }

    /// The routine's ordering intent.
    pub fn priority_type(&self) -> PriorityType {
        self.priority_type
    }

    /// The routine's name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<L> fmt::Debug for ListenExecutor<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenExecutor")
            .field("name", &self.name)
            .field("event_type", self.event_type())
            .field("priority_type", &self.priority_type)
            .finish()
    }
}
