//! Event trait for dispatchable values.

use std::{any::Any, borrow::Cow};

/// A marker trait for values that can be dispatched to listeners.
///
/// Events must be `Send + Sync + 'static` so that a shared listener executor
/// can route them from any thread.
///
/// # Example
///
/// ```rust
/// use hearken_core::Event;
///
/// #[derive(Clone, Debug)]
/// struct OrderCreated { id: u64 }
///
/// impl Event for OrderCreated {}
///
/// let event = OrderCreated { id: 7 };
/// assert_eq!(event.event_name(), "OrderCreated");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Event",
    label = "must implement `Event`",
    note = "Add `impl Event for {Self} {}`; events must be `Send + Sync + 'static`."
)]
pub trait Event: Any + Send + Sync {
    /// The name used by name-keyed listeners.
    ///
    /// Defaults to the short type name (`OrderCreated` for
    /// `my_app::orders::OrderCreated`). Events carrying their name as data
    /// override this.
    fn event_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(short_type_name(std::any::type_name::<Self>()))
    }

    /// The full Rust type name of the concrete event, for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl dyn Event {
    /// Returns `true` if the concrete event type is `T`.
    pub fn is<T: Event>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Downcasts to the concrete event type.
    pub fn downcast_ref<T: Event>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

impl Event for String {
    fn event_name(&self) -> Cow<'static, str> {
        Cow::Owned(self.clone())
    }
}

impl Event for &'static str {
    fn event_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(*self)
    }
}

/// Strips the module path and generic arguments from a type name.
///
/// `alloc::vec::Vec<u8>` becomes `Vec`, `app::OrderCreated` becomes
/// `OrderCreated`.
pub fn short_type_name(full: &'static str) -> &'static str {
    let base = match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    };
    base.rsplit("::").next().unwrap_or(base)
}
