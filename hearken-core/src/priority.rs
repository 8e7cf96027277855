//! Ordering intent attached to each listen routine.

/// Ordering intent for cross-listener execution of one event type.
///
/// The dispatch core only stores and reports this value; an outer event bus
/// decides what ascending and descending mean when it orders listeners by
/// their priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriorityType {
    /// Listeners run in ascending priority order.
    #[default]
    Asc,
    /// Listeners run in descending priority order.
    Desc,
}
