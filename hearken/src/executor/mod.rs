//! Dispatch executors.
//!
//! - [`ListenExecutor`] - One listen routine bound to its resolver
//! - [`ListenerExecutor`] - The per-listener routing table
//! - [`DynListenerExecutor`] - Listener-type-erased view for event buses

mod listen;
mod listener;

pub use listen::ListenExecutor;
pub use listener::{DynListenerExecutor, ListenerExecutor};
