//! Testing utilities for Hearken.
//!
//! This module provides utilities to make testing listeners and their
//! executors easier.
//!
//! # Features
//!
//! - [`CallRecorder`]: Records the arguments of every routine invocation
//! - [`FailingRoutineError`]: A distinguishable error for failure-path tests

use std::sync::{Arc, Mutex, MutexGuard};

/// Records the arguments a listen routine was invoked with.
///
/// Clones share the same record, so a listener can hold one clone while the
/// test inspects another.
///
/// # Example
///
/// ```rust
/// use hearken_std::testing::CallRecorder;
///
/// let recorder = CallRecorder::new();
/// let inspector = recorder.clone();
///
/// recorder.record(7u64);
/// assert_eq!(inspector.calls(), vec![7]);
/// ```
#[derive(Debug)]
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> CallRecorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record one invocation.
    pub fn record(&self, args: T) {
        self.lock().push(args);
    }

    /// Get the number of recorded invocations.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Clear all recorded invocations.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        // A panicking routine must not hide what was recorded before it.
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T: Clone> CallRecorder<T> {
    /// Get a clone of the recorded invocations, oldest first.
    pub fn calls(&self) -> Vec<T> {
        self.lock().clone()
    }
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

/// An error carrying a tag, for asserting that a routine's own failure is
/// what reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("listen routine failed (tag {tag})")]
pub struct FailingRoutineError {
    /// Identifies the failure.
    pub tag: u64,
}

impl FailingRoutineError {
    /// Create an error with the given tag.
    pub fn new(tag: u64) -> Self {
        Self { tag }
    }
}
