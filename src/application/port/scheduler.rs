// SPDX-License-Identifier: MPL-2.0
//! Delayed task port definition.
//!
//! Controllers never sleep or spawn: any visual step that must happen later
//! (a CSS transition finishing, a simulated network round-trip, a live region
//! expiring) is handed to a [`Scheduler`] as a plain task value. When the
//! delay elapses the host delivers the task back to the controller that
//! scheduled it, together with its [`TaskId`].
//!
//! Every scheduled task can be cancelled. Controllers remember the id of each
//! pending task they own and cancel it before scheduling a replacement, so a
//! stale transition never overwrites newer state.

use std::fmt;
use std::time::Duration;

/// Handle identifying one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a new unique task ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// Fire-and-forget delayed execution with cancellation.
///
/// Implementations must deliver each non-cancelled task exactly once, no
/// earlier than `delay` after scheduling. Tasks scheduled with equal due
/// times are delivered in scheduling order.
pub trait Scheduler<T> {
    /// Schedules `task` to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration, task: T) -> TaskId;

    /// Cancels a pending task.
    ///
    /// Returns `true` if the task was still pending. Cancelling an unknown or
    /// already delivered task is a no-op.
    fn cancel(&mut self, id: TaskId) -> bool;
}

/// A controller that owns a scheduler and consumes the tasks it fires.
///
/// Hosts that drive time themselves use this to route due tasks back to the
/// owner without knowing its concrete type.
pub trait TaskOwner {
    type Task;
    type Scheduler;

    fn scheduler_mut(&mut self) -> &mut Self::Scheduler;

    /// Delivers a fired task back to its owner.
    fn deliver(&mut self, id: TaskId, task: Self::Task);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_ids_are_unique_and_ordered() {
        let a = TaskId::new();
        let b = TaskId::new();
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn task_id_display() {
        let id = TaskId::new();
        assert_eq!(id.to_string(), format!("task#{}", id.raw()));
    }
}
