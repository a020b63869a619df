// SPDX-License-Identifier: MPL-2.0
//! Deterministic scheduler driven by a virtual clock.
//!
//! Nothing fires on its own: the host advances time explicitly and receives
//! the due tasks in due order. Controllers use it for native tests and
//! benchmarks, and for any host that drives time itself.
//!
//! [`AdvanceClock`] drives any [`TaskOwner`] built on this scheduler:
//!
//! ```
//! use savory_bites::application::announcer::Announcer;
//! use savory_bites::infrastructure::scheduler::{AdvanceClock, ManualScheduler};
//! use savory_bites::infrastructure::HeadlessLiveRegions;
//! use std::time::Duration;
//!
//! let mut announcer = Announcer::new(
//!     Duration::from_secs(1),
//!     HeadlessLiveRegions::new(),
//!     ManualScheduler::new(),
//! );
//! announcer.announce("Showing 4 dishes");
//! announcer.advance(Duration::from_secs(1));
//! assert_eq!(announcer.active_count(), 0);
//! ```

use crate::application::port::{Scheduler, TaskId, TaskOwner};
use std::time::Duration;

#[derive(Debug)]
struct Pending<T> {
    due: Duration,
    seq: u64,
    id: TaskId,
    task: T,
}

/// A scheduler whose clock only moves when told to.
#[derive(Debug)]
pub struct ManualScheduler<T> {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for ManualScheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> ManualScheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks still waiting.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns the earliest task due at or before `deadline`.
    ///
    /// The clock moves to that task's due time, so tasks scheduled while
    /// handling it are measured from the moment it fired. Ties are broken by
    /// scheduling order.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(TaskId, T)> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= deadline)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let fired = self.pending.remove(position);
        self.now = self.now.max(fired.due);
        Some((fired.id, fired.task))
    }

    /// Moves the clock forward to `deadline` without firing anything.
    ///
    /// Call after draining [`pop_due`](Self::pop_due); the clock never goes
    /// backwards.
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

impl<T> Scheduler<T> for ManualScheduler<T> {
    fn schedule(&mut self, delay: Duration, task: T) -> TaskId {
        let id = TaskId::new();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due: self.now + delay,
            seq,
            id,
            task,
        });
        id
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }
}

/// Moves the virtual clock of a [`TaskOwner`] backed by a [`ManualScheduler`].
pub trait AdvanceClock {
    /// Advances by `by`, delivering every task that falls due in due order.
    ///
    /// Tasks scheduled while a task is delivered are measured from its due
    /// time and fire in the same call if they fall due before the deadline.
    fn advance(&mut self, by: Duration);
}

impl<O, T> AdvanceClock for O
where
    O: TaskOwner<Task = T, Scheduler = ManualScheduler<T>>,
{
    fn advance(&mut self, by: Duration) {
        let deadline = self.scheduler_mut().now() + by;
        while let Some((id, task)) = self.scheduler_mut().pop_due(deadline) {
            self.deliver(id, task);
        }
        self.scheduler_mut().settle(deadline);
    }
}
