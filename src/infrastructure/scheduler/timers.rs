// SPDX-License-Identifier: MPL-2.0
//! Ownership of live timer callbacks.
//!
//! A browser timer keeps a pointer to its callback, so the callback must stay
//! alive until the timer either fires or is cleared. The table owns each
//! callback next to its timer handle and releases it on cancel, or after the
//! callback has returned from firing.
//!
//! A firing callback cannot be dropped while it is still on the stack. It is
//! parked in `spent` and released by the next sweep once it has finished.

use crate::application::port::TaskId;
use std::collections::HashMap;

#[derive(Debug)]
pub(crate) struct TimerTable<C> {
    live: HashMap<TaskId, (i32, C)>,
    spent: Vec<(TaskId, C)>,
    running: Option<TaskId>,
}

impl<C> Default for TimerTable<C> {
    fn default() -> Self {
        Self {
            live: HashMap::new(),
            spent: Vec::new(),
            running: None,
        }
    }
}

impl<C> TimerTable<C> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records an armed timer and the callback it will invoke.
    pub(crate) fn insert(&mut self, id: TaskId, handle: i32, callback: C) {
        self.live.insert(id, (handle, callback));
    }

    /// Marks `id` as firing. Returns `false` if it was cancelled meanwhile.
    pub(crate) fn fire(&mut self, id: TaskId) -> bool {
        let Some((_, callback)) = self.live.remove(&id) else {
            return false;
        };
        self.spent.push((id, callback));
        self.running = Some(id);
        true
    }

    /// The firing callback has returned.
    pub(crate) fn finish(&mut self) {
        self.running = None;
    }

    /// Forgets `id`, returning its timer handle if it had not fired yet.
    pub(crate) fn cancel(&mut self, id: TaskId) -> Option<i32> {
        self.sweep();
        self.live.remove(&id).map(|(handle, _)| handle)
    }

    /// Releases callbacks that have fired and returned.
    pub(crate) fn sweep(&mut self) {
        let running = self.running;
        self.spent.retain(|(id, _)| Some(*id) == running);
    }

    /// Timers not yet fired or cancelled.
    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }

    /// Handles of every armed timer.
    pub(crate) fn handles(&self) -> impl Iterator<Item = i32> + '_ {
        self.live.values().map(|(handle, _)| *handle)
    }

    #[cfg(test)]
    fn retained(&self) -> usize {
        self.live.len() + self.spent.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn cancelled_callback_is_released() {
        let callback = Rc::new(());
        let mut table = TimerTable::new();
        let id = TaskId::new();
        table.insert(id, 7, Rc::clone(&callback));
        assert_eq!(Rc::strong_count(&callback), 2);
        assert_eq!(table.handles().collect::<Vec<_>>(), vec![7]);

        assert_eq!(table.cancel(id), Some(7));
        assert_eq!(Rc::strong_count(&callback), 1);
        assert_eq!(table.cancel(id), None);
        assert_eq!(table.retained(), 0);
    }

    #[test]
    fn fired_callback_outlives_its_own_call() {
        let callback = Rc::new(());
        let mut table = TimerTable::new();
        let id = TaskId::new();
        table.insert(id, 1, Rc::clone(&callback));

        assert!(table.fire(id));
        table.sweep();
        assert_eq!(Rc::strong_count(&callback), 2);
        assert_eq!(table.len(), 0);

        table.finish();
        table.sweep();
        assert_eq!(Rc::strong_count(&callback), 1);
        assert_eq!(table.retained(), 0);
    }

    #[test]
    fn scheduling_from_a_firing_callback_keeps_it_alive() {
        let first = Rc::new(());
        let second = Rc::new(());
        let mut table = TimerTable::new();
        let (a, b) = (TaskId::new(), TaskId::new());
        table.insert(a, 1, Rc::clone(&first));

        assert!(table.fire(a));
        assert_eq!(table.cancel(TaskId::new()), None);
        table.insert(b, 2, Rc::clone(&second));
        assert_eq!(Rc::strong_count(&first), 2);
        table.finish();

        assert_eq!(table.cancel(b), Some(2));
        assert_eq!(Rc::strong_count(&first), 1);
        assert_eq!(Rc::strong_count(&second), 1);
    }

    #[test]
    fn cancelled_timer_does_not_fire() {
        let mut table = TimerTable::new();
        let id = TaskId::new();
        table.insert(id, 3, ());
        table.cancel(id);
        assert!(!table.fire(id));
        assert_eq!(table.retained(), 0);
    }

    #[test]
    fn many_cancelled_timers_leave_nothing_behind() {
        let callback = Rc::new(());
        let mut table = TimerTable::new();
        for handle in 0..100 {
            let id = TaskId::new();
            table.insert(id, handle, Rc::clone(&callback));
            table.cancel(id);
        }
        assert_eq!(Rc::strong_count(&callback), 1);
        assert_eq!(table.retained(), 0);
    }
}
