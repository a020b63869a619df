// SPDX-License-Identifier: MPL-2.0
//! Screen-reader announcements.
//!
//! Each message gets its own polite, atomic live region that is removed once
//! assistive technology has had time to read it. Announcements never replace
//! each other, so overlapping messages are all attached until they expire.

use crate::application::port::{LiveRegionView, RegionId, Scheduler, TaskId, TaskOwner};
use std::collections::HashMap;
use std::time::Duration;

/// Removal of an expired live region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnounceTask(pub RegionId);

/// Creates and expires live regions.
#[derive(Debug)]
pub struct Announcer<V, S> {
    next_region: u64,
    ttl: Duration,
    pending: HashMap<RegionId, TaskId>,
    view: V,
    scheduler: S,
}

impl<V: LiveRegionView, S: Scheduler<AnnounceTask>> Announcer<V, S> {
    pub fn new(ttl: Duration, view: V, scheduler: S) -> Self {
        Self {
            next_region: 0,
            ttl,
            pending: HashMap::new(),
            view,
            scheduler,
        }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Number of regions still attached.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.pending.len()
    }

    /// Announces `message` politely. Empty messages are ignored.
    pub fn announce(&mut self, message: &str) -> Option<RegionId> {
        if message.trim().is_empty() {
            return None;
        }
        let region = RegionId(self.next_region);
        self.next_region += 1;
        self.view.add_region(region, message);
        let task = self.scheduler.schedule(self.ttl, AnnounceTask(region));
        self.pending.insert(region, task);
        tracing::debug!(%region, text = message, "announced");
        Some(region)
    }

    /// Removes an expired region.
    pub fn on_task(&mut self, id: TaskId, AnnounceTask(region): AnnounceTask) {
        if self.pending.get(&region) != Some(&id) {
            return;
        }
        self.pending.remove(&region);
        self.view.remove_region(region);
    }

    /// Removes every attached region immediately.
    pub fn clear(&mut self) {
        for (region, task) in self.pending.drain() {
            self.scheduler.cancel(task);
            self.view.remove_region(region);
        }
    }
}

impl<V: LiveRegionView, S: Scheduler<AnnounceTask>> TaskOwner for Announcer<V, S> {
    type Task = AnnounceTask;
    type Scheduler = S;

    fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn deliver(&mut self, id: TaskId, task: AnnounceTask) {
        self.on_task(id, task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::headless::HeadlessLiveRegions;
    use crate::infrastructure::scheduler::{AdvanceClock, ManualScheduler};

    fn announcer() -> Announcer<HeadlessLiveRegions, ManualScheduler<AnnounceTask>> {
        Announcer::new(
            Duration::from_millis(1_000),
            HeadlessLiveRegions::new(),
            ManualScheduler::new(),
        )
    }

    #[test]
    fn region_is_removed_after_ttl() {
        let mut announcer = announcer();
        announcer.announce("Showing 3 dishes");
        assert_eq!(announcer.view().attached(), vec!["Showing 3 dishes"]);

        announcer.advance(Duration::from_millis(999));
        assert_eq!(announcer.active_count(), 1);

        announcer.advance(Duration::from_millis(1));
        assert!(announcer.view().attached().is_empty());
        assert_eq!(announcer.view().history(), ["Showing 3 dishes"]);
    }

    #[test]
    fn overlapping_announcements_coexist() {
        let mut announcer = announcer();
        announcer.announce("first");
        announcer.advance(Duration::from_millis(500));
        announcer.announce("second");
        assert_eq!(announcer.view().attached(), vec!["first", "second"]);

        announcer.advance(Duration::from_millis(500));
        assert_eq!(announcer.view().attached(), vec!["second"]);
    }

    #[test]
    fn blank_messages_are_ignored() {
        let mut announcer = announcer();
        assert!(announcer.announce("   ").is_none());
        assert!(announcer.view().history().is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let mut announcer = announcer();
        announcer.announce("a");
        announcer.announce("b");
        announcer.clear();
        assert_eq!(announcer.active_count(), 0);
        assert!(announcer.view().attached().is_empty());
        announcer.advance(Duration::from_secs(2));
        assert_eq!(announcer.view().history().len(), 2);
    }
}
