// SPDX-License-Identifier: MPL-2.0
//! Gallery filter and lightbox controller.
//!
//! One controller is built per page session from the gallery markup. It owns
//! the filter selection, each item's derived visibility and the lightbox
//! cursor, and writes every visual change through a [`GalleryView`].
//!
//! # Filter transitions
//!
//! Changing the filter is a two-step visual change per item:
//!
//! | Item becomes | Immediately                  | After                               |
//! |--------------|------------------------------|-------------------------------------|
//! | visible      | back in layout               | `show_delay`: opacity 1, scale 1    |
//! | hidden       | opacity 0, `hidden_scale`    | `hide_delay`: out of layout         |
//!
//! The second step is a scheduled task. Each item has at most one pending
//! task: a new filter change cancels it before scheduling the next one, and
//! a task whose id is no longer the item's pending id is dropped on arrival.

use super::event::{GalleryEvent, GalleryResponse, GalleryTask, Key};
use super::lightbox::LightboxState;
use crate::application::port::{GalleryView, Scheduler, TaskId, TaskOwner};
use crate::domain::gallery::{Filter, GalleryItem, ItemIndex};
use crate::domain::ui::{ItemAppearance, TransitionTiming};
use std::collections::HashMap;

/// Result of a filter change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub filter: Filter,
    /// Items passing the filter.
    pub visible: usize,
    pub total: usize,
}

/// Owns gallery visibility and lightbox navigation for one page session.
#[derive(Debug)]
pub struct GalleryController<V, S> {
    items: Vec<GalleryItem>,
    /// Filter of each button, in document order.
    buttons: Vec<Filter>,
    filter: Filter,
    lightbox: LightboxState,
    timing: TransitionTiming,
    pending: HashMap<ItemIndex, TaskId>,
    view: V,
    scheduler: S,
}

impl<V: GalleryView, S: Scheduler<GalleryTask>> GalleryController<V, S> {
    /// Creates a controller over items and filter buttons read from markup.
    ///
    /// Every item starts visible under the `All` filter; nothing is written
    /// to the view until the first interaction.
    pub fn new(
        items: Vec<GalleryItem>,
        buttons: Vec<Filter>,
        timing: TransitionTiming,
        view: V,
        scheduler: S,
    ) -> Self {
        tracing::debug!(
            items = items.len(),
            buttons = buttons.len(),
            "gallery controller created"
        );
        Self {
            items,
            buttons,
            filter: Filter::All,
            lightbox: LightboxState::new(),
            timing,
            pending: HashMap::new(),
            view,
            scheduler,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub fn lightbox(&self) -> &LightboxState {
        &self.lightbox
    }

    #[must_use]
    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Items currently passing the filter, in document order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<ItemIndex> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_visible())
            .map(|(i, _)| ItemIndex(i))
            .collect()
    }

    /// Selects a filter and starts every item's transition towards it.
    pub fn apply_filter(&mut self, filter: Filter) -> FilterOutcome {
        self.mark_active_button(&filter);

        for i in 0..self.items.len() {
            let index = ItemIndex(i);
            self.items[i].apply_filter(&filter);
            if let Some(stale) = self.pending.remove(&index) {
                self.scheduler.cancel(stale);
            }

            let task_id = if self.items[i].is_visible() {
                self.view.set_item_displayed(index, true);
                self.scheduler
                    .schedule(self.timing.show_delay, GalleryTask::Reveal(index))
            } else {
                self.view
                    .set_item_appearance(index, self.timing.hiding_appearance());
                self.scheduler
                    .schedule(self.timing.hide_delay, GalleryTask::Collapse(index))
            };
            self.pending.insert(index, task_id);
        }

        let visible = self.items.iter().filter(|item| item.is_visible()).count();
        tracing::debug!(filter = %filter, visible, total = self.items.len(), "gallery filter applied");
        self.filter = filter.clone();
        FilterOutcome {
            filter,
            visible,
            total: self.items.len(),
        }
    }

    /// Opens the lightbox on `item`.
    ///
    /// The visible snapshot is retaken first. Returns `false` and changes
    /// nothing if `item` is filtered out or unknown.
    pub fn open_lightbox(&mut self, item: ItemIndex) -> bool {
        let visible = self.visible_items();
        let Some(position) = self.lightbox.open_on(visible, item) else {
            tracing::debug!(item = item.0, "lightbox not opened: item is not visible");
            return false;
        };
        self.render_current();
        self.view.set_lightbox_visible(true);
        self.view.set_page_scroll_locked(true);
        tracing::debug!(item = item.0, position, "lightbox opened");
        true
    }

    /// Renders the snapshot entry at `index` and moves the cursor there.
    ///
    /// Returns `false` without rendering if the lightbox is closed, the
    /// snapshot is empty or `index` is out of range.
    pub fn show_at(&mut self, index: usize) -> bool {
        if !self.lightbox.is_open() || self.lightbox.seek(index).is_none() {
            return false;
        }
        self.render_current();
        true
    }

    /// Shows the next visible item, wrapping to the first.
    pub fn next(&mut self) -> Option<usize> {
        let position = self.lightbox.step_forward()?;
        self.render_current();
        Some(position)
    }

    /// Shows the previous visible item, wrapping to the last.
    pub fn previous(&mut self) -> Option<usize> {
        let position = self.lightbox.step_backward()?;
        self.render_current();
        Some(position)
    }

    /// Closes the lightbox and restores page scrolling.
    ///
    /// Safe to call when already closed; scrolling is restored regardless.
    pub fn close(&mut self) {
        self.lightbox.close();
        self.view.set_lightbox_visible(false);
        self.view.set_page_scroll_locked(false);
    }

    /// Routes one input event to the matching operation.
    pub fn handle(&mut self, event: GalleryEvent) -> GalleryResponse {
        let open = self.lightbox.is_open();
        match event {
            GalleryEvent::FilterClicked(button) => match self.buttons.get(button).cloned() {
                Some(filter) => GalleryResponse::Filtered(self.apply_filter(filter)),
                None => GalleryResponse::Ignored,
            },
            GalleryEvent::ItemClicked(item) => {
                if self.open_lightbox(item) {
                    GalleryResponse::Opened(self.lightbox.current_index())
                } else {
                    GalleryResponse::Ignored
                }
            }
            GalleryEvent::CloseClicked | GalleryEvent::BackdropClicked => {
                self.close();
                GalleryResponse::Closed
            }
            GalleryEvent::KeyPressed(Key::Escape) if open => {
                self.close();
                GalleryResponse::Closed
            }
            GalleryEvent::PreviousClicked | GalleryEvent::KeyPressed(Key::ArrowLeft) => self
                .previous()
                .map_or(GalleryResponse::Ignored, GalleryResponse::Navigated),
            GalleryEvent::NextClicked | GalleryEvent::KeyPressed(Key::ArrowRight) => self
                .next()
                .map_or(GalleryResponse::Ignored, GalleryResponse::Navigated),
            GalleryEvent::KeyPressed(_) => GalleryResponse::Ignored,
        }
    }

    /// Applies a fired transition task.
    ///
    /// Tasks that were superseded by a later filter change are dropped.
    pub fn on_task(&mut self, id: TaskId, task: GalleryTask) {
        let index = task.item();
        if self.pending.get(&index) != Some(&id) {
            tracing::debug!(%id, item = index.0, "dropping superseded gallery transition");
            return;
        }
        self.pending.remove(&index);
        let Some(item) = self.items.get(index.0) else {
            return;
        };
        match task {
            GalleryTask::Reveal(_) if item.is_visible() => {
                self.view.set_item_appearance(index, ItemAppearance::SHOWN);
            }
            GalleryTask::Collapse(_) if !item.is_visible() => {
                self.view.set_item_displayed(index, false);
            }
            _ => {}
        }
    }

    fn mark_active_button(&mut self, filter: &Filter) {
        let active = self.buttons.iter().position(|button| button == filter);
        for button in 0..self.buttons.len() {
            self.view.set_filter_active(button, Some(button) == active);
        }
    }

    fn render_current(&mut self) {
        let Some(index) = self.lightbox.current_item() else {
            return;
        };
        if let Some(item) = self.items.get(index.0) {
            self.view.render_slide(item.image(), item.caption());
        }
    }
}

impl<V: GalleryView, S: Scheduler<GalleryTask>> TaskOwner for GalleryController<V, S> {
    type Task = GalleryTask;
    type Scheduler = S;

    fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn deliver(&mut self, id: TaskId, task: GalleryTask) {
        self.on_task(id, task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{Caption, ImageRef};
    use crate::domain::ui::Opacity;
    use crate::infrastructure::headless::HeadlessGallery;
    use crate::infrastructure::scheduler::{AdvanceClock, ManualScheduler};
    use std::time::Duration;

    type Controller = GalleryController<HeadlessGallery, ManualScheduler<GalleryTask>>;

    const MS: Duration = Duration::from_millis(1);

    fn dish(id: usize, category: &str) -> GalleryItem {
        GalleryItem::new(
            category,
            ImageRef::new(format!("img/{id}.jpg"), format!("Dish {id}")),
        )
        .with_caption(Caption::new(format!("Dish {id}"), format!("{category} special")))
    }

    fn controller(categories: &[&str]) -> Controller {
        let items = categories
            .iter()
            .enumerate()
            .map(|(i, c)| dish(i + 1, c))
            .collect();
        let buttons = ["all", "mains", "desserts"]
            .into_iter()
            .map(Filter::from_token)
            .collect();
        GalleryController::new(
            items,
            buttons,
            TransitionTiming::default(),
            HeadlessGallery::new(),
            ManualScheduler::new(),
        )
    }

    #[test]
    fn filter_hides_other_categories() {
        let mut gallery = controller(&["mains", "desserts", "mains"]);
        let outcome = gallery.apply_filter(Filter::from_token("mains"));
        assert_eq!(outcome.visible, 2);
        assert_eq!(outcome.total, 3);
        assert_eq!(gallery.visible_items(), vec![ItemIndex(0), ItemIndex(2)]);
    }

    #[test]
    fn hidden_items_fade_then_leave_layout() {
        let mut gallery = controller(&["mains", "desserts"]);
        gallery.apply_filter(Filter::from_token("mains"));

        let faded = gallery.view().item(ItemIndex(1));
        assert!(faded.displayed);
        assert_eq!(faded.appearance.opacity, Opacity::HIDDEN);

        gallery.advance(299 * MS);
        assert!(gallery.view().item(ItemIndex(1)).displayed);
        gallery.advance(MS);
        assert!(!gallery.view().item(ItemIndex(1)).displayed);
    }

    #[test]
    fn shown_items_return_to_layout_then_fade_in() {
        let mut gallery = controller(&["mains", "desserts"]);
        gallery.apply_filter(Filter::from_token("mains"));
        gallery.advance(300 * MS);

        gallery.apply_filter(Filter::All);
        let returning = gallery.view().item(ItemIndex(1));
        assert!(returning.displayed);
        assert_eq!(returning.appearance.opacity, Opacity::HIDDEN);

        gallery.advance(10 * MS);
        assert_eq!(
            gallery.view().item(ItemIndex(1)).appearance,
            ItemAppearance::SHOWN
        );
    }

    #[test]
    fn rapid_refilter_cancels_pending_collapse() {
        let mut gallery = controller(&["mains", "desserts"]);
        gallery.apply_filter(Filter::from_token("mains"));
        gallery.advance(100 * MS);
        gallery.apply_filter(Filter::All);
        gallery.advance(1000 * MS);

        let item = gallery.view().item(ItemIndex(1));
        assert!(item.displayed, "stale collapse must not hide a re-shown item");
        assert_eq!(item.appearance, ItemAppearance::SHOWN);
        assert_eq!(gallery.scheduler().pending_count(), 0);
    }

    #[test]
    fn exactly_one_button_is_active() {
        let mut gallery = controller(&["mains"]);
        gallery.handle(GalleryEvent::FilterClicked(2));
        assert_eq!(gallery.view().active_buttons(), vec![2]);
        gallery.handle(GalleryEvent::FilterClicked(0));
        assert_eq!(gallery.view().active_buttons(), vec![0]);
    }

    #[test]
    fn unknown_button_is_ignored() {
        let mut gallery = controller(&["mains"]);
        assert_eq!(
            gallery.handle(GalleryEvent::FilterClicked(9)),
            GalleryResponse::Ignored
        );
        assert_eq!(gallery.filter(), &Filter::All);
    }

    #[test]
    fn opening_renders_item_and_locks_scroll() {
        let mut gallery = controller(&["mains", "desserts"]);
        assert!(gallery.open_lightbox(ItemIndex(1)));
        let slide = gallery.view().slide().expect("slide rendered");
        assert_eq!(slide.image.src, "img/2.jpg");
        assert_eq!(slide.caption.as_ref().map(|c| c.title.as_str()), Some("Dish 2"));
        assert!(gallery.view().lightbox_visible());
        assert!(gallery.view().scroll_locked());
    }

    #[test]
    fn filtered_out_item_does_not_open() {
        let mut gallery = controller(&["mains", "desserts"]);
        gallery.apply_filter(Filter::from_token("mains"));
        assert!(!gallery.open_lightbox(ItemIndex(1)));
        assert!(!gallery.lightbox().is_open());
        assert!(!gallery.view().lightbox_visible());
        assert_eq!(gallery.view().render_count(), 0);
    }

    #[test]
    fn show_at_out_of_range_does_not_render() {
        let mut gallery = controller(&["mains"]);
        assert!(!gallery.show_at(0));
        gallery.open_lightbox(ItemIndex(0));
        let renders = gallery.view().render_count();
        assert!(!gallery.show_at(3));
        assert_eq!(gallery.view().render_count(), renders);
    }

    #[test]
    fn navigation_is_ignored_while_closed() {
        let mut gallery = controller(&["mains", "mains"]);
        assert_eq!(gallery.next(), None);
        assert_eq!(
            gallery.handle(GalleryEvent::KeyPressed(Key::ArrowRight)),
            GalleryResponse::Ignored
        );
        assert_eq!(
            gallery.handle(GalleryEvent::KeyPressed(Key::Escape)),
            GalleryResponse::Ignored
        );
    }

    #[test]
    fn arrow_keys_navigate_while_open() {
        let mut gallery = controller(&["mains", "mains", "mains"]);
        gallery.handle(GalleryEvent::ItemClicked(ItemIndex(0)));
        assert_eq!(
            gallery.handle(GalleryEvent::KeyPressed(Key::ArrowLeft)),
            GalleryResponse::Navigated(2)
        );
        assert_eq!(
            gallery.handle(GalleryEvent::KeyPressed(Key::ArrowRight)),
            GalleryResponse::Navigated(0)
        );
    }

    #[test]
    fn escape_backdrop_and_close_button_all_close() {
        for event in [
            GalleryEvent::KeyPressed(Key::Escape),
            GalleryEvent::BackdropClicked,
            GalleryEvent::CloseClicked,
        ] {
            let mut gallery = controller(&["mains"]);
            gallery.open_lightbox(ItemIndex(0));
            assert_eq!(gallery.handle(event), GalleryResponse::Closed);
            assert!(!gallery.lightbox().is_open());
            assert!(!gallery.view().scroll_locked());
        }
    }

    #[test]
    fn snapshot_is_not_resynced_while_open() {
        let mut gallery = controller(&["mains", "desserts", "mains"]);
        gallery.open_lightbox(ItemIndex(0));
        gallery.apply_filter(Filter::from_token("desserts"));
        assert_eq!(gallery.lightbox().visible_items().len(), 3);
        assert_eq!(gallery.next(), Some(1));
    }
}
