// SPDX-License-Identifier: MPL-2.0
//! Gallery input events, scheduled tasks and command results.

use super::controller::FilterOutcome;
use crate::domain::gallery::ItemIndex;

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Tab,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

/// User input routed to the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// A filter button, by document position.
    FilterClicked(usize),
    /// A gallery tile.
    ItemClicked(ItemIndex),
    CloseClicked,
    /// A click on the overlay itself, not on its content.
    BackdropClicked,
    PreviousClicked,
    NextClicked,
    KeyPressed(Key),
}

/// Deferred style change scheduled by a filter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryTask {
    /// Fade a re-shown item in to full opacity and scale.
    Reveal(ItemIndex),
    /// Take a faded item out of layout.
    Collapse(ItemIndex),
}

impl GalleryTask {
    #[must_use]
    pub fn item(self) -> ItemIndex {
        match self {
            GalleryTask::Reveal(item) | GalleryTask::Collapse(item) => item,
        }
    }
}

/// What a handled event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryResponse {
    /// The event does not apply in the current state.
    Ignored,
    Filtered(FilterOutcome),
    /// Lightbox opened at this cursor position.
    Opened(usize),
    /// Lightbox moved to this cursor position.
    Navigated(usize),
    Closed,
}
