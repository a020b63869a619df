// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation state.
//!
//! The lightbox walks a snapshot of the items that were visible when it was
//! opened. The snapshot is not kept in sync with later filter changes; it is
//! taken again on every open.

use crate::domain::gallery::ItemIndex;

/// Open/closed flag plus a circular cursor over the visible snapshot.
///
/// Invariant: while open, `current < visible.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LightboxState {
    open: bool,
    current: usize,
    visible: Vec<ItemIndex>,
}

impl LightboxState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Cursor position within the visible snapshot.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Item under the cursor, if open.
    #[must_use]
    pub fn current_item(&self) -> Option<ItemIndex> {
        if self.open {
            self.visible.get(self.current).copied()
        } else {
            None
        }
    }

    /// The snapshot taken at the last successful open.
    #[must_use]
    pub fn visible_items(&self) -> &[ItemIndex] {
        &self.visible
    }

    /// Opens on `item` within `visible`.
    ///
    /// Returns the cursor position, or `None` (leaving the state untouched)
    /// if `item` is not part of `visible`.
    pub fn open_on(&mut self, visible: Vec<ItemIndex>, item: ItemIndex) -> Option<usize> {
        let position = visible.iter().position(|&candidate| candidate == item)?;
        self.visible = visible;
        self.current = position;
        self.open = true;
        Some(position)
    }

    /// Moves the cursor to `index` if it is within the snapshot.
    pub fn seek(&mut self, index: usize) -> Option<ItemIndex> {
        let item = self.visible.get(index).copied()?;
        self.current = index;
        Some(item)
    }

    /// Advances the cursor, wrapping from the last item to the first.
    ///
    /// Returns `None` when closed or when the snapshot is empty.
    pub fn step_forward(&mut self) -> Option<usize> {
        let len = self.navigable_len()?;
        self.current = (self.current + 1) % len;
        Some(self.current)
    }

    /// Moves the cursor back, wrapping from the first item to the last.
    ///
    /// Returns `None` when closed or when the snapshot is empty.
    pub fn step_backward(&mut self) -> Option<usize> {
        let len = self.navigable_len()?;
        self.current = (self.current + len - 1) % len;
        Some(self.current)
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    fn navigable_len(&self) -> Option<usize> {
        match self.visible.len() {
            0 => None,
            _ if !self.open => None,
            len => Some(len),
        }
    }
}
