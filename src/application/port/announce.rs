// SPDX-License-Identifier: MPL-2.0
//! Screen-reader live region port definition.

use std::fmt;

/// Identifier of one live region created by the announcer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u64);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sr-announcement-{}", self.0)
    }
}

/// Creates and removes polite, atomic, visually hidden live regions.
pub trait LiveRegionView {
    fn add_region(&mut self, id: RegionId, message: &str);

    fn remove_region(&mut self, id: RegionId);
}
