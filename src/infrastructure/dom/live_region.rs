// SPDX-License-Identifier: MPL-2.0
//! Visually hidden ARIA live regions appended to `<body>`.

use crate::application::port::{LiveRegionView, RegionId};
use std::collections::HashMap;
use web_sys::{Document, Element};

/// [`LiveRegionView`] creating one `div.sr-only` per announcement.
#[derive(Debug, Clone)]
pub struct DomLiveRegions {
    document: Document,
    regions: HashMap<RegionId, Element>,
}

impl DomLiveRegions {
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
            regions: HashMap::new(),
        }
    }

    fn create(&self, id: RegionId, message: &str) -> Option<Element> {
        let region = self.document.create_element("div").ok()?;
        region.set_id(&id.to_string());
        for (name, value) in [("aria-live", "polite"), ("aria-atomic", "true")] {
            region.set_attribute(name, value).ok()?;
        }
        region.set_class_name("sr-only");
        region.set_text_content(Some(message));
        self.document.body()?.append_child(&region).ok()?;
        Some(region)
    }
}

impl LiveRegionView for DomLiveRegions {
    fn add_region(&mut self, id: RegionId, message: &str) {
        match self.create(id, message) {
            Some(region) => {
                self.regions.insert(id, region);
            }
            None => tracing::debug!(%id, "live region could not be attached"),
        }
    }

    fn remove_region(&mut self, id: RegionId) {
        if let Some(region) = self.regions.remove(&id) {
            region.remove();
        }
    }
}
