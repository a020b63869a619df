// SPDX-License-Identifier: MPL-2.0
//! Inline styles on the fixed header and the hero section.

use super::{select_html, set_style};
use crate::application::navigation::HeaderStyle;
use crate::application::port::ScrollView;
use web_sys::{Document, HtmlElement};

/// [`ScrollView`] writing to `.header` and `.hero`.
#[derive(Debug, Clone)]
pub struct DomScroll {
    header: Option<HtmlElement>,
    hero: Option<HtmlElement>,
}

impl DomScroll {
    pub fn new(document: &Document) -> Self {
        Self {
            header: select_html(document, ".header"),
            hero: select_html(document, ".hero"),
        }
    }
}

impl ScrollView for DomScroll {
    fn set_header_style(&mut self, style: HeaderStyle) {
        if let Some(header) = &self.header {
            set_style(header, "background", style.background());
            set_style(header, "box-shadow", style.box_shadow());
        }
    }

    fn set_hero_transform(&mut self, transform: &str) {
        if let Some(hero) = &self.hero {
            set_style(hero, "transform", transform);
        }
    }
}
