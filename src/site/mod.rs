// SPDX-License-Identifier: MPL-2.0
//! Browser entry point and page session state.
//!
//! [`start`] is exported to JavaScript and runs once per page load. It builds
//! a [`Site`] holding every controller bound to the page, registers the DOM
//! listeners that feed it, and keeps it alive for the rest of the session.
//!
//! Listeners and timers hold a weak reference to the site and borrow it for
//! the duration of one event. Handlers run to completion, so a borrow is
//! never held across two events.

mod effects;
mod listeners;

use crate::application::announcer::{AnnounceTask, Announcer};
use crate::application::contact::{
    ContactController, ContactMessages, ContactTask, SubmissionPhase, SubmissionTiming,
};
use crate::application::effects::{FadeState, KeyboardFocus, RevealTracker, ScrollEffects, ScrollTask};
use crate::application::gallery::{GalleryController, GalleryEvent, GalleryResponse, GalleryTask, Key};
use crate::application::navigation::{anchor_scroll_top, NavMenu};
use crate::application::port::TaskId;
use crate::config::Config;
use crate::domain::form::FieldId;
use crate::i18n::fluent::I18n;
use crate::infrastructure::dom::{self, DomForm, DomGallery, DomLiveRegions, DomScroll};
use crate::infrastructure::scheduler::TimeoutScheduler;
use crate::logging::{self, LogSink};
use chrono::NaiveDate;
use fluent_bundle::FluentValue;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

type Gallery = GalleryController<DomGallery, TimeoutScheduler<GalleryTask>>;
type Contact = ContactController<DomForm, TimeoutScheduler<ContactTask>>;
type LiveRegions = Announcer<DomLiveRegions, TimeoutScheduler<AnnounceTask>>;
type Scroll = ScrollEffects<DomScroll, TimeoutScheduler<ScrollTask>>;

/// Weak handle given to listeners and timers.
pub(crate) type SiteRef = Weak<RefCell<Site>>;

thread_local! {
    static SITE: RefCell<Option<Rc<RefCell<Site>>>> = const { RefCell::new(None) };
}

/// Initializes logging and every page behavior.
///
/// `config_toml` is an optional TOML document in the settings format; invalid
/// content falls back to defaults with a logged warning. Calling `start`
/// again on the same page is a no-op.
#[wasm_bindgen]
pub fn start(config_toml: Option<String>) -> Result<(), JsValue> {
    if SITE.with(|slot| slot.borrow().is_some()) {
        tracing::warn!("start called twice; ignoring");
        return Ok(());
    }

    let (config, warning) = Config::from_optional_toml(config_toml.as_deref());
    logging::init(config.general.log_level().as_filter(), LogSink::Console);
    logging::install_panic_hook();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let window = dom::window()?;
    let document = dom::document(&window)?;
    listeners::install_global_error_handlers(&window);

    let site = Site::new(window, document, &config);
    listeners::attach(&site);
    effects::attach(&site, &config);

    SITE.with(|slot| *slot.borrow_mut() = Some(site));
    tracing::info!("Savory Bites site initialised");
    Ok(())
}

/// Navigation elements written by menu and anchor handlers.
#[derive(Debug, Clone, Default)]
pub(crate) struct NavElements {
    pub hamburger: Option<Element>,
    pub menu: Option<Element>,
    pub header: Option<HtmlElement>,
}

/// Every controller bound to the current page.
pub struct Site {
    window: Window,
    document: Document,
    i18n: I18n,
    gallery: Gallery,
    contact: Option<Contact>,
    announcer: LiveRegions,
    nav: NavElements,
    menu: NavMenu,
    focus: KeyboardFocus,
    reveal: RevealTracker,
    scroll: Scroll,
    anchor_margin: f64,
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("i18n", &self.i18n)
            .field("menu", &self.menu)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

/// Wraps a controller callback into a scheduler dispatch.
fn dispatch<T: 'static>(
    site: &SiteRef,
    route: fn(&mut Site, TaskId, T),
) -> Rc<dyn Fn(TaskId, T)> {
    let site = site.clone();
    Rc::new(move |id, task| listeners::with_site(&site, |s| route(s, id, task)))
}

impl Site {
    fn new(window: Window, document: Document, config: &Config) -> Rc<RefCell<Self>> {
        Rc::new_cyclic(|weak: &SiteRef| {
            let i18n = I18n::new(None, config);

            let (gallery_view, markup) = DomGallery::bind(&document);
            let gallery = GalleryController::new(
                markup.items,
                markup.filters,
                config.gallery.timing(),
                gallery_view,
                TimeoutScheduler::new(window.clone(), dispatch(weak, Site::on_gallery_task)),
            );

            let contact = DomForm::bind(&document).map(|form| {
                let mut contact = ContactController::new(
                    ContactMessages::from_i18n(&i18n),
                    SubmissionTiming {
                        submit_delay: config.contact.submit_delay(),
                        reset_delay: config.contact.reset_delay(),
                    },
                    form,
                    TimeoutScheduler::new(window.clone(), dispatch(weak, Site::on_contact_task)),
                );
                contact.set_min_date(today());
                contact
            });

            let announcer = Announcer::new(
                config.accessibility.announce_ttl(),
                DomLiveRegions::new(&document),
                TimeoutScheduler::new(window.clone(), dispatch(weak, Site::on_announce_task)),
            );

            let scroll = ScrollEffects::new(
                config.effects.scroll_throttle(),
                config.navigation.header_scroll_threshold(),
                config.effects.parallax_rate(),
                DomScroll::new(&document),
                TimeoutScheduler::new(window.clone(), dispatch(weak, Site::on_scroll_task)),
            );

            let nav = NavElements {
                hamburger: dom::select(&document, ".hamburger"),
                menu: dom::select(&document, ".nav-menu"),
                header: dom::select_html(&document, ".header"),
            };

            RefCell::new(Self {
                window,
                document,
                i18n,
                gallery,
                contact,
                announcer,
                nav,
                menu: NavMenu::new(),
                focus: KeyboardFocus::default(),
                reveal: RevealTracker::new(),
                scroll,
                anchor_margin: config.navigation.anchor_margin(),
            })
        })
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    pub(crate) fn gallery_view(&self) -> &DomGallery {
        self.gallery.view()
    }

    pub(crate) fn gallery_event(&mut self, event: GalleryEvent) {
        match self.gallery.handle(event) {
            GalleryResponse::Filtered(outcome) => {
                tracing::debug!(filter = %outcome.filter, visible = outcome.visible, "filter applied");
                let message = self.i18n.tr_with_args(
                    "gallery-filter-announcement",
                    &[("count", FluentValue::from(outcome.visible))],
                );
                self.announcer.announce(&message);
            }
            GalleryResponse::Opened(position) | GalleryResponse::Navigated(position) => {
                let total = self.gallery.lightbox().visible_items().len();
                let message = self.i18n.tr_with_args(
                    "gallery-lightbox-announcement",
                    &[
                        ("position", FluentValue::from(position + 1)),
                        ("total", FluentValue::from(total)),
                    ],
                );
                self.announcer.announce(&message);
            }
            GalleryResponse::Closed | GalleryResponse::Ignored => {}
        }
    }

    fn on_gallery_task(&mut self, id: TaskId, task: GalleryTask) {
        self.gallery.on_task(id, task);
    }

    // =========================================================================
    // Contact form
    // =========================================================================

    pub(crate) fn contact_view(&self) -> Option<&DomForm> {
        self.contact.as_ref().map(ContactController::view)
    }

    pub(crate) fn submit_form(&mut self) {
        if let Some(contact) = self.contact.as_mut() {
            let values = contact.view().read_values();
            contact.submit(&values, today());
        }
    }

    pub(crate) fn field_blur(&mut self, field: FieldId, value: &str, required: bool) {
        if let Some(contact) = self.contact.as_mut() {
            contact.field_blur(field, value, required, today());
        }
    }

    pub(crate) fn field_input(&mut self, field: FieldId) {
        if let Some(contact) = self.contact.as_mut() {
            contact.field_input(field);
        }
    }

    fn on_contact_task(&mut self, id: TaskId, task: ContactTask) {
        let Some(contact) = self.contact.as_mut() else {
            return;
        };
        let before = contact.phase();
        contact.on_task(id, task);
        if before == SubmissionPhase::Submitting && contact.phase() == SubmissionPhase::Succeeded {
            let message = self.i18n.tr("contact-success-announcement");
            self.announcer.announce(&message);
        }
    }

    fn on_announce_task(&mut self, id: TaskId, task: AnnounceTask) {
        self.announcer.on_task(id, task);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub(crate) fn nav(&self) -> &NavElements {
        &self.nav
    }

    fn render_menu(&self) {
        let open = self.menu.is_open();
        for el in [&self.nav.hamburger, &self.nav.menu].into_iter().flatten() {
            dom::set_class(el, "active", open);
        }
    }

    pub(crate) fn toggle_menu(&mut self) {
        self.menu.toggle();
        self.render_menu();
    }

    pub(crate) fn nav_link_clicked(&mut self) {
        if self.menu.link_clicked() {
            self.render_menu();
        }
    }

    pub(crate) fn page_clicked(&mut self, inside_nav: bool) {
        if self.menu.outside_click(inside_nav) {
            self.render_menu();
        }
    }

    /// Smoothly scrolls so `target` sits just below the fixed header.
    pub(crate) fn scroll_to_anchor(&self, target: &HtmlElement) {
        let header_height = self
            .nav
            .header
            .as_ref()
            .map_or(0.0, |header| f64::from(header.offset_height()));
        let top = anchor_scroll_top(f64::from(target.offset_top()), header_height, self.anchor_margin);
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    // =========================================================================
    // Scroll, keyboard and pointer
    // =========================================================================

    pub(crate) fn scrolled(&mut self) {
        let now = self
            .window
            .performance()
            .map_or(Duration::ZERO, |p| Duration::from_secs_f64(p.now().max(0.0) / 1000.0));
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        self.scroll.scrolled(now, scroll_y);
    }

    fn on_scroll_task(&mut self, id: TaskId, task: ScrollTask) {
        self.scroll.on_task(id, task);
    }

    pub(crate) fn key_pressed(&mut self, key: Key) {
        self.gallery_event(GalleryEvent::KeyPressed(key));
        if let Some(active) = self.focus.key_pressed(key) {
            self.set_keyboard_navigation(active);
        }
    }

    pub(crate) fn mouse_down(&mut self) {
        if let Some(active) = self.focus.mouse_down() {
            self.set_keyboard_navigation(active);
        }
    }

    fn set_keyboard_navigation(&self, active: bool) {
        if let Some(body) = self.document.body() {
            dom::set_class(
                &body,
                crate::application::effects::KEYBOARD_NAVIGATION_CLASS,
                active,
            );
        }
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Records an intersection; `true` the first time `key` is seen.
    pub(crate) fn revealed(&mut self, key: usize) -> bool {
        self.reveal.intersected(key)
    }

    pub(crate) fn show_faded(element: &HtmlElement, state: FadeState) {
        dom::set_style(element, "opacity", &state.opacity().to_css());
        dom::set_style(element, "transform", state.transform());
    }
}

/// The browser's local calendar date.
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    let fallback = NaiveDate::default();
    let Ok(year) = i32::try_from(now.get_full_year()) else {
        return fallback;
    };
    NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()).unwrap_or(fallback)
}
