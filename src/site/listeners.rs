// SPDX-License-Identifier: MPL-2.0
//! DOM event wiring.
//!
//! Maps each DOM event kind to the site command it triggers:
//!
//! | Target                    | Event       | Command                              |
//! |---------------------------|-------------|--------------------------------------|
//! | `.filter-btn`             | click       | `FilterClicked(button)`              |
//! | `.gallery-item`           | click       | `ItemClicked(item)`                  |
//! | `.lightbox-close`         | click       | `CloseClicked`                       |
//! | `#lightbox` (itself)      | click       | `BackdropClicked`                    |
//! | `.lightbox-prev` / `-next`| click       | `PreviousClicked` / `NextClicked`    |
//! | document                  | keydown     | `KeyPressed(key)`, keyboard focus    |
//! | document                  | mousedown   | keyboard focus off                   |
//! | `.hamburger`              | click       | toggle menu                          |
//! | `.nav-link`               | click       | close menu                           |
//! | document                  | click       | close menu when outside              |
//! | `a[href^="#"]`            | click       | offset smooth scroll                 |
//! | window                    | scroll      | header style, parallax (throttled)   |
//! | `#contactForm`            | submit      | validate and submit                  |
//! | form fields               | blur/input  | validate / clear field               |

use super::{Site, SiteRef};
use crate::application::gallery::{GalleryEvent, Key};
use crate::domain::form::FieldId;
use crate::domain::gallery::ItemIndex;
use crate::infrastructure::dom::{self, form::field_value};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    ErrorEvent, Event, EventTarget, KeyboardEvent, Node, PromiseRejectionEvent, Window,
};

/// Runs `f` on the site if it is still alive and not already borrowed.
pub(crate) fn with_site(site: &SiteRef, f: impl FnOnce(&mut Site)) {
    let Some(site) = site.upgrade() else {
        return;
    };
    let Ok(mut site) = site.try_borrow_mut() else {
        tracing::warn!("re-entrant event dropped");
        return;
    };
    f(&mut *site);
}

/// Registers a page-lifetime listener.
fn add_listener(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
    {
        tracing::warn!(kind, error = ?err, "listener not attached");
    }
    callback.forget();
}

/// Registers a listener that borrows the site for each event of type `E`.
fn listen<E>(target: &EventTarget, kind: &str, site: &SiteRef, handler: impl Fn(&mut Site, E) + 'static)
where
    E: JsCast + 'static,
{
    let site = site.clone();
    add_listener(target, kind, move |event: Event| {
        let Ok(event) = event.dyn_into::<E>() else {
            return;
        };
        with_site(&site, |s| handler(s, event));
    });
}

/// Logs uncaught script errors and unhandled promise rejections.
pub(crate) fn install_global_error_handlers(window: &Window) {
    add_listener(window, "error", |event: Event| {
        if let Some(event) = event.dyn_ref::<ErrorEvent>() {
            tracing::error!(
                source = event.filename(),
                line = event.lineno(),
                "uncaught error: {}",
                event.message()
            );
        }
    });
    add_listener(window, "unhandledrejection", |event: Event| {
        if let Some(rejection) = event.dyn_ref::<PromiseRejectionEvent>() {
            tracing::error!(reason = ?rejection.reason(), "unhandled promise rejection");
        }
        event.prevent_default();
    });
}

/// Wires every site listener.
pub(crate) fn attach(site: &Rc<RefCell<Site>>) {
    let weak = Rc::downgrade(site);
    let s = site.borrow();
    let document = s.document().clone();

    // Gallery
    let gallery = s.gallery_view();
    for (i, button) in gallery.button_elements().iter().enumerate() {
        listen(button, "click", &weak, move |site, _: Event| {
            site.gallery_event(GalleryEvent::FilterClicked(i));
        });
    }
    for (i, item) in gallery.item_elements().iter().enumerate() {
        listen(item, "click", &weak, move |site, _: Event| {
            site.gallery_event(GalleryEvent::ItemClicked(ItemIndex(i)));
        });
    }
    let controls = gallery.controls();
    let buttons = [
        (&controls.close, GalleryEvent::CloseClicked),
        (&controls.previous, GalleryEvent::PreviousClicked),
        (&controls.next, GalleryEvent::NextClicked),
    ];
    for (element, event) in buttons {
        if let Some(element) = element {
            listen(element, "click", &weak, move |site, _: Event| {
                site.gallery_event(event.clone());
            });
        }
    }
    if let Some(lightbox) = gallery.lightbox() {
        let backdrop = EventTarget::clone(lightbox);
        listen(lightbox, "click", &weak, move |site, event: Event| {
            if event.target().as_ref() == Some(&backdrop) {
                site.gallery_event(GalleryEvent::BackdropClicked);
            }
        });
    }

    // Keyboard and pointer
    listen(&document, "keydown", &weak, |site, event: KeyboardEvent| {
        site.key_pressed(Key::from_dom_key(&event.key()));
    });
    listen(&document, "mousedown", &weak, |site, _: Event| site.mouse_down());

    // Navigation
    let nav = s.nav().clone();
    if let Some(hamburger) = &nav.hamburger {
        listen(hamburger, "click", &weak, |site, _: Event| site.toggle_menu());
    }
    for link in dom::select_all(&document, ".nav-link") {
        listen(&link, "click", &weak, |site, _: Event| site.nav_link_clicked());
    }
    if let (Some(hamburger), Some(menu)) = (nav.hamburger, nav.menu) {
        listen(&document, "click", &weak, move |site, event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = menu.contains(target.as_ref()) || hamburger.contains(target.as_ref());
            site.page_clicked(inside);
        });
    }
    for anchor in dom::select_all(&document, "a[href^=\"#\"]") {
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen(&anchor, "click", &weak, move |site, event: Event| {
            event.prevent_default();
            if let Some(target) = dom::select_html(site.document(), &href) {
                site.scroll_to_anchor(&target);
            }
        });
    }
    if let Some(window) = web_sys::window() {
        listen(&window, "scroll", &weak, |site, _: Event| site.scrolled());
    }

    // Contact form
    if let Some(form) = s.contact_view() {
        listen(form.form(), "submit", &weak, |site, event: Event| {
            event.prevent_default();
            site.submit_form();
        });
        for field in FieldId::ALL {
            let Some(input) = form.field_element(field) else {
                continue;
            };
            let required = input.has_attribute("required");
            let element = input.clone();
            listen(&input, "blur", &weak, move |site, _: Event| {
                site.field_blur(field, &field_value(&element), required);
            });
            listen(&input, "input", &weak, move |site, _: Event| site.field_input(field));
        }
    }
}
