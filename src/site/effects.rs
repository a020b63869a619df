// SPDX-License-Identifier: MPL-2.0
//! Intersection observers and image load effects.

use super::listeners::with_site;
use super::{Site, SiteRef};
use crate::application::effects::{
    image_initial_opacity, lazy_source, reveal_delay_css, FadeState, ANIMATE_CLASS,
    FADE_TRANSITION, IMAGE_FADE_TRANSITION, LAZY_CLASS, REVEAL_GROUPS, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD, SCROLL_ANIMATE_CLASS,
};
use crate::config::Config;
use crate::domain::ui::Opacity;
use crate::infrastructure::dom::{self, set_class, set_style};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

const REVEAL_KEY_ATTR: &str = "data-reveal-key";

/// Sets up reveal-on-scroll, fade-on-scroll, lazy images and image fade-in.
pub(crate) fn attach(site: &Rc<RefCell<Site>>, config: &Config) {
    let weak = Rc::downgrade(site);
    let document = site.borrow().document().clone();
    let stagger = config.effects.reveal_stagger();

    // Reveal groups
    let reveal = observer(&weak, Some(REVEAL_ROOT_MARGIN), Some(REVEAL_THRESHOLD), |site, entry| {
        let target = entry.target();
        let Some(key) = target
            .get_attribute(REVEAL_KEY_ATTR)
            .and_then(|key| key.parse::<usize>().ok())
        else {
            return;
        };
        if site.revealed(key) {
            set_class(&target, ANIMATE_CLASS, true);
        }
    });
    if let Some(reveal) = &reveal {
        let mut next_key = 0usize;
        let mut register = |el: &Element| {
            if el.has_attribute(REVEAL_KEY_ATTR) {
                return;
            }
            if let Err(err) = el.set_attribute(REVEAL_KEY_ATTR, &next_key.to_string()) {
                tracing::debug!(error = ?err, "reveal key not set; element not observed");
                return;
            }
            next_key += 1;
            reveal.observe(el);
        };
        for el in dom::select_all(&document, &format!(".{SCROLL_ANIMATE_CLASS}")) {
            register(&el);
        }
        for selector in REVEAL_GROUPS {
            for (index, el) in dom::select_all(&document, selector).iter().enumerate() {
                set_class(el, SCROLL_ANIMATE_CLASS, true);
                if let Some(html) = el.dyn_ref::<HtmlElement>() {
                    set_style(html, "transition-delay", &reveal_delay_css(index, stagger));
                }
                register(el);
            }
        }
    }

    // Fade on scroll
    let fade = observer(&weak, None, Some(REVEAL_THRESHOLD), |_, entry| {
        if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
            Site::show_faded(&target, FadeState::Shown);
        }
    });
    if let Some(fade) = &fade {
        for el in dom::select_all(&document, ".fade-on-scroll") {
            if let Ok(html) = el.dyn_into::<HtmlElement>() {
                Site::show_faded(&html, FadeState::Waiting);
                set_style(&html, "transition", FADE_TRANSITION);
                fade.observe(&html);
            }
        }
    }

    // Lazy images
    let lazy = observer(&weak, None, None, |_, entry| {
        if let Ok(img) = entry.target().dyn_into::<HtmlImageElement>() {
            let data_src = img.get_attribute("data-src");
            let src = img.src();
            img.set_src(lazy_source(data_src.as_deref(), &src));
            set_class(&img, LAZY_CLASS, false);
        }
    });
    if let Some(lazy) = &lazy {
        for el in dom::select_all(&document, "img[loading=\"lazy\"]") {
            lazy.observe(&el);
        }
    }

    attach_image_fade(&document);
}

/// Builds an observer calling `on_enter` for each intersecting entry.
///
/// Each target is unobserved after its first intersection.
fn observer(
    site: &SiteRef,
    root_margin: Option<&str>,
    threshold: Option<f64>,
    on_enter: impl Fn(&mut Site, &IntersectionObserverEntry) + 'static,
) -> Option<IntersectionObserver> {
    let site = site.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                with_site(&site, |s| on_enter(s, &entry));
                observer.unobserve(&entry.target());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    if let Some(threshold) = threshold {
        options.set_threshold(&JsValue::from_f64(threshold));
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options);
    callback.forget();
    match observer {
        Ok(observer) => Some(observer),
        Err(err) => {
            tracing::warn!(error = ?err, "IntersectionObserver unavailable");
            None
        }
    }
}

/// Fades images in once loaded; images already decoded show at once.
fn attach_image_fade(document: &Document) {
    for el in dom::select_all(document, "img") {
        let Ok(img) = el.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        let target = img.clone();
        let on_load = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            set_style(&target, "opacity", &Opacity::VISIBLE.to_css());
        });
        if img
            .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::debug!("image load listener not attached");
        }
        on_load.forget();

        let complete = img.complete();
        set_style(&img, "opacity", &image_initial_opacity(complete).to_css());
        if !complete {
            set_style(&img, "transition", IMAGE_FADE_TRANSITION);
        }
    }
}
