// SPDX-License-Identifier: MPL-2.0
//! End-to-end gallery scenarios driven through the public controller API.

use proptest::prelude::*;
use savory_bites::application::gallery::{
    GalleryController, GalleryEvent, GalleryResponse, GalleryTask, Key,
};
use savory_bites::domain::gallery::{Caption, Filter, GalleryItem, ImageRef, ItemIndex};
use savory_bites::domain::ui::{ItemAppearance, TransitionTiming};
use savory_bites::infrastructure::{AdvanceClock, HeadlessGallery, ManualScheduler};
use std::time::Duration;

type Gallery = GalleryController<HeadlessGallery, ManualScheduler<GalleryTask>>;

const CATEGORIES: [&str; 3] = ["starters", "mains", "desserts"];

fn gallery(categories: &[&str]) -> Gallery {
    let items = categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            GalleryItem::new(
                *category,
                ImageRef::new(format!("images/dish-{}.jpg", i + 1), format!("Dish {}", i + 1)),
            )
            .with_caption(Caption::new(format!("Dish {}", i + 1), *category))
        })
        .collect();
    let buttons = ["all", "starters", "mains", "desserts"]
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

fn current_src(gallery: &Gallery) -> Option<&str> {
    gallery.view().slide().map(|slide| slide.image.src.as_str())
}

#[test]
fn filter_then_browse_filtered_lightbox() {
    let mut gallery = gallery(&["mains", "desserts", "mains"]);

    let outcome = gallery.apply_filter(Filter::from_token("mains"));
    assert_eq!(outcome.visible, 2);
    assert_eq!(gallery.visible_items(), vec![ItemIndex(0), ItemIndex(2)]);

    assert!(gallery.open_lightbox(ItemIndex(2)));
    assert_eq!(gallery.lightbox().current_index(), 1);
    assert_eq!(current_src(&gallery), Some("images/dish-3.jpg"));

    assert_eq!(gallery.next(), Some(0));
    assert_eq!(current_src(&gallery), Some("images/dish-1.jpg"));
}

#[test]
fn transitions_complete_on_the_virtual_clock() {
    let mut gallery = gallery(&["mains", "desserts", "mains"]);
    gallery.apply_filter(Filter::from_token("desserts"));

    gallery.advance(Duration::from_millis(10));
    assert_eq!(gallery.view().item(ItemIndex(1)).appearance, ItemAppearance::SHOWN);
    assert!(gallery.view().item(ItemIndex(0)).displayed);

    gallery.advance(Duration::from_millis(290));
    assert!(!gallery.view().item(ItemIndex(0)).displayed);
    assert!(!gallery.view().item(ItemIndex(2)).displayed);
    assert!(gallery.view().item(ItemIndex(1)).displayed);
    assert_eq!(gallery.scheduler().pending_count(), 0);
}

#[test]
fn filtered_out_item_cannot_be_opened() {
    let mut gallery = gallery(&["mains", "desserts"]);
    gallery.apply_filter(Filter::from_token("mains"));

    assert_eq!(
        gallery.handle(GalleryEvent::ItemClicked(ItemIndex(1))),
        GalleryResponse::Ignored
    );
    assert!(!gallery.lightbox().is_open());
    assert!(!gallery.view().lightbox_visible());
}

#[test]
fn escape_closes_and_restores_scrolling() {
    let mut gallery = gallery(&["mains", "desserts"]);
    gallery.handle(GalleryEvent::ItemClicked(ItemIndex(0)));
    assert!(gallery.view().scroll_locked());

    assert_eq!(
        gallery.handle(GalleryEvent::KeyPressed(Key::Escape)),
        GalleryResponse::Closed
    );
    assert!(!gallery.view().lightbox_visible());
    assert!(!gallery.view().scroll_locked());
}

#[test]
fn repeated_open_close_always_unlocks_scrolling() {
    let mut gallery = gallery(&["mains", "desserts", "mains"]);

    gallery.close();
    assert!(!gallery.view().scroll_locked());

    for item in [0, 1, 2, 0] {
        assert!(gallery.open_lightbox(ItemIndex(item)));
        assert!(gallery.view().scroll_locked());

        gallery.close();
        assert!(!gallery.view().scroll_locked());
        gallery.close();
        assert!(!gallery.view().scroll_locked());
        assert!(!gallery.lightbox().is_open());
    }

    gallery.handle(GalleryEvent::ItemClicked(ItemIndex(1)));
    gallery.handle(GalleryEvent::BackdropClicked);
    gallery.handle(GalleryEvent::CloseClicked);
    assert!(!gallery.view().scroll_locked());
    assert!(!gallery.view().lightbox_visible());
}

#[test]
fn arrows_do_nothing_while_closed() {
    let mut gallery = gallery(&["mains", "desserts"]);
    assert_eq!(
        gallery.handle(GalleryEvent::KeyPressed(Key::ArrowRight)),
        GalleryResponse::Ignored
    );
    assert_eq!(gallery.view().render_count(), 0);
}

#[test]
fn previous_from_first_wraps_to_last() {
    let mut gallery = gallery(&["mains", "mains", "mains"]);
    gallery.open_lightbox(ItemIndex(0));
    assert_eq!(gallery.previous(), Some(2));
    assert_eq!(current_src(&gallery), Some("images/dish-3.jpg"));
}

fn arb_categories() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(CATEGORIES.to_vec()), 1..12)
}

fn arb_filter() -> impl Strategy<Value = Filter> {
    prop::sample::select(vec!["all", "starters", "mains", "desserts", "drinks"])
        .prop_map(Filter::from_token)
}

proptest! {
    #[test]
    fn visibility_follows_filter(categories in arb_categories(), filter in arb_filter()) {
        let mut gallery = gallery(&categories);
        gallery.apply_filter(filter.clone());
        gallery.advance(Duration::from_secs(1));

        for (i, category) in categories.iter().enumerate() {
            let expected = filter == Filter::All || filter.token() == *category;
            prop_assert_eq!(gallery.items()[i].is_visible(), expected);
            prop_assert_eq!(gallery.view().item(ItemIndex(i)).displayed, expected);
        }
    }

    #[test]
    fn lightbox_cursor_stays_in_range(
        categories in arb_categories(),
        filter in arb_filter(),
        steps in prop::collection::vec(any::<bool>(), 0..30),
    ) {
        let mut gallery = gallery(&categories);
        gallery.apply_filter(filter);
        let visible = gallery.visible_items();
        prop_assume!(!visible.is_empty());

        prop_assert!(gallery.open_lightbox(visible[0]));
        for forward in steps {
            let position = if forward { gallery.next() } else { gallery.previous() };
            let position = position.expect("lightbox is open");
            prop_assert!(position < visible.len());
            let shown = visible[position];
            prop_assert_eq!(
                current_src(&gallery),
                Some(gallery.items()[shown.0].image().src.as_str())
            );
        }
    }
}
