//! Element descriptions for the gallery window and its controls.

use super::navigator::{Direction, GalleryNavigator, WindowSlot};
use crate::constants::GALLERY_IMAGE_ALT;
use crate::ui::{Action, Element, Node};

/// Element id of the rendered image at logical `index`.
pub fn slot_id(index: usize) -> String {
    format!("gallery-image-{index}")
}

pub fn slot_class(active: bool) -> &'static str {
    if active { "gallery-image active" } else { "gallery-image" }
}

/// An image tagged with its logical index.
pub fn render_slot(slot: &WindowSlot, active: bool) -> Element {
    Element::new("img")
        .with_id(slot_id(slot.index))
        .with_attr("class", slot_class(active))
        .with_attr("src", slot.reference.as_str())
        .with_attr("alt", GALLERY_IMAGE_ALT)
        .with_attr("data-index", slot.index.to_string())
}

/// Every visible image, active one marked. Empty when nothing is loaded.
pub fn render_window(navigator: &GalleryNavigator) -> Vec<Node> {
    let active = navigator.active_index();
    navigator
        .slots()
        .iter()
        .map(|slot| render_slot(slot, Some(slot.index) == active).into())
        .collect()
}

/// Previous/next buttons, disabled while there is nothing to scroll.
pub fn render_controls(navigator: &GalleryNavigator) -> Vec<Node> {
    [(Direction::Previous, "‹"), (Direction::Next, "›")]
        .into_iter()
        .map(|(direction, label)| {
            let button = Element::new("button")
                .with_id(format!("gallery-{direction}"))
                .with_class("gallery-nav")
                .with_attr("aria-label", direction.to_string())
                .on_click(Action::Gallery(direction))
                .with_text(label);

            if navigator.is_empty() {
                button.with_attr("disabled", "disabled").into()
            } else {
                button.into()
            }
        })
        .collect()
}
