pub mod add;
pub mod delete;
pub mod events;
pub mod gallery;

use trailforward_core::constants::{GALLERY_CONTROLS_ID, GALLERY_ID, PAST_LIST_ID, UPCOMING_LIST_ID};
use trailforward_core::ui::{Document, Element};

/// Skeleton with the two event lists the board draws into.
pub fn board_document() -> Document {
    Document::new(
        Element::new("main")
            .with_child(Element::new("ul").with_id(UPCOMING_LIST_ID))
            .with_child(Element::new("ul").with_id(PAST_LIST_ID)),
    )
}

/// Skeleton with the gallery container and its controls.
pub fn gallery_document() -> Document {
    Document::new(
        Element::new("main")
            .with_child(Element::new("div").with_id(GALLERY_ID))
            .with_child(Element::new("nav").with_id(GALLERY_CONTROLS_ID)),
    )
}
