//! Keeps a surface in sync with a [`GalleryNavigator`].

use tracing::{debug, error, warn};

use super::navigator::{Advance, Direction, GalleryNavigator, WindowShift};
use super::render::{render_controls, render_slot, render_window, slot_class, slot_id};
use crate::constants::{GALLERY_CONTROLS_ID, GALLERY_ID};
use crate::error::CoreError;
use crate::store::ImageStore;
use crate::ui::{Action, Surface};

pub struct GalleryViewer<S> {
    store: S,
    navigator: GalleryNavigator,
}

impl<S: ImageStore> GalleryViewer<S> {
    pub fn new(store: S, window: usize) -> Self {
        GalleryViewer {
            store,
            navigator: GalleryNavigator::new(None, window),
        }
    }

    pub fn navigator(&self) -> &GalleryNavigator {
        &self.navigator
    }

    /// Fetch the image set and render the initial window.
    ///
    /// A failed or empty fetch leaves an empty gallery with inert controls.
    pub async fn load<U: Surface + ?Sized>(&mut self, surface: &mut U) {
        let images = match self.store.list().await {
            Ok(images) => Some(images),
            Err(CoreError::ImagesNotFound) => {
                warn!("No images found in the gallery");
                None
            }
            Err(e) => {
                error!(error = %e, "Error fetching gallery images");
                None
            }
        };

        debug!(count = images.as_ref().map_or(0, Vec::len), "Fetched gallery images");
        self.navigator = GalleryNavigator::new(images, self.navigator.capacity());
        self.render(surface);
    }

    /// Rebuild the whole gallery region and its controls.
    pub fn render<U: Surface + ?Sized>(&self, surface: &mut U) {
        if !surface.replace_children(GALLERY_ID, render_window(&self.navigator)) {
            error!(region = GALLERY_ID, "Gallery element not found");
        }
        // Controls are optional on a page
        surface.replace_children(GALLERY_CONTROLS_ID, render_controls(&self.navigator));
    }

    /// Slide the window and patch the surface: one image in, one out,
    /// then move the active marking to the new middle.
    pub fn advance<U: Surface + ?Sized>(&mut self, surface: &mut U, direction: Direction) -> Advance {
        let advance = self.navigator.advance(direction);

        match &advance {
            Advance::Inert => return advance,
            Advance::Unchanged => {}
            Advance::Shifted(shift) => self.apply_shift(surface, shift),
        }

        self.mark_active(surface);
        advance
    }

    /// Route a click action to the navigator. Other actions are ignored.
    pub fn dispatch<U: Surface + ?Sized>(&mut self, surface: &mut U, action: Action) -> Option<Advance> {
        match action {
            Action::Gallery(direction) => Some(self.advance(surface, direction)),
            Action::DeleteEvent(_) => None,
        }
    }

    /// Logical indices of the images currently on the surface.
    ///
    /// Uses the `data-index` tag; an untagged image falls back to matching
    /// its `src` against the image set (first match wins).
    pub fn rendered_indices<U: Surface + ?Sized>(&self, surface: &U) -> Vec<usize> {
        surface
            .child_ids(GALLERY_ID)
            .iter()
            .filter_map(|id| {
                surface
                    .attribute(id, "data-index")
                    .and_then(|tag| tag.parse().ok())
                    .or_else(|| {
                        let src = surface.attribute(id, "src")?;
                        self.navigator.position_of(&src)
                    })
            })
            .collect()
    }

    fn apply_shift<U: Surface + ?Sized>(&self, surface: &mut U, shift: &WindowShift) {
        if surface.remove(&slot_id(shift.evicted.index)).is_none() {
            warn!(index = shift.evicted.index, "Gallery image not found for removal");
        }

        let incoming = render_slot(&shift.admitted, false).into();
        let inserted = match shift.direction {
            Direction::Next => surface.append_child(GALLERY_ID, incoming),
            Direction::Previous => surface.prepend_child(GALLERY_ID, incoming),
        };
        if !inserted {
            error!(region = GALLERY_ID, "Gallery element not found");
        }
    }

    fn mark_active<U: Surface + ?Sized>(&self, surface: &mut U) {
        let active = self.navigator.active_index();
        for index in self.navigator.indices() {
            surface.set_attribute(&slot_id(index), "class", slot_class(Some(index) == active));
        }
    }
}
