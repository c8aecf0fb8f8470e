//! Sliding-window navigation over the photo gallery.

mod navigator;
mod render;
mod viewer;

pub use navigator::{Advance, Direction, GalleryNavigator, WindowShift, WindowSlot, WindowState};
pub use render::{render_controls, render_slot, render_window, slot_class, slot_id};
pub use viewer::GalleryViewer;
