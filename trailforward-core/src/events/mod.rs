//! Upcoming/past event categorization and the board that renders it.

mod board;
mod categorize;
mod render;

pub use board::{BoardContext, CreateOutcome, DeleteOutcome, EventBoard, EventForm};
pub use categorize::{CategorizedView, Partition, categorize};
pub use render::{render_event_item, render_partition};
