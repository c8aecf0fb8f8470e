use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction of a window slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => f.write_str("next"),
            Direction::Previous => f.write_str("previous"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Direction::Next),
            "previous" | "prev" | "p" => Ok(Direction::Previous),
            other => Err(format!("Unknown direction '{other}'. Expected next or previous")),
        }
    }
}

/// One visible image: its position in the full set and its reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSlot {
    pub index: usize,
    pub reference: String,
}

/// Snapshot of what is on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowState {
    pub visible: Vec<String>,
    pub active_offset: usize,
}

/// The one element that entered and the one that left during a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowShift {
    pub direction: Direction,
    pub admitted: WindowSlot,
    pub evicted: WindowSlot,
}

/// Result of [`GalleryNavigator::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// No images loaded; nothing to do.
    Inert,
    /// Every image is already visible; only the active marking is refreshed.
    Unchanged,
    Shifted(WindowShift),
}

/// Fixed-size window over a circular list of image references.
///
/// The window holds logical indices into `images`, so rendered elements can
/// be tagged with their index and never need a reverse lookup. The active
/// element is always the middle of the window, never the admitted one: one
/// `next` over five images with a window of three gives `[1, 2, 3]` with
/// index 2 active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    images: Vec<String>,
    capacity: usize,
    window: VecDeque<usize>,
}

impl GalleryNavigator {
    /// Window over the first `capacity` images. `capacity` is at least 1.
    pub fn new(images: Option<Vec<String>>, capacity: usize) -> Self {
        let images = images.unwrap_or_default();
        let capacity = capacity.max(1);
        let window = (0..images.len().min(capacity)).collect();

        GalleryNavigator { images, capacity, window }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Logical indices currently visible, in display order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.window.iter().copied()
    }

    pub fn slots(&self) -> Vec<WindowSlot> {
        self.indices().map(|index| self.slot(index)).collect()
    }

    /// Offset of the active element within the window.
    pub fn active_offset(&self) -> Option<usize> {
        if self.window.is_empty() {
            None
        } else {
            Some(self.window.len() / 2)
        }
    }

    /// Logical index of the active element.
    pub fn active_index(&self) -> Option<usize> {
        self.active_offset().and_then(|offset| self.window.get(offset).copied())
    }

    pub fn state(&self) -> WindowState {
        WindowState {
            visible: self.indices().map(|i| self.images[i].clone()).collect(),
            active_offset: self.active_offset().unwrap_or(0),
        }
    }

    /// Slide the window one position with wraparound.
    pub fn advance(&mut self, direction: Direction) -> Advance {
        let total = self.images.len();
        if total == 0 {
            return Advance::Inert;
        }
        if total <= self.capacity {
            return Advance::Unchanged;
        }

        let (admitted, evicted) = match direction {
            Direction::Next => {
                let Some(&edge) = self.window.back() else {
                    return Advance::Inert;
                };
                let admitted = (edge + 1) % total;
                self.window.push_back(admitted);
                (admitted, self.window.pop_front())
            }
            Direction::Previous => {
                let Some(&edge) = self.window.front() else {
                    return Advance::Inert;
                };
                let admitted = (edge + total - 1) % total;
                self.window.push_front(admitted);
                (admitted, self.window.pop_back())
            }
        };

        match evicted {
            Some(evicted) => Advance::Shifted(WindowShift {
                direction,
                admitted: self.slot(admitted),
                evicted: self.slot(evicted),
            }),
            None => Advance::Unchanged,
        }
    }

    /// First index whose reference equals `reference`.
    ///
    /// Duplicate references always resolve to the earliest occurrence.
    pub fn position_of(&self, reference: &str) -> Option<usize> {
        self.images.iter().position(|image| image == reference)
    }

    fn slot(&self, index: usize) -> WindowSlot {
        WindowSlot {
            index,
            reference: self.images[index].clone(),
        }
    }
}
