/// Placeholder shown when no event is on or after the reference instant.
pub const NO_UPCOMING_EVENTS: &str = "No upcoming events found.";

/// Placeholder shown when no event is before the reference instant.
pub const NO_PAST_EVENTS: &str = "No past events found.";

/// Number of gallery images visible at once.
pub const DEFAULT_GALLERY_WINDOW: usize = 3;

pub const DEFAULT_PORT: u16 = 3000;

/// Alt text for every gallery image.
pub const GALLERY_IMAGE_ALT: &str = "Trail Forward Gallery Image";

/// Element ids of the rendering regions.
pub const UPCOMING_LIST_ID: &str = "upcoming-events-list";
pub const PAST_LIST_ID: &str = "past-events-list";
pub const GALLERY_ID: &str = "image-gallery";
pub const GALLERY_CONTROLS_ID: &str = "gallery-controls";

/// Date label format, close to a US-locale `toLocaleString`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
