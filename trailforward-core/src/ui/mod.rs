//! UI descriptions and the surfaces they are applied to.
//!
//! Rendering code builds plain [`Element`] trees. A [`Surface`] is the live
//! tree those descriptions get applied to; [`Document`] is the in-memory
//! surface used by the server (serialized to HTML) and the CLI (printed as
//! text).

mod document;
mod element;
mod html;
mod surface;

pub use document::Document;
pub use element::{Action, Element, Node};
pub use html::to_html;
pub use surface::Surface;
