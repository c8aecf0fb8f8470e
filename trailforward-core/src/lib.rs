//! Core types for the Trail Forward site.
//!
//! This crate holds everything the server and the CLI share:
//! - `event` record types and date parsing
//! - `events` categorizer and the board that keeps a surface in sync with it
//! - `gallery` sliding-window navigator over the photo gallery
//! - `ui` element descriptions and the `Surface` they are applied to
//! - `store` traits for the record and image collaborators

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod events;
pub mod gallery;
pub mod maps;
pub mod store;
pub mod ui;

pub use error::{CoreError, CoreResult};
pub use event::{EventRecord, NewEvent};
