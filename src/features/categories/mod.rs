//! Category taxonomy feature.
//!
//! Categories are created only by the startup seed step and are read-only
//! afterwards; no route ever updates or deletes them. Provider listings
//! reference them by name only (free text, no foreign key).

pub mod models;
pub mod services;

pub use services::CategoryService;
