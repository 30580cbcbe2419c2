//! Core domain entities.
//!
//! - [`Link`] - A persisted short code to target URL mapping with click metadata
//! - [`NewLink`] - Input for creating a link

pub mod link;

pub use link::{Link, NewLink};
