//! Domain layer containing the link entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Code issuance and redirect resolution live in
//! [`crate::application::services`] and talk to the store only through
//! [`repositories::LinkRepository`].

pub mod entities;
pub mod repositories;
