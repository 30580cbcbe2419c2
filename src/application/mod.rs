//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkRepository`] trait
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::code_issuer::CodeIssuer`] - Validates requested codes and generates free ones
//! - [`services::redirect_resolver::RedirectResolver`] - Resolves codes and counts clicks
//! - [`services::link_service::LinkService`] - Link creation, lookup, listing and deletion

pub mod services;
