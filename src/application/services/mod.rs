//! Business logic services for the application layer.

pub mod code_issuer;
pub mod link_service;
pub mod redirect_resolver;

pub use code_issuer::{CodeIssuer, MAX_GENERATION_ATTEMPTS};
pub use link_service::{LinkService, LinkTotals};
pub use redirect_resolver::RedirectResolver;
