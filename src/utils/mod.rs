//! Pure validation and generation helpers shared by the services.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Target URL validation

pub mod code_generator;
pub mod url_validator;

pub use code_generator::{GENERATED_CODE_LENGTH, generate_code, validate_code};
pub use url_validator::{MAX_URL_LENGTH, validate_url};
