//! Short code generation and validation utilities.
//!
//! Codes are 6 to 8 ASCII alphanumerics. Generated codes are always
//! [`GENERATED_CODE_LENGTH`] characters drawn uniformly from the 62-symbol
//! alphabet.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Length of randomly generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Compiled pattern every stored code must match.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("code pattern is valid"));

/// Generates a random code of `length` characters from `[A-Za-z0-9]`.
///
/// Uses the thread-local CSPRNG; each character is an independent uniform
/// draw from the 62-character alphabet.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(validate_code(&code));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true iff `code` matches `^[A-Za-z0-9]{6,8}$`.
///
/// Pure; performs no I/O. Surrounding whitespace is not stripped.
pub fn validate_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}
