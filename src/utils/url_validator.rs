//! Target URL validation.

use url::Url;

/// Schemes a link may redirect to.
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Longest target URL accepted.
pub const MAX_URL_LENGTH: usize = 2048;

/// Returns true iff `raw` parses as an absolute URL with an `http` or
/// `https` scheme.
///
/// Pure; performs no I/O. The URL is not normalized: callers store the
/// original string so that resolution returns it byte for byte. Because of
/// that, input the parser would silently clean up (control characters such
/// as tabs and newlines, surrounding whitespace) is rejected, as the stored
/// string must also be a valid `Location` header value.
pub fn validate_url(raw: &str) -> bool {
    if raw.len() > MAX_URL_LENGTH
        || raw.trim() != raw
        || raw.bytes().any(|b| b.is_ascii_control())
    {
        return false;
    }

    match Url::parse(raw) {
        Ok(url) => ALLOWED_SCHEMES.contains(&url.scheme()) && url.has_host(),
        Err(_) => false,
    }
}
