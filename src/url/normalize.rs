use crate::url::Origin;
use crate::UrlError;
use url::Url;

/// Scheme assumed when the target does not start with `http`
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Applies the textual normalization to a raw target
///
/// The input is trimmed, then `http://` is prepended unless it already starts
/// with `http`. Nothing else about the string is changed.
///
/// # Examples
///
/// ```
/// use robots_probe::url::normalize_input;
///
/// assert_eq!(normalize_input("example.com"), "http://example.com");
/// assert_eq!(normalize_input("https://example.com"), "https://example.com");
/// ```
pub fn normalize_input(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, trimmed)
    }
}

/// Normalizes a user-supplied target into an [`Origin`]
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prepend `http://` if the value does not start with `http`
/// 3. Parse the URL; reject if malformed
/// 4. Reject schemes other than HTTP and HTTPS
/// 5. Reject URLs without a host
///
/// # Arguments
///
/// * `input` - The raw `--url` value
///
/// # Returns
///
/// * `Ok(Origin)` - The base for every request of the run
/// * `Err(UrlError)` - The target cannot be used
pub fn normalize_target(input: &str) -> Result<Origin, UrlError> {
    let normalized = normalize_input(input);
    let url =
        Url::parse(&normalized).map_err(|e| UrlError::Parse(format!("{}: {}", normalized, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(Origin::new(url))
}
