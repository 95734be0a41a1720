//! Input URL normalization and validation.

use stylepeek_core::ExtractError;
use tracing::debug;
use url::Url;

/// Scheme prepended to inputs that have none.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Turns a domain or URL typed by a user into an absolute URL.
///
/// Surrounding whitespace is trimmed and `https://` is prepended unless the
/// input already starts with `http://` or `https://`. The returned string is
/// the trimmed input plus the prefix, not the parser's re-serialization, so
/// `apple.com` becomes `https://apple.com` without a trailing slash.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidUrl`] for empty input or when the result is
/// not a valid URL.
pub fn normalize_url(input: &str) -> Result<String, ExtractError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::invalid_url(input, "input is empty"));
    }

    let url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    };

    let parsed = Url::parse(&url).map_err(|e| ExtractError::invalid_url(input, e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ExtractError::invalid_url(input, "missing host"));
    }

    debug!(input, url = %url, "Normalized URL");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_https() {
        assert_eq!(normalize_url("apple.com").unwrap(), "https://apple.com");
        assert_eq!(
            normalize_url("www.example.org/path?q=1").unwrap(),
            "https://www.example.org/path?q=1"
        );
    }

    #[test]
    fn test_existing_scheme_kept() {
        assert_eq!(normalize_url("http://example.com").unwrap(), "http://example.com");
        assert_eq!(normalize_url("https://example.com/").unwrap(), "https://example.com/");
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(normalize_url("  \n apple.com \t").unwrap(), "https://apple.com");
    }

    #[test]
    fn test_empty_and_blank_rejected() {
        for input in ["", "   ", "\n\t"] {
            let err = normalize_url(input).unwrap_err();
            assert!(matches!(err, ExtractError::InvalidUrl { .. }));
            assert!(err.to_string().contains("Invalid URL format"));
        }
    }

    #[test]
    fn test_unparseable_rejected() {
        assert!(matches!(
            normalize_url("exa mple.com"),
            Err(ExtractError::InvalidUrl { .. })
        ));
        assert!(matches!(
            normalize_url("https://"),
            Err(ExtractError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_normalized_result_parses() {
        for input in ["apple.com", "github.com/rust-lang", "localhost:8080"] {
            let url = normalize_url(input).unwrap();
            assert!(url.starts_with("https://"));
            assert!(Url::parse(&url).is_ok(), "{url}");
        }
    }
}
