//! Favicon resolution.

use tracing::{debug, warn};
use url::Url;

use crate::document::{Document, attr};

/// Icon `<link>` selectors, in priority order.
pub const FAVICON_SELECTORS: &[&str] = &[
    r#"link[rel="icon"]"#,
    r#"link[rel="shortcut icon"]"#,
    r#"link[rel="apple-touch-icon"]"#,
    r#"link[rel="apple-touch-icon-precomposed"]"#,
];

/// Finds the page's favicon as an absolute URL.
///
/// The first element of each selector is checked in turn; an empty `href`
/// moves on to the next selector. Without a usable link the conventional
/// `/favicon.ico` at the page origin is returned. `None` only when
/// `base_url` does not parse.
pub fn resolve_favicon(doc: &Document, base_url: &str) -> Option<String> {
    let base = match Url::parse(base_url) {
        Ok(base) => base,
        Err(e) => {
            warn!(base_url, error = %e, "Cannot resolve favicon against base URL");
            return None;
        }
    };

    for selector in FAVICON_SELECTORS {
        let link = match doc.select_first(selector) {
            Ok(link) => link,
            Err(e) => {
                warn!(error = %e, "Favicon selector failed");
                continue;
            }
        };
        let Some(href) = link.and_then(|l| attr(l, "href")).map(str::trim) else {
            continue;
        };
        if href.is_empty() {
            continue;
        }

        let resolved = absolutize(&base, href);
        debug!(selector, href, resolved = %resolved, "Favicon found");
        return Some(resolved);
    }

    let fallback = format!("{}/favicon.ico", origin(&base));
    debug!(fallback = %fallback, "Using default favicon location");
    Some(fallback)
}

/// Resolves an icon `href` against the page URL.
fn absolutize(base: &Url, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with("//") {
        format!("{}:{}", base.scheme(), href)
    } else if href.starts_with('/') {
        format!("{}{}", origin(base), href)
    } else {
        format!("{}/{}", origin(base), href)
    }
}

/// `scheme://host[:port]`, without a trailing slash.
fn origin(base: &Url) -> String {
    let host = base.host_str().unwrap_or_default();
    match base.port() {
        Some(port) => format!("{}://{}:{}", base.scheme(), host, port),
        None => format!("{}://{}", base.scheme(), host),
    }
}
