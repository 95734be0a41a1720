//! CORS proxy endpoint templates.
//!
//! A template is a URL containing one placeholder:
//!
//! - `{url}` - the target URL, percent-encoded like `encodeURIComponent`
//! - `{raw_url}` - the target URL inserted verbatim

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::error::FetchError;

/// Placeholder replaced by the percent-encoded target.
pub const ENCODED_PLACEHOLDER: &str = "{url}";

/// Placeholder replaced by the target as-is.
pub const RAW_PLACEHOLDER: &str = "{raw_url}";

/// Built-in proxies, tried in this order.
pub const DEFAULT_PROXY_TEMPLATES: &[&str] = &[
    "https://api.allorigins.win/raw?url={url}",
    "https://corsproxy.io/?{url}",
    "https://cors-anywhere.herokuapp.com/{raw_url}",
];

/// One proxy endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyEndpoint {
    /// Short name used in logs and reports (the proxy host by default).
    pub name: String,
    /// URL template with a `{url}` or `{raw_url}` placeholder.
    pub template: String,
}

impl ProxyEndpoint {
    /// Creates an endpoint named after the template's host.
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let name = Url::parse(&template)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| template.clone());
        Self { name, template }
    }

    /// Creates an endpoint with an explicit name.
    pub fn named(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }

    /// The built-in proxy list.
    pub fn defaults() -> Vec<ProxyEndpoint> {
        DEFAULT_PROXY_TEMPLATES
            .iter()
            .map(|t| ProxyEndpoint::new(*t))
            .collect()
    }

    /// Checks that the template has a placeholder and yields a valid URL.
    pub fn validate(&self) -> Result<(), FetchError> {
        if !self.template.contains(ENCODED_PLACEHOLDER) && !self.template.contains(RAW_PLACEHOLDER)
        {
            return Err(FetchError::InvalidProxy(format!(
                "{} has no {} or {} placeholder",
                self.template, ENCODED_PLACEHOLDER, RAW_PLACEHOLDER
            )));
        }
        self.request_url("https://example.com").map(|_| ())
    }

    /// Builds the proxied request URL for a target.
    pub fn request_url(&self, target: &str) -> Result<String, FetchError> {
        let encoded = urlencoding::encode(target);
        let request = self
            .template
            .replace(ENCODED_PLACEHOLDER, &encoded)
            .replace(RAW_PLACEHOLDER, target);

        Url::parse(&request).map_err(|e| FetchError::InvalidProxy(format!("{}: {}", request, e)))?;
        Ok(request)
    }
}

impl fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_order() {
        let names: Vec<String> = ProxyEndpoint::defaults().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["api.allorigins.win", "corsproxy.io", "cors-anywhere.herokuapp.com"]
        );
    }

    #[test]
    fn test_encoded_placeholder() {
        let proxy = ProxyEndpoint::new("https://api.allorigins.win/raw?url={url}");
        let url = proxy.request_url("https://apple.com/a b?x=1&y=2").unwrap();
        assert_eq!(
            url,
            "https://api.allorigins.win/raw?url=https%3A%2F%2Fapple.com%2Fa%20b%3Fx%3D1%26y%3D2"
        );
    }

    #[test]
    fn test_raw_placeholder() {
        let proxy = ProxyEndpoint::new("https://cors-anywhere.herokuapp.com/{raw_url}");
        let url = proxy.request_url("https://apple.com").unwrap();
        assert_eq!(url, "https://cors-anywhere.herokuapp.com/https://apple.com");
    }

    #[test]
    fn test_validate_requires_placeholder() {
        assert!(ProxyEndpoint::new("https://proxy.example/").validate().is_err());
        assert!(ProxyEndpoint::new("https://proxy.example/?u={url}").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let proxy = ProxyEndpoint::new("not a url {url}");
        assert!(matches!(proxy.validate(), Err(FetchError::InvalidProxy(_))));
        assert_eq!(proxy.name, "not a url {url}");
    }

    #[test]
    fn test_all_defaults_valid() {
        for proxy in ProxyEndpoint::defaults() {
            assert!(proxy.validate().is_ok(), "{}", proxy);
        }
    }
}
