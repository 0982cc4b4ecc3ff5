//! Console Configuration
//!
//! Defaults, optionally overridden by `<meta>` tags rendered into the page.

use std::time::Duration;

/// Page sizes offered by the grid pager
pub const PAGE_SIZE_CHOICES: &[usize] = &[10, 25, 50, 100];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Absolute origin the `/api/...` paths are resolved against
    pub api_base: String,
    pub default_page_size: usize,
    /// The list endpoints refuse to return more rows than this
    pub max_page_size: usize,
    pub request_timeout: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost".to_string(),
            default_page_size: 25,
            max_page_size: 100,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ConsoleConfig {
    /// Build from a `<meta name=...>` lookup, keeping defaults for missing
    /// or unparsable values
    pub fn from_meta(origin: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(origin) = origin.filter(|o| !o.is_empty() && o != "null") {
            config.api_base = origin;
        }
        if let Some(base) = lookup("console-api-base").filter(|b| !b.trim().is_empty()) {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(size) = lookup("console-page-size").and_then(|s| s.trim().parse::<usize>().ok()) {
            config.default_page_size = size.clamp(1, config.max_page_size);
        }
        if let Some(ms) = lookup("console-timeout-ms").and_then(|s| s.trim().parse::<u64>().ok()) {
            if ms > 0 {
                config.request_timeout = Duration::from_millis(ms);
            }
        }
        config
    }

    /// Read the current document
    pub fn from_document() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        let config = Self::from_meta(origin, crate::session::meta_content);
        log::info!(
            target: "config",
            "[CONFIG] api_base={} page_size={} timeout={:?}",
            config.api_base,
            config.default_page_size,
            config.request_timeout
        );
        config
    }

    pub fn clamp_page_size(&self, page_size: usize) -> usize {
        page_size.clamp(1, self.max_page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_meta() {
        let config = ConsoleConfig::from_meta(None, lookup(&[]));
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.default_page_size, 25);
    }

    #[test]
    fn test_origin_then_meta_override() {
        let config = ConsoleConfig::from_meta(Some("https://console.example".into()), lookup(&[]));
        assert_eq!(config.api_base, "https://console.example");

        let config = ConsoleConfig::from_meta(
            Some("https://console.example".into()),
            lookup(&[
                ("console-api-base", "https://api.example/"),
                ("console-page-size", "500"),
                ("console-timeout-ms", "1500"),
            ]),
        );
        assert_eq!(config.api_base, "https://api.example");
        assert_eq!(config.default_page_size, 100);
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_bad_meta_values_keep_defaults() {
        let config = ConsoleConfig::from_meta(
            Some("null".into()),
            lookup(&[("console-page-size", "many"), ("console-timeout-ms", "0")]),
        );
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_clamp_page_size() {
        let config = ConsoleConfig::default();
        assert_eq!(config.clamp_page_size(0), 1);
        assert_eq!(config.clamp_page_size(250), 100);
    }
}
