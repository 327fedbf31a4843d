use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api/character/";
pub const DEFAULT_FAVORITES_KEY: &str = "rmFavorites";
pub const DEFAULT_LAST_SECTION_KEY: &str = "rmLastSection";
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 2000;

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_favorites_key() -> String {
    DEFAULT_FAVORITES_KEY.to_string()
}

fn default_last_section_key() -> String {
    DEFAULT_LAST_SECTION_KEY.to_string()
}

fn default_toast_timeout_ms() -> u32 {
    DEFAULT_TOAST_TIMEOUT_MS
}

/// Catalog settings. Every field has a default, so a JSON override only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Character listing endpoint
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Local storage key holding the favorites JSON array
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
    /// Local storage key holding the last selected section
    #[serde(default = "default_last_section_key")]
    pub last_section_key: String,
    /// Auto-dismiss delay for regular toasts
    #[serde(default = "default_toast_timeout_ms")]
    pub toast_timeout_ms: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            favorites_key: default_favorites_key(),
            last_section_key: default_last_section_key(),
            toast_timeout_ms: default_toast_timeout_ms(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            CatalogConfig::from_json(r#"{"api_base_url": "http://localhost:8080/character/"}"#)
                .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/character/");
        assert_eq!(config.favorites_key, "rmFavorites");
        assert_eq!(config.last_section_key, "rmLastSection");
        assert_eq!(config.toast_timeout_ms, 2000);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(CatalogConfig::from_json("{}").unwrap(), CatalogConfig::default());
    }
}
