use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Fragments REST API, e.g. `https://api.fragmenttrails.com`.
    pub base_url: String,
    pub request_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    pub page_size: u32,
    pub search_debounce_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5000".to_string(),
                request_timeout: 30,
            },
            listing: ListingConfig {
                page_size: 10,
                search_debounce_ms: 500,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("FRAGMENTS_API_BASE_URL") {
            let trimmed = v.trim();
            if !trimmed.is_empty() {
                cfg.api.base_url = trimmed.to_string();
            }
        }
        if let Ok(v) = std::env::var("FRAGMENTS_API_TIMEOUT") {
            if let Some(value) = parse_u64(&v) {
                cfg.api.request_timeout = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("FRAGMENTS_PAGE_SIZE") {
            if let Some(value) = parse_u32(&v) {
                cfg.listing.page_size = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("FRAGMENTS_SEARCH_DEBOUNCE_MS") {
            if let Some(value) = parse_u64(&v) {
                cfg.listing.search_debounce_ms = value;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.trim().is_empty() {
            return Err("API base_url must not be empty".to_string());
        }
        if self.api.request_timeout == 0 {
            return Err("API request_timeout must be greater than 0".to_string());
        }
        if self.listing.page_size == 0 {
            return Err("Listing page_size must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let mut cfg = AppConfig::default();
        cfg.api.base_url = "  ".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let mut cfg = AppConfig::default();
        cfg.listing.page_size = 0;
        assert!(cfg.validate().is_err());
    }
}
