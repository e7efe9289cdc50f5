/// Environment variable overriding the API server base URL. Same variable
/// the web front-end reads, so one deployment setting covers both clients.
pub const BASE_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

/// Base URL used when no override is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolves the base URL from an optional override (CLI flag or
    /// environment). Missing and empty values fall back to the default.
    pub fn resolve(base_url: Option<String>) -> Self {
        let base_url = base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_override_when_non_empty() {
        let config = ApiConfig::resolve(Some("https://api.example.com".to_string()));
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn resolve_falls_back_when_unset() {
        let config = ApiConfig::resolve(None);
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn resolve_treats_empty_value_as_unset() {
        let config = ApiConfig::resolve(Some(String::new()));
        assert_eq!(config.base_url, "http://localhost:8000");
    }
}
