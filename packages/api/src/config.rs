//! Backend configuration from environment variables.

/// Fallback used when `BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

const REGISTER_PATH: &str = "/api/users/register";

/// Where the inventory backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub backend_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Resolve the backend URL.
    ///
    /// Native builds read `BACKEND_URL` at runtime (loading `.env` first). Browser
    /// builds have no process environment, so the value is baked in at compile time.
    pub fn from_env() -> Self {
        match backend_url_from_env() {
            Some(url) if !url.trim().is_empty() => Self::default().with_backend_url(url),
            _ => {
                tracing::debug!("BACKEND_URL not set, using {}", DEFAULT_BACKEND_URL);
                Self::default()
            }
        }
    }

    /// Builder method to override the backend URL.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.backend_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Full URL of the registration endpoint.
    pub fn register_url(&self) -> String {
        format!("{}{}", self.backend_url, REGISTER_PATH)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn backend_url_from_env() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var("BACKEND_URL").ok()
}

#[cfg(target_arch = "wasm32")]
fn backend_url_from_env() -> Option<String> {
    option_env!("BACKEND_URL").map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = ApiConfig::default();
        assert_eq!(config.backend_url, "http://localhost:5000");
        assert_eq!(
            config.register_url(),
            "http://localhost:5000/api/users/register"
        );
    }

    #[test]
    fn test_with_backend_url_trims_trailing_slashes() {
        let config = ApiConfig::default().with_backend_url(" https://inventory.example.com// ");
        assert_eq!(config.backend_url, "https://inventory.example.com");
        assert_eq!(
            config.register_url(),
            "https://inventory.example.com/api/users/register"
        );
    }
}
