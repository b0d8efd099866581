//! HTTP client for the inventory backend's user endpoints.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{RegisterRequest, UserInfo};

/// Thin wrapper over a shared `reqwest::Client`.
///
/// Cloning is cheap; the connection pool is shared between clones, so the client
/// can be handed to components through context.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Create an account. On success the backend also opens a session (cookie)
    /// and returns the stored user document.
    pub async fn register_user(&self, request: &RegisterRequest) -> Result<UserInfo, ApiError> {
        let url = self.config.register_url();
        tracing::debug!("POST {}", url);

        let builder = self.http.post(&url).json(request);
        // Browsers drop the session cookie on cross-origin calls unless asked.
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        let user = response.json::<UserInfo>().await?;
        tracing::info!("Registered user {}", user.display_name());
        Ok(user)
    }
}
