//! Backend client shared through context.

use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;

/// Get the backend client provided by [`ApiProvider`].
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that builds one [`ApiClient`] for the whole app.
///
/// Without an explicit `config` the backend URL comes from
/// [`ApiConfig::from_env`], resolved on first render only.
#[component]
pub fn ApiProvider(config: Option<ApiConfig>, children: Element) -> Element {
    use_context_provider(move || {
        let client = ApiClient::new(config.unwrap_or_else(ApiConfig::from_env));
        tracing::info!("Backend at {}", client.config().backend_url);
        client
    });

    rsx! {
        {children}
    }
}
