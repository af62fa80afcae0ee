#![allow(dead_code)]

use axum::Router;
use fxproxy_core::app_state::AppState;
use fxproxy_primitives::models::app_state::app_config::AppConfig;
use fxproxy_primitives::models::app_state::provider_details::ProviderInfo;
use secrecy::SecretString;
use std::sync::Arc;
use wiremock::MockServer;

/// Build a config pointing at the given provider URL
pub fn create_test_config(exchange_api_url: &str) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 8888,
        cors_origins: None,
        provider_details: ProviderInfo {
            exchange_api_url: exchange_api_url.to_string(),
            exchange_api_key: None,
            timeout_secs: 5,
        },
    }
}

/// Same as `create_test_config` but with a provider access key
pub fn create_test_config_with_key(exchange_api_url: &str, key: &str) -> AppConfig {
    let mut config = create_test_config(exchange_api_url);
    config.provider_details.exchange_api_key = Some(SecretString::from(key.to_string()));
    config
}

/// Create a test AppState
pub fn create_test_app_state(exchange_api_url: &str) -> Arc<AppState> {
    static INIT: std::sync::Once = std::sync::Once::new();

    INIT.call_once(|| {
        fxproxy::utility::logging::setup_logging();
    });

    AppState::new(create_test_config(exchange_api_url)).expect("Failed to build test state")
}

/// Create a test application Router
pub fn create_test_app(state: Arc<AppState>) -> Router {
    fxproxy_api::app::create_router(state)
}

/// Start a provider stand-in
pub async fn start_provider() -> MockServer {
    MockServer::start().await
}
