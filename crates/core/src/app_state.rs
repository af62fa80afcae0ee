use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::ExchangeRateClient;
use eyre::Result;
pub use fxproxy_primitives::models::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub fx: ExchangeRateClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.provider_details.timeout_secs))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Self::with_client(http, config)
    }

    /// Builds state around a caller-supplied client.
    pub fn with_client(http: Client, config: AppConfig) -> Result<Arc<Self>> {
        let fx = ExchangeRateClient::new(
            http,
            &config.provider_details.exchange_api_url,
            config.provider_details.exchange_api_key.clone(),
        )?;

        Ok(Arc::new(Self { config, fx }))
    }
}
