use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct ProviderInfo {
    pub exchange_api_url: String,
    /// Sent as `access_key` when the provider requires one.
    pub exchange_api_key: Option<SecretString>,
    pub timeout_secs: u64,
}

impl ProviderInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            exchange_api_url: env::var("EXCHANGE_API_URL")
                .unwrap_or_else(|_| "http://api.fixer.io".into()),

            exchange_api_key: env::var("EXCHANGE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(|key| SecretString::new(key.into())),

            timeout_secs: env::var("EXCHANGE_API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .map_err(|e| eyre!("Invalid EXCHANGE_API_TIMEOUT_SECS: {}", e))?,
        })
    }
}
