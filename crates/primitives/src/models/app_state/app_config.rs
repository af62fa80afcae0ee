use crate::models::app_state::provider_details::ProviderInfo;
use eyre::{eyre, Report};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,

    pub port: u16,

    /// `None` mirrors the caller's origin back, which is what the 0.1 service did.
    pub cors_origins: Option<Vec<String>>,

    pub provider_details: ProviderInfo,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "8888".into())
                .parse()
                .map_err(|e| eyre!("Invalid PORT: {}", e))?,

            cors_origins: env::var("CORS_ORIGINS").ok().map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),

            provider_details: ProviderInfo::new()?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
