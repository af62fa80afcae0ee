use fxproxy_primitives::error::ApiError;
use fxproxy_primitives::models::dtos::conversion_dto::ConversionQuery;
use fxproxy_primitives::models::dtos::rate_dto::RateTable;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct ExchangeRateClient {
    http: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl ExchangeRateClient {
    pub fn new(http: Client, base_url: &str, api_key: Option<SecretString>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Internal("Invalid FX base URL".into()))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::Internal("Invalid FX base URL".into()));
        }

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// `GET <base>/<date>?base=..&symbols=..`
    pub fn rates_url(&self, query: &ConversionQuery) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Internal("Invalid FX URL path".into()))?
            .pop_if_empty()
            .push(&query.date);

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("base", &query.base)
                .append_pair("symbols", &query.symbols);
            if let Some(key) = &self.api_key {
                pairs.append_pair("access_key", key.expose_secret());
            }
        }

        Ok(url)
    }

    pub async fn fetch_rates(&self, query: &ConversionQuery) -> Result<RateTable, ApiError> {
        let url = self.rates_url(query)?;

        debug!(
            "Requesting rates base={} symbols={} date={}",
            query.base, query.symbols, query.date
        );

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| {
                warn!("FX API unreachable: {}", e);
                ApiError::Upstream(format!("FX API unreachable: {}", e))
            })?;

        match resp.status() {
            StatusCode::OK => resp.json::<RateTable>().await.map_err(|e| {
                warn!("Invalid FX response: {}", e);
                ApiError::Upstream(format!("Invalid FX response: {}", e))
            }),
            StatusCode::UNAUTHORIZED => {
                warn!("FX API rejected our credentials");
                Err(ApiError::UpstreamUnauthorized)
            }
            StatusCode::BAD_GATEWAY => {
                warn!("FX API reported a gateway error");
                Err(ApiError::Upstream("FX API returned 502".into()))
            }
            other => {
                warn!("FX API returned unexpected status {}", other);
                Err(ApiError::UpstreamStatus(other.as_u16()))
            }
        }
    }
}
