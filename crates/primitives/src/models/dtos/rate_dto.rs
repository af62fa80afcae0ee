use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Provider reply. `rates` keeps the provider's key order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateTable {
    pub base: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(deserialize_with = "ordered_rates")]
    pub rates: Vec<(String, f64)>,
}

fn ordered_rates<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    // serde_json is built with `preserve_order`, so the map iterates in document order
    let map = Map::<String, Value>::deserialize(deserializer)?;

    map.into_iter()
        .map(|(code, rate)| match rate.as_f64() {
            Some(rate) => Ok((code, rate)),
            None => Err(D::Error::custom(format!("rate for {} is not a number", code))),
        })
        .collect()
}
