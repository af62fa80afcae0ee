pub mod app_config;
pub mod provider_details;

pub use app_config::*;
pub use provider_details::*;
