use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "200 OK")]
    pub status: String,
    #[schema(example = "API is healthy")]
    pub message: String,
}
