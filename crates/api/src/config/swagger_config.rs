use crate::handlers::{
    convert::__path_convert, health::__path_health_check,
    legacy_convert::__path_legacy_convert, route_unavailable::__path_route_unavailable,
};
use fxproxy_primitives::error::ApiErrorResponse;
use fxproxy_primitives::models::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(convert, legacy_convert, route_unavailable, health_check),
    components(schemas(
        RawConversionRequest,
        ConvertResponse,
        ConversionResult,
        ApiErrorResponse,
        HealthStatus
    )),
    tags(
        (name = "Conversion", description = "Currency conversion endpoints"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
