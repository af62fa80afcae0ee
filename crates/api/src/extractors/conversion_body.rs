use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use fxproxy_primitives::models::RawConversionRequest;
use http::header;
use serde_json::{Map, Value};

/// Conversion request read from a JSON or urlencoded body.
///
/// An empty body, or one with any other content type, reads as an empty request so
/// validation can say which field is missing.
pub struct ConversionBody(pub RawConversionRequest);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let mime = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<S> FromRequest<S> for ConversionBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(RawConversionRequest::default()));
                }

                let Json(raw) = Json::<RawConversionRequest>::from_bytes(&bytes)
                    .map_err(IntoResponse::into_response)?;
                Ok(Self(raw))
            }
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(Self(from_form_pairs(pairs)))
            }
            BodyKind::Other => {
                // read anyway so the body limit still applies
                Bytes::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(Self(RawConversionRequest::default()))
            }
        }
    }
}

/// `symbol[]=eur` and repeated keys both collect into a list.
fn from_form_pairs(pairs: Vec<(String, String)>) -> RawConversionRequest {
    let mut fields = Map::new();

    for (key, value) in pairs {
        let (key, listed) = match key.strip_suffix("[]") {
            Some(stripped) => (stripped.to_string(), true),
            None => (key, false),
        };
        let value = Value::String(value);

        match fields.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if listed => {
                fields.insert(key, Value::Array(vec![value]));
            }
            None => {
                fields.insert(key, value);
            }
        }
    }

    serde_json::from_value(Value::Object(fields)).unwrap_or_default()
}
