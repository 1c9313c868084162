//! Custom axum extractors for Chatline

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use validator::Validate;

use crate::Error;

/// Optional `?limit=` query parameter for bounded listings.
///
/// Parsing is lenient: a missing, empty, or non-numeric value is reported as
/// `0`, which downstream normalization turns into the default page size.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitQuery {
    #[serde(default)]
    pub limit: Option<String>,
}

impl LimitQuery {
    /// The limit the caller asked for, or 0 when none was usable
    pub fn requested(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0)
    }
}

/// JSON extractor that validates the deserialized value automatically.
///
/// Replaces `Json<T>` + manual `.validate()` calls in handlers.
/// Requires `T: DeserializeOwned + Validate`.
///
/// Malformed or invalid input returns 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Rejection type for `ValidatedJson`:
/// - Oversized bodies → 413 (axum's own rejection)
/// - JSON deserialization errors → 400 (via `Error::InvalidArgument`)
/// - Validation errors → 400 (via `Error::InvalidArgument`)
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                e.into_response()
            }
            ValidatedJsonRejection::Json(e) => {
                Error::InvalidArgument(format!("invalid JSON: {}", e.body_text())).into_response()
            }
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value.validate().map_err(|e| {
            ValidatedJsonRejection::Validation(Error::InvalidArgument(format!(
                "validation failed: {}",
                e
            )))
        })?;
        Ok(ValidatedJson(value))
    }
}
