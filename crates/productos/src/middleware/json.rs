use axum::extract::{FromRequest, Json, Request};
use serde_json::Value;
use shared::errors::HttpError;

/// Syntactically valid JSON body. Typing and validation happen in the
/// service layer, after the target product has been resolved.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}
