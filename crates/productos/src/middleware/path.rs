use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use shared::errors::HttpError;

/// Integer id taken from the item route. Anything that does not parse as an
/// id is reported as a missing resource rather than a bad request.
#[derive(Debug, Clone, Copy)]
pub struct ProductId(pub i32);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                HttpError::NotFound(format!("Not found: {}", rejection.body_text()))
            })?;

        Ok(Self(id))
    }
}
