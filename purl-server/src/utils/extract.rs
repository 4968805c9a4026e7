//! Custom extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::utils::AppError;

/// JSON body extractor that reports parse failures as 400 Bad Request
///
/// The stock [`axum::Json`] extractor rejects malformed bodies with 422;
/// the member API treats every bad payload as a validation failure.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
