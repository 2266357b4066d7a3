//! JSON body extractor with rejections in the API's error shape.
//!
//! axum's default `Json` answers a missing `Content-Type` with a plain-text
//! 415 and malformed JSON with a plain-text 400. This wrapper funnels every
//! body rejection through [`AppError::Validation`] so they come back as 400
//! with the same `{"error": {...}}` body as domain validation failures.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};

use crate::http::error::AppError;

/// Drop-in replacement for `axum::Json` whose rejection is an [`AppError`].
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
