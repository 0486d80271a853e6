//! Request body extractors that report failures through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor. Unlike [`axum::Json`], a missing content type,
/// malformed syntax or a body that does not match `T` is answered with the
/// usual 400 error payload.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
