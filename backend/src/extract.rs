//! Request extractors

use crate::error::ApiError;
use axum::extract::FromRequest;

/// JSON body extractor whose rejections render through [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
