use crate::errors::AppError;
use axum::extract::FromRequest;
use serde::{Deserialize, Serialize};

/// A JSON body extractor whose rejections are rendered as `{"error": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}
