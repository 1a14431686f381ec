//! Extractors - axum extractors whose rejections are turned into `AppError`
//!
//! Malformed path parameters, query strings and bodies all answer 422 with
//! the same JSON error shape as the rest of the API.

use crate::core::AppError;
use axum_macros::{FromRequest, FromRequestParts};

/// `axum::Json` with `AppError` as rejection
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with `AppError` as rejection
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `axum::extract::Query` with `AppError` as rejection
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
