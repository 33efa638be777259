use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use std::env;
use std::fmt::Display;

pub type ApiError = (StatusCode, Json<Value>);

pub fn api_error(status: StatusCode, message: impl Display) -> ApiError {
    (status, Json(json!({ "error": message.to_string() })))
}

pub fn internal_error<E>(err: E) -> ApiError
where
    E: Display,
{
    tracing::error!("{}", err);
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

pub fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        tracing::warn!("{} environment variable not set, using default: {}", name, default);
        default.to_string()
    })
}
