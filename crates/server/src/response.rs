//! Uniform JSON envelope returned by every endpoint.
//!
//! `{ message?, success | status, data?, error? }`
//!
//! The name of the boolean flag differs between endpoints (`success` for bike
//! creation, `status` everywhere else) and existing clients depend on it, so
//! the key is chosen per response through [`FlagKey`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Which key carries the boolean outcome flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagKey {
    Success,
    Status,
}

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl<T> Envelope<T> {
    fn flagged(key: FlagKey, ok: bool, message: Option<String>) -> Self {
        let (success, status) = match key {
            FlagKey::Success => (Some(ok), None),
            FlagKey::Status => (None, Some(ok)),
        };
        Self { message, success, status, data: None, error: None }
    }

    pub fn ok(key: FlagKey, message: impl Into<String>, data: T) -> Self {
        let mut env = Self::flagged(key, true, Some(message.into()));
        env.data = Some(data);
        env
    }
}

impl Envelope<()> {
    pub fn failure(key: FlagKey, message: impl Into<String>, error: Option<Value>) -> Self {
        let mut env = Self::flagged(key, false, Some(message.into()));
        env.error = error;
        env
    }
}

/// Successful reply: status code plus envelope with `data`.
#[derive(Debug)]
pub struct ApiSuccess<T> {
    pub code: StatusCode,
    pub body: Envelope<T>,
}

impl<T> ApiSuccess<T> {
    pub fn ok(key: FlagKey, message: impl Into<String>, data: T) -> Self {
        Self { code: StatusCode::OK, body: Envelope::ok(key, message, data) }
    }

    pub fn created(key: FlagKey, message: impl Into<String>, data: T) -> Self {
        Self { code: StatusCode::CREATED, body: Envelope::ok(key, message, data) }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_key_envelope() {
        let env = Envelope::ok(FlagKey::Success, "done", json!({"a": 1}));
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"message": "done", "success": true, "data": {"a": 1}})
        );
    }

    #[test]
    fn status_key_failure_without_error() {
        let env = Envelope::failure(FlagKey::Status, "Bike not found", None);
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"message": "Bike not found", "status": false})
        );
    }
}
