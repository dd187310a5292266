use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::validation::ValidationErrors;
use serde_json::{json, Value};
use service::errors::ServiceError;
use thiserror::Error;

use crate::response::{Envelope, FlagKey};

/// Error reply rendered as a failure envelope.
#[derive(Debug)]
pub struct JsonApiError {
    pub code: StatusCode,
    pub key: FlagKey,
    pub message: String,
    pub error: Option<Value>,
}

impl JsonApiError {
    pub fn new(code: StatusCode, key: FlagKey, message: impl Into<String>, error: Option<Value>) -> Self {
        Self { code, key, message: message.into(), error }
    }

    /// `400 Validation failed` carrying the field error list.
    pub fn validation(key: FlagKey, errors: &ValidationErrors) -> Self {
        let list = serde_json::to_value(errors).unwrap_or(Value::Null);
        Self::new(StatusCode::BAD_REQUEST, key, "Validation failed", Some(list))
    }

    /// Body that is not JSON (or not sent as JSON).
    pub fn rejected_body(key: FlagKey, rejection: JsonRejection) -> Self {
        Self::rejected(key, "BodyParseError", rejection.status(), rejection.body_text())
    }

    /// Query string that does not deserialize into the handler's parameters.
    pub fn rejected_query(key: FlagKey, rejection: QueryRejection) -> Self {
        Self::rejected(key, "QueryParseError", rejection.status(), rejection.body_text())
    }

    fn rejected(key: FlagKey, name: &str, code: StatusCode, message: String) -> Self {
        let error = json!({ "name": name, "message": message });
        Self::new(code, key, message, Some(error))
    }

    /// Path id that is not a UUID, reported with the endpoint's failure status.
    pub fn cast(code: StatusCode, key: FlagKey, raw: &str, e: uuid::Error) -> Self {
        let message = format!("Cast to UUID failed for value \"{}\": {}", raw, e);
        let error = json!({ "name": "CastError", "message": message });
        Self::new(code, key, message, Some(error))
    }

    /// Any service failure with the given status; the message is the error text.
    pub fn service(code: StatusCode, key: FlagKey, e: &ServiceError) -> Self {
        Self::new(code, key, e.to_string(), Some(error_value(e)))
    }

    pub fn not_found(key: FlagKey, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, key, message, None)
    }
}

/// JSON rendering of a service error for the envelope's `error` field.
pub fn error_value(e: &ServiceError) -> Value {
    let name = match e {
        ServiceError::Validation(_) => "ValidationError",
        ServiceError::NotFound(_) => "NotFoundError",
        ServiceError::Db(_) => "DatabaseError",
        ServiceError::Model(_) => "ModelError",
    };
    json!({ "name": name, "message": e.to_string() })
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = Envelope::failure(self.key, self.message, self.error);
        (self.code, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
}
