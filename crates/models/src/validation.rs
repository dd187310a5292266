//! Schema checks for untyped JSON payloads.
//!
//! Parsers walk a `serde_json::Value` field by field and collect every
//! violation instead of stopping at the first one, so a client gets the full
//! list of problems in a single response.

use serde::Serialize;
use serde_json::{Map, Value};

/// A single violation, addressed by the offending field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

/// Non-empty list of field violations produced by a schema parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("validation failed on {} field(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// True when some violation is reported for `path`.
    pub fn has_field(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field-by-field reader over a JSON object that accumulates violations.
pub(crate) struct ObjectReader<'a> {
    obj: Option<&'a Map<String, Value>>,
    errors: Vec<FieldError>,
}

impl<'a> ObjectReader<'a> {
    pub(crate) fn new(value: &'a Value) -> Self {
        match value {
            Value::Object(obj) => Self { obj: Some(obj), errors: Vec::new() },
            other => Self {
                obj: None,
                errors: vec![FieldError::new(
                    "",
                    format!("Expected object, received {}", type_name(other)),
                )],
            },
        }
    }

    fn lookup(&mut self, field: &str, required: bool) -> Option<&'a Value> {
        // the root error already covers every field of a non-object payload
        let obj = self.obj?;
        match obj.get(field) {
            None | Some(Value::Null) => {
                if required {
                    self.errors.push(FieldError::new(field, "Required"));
                }
                None
            }
            Some(v) => Some(v),
        }
    }

    fn mismatch(&mut self, field: &str, expected: &str, got: &Value) {
        self.errors.push(FieldError::new(
            field,
            format!("Expected {}, received {}", expected, type_name(got)),
        ));
    }

    pub(crate) fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Required string, returned as sent; blank strings are rejected with `blank_message`.
    pub(crate) fn string(&mut self, field: &str, blank_message: &str) -> Option<String> {
        let v = self.lookup(field, true)?;
        match v.as_str() {
            Some(s) if s.trim().is_empty() => {
                self.reject(field, blank_message);
                None
            }
            Some(s) => Some(s.to_string()),
            None => {
                self.mismatch(field, "string", v);
                None
            }
        }
    }

    /// Required number that must satisfy `check`.
    pub(crate) fn number(
        &mut self,
        field: &str,
        check: impl Fn(f64) -> bool,
        message: &str,
    ) -> Option<f64> {
        let v = self.lookup(field, true)?;
        match v.as_f64() {
            Some(n) if check(n) => Some(n),
            Some(_) => {
                self.reject(field, message);
                None
            }
            None => {
                self.mismatch(field, "number", v);
                None
            }
        }
    }

    /// Required whole number that must satisfy `check` and fit in `i32`.
    pub(crate) fn integer(
        &mut self,
        field: &str,
        check: impl Fn(i64) -> bool,
        message: &str,
    ) -> Option<i32> {
        let v = self.lookup(field, true)?;
        let Some(n) = v.as_f64() else {
            self.mismatch(field, "number", v);
            return None;
        };
        if n.fract() != 0.0 {
            self.reject(field, "Expected integer, received float");
            return None;
        }
        if n < i32::MIN as f64 || n > i32::MAX as f64 || !check(n as i64) {
            self.reject(field, message);
            return None;
        }
        Some(n as i32)
    }

    /// Optional boolean.
    pub(crate) fn optional_bool(&mut self, field: &str) -> Option<bool> {
        let v = self.lookup(field, false)?;
        match v.as_bool() {
            Some(b) => Some(b),
            None => {
                self.mismatch(field, "boolean", v);
                None
            }
        }
    }

    /// Hand over the validated value, or every violation collected so far.
    ///
    /// `build` runs only when no violation was recorded, so it may rely on
    /// every field read having produced `Some`.
    pub(crate) fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationErrors> {
        if !self.errors.is_empty() {
            return Err(ValidationErrors(self.errors));
        }
        build().ok_or_else(|| ValidationErrors(vec![FieldError::new("", "Invalid input")]))
    }
}

/// Loose e-mail shape check: `local@domain.tld` without whitespace.
pub fn is_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else { return false };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}
