//! Shared helpers used by every crate in the workspace.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liveness_serializes_boom() {
        let body = serde_json::to_value(types::Liveness::default()).unwrap();
        assert_eq!(body, serde_json::json!({"status": true, "message": "Boom"}));
    }
}
