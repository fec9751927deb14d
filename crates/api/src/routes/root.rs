//! Root status endpoint.

use axum::Json;
use serde::Serialize;

/// Fixed payload served at `/`. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

impl StatusResponse {
    pub const WELCOME: Self = Self {
        message: "Welcome to BookTrack API",
        status: "online",
        version: "1.0.0",
    };
}

/// GET / — returns the service welcome and status.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::WELCOME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_declared_key_order() {
        let json = serde_json::to_string(&StatusResponse::WELCOME).unwrap();
        assert_eq!(
            json,
            r#"{"message":"Welcome to BookTrack API","status":"online","version":"1.0.0"}"#
        );
    }

    #[test]
    fn version_is_independent_of_crate_version() {
        assert_eq!(StatusResponse::WELCOME.version, "1.0.0");
    }

    #[tokio::test]
    async fn handler_returns_welcome_payload() {
        let Json(body) = status().await;
        assert_eq!(body, StatusResponse::WELCOME);
    }
}
