//! API request/response types — mirrors the server-side response structs.

use serde::{Deserialize, Serialize};

// ── Auth ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    pub token: String,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

// ── Users ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_wire_shape() {
        let body = LoginRequest {
            email: "a@b.com".into(),
            password: "12".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": "a@b.com", "password": "12" })
        );
    }

    #[test]
    fn login_response_parses_token_only_body() {
        let resp: LoginResponse = serde_json::from_str(r#"{ "token": "T" }"#).unwrap();
        assert_eq!(resp.token, "T");
    }

    #[test]
    fn signup_request_wire_shape() {
        let body = SignupRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "hunter2".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "hunter2",
            })
        );
    }

    #[test]
    fn error_body_parses() {
        let resp: ApiErrorResponse =
            serde_json::from_str(r#"{ "error": "invalid credentials" }"#).unwrap();
        assert_eq!(resp.error, "invalid credentials");
    }
}
