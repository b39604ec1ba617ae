//! HTTP API client for the Meridian backend.
//!
//! All functions use gloo-net to call the REST API with JSON bodies.
//! Base URL is relative (same origin).

use crate::types::*;
use gloo_net::http::Request;

/// Ergonomic result alias.
pub type ApiResult<T> = Result<T, String>;

fn auth_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Parse a non-2xx response into an error string.
async fn parse_error(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    match resp.json::<ApiErrorResponse>().await {
        Ok(e) => error_message(status, Some(&e.error)),
        Err(_) => error_message(status, None),
    }
}

/// User-facing message for a failed request.
fn error_message(status: u16, body: Option<&str>) -> String {
    match body {
        Some(msg) => format!("{status}: {msg}"),
        None => format!("HTTP {status}"),
    }
}

// ── Auth ────────────────────────────────────────────────────────────

pub async fn login(email: &str, password: &str) -> ApiResult<LoginResponse> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let resp = Request::post("/api/auth/login")
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if resp.ok() {
        resp.json().await.map_err(|e| e.to_string())
    } else {
        Err(parse_error(resp).await)
    }
}

pub async fn signup(name: &str, email: &str, password: &str) -> ApiResult<SignupResponse> {
    let body = SignupRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    let resp = Request::post("/api/auth/signup")
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if resp.ok() {
        resp.json().await.map_err(|e| e.to_string())
    } else {
        Err(parse_error(resp).await)
    }
}

// ── Users ───────────────────────────────────────────────────────────

/// Fetch the signed-in user's profile.
pub async fn me(token: &str) -> ApiResult<UserProfile> {
    let resp = Request::get("/api/auth/me")
        .header("Authorization", &auth_header(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if resp.ok() {
        resp.json().await.map_err(|e| e.to_string())
    } else {
        Err(parse_error(resp).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_includes_server_detail() {
        assert_eq!(
            error_message(401, Some("invalid credentials")),
            "401: invalid credentials"
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(error_message(502, None), "HTTP 502");
    }

    #[test]
    fn auth_header_is_bearer() {
        assert_eq!(auth_header("tok"), "Bearer tok");
    }
}
