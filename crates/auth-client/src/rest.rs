//! REST implementation of the identity-provider contract.
//!
//! Talks to the identity API's auth endpoints:
//! - `POST {base}/auth/v1/signup`
//! - `POST {base}/auth/v1/token?grant_type=password`
//! - `POST {base}/auth/v1/logout`

use crate::{IdentityProvider, ProviderError, SubjectId};
use serde::Deserialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;
use tracing::{debug, warn};

fn summarize_response_body(body: &str) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("len={},digest={:016x}", body.len(), hasher.finish())
}

/// REST client for the identity API.
pub struct RestIdentityProvider {
    http_client: reqwest::Client,
    api_url: String,
    publishable_key: String,
    /// Access token of the current provider-side session, held only so that
    /// sign-out can address it.
    bearer: Mutex<Option<String>>,
}

/// Successful auth response (signup and password grant share the shape).
#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    access_token: Option<String>,
    user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Error body shape reported by the identity API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

impl RestIdentityProvider {
    /// Create a new provider client.
    ///
    /// # Arguments
    /// * `api_url` - The identity API base URL (e.g. `https://api.medibook.example`)
    /// * `publishable_key` - The public API key sent with every request
    pub fn new(api_url: impl Into<String>, publishable_key: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_url: api_url.into(),
            publishable_key: publishable_key.into(),
            bearer: Mutex::new(None),
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.api_url, path)
    }

    async fn authenticate(&self, url: &str, email: &str, password: &str) -> Result<SubjectId, ProviderError> {
        debug!(url = %url, email = %email, "Calling identity API");

        let response = self
            .http_client
            .post(url)
            .header("apikey", &self.publishable_key)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body_summary = %summarize_response_body(&body), "Identity API rejected request");
            return Err(classify_rejection(status, &body));
        }

        let data: AuthResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Unclassified(format!("invalid auth response: {e}")))?;

        *self.bearer.lock().unwrap() = data.access_token;

        debug!(subject_id = %data.user.id, email = ?data.user.email, "Identity API accepted request");
        Ok(SubjectId::from(data.user.id))
    }
}

impl IdentityProvider for RestIdentityProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<SubjectId, ProviderError> {
        self.authenticate(&self.auth_url("signup"), email, password)
            .await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SubjectId, ProviderError> {
        self.authenticate(&self.auth_url("token?grant_type=password"), email, password)
            .await
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        let url = self.auth_url("logout");
        let bearer = self.bearer.lock().unwrap().clone();

        let mut request = self
            .http_client
            .post(&url)
            .header("apikey", &self.publishable_key);
        if let Some(token) = bearer {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body_summary = %summarize_response_body(&body), "Identity API sign-out failed");
            return Err(classify_rejection(status, &body));
        }

        *self.bearer.lock().unwrap() = None;
        Ok(())
    }
}

/// Map a transport error into a provider category.
fn map_transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_connect() || err.is_timeout() {
        ProviderError::Network(err.to_string())
    } else {
        ProviderError::Unclassified(err.to_string())
    }
}

/// Classify an HTTP rejection by the API's `error_code`, falling back to the
/// status code, and finally to `Unclassified`.
fn classify_rejection(status: reqwest::StatusCode, body: &str) -> ProviderError {
    let parsed: Option<ApiErrorBody> = serde_json::from_str(body).ok();

    if let Some(code) = parsed.as_ref().and_then(|b| b.error_code.as_deref()) {
        match code {
            "invalid_credentials" => return ProviderError::InvalidCredentials,
            "weak_password" => return ProviderError::WeakPassword,
            "user_already_exists" | "email_exists" => return ProviderError::AccountExists,
            "validation_failed" | "invalid_email" => return ProviderError::InvalidEmail,
            _ => {}
        }
    }

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return ProviderError::InvalidCredentials;
    }

    let detail = parsed
        .and_then(|b| b.msg)
        .unwrap_or_else(|| summarize_response_body(body));
    ProviderError::Unclassified(format!("HTTP {status}: {detail}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_error_code() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        assert_eq!(
            classify_rejection(status, r#"{"error_code":"invalid_credentials"}"#),
            ProviderError::InvalidCredentials
        );
        assert_eq!(
            classify_rejection(status, r#"{"error_code":"weak_password","msg":"too short"}"#),
            ProviderError::WeakPassword
        );
        assert_eq!(
            classify_rejection(status, r#"{"error_code":"user_already_exists"}"#),
            ProviderError::AccountExists
        );
        assert_eq!(
            classify_rejection(status, r#"{"error_code":"validation_failed","msg":"bad email"}"#),
            ProviderError::InvalidEmail
        );
    }

    #[test]
    fn classify_by_status_when_code_is_missing() {
        assert_eq!(
            classify_rejection(reqwest::StatusCode::UNAUTHORIZED, "{}"),
            ProviderError::InvalidCredentials
        );
    }

    #[test]
    fn unknown_rejections_fall_through_to_unclassified() {
        let err = classify_rejection(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"msg":"database on fire"}"#,
        );
        match err {
            ProviderError::Unclassified(detail) => {
                assert!(detail.contains("500"));
                assert!(detail.contains("database on fire"));
            }
            other => panic!("expected unclassified, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_error_bodies_are_summarized() {
        let err = classify_rejection(reqwest::StatusCode::BAD_GATEWAY, "<html>nope</html>");
        match err {
            ProviderError::Unclassified(detail) => assert!(detail.contains("len=")),
            other => panic!("expected unclassified, got {other:?}"),
        }
    }
}
