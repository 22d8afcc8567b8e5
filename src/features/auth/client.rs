//! HTTP implementation of the identity provider against a GoTrue-compatible
//! auth API (`/auth/v1/*`). Thin per-endpoint wrappers over the shared
//! helpers; construction fails fast when the provider endpoint is not
//! configured.

use crate::app_lib::{
    AppError, config::AppConfig, get_optional_json_with_headers, post_empty_with_headers,
    post_json_with_headers_response,
};
use crate::features::auth::provider::IdentityProvider;
use crate::features::auth::types::{PasswordGrant, Session, SignUpOutcome, SignUpRequest, User};

/// Client for the provider's auth endpoints.
#[derive(Clone, Debug)]
pub struct GoTrueClient {
    base_url: String,
    anon_key: String,
}

impl GoTrueClient {
    /// Builds a client from the app configuration.
    pub fn from_config() -> Result<Self, AppError> {
        let config = AppConfig::load();
        Self::new(config.api_base_url, config.api_anon_key)
    }

    pub fn new(base_url: String, anon_key: String) -> Result<Self, AppError> {
        if base_url.trim().is_empty() {
            return Err(AppError::Config(
                "Provider URL is not configured.".to_string(),
            ));
        }
        if anon_key.trim().is_empty() {
            return Err(AppError::Config(
                "Provider API key is not configured.".to_string(),
            ));
        }

        Ok(Self { base_url, anon_key })
    }

    /// Headers for auth endpoints; the bearer token is only attached for
    /// session-scoped calls.
    fn headers(&self, access_token: Option<&str>) -> Vec<(String, String)> {
        let mut headers = vec![("apikey".to_string(), self.anon_key.clone())];
        if let Some(token) = access_token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        headers
    }
}

impl IdentityProvider for GoTrueClient {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AppError> {
        post_json_with_headers_response(
            &self.base_url,
            "/auth/v1/signup",
            request,
            &self.headers(None),
        )
        .await
    }

    async fn sign_in_with_password(
        &self,
        credentials: &PasswordGrant,
    ) -> Result<Session, AppError> {
        post_json_with_headers_response(
            &self.base_url,
            "/auth/v1/token?grant_type=password",
            credentials,
            &self.headers(None),
        )
        .await
    }

    async fn get_current_user(&self, access_token: &str) -> Result<Option<User>, AppError> {
        get_optional_json_with_headers(
            &self.base_url,
            "/auth/v1/user",
            &self.headers(Some(access_token)),
        )
        .await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        post_empty_with_headers(
            &self.base_url,
            "/auth/v1/logout",
            &self.headers(Some(access_token)),
        )
        .await
    }
}
