//! Account session gate for the protected dashboard. One check per view
//! load; verification changes mid-session are only picked up on the next
//! navigation.

use crate::features::auth::provider::IdentityProvider;
use crate::features::auth::types::User;
use log::warn;

/// Admission verdict for the protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// No authenticated caller; redirect to the login entry point.
    Unauthenticated,
    /// Authenticated, but the verification email has not been acted on.
    Unverified,
    /// Authenticated with a confirmed email; protected content may render.
    Verified,
}

/// Maps the provider's answer to an admission verdict.
pub fn decide(user: Option<&User>) -> AccessDecision {
    match user {
        None => AccessDecision::Unauthenticated,
        Some(user) if user.email_confirmed_at.is_none() => AccessDecision::Unverified,
        Some(_) => AccessDecision::Verified,
    }
}

/// Queries the provider for the current caller and gates on the result.
/// Provider failures count as unauthenticated rather than surfacing an
/// error; the caller lands back on login and can retry from there.
pub async fn check_access<P: IdentityProvider>(
    provider: &P,
    access_token: Option<&str>,
) -> AccessDecision {
    let Some(token) = access_token else {
        return AccessDecision::Unauthenticated;
    };

    match provider.get_current_user(token).await {
        Ok(user) => decide(user.as_ref()),
        Err(err) => {
            warn!("session check failed: {err}");
            AccessDecision::Unauthenticated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::AppError;
    use crate::features::auth::types::{
        PasswordGrant, Session, SignUpOutcome, SignUpRequest, UserMetadata,
    };

    /// Answers `get_current_user` with a canned result; the gate never uses
    /// the other operations.
    struct StubProvider {
        user: Result<Option<User>, AppError>,
    }

    impl IdentityProvider for StubProvider {
        async fn sign_up(&self, _request: &SignUpRequest) -> Result<SignUpOutcome, AppError> {
            unreachable!("gate never signs up")
        }

        async fn sign_in_with_password(
            &self,
            _credentials: &PasswordGrant,
        ) -> Result<Session, AppError> {
            unreachable!("gate never signs in")
        }

        async fn get_current_user(&self, _access_token: &str) -> Result<Option<User>, AppError> {
            self.user.clone()
        }

        async fn sign_out(&self, _access_token: &str) -> Result<(), AppError> {
            unreachable!("gate never signs out")
        }
    }

    /// Panics on any call; used to prove the gate short-circuits.
    struct UnreachableProvider;

    impl IdentityProvider for UnreachableProvider {
        async fn sign_up(&self, _request: &SignUpRequest) -> Result<SignUpOutcome, AppError> {
            unreachable!()
        }

        async fn sign_in_with_password(
            &self,
            _credentials: &PasswordGrant,
        ) -> Result<Session, AppError> {
            unreachable!()
        }

        async fn get_current_user(&self, _access_token: &str) -> Result<Option<User>, AppError> {
            unreachable!("no token means no provider call")
        }

        async fn sign_out(&self, _access_token: &str) -> Result<(), AppError> {
            unreachable!()
        }
    }

    fn user(email_confirmed_at: Option<&str>) -> User {
        User {
            id: "9b0f3c2e-6d1a-4c6e-9a0f-0f6a1b2c3d4e".to_string(),
            email: Some("john@example.com".to_string()),
            email_confirmed_at: email_confirmed_at.map(str::to_string),
            user_metadata: UserMetadata {
                name: Some("John Doe".to_string()),
            },
            created_at: None,
        }
    }

    #[test]
    fn decide_without_user_is_unauthenticated() {
        assert_eq!(decide(None), AccessDecision::Unauthenticated);
    }

    #[test]
    fn decide_without_timestamp_is_unverified() {
        assert_eq!(decide(Some(&user(None))), AccessDecision::Unverified);
    }

    #[test]
    fn decide_with_timestamp_is_verified() {
        assert_eq!(
            decide(Some(&user(Some("2024-05-01T10:05:00Z")))),
            AccessDecision::Verified
        );
    }

    #[tokio::test]
    async fn missing_token_skips_the_provider() {
        let decision = check_access(&UnreachableProvider, None).await;
        assert_eq!(decision, AccessDecision::Unauthenticated);
    }

    #[tokio::test]
    async fn provider_error_maps_to_unauthenticated() {
        let provider = StubProvider {
            user: Err(AppError::Http {
                status: 500,
                message: "boom".to_string(),
            }),
        };
        let decision = check_access(&provider, Some("token")).await;
        assert_eq!(decision, AccessDecision::Unauthenticated);
    }

    #[tokio::test]
    async fn rejected_token_maps_to_unauthenticated() {
        let provider = StubProvider { user: Ok(None) };
        let decision = check_access(&provider, Some("token")).await;
        assert_eq!(decision, AccessDecision::Unauthenticated);
    }

    #[tokio::test]
    async fn unconfirmed_user_is_unverified() {
        let provider = StubProvider {
            user: Ok(Some(user(None))),
        };
        let decision = check_access(&provider, Some("token")).await;
        assert_eq!(decision, AccessDecision::Unverified);
    }

    #[tokio::test]
    async fn confirmed_user_is_verified() {
        let provider = StubProvider {
            user: Ok(Some(user(Some("2024-05-01T10:05:00Z")))),
        };
        let decision = check_access(&provider, Some("token")).await;
        assert_eq!(decision, AccessDecision::Verified);
    }
}
