//! Identity provider capability. Routes and the session gate depend on this
//! trait rather than on the HTTP client directly so they can be exercised
//! with a stub provider in tests.

use crate::app_lib::AppError;
use crate::features::auth::types::{PasswordGrant, Session, SignUpOutcome, SignUpRequest, User};

/// Operations the external identity provider exposes to this client.
///
/// Futures returned here are not required to be `Send`; the app runs on the
/// browser's single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    /// Registers a new account. Confirmation-required deployments send a
    /// verification email and answer with the pending user record.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AppError>;

    /// Exchanges email and password for a session.
    async fn sign_in_with_password(&self, credentials: &PasswordGrant)
        -> Result<Session, AppError>;

    /// Fetches the caller's user record. `Ok(None)` means the token is no
    /// longer accepted, i.e. there is no authenticated caller.
    async fn get_current_user(&self, access_token: &str) -> Result<Option<User>, AppError>;

    /// Revokes the session behind the access token.
    async fn sign_out(&self, access_token: &str) -> Result<(), AppError>;
}
