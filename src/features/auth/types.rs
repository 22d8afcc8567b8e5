//! Request and response types for the provider's auth API. Requests carry
//! credentials and must never be logged.

use serde::{Deserialize, Serialize};

/// Profile fields stored with the account at signup and echoed back inside
/// the user record.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub data: UserMetadata,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PasswordGrant {
    pub email: String,
    pub password: String,
}

/// User record as reported by the provider. `email_confirmed_at` drives the
/// session gate: absent means the verification email has not been acted on.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Provider session. The access token authorizes session-scoped calls; it
/// is held in memory only and dropped on reload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// Pending-signup acknowledgement: the account exists but a verification
/// email must be acted on before a session is issued.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingSignUp {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub confirmation_sent_at: Option<String>,
}

/// Outcome of `sign_up`: confirmation-required deployments answer with the
/// new user record, auto-confirm deployments with a ready session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SignUpOutcome {
    Session(Box<Session>),
    Pending(PendingSignUp),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_without_confirmation_timestamp_deserializes() {
        let json = r#"{
            "id": "9b0f3c2e-6d1a-4c6e-9a0f-0f6a1b2c3d4e",
            "email": "john@example.com",
            "user_metadata": {"name": "John Doe"},
            "created_at": "2024-05-01T10:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(user.email.as_deref(), Some("john@example.com"));
        assert_eq!(user.user_metadata.name.as_deref(), Some("John Doe"));
        assert!(user.email_confirmed_at.is_none());
    }

    #[test]
    fn user_with_confirmation_timestamp_deserializes() {
        let json = r#"{
            "id": "9b0f3c2e-6d1a-4c6e-9a0f-0f6a1b2c3d4e",
            "email": "john@example.com",
            "email_confirmed_at": "2024-05-01T10:05:00Z",
            "user_metadata": {}
        }"#;

        let user: User = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(
            user.email_confirmed_at.as_deref(),
            Some("2024-05-01T10:05:00Z")
        );
        assert!(user.user_metadata.name.is_none());
    }

    #[test]
    fn session_deserializes_with_embedded_user() {
        let json = r#"{
            "access_token": "token-value",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh-value",
            "user": {"id": "abc", "email": "john@example.com"}
        }"#;

        let session: Session = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(session.access_token, "token-value");
        assert_eq!(session.expires_in, Some(3600));
        assert_eq!(session.user.id, "abc");
    }

    #[test]
    fn signup_outcome_picks_pending_for_user_record() {
        let json = r#"{
            "id": "abc",
            "email": "john@example.com",
            "confirmation_sent_at": "2024-05-01T10:00:00Z"
        }"#;

        let outcome: SignUpOutcome = serde_json::from_str(json).expect("Failed to deserialize");
        match outcome {
            SignUpOutcome::Pending(pending) => {
                assert_eq!(pending.id, "abc");
                assert!(pending.confirmation_sent_at.is_some());
            }
            SignUpOutcome::Session(_) => panic!("expected pending signup"),
        }
    }

    #[test]
    fn signup_outcome_picks_session_when_token_present() {
        let json = r#"{
            "access_token": "token-value",
            "token_type": "bearer",
            "user": {"id": "abc", "email_confirmed_at": "2024-05-01T10:05:00Z"}
        }"#;

        let outcome: SignUpOutcome = serde_json::from_str(json).expect("Failed to deserialize");
        match outcome {
            SignUpOutcome::Session(session) => assert_eq!(session.access_token, "token-value"),
            SignUpOutcome::Pending(_) => panic!("expected session"),
        }
    }

    #[test]
    fn signup_request_omits_absent_name() {
        let request = SignUpRequest {
            email: "john@example.com".to_string(),
            password: "Abcdef1!".to_string(),
            data: UserMetadata::default(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(!json.contains("name"));
    }
}
