//! In-memory auth session state shared through Leptos context. There is no
//! stored token to hydrate from: the session exists only between login and
//! sign-out or reload, and the dashboard gate re-checks the provider on
//! every visit regardless.

use crate::features::auth::types::Session;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<Session>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Stores the session returned by login or auto-confirm signup.
    pub fn set_session(&self, session: Session) {
        self.session.set(Some(session));
    }

    /// Clears the in-memory session, typically on sign-out.
    pub fn clear_session(&self) {
        self.session.set(None);
    }

    /// Access token for session-scoped provider calls, if any.
    pub fn access_token(&self) -> Option<String> {
        self.session
            .with_untracked(|session| session.as_ref().map(|s| s.access_token.clone()))
    }

    /// Display name from signup metadata, falling back to the email.
    pub fn display_name(&self) -> Option<String> {
        self.session.with(|session| {
            session.as_ref().and_then(|s| {
                s.user
                    .user_metadata
                    .name
                    .clone()
                    .or_else(|| s.user.email.clone())
            })
        })
    }
}

/// Provides the auth context to the component tree.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(None);
    let auth = AuthContext::new(session);
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}
