use dioxus::prelude::*;

use shopfront_common::auth::AuthSession;

/// Handle to the signed-in session.
///
/// Provided once at the root; pages read it with [`use_auth`] and pass it on
/// explicitly to the cards that act on behalf of the user.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthHandle {
    session: Signal<Option<AuthSession>>,
}

impl AuthHandle {
    pub fn session(&self) -> Option<AuthSession> {
        self.session.read().clone()
    }

    pub fn username(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.username.clone())
    }

    pub fn sign_in(&mut self, session: AuthSession) {
        tracing::info!("Signed in as {}", session.username);
        self.session.set(Some(session));
    }

    pub fn sign_out(&mut self) {
        self.session.set(None);
    }
}

/// Install an empty session at the top of the app.
pub fn use_auth_provider() -> AuthHandle {
    use_context_provider(|| AuthHandle {
        session: Signal::new(None),
    })
}

pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>()
}
