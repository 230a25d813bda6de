//! Session/auth provider contract.
//!
//! The shell only needs two facts from the auth provider: whether someone is signed in, and the
//! access credential to hand to the notes service. The sign-in flow itself stays with the
//! provider.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A signed-in session as reported by the auth provider.
pub struct AuthSession {
    /// Provider-side user identity.
    pub user_id: String,
    /// Bearer credential used for note operations.
    pub access_token: String,
}

/// Host service reporting the current auth session.
pub trait SessionService {
    /// Returns the current session, or `None` when signed out.
    fn current_session(&self) -> Option<AuthSession>;

    /// Returns whether a session is active.
    fn is_signed_in(&self) -> bool {
        self.current_session().is_some()
    }

    /// Ends the current session at the provider.
    fn sign_out(&self);
}

#[derive(Debug, Clone, Default)]
/// Session provider holding its session in memory. Clones share state.
pub struct MemorySessionService {
    inner: Rc<RefCell<Option<AuthSession>>>,
}

impl MemorySessionService {
    /// Creates a provider that starts signed in as `user_id`.
    pub fn signed_in(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        let service = Self::default();
        service.set_session(Some(AuthSession {
            user_id: user_id.into(),
            access_token: access_token.into(),
        }));
        service
    }

    /// Replaces the current session.
    pub fn set_session(&self, session: Option<AuthSession>) {
        *self.inner.borrow_mut() = session;
    }
}

impl SessionService for MemorySessionService {
    fn current_session(&self) -> Option<AuthSession> {
        self.inner.borrow().clone()
    }

    fn sign_out(&self) {
        self.set_session(None);
    }
}
