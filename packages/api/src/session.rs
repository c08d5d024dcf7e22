//! # Session context and the entry guard
//!
//! [`Session`] is the explicit handle to the one persisted credential. It is
//! created once at startup from a [`TokenStore`] and handed to the
//! [`ApiClient`]; pages never reach for storage directly.
//!
//! Every page starts with [`ApiClient::enter`]. The guard re-verifies the
//! token against `GET /api/users/me` on each page load (no caching, so a
//! revoked token is noticed immediately) and yields an [`Entry`]:
//!
//! | Stored token | `/me` answer | Protected page | Public page |
//! |--------------|--------------|----------------|-------------|
//! | none | (not called) | [`Entry::Denied`] | [`Entry::Guest`] |
//! | present | 2xx | [`Entry::Member`] | [`Entry::Member`] |
//! | present | non-2xx | token cleared, [`Entry::Denied`] | token cleared, [`Entry::Guest`] |
//! | present | no response | [`Entry::Denied`] | [`Entry::Guest`] |
//!
//! A network failure keeps the token: the server never said it was invalid.

use std::sync::Arc;

use store::TokenStore;
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::CurrentUser;

/// Shared handle to the persisted bearer token.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn replace(&self, token: &str) {
        self.store.set(token);
        info!("Session token stored");
    }

    pub fn clear(&self) {
        self.store.clear();
        info!("Session token cleared");
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.has_token())
            .finish()
    }
}

/// Whether a page may be shown to visitors without a valid session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePolicy {
    Protected,
    Public,
}

/// Outcome of the entry guard.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A verified, signed-in user.
    Member(CurrentUser),
    /// Nobody signed in, on a page that allows it.
    Guest,
    /// Nobody signed in, on a page that does not allow it. The page must
    /// navigate to the entry page and stop.
    Denied,
}

impl Entry {
    pub fn viewer(&self) -> Option<&CurrentUser> {
        match self {
            Entry::Member(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Entry::Denied)
    }
}

impl ApiClient {
    /// Identify the current user, or `None` when nobody is signed in.
    ///
    /// Never fails: every error is folded into `None`.
    pub async fn resolve_session(&self) -> Option<CurrentUser> {
        if !self.session().has_token() {
            debug!("No stored token");
            return None;
        }

        match self.me().await {
            Ok(user) => {
                debug!(user_id = user.id, role = %user.role, "Session resolved");
                Some(user)
            }
            Err(ApiError::Network(e)) => {
                warn!(error = %e, "Could not reach the identity endpoint");
                None
            }
            Err(e) => {
                warn!(error = %e, "Stored token rejected");
                self.session().clear();
                None
            }
        }
    }

    /// Run the entry guard for a page with the given policy.
    pub async fn enter(&self, policy: PagePolicy) -> Entry {
        match (self.resolve_session().await, policy) {
            (Some(user), _) => Entry::Member(user),
            (None, PagePolicy::Public) => Entry::Guest,
            (None, PagePolicy::Protected) => Entry::Denied,
        }
    }

    /// Forget the stored credential.
    pub fn logout(&self) {
        self.session().clear();
    }
}
