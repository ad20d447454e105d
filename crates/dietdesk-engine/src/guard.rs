use dietdesk_core::{TokenStore, TokenWatcher};
use dietdesk_types::SessionToken;

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Token present and valid; render protected content.
    Allow,
    /// No usable session; send the user to login.
    RedirectToLogin,
}

/// Gates every operation except login on the stored session token.
///
/// The store is passed in explicitly - nothing here reads ambient
/// global state - and is treated as read-only; only the login/logout
/// flow writes it.
pub struct SessionGuard {
    store: TokenStore,
}

impl SessionGuard {
    pub fn new(store: TokenStore) -> Self {
        Self { store }
    }

    /// Re-reads the store on every call; guard state is never cached.
    ///
    /// An absent token, a placeholder token and an unreadable store all
    /// collapse to [`RouteDecision::RedirectToLogin`].
    pub fn evaluate(&self) -> RouteDecision {
        match self.store.load() {
            Ok(Some(token)) if token.is_valid() => RouteDecision::Allow,
            Ok(_) => RouteDecision::RedirectToLogin,
            Err(err) => {
                log::warn!("token store unreadable, treating as signed out: {}", err);
                RouteDecision::RedirectToLogin
            }
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.evaluate() == RouteDecision::Allow
    }

    /// The current token when it proves a session, `None` otherwise.
    pub fn token(&self) -> Option<SessionToken> {
        match self.store.load() {
            Ok(Some(token)) if token.is_valid() => Some(token),
            _ => None,
        }
    }

    /// Change-signal subscription for long-lived front-ends. The guard
    /// should be re-evaluated on every event; dropping the returned
    /// watcher tears the subscription down.
    pub fn subscribe(&self) -> dietdesk_core::Result<TokenWatcher> {
        TokenWatcher::new(self.store.clone())
    }
}
