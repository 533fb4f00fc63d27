//! In-memory session handle: the access token plus the refresh gate.
//!
//! One `Session` is constructed per app (and per test) and handed to the
//! gateway explicitly, so nothing about authentication lives in module
//! statics. Cloning shares the underlying cell.

use std::sync::Arc;

/// Shared handle to the current access token.
///
/// The refresh gate is an async mutex: every request that hits a 401 must
/// acquire it before deciding whether to refresh, which serializes
/// concurrent refresh attempts behind a single network call.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<parking_lot::Mutex<Option<String>>>,
    refresh_gate: Arc<futures::lock::Mutex<()>>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current access token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.lock().clone()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.lock() = token;
    }

    /// Drop the access token (logout or failed refresh).
    pub fn clear(&self) {
        *self.token.lock() = None;
    }

    pub(crate) async fn lock_refresh(&self) -> futures::lock::MutexGuard<'_, ()> {
        self.refresh_gate.lock().await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself.
        f.debug_struct("Session")
            .field("authenticated", &self.token.lock().is_some())
            .finish()
    }
}
