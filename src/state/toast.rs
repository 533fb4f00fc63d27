//! Toast notification queue.
//!
//! A `Toasts` handle wraps a reactive list so any layer (pages, the HTTP
//! gateway) can report to the user, and the `Toaster` component renders
//! whatever is queued. Toasts auto-dismiss after a few seconds in the
//! browser; in native tests they stay queued for inspection.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays on screen.
#[cfg(feature = "csr")]
const DISMISS_AFTER_MS: u64 = 3500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    /// Deduplication key: pushing another toast with the same key updates
    /// the existing one instead of stacking a duplicate.
    pub key: Option<&'static str>,
}

/// Cloneable, copyable handle to the toast queue.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
}

impl Toasts {
    #[must_use]
    pub fn new() -> Self {
        Self { list: RwSignal::new(Vec::new()) }
    }

    /// The underlying reactive list, for rendering and tests.
    #[must_use]
    pub fn list(&self) -> RwSignal<Vec<Toast>> {
        self.list
    }

    pub fn success(&self, message: &str) {
        self.push(ToastKind::Success, message, None);
    }

    pub fn error(&self, message: &str) {
        self.push(ToastKind::Error, message, None);
    }

    /// Error toast deduplicated under `key` (e.g. the session-expired
    /// notice, which several failing requests may raise at once).
    pub fn error_keyed(&self, key: &'static str, message: &str) {
        self.push(ToastKind::Error, message, Some(key));
    }

    pub fn info(&self, message: &str) {
        self.push(ToastKind::Info, message, None);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.list.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: &str, key: Option<&'static str>) {
        if let Some(key) = key {
            let mut updated = false;
            self.list.update(|list| {
                if let Some(existing) = list.iter_mut().find(|t| t.key == Some(key)) {
                    existing.kind = kind;
                    existing.message = message.to_owned();
                    updated = true;
                }
            });
            if updated {
                return;
            }
        }

        let toast = Toast { id: Uuid::new_v4(), kind, message: message.to_owned(), key };
        let id = toast.id;
        self.list.update(|list| list.push(toast));
        self.schedule_dismiss(id);
    }

    #[cfg(feature = "csr")]
    fn schedule_dismiss(&self, id: Uuid) {
        let toasts = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_AFTER_MS)).await;
            toasts.dismiss(id);
        });
    }

    #[cfg(not(feature = "csr"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
