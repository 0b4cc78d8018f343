//! Per-page cancellation
//!
//! A page takes a token when it mounts; the token flips when the page's
//! reactive owner is cleaned up. Async work checks it before touching state.

use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token cancelled when the current reactive owner is disposed
    pub fn for_current_owner() -> Self {
        let token = Self::new();
        let on_drop = token.clone();
        on_cleanup(move || on_drop.cancel());
        token
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// `value` unless the token was cancelled meanwhile
    pub fn guard<T>(&self, value: T) -> Option<T> {
        if self.is_cancelled() {
            log::debug!("Discarding late response after page unmount");
            None
        } else {
            Some(value)
        }
    }
}

/// A token kept in a page's arena. Once the owning page is disposed the
/// value is gone, which counts as cancelled.
pub fn stored_is_cancelled(token: StoredValue<CancelToken>) -> bool {
    token.try_with_value(|c| c.is_cancelled()).unwrap_or(true)
}
