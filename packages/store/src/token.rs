//! # Token store: persistence for the single bearer credential
//!
//! The marketplace client keeps exactly one piece of state across page loads:
//! the bearer token returned by `POST /api/users/login`. [`TokenStore`] is the
//! seam between that credential and whatever storage the platform offers.
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`crate::MemoryTokenStore`] | tests, headless | `Arc<Mutex<Option<String>>>` |
//! | [`crate::FileTokenStore`] | desktop / native `dx serve` | one file under the data dir |
//! | `LocalStorageTokenStore` | browser (`web` feature) | `window.localStorage` |
//!
//! Reads and writes are synchronous: every backend is either in-process or a
//! synchronous browser API, and the UI runs on a single-threaded event loop.
//! Writes are best-effort. A failed write is logged and the page continues as
//! if the user were signed out.

/// Persistent storage for one bearer token.
pub trait TokenStore: Send + Sync {
    /// The stored token, if any. Blank values count as absent.
    fn get(&self) -> Option<String>;

    /// Replace the stored token.
    fn set(&self, token: &str);

    /// Erase the stored token.
    fn clear(&self);
}

/// Treat empty or whitespace-only stored values as "no token".
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|t| !t.trim().is_empty())
}
