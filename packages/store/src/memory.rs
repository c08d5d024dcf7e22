use std::sync::{Arc, Mutex};

use crate::token::{non_blank, TokenStore};

/// In-memory TokenStore for testing and headless use.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        let guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        non_blank(guard.clone())
    }

    fn set(&self, token: &str) {
        let mut guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.to_string());
    }

    fn clear(&self) {
        let mut guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}
