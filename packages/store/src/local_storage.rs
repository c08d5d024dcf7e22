//! # localStorage token store: browser-side persistence
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web
//! platform**. It keeps the bearer token under a fixed key in
//! `window.localStorage`.
//!
//! The struct only remembers the key and looks up `localStorage` on every
//! call: `web_sys::Storage` is not `Send`, and the lookup is a cheap property
//! access. Storage errors are swallowed, which degrades to "signed out".

use crate::token::{non_blank, TokenStore};

#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        let storage = Self::storage()?;
        non_blank(storage.get_item(&self.key).ok()?)
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(&self.key, token).is_err() {
                tracing::warn!(key = %self.key, "localStorage rejected the token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
