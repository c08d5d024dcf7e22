//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the bearer token in a single file so that native
//! builds (desktop, `dx serve` without wasm) stay signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <token_key>        # the raw token, no trailing newline
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) joined with `"market"`
//! as the base on desktop platforms.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::token::{non_blank, TokenStore};

/// Filesystem-backed TokenStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: &Path, token_key: &str) -> Self {
        Self {
            path: base.join(token_key),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        non_blank(std::fs::read_to_string(&self.path).ok())
    }

    fn set(&self, token: &str) {
        if let Err(e) = self.write(token) {
            warn!(path = %self.path.display(), error = %e, "Failed to persist token");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.remove() {
            warn!(path = %self.path.display(), error = %e, "Failed to remove token");
        }
    }
}
