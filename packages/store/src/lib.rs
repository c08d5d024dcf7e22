pub mod config;
pub mod error;
pub mod token;

mod memory;
pub use memory::MemoryTokenStore;

mod file_store;
pub use file_store::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageTokenStore;

pub use config::MarketConfig;
pub use error::{Result, StoreError};
pub use token::TokenStore;
