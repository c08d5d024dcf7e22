//! Session context and the page guard hook.
//!
//! [`SessionProvider`] builds the one [`ApiClient`] for the app and puts it in
//! context. The token store behind it depends on the platform:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageTokenStore`]
//! - **Native**: a file under `<data_dir>/market/` via [`store::FileTokenStore`]

use api::{paths, ApiClient, ApiError, Entry, PagePolicy, Session};
use dioxus::prelude::*;
use store::config::DEFAULT_API_BASE;
use store::MarketConfig;

/// Configuration for this build. `MARKET_API_BASE` at compile time overrides
/// the default base URL.
fn make_config() -> MarketConfig {
    let defaults = MarketConfig::new(option_env!("MARKET_API_BASE").unwrap_or(DEFAULT_API_BASE));

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        defaults
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let path = data_dir().join(MarketConfig::filename());
        match std::fs::read_to_string(&path) {
            Ok(contents) => MarketConfig::from_toml(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
                defaults
            }),
            Err(_) => defaults,
        }
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("market")
}

/// Create the platform-appropriate session.
fn make_session(config: &MarketConfig) -> Session {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(store::LocalStorageTokenStore::new(&config.session.token_key))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Session::new(store::FileTokenStore::new(
            &data_dir(),
            &config.session.token_key,
        ))
    }
}

/// Build the client for `config`, falling back to the default base URL when
/// the configured one is unusable.
fn make_client(config: &MarketConfig) -> ApiClient {
    let session = make_session(config);
    match ApiClient::from_config(config, session.clone()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(base_url = %config.api.base_url, error = %e, "Invalid API base URL");
            ApiClient::local(session)
        }
    }
}

/// Get the shared API client.
pub fn use_client() -> ApiClient {
    use_context::<ApiClient>()
}

/// Get the UI knobs from the active configuration.
pub fn use_config() -> MarketConfig {
    use_context::<MarketConfig>()
}

/// Provider component that owns the client and configuration.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_hook(make_config);
    let client_config = config.clone();
    use_context_provider(move || make_client(&client_config));
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}

/// Run the entry guard for the current page.
///
/// Resolves to the [`Entry`]; on [`Entry::Denied`] the hook has already
/// replaced the route with the entry page.
pub fn use_entry(policy: PagePolicy) -> Resource<Entry> {
    let client = use_client();
    let nav = use_navigator();

    use_resource(move || {
        let client = client.clone();
        async move {
            let entry = client.enter(policy).await;
            if entry.is_denied() {
                tracing::debug!("No session, leaving protected page");
                nav.replace(paths::ENTRY);
            }
            entry
        }
    })
}

/// Send the user back to the entry page when `err` means the session is
/// gone. Returns `true` when it did.
pub fn leave_if_signed_out(err: &ApiError, nav: Navigator) -> bool {
    if err.requires_sign_in() {
        nav.replace(paths::ENTRY);
        true
    } else {
        false
    }
}
