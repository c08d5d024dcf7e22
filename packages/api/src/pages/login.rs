use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::forms::validate_login;
use crate::paths;

/// Sign in and return where to go next.
///
/// The token is stored by [`ApiClient::login`]; a blank field fails locally
/// without a request.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<&'static str> {
    let credentials = validate_login(email, password)?;
    client
        .login(&credentials.email, &credentials.password)
        .await?;
    info!("Signed in, continuing to the project list");
    Ok(paths::PROJECTS)
}
