use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::forms::validate_registration;
use crate::models::CurrentUser;

pub const REGISTERED: &str = "Registration successful! Redirecting to sign in...";

/// Create an account. The page shows [`REGISTERED`] and navigates to the
/// entry page after [`super::REDIRECT_DELAY_MS`].
pub async fn register(
    client: &ApiClient,
    email: &str,
    password: &str,
    role: &str,
) -> Result<CurrentUser> {
    let request = validate_registration(email, password, role)?;
    let user = client.register(&request).await?;
    info!(user_id = user.id, role = %user.role, "Account created");
    Ok(user)
}
