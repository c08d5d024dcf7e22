use reqwest::Method;
use tracing::{debug, info};

use crate::client::{read_json, ApiClient, Auth};
use crate::error::Result;
use crate::models::{CurrentUser, ProfileUpdate, RegisterRequest, TokenResponse, UserId};

impl ApiClient {
    /// Exchange credentials for a bearer token and store it in the session.
    ///
    /// The endpoint expects an OAuth2 password-grant form, with the email in
    /// the `username` field.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        debug!(email = %email, "Attempting login");
        let request = self
            .request(Method::POST, "/api/users/login")
            .form(&[
                ("grant_type", "password"),
                ("username", email),
                ("password", password),
            ]);

        let response = self.send(request, Auth::Anonymous).await?;
        let token: TokenResponse = read_json(response).await?;
        self.session().replace(&token.access_token);
        info!(email = %email, "Login successful");
        Ok(token)
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, body: &RegisterRequest) -> Result<CurrentUser> {
        debug!(email = %body.email, role = %body.role, "Registering account");
        let request = self.request(Method::POST, "/api/users/").json(body);
        let response = self.send(request, Auth::Anonymous).await?;
        read_json(response).await
    }

    /// `GET /api/users/me` for the stored token.
    pub async fn me(&self) -> Result<CurrentUser> {
        let request = self.request(Method::GET, "/api/users/me");
        let response = self.send(request, Auth::Required).await?;
        read_json(response).await
    }

    /// Public profile of any user. The token is sent when available.
    pub async fn user(&self, user_id: UserId) -> Result<CurrentUser> {
        let request = self.request(Method::GET, &format!("/api/users/{user_id}"));
        let response = self.send(request, Auth::Optional).await?;
        read_json(response).await
    }

    pub async fn update_user(&self, user_id: UserId, body: &ProfileUpdate) -> Result<CurrentUser> {
        let request = self
            .request(Method::PUT, &format!("/api/users/{user_id}"))
            .json(body);
        let response = self.send(request, Auth::Required).await?;
        read_json(response).await
    }
}
