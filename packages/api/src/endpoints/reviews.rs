use reqwest::Method;

use crate::client::{read_json, read_optional_json, ApiClient, Auth};
use crate::error::Result;
use crate::models::{Review, ReviewCreate, UserId};

impl ApiClient {
    /// Reviews left about a user. The token is sent when available.
    pub async fn user_reviews(&self, user_id: UserId) -> Result<Vec<Review>> {
        let request = self.request(Method::GET, &format!("/api/users/{user_id}/reviews/"));
        let response = self.send(request, Auth::Optional).await?;
        read_json(response).await
    }

    /// The viewer's review of a user, `None` on 404.
    pub async fn my_review_of(&self, user_id: UserId) -> Result<Option<Review>> {
        let request = self.request(Method::GET, &format!("/api/users/{user_id}/reviews/me"));
        let response = self.send(request, Auth::Required).await?;
        read_optional_json(response).await
    }

    pub async fn create_review(&self, user_id: UserId, body: &ReviewCreate) -> Result<Review> {
        let request = self
            .request(Method::POST, &format!("/api/users/{user_id}/reviews/"))
            .json(body);
        let response = self.send(request, Auth::Required).await?;
        read_json(response).await
    }
}
