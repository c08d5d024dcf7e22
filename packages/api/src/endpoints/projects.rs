use reqwest::Method;
use tracing::debug;

use crate::client::{read_json, ApiClient, Auth};
use crate::error::Result;
use crate::models::{
    Project, ProjectCreate, ProjectId, ProjectListQuery, ProjectStats, ProjectUpdate,
};

impl ApiClient {
    /// One page of projects matching `query`. Public, no token sent.
    pub async fn projects(&self, query: &ProjectListQuery) -> Result<Vec<Project>> {
        debug!(?query, "Listing projects");
        let request = self
            .request(Method::GET, "/api/projects/")
            .query(&query.to_pairs());
        let response = self.send(request, Auth::Anonymous).await?;
        read_json(response).await
    }

    pub async fn project(&self, project_id: ProjectId) -> Result<Project> {
        let request = self.request(Method::GET, &format!("/api/projects/{project_id}"));
        let response = self.send(request, Auth::Anonymous).await?;
        read_json(response).await
    }

    pub async fn create_project(&self, body: &ProjectCreate) -> Result<Project> {
        let request = self.request(Method::POST, "/api/projects/").json(body);
        let response = self.send(request, Auth::Required).await?;
        read_json(response).await
    }

    pub async fn update_project(&self, project_id: ProjectId, body: &ProjectUpdate) -> Result<Project> {
        let request = self
            .request(Method::PUT, &format!("/api/projects/{project_id}"))
            .json(body);
        let response = self.send(request, Auth::Required).await?;
        read_json(response).await
    }

    pub async fn project_stats(&self, project_id: ProjectId) -> Result<ProjectStats> {
        let request = self.request(Method::GET, &format!("/api/projects/{project_id}/stats"));
        let response = self.send(request, Auth::Required).await?;
        read_json(response).await
    }
}
