use reqwest::Method;

use crate::client::{read_json, read_optional_json, ApiClient, Auth};
use crate::error::Result;
use crate::models::{Application, ApplicationCreate, ApplicationId, ApplicationUpdate, ProjectId};

fn project_applications_path(project_id: ProjectId) -> String {
    format!("/api/applications/projects/{project_id}/applications/")
}

impl ApiClient {
    /// All applications on a project. Only its employer may list them.
    pub async fn project_applications(&self, project_id: ProjectId) -> Result<Vec<Application>> {
        let request = self.request(Method::GET, &project_applications_path(project_id));
        let response = self.send(request, Auth::Required).await?;
        read_json(response).await
    }

    /// The viewer's own application on a project, `None` on 404.
    pub async fn my_application(&self, project_id: ProjectId) -> Result<Option<Application>> {
        let path = format!("{}me", project_applications_path(project_id));
        let request = self.request(Method::GET, &path);
        let response = self.send(request, Auth::Required).await?;
        read_optional_json(response).await
    }

    pub async fn create_application(
        &self,
        project_id: ProjectId,
        body: &ApplicationCreate,
    ) -> Result<Application> {
        let request = self
            .request(Method::POST, &project_applications_path(project_id))
            .json(body);
        let response = self.send(request, Auth::Required).await?;
        read_json(response).await
    }

    pub async fn update_application(
        &self,
        application_id: ApplicationId,
        body: &ApplicationUpdate,
    ) -> Result<Application> {
        let request = self
            .request(Method::PUT, &format!("/api/applications/{application_id}"))
            .json(body);
        let response = self.send(request, Auth::Required).await?;
        read_json(response).await
    }
}
