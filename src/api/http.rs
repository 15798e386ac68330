//! reqwest implementation of [`IssueApi`].

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ApiError, ApiResponse, IssueApi, UpdateRequest};
use crate::issues::{upload_url, HistoryEntry, IssueRecord, NewIssue};
use crate::upload::StagedFile;

pub struct HttpIssueApi {
    client: Client,
    base_url: Url,
}

impl HttpIssueApi {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| anyhow::anyhow!("Invalid server URL '{}': {}", base_url, e))?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Append `path` to the base URL, keeping any path prefix the base carries.
    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Transport(format!("cannot build URL for {path}: base URL cannot hold a path")))?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    /// Send a request and decode its JSON body, whatever the status code.
    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            log::warn!("API: non-JSON response (HTTP {}): {}", status.as_u16(), e);
            ApiError::Decode(e.to_string())
        })
    }

    async fn envelope(&self, method: Method, path: &str, body: Option<Value>) -> Result<ApiResponse, ApiError> {
        let mut request = self.client.request(method, self.url(path)?);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response: ApiResponse = self.send_json(request).await?;
        response.into_result()
    }

    async fn download(&self, url: Url) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn image_part(file: &StagedFile) -> Result<Part, ApiError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| ApiError::Transport(format!("cannot read {}: {}", file.path.display(), e)))?;
        Ok(Part::bytes(bytes).file_name(file.name.clone()))
    }
}

#[async_trait]
impl IssueApi for HttpIssueApi {
    async fn list_issues(&self) -> Result<Vec<IssueRecord>, ApiError> {
        let request = self.client.get(self.url("/api/issues")?);
        self.send_json(request).await
    }

    async fn create_issue(&self, issue: &NewIssue, images: &[StagedFile]) -> Result<String, ApiError> {
        let mut form = Form::new()
            .text("name", issue.name.clone())
            .text("phone", issue.phone.clone())
            .text("email", issue.email.clone())
            .text("project", issue.project.clone())
            .text("description", issue.description.clone());
        for (index, file) in images.iter().enumerate() {
            form = form.part(format!("image_{index}"), Self::image_part(file).await?);
        }

        let request = self.client.post(self.url("/api/issues")?).multipart(form);
        let response: ApiResponse = self.send_json(request).await?;
        let response = response.into_result()?;
        Ok(match response.report_id {
            Some(Value::String(id)) => id,
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        })
    }

    async fn update_issue(&self, request: &UpdateRequest) -> Result<(), ApiError> {
        self.envelope(Method::PUT, &request.path(), Some(request.body()))
            .await
            .map(|_| ())
    }

    async fn history(&self, issue_id: i64) -> Result<Vec<HistoryEntry>, ApiError> {
        let request = self.client.get(self.url(&format!("/api/issues/{issue_id}/history"))?);
        self.send_json(request).await
    }

    async fn export(&self) -> Result<Vec<u8>, ApiError> {
        self.download(self.url("/api/export")?).await
    }

    async fn print(&self) -> Result<u64, ApiError> {
        let response = self.envelope(Method::GET, "/api/print", None).await?;
        Ok(response.total_issues.unwrap_or(0))
    }

    async fn reset(&self) -> Result<(), ApiError> {
        self.envelope(Method::POST, "/api/reset", None).await.map(|_| ())
    }

    async fn fetch_image(&self, filename: &str) -> Result<Vec<u8>, ApiError> {
        let url = Url::parse(&upload_url(&self.base_url, filename)).map_err(|e| ApiError::Transport(e.to_string()))?;
        self.download(url).await
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}
