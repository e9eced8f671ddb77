//! Task gateway - outbound client for the remote task API.
//!
//! Every call is a single request/response with no retry; callers decide how
//! much of the failure detail to surface.

use serde::de::DeserializeOwned;
use std::{error::Error as StdError, fmt};

use super::models::{CreateProject, CreateTask, Project, Task};

const BODY_PREVIEW_LIMIT: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayHttpErrorKind {
    Timeout,
    Connect,
    Request,
    Body,
    Decode,
    Status,
    Unknown,
}

impl GatewayHttpErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Request => "request",
            Self::Body => "body",
            Self::Decode => "decode",
            Self::Status => "status",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for GatewayHttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct GatewayHttpError {
    kind: GatewayHttpErrorKind,
    status: Option<u16>,
    url: Option<String>,
    message: String,
    source: Option<anyhow::Error>,
}

impl GatewayHttpError {
    pub fn kind(&self) -> GatewayHttpErrorKind {
        self.kind
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn from_reqwest(err: reqwest::Error, url: String) -> Self {
        let kind = if err.is_timeout() {
            GatewayHttpErrorKind::Timeout
        } else if err.is_connect() {
            GatewayHttpErrorKind::Connect
        } else if err.is_request() {
            GatewayHttpErrorKind::Request
        } else if err.is_body() {
            GatewayHttpErrorKind::Body
        } else if err.is_decode() {
            GatewayHttpErrorKind::Decode
        } else {
            GatewayHttpErrorKind::Unknown
        };
        let status = err.status().map(|s| s.as_u16());
        let message = err.to_string();
        GatewayHttpError {
            kind,
            status,
            url: Some(url),
            message,
            source: Some(anyhow::Error::new(err)),
        }
    }

    fn status_error(status: u16, url: String, preview: String) -> Self {
        GatewayHttpError {
            kind: GatewayHttpErrorKind::Status,
            status: Some(status),
            url: Some(url),
            message: preview,
            source: None,
        }
    }

    fn decode_error(status: u16, url: String, err: serde_json::Error, preview: String) -> Self {
        let message = format!("failed to decode response body: {} | body={}", err, preview);
        GatewayHttpError {
            kind: GatewayHttpErrorKind::Decode,
            status: Some(status),
            url: Some(url),
            message,
            source: Some(anyhow::Error::new(err)),
        }
    }
}

impl fmt::Display for GatewayHttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gateway http error kind={}", self.kind)?;
        if let Some(status) = self.status {
            write!(f, " status={}", status)?;
        }
        if let Some(url) = &self.url {
            write!(f, " url={}", url)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl StdError for GatewayHttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    let mut out = String::new();
    let mut truncated = false;
    for (idx, ch) in trimmed.chars().enumerate() {
        if idx >= BODY_PREVIEW_LIMIT {
            truncated = true;
            break;
        }
        out.push(ch);
    }

    if truncated {
        out.push_str("...");
    }

    out
}

async fn parse_json_response<T: DeserializeOwned>(resp: reqwest::Response) -> anyhow::Result<T> {
    let status = resp.status();
    let url = resp.url().to_string();
    let body = resp
        .text()
        .await
        .map_err(|err| GatewayHttpError::from_reqwest(err, url.clone()))?;

    if !status.is_success() {
        let preview = preview_body(&body);
        return Err(GatewayHttpError::status_error(status.as_u16(), url, preview).into());
    }

    serde_json::from_str::<T>(&body).map_err(|err| {
        let preview = preview_body(&body);
        GatewayHttpError::decode_error(status.as_u16(), url, err, preview).into()
    })
}

async fn ensure_success(resp: reqwest::Response) -> anyhow::Result<()> {
    let status = resp.status();
    let url = resp.url().to_string();

    if status.is_success() {
        return Ok(());
    }

    let body = resp
        .text()
        .await
        .map_err(|err| GatewayHttpError::from_reqwest(err, url.clone()))?;
    let preview = preview_body(&body);
    Err(GatewayHttpError::status_error(status.as_u16(), url, preview).into())
}

#[derive(Clone)]
pub struct GatewayClient {
    token: String,
    http: reqwest::Client,
    // Pre-built collection endpoints; per-task URLs are derived from url_tasks.
    url_tasks: String,
    url_projects: String,
}

impl GatewayClient {
    pub fn new(base_url: &str, token: String, timeout_ms: u64) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()?;
        let normalized = base_url.trim_end_matches('/');
        Ok(Self {
            token,
            http,
            url_tasks: format!("{}/rest/v2/tasks", normalized),
            url_projects: format!("{}/rest/v2/projects", normalized),
        })
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.token.trim().is_empty() {
            req
        } else {
            req.bearer_auth(&self.token)
        }
    }

    pub async fn list_projects(&self) -> anyhow::Result<Vec<Project>> {
        let url = &self.url_projects;
        tracing::debug!(target: "todocap.gateway", stage = "projects.list.in", url = %url);
        let req = self.http.get(url);
        let resp = self
            .auth(req)
            .send()
            .await
            .map_err(|err| GatewayHttpError::from_reqwest(err, url.clone()))?;
        let status = resp.status();
        let projects: Vec<Project> = parse_json_response(resp).await?;
        tracing::debug!(
            target: "todocap.gateway",
            stage = "projects.list.out",
            status = %status,
            count = projects.len()
        );
        Ok(projects)
    }

    pub async fn create_project(&self, name: &str) -> anyhow::Result<Project> {
        let url = &self.url_projects;
        tracing::debug!(target: "todocap.gateway", stage = "projects.create.in", url = %url);
        let payload = CreateProject {
            name: name.to_string(),
        };
        let req = self.http.post(url).json(&payload);
        let resp = self
            .auth(req)
            .send()
            .await
            .map_err(|err| GatewayHttpError::from_reqwest(err, url.clone()))?;
        let status = resp.status();
        let project: Project = parse_json_response(resp).await?;
        tracing::debug!(
            target: "todocap.gateway",
            stage = "projects.create.out",
            status = %status,
            project_id = %project.id
        );
        Ok(project)
    }

    pub async fn list_tasks(&self, project_id: &str) -> anyhow::Result<Vec<Task>> {
        let url = &self.url_tasks;
        tracing::debug!(
            target: "todocap.gateway",
            stage = "tasks.list.in",
            url = %url,
            project_id = %project_id
        );
        let req = self.http.get(url).query(&[("project_id", project_id)]);
        let resp = self
            .auth(req)
            .send()
            .await
            .map_err(|err| GatewayHttpError::from_reqwest(err, url.clone()))?;
        let status = resp.status();
        let tasks: Vec<Task> = parse_json_response(resp).await?;
        tracing::debug!(
            target: "todocap.gateway",
            stage = "tasks.list.out",
            status = %status,
            count = tasks.len()
        );
        Ok(tasks)
    }

    pub async fn create_task(&self, payload: CreateTask) -> anyhow::Result<Task> {
        let url = &self.url_tasks;
        tracing::debug!(
            target: "todocap.gateway",
            stage = "tasks.create.in",
            url = %url,
            project_id = %payload.project_id,
            content_len = payload.content.len(),
            labels = payload.labels.len(),
            priority = ?payload.priority
        );
        let req = self.http.post(url).json(&payload);
        let resp = self
            .auth(req)
            .send()
            .await
            .map_err(|err| GatewayHttpError::from_reqwest(err, url.clone()))?;
        let status = resp.status();
        let task: Task = parse_json_response(resp).await?;
        tracing::debug!(
            target: "todocap.gateway",
            stage = "tasks.create.out",
            status = %status,
            task_id = %task.id
        );
        Ok(task)
    }

    pub async fn close_task(&self, task_id: &str) -> anyhow::Result<()> {
        self.task_command(task_id, "close").await
    }

    pub async fn reopen_task(&self, task_id: &str) -> anyhow::Result<()> {
        self.task_command(task_id, "reopen").await
    }

    async fn task_command(&self, task_id: &str, command: &str) -> anyhow::Result<()> {
        let url = format!("{}/{}/{}", self.url_tasks, task_id, command);
        tracing::debug!(
            target: "todocap.gateway",
            stage = "tasks.command.in",
            url = %url,
            command = %command
        );
        let req = self.http.post(&url);
        let resp = self
            .auth(req)
            .send()
            .await
            .map_err(|err| GatewayHttpError::from_reqwest(err, url.clone()))?;
        let status = resp.status();
        ensure_success(resp).await?;
        tracing::debug!(
            target: "todocap.gateway",
            stage = "tasks.command.out",
            status = %status,
            command = %command
        );
        Ok(())
    }

    pub async fn delete_task(&self, task_id: &str) -> anyhow::Result<()> {
        let url = format!("{}/{}", self.url_tasks, task_id);
        tracing::debug!(target: "todocap.gateway", stage = "tasks.delete.in", url = %url);
        let req = self.http.delete(&url);
        let resp = self
            .auth(req)
            .send()
            .await
            .map_err(|err| GatewayHttpError::from_reqwest(err, url.clone()))?;
        let status = resp.status();
        ensure_success(resp).await?;
        tracing::debug!(target: "todocap.gateway", stage = "tasks.delete.out", status = %status);
        Ok(())
    }
}
