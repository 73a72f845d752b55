//! TrackingTime-style REST client.
//!
//! The service speaks JSON over HTTP with Basic authorization and wraps
//! every payload in a `{response: {status, message}, data: ...}` envelope.
//! An optional account id is inserted into the request path when the
//! account requires it (`/api/v4/<account_id>/...`).

use super::{ApiError, Session};
use crate::libs::config::ConfigModule;
use crate::libs::credentials::Credentials;
use crate::libs::entry::TimeEntry;
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use base64::prelude::*;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const DEFAULT_API_URL: &str = "https://app.trackingtime.co/api/v4";

const USER_AGENT_VALUE: &str = "tracksheet (calum@switchbatteries.com)";
const USERS_PATH: &str = "users?filter=ALL";
const PROJECTS_PATH: &str = "projects?filter=ALL";
const TASKS_ADD_PATH: &str = "tasks/add";
const EVENTS_ADD_PATH: &str = "events/add";

/// Envelope common to all service responses.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: ResponseStatus,
    #[serde(default)]
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ResponseStatus {
    status: i32,
    #[serde(default)]
    message: Option<String>,
}

impl ResponseStatus {
    fn message(&self) -> String {
        self.message.clone().unwrap_or_else(|| format!("service status {}", self.status))
    }
}

/// A project as listed by the remote service.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
}

/// A task as listed by the remote service.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
struct CreatedTask {
    id: i64,
}

/// Client for the remote tracker API.
pub struct TrackingTime {
    client: Client,
    config: TrackerConfig,
    credentials: Option<Credentials>,
    session_token: Option<String>,
    retries: i32,
}

impl TrackingTime {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            credentials: None,
            session_token: None,
            retries: 0,
        }
    }

    /// Lists all projects in the account.
    pub async fn projects(&self, token: &str) -> Result<Vec<Project>> {
        let res = self
            .client
            .get(self.url(PROJECTS_PATH))
            .headers(self.headers(token)?)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.config.api_url))?;

        Self::decode::<Vec<Project>>(res).await
    }

    /// Lists the tasks of one project.
    pub async fn tasks(&self, token: &str, project_id: i64) -> Result<Vec<Task>> {
        let res = self
            .client
            .get(self.url(&format!("projects/{}/tasks", project_id)))
            .headers(self.headers(token)?)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.config.api_url))?;

        Self::decode::<Vec<Task>>(res).await
    }

    /// Creates a task in the given project and returns its id.
    ///
    /// Task creation happens as part of entry submission, so a remote
    /// rejection surfaces as [`ApiError::Submission`].
    pub async fn create_task(&self, token: &str, name: &str, project_id: i64) -> Result<i64> {
        let payload = json!({
            "name": name,
            "project_id": project_id,
            "user_id": self.config.user_id,
        });
        let res = self
            .client
            .post(self.url(TASKS_ADD_PATH))
            .headers(self.headers(token)?)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.config.api_url))?;

        let created: CreatedTask = Self::decode_submission(res).await?;
        Ok(created.id)
    }

    /// Creates one time event for the given task.
    pub async fn create_event(&self, token: &str, entry: &TimeEntry, task_id: i64) -> Result<()> {
        let mut payload = json!({
            "task_id": task_id,
            "user_id": self.config.user_id,
            "start": entry.start_timestamp(),
            "end": entry.end_timestamp(),
            "duration": entry.duration_seconds(),
        });
        if !entry.description.is_empty() {
            payload["notes"] = json!(entry.description);
        }
        let res = self
            .client
            .post(self.url(EVENTS_ADD_PATH))
            .headers(self.headers(token)?)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.config.api_url))?;

        Self::decode_submission::<serde_json::Value>(res).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        match self.config.account_id {
            Some(account_id) => format!("{}/{}/{}", self.config.api_url, account_id, path),
            None => format!("{}/{}", self.config.api_url, path),
        }
    }

    fn headers(&self, token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Basic {}", token))?);
        Ok(headers)
    }

    /// Unwraps the service envelope of a read endpoint.
    async fn decode<T: DeserializeOwned + Default>(res: reqwest::Response) -> Result<T> {
        let envelope = Self::check::<T>(res).await?;
        match envelope.response.status {
            200 => envelope
                .data
                .ok_or_else(|| ApiError::UnexpectedResponse("missing data".to_string()).into()),
            _ => Err(ApiError::UnexpectedResponse(envelope.response.message()).into()),
        }
    }

    /// Unwraps the service envelope of a submission endpoint; rejections
    /// become [`ApiError::Submission`].
    async fn decode_submission<T: DeserializeOwned + Default>(res: reqwest::Response) -> Result<T> {
        let envelope = Self::check::<T>(res).await?;
        match envelope.response.status {
            200 => envelope
                .data
                .ok_or_else(|| ApiError::Submission("missing data".to_string()).into()),
            _ => Err(ApiError::Submission(envelope.response.message()).into()),
        }
    }

    async fn check<T: DeserializeOwned + Default>(res: reqwest::Response) -> Result<Envelope<T>> {
        match res.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ApiError::Auth("session rejected by the service".to_string()).into())
            }
            status if !status.is_success() => Err(ApiError::UnexpectedResponse(format!("HTTP {}", status)).into()),
            _ => res.json::<Envelope<T>>().await.context("Failed to deserialize response"),
        }
    }
}

impl Session for TrackingTime {
    /// Validates the credentials against the user listing endpoint and
    /// returns the Basic authorization token on success.
    async fn login(&self) -> Result<String> {
        let Some(credentials) = &self.credentials else {
            return Err(ApiError::Auth("no credentials installed".to_string()).into());
        };
        let token = BASE64_STANDARD.encode(format!("{}:{}", credentials.username, credentials.password));

        let res = self
            .client
            .get(self.url(USERS_PATH))
            .headers(self.headers(&token)?)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.config.api_url))?;

        match res.status() {
            StatusCode::OK => Ok(token),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ApiError::Auth(format!("invalid credentials for '{}'", credentials.username)).into())
            }
            status => Err(ApiError::UnexpectedResponse(format!("HTTP {}", status)).into()),
        }
    }

    fn set_credentials(&mut self, credentials: &Credentials) {
        self.credentials = Some(credentials.clone());
    }

    fn token(&self) -> Option<String> {
        self.session_token.clone()
    }

    fn store_token(&mut self, token: String) {
        self.session_token = Some(token);
    }

    fn retry(&self) -> i32 {
        self.retries
    }

    fn inc_retry(&mut self) {
        self.retries += 1;
    }
}

/// Connection settings for the remote tracker.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrackerConfig {
    pub username: String,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    pub api_url: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            user_id: 0,
            account_id: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "tracker".to_string(),
            name: "Time tracker".to_string(),
        }
    }

    pub fn init(config: &Option<TrackerConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        let account_id: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTrackerAccountId.to_string())
            .allow_empty(true)
            .default(config.account_id.map(|id| id.to_string()).unwrap_or_default())
            .interact_text()?;

        Ok(Self {
            username: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrackerUsername.to_string())
                .default(config.username)
                .interact_text()?,
            user_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrackerUserId.to_string())
                .default(config.user_id)
                .interact_text()?,
            account_id: account_id.trim().parse().ok(),
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrackerApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
