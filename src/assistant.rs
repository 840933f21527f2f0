use crate::errors::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::error;

/// Client for the external AI collaborator. The endpoint shapes are fixed;
/// everything behind them is opaque.
#[derive(Clone)]
pub struct AssistantClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct FirstStepRequest<'a> {
    task_text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct FirstStepReply {
    pub first_step: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    goal: &'a str,
    #[serde(rename = "includePomodoro")]
    include_pomodoro: bool,
}

#[derive(Debug, Deserialize)]
pub struct GeneratedTask {
    pub text: String,
    #[serde(default)]
    pub pomodoros: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateReply {
    #[serde(default)]
    pub tasks: Vec<GeneratedTask>,
}

#[derive(Debug, Serialize)]
pub struct TaskSummary<'a> {
    pub id: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
struct PrioritizeRequest<'a> {
    tasks: Vec<TaskSummary<'a>>,
}

#[derive(Debug, Deserialize)]
pub struct PrioritizeReply {
    #[serde(default)]
    pub sorted_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ParseTaskRequest<'a> {
    user_input: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ParseReply {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "dueDate")]
    pub due_date: Option<String>,
    #[serde(default, rename = "categoryName")]
    pub category_name: Option<String>,
}

impl AssistantClient {
    pub fn from_env() -> Self {
        let base_url =
            env::var("ASSISTANT_URL").unwrap_or_else(|_| "http://127.0.0.1:9090".to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn first_step(&self, task_text: &str) -> Result<FirstStepReply, AppError> {
        self.call("get_first_step", &FirstStepRequest { task_text }).await
    }

    pub async fn generate_tasks(
        &self,
        goal: &str,
        include_pomodoro: bool,
    ) -> Result<GenerateReply, AppError> {
        self.call(
            "generate_tasks",
            &GenerateRequest {
                goal,
                include_pomodoro,
            },
        )
        .await
    }

    pub async fn prioritize(
        &self,
        tasks: Vec<TaskSummary<'_>>,
    ) -> Result<PrioritizeReply, AppError> {
        self.call("prioritize_tasks", &PrioritizeRequest { tasks }).await
    }

    pub async fn parse_task(&self, user_input: &str) -> Result<ParseReply, AppError> {
        self.call("parse_task", &ParseTaskRequest { user_input }).await
    }

    /// One POST, JSON in and out. Failures are logged and mapped to 502; the
    /// caller surfaces them without retrying.
    async fn call<B, R>(&self, endpoint: &str, body: &B) -> Result<R, AppError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.http.post(&url).json(body).send().await.map_err(|err| {
            error!("assistant request to {url} failed: {err}");
            AppError::bad_gateway("assistant is unreachable")
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("assistant request to {url} returned {status}");
            return Err(AppError::bad_gateway("assistant returned an error"));
        }

        response.json().await.map_err(|err| {
            error!("assistant reply from {url} was malformed: {err}");
            AppError::bad_gateway("assistant reply was malformed")
        })
    }
}
