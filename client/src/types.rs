//! Wire types for the remote todo service
//!
//! Field names follow the service's camelCase JSON convention; task status
//! and priority cross the wire as integer codes.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// The `resultCode` value that denotes success on every endpoint
pub const RESULT_CODE_SUCCESS: i32 = 0;

/// Uniform response envelope returned by mutating endpoints
///
/// `data` is parsed leniently: when the payload does not match `T` (the
/// service sends `{}` on auth failures, for example) it becomes `None`
/// instead of failing the whole response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ServerResponse<T> {
    /// `0` = success, nonzero = application-level failure
    pub result_code: i32,
    /// Failure messages accompanying a nonzero result code
    #[serde(default)]
    pub messages: Vec<String>,
    /// Endpoint-specific payload
    #[serde(default = "Option::default", deserialize_with = "lenient")]
    pub data: Option<T>,
}

impl<T> ServerResponse<T> {
    /// Whether the envelope denotes success
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result_code == RESULT_CODE_SUCCESS
    }

    /// The first failure message, if any
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

/// Envelope for endpoints whose `data` carries nothing of interest
pub type EmptyResponse = ServerResponse<()>;

/// `data` wrapper used by the create endpoints: `{ "item": { ... } }`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPayload<T> {
    /// The created record
    pub item: T,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// A todolist record as stored by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todolist {
    /// Server-assigned unique identifier
    pub id: String,
    /// Todolist title
    pub title: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Server-side ordering index
    pub order: i32,
}

/// Task status codes used by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TaskStatus {
    /// Not started
    New,
    /// Started but not finished
    InProgress,
    /// Finished
    Completed,
    /// Draft, not yet visible
    Draft,
}

impl TryFrom<i32> for TaskStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::New),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Completed),
            3 => Ok(Self::Draft),
            other => Err(format!("unknown task status code {other}")),
        }
    }
}

impl From<TaskStatus> for i32 {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::New => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
            TaskStatus::Draft => 3,
        }
    }
}

/// Task priority codes used by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TaskPriority {
    /// Low priority
    Low,
    /// Default priority
    Middle,
    /// High priority
    High,
    /// Urgent
    Urgently,
    /// Deferred
    Later,
}

impl TryFrom<i32> for TaskPriority {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Low),
            1 => Ok(Self::Middle),
            2 => Ok(Self::High),
            3 => Ok(Self::Urgently),
            4 => Ok(Self::Later),
            other => Err(format!("unknown task priority code {other}")),
        }
    }
}

impl From<TaskPriority> for i32 {
    fn from(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::Low => 0,
            TaskPriority::Middle => 1,
            TaskPriority::High => 2,
            TaskPriority::Urgently => 3,
            TaskPriority::Later => 4,
        }
    }
}

/// A task record as stored by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique within the owning todolist
    pub id: String,
    /// Identifier of the owning todolist
    pub todo_list_id: String,
    /// Task title
    pub title: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Completion status
    pub status: TaskStatus,
    /// Priority
    pub priority: TaskPriority,
    /// Optional start date
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// Optional deadline
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Server-side ordering index
    pub order: i32,
    /// Creation timestamp
    pub added_date: DateTime<Utc>,
}

/// Full update payload for `PUT .../tasks/{taskId}`
///
/// The service requires the complete task shape on update, not a partial
/// patch; callers reconstruct this from the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskModel {
    /// Task title
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Completion status
    pub status: TaskStatus,
    /// Priority
    pub priority: TaskPriority,
    /// Optional start date
    pub start_date: Option<DateTime<Utc>>,
    /// Optional deadline
    pub deadline: Option<DateTime<Utc>>,
}

/// Page of tasks returned by `GET /todo-lists/{id}/tasks`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksPage {
    /// Tasks in server order
    pub items: Vec<Task>,
    /// Total number of tasks in the todolist
    pub total_count: i64,
    /// Server-side error text, if any
    #[serde(default)]
    pub error: Option<String>,
}

/// Credentials for `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginParams {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
    /// Whether to issue a persistent session
    pub remember_me: bool,
    /// Captcha answer, when the service demands one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha: Option<String>,
}

/// `data` payload of a successful `GET /auth/me`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthMe {
    /// Account identifier
    pub id: i64,
    /// Account email
    pub email: String,
    /// Account login name
    pub login: String,
}

/// `data` payload of a successful `POST /auth/login`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Identifier of the logged-in account
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

    use super::*;

    #[test]
    fn envelope_success_helpers() {
        let response: EmptyResponse =
            serde_json::from_str(r#"{"resultCode":0,"messages":[],"data":{}}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.first_message(), None);
    }

    #[test]
    fn envelope_failure_carries_messages() {
        let response: EmptyResponse =
            serde_json::from_str(r#"{"resultCode":1,"messages":["title required"],"data":{}}"#)
                .unwrap();
        assert!(!response.is_success());
        assert_eq!(response.first_message(), Some("title required"));
    }

    #[test]
    fn lenient_data_tolerates_mismatched_payload() {
        // The auth endpoints send `data: {}` on failure, which does not
        // match AuthMe. The envelope must still parse.
        let response: ServerResponse<AuthMe> =
            serde_json::from_str(r#"{"resultCode":1,"messages":["not authorized"],"data":{}}"#)
                .unwrap();
        assert!(response.data.is_none());

        let response: ServerResponse<AuthMe> = serde_json::from_str(
            r#"{"resultCode":0,"messages":[],"data":{"id":7,"email":"a@b.c","login":"ab"}}"#,
        )
        .unwrap();
        assert_eq!(response.data.unwrap().id, 7);
    }

    #[test]
    fn task_status_roundtrips_integer_codes() {
        let status: TaskStatus = serde_json::from_str("2").unwrap();
        assert_eq!(status, TaskStatus::Completed);
        assert_eq!(serde_json::to_string(&TaskStatus::Draft).unwrap(), "3");
        assert!(serde_json::from_str::<TaskStatus>("9").is_err());
    }

    #[test]
    fn task_parses_camel_case_fields() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "t1",
                "todoListId": "tl1",
                "title": "Buy milk",
                "description": null,
                "status": 0,
                "priority": 1,
                "startDate": null,
                "deadline": null,
                "order": 0,
                "addedDate": "2024-01-15T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(task.todo_list_id, "tl1");
        assert_eq!(task.status, TaskStatus::New);
        assert_eq!(task.priority, TaskPriority::Middle);
    }

    #[test]
    fn login_params_omit_absent_captcha() {
        let params = LoginParams {
            email: "a@b.c".into(),
            password: "secret".into(),
            remember_me: true,
            captcha: None,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("captcha").is_none());
        assert_eq!(json["rememberMe"], true);
    }
}
