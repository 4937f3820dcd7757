//! Todo service API client implementation

use crate::error::ClientError;
use crate::types::{
    AuthMe, EmptyResponse, ItemPayload, LoginData, LoginParams, ServerResponse, Task, TasksPage,
    Todolist, UpdateTaskModel,
};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// Client for the remote todo service
///
/// Cheap to clone; the inner `reqwest::Client` is reference-counted.
#[derive(Clone)]
pub struct TodoClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl TodoClient {
    /// Create a new client for the service at `base_url`
    ///
    /// `base_url` should not end with a slash, e.g.
    /// `https://social-network.samuraijs.com/api/1.1`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Attach an API key, sent as the `API-KEY` header on every request
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let request = match &self.api_key {
            Some(key) => request.header("API-KEY", key),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<T>()
                .await
                .map_err(|e| ClientError::ResponseParseFailed(e.to_string())),
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ClientError::Http {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    /// Fetch all todolists: `GET /todo-lists`
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success HTTP statuses, or
    /// parsing failures.
    pub async fn get_todolists(&self) -> Result<Vec<Todolist>, ClientError> {
        self.execute(self.client.get(self.url("/todo-lists"))).await
    }

    /// Create a todolist: `POST /todo-lists`
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success HTTP statuses, or
    /// parsing failures. An application-level rejection is a nonzero
    /// `resultCode` inside the `Ok` envelope, not an error.
    pub async fn create_todolist(
        &self,
        title: &str,
    ) -> Result<ServerResponse<ItemPayload<Todolist>>, ClientError> {
        self.execute(
            self.client
                .post(self.url("/todo-lists"))
                .json(&serde_json::json!({ "title": title })),
        )
        .await
    }

    /// Rename a todolist: `PUT /todo-lists/{id}`
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success HTTP statuses, or
    /// parsing failures.
    pub async fn update_todolist(&self, id: &str, title: &str) -> Result<EmptyResponse, ClientError> {
        self.execute(
            self.client
                .put(self.url(&format!("/todo-lists/{id}")))
                .json(&serde_json::json!({ "title": title })),
        )
        .await
    }

    /// Delete a todolist: `DELETE /todo-lists/{id}`
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success HTTP statuses, or
    /// parsing failures.
    pub async fn delete_todolist(&self, id: &str) -> Result<EmptyResponse, ClientError> {
        self.execute(self.client.delete(self.url(&format!("/todo-lists/{id}"))))
            .await
    }

    /// Fetch the tasks of a todolist: `GET /todo-lists/{id}/tasks`
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success HTTP statuses, or
    /// parsing failures.
    pub async fn get_tasks(&self, todolist_id: &str) -> Result<TasksPage, ClientError> {
        self.execute(
            self.client
                .get(self.url(&format!("/todo-lists/{todolist_id}/tasks"))),
        )
        .await
    }

    /// Create a task: `POST /todo-lists/{id}/tasks`
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success HTTP statuses, or
    /// parsing failures.
    pub async fn create_task(
        &self,
        todolist_id: &str,
        title: &str,
    ) -> Result<ServerResponse<ItemPayload<Task>>, ClientError> {
        self.execute(
            self.client
                .post(self.url(&format!("/todo-lists/{todolist_id}/tasks")))
                .json(&serde_json::json!({ "title": title })),
        )
        .await
    }

    /// Update a task with its full shape: `PUT /todo-lists/{id}/tasks/{taskId}`
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success HTTP statuses, or
    /// parsing failures.
    pub async fn update_task(
        &self,
        todolist_id: &str,
        task_id: &str,
        model: &UpdateTaskModel,
    ) -> Result<EmptyResponse, ClientError> {
        self.execute(
            self.client
                .put(self.url(&format!("/todo-lists/{todolist_id}/tasks/{task_id}")))
                .json(model),
        )
        .await
    }

    /// Delete a task: `DELETE /todo-lists/{id}/tasks/{taskId}`
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success HTTP statuses, or
    /// parsing failures.
    pub async fn delete_task(
        &self,
        todolist_id: &str,
        task_id: &str,
    ) -> Result<EmptyResponse, ClientError> {
        self.execute(
            self.client
                .delete(self.url(&format!("/todo-lists/{todolist_id}/tasks/{task_id}"))),
        )
        .await
    }

    /// Fetch the current session: `GET /auth/me`
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success HTTP statuses, or
    /// parsing failures.
    pub async fn me(&self) -> Result<ServerResponse<AuthMe>, ClientError> {
        self.execute(self.client.get(self.url("/auth/me"))).await
    }

    /// Log in: `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success HTTP statuses, or
    /// parsing failures.
    pub async fn login(
        &self,
        params: &LoginParams,
    ) -> Result<ServerResponse<LoginData>, ClientError> {
        self.execute(self.client.post(self.url("/auth/login")).json(params))
            .await
    }

    /// Log out: `DELETE /auth/login`
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success HTTP statuses, or
    /// parsing failures.
    pub async fn logout(&self) -> Result<EmptyResponse, ClientError> {
        self.execute(self.client.delete(self.url("/auth/login")))
            .await
    }
}
