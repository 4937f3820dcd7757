//! Actions driving the application state
//!
//! Commands are what the UI dispatches; events are what completed requests
//! feed back through the store. The reducer answers commands with state
//! mutations plus effects, and events with state mutations only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todoflow_client::{
    LoginParams, Task, TaskPriority, TaskStatus, Todolist, UpdateTaskModel,
};

use crate::error::SyncError;
use crate::state::{RequestStatus, TaskFilter};

/// A partial task update
///
/// Unset fields keep the stored value. The service requires the full task
/// shape on update, so the patch is merged over the stored record before the
/// request and applied to it after the service accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New completion status
    pub status: Option<TaskStatus>,
    /// New priority
    pub priority: Option<TaskPriority>,
    /// New start date
    pub start_date: Option<DateTime<Utc>>,
    /// New deadline
    pub deadline: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Merge the patch over a stored record into the full update payload
    #[must_use]
    pub fn merged_model(&self, task: &Task) -> UpdateTaskModel {
        UpdateTaskModel {
            title: self.title.clone().unwrap_or_else(|| task.title.clone()),
            description: self
                .description
                .clone()
                .or_else(|| task.description.clone()),
            status: self.status.unwrap_or(task.status),
            priority: self.priority.unwrap_or(task.priority),
            start_date: self.start_date.or(task.start_date),
            deadline: self.deadline.or(task.deadline),
        }
    }

    /// Apply the patch to a stored record in place
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(start_date) = self.start_date {
            task.start_date = Some(start_date);
        }
        if let Some(deadline) = self.deadline {
            task.deadline = Some(deadline);
        }
    }
}

/// Everything that can happen to the application state
#[derive(Debug, Clone)]
pub enum AppAction {
    // ===== Commands (dispatched by the UI) =====
    /// Probe the server session on startup
    Initialize,
    /// Log in with credentials
    Login(LoginParams),
    /// End the server session
    Logout,
    /// Fetch all todolists
    FetchTodolists,
    /// Create a todolist
    AddTodolist {
        /// Title of the new todolist
        title: String,
    },
    /// Delete a todolist
    RemoveTodolist {
        /// Identifier of the todolist to delete
        id: String,
    },
    /// Rename a todolist
    RenameTodolist {
        /// Identifier of the todolist to rename
        id: String,
        /// New title
        title: String,
    },
    /// Fetch the tasks of one todolist
    FetchTasks {
        /// Owning todolist
        todolist_id: String,
    },
    /// Create a task
    AddTask {
        /// Owning todolist
        todolist_id: String,
        /// Title of the new task
        title: String,
    },
    /// Delete a task
    RemoveTask {
        /// Owning todolist
        todolist_id: String,
        /// Task to delete
        task_id: String,
    },
    /// Update fields of a task
    UpdateTask {
        /// Owning todolist
        todolist_id: String,
        /// Task to update
        task_id: String,
        /// Fields to change
        patch: TaskPatch,
    },
    /// Change a todolist's task visibility filter (local only)
    ChangeFilter {
        /// Todolist whose filter changes
        id: String,
        /// New filter
        filter: TaskFilter,
    },
    /// Set a todolist's per-entity request status (local only)
    ChangeEntityStatus {
        /// Todolist whose status changes
        id: String,
        /// New status
        status: RequestStatus,
    },
    /// Set the application-wide request status (local only)
    SetStatus(RequestStatus),
    /// Set or dismiss the surfaced error text (local only)
    SetError(Option<String>),
    /// Mark the startup session probe as completed (local only)
    SetInitialized(bool),

    // ===== Events (fed back by completed requests) =====
    /// The startup session probe finished
    Initialized {
        /// Whether a server session is active
        logged_in: bool,
    },
    /// Login was accepted
    LoginSucceeded,
    /// Logout was accepted
    LogoutSucceeded,
    /// Todolists arrived
    TodolistsFetched {
        /// The fetched records, in server order
        todolists: Vec<Todolist>,
    },
    /// A todolist was created on the server
    TodolistAdded {
        /// The created record
        todolist: Todolist,
    },
    /// A todolist was deleted on the server
    TodolistRemoved {
        /// Identifier of the deleted todolist
        id: String,
    },
    /// A todolist rename was accepted
    TodolistRenamed {
        /// Identifier of the renamed todolist
        id: String,
        /// The accepted title
        title: String,
    },
    /// Tasks of one todolist arrived
    TasksFetched {
        /// Owning todolist
        todolist_id: String,
        /// The fetched records, in server order
        tasks: Vec<Task>,
    },
    /// A task was created on the server
    TaskAdded {
        /// The created record
        task: Task,
    },
    /// A task was deleted on the server
    TaskRemoved {
        /// Owning todolist
        todolist_id: String,
        /// Identifier of the deleted task
        task_id: String,
    },
    /// A task update was accepted
    TaskUpdated {
        /// Owning todolist
        todolist_id: String,
        /// Identifier of the updated task
        task_id: String,
        /// The accepted changes
        patch: TaskPatch,
    },
    /// A request failed
    RequestFailed {
        /// What went wrong
        error: SyncError,
    },
    /// A todolist deletion failed
    ///
    /// Carried separately from [`AppAction::RequestFailed`] so the targeted
    /// todolist's entity status can be restored.
    RemoveTodolistFailed {
        /// Todolist whose deletion failed
        id: String,
        /// What went wrong
        error: SyncError,
    },
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

    use super::*;
    use chrono::Utc;

    fn task() -> Task {
        Task {
            id: "t1".into(),
            todo_list_id: "tl1".into(),
            title: "Buy milk".into(),
            description: Some("two liters".into()),
            status: TaskStatus::New,
            priority: TaskPriority::Middle,
            start_date: None,
            deadline: None,
            order: 0,
            added_date: Utc::now(),
        }
    }

    #[test]
    fn merged_model_keeps_unpatched_fields() {
        let patch = TaskPatch {
            status: Some(TaskStatus::Completed),
            ..TaskPatch::default()
        };
        let model = patch.merged_model(&task());

        assert_eq!(model.title, "Buy milk");
        assert_eq!(model.description.as_deref(), Some("two liters"));
        assert_eq!(model.status, TaskStatus::Completed);
        assert_eq!(model.priority, TaskPriority::Middle);
    }

    #[test]
    fn apply_overlays_only_set_fields() {
        let mut stored = task();
        let patch = TaskPatch {
            title: Some("Buy oat milk".into()),
            ..TaskPatch::default()
        };
        patch.apply_to(&mut stored);

        assert_eq!(stored.title, "Buy oat milk");
        assert_eq!(stored.description.as_deref(), Some("two liters"));
        assert_eq!(stored.status, TaskStatus::New);
    }
}
