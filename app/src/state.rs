//! Application state: the four slices and their consistency rules
//!
//! Todolists and tasks form one unit of state. Every todolist id present in
//! `todolists` owns exactly one entry in `tasks`, and `tasks` never holds an
//! entry for an id that is not present in `todolists`. All structural
//! mutations go through the methods on [`AppState`], which maintain both
//! collections together.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use todoflow_client::{Task, Todolist};

/// Lifecycle of the current (or most recent) remote request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// No request has been made yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last request completed successfully
    Succeeded,
    /// The last request failed
    Failed,
}

/// Per-todolist task visibility filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    /// Show every task
    #[default]
    All,
    /// Show tasks that are not completed
    Active,
    /// Show completed tasks only
    Completed,
}

/// Application-wide request tracking
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppSlice {
    /// Lifecycle of the current request
    pub status: RequestStatus,
    /// Text of the most recent surfaced error, cleared by dismissal
    pub error: Option<String>,
    /// Whether the startup session probe has completed
    pub is_initialized: bool,
}

/// Session state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthSlice {
    /// Whether a server session is active
    pub is_logged_in: bool,
}

/// A todolist record enriched with client-only presentation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodolistEntity {
    /// The server record
    pub todolist: Todolist,
    /// Task visibility filter, client-only
    pub filter: TaskFilter,
    /// Lifecycle of the request currently targeting this todolist
    pub entity_status: RequestStatus,
}

impl TodolistEntity {
    /// Wrap a server record with default presentation state
    #[must_use]
    pub fn new(todolist: Todolist) -> Self {
        Self {
            todolist,
            filter: TaskFilter::default(),
            entity_status: RequestStatus::default(),
        }
    }

    /// Identifier of the underlying todolist
    #[must_use]
    pub fn id(&self) -> &str {
        &self.todolist.id
    }
}

/// Root application state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Application-wide request tracking
    pub app: AppSlice,
    /// Session state
    pub auth: AuthSlice,
    /// Todolists in display order, newest first
    pub todolists: Vec<TodolistEntity>,
    /// Tasks keyed by owning todolist id, newest first within each entry
    pub tasks: HashMap<String, Vec<Task>>,
}

impl AppState {
    /// Prepend a todolist and register its (empty) task entry
    pub fn insert_todolist(&mut self, todolist: Todolist) {
        self.tasks.insert(todolist.id.clone(), Vec::new());
        self.todolists.insert(0, TodolistEntity::new(todolist));
    }

    /// Remove a todolist and its task entry
    ///
    /// No-op when the id is unknown.
    pub fn remove_todolist(&mut self, id: &str) {
        self.todolists.retain(|entity| entity.id() != id);
        self.tasks.remove(id);
    }

    /// Replace the whole todolist collection with freshly fetched records
    ///
    /// Presentation state resets to defaults and every task entry is emptied;
    /// task entries for ids no longer present are dropped.
    pub fn replace_todolists(&mut self, todolists: Vec<Todolist>) {
        self.tasks = todolists
            .iter()
            .map(|todolist| (todolist.id.clone(), Vec::new()))
            .collect();
        self.todolists = todolists.into_iter().map(TodolistEntity::new).collect();
    }

    /// Drop all todolists and tasks, e.g. when the session ends
    pub fn clear_collections(&mut self) {
        self.todolists.clear();
        self.tasks.clear();
    }

    /// Look up a todolist entity by id
    #[must_use]
    pub fn todolist(&self, id: &str) -> Option<&TodolistEntity> {
        self.todolists.iter().find(|entity| entity.id() == id)
    }

    /// Look up a todolist entity by id, mutably
    pub fn todolist_mut(&mut self, id: &str) -> Option<&mut TodolistEntity> {
        self.todolists.iter_mut().find(|entity| entity.id() == id)
    }

    /// Look up a task by owning todolist and task id
    #[must_use]
    pub fn task(&self, todolist_id: &str, task_id: &str) -> Option<&Task> {
        self.tasks
            .get(todolist_id)
            .and_then(|tasks| tasks.iter().find(|task| task.id == task_id))
    }

    /// Look up a task by owning todolist and task id, mutably
    pub fn task_mut(&mut self, todolist_id: &str, task_id: &str) -> Option<&mut Task> {
        self.tasks
            .get_mut(todolist_id)
            .and_then(|tasks| tasks.iter_mut().find(|task| task.id == task_id))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

    use super::*;
    use chrono::Utc;

    fn todolist(id: &str) -> Todolist {
        Todolist {
            id: id.into(),
            title: format!("list {id}"),
            created_at: Utc::now(),
            order: 0,
        }
    }

    #[test]
    fn insert_prepends_and_registers_task_entry() {
        let mut state = AppState::default();
        state.insert_todolist(todolist("a"));
        state.insert_todolist(todolist("b"));

        assert_eq!(state.todolists[0].id(), "b");
        assert_eq!(state.todolists[1].id(), "a");
        assert_eq!(state.tasks.get("b").map(Vec::len), Some(0));
        assert_eq!(state.tasks.len(), 2);
    }

    #[test]
    fn remove_drops_both_collections() {
        let mut state = AppState::default();
        state.insert_todolist(todolist("a"));
        state.insert_todolist(todolist("b"));

        state.remove_todolist("a");

        assert_eq!(state.todolists.len(), 1);
        assert!(!state.tasks.contains_key("a"));
        assert!(state.tasks.contains_key("b"));

        // Unknown id is a no-op.
        state.remove_todolist("zzz");
        assert_eq!(state.todolists.len(), 1);
    }

    #[test]
    fn replace_drops_stale_task_entries() {
        let mut state = AppState::default();
        state.insert_todolist(todolist("stale"));

        state.replace_todolists(vec![todolist("x"), todolist("y")]);

        assert_eq!(state.todolists.len(), 2);
        assert_eq!(state.todolists[0].id(), "x");
        assert!(!state.tasks.contains_key("stale"));
        assert!(state.tasks.contains_key("x"));
        assert!(state.tasks.contains_key("y"));
    }

    #[test]
    fn replace_resets_presentation_state() {
        let mut state = AppState::default();
        state.insert_todolist(todolist("a"));
        if let Some(entity) = state.todolist_mut("a") {
            entity.filter = TaskFilter::Completed;
            entity.entity_status = RequestStatus::Loading;
        }

        state.replace_todolists(vec![todolist("a")]);

        let entity = state.todolist("a").unwrap();
        assert_eq!(entity.filter, TaskFilter::All);
        assert_eq!(entity.entity_status, RequestStatus::Idle);
    }

    #[test]
    fn clear_collections_leaves_app_and_auth_alone() {
        let mut state = AppState::default();
        state.insert_todolist(todolist("a"));
        state.app.is_initialized = true;
        state.auth.is_logged_in = true;

        state.clear_collections();

        assert!(state.todolists.is_empty());
        assert!(state.tasks.is_empty());
        assert!(state.app.is_initialized);
        assert!(state.auth.is_logged_in);
    }
}
