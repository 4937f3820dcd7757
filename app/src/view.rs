//! Session-gated view-model for the todolist list
//!
//! The view layer itself is out of scope; this module holds the list
//! component's dispatch logic so the mount gate and filter views are testable
//! without a UI.

use todoflow_client::{Task, TaskStatus};

use crate::action::AppAction;
use crate::state::{AppState, TaskFilter};

/// Dispatch logic of the todolist list component
///
/// Fetches the todolists exactly once per mount, and only when a session is
/// active at mount time. A login after mount does not trigger a fetch.
#[derive(Debug, Default)]
pub struct TodolistsList {
    mounted: bool,
}

impl TodolistsList {
    /// Create a not-yet-mounted list component
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The mount-time dispatch, evaluated once
    ///
    /// Yields `FetchTodolists` iff the session is active on the first call;
    /// every later call yields nothing, whatever the session does.
    pub fn on_mount(&mut self, state: &AppState) -> Option<AppAction> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        if !state.auth.is_logged_in {
            return None;
        }
        Some(AppAction::FetchTodolists)
    }

    /// One `FetchTasks` command per todolist currently held
    ///
    /// Dispatched after the todolists arrive so every list starts with its
    /// tasks loaded.
    #[must_use]
    pub fn tasks_to_fetch(state: &AppState) -> Vec<AppAction> {
        state
            .todolists
            .iter()
            .map(|entity| AppAction::FetchTasks {
                todolist_id: entity.id().to_string(),
            })
            .collect()
    }
}

/// Tasks of a todolist, restricted by its visibility filter
///
/// Unknown todolist ids yield an empty view.
#[must_use]
pub fn filtered_tasks<'a>(state: &'a AppState, todolist_id: &str) -> Vec<&'a Task> {
    let Some(entity) = state.todolist(todolist_id) else {
        return Vec::new();
    };
    let Some(tasks) = state.tasks.get(todolist_id) else {
        return Vec::new();
    };

    tasks
        .iter()
        .filter(|task| match entity.filter {
            TaskFilter::All => true,
            TaskFilter::Active => task.status != TaskStatus::Completed,
            TaskFilter::Completed => task.status == TaskStatus::Completed,
        })
        .collect()
}
