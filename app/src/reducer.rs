//! The synchronization reducer
//!
//! Commands mark in-flight status and return an effect carrying the network
//! call; the effect resolves to a completion event which is fed back through
//! the store and applied here as a pure state mutation. Failures never mutate
//! the collections, they only surface through the app slice.

use todoflow_client::TodoClient;
use todoflow_core::{Effect, Reducer, SmallVec, smallvec};

use crate::action::AppAction;
use crate::error::SyncError;
use crate::state::{AppState, RequestStatus};

/// Dependencies the reducer's effects need
#[derive(Clone)]
pub struct AppEnvironment {
    /// Client for the remote todo service
    pub client: TodoClient,
}

impl AppEnvironment {
    /// Create an environment around a service client
    #[must_use]
    pub fn new(client: TodoClient) -> Self {
        Self { client }
    }
}

/// Reducer implementing every synchronization operation
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncReducer;

impl Reducer for SyncReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    #[allow(clippy::too_many_lines)] // one arm per operation, flat by design
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ===== Commands =====
            AppAction::Initialize => {
                let client = env.client.clone();
                smallvec![Effect::future(async move {
                    let logged_in = match client.me().await {
                        Ok(response) => response.is_success(),
                        Err(error) => {
                            tracing::debug!(%error, "session probe failed");
                            false
                        }
                    };
                    Some(AppAction::Initialized { logged_in })
                })]
            }

            AppAction::Login(params) => {
                state.app.status = RequestStatus::Loading;
                let client = env.client.clone();
                smallvec![Effect::future(async move {
                    Some(match client.login(&params).await {
                        Ok(response) if response.is_success() => AppAction::LoginSucceeded,
                        Ok(response) => AppAction::RequestFailed {
                            error: SyncError::from_envelope(&response),
                        },
                        Err(error) => AppAction::RequestFailed {
                            error: error.into(),
                        },
                    })
                })]
            }

            AppAction::Logout => {
                state.app.status = RequestStatus::Loading;
                let client = env.client.clone();
                smallvec![Effect::future(async move {
                    Some(match client.logout().await {
                        Ok(response) if response.is_success() => AppAction::LogoutSucceeded,
                        Ok(response) => AppAction::RequestFailed {
                            error: SyncError::from_envelope(&response),
                        },
                        Err(error) => AppAction::RequestFailed {
                            error: error.into(),
                        },
                    })
                })]
            }

            AppAction::FetchTodolists => {
                let client = env.client.clone();
                smallvec![Effect::future(async move {
                    Some(match client.get_todolists().await {
                        Ok(todolists) => AppAction::TodolistsFetched { todolists },
                        Err(error) => AppAction::RequestFailed {
                            error: error.into(),
                        },
                    })
                })]
            }

            AppAction::AddTodolist { title } => {
                state.app.status = RequestStatus::Loading;
                let client = env.client.clone();
                smallvec![Effect::future(async move {
                    Some(match client.create_todolist(&title).await {
                        Ok(response) if response.is_success() => match response.data {
                            Some(payload) => AppAction::TodolistAdded {
                                todolist: payload.item,
                            },
                            None => AppAction::RequestFailed {
                                error: SyncError::Network(
                                    "create todolist response carried no item".into(),
                                ),
                            },
                        },
                        Ok(response) => AppAction::RequestFailed {
                            error: SyncError::from_envelope(&response),
                        },
                        Err(error) => AppAction::RequestFailed {
                            error: error.into(),
                        },
                    })
                })]
            }

            AppAction::RemoveTodolist { id } => {
                state.app.status = RequestStatus::Loading;
                if let Some(entity) = state.todolist_mut(&id) {
                    entity.entity_status = RequestStatus::Loading;
                }
                let client = env.client.clone();
                smallvec![Effect::future(async move {
                    Some(match client.delete_todolist(&id).await {
                        Ok(response) if response.is_success() => AppAction::TodolistRemoved { id },
                        Ok(response) => AppAction::RemoveTodolistFailed {
                            error: SyncError::from_envelope(&response),
                            id,
                        },
                        Err(error) => AppAction::RemoveTodolistFailed {
                            error: error.into(),
                            id,
                        },
                    })
                })]
            }

            AppAction::RenameTodolist { id, title } => {
                let client = env.client.clone();
                smallvec![Effect::future(async move {
                    Some(match client.update_todolist(&id, &title).await {
                        Ok(response) if response.is_success() => {
                            AppAction::TodolistRenamed { id, title }
                        }
                        Ok(response) => AppAction::RequestFailed {
                            error: SyncError::from_envelope(&response),
                        },
                        Err(error) => AppAction::RequestFailed {
                            error: error.into(),
                        },
                    })
                })]
            }

            AppAction::FetchTasks { todolist_id } => {
                state.app.status = RequestStatus::Loading;
                let client = env.client.clone();
                smallvec![Effect::future(async move {
                    Some(match client.get_tasks(&todolist_id).await {
                        Ok(page) => AppAction::TasksFetched {
                            todolist_id,
                            tasks: page.items,
                        },
                        Err(error) => AppAction::RequestFailed {
                            error: error.into(),
                        },
                    })
                })]
            }

            AppAction::AddTask { todolist_id, title } => {
                state.app.status = RequestStatus::Loading;
                let client = env.client.clone();
                smallvec![Effect::future(async move {
                    Some(match client.create_task(&todolist_id, &title).await {
                        Ok(response) if response.is_success() => match response.data {
                            Some(payload) => AppAction::TaskAdded {
                                task: payload.item,
                            },
                            None => AppAction::RequestFailed {
                                error: SyncError::Network(
                                    "create task response carried no item".into(),
                                ),
                            },
                        },
                        Ok(response) => AppAction::RequestFailed {
                            error: SyncError::from_envelope(&response),
                        },
                        Err(error) => AppAction::RequestFailed {
                            error: error.into(),
                        },
                    })
                })]
            }

            AppAction::RemoveTask {
                todolist_id,
                task_id,
            } => {
                state.app.status = RequestStatus::Loading;
                let client = env.client.clone();
                smallvec![Effect::future(async move {
                    Some(match client.delete_task(&todolist_id, &task_id).await {
                        Ok(response) if response.is_success() => AppAction::TaskRemoved {
                            todolist_id,
                            task_id,
                        },
                        Ok(response) => AppAction::RequestFailed {
                            error: SyncError::from_envelope(&response),
                        },
                        Err(error) => AppAction::RequestFailed {
                            error: error.into(),
                        },
                    })
                })]
            }

            AppAction::UpdateTask {
                todolist_id,
                task_id,
                patch,
            } => {
                // The service wants the full task shape; reconstruct it from
                // the stored record. A record we do not hold cannot be
                // updated, and that failure stays local.
                let Some(task) = state.task(&todolist_id, &task_id) else {
                    tracing::warn!(
                        %todolist_id,
                        %task_id,
                        "task not found locally, skipping update"
                    );
                    return smallvec![];
                };
                let model = patch.merged_model(task);

                state.app.status = RequestStatus::Loading;
                let client = env.client.clone();
                smallvec![Effect::future(async move {
                    Some(
                        match client.update_task(&todolist_id, &task_id, &model).await {
                            Ok(response) if response.is_success() => AppAction::TaskUpdated {
                                todolist_id,
                                task_id,
                                patch,
                            },
                            Ok(response) => AppAction::RequestFailed {
                                error: SyncError::from_envelope(&response),
                            },
                            Err(error) => AppAction::RequestFailed {
                                error: error.into(),
                            },
                        },
                    )
                })]
            }

            AppAction::ChangeFilter { id, filter } => {
                if let Some(entity) = state.todolist_mut(&id) {
                    entity.filter = filter;
                }
                smallvec![]
            }

            AppAction::ChangeEntityStatus { id, status } => {
                if let Some(entity) = state.todolist_mut(&id) {
                    entity.entity_status = status;
                }
                smallvec![]
            }

            AppAction::SetStatus(status) => {
                state.app.status = status;
                smallvec![]
            }

            AppAction::SetError(error) => {
                state.app.error = error;
                smallvec![]
            }

            AppAction::SetInitialized(is_initialized) => {
                state.app.is_initialized = is_initialized;
                smallvec![]
            }

            // ===== Events =====
            AppAction::Initialized { logged_in } => {
                state.auth.is_logged_in = logged_in;
                state.app.is_initialized = true;
                smallvec![]
            }

            AppAction::LoginSucceeded => {
                state.auth.is_logged_in = true;
                state.app.status = RequestStatus::Succeeded;
                smallvec![]
            }

            AppAction::LogoutSucceeded => {
                state.auth.is_logged_in = false;
                state.app.status = RequestStatus::Succeeded;
                state.clear_collections();
                smallvec![]
            }

            AppAction::TodolistsFetched { todolists } => {
                state.replace_todolists(todolists);
                state.app.status = RequestStatus::Succeeded;
                smallvec![]
            }

            AppAction::TodolistAdded { todolist } => {
                state.insert_todolist(todolist);
                state.app.status = RequestStatus::Succeeded;
                smallvec![]
            }

            AppAction::TodolistRemoved { id } => {
                state.remove_todolist(&id);
                state.app.status = RequestStatus::Succeeded;
                smallvec![]
            }

            AppAction::TodolistRenamed { id, title } => {
                if let Some(entity) = state.todolist_mut(&id) {
                    entity.todolist.title = title;
                }
                state.app.status = RequestStatus::Succeeded;
                smallvec![]
            }

            AppAction::TasksFetched { todolist_id, tasks } => {
                // Only todolists we hold get a task entry; a fetch completing
                // after its todolist was removed must not resurrect the key.
                if state.todolist(&todolist_id).is_some() {
                    state.tasks.insert(todolist_id, tasks);
                } else {
                    tracing::warn!(%todolist_id, "dropping tasks for unknown todolist");
                }
                state.app.status = RequestStatus::Succeeded;
                smallvec![]
            }

            AppAction::TaskAdded { task } => {
                if let Some(tasks) = state.tasks.get_mut(&task.todo_list_id) {
                    tasks.insert(0, task);
                } else {
                    tracing::warn!(
                        todolist_id = %task.todo_list_id,
                        "dropping task for unknown todolist"
                    );
                }
                state.app.status = RequestStatus::Succeeded;
                smallvec![]
            }

            AppAction::TaskRemoved {
                todolist_id,
                task_id,
            } => {
                if let Some(tasks) = state.tasks.get_mut(&todolist_id) {
                    if let Some(index) = tasks.iter().position(|task| task.id == task_id) {
                        tasks.remove(index);
                    }
                }
                state.app.status = RequestStatus::Succeeded;
                smallvec![]
            }

            AppAction::TaskUpdated {
                todolist_id,
                task_id,
                patch,
            } => {
                if let Some(task) = state.task_mut(&todolist_id, &task_id) {
                    patch.apply_to(task);
                }
                state.app.status = RequestStatus::Succeeded;
                smallvec![]
            }

            AppAction::RequestFailed { error } => {
                state.app.status = RequestStatus::Failed;
                state.app.error = Some(error.message().to_string());
                smallvec![]
            }

            AppAction::RemoveTodolistFailed { id, error } => {
                state.app.status = RequestStatus::Failed;
                state.app.error = Some(error.message().to_string());
                if let Some(entity) = state.todolist_mut(&id) {
                    entity.entity_status = RequestStatus::Failed;
                }
                smallvec![]
            }
        }
    }
}
