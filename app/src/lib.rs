//! # Todoflow App
//!
//! The client-side state layer of the todo-list application: the application
//! state slices, the command/event action set, and the synchronization
//! reducer that keeps local state consistent with the remote todo service.
//!
//! The flow is unidirectional. The UI dispatches command actions; the reducer
//! marks request status and returns effects carrying the network calls; each
//! effect resolves to a completion event that the store feeds back, and the
//! reducer applies it as a pure mutation. Failures surface as text in the app
//! slice and never touch the collections.
//!
//! ```no_run
//! use todoflow_app::{AppAction, AppEnvironment, AppState, SyncReducer};
//! use todoflow_client::TodoClient;
//! use todoflow_runtime::Store;
//!
//! # async fn example() -> Result<(), todoflow_runtime::StoreError> {
//! let client = TodoClient::new("https://social-network.samuraijs.com/api/1.1")
//!     .with_api_key("...");
//! let store = Store::new(AppState::default(), SyncReducer, AppEnvironment::new(client));
//!
//! let mut handle = store.send(AppAction::Initialize).await?;
//! handle.wait().await;
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod error;
pub mod reducer;
pub mod state;
pub mod view;

pub use action::{AppAction, TaskPatch};
pub use error::{GENERIC_ERROR, SyncError};
pub use reducer::{AppEnvironment, SyncReducer};
pub use state::{AppSlice, AppState, AuthSlice, RequestStatus, TaskFilter, TodolistEntity};
pub use view::{TodolistsList, filtered_tasks};
