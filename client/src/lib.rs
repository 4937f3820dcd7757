//! # Todoflow Client
//!
//! Typed HTTP client for the remote todo service.
//!
//! The service exposes CRUD endpoints for todolists and tasks plus an auth
//! surface, all wrapped in a uniform envelope:
//!
//! ```json
//! { "resultCode": 0, "messages": [], "data": { ... } }
//! ```
//!
//! A `resultCode` of `0` denotes success on every endpoint; any other value
//! is an application-level failure with accompanying messages. Transport and
//! parse failures surface as [`ClientError`] instead.

pub mod client;
pub mod error;
pub mod types;

pub use client::TodoClient;
pub use error::ClientError;
pub use types::{
    AuthMe, EmptyResponse, ItemPayload, LoginData, LoginParams, ServerResponse, Task, TaskPriority,
    TaskStatus, TasksPage, Todolist, UpdateTaskModel,
};
