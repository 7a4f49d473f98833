//! Task list manager built on the tasklist reducer architecture.
//!
//! The task list is a single in-memory store: an ordered collection of
//! items (newest first) mutated through exactly five commands - add,
//! toggle, update, remove, clear-completed. The reducer is the sole
//! authority over the list; the view binding only reads snapshots and
//! forwards user intents.
//!
//! It demonstrates:
//!
//! - Simple domain model (add, toggle, edit, remove, clear)
//! - Silent no-op absorption of invalid commands
//! - `#[derive(Action)]` command names for logging
//! - Environment injection of clock and id generation
//! - Testing with `ReducerTest`
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tasklist::{TaskAction, TaskEnvironment, TaskListReducer, TaskListState};
//! use tasklist_core::environment::{SystemClock, UuidGenerator};
//! use tasklist_runtime::Store;
//!
//! # async fn example() {
//! // Create environment and store
//! let env = TaskEnvironment::new(Arc::new(SystemClock), Arc::new(UuidGenerator));
//! let store = Store::new(TaskListState::new(), TaskListReducer::new(), env);
//!
//! // Add a task
//! store.send(TaskAction::Add { title: "Buy milk".to_string() }).await;
//!
//! // Complete it
//! let id = store.state(|s| s.tasks[0].id).await;
//! store.send(TaskAction::Toggle { id }).await;
//!
//! // Read the summary
//! let summary = store.state(|s| s.summary()).await;
//! println!("{} of {} done", summary.completed, summary.total);
//! # }
//! ```

pub mod binding;
pub mod cli;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use binding::EditSession;
pub use reducer::{TaskEnvironment, TaskListReducer};
pub use types::{Summary, Task, TaskAction, TaskId, TaskListState};
