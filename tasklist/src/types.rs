//! Domain types for the task list.
//!
//! A task list is an ordered collection of short text items that can be
//! added, renamed, completed, and removed. Order is significant: new tasks
//! go to the front (newest first).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tasklist_macros::Action;
use uuid::Uuid;

/// Unique identifier for a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random `TaskId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TaskId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, immutable after creation
    pub id: TaskId,
    /// Title of the task; always non-empty and trimmed
    pub title: String,
    /// Whether the task is completed
    pub completed: bool,
    /// When the task was created; display and sorting only
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, uncompleted task
    #[must_use]
    pub const fn new(id: TaskId, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            completed: false,
            created_at,
        }
    }
}

/// State of the task list
///
/// Tasks are kept newest first; a freshly added task sits at index 0.
/// The state is owned exclusively by the store - every change passes
/// through the command dispatch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListState {
    /// All tasks, newest first
    pub tasks: Vec<Task>,
}

impl TaskListState {
    /// Creates a new empty task list
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the list holds no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn exists(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == *id)
    }

    /// Derived counts for display and gating
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            total: self.len(),
            completed: self.completed_count(),
        }
    }
}

/// Derived summary of a task list snapshot
///
/// Consumed by view bindings: the counts line, and the gate on the
/// clear-completed action (only invokable when `completed > 0`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Total number of tasks
    pub total: usize,
    /// Number of completed tasks
    pub completed: usize,
}

impl Summary {
    /// True when there is at least one completed task to clear
    #[must_use]
    pub const fn has_completed(&self) -> bool {
        self.completed > 0
    }
}

/// Commands accepted by the task list reducer
///
/// This is the complete mutation vocabulary of the store: exactly one of
/// these is applied atomically per dispatch. None of them raise errors -
/// unmatched ids and empty trimmed titles resolve to silent no-ops.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAction {
    /// Add a new task to the front of the list
    ///
    /// The title is trimmed; if the trimmed result is empty the command is
    /// a no-op.
    Add {
        /// Raw title as entered by the user
        title: String,
    },

    /// Flip the completed flag of a task
    Toggle {
        /// Task to toggle
        id: TaskId,
    },

    /// Replace a task's title
    ///
    /// The title is trimmed; an empty trimmed result discards the edit.
    Update {
        /// Task to update
        id: TaskId,
        /// Raw replacement title
        title: String,
    },

    /// Delete a task
    Remove {
        /// Task to remove
        id: TaskId,
    },

    /// Remove every completed task, preserving the order of the rest
    ClearCompleted,
}
