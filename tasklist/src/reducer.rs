//! Reducer logic for the task list.
//!
//! The reducer is the single authority over the list: it applies exactly
//! one command atomically per dispatch and never raises an error. Invalid
//! mutations (empty trimmed titles, unknown ids) leave the state untouched.

use std::sync::Arc;

use tasklist_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, IdGenerator},
    reducer::Reducer,
};

use crate::types::{Task, TaskAction, TaskId, TaskListState};

/// Environment dependencies for the task list reducer
///
/// Identifier and timestamp generation are the only ambient inputs the
/// reducer consults, and only at the edge of the `Add` transition. Tests
/// inject deterministic stand-ins.
#[derive(Clone)]
pub struct TaskEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of session-unique task identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl TaskEnvironment {
    /// Creates a new `TaskEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }
}

/// Reducer for the task list
#[derive(Clone, Debug)]
pub struct TaskListReducer;

impl TaskListReducer {
    /// Creates a new `TaskListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TaskListReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TaskListReducer {
    type State = TaskListState;
    type Action = TaskAction;
    type Environment = TaskEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::debug!(command = action.name(), "applying command");

        match action {
            TaskAction::Add { title } => {
                let trimmed = title.trim();
                if trimmed.is_empty() {
                    tracing::trace!("empty title after trim, add discarded");
                } else {
                    let task = Task::new(
                        TaskId::from_uuid(env.ids.generate()),
                        trimmed.to_string(),
                        env.clock.now(),
                    );
                    // Newest first
                    state.tasks.insert(0, task);
                }
            }

            TaskAction::Toggle { id } => {
                if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                    task.completed = !task.completed;
                } else {
                    tracing::trace!(%id, "toggle for unknown id ignored");
                }
            }

            TaskAction::Update { id, title } => {
                let trimmed = title.trim();
                if trimmed.is_empty() {
                    tracing::trace!(%id, "empty title after trim, edit discarded");
                } else if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                    task.title = trimmed.to_string();
                } else {
                    tracing::trace!(%id, "update for unknown id ignored");
                }
            }

            TaskAction::Remove { id } => {
                let before = state.tasks.len();
                state.tasks.retain(|t| t.id != id);
                if state.tasks.len() == before {
                    tracing::trace!(%id, "remove for unknown id ignored");
                }
            }

            TaskAction::ClearCompleted => {
                state.tasks.retain(|t| !t.completed);
            }
        }

        SmallVec::new()
    }
}
