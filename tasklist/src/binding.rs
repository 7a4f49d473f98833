//! View-binding helpers: transient UI state and snapshot rendering.
//!
//! The binding consumes immutable snapshots and forwards user intents as
//! commands. The only state it owns is transient and store-independent:
//! which task (if any) is currently in inline-edit mode, and the draft text
//! for that edit. That state is discarded on save or cancel and never leaks
//! into the store.

use crate::types::{Task, TaskAction, TaskId, TaskListState};

/// Transient inline-edit state
///
/// Opened against a snapshot, seeded with the task's current title.
/// Saving produces an [`TaskAction::Update`] command and consumes the
/// session; cancelling is simply dropping it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    id: TaskId,
    draft: String,
}

impl EditSession {
    /// Open an edit session for the task with the given id
    ///
    /// Returns `None` when the snapshot holds no such task. The draft is
    /// seeded with the current title, mirroring an inline edit field.
    #[must_use]
    pub fn begin(state: &TaskListState, id: TaskId) -> Option<Self> {
        state.get(&id).map(|task| Self {
            id,
            draft: task.title.clone(),
        })
    }

    /// The task being edited
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Current draft text
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft text
    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    /// Commit the edit, consuming the session
    ///
    /// The returned command carries the raw draft; trimming and the
    /// empty-title discard happen in the reducer, not here.
    #[must_use]
    pub fn save(self) -> TaskAction {
        TaskAction::Update {
            id: self.id,
            title: self.draft,
        }
    }
}

/// Resolve a 1-based display index against a snapshot
///
/// The REPL shows tasks newest first with 1-based numbering; this maps a
/// displayed number back to the task it refers to.
#[must_use]
pub fn resolve_index(state: &TaskListState, index: usize) -> Option<&Task> {
    index.checked_sub(1).and_then(|i| state.tasks.get(i))
}

/// Render a snapshot for the terminal
///
/// Newest first, checkbox marker, 1-based index, creation date, and a
/// summary line with the totals.
#[must_use]
pub fn render(state: &TaskListState) -> String {
    let mut out = String::new();

    if state.is_empty() {
        out.push_str("No tasks yet. Add one to get started.\n");
    } else {
        for (i, task) in state.tasks.iter().enumerate() {
            let marker = if task.completed { 'x' } else { ' ' };
            let date = task.created_at.format("%Y-%m-%d");
            out.push_str(&format!("[{marker}] {}. {} ({date})\n", i + 1, task.title));
        }
    }

    let summary = state.summary();
    out.push_str(&format!(
        "Total: {} | Completed: {}\n",
        summary.total, summary.completed
    ));
    out
}
