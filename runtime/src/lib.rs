//! # Tasklist Runtime
//!
//! Runtime implementation for the tasklist architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Snapshot channel**: A `watch` channel carrying the latest state
//!   snapshot, for view bindings and other read-only observers
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//!
//! // Observe snapshots
//! let mut rx = store.subscribe();
//! ```

use std::sync::Arc;

use tasklist_core::{effect::Effect, reducer::Reducer};
use tokio::sync::{RwLock, watch};

pub use store::Store;

/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use super::{Arc, Effect, Reducer, RwLock, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, so dispatch is strictly serialized)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with action feedback)
    /// 5. Snapshot publication (a `watch` channel always holding the latest
    ///    post-command state)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Ordering
    ///
    /// Every action is applied to completion before the next is accepted:
    /// the reducer runs while holding the write lock, so concurrent `send`
    /// calls serialize and each command observes the result of all prior
    /// commands. Observers only ever see whole snapshots, never a state
    /// mid-mutation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(
    ///     TaskListState::default(),
    ///     TaskListReducer::new(),
    ///     production_environment(),
    /// );
    ///
    /// store.send(TaskAction::Add { title: "Buy milk".into() }).await;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        /// Snapshot channel holding the latest post-command state.
        ///
        /// View bindings subscribe here; they never hold a writable alias
        /// to the store's state, only cloned snapshots.
        snapshot: watch::Sender<S>,
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                snapshot: self.snapshot.clone(),
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
        A: Send + 'static,
        S: Clone + Send + Sync + 'static,
        E: Clone + Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            let (snapshot, _) = watch::channel(initial_state.clone());

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                snapshot,
            }
        }

        /// Send an action to the store
        ///
        /// This is the primary way to interact with the store:
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Publishes the new snapshot to subscribers
        /// 4. Executes returned effects asynchronously (effects may produce
        ///    more actions, which feed back through `send`)
        ///
        /// Invalid actions are absorbed by the reducer as no-ops; `send`
        /// itself never fails.
        ///
        /// # Panics
        ///
        /// If the reducer panics, the panic will propagate and halt the
        /// store. Reducers should be pure functions that do not panic.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) {
            tracing::debug!("Processing action");
            metrics::counter!("store.commands.total").increment(1);

            let effects = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut state, action, &self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                // Publish the post-command snapshot while still holding the
                // write guard, so snapshot order matches commit order even
                // when cloned stores send concurrently. Subscribers see
                // either the pre-command or post-command state, never an
                // intermediate one.
                self.snapshot.send_replace(state.clone());

                effects
            };

            for effect in effects {
                self.execute_effect(effect);
            }
            tracing::debug!("Action processing completed");
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released
        /// promptly:
        ///
        /// ```ignore
        /// let total = store.state(|s| s.tasks.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Subscribe to state snapshots
        ///
        /// Returns a `watch` receiver that always holds the latest
        /// post-command snapshot. The receiver is independent of the store's
        /// internal state; mutating a received snapshot has no effect on the
        /// store.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<S> {
            self.snapshot.subscribe()
        }

        /// Execute an effect
        ///
        /// **Effect execution failures**: Log and continue. Effects are
        /// fire-and-forget operations; if a spawned effect panics it is
        /// logged by the runtime but the store keeps processing actions.
        fn execute_effect(&self, effect: Effect<A>) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Future(fut) => {
                    tracing::trace!("Executing Effect::Future");
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);

                    let store = self.clone();
                    tokio::spawn(async move {
                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");
                            store.send(action).await;
                        } else {
                            tracing::trace!("Effect::Future completed with no action");
                        }
                    });
                },
            }
        }
    }
}
