//! Interactive terminal binding for the task list store.
//!
//! Reads one command per line, forwards it to the store, and re-renders
//! the latest snapshot. The only state held here is the transient inline
//! edit session; everything else lives in the store.

use std::io::{BufRead, Write};
use std::sync::Arc;

use tasklist::binding::{self, EditSession};
use tasklist::cli::{self, HELP, Input, ParseError};
use tasklist::{TaskAction, TaskEnvironment, TaskListReducer, TaskListState};
use tasklist_core::environment::{SystemClock, UuidGenerator};
use tasklist_runtime::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let env = TaskEnvironment::new(Arc::new(SystemClock), Arc::new(UuidGenerator));
    let store = Store::new(TaskListState::new(), TaskListReducer::new(), env);
    let snapshots = store.subscribe();

    println!("tasklist - type `help` for commands\n");
    print!("{}", binding::render(&snapshots.borrow()));

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut edit: Option<EditSession> = None;

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = match cli::parse(&line) {
            Ok(input) => input,
            Err(ParseError::Empty) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match input {
            Input::Add(title) => {
                store.send(TaskAction::Add { title }).await;
            }
            Input::Toggle(n) => {
                let snapshot = snapshots.borrow().clone();
                match binding::resolve_index(&snapshot, n) {
                    Some(task) => store.send(TaskAction::Toggle { id: task.id }).await,
                    None => {
                        println!("no task {n}");
                        continue;
                    }
                }
            }
            Input::Edit(n) => {
                let snapshot = snapshots.borrow().clone();
                let session = binding::resolve_index(&snapshot, n)
                    .and_then(|task| EditSession::begin(&snapshot, task.id));
                match session {
                    Some(session) => {
                        println!("editing `{}` (save [title] | cancel)", session.draft());
                        edit = Some(session);
                    }
                    None => println!("no task {n}"),
                }
                continue;
            }
            Input::Save(text) => match edit.take() {
                Some(mut session) => {
                    if let Some(text) = text {
                        session.set_draft(text);
                    }
                    store.send(session.save()).await;
                }
                None => {
                    println!("no edit in progress");
                    continue;
                }
            },
            Input::Cancel => {
                if edit.take().is_some() {
                    println!("edit cancelled");
                } else {
                    println!("no edit in progress");
                }
                continue;
            }
            Input::Remove(n) => {
                let snapshot = snapshots.borrow().clone();
                match binding::resolve_index(&snapshot, n) {
                    Some(task) => store.send(TaskAction::Remove { id: task.id }).await,
                    None => {
                        println!("no task {n}");
                        continue;
                    }
                }
            }
            Input::Clear => {
                // Gated like the clear button: only invokable when there is
                // something completed to clear.
                let summary = snapshots.borrow().summary();
                if summary.has_completed() {
                    store.send(TaskAction::ClearCompleted).await;
                } else {
                    println!("nothing completed to clear");
                    continue;
                }
            }
            Input::List => {}
            Input::Help => {
                println!("{HELP}");
                continue;
            }
            Input::Quit => break,
        }

        print!("{}", binding::render(&snapshots.borrow()));
    }

    Ok(())
}
