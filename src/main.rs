//! Task Tracker demo client
//!
//! Walks through the library: builds users and tasks, applies pure updates,
//! filters by priority and drives a `TaskStore`. Summaries go to stdout,
//! progress goes to the log.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (e.g., `debug`, `info`, `task_tracker=debug`)
//! - `TASK_DEFAULT_STATUS`: `todo` (default) | `in_progress` | `done`
//! - `TASK_DEFAULT_PRIORITY`: `low` | `medium` (default) | `high`
//! - `TASK_DUPLICATE_POLICY`: `reject` (default) | `overwrite`
//!
//! Variables may also be placed in a `.env` file.

use std::collections::BTreeMap;
use std::io::{self, Write};

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use task_tracker::{
    Displayable, Priority, Status, StoreConfig, StoreError, Task, TaskId, TaskStore, User, UserId,
    add_tag_to_task, create_task, get_tasks_by_priority, print_displayable_item,
    update_task_priority, update_task_status,
};

/// Errors that end the walkthrough.
#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_tracker=debug,task_tracker_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting task tracker demo");

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration error");
            std::process::exit(1);
        }
    };

    tracing::info!(
        default_status = %config.default_status,
        default_priority = %config.default_priority,
        duplicate_policy = ?config.duplicate_policy,
        "Store configuration loaded"
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if let Err(error) = run(config, &mut output) {
        tracing::error!(%error, "Demo failed");
        std::process::exit(1);
    }

    tracing::info!("Demo complete");
}

fn run(config: StoreConfig, output: &mut impl Write) -> Result<(), DemoError> {
    demonstrate_values(output)?;
    demonstrate_store(config, output)?;
    Ok(())
}

/// Domain values and the pure operations over them.
fn demonstrate_values(output: &mut impl Write) -> Result<(), DemoError> {
    tracing::info!("Domain values");

    let user = User::new(UserId::new(1), "Kateryna");
    tracing::info!(user_id = %user.id, name = %user.name, "Created user");
    tracing::info!(status = %Status::InProgress, priority = %Priority::High, "Enumerations");

    let task = create_task(TaskId::new(101), "Task from the client");
    tracing::info!(task_id = %task.id, title = %task.title, "Created task");

    let task = update_task_status(Status::InProgress, task);
    let task = update_task_priority(Priority::High, task);
    let task = add_tag_to_task("client_tag", task).with_assignee(user.id);

    print_displayable_item(output, &task)?;
    print_displayable_item(output, &user)?;

    let tasks: BTreeMap<TaskId, Task> = [task, create_task(TaskId::new(102), "Another task")]
        .into_iter()
        .map(|task| (task.id, task))
        .collect();
    let high_priority = get_tasks_by_priority(Priority::High, &tasks);
    tracing::info!(count = high_priority.len(), "Found high priority tasks");
    for task in &high_priority {
        print_displayable_item(output, task)?;
    }

    Ok(())
}

/// The owning store: add, read, update, list.
fn demonstrate_store(config: StoreConfig, output: &mut impl Write) -> Result<(), DemoError> {
    tracing::info!("Task store");

    let mut store = TaskStore::with_config(config);
    tracing::info!(count = store.task_count(), "Created store");

    let added = store.add_task(
        TaskId::new(201),
        "Task from the service",
        Some("Detailed description of the service task".to_string()),
        Some(Priority::Medium),
        None,
    )?;
    tracing::info!(task_id = %added.id, title = %added.title, "Added task");
    tracing::info!(count = store.task_count(), "Store size");

    match store.try_get_task_by_id(TaskId::new(201)) {
        Some(task) => print_displayable_item(output, &task)?,
        None => tracing::warn!(task_id = 201, "Task not found in store"),
    }

    match store.update_task(TaskId::new(201), |task| task.with_status(Status::Done)) {
        Ok(()) => {
            tracing::info!(task_id = 201, "Update succeeded");
            if let Some(task) = store.try_get_task_by_id(TaskId::new(201)) {
                print_displayable_item(output, &task)?;
            }
        }
        Err(error) => tracing::warn!(%error, "Update failed"),
    }

    if let Err(error) = store.update_task(TaskId::new(999), |task| task) {
        tracing::info!(%error, "Update of a missing task reported as expected");
    }

    tracing::info!("All tasks in the store");
    for task in store.all_tasks() {
        print_displayable_item(output, &task)?;
        tracing::debug!(summary = %task.summary(), "Listed task");
    }

    Ok(())
}
