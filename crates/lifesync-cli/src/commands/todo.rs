use clap::Subcommand;

use super::{open_repository, print_json, CmdResult};

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a task
    Add {
        /// Task description (at most 100 characters)
        text: String,
    },
    /// List tasks in the order they were added
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Flip a task between pending and completed
    Toggle {
        /// Task id
        id: i64,
    },
    /// Remove a task by id
    Remove {
        /// Task id
        id: i64,
    },
    /// Remove every completed task
    ClearCompleted,
}

pub fn run(action: TodoAction) -> CmdResult {
    let mut repo = open_repository()?;

    match action {
        TodoAction::Add { text } => {
            let todo = repo.todos.add(&text)?;
            print_json(&todo)?;
        }
        TodoAction::List { json } => {
            if json {
                print_json(&repo.todos.list())?;
                return Ok(());
            }
            let counts = repo.todos.counts();
            if counts.total == 0 {
                println!("No tasks yet");
                return Ok(());
            }
            for todo in repo.todos.list() {
                let mark = if todo.completed { "x" } else { " " };
                println!("[{mark}] {}  {}", todo.id, todo.text);
            }
            println!(
                "{} total, {} completed, {} pending",
                counts.total, counts.completed, counts.pending
            );
        }
        TodoAction::Toggle { id } => {
            let todo = repo
                .todos
                .toggle(id)
                .ok_or_else(|| format!("task not found: {id}"))?;
            print_json(&todo)?;
        }
        TodoAction::Remove { id } => {
            if !repo.todos.remove(id) {
                return Err(format!("task not found: {id}").into());
            }
            println!("Task removed: {id}");
        }
        TodoAction::ClearCompleted => {
            let removed = repo.todos.clear_completed();
            println!("Removed {removed} completed task(s)");
        }
    }
    Ok(())
}
