use chrono::{DateTime, Utc};
use clap::Subcommand;
use lifesync_core::NewSession;

use super::{open_repository, print_json, CmdResult};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Log a completed session
    Add {
        /// Length in minutes
        #[arg(long)]
        minutes: u64,
        /// Session type (focus, timer, or anything else)
        #[arg(long = "type", default_value = "focus")]
        session_type: String,
        /// RFC 3339 timestamp to log the session at (defaults to now)
        #[arg(long)]
        date: Option<DateTime<Utc>>,
    },
    /// List logged sessions, oldest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a session by id
    Remove {
        /// Session id
        id: i64,
    },
}

pub fn run(action: SessionAction) -> CmdResult {
    let mut repo = open_repository()?;

    match action {
        SessionAction::Add {
            minutes,
            session_type,
            date,
        } => {
            let mut new = NewSession::new(session_type, minutes);
            new.date = date;
            let session = repo.sessions.append(new);
            print_json(&session)?;
        }
        SessionAction::List { json } => {
            let sessions = repo.sessions.list();
            if json {
                print_json(&sessions)?;
            } else if sessions.is_empty() {
                println!("No sessions logged");
            } else {
                for s in sessions {
                    println!("{}  {:<8} {:>4} min  {}", s.id, s.session_type, s.minutes, s.date);
                }
            }
        }
        SessionAction::Remove { id } => {
            if !repo.sessions.remove(id) {
                return Err(format!("session not found: {id}").into());
            }
            println!("Session removed: {id}");
        }
    }
    Ok(())
}
