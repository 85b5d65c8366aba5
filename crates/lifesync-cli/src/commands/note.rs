use clap::Subcommand;

use super::{open_repository, print_json, CmdResult};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Add a note
    Add {
        /// Note text
        text: String,
    },
    /// List notes, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a note by id
    Remove {
        /// Note id
        id: i64,
    },
    /// Remove every note
    Clear,
}

pub fn run(action: NoteAction) -> CmdResult {
    let mut repo = open_repository()?;

    match action {
        NoteAction::Add { text } => {
            let note = repo.notes.add(&text).ok_or("note text is empty")?;
            print_json(&note)?;
        }
        NoteAction::List { json } => {
            let notes = repo.notes.list();
            if json {
                print_json(&notes)?;
            } else if notes.is_empty() {
                println!("No notes");
            } else {
                for note in notes {
                    println!("{}  {}", note.id, note.text);
                }
            }
        }
        NoteAction::Remove { id } => {
            if !repo.notes.remove(id) {
                return Err(format!("note not found: {id}").into());
            }
            println!("Note removed: {id}");
        }
        NoteAction::Clear => {
            let removed = repo.notes.clear();
            println!("Removed {removed} note(s)");
        }
    }
    Ok(())
}
