use clap::Subcommand;
use lifesync_core::{Preferences, Theme};

use super::{open_repository, CmdResult};

#[derive(Subcommand, Default)]
pub enum ThemeAction {
    /// Print the current theme
    #[default]
    Show,
    /// Set the theme
    Set {
        /// light or dark
        theme: Theme,
    },
    /// Switch between light and dark
    Toggle,
}

fn apply(prefs: &Preferences, action: ThemeAction) -> Theme {
    match action {
        ThemeAction::Show => prefs.theme(),
        ThemeAction::Set { theme } => {
            prefs.set_theme(theme);
            theme
        }
        ThemeAction::Toggle => prefs.toggle_theme(),
    }
}

pub fn run(action: ThemeAction) -> CmdResult {
    let repo = open_repository()?;
    println!("{}", apply(&repo.preferences, action));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifesync_core::Repository;

    #[test]
    fn set_then_toggle() {
        let repo = Repository::in_memory();
        assert_eq!(apply(&repo.preferences, ThemeAction::Show), Theme::Light);
        assert_eq!(
            apply(&repo.preferences, ThemeAction::Set { theme: Theme::Dark }),
            Theme::Dark
        );
        assert_eq!(apply(&repo.preferences, ThemeAction::Toggle), Theme::Light);
    }
}
