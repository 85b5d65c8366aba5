use clap::Subcommand;
use lifesync_core::{Dashboard, WeeklySummary};
use serde::Serialize;

use super::{open_repository, print_json, CmdResult};

const BAR_WIDTH: u64 = 30;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Minutes per day for the last seven days
    Weekly {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Consecutive days with at least one session, ending today
    Streak {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Weekly chart, total hours, streak and session count
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct StreakOutput {
    days: u32,
}

/// Bar length for `minutes` scaled against the busiest day.
fn bar_len(minutes: u64, max: u64) -> usize {
    let scaled = u128::from(minutes) * u128::from(BAR_WIDTH) / u128::from(max.max(1));
    scaled.min(u128::from(BAR_WIDTH)) as usize
}

fn print_chart(summary: &WeeklySummary) {
    let max = summary.max_minutes();
    for bucket in &summary.by_day {
        let width = bar_len(bucket.minutes, max);
        println!(
            "{} {}  {:<bar$} {:>4} min",
            bucket.date.format("%a"),
            bucket.date.format("%m-%d"),
            "#".repeat(width),
            bucket.minutes,
            bar = BAR_WIDTH as usize
        );
    }
}

pub fn run(action: StatsAction) -> CmdResult {
    let repo = open_repository()?;

    match action {
        StatsAction::Weekly { json } => {
            let summary = repo.weekly();
            if json {
                print_json(&summary)?;
            } else {
                print_chart(&summary);
                println!("Total: {} min", summary.total_minutes);
            }
        }
        StatsAction::Streak { json } => {
            let days = repo.streak();
            if json {
                print_json(&StreakOutput { days })?;
            } else {
                println!("{days} day streak");
            }
        }
        StatsAction::Dashboard { json } => {
            let dashboard: Dashboard = repo.dashboard();
            if json {
                print_json(&dashboard)?;
            } else {
                print_chart(&dashboard.weekly);
                println!();
                println!("Total hours:      {}", dashboard.total_hours);
                println!("Day streak:       {}", dashboard.streak_days);
                println!("Sessions tracked: {}", dashboard.sessions_tracked);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_the_busiest_day() {
        assert_eq!(bar_len(0, 1), 0);
        assert_eq!(bar_len(60, 60), BAR_WIDTH as usize);
        assert_eq!(bar_len(30, 60), BAR_WIDTH as usize / 2);
    }

    #[test]
    fn huge_minutes_do_not_overflow_the_bar() {
        assert_eq!(bar_len(u64::MAX, u64::MAX), BAR_WIDTH as usize);
        assert_eq!(bar_len(u64::MAX / 2, u64::MAX), BAR_WIDTH as usize / 2 - 1);
    }
}
