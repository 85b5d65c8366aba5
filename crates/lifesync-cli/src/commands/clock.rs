use std::time::Duration;

use chrono::{DateTime, Local};
use clap::Args;
use lifesync_core::format::{format_clock, format_long_date};
use lifesync_core::{ClockFormat, Config};

use super::{redraw, runtime, CmdResult};

#[derive(Args)]
pub struct ClockArgs {
    /// Display format: 24h or 12h (defaults to clock.format from config)
    #[arg(long)]
    format: Option<ClockFormat>,
    /// Print the current time once and exit
    #[arg(long)]
    once: bool,
}

fn render(now: DateTime<Local>, format: ClockFormat) -> String {
    format!(
        "{}  {}",
        format_clock(now.time(), format),
        format_long_date(now.date_naive())
    )
}

pub fn run(args: ClockArgs) -> CmdResult {
    let format = match args.format {
        Some(format) => format,
        None => Config::load_or_default().clock.format,
    };

    if args.once {
        println!("{}", render(Local::now(), format));
        return Ok(());
    }

    runtime()?.block_on(async {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);
        loop {
            tokio::select! {
                _ = interval.tick() => redraw(&render(Local::now(), format)),
                _ = &mut ctrl_c => break,
            }
        }
        println!();
    });
    Ok(())
}
