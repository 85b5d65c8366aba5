use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Subcommand;
use lifesync_core::format::format_stopwatch;
use lifesync_core::{IntervalTicker, Stopwatch};
use tokio::sync::mpsc;
use tokio::time::{interval_at, sleep_until, Instant};

use super::{lock, print_json, redraw, runtime, CmdResult};

#[derive(Subcommand)]
pub enum StopwatchAction {
    /// Run the stopwatch until Ctrl-C or the duration elapses
    Run {
        /// Stop after this many seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        duration: Option<u64>,
        /// Record a lap every N seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        lap_every: Option<u64>,
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StopwatchAction) -> CmdResult {
    match action {
        StopwatchAction::Run {
            duration,
            lap_every,
            json,
        } => {
            let mut stopwatch = Stopwatch::new();
            stopwatch.start();
            let shared = Arc::new(Mutex::new(stopwatch));

            runtime()?.block_on(async {
                let (tx, _rx) = mpsc::unbounded_channel();
                let mut ticker = IntervalTicker::spawn(shared.clone(), tx);

                let start = Instant::now();
                let deadline = sleep_until(start + Duration::from_secs(duration.unwrap_or(0)));
                tokio::pin!(deadline);
                let lap_period = Duration::from_secs(lap_every.unwrap_or(1));
                let mut laps = interval_at(start + lap_period, lap_period);
                let mut display = tokio::time::interval(Duration::from_millis(50));
                let ctrl_c = tokio::signal::ctrl_c();
                tokio::pin!(ctrl_c);

                loop {
                    tokio::select! {
                        _ = &mut ctrl_c => break,
                        _ = &mut deadline, if duration.is_some() => break,
                        _ = laps.tick(), if lap_every.is_some() => {
                            let mut sw = lock(&shared);
                            sw.lap();
                            if !json {
                                let n = sw.laps().len();
                                let cs = sw.elapsed_cs();
                                drop(sw);
                                redraw(&format!("Lap {n}: {}", format_stopwatch(cs)));
                                println!();
                            }
                        }
                        _ = display.tick(), if !json => {
                            let cs = lock(&shared).elapsed_cs();
                            redraw(&format_stopwatch(cs));
                        }
                    }
                }

                ticker.stop();
                lock(&shared).pause();
            });

            let state = lock(&shared).snapshot();
            if json {
                print_json(&state)?;
            } else {
                redraw(&format_stopwatch(state.elapsed_centiseconds));
                println!();
                for (i, lap) in state.laps.iter().enumerate() {
                    println!("Lap {}: {}", i + 1, format_stopwatch(*lap));
                }
            }
        }
    }
    Ok(())
}
