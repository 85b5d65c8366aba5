use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Subcommand;
use lifesync_core::format::format_timer;
use lifesync_core::timer::{DEFAULT_TIMER_SECS, MAX_TIMER_SECS};
use lifesync_core::{
    Config, CountdownTimer, Event, IntervalTicker, Preset, Repository, Session, Signal,
    SilentSignal, TerminalSignal, ValidationError,
};
use tokio::sync::mpsc;

use super::{lock, open_repository, print_json, redraw, runtime, CmdResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a countdown in the foreground and log it when it completes
    Run {
        /// Minutes (0-60)
        #[arg(long)]
        minutes: Option<u32>,
        /// Seconds (0-59)
        #[arg(long)]
        seconds: Option<u32>,
        /// Preset length in minutes: 5, 15, 25 or 45
        #[arg(long, conflicts_with_all = ["minutes", "seconds"])]
        preset: Option<u32>,
        /// Print events as JSON instead of a live readout
        #[arg(long)]
        json: bool,
    },
    /// List preset durations
    Presets,
}

fn signal_from(config: &Config) -> Arc<dyn Signal> {
    if config.notifications.enabled {
        Arc::new(TerminalSignal {
            bell: config.notifications.bell,
        })
    } else {
        Arc::new(SilentSignal)
    }
}

fn configure(
    timer: &mut CountdownTimer,
    minutes: Option<u32>,
    seconds: Option<u32>,
    preset: Option<u32>,
) -> Result<(), ValidationError> {
    if let Some(minutes) = preset {
        let preset = Preset::from_minutes(minutes).ok_or_else(|| ValidationError::InvalidValue {
            field: "preset".into(),
            message: format!("no {minutes}-minute preset; choose 5, 15, 25 or 45"),
        })?;
        timer.apply_preset(preset);
        return Ok(());
    }
    if minutes.is_none() && seconds.is_none() {
        return Ok(());
    }
    let (minutes, seconds) = (minutes.unwrap_or(0), seconds.unwrap_or(0));
    if seconds > 59 {
        return Err(ValidationError::InvalidValue {
            field: "seconds".into(),
            message: "seconds must be between 0 and 59".into(),
        });
    }
    timer
        .configure(minutes, seconds)
        .map(|_| ())
        .ok_or_else(|| ValidationError::InvalidValue {
            field: "duration".into(),
            message: format!(
                "duration must be between 1 second and {} minutes",
                MAX_TIMER_SECS / 60
            ),
        })
}

fn run_countdown(timer: CountdownTimer, json: bool) -> CmdResult {
    let mut repo = open_repository()?;

    let (completed, interrupted) = runtime()?.block_on(async {
        let shared = Arc::new(Mutex::new(timer));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = IntervalTicker::spawn(shared.clone(), tx);
        let mut display = tokio::time::interval(Duration::from_millis(250));
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let (completed, interrupted) = loop {
            tokio::select! {
                event = rx.recv() => break (event, None),
                _ = &mut ctrl_c => {
                    ticker.stop();
                    let paused = lock(&shared).pause();
                    tracing::info!(
                        remaining = lock(&shared).remaining_secs(),
                        "countdown interrupted"
                    );
                    break (None, paused);
                }
                _ = display.tick(), if !json => {
                    let remaining = lock(&shared).remaining_secs();
                    redraw(&format_timer(remaining));
                }
            }
        };
        if !json {
            redraw(&format_timer(lock(&shared).remaining_secs()));
            println!();
        }
        (completed, interrupted)
    });

    let outcome = finish(&mut repo, completed, interrupted);
    if json {
        if let Some(event) = &outcome.event {
            print_json(event)?;
        }
    } else {
        match outcome.logged {
            Some(session) => {
                println!("Session logged: {} ({} min)", session.session_type, session.minutes)
            }
            None => println!("Timer stopped"),
        }
    }
    Ok(())
}

/// How a foreground countdown ended.
#[derive(Debug)]
struct Outcome {
    /// `SessionCompleted` on expiry, `TimerPaused` on interrupt.
    event: Option<Event>,
    logged: Option<Session>,
}

/// Log a completed countdown. Interrupted runs log nothing.
fn finish(
    repo: &mut Repository,
    completed: Option<Event>,
    interrupted: Option<Event>,
) -> Outcome {
    match completed {
        Some(event @ Event::SessionCompleted { .. }) => {
            let logged = repo.sessions.record_completion(&event);
            Outcome {
                event: Some(event),
                logged,
            }
        }
        _ => Outcome {
            event: interrupted,
            logged: None,
        },
    }
}

pub fn run(action: TimerAction) -> CmdResult {
    match action {
        TimerAction::Run {
            minutes,
            seconds,
            preset,
            json,
        } => {
            let config = Config::load_or_default();
            let mut timer = CountdownTimer::new(signal_from(&config));
            config.apply_timer_default(&mut timer);
            configure(&mut timer, minutes, seconds, preset)?;

            if let Some(event) = timer.start() {
                if json {
                    print_json(&event)?;
                }
            }
            run_countdown(timer, json)?;
        }
        TimerAction::Presets => {
            for preset in Preset::ALL {
                let marker = if preset.minutes() * 60 == DEFAULT_TIMER_SECS {
                    " (default)"
                } else {
                    ""
                };
                println!("{:>2} min{marker}", preset.minutes());
            }
        }
    }
    Ok(())
}
