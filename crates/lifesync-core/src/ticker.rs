//! Tick sources for the timer and stopwatch.
//!
//! State machines never read the clock themselves. [`ManualTicker`] drives
//! them deterministically; [`IntervalTicker`] drives them from a tokio
//! interval at the machine's own period (1 s for the countdown, 10 ms for
//! the stopwatch).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::events::Event;

/// A state machine that advances one step per tick.
pub trait Tickable {
    fn tick(&mut self) -> Option<Event>;
    fn is_running(&self) -> bool;
    /// Time represented by one tick.
    fn period(&self) -> Duration;
}

/// Delivers ticks on demand. Used by tests and by replay tooling.
#[derive(Debug, Default)]
pub struct ManualTicker {
    delivered: u64,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver up to `n` ticks, stopping early once the target stops running.
    pub fn advance<T: Tickable + ?Sized>(&mut self, target: &mut T, n: u64) -> Vec<Event> {
        let mut events = Vec::new();
        for _ in 0..n {
            if !target.is_running() {
                break;
            }
            self.delivered += 1;
            events.extend(target.tick());
        }
        events
    }

    pub fn delivered(&self) -> u64 {
        self.delivered
    }
}

/// Drives a shared state machine from a background tokio task.
///
/// The task exits on its own when the machine stops running or when the
/// event receiver is dropped. Dropping the ticker aborts the task.
#[derive(Debug, Default)]
pub struct IntervalTicker {
    handle: Option<JoinHandle<()>>,
}

impl IntervalTicker {
    /// Start ticking `target` at its own period. Must be called inside a
    /// tokio runtime.
    pub fn spawn<T>(target: Arc<Mutex<T>>, events: UnboundedSender<Event>) -> Self
    where
        T: Tickable + Send + 'static,
    {
        let period = lock(&target).period();
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                interval.tick().await;
                if events.is_closed() {
                    break;
                }
                let event = {
                    let mut machine = lock(&target);
                    if !machine.is_running() {
                        break;
                    }
                    machine.tick()
                };
                if let Some(event) = event {
                    if events.send(event).is_err() {
                        break;
                    }
                }
            }
            tracing::debug!("interval ticker finished");
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Stop ticking. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Wait until the ticking task ends on its own.
    pub async fn finished(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::warn!("interval ticker task failed: {e}");
                }
            }
        }
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{CountdownTimer, Stopwatch, TimerPhase};
    use tokio::sync::mpsc;

    #[test]
    fn manual_ticker_stops_with_the_machine() {
        let mut timer = CountdownTimer::default();
        timer.configure(0, 5);
        timer.start();

        let mut ticker = ManualTicker::new();
        let events = ticker.advance(&mut timer, 100);
        assert_eq!(ticker.delivered(), 5);
        assert_eq!(events.len(), 1);
        assert_eq!(timer.phase(), TimerPhase::Expired);
    }

    #[test]
    fn manual_ticker_ignores_stopped_machines() {
        let mut sw = Stopwatch::new();
        let mut ticker = ManualTicker::new();
        assert!(ticker.advance(&mut sw, 10).is_empty());
        assert_eq!(ticker.delivered(), 0);
        assert_eq!(sw.elapsed_cs(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_ticker_runs_countdown_to_completion() {
        let mut timer = CountdownTimer::default();
        timer.configure(0, 3);
        timer.start();
        let timer = Arc::new(Mutex::new(timer));

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = IntervalTicker::spawn(timer.clone(), tx);

        let event = rx.recv().await.expect("completion event");
        assert!(matches!(event, Event::SessionCompleted { .. }));
        ticker.finished().await;
        assert!(!ticker.is_active());
        assert_eq!(timer.lock().unwrap().phase(), TimerPhase::Expired);
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_is_idempotent_and_halts_ticks() {
        let mut sw = Stopwatch::new();
        sw.start();
        let sw = Arc::new(Mutex::new(sw));

        let (tx, _rx) = mpsc::unbounded_channel();
        let mut ticker = IntervalTicker::spawn(sw.clone(), tx);
        tokio::time::sleep(Duration::from_millis(505)).await;
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_active());

        let frozen = sw.lock().unwrap().elapsed_cs();
        assert!((49..=51).contains(&frozen), "elapsed was {frozen}");

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(sw.lock().unwrap().elapsed_cs(), frozen);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_exits_when_machine_is_paused() {
        let mut sw = Stopwatch::new();
        sw.start();
        let sw = Arc::new(Mutex::new(sw));

        let (tx, _rx) = mpsc::unbounded_channel();
        let mut ticker = IntervalTicker::spawn(sw.clone(), tx);
        tokio::time::sleep(Duration::from_millis(100)).await;
        sw.lock().unwrap().pause();
        ticker.finished().await;
        assert!(!ticker.is_active());
    }
}
