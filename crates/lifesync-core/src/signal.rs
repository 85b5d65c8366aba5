//! Completion signals.
//!
//! The countdown timer calls into a [`Signal`] when it expires. Front ends
//! decide what that means (terminal bell, desktop notification); tests use
//! [`RecordingSignal`] to assert the calls happened.

use std::io::Write;
use std::sync::Mutex;

/// Side-effect capability invoked on timer expiry.
///
/// Implementations must not panic and must swallow their own failures.
pub trait Signal: Send + Sync {
    fn notify(&self, title: &str, body: &str);
    fn play_tone(&self);
}

/// Does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSignal;

impl Signal for SilentSignal {
    fn notify(&self, _title: &str, _body: &str) {}
    fn play_tone(&self) {}
}

/// Rings the terminal bell and logs the notification.
#[derive(Debug, Clone, Copy)]
pub struct TerminalSignal {
    pub bell: bool,
}

impl Default for TerminalSignal {
    fn default() -> Self {
        Self { bell: true }
    }
}

impl Signal for TerminalSignal {
    fn notify(&self, title: &str, body: &str) {
        tracing::info!(title, body, "notification");
        eprintln!("{title}: {body}");
    }

    fn play_tone(&self) {
        if !self.bell {
            return;
        }
        let mut stderr = std::io::stderr();
        if let Err(e) = stderr.write_all(b"\x07").and_then(|_| stderr.flush()) {
            tracing::debug!("terminal bell not available: {e}");
        }
    }
}

/// A call made against a [`RecordingSignal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalCall {
    Notify { title: String, body: String },
    Tone,
}

/// Records every call for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSignal {
    calls: Mutex<Vec<SignalCall>>,
}

impl RecordingSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SignalCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn push(&self, call: SignalCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl Signal for RecordingSignal {
    fn notify(&self, title: &str, body: &str) {
        self.push(SignalCall::Notify {
            title: title.to_string(),
            body: body.to_string(),
        });
    }

    fn play_tone(&self) {
        self.push(SignalCall::Tone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_signal_keeps_call_order() {
        let signal = RecordingSignal::new();
        signal.play_tone();
        signal.notify("Timer complete", "Great job! Time's up.");
        assert_eq!(
            signal.calls(),
            vec![
                SignalCall::Tone,
                SignalCall::Notify {
                    title: "Timer complete".into(),
                    body: "Great job! Time's up.".into(),
                },
            ]
        );
    }
}
