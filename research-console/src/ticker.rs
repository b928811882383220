//! Simulated pipeline progress
//!
//! The ticker walks the stage catalog on a fixed cadence. It never looks at
//! the outstanding request: a fast backend stops it early (snapping back to
//! idle) and a slow one leaves it parked on the last stage until the session
//! settles and stops it.

use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

/// Stage highlighted by the ticker. `None` means no stage is highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub current_stage: Option<usize>,
    /// Bumped on every start/stop so a stale timer task cannot write
    run: u64,
}

impl ProgressState {
    /// Index in the `-1..stage_count` convention used by the stage track
    pub fn index(&self) -> isize {
        self.current_stage.map_or(-1, |i| i as isize)
    }

    /// Move to the next stage. Returns false once the last stage is reached.
    pub fn advance(&mut self, stage_count: usize) -> bool {
        let next = self.current_stage.map_or(0, |i| i + 1);
        if next >= stage_count {
            return false;
        }
        self.current_stage = Some(next);
        true
    }

    pub fn is_last(&self, stage_count: usize) -> bool {
        stage_count > 0 && self.current_stage == Some(stage_count - 1)
    }
}

pub struct ProgressTicker {
    cadence: Duration,
    stage_count: usize,
    state: Arc<watch::Sender<ProgressState>>,
    task: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    pub fn new(cadence: Duration, stage_count: usize) -> Self {
        let (tx, _rx) = watch::channel(ProgressState::default());
        Self {
            cadence,
            stage_count,
            state: Arc::new(tx),
            task: None,
        }
    }

    /// Start advancing from "no stage", one stage per cadence.
    ///
    /// Restarting an active ticker resets it first.
    pub fn start(&mut self, handle: &Handle) {
        self.reset();

        let run = self.state.borrow().run;
        let state = Arc::clone(&self.state);
        let cadence = self.cadence;
        let stage_count = self.stage_count;

        tracing::debug!(?cadence, stage_count, "progress ticker started");

        self.task = Some(handle.spawn(async move {
            let mut interval = interval_at(Instant::now() + cadence, cadence);
            loop {
                interval.tick().await;

                let mut done = false;
                state.send_if_modified(|s| {
                    if s.run != run {
                        done = true;
                        return false;
                    }
                    let moved = s.advance(stage_count);
                    done = !moved || s.is_last(stage_count);
                    moved
                });

                if done {
                    break;
                }
            }
        }));
    }

    /// Halt advancement and return to "no stage"
    pub fn stop(&mut self) {
        if self.task.is_some() {
            tracing::debug!(stage = self.state().index(), "progress ticker stopped");
        }
        self.reset();
    }

    fn reset(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.state.send_modify(|s| {
            s.run = s.run.wrapping_add(1);
            s.current_stage = None;
        });
    }

    pub fn state(&self) -> ProgressState {
        *self.state.borrow()
    }

    pub fn current_stage(&self) -> Option<usize> {
        self.state().current_stage
    }

    /// True while the timer task is still scheduled to advance
    pub fn is_ticking(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Receiver notified on every stage change
    #[cfg(test)]
    fn subscribe(&self) -> watch::Receiver<ProgressState> {
        self.state.subscribe()
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
