//! Wheel controller: serializes entry points and owns the countdown job

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::{
    snapshot::WheelSnapshot,
    wheel_state::{TickOutcome, TickWheelState, ToggleOutcome},
};
use crate::{config::WheelConfig, error::WheelError, geometry::Offset, tasks::CountdownJob};

/// State guarded by the controller lock
#[derive(Debug, Default)]
struct WheelInner {
    state: TickWheelState,
    /// Present exactly while the state is running
    job: Option<CountdownJob>,
    next_generation: u64,
}

impl WheelInner {
    /// Drop the countdown job, if any. Returns `true` if one was cancelled.
    fn cancel_job(&mut self) -> bool {
        match self.job.take() {
            Some(job) => {
                job.cancel();
                true
            }
            None => false,
        }
    }
}

/// One tick wheel control.
///
/// All mutations run under a single lock and publish a fresh
/// [`WheelSnapshot`] to subscribers. Dropping the controller drops its
/// countdown job, which aborts the pending task.
#[derive(Debug)]
pub struct TickWheel {
    inner: Mutex<WheelInner>,
    config: WheelConfig,
    /// Channel for snapshot updates
    snapshot_tx: watch::Sender<WheelSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    _snapshot_rx: watch::Receiver<WheelSnapshot>,
    /// Handed to countdown jobs so they never keep the wheel alive
    weak_self: Weak<TickWheel>,
}

impl TickWheel {
    /// Create an idle wheel set to zero
    pub fn new(config: WheelConfig) -> Arc<Self> {
        let (snapshot_tx, snapshot_rx) = watch::channel(WheelSnapshot::default());

        Arc::new_cyclic(|weak_self| Self {
            inner: Mutex::new(WheelInner::default()),
            config,
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
            weak_self: weak_self.clone(),
        })
    }

    pub fn config(&self) -> WheelConfig {
        self.config
    }

    /// Receive a snapshot after every change
    pub fn subscribe(&self) -> watch::Receiver<WheelSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Get current wheel snapshot
    pub fn snapshot(&self) -> Result<WheelSnapshot, WheelError> {
        let inner = self.lock()?;
        Ok(WheelSnapshot::capture(&inner.state))
    }

    /// Whether a countdown task is currently owned
    pub fn has_pending_job(&self) -> Result<bool, WheelError> {
        Ok(self.lock()?.job.is_some())
    }

    /// Pointer down at `point`, relative to the dial centre
    pub fn start_drag(&self, point: Offset) -> Result<WheelSnapshot, WheelError> {
        let mut inner = self.lock()?;

        if inner.state.start_drag(point) {
            info!("Drag started during countdown, cancelling countdown");
        }
        inner.cancel_job();

        debug!("Drag started at ({:.1}, {:.1})", point.x, point.y);
        Ok(self.publish(&inner.state))
    }

    /// Pointer moved by `delta` since the last drag event
    pub fn on_drag(&self, delta: Offset) -> Result<WheelSnapshot, WheelError> {
        let mut inner = self.lock()?;

        match inner.state.on_drag(delta) {
            Ok(total_seconds) => {
                debug!("Drag moved, duration now {}s", total_seconds);
                Ok(self.publish(&inner.state))
            }
            Err(e) => Err(Self::contract_breach("on_drag", e)),
        }
    }

    /// Pointer up or gesture cancelled
    pub fn end_drag(&self) -> Result<WheelSnapshot, WheelError> {
        let mut inner = self.lock()?;

        match inner.state.end_drag() {
            Ok(()) => {
                debug!("Drag ended at {}", inner.state.time());
                Ok(self.publish(&inner.state))
            }
            Err(e) => Err(Self::contract_breach("end_drag", e)),
        }
    }

    /// Start or pause the countdown
    pub fn toggle(&self) -> Result<(ToggleOutcome, WheelSnapshot), WheelError> {
        let mut inner = self.lock()?;

        let outcome = inner.state.toggle();
        match outcome {
            ToggleOutcome::Started => {
                if inner.job.is_none() {
                    let generation = inner.next_generation;
                    inner.next_generation += 1;
                    inner.job = Some(CountdownJob::spawn(
                        self.weak_self.clone(),
                        generation,
                        self.config.tick_interval,
                    ));
                    info!("Countdown started from {}", inner.state.time());
                } else {
                    warn!("Countdown already scheduled, not starting another");
                }
            }
            ToggleOutcome::Paused => {
                inner.cancel_job();
                info!("Countdown paused at {}", inner.state.time());
            }
            ToggleOutcome::Ignored => {
                debug!("Toggle ignored, nothing to count down");
            }
        }

        Ok((outcome, self.publish(&inner.state)))
    }

    /// Stop any countdown without touching the remaining time. Safe to repeat.
    pub fn stop(&self) -> Result<WheelSnapshot, WheelError> {
        let mut inner = self.lock()?;

        let was_running = inner.state.stop();
        let had_job = inner.cancel_job();
        if was_running || had_job {
            info!("Countdown stopped at {}", inner.state.time());
        }

        Ok(self.publish(&inner.state))
    }

    /// Cancel pending work before the control is torn down
    pub fn shutdown(&self) -> Result<(), WheelError> {
        self.stop()?;
        info!("Wheel shut down");
        Ok(())
    }

    /// Apply one tick from the countdown job identified by `generation`.
    ///
    /// Ticks from a job that is no longer owned are ignored.
    pub(crate) fn countdown_tick(&self, generation: u64) -> Result<TickOutcome, WheelError> {
        let mut inner = self.lock()?;

        if inner.job.as_ref().map(CountdownJob::generation) != Some(generation) {
            debug!("Ignoring tick from stale countdown job #{}", generation);
            return Ok(TickOutcome::Idle);
        }

        let outcome = inner.state.tick(self.config.radius);
        match outcome {
            TickOutcome::Continue => {
                debug!("Countdown tick, {} remaining", inner.state.time());
            }
            TickOutcome::Expired => {
                info!("Countdown reached zero");
                if let Some(job) = inner.job.take() {
                    job.finish();
                }
            }
            TickOutcome::Idle => {
                warn!("Countdown job #{} owned by an idle wheel, releasing it", generation);
                if let Some(job) = inner.job.take() {
                    job.finish();
                }
            }
        }

        self.publish(&inner.state);
        Ok(outcome)
    }

    fn lock(&self) -> Result<MutexGuard<'_, WheelInner>, WheelError> {
        self.inner
            .lock()
            .map_err(|e| WheelError::LockPoisoned(e.to_string()))
    }

    /// Notify snapshot watchers
    fn publish(&self, state: &TickWheelState) -> WheelSnapshot {
        let snapshot = WheelSnapshot::capture(state);
        if let Err(e) = self.snapshot_tx.send(snapshot.clone()) {
            warn!("Failed to send wheel snapshot: {}", e);
        }
        snapshot
    }

    fn contract_breach(operation: &str, e: WheelError) -> WheelError {
        error!("{} called out of order: {}", operation, e);
        e
    }
}
