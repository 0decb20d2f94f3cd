//! Countdown background task

use std::{sync::Weak, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info};

use crate::state::{TickOutcome, TickWheel};

/// Handle to the one countdown task a wheel may own.
///
/// Dropping the handle aborts the task.
#[derive(Debug)]
pub struct CountdownJob {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl CountdownJob {
    /// Spawn a countdown for `wheel` ticking every `period`
    pub fn spawn(wheel: Weak<TickWheel>, generation: u64, period: Duration) -> Self {
        let handle = tokio::spawn(countdown_task(wheel, generation, period));
        Self {
            generation,
            handle: Some(handle),
        }
    }

    /// Identifies which job a tick belongs to
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Abort the task before its next tick
    pub fn cancel(mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Cancelling countdown job #{}", self.generation);
            handle.abort();
        }
    }

    /// Release a task that is already ending on its own
    pub fn finish(mut self) {
        self.handle.take();
    }
}

impl Drop for CountdownJob {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Background task that decrements the wheel once per `period` until it expires
pub async fn countdown_task(wheel: Weak<TickWheel>, generation: u64, period: Duration) {
    debug!("Starting countdown job #{} with period {:?}", generation, period);

    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let Some(current) = wheel.upgrade() else {
            debug!("Wheel dropped, ending countdown job #{}", generation);
            break;
        };

        match current.countdown_tick(generation) {
            Ok(TickOutcome::Continue) => {}
            Ok(TickOutcome::Expired) => {
                info!("Countdown job #{} finished", generation);
                break;
            }
            Ok(TickOutcome::Idle) => {
                debug!("Countdown job #{} is no longer current, stopping", generation);
                break;
            }
            Err(e) => {
                error!("Countdown job #{} failed to tick: {}", generation, e);
                break;
            }
        }
    }
}
