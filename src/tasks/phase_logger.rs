//! Phase logging background task

use tokio::sync::watch;
use tracing::{debug, info};

use crate::state::{WheelPhase, WheelSnapshot};

/// Background task that logs wheel phase changes as they are published
pub async fn phase_logger_task(mut snapshots: watch::Receiver<WheelSnapshot>) {
    info!("Starting phase logger task");

    let mut last_phase = snapshots.borrow().phase;

    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();

        if snapshot.phase == last_phase {
            debug!("Wheel updated: phase={}, time={}", snapshot.phase, snapshot.time);
            continue;
        }

        if last_phase == WheelPhase::Running
            && snapshot.phase == WheelPhase::Idle
            && snapshot.total_seconds == 0
        {
            info!("Countdown expired");
        } else {
            info!(
                "Wheel phase changed: {} -> {} at {}",
                last_phase, snapshot.phase, snapshot.time
            );
        }
        last_phase = snapshot.phase;
    }

    debug!("Snapshot channel closed, stopping phase logger");
}
