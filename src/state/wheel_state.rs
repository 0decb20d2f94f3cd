//! Tick wheel state machine
//!
//! Converts drag gestures into an accumulated duration and applies countdown
//! ticks. This type is synchronous and owns no timers: every transition
//! reports what happened so the owning controller can schedule or cancel the
//! countdown job accordingly.

use serde::{Deserialize, Serialize};

use crate::{
    error::WheelError,
    geometry::{degrees_to_seconds, seconds_to_offset, Offset, WheelPosition},
};

/// Needle angle beyond which a move to the opposite side crosses the seam
const SEAM_THRESHOLD: f64 = 90.0;

/// Coarse state of the wheel, derived from the drag and running flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelPhase {
    Idle,
    Dragging,
    Running,
}

impl WheelPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            WheelPhase::Idle => "idle",
            WheelPhase::Dragging => "dragging",
            WheelPhase::Running => "running",
        }
    }
}

impl std::fmt::Display for WheelPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of pressing the start/stop button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Countdown should start
    Started,
    /// Countdown was paused with its remaining time kept
    Paused,
    /// Nothing to count down
    Ignored,
}

/// Result of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Time remains, keep ticking
    Continue,
    /// The countdown reached zero
    Expired,
    /// The wheel was not running; nothing changed
    Idle,
}

/// State of a single tick wheel control
#[derive(Debug, Clone, Default)]
pub struct TickWheelState {
    total_seconds: u32,
    is_dragging: bool,
    end_position: Option<WheelPosition>,
    running: bool,
}

impl TickWheelState {
    /// Create an idle wheel set to zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining duration in seconds
    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn minutes(&self) -> u32 {
        self.total_seconds / 60
    }

    pub fn seconds(&self) -> u32 {
        self.total_seconds % 60
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Last drag sample, or the needle position while idle or counting down
    pub fn end_position(&self) -> Option<WheelPosition> {
        self.end_position
    }

    /// Needle angle in degrees, if the needle is shown
    pub fn needle_degrees(&self) -> Option<f64> {
        self.end_position.map(|position| position.angle())
    }

    pub fn phase(&self) -> WheelPhase {
        if self.is_dragging {
            WheelPhase::Dragging
        } else if self.running {
            WheelPhase::Running
        } else {
            WheelPhase::Idle
        }
    }

    /// Remaining time as zero-padded `MM:SS`
    pub fn time(&self) -> String {
        format!("{:02}:{:02}", self.minutes(), self.seconds())
    }

    /// Remaining time as plain seconds, e.g. `75s`
    pub fn compact_time(&self) -> String {
        format!("{}s", self.total_seconds)
    }

    /// Begin a drag at `point`, relative to the dial centre.
    ///
    /// Returns `true` if a running countdown was interrupted; the caller must
    /// cancel its job.
    pub fn start_drag(&mut self, point: Offset) -> bool {
        let interrupted = self.stop();
        self.is_dragging = true;
        self.end_position = Some(WheelPosition::at(point));
        interrupted
    }

    /// Move the current drag by `delta` and recompute the duration.
    ///
    /// Crossing the seam at ±180° adds a minute going counter-clockwise and
    /// removes one (never below zero) going clockwise.
    pub fn on_drag(&mut self, delta: Offset) -> Result<u32, WheelError> {
        if !self.is_dragging {
            return Err(WheelError::NotDragging);
        }
        let prev = self.end_position.ok_or(WheelError::MissingDragPosition)?;
        let next = prev + delta;

        let prev_theta = prev.angle();
        let next_theta = next.angle();
        let minutes = self.minutes();
        let next_minutes = if prev_theta > SEAM_THRESHOLD && next_theta < -SEAM_THRESHOLD {
            minutes.saturating_add(1)
        } else if prev_theta < -SEAM_THRESHOLD && next_theta > SEAM_THRESHOLD {
            minutes.saturating_sub(1)
        } else {
            minutes
        };

        self.total_seconds = next_minutes
            .saturating_mul(60)
            .saturating_add(degrees_to_seconds(next_theta));
        self.end_position = Some(next);
        Ok(self.total_seconds)
    }

    /// Finish the current drag, keeping the needle where it was released
    pub fn end_drag(&mut self) -> Result<(), WheelError> {
        if self.end_position.is_none() {
            return Err(WheelError::MissingDragPosition);
        }
        self.is_dragging = false;
        Ok(())
    }

    /// Start or pause the countdown
    pub fn toggle(&mut self) -> ToggleOutcome {
        if self.running {
            self.running = false;
            return ToggleOutcome::Paused;
        }
        if self.total_seconds == 0 {
            return ToggleOutcome::Ignored;
        }
        // a countdown never runs under the user's finger
        self.is_dragging = false;
        self.running = true;
        ToggleOutcome::Started
    }

    /// Apply one countdown tick, moving the needle to the remaining time at `radius`
    pub fn tick(&mut self, radius: f64) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.total_seconds = self.total_seconds.saturating_sub(1);
        if self.total_seconds == 0 {
            self.end_position = None;
            self.running = false;
            return TickOutcome::Expired;
        }
        self.end_position = Some(WheelPosition::at(seconds_to_offset(self.total_seconds, radius)));
        TickOutcome::Continue
    }

    /// Stop counting down. Returns `true` if the wheel was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::angle_of;

    const RADIUS: f64 = 100.0;

    /// Drag along the dial through the given needle angles
    fn dial(state: &mut TickWheelState, path: &[f64]) {
        state.start_drag(Offset::from_polar(RADIUS, path[0]));
        for &deg in &path[1..] {
            let current = state.end_position().unwrap().current;
            state.on_drag(Offset::from_polar(RADIUS, deg) - current).unwrap();
        }
    }

    fn assert_invariants(state: &TickWheelState) {
        assert!(!(state.is_dragging() && state.is_running()));
        if state.end_position().is_none() {
            assert_eq!(state.total_seconds(), 0);
            assert!(!state.is_dragging());
            assert!(!state.is_running());
        }
    }

    #[test]
    fn new_wheel_is_idle_at_zero() {
        let state = TickWheelState::new();
        assert_eq!(state.total_seconds(), 0);
        assert_eq!(state.phase(), WheelPhase::Idle);
        assert!(state.end_position().is_none());
        assert_eq!(state.time(), "00:00");
        assert_invariants(&state);
    }

    #[test]
    fn drag_within_a_minute_sets_seconds() {
        let mut state = TickWheelState::new();
        dial(&mut state, &[-179.5, -170.0, -159.0]);
        assert_eq!(state.total_seconds(), 3);
        assert_eq!(state.phase(), WheelPhase::Dragging);
        assert_invariants(&state);
    }

    #[test]
    fn forward_seam_crossing_adds_one_minute() {
        let mut state = TickWheelState::new();
        dial(&mut state, &[170.0, -170.0]);
        assert_eq!(state.minutes(), 1);
        assert_eq!(state.seconds(), degrees_to_seconds(-170.0));
        assert_eq!(state.total_seconds(), 61);
    }

    #[test]
    fn circling_accumulates_minutes() {
        let mut state = TickWheelState::new();
        dial(
            &mut state,
            &[-150.0, -90.0, 0.0, 90.0, 170.0, -170.0, -90.0, 0.0, 90.0, 170.0, -170.0, -150.0],
        );
        assert_eq!(state.total_seconds(), 2 * 60 + 5);
        assert_eq!(state.time(), "02:05");
    }

    #[test]
    fn backward_seam_crossing_removes_one_minute() {
        let mut state = TickWheelState::new();
        dial(&mut state, &[170.0, -170.0, 170.0]);
        assert_eq!(state.minutes(), 0);
        assert_eq!(state.total_seconds(), degrees_to_seconds(170.0));
    }

    #[test]
    fn backward_crossing_at_minute_zero_floors() {
        let mut state = TickWheelState::new();
        dial(&mut state, &[-170.0, 170.0]);
        assert_eq!(state.minutes(), 0);
        assert_eq!(state.total_seconds(), 58);
    }

    #[test]
    fn drag_through_centre_reads_as_zero_degrees() {
        let mut state = TickWheelState::new();
        state.start_drag(Offset::new(10.0, 0.0));
        state.on_drag(Offset::new(-10.0, 0.0)).unwrap();
        assert_eq!(state.total_seconds(), degrees_to_seconds(0.0));
    }

    #[test]
    fn drag_update_requires_a_drag() {
        let mut state = TickWheelState::new();
        assert_eq!(state.on_drag(Offset::new(1.0, 1.0)), Err(WheelError::NotDragging));
        assert!(state.end_position().is_none());
    }

    #[test]
    fn end_drag_without_start_is_a_contract_breach() {
        let mut state = TickWheelState::new();
        let err = state.end_drag().unwrap_err();
        assert_eq!(err, WheelError::MissingDragPosition);
        assert!(err.is_contract_breach());
    }

    #[test]
    fn end_drag_keeps_needle_and_does_not_start() {
        let mut state = TickWheelState::new();
        dial(&mut state, &[-179.5, -159.0]);
        let released = state.end_position();
        state.end_drag().unwrap();
        assert_eq!(state.phase(), WheelPhase::Idle);
        assert_eq!(state.end_position(), released);
        assert_eq!(state.total_seconds(), 3);
    }

    #[test]
    fn toggle_at_zero_is_ignored() {
        let mut state = TickWheelState::new();
        assert_eq!(state.toggle(), ToggleOutcome::Ignored);
        assert!(!state.is_running());
        assert_eq!(state.tick(RADIUS), TickOutcome::Idle);
        assert_eq!(state.total_seconds(), 0);
    }

    #[test]
    fn toggle_twice_pauses_without_losing_time() {
        let mut state = TickWheelState::new();
        dial(&mut state, &[170.0, -170.0]);
        state.end_drag().unwrap();
        assert_eq!(state.toggle(), ToggleOutcome::Started);
        assert_eq!(state.toggle(), ToggleOutcome::Paused);
        assert_eq!(state.total_seconds(), 61);
        assert!(state.end_position().is_some());
    }

    #[test]
    fn toggle_while_dragging_releases_the_drag() {
        let mut state = TickWheelState::new();
        dial(&mut state, &[-179.5, -159.0]);
        assert_eq!(state.toggle(), ToggleOutcome::Started);
        assert!(!state.is_dragging());
        assert_invariants(&state);
    }

    #[test]
    fn countdown_from_three_expires_after_three_ticks() {
        let mut state = TickWheelState::new();
        dial(&mut state, &[-179.5, -159.0]);
        state.end_drag().unwrap();
        state.toggle();

        assert_eq!(state.tick(RADIUS), TickOutcome::Continue);
        assert_eq!(state.total_seconds(), 2);
        let needle = state.end_position().unwrap().current;
        assert_eq!(degrees_to_seconds(angle_of(needle)), 2);

        assert_eq!(state.tick(RADIUS), TickOutcome::Continue);
        assert_eq!(state.tick(RADIUS), TickOutcome::Expired);
        assert_eq!(state.total_seconds(), 0);
        assert!(state.end_position().is_none());
        assert!(!state.is_running());

        assert_eq!(state.tick(RADIUS), TickOutcome::Idle);
        assert_eq!(state.total_seconds(), 0);
        assert_invariants(&state);
    }

    #[test]
    fn start_drag_interrupts_countdown() {
        let mut state = TickWheelState::new();
        dial(&mut state, &[-179.5, -159.0]);
        state.end_drag().unwrap();
        state.toggle();
        assert!(state.start_drag(Offset::new(0.0, 50.0)));
        assert_eq!(state.phase(), WheelPhase::Dragging);
        assert_eq!(state.tick(RADIUS), TickOutcome::Idle);
        assert_eq!(state.total_seconds(), 3);
        assert_invariants(&state);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut state = TickWheelState::new();
        dial(&mut state, &[-179.5, -159.0]);
        state.end_drag().unwrap();
        state.toggle();
        assert!(state.stop());
        assert!(!state.stop());
        assert_eq!(state.total_seconds(), 3);
    }

    #[test]
    fn time_formats() {
        let mut state = TickWheelState::new();
        dial(&mut state, &[-150.0, 0.0, 170.0, -170.0]);
        assert_eq!(state.time(), "01:01");
        assert_eq!(state.compact_time(), "61s");
    }
}
