//! Read-only snapshot of the wheel published to observers

use serde::{Deserialize, Serialize};

use super::wheel_state::{TickWheelState, WheelPhase};

/// Needle position as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Needle {
    pub x: f64,
    pub y: f64,
    /// Angle around the dial centre, in `(-180, 180]`
    pub degrees: f64,
}

/// Everything a presentation layer needs to draw the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelSnapshot {
    pub total_seconds: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// Remaining time as `MM:SS`
    pub time: String,
    pub is_dragging: bool,
    pub is_running: bool,
    pub phase: WheelPhase,
    pub needle: Option<Needle>,
}

impl WheelSnapshot {
    /// Capture the current state of a wheel
    pub fn capture(state: &TickWheelState) -> Self {
        Self {
            total_seconds: state.total_seconds(),
            minutes: state.minutes(),
            seconds: state.seconds(),
            time: state.time(),
            is_dragging: state.is_dragging(),
            is_running: state.is_running(),
            phase: state.phase(),
            needle: state.end_position().map(|position| Needle {
                x: position.current.x,
                y: position.current.y,
                degrees: position.angle(),
            }),
        }
    }
}

impl Default for WheelSnapshot {
    fn default() -> Self {
        Self::capture(&TickWheelState::new())
    }
}

impl From<&TickWheelState> for WheelSnapshot {
    fn from(state: &TickWheelState) -> Self {
        Self::capture(state)
    }
}
