//! State management module
//!
//! This module contains the wheel state machine, the controller that owns it
//! and the snapshots it publishes.

pub mod snapshot;
pub mod tick_wheel;
pub mod wheel_state;

// Re-export main types
pub use snapshot::{Needle, WheelSnapshot};
pub use tick_wheel::TickWheel;
pub use wheel_state::{TickOutcome, TickWheelState, ToggleOutcome, WheelPhase};
