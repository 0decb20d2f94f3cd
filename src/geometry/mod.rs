//! Geometry module
//!
//! Pure dial geometry used by the wheel state machine.

pub mod angle;
pub mod position;

// Re-export main types
pub use angle::{angle_of, degrees_to_seconds, seconds_to_degrees, seconds_to_offset, Offset};
pub use position::WheelPosition;
