//! Tick Wheel - A drag-to-set countdown wheel
//!
//! This library turns drag gestures around a circular dial into a duration
//! and counts it down, exposing the needle angle, remaining time and running
//! flag to whatever renders the dial.

pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::{create_router, ServerState};
pub use config::{Config, WheelConfig};
pub use error::WheelError;
pub use geometry::{Offset, WheelPosition};
pub use state::{TickWheel, TickWheelState, WheelSnapshot};
pub use utils::signals::shutdown_signal;
