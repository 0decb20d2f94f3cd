//! Background tasks module
//!
//! This module contains the countdown task driving a wheel and observers of
//! its published state.

pub mod countdown;
pub mod phase_logger;

// Re-export main types and functions
pub use countdown::{countdown_task, CountdownJob};
pub use phase_logger::phase_logger_task;
