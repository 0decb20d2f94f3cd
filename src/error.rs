//! Error types for the wheel controller

use thiserror::Error;

/// Errors raised by the wheel's entry points.
///
/// `NotDragging` and `MissingDragPosition` are caller-contract breaches: the
/// presentation layer forwarded events out of order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("drag update received while no drag is in progress")]
    NotDragging,
    #[error("drag ended without a drag position; start_drag was skipped")]
    MissingDragPosition,
    #[error("failed to lock wheel state: {0}")]
    LockPoisoned(String),
}

impl WheelError {
    /// Whether the error stems from events delivered out of order
    pub fn is_contract_breach(&self) -> bool {
        matches!(self, WheelError::NotDragging | WheelError::MissingDragPosition)
    }
}
