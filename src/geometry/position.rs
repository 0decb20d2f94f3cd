//! Drag samples on the wheel

use std::ops::Add;

use super::angle::{angle_of, Offset};

/// A drag sample: where the gesture started and where it is now.
///
/// Values are never updated in place; every drag update produces a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelPosition {
    pub start: Offset,
    pub current: Offset,
}

impl WheelPosition {
    /// A position whose gesture starts and rests at `point`
    pub fn at(point: Offset) -> Self {
        Self {
            start: point,
            current: point,
        }
    }

    /// Movement since the gesture started
    pub fn delta(&self) -> Offset {
        self.current - self.start
    }

    /// Direction of the movement since the gesture started
    pub fn theta(&self) -> f64 {
        angle_of(self.delta())
    }

    /// Needle angle of the current point around the dial centre
    pub fn angle(&self) -> f64 {
        angle_of(self.current)
    }

    /// Copy of this position advanced by `rhs`
    pub fn advanced(&self, rhs: Offset) -> Self {
        Self {
            start: self.start,
            current: self.current + rhs,
        }
    }
}

impl Add<Offset> for WheelPosition {
    type Output = WheelPosition;

    fn add(self, rhs: Offset) -> WheelPosition {
        self.advanced(rhs)
    }
}

/// First touch of a drag when no position exists yet
impl Add<Offset> for Option<WheelPosition> {
    type Output = WheelPosition;

    fn add(self, rhs: Offset) -> WheelPosition {
        match self {
            Some(position) => position.advanced(rhs),
            None => WheelPosition::at(rhs),
        }
    }
}
