//! Dial geometry: offsets, angles and their mapping onto the 60-unit wheel

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Number of units on one full turn of the wheel
pub const UNITS_PER_TURN: u32 = 60;

/// Degrees covered by a single unit of the wheel
pub const DEGREES_PER_UNIT: f64 = 360.0 / UNITS_PER_TURN as f64;

/// Absorbs float noise when an angle sits exactly on a unit boundary
const BOUNDARY_EPSILON: f64 = 1e-9;

/// A 2D vector in rendering-plane units, relative to the dial centre
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    /// Create a new offset
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset at `radius` from the centre, pointing at `degrees`
    pub fn from_polar(radius: f64, degrees: f64) -> Self {
        let rad = degrees.to_radians();
        Self {
            x: radius * rad.cos(),
            y: radius * rad.sin(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Angle of `v` in degrees, in `(-180, 180]`.
///
/// 0° points along +x and angles grow counter-clockwise, as with `atan2(y, x)`.
/// The centre itself has no direction and is reported as 0°.
pub fn angle_of(v: Offset) -> f64 {
    if v.is_zero() {
        return 0.0;
    }
    let degrees = v.y.atan2(v.x).to_degrees();
    // atan2 returns -π for a negative-zero y on the negative x axis
    if degrees <= -180.0 {
        180.0
    } else {
        degrees
    }
}

/// Map an angle onto the wheel's unit in `[0, 60)`.
///
/// `-180°` is unit 0 and the sweep runs counter-clockwise; each unit covers
/// 6°. Angles inside a unit round down, so the last unit before the seam is
/// 59 and only the seam itself (180°) wraps back to 0.
pub fn degrees_to_seconds(theta: f64) -> u32 {
    let units = ((theta + 180.0) / DEGREES_PER_UNIT + BOUNDARY_EPSILON).floor() as i64;
    units.rem_euclid(UNITS_PER_TURN as i64) as u32
}

/// Needle offset at `radius` for the position of `total_seconds` within its minute
pub fn seconds_to_offset(total_seconds: u32, radius: f64) -> Offset {
    Offset::from_polar(radius, seconds_to_degrees(total_seconds))
}

/// Dial angle of `total_seconds` within its minute, in `[-180, 174]`
pub fn seconds_to_degrees(total_seconds: u32) -> f64 {
    (total_seconds % UNITS_PER_TURN) as f64 * DEGREES_PER_UNIT - 180.0
}
