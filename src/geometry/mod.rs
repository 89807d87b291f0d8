//! Pure circle/arc geometry for radial controls.
//!
//! Angle convention: 0 rad points along +x and positive angles sweep
//! clockwise in y-down screen coordinates. Both [`Circle::point_at`] and the
//! path builder in [`crate::render::path`] share this convention, so rendered
//! arcs and thumb positions agree.
//!
//! Angles are never normalized here: an end angle beyond [`FULL_TURN`] is a
//! legal encoding of multi-turn or wrapped progress and is interpreted by the
//! rendering layers.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{ArcDialError, ArcDialResult};

/// One full turn in radians.
pub const FULL_TURN: f64 = 2.0 * PI;

/// Angle at a slider's minimum value, before the initial-angle offset.
pub const CIRCLE_MIN_ANGLE: f64 = 0.0;

/// Angle at a slider's maximum value (single-round), before the initial-angle
/// offset.
pub const CIRCLE_MAX_ANGLE: f64 = FULL_TURN;

/// Screen-space reference offset placing a slider's zero at the top of the
/// dial. Hosts add this when deriving start/end angles from values.
pub const CIRCLE_INITIAL_ANGLE: f64 = -FRAC_PI_2;

/// A circle described by its center and radius.
///
/// The radius must be positive; a zero or negative radius is a contract
/// violation, not a recoverable condition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Circle {
    /// Center point.
    pub origin: Point,
    /// Radius, > 0.
    pub radius: f64,
}

impl Circle {
    /// Create a circle.
    pub fn new(origin: impl Into<Point>, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be > 0");
        Self {
            origin: origin.into(),
            radius,
        }
    }

    /// Point on the circle at `angle`.
    ///
    /// The result lies at exactly `radius` from `origin` for any finite
    /// angle, including angles outside `[0, 2π)`.
    pub fn point_at(&self, angle: f64) -> Point {
        self.origin + Vec2::new(angle.cos(), angle.sin()) * self.radius
    }
}

/// A sweep over a circle from `start_angle` to `end_angle`, in radians.
///
/// There is no ordering constraint between the two angles, and `end_angle`
/// may exceed [`FULL_TURN`] to represent progress that wraps past a full
/// turn. Rendering splits such arcs at the wrap boundary.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Arc {
    /// The circle the sweep lies on.
    pub circle: Circle,
    /// Sweep start, radians.
    pub start_angle: f64,
    /// Sweep end, radians.
    pub end_angle: f64,
}

impl Arc {
    /// Create an arc.
    pub fn new(circle: Circle, start_angle: f64, end_angle: f64) -> Self {
        Self {
            circle,
            start_angle,
            end_angle,
        }
    }

    /// The full-circle arc, `[0, 2π]`.
    pub fn full_circle(circle: Circle) -> Self {
        Self::new(circle, CIRCLE_MIN_ANGLE, CIRCLE_MAX_ANGLE)
    }

    /// Signed sweep, `end_angle - start_angle`.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Return `true` when the arc extends past one full turn.
    pub fn wraps(&self) -> bool {
        self.end_angle > FULL_TURN
    }

    /// Point on the circle at `start_angle`.
    pub fn start_point(&self) -> Point {
        self.circle.point_at(self.start_angle)
    }

    /// Point on the circle at `end_angle`.
    pub fn end_point(&self) -> Point {
        self.circle.point_at(self.end_angle)
    }
}

/// A validated value interval, optionally spanning several rounds of the
/// dial.
///
/// `rounds > 1` describes a multi-turn slider: the value range maps onto
/// `rounds` full turns, so derived end angles exceed [`FULL_TURN`] and the
/// renderer's wrap-around handling takes over.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interval {
    /// Minimum value (inclusive).
    pub min: f64,
    /// Maximum value (inclusive), > `min`.
    pub max: f64,
    /// Number of full turns covered by `[min, max]`, >= 1.
    pub rounds: u32,
}

impl Interval {
    /// Create a validated interval with `max > min` and `rounds >= 1`.
    pub fn new(min: f64, max: f64, rounds: u32) -> ArcDialResult<Self> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(ArcDialError::validation("interval bounds must be finite"));
        }
        if max <= min {
            return Err(ArcDialError::validation("interval max must be > min"));
        }
        if rounds == 0 {
            return Err(ArcDialError::validation("interval rounds must be >= 1"));
        }
        Ok(Self { min, max, rounds })
    }

    /// Map a value in `[min, max]` to a sweep angle in
    /// `[0, rounds * FULL_TURN]`.
    ///
    /// The mapping is linear and is not clamped: values outside the interval
    /// produce angles outside the sweep range, mirroring how out-of-range
    /// progress is carried rather than silently normalized.
    pub fn angle_for(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min) * f64::from(self.rounds) * FULL_TURN
    }

    /// Inverse of [`Interval::angle_for`].
    pub fn value_for(&self, angle: f64) -> f64 {
        self.min + angle / (f64::from(self.rounds) * FULL_TURN) * (self.max - self.min)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry.rs"]
mod tests;
