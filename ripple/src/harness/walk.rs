//! Coordinate-stepping strategies for the demo.

use std::f64::consts::TAU;

use crate::config::{CycleConfig, RippleConfig, WalkMode};

/// One point on a walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkPoint {
    /// Noise-space x.
    pub x: f64,
    /// Noise-space y.
    pub y: f64,
    /// Walk progress shown in the stats line: `x` for lines, the already-advanced
    /// angle for cycles.
    pub phase: f64,
}

/// A source of successive sample coordinates.
pub trait NoiseWalk {
    /// Return the current point and advance.
    fn next_point(&mut self) -> WalkPoint;
}

/// Walks `x = step * frame` along `y = 0`.
///
/// `x` is recomputed from the frame counter each time rather than accumulated,
/// so long runs do not drift.
#[derive(Debug, Clone)]
pub struct LineWalk {
    step: f64,
    frame: u64,
}

impl LineWalk {
    /// Start at `x = 0`.
    #[must_use]
    pub const fn new(step: f64) -> Self {
        Self { step, frame: 0 }
    }
}

impl NoiseWalk for LineWalk {
    fn next_point(&mut self) -> WalkPoint {
        let x = self.step * self.frame as f64;
        self.frame += 1;
        WalkPoint { x, y: 0.0, phase: x }
    }
}

/// Traces a circle in noise space, starting at the top (`theta = 0`).
///
/// The angle wraps at `2π`, so the sampled values loop seamlessly.
#[derive(Debug, Clone)]
pub struct CycleWalk {
    center_x: f64,
    center_y: f64,
    radius: f64,
    step: f64,
    theta: f64,
}

impl CycleWalk {
    /// Create a walk over `circle`, advancing `step` radians per frame.
    #[must_use]
    pub const fn new(circle: &CycleConfig, step: f64) -> Self {
        Self {
            center_x: circle.center_x,
            center_y: circle.center_y,
            radius: circle.radius,
            step,
            theta: 0.0,
        }
    }
}

impl NoiseWalk for CycleWalk {
    fn next_point(&mut self) -> WalkPoint {
        let theta = self.theta;
        let x = self.radius * theta.sin() + self.center_x;
        let y = self.radius * theta.cos() + self.center_y;
        self.theta = (theta + self.step).rem_euclid(TAU);
        WalkPoint {
            x,
            y,
            phase: self.theta,
        }
    }
}

/// The configured walk.
#[derive(Debug, Clone)]
pub enum Walk {
    /// See [`LineWalk`].
    Line(LineWalk),
    /// See [`CycleWalk`].
    Cycle(CycleWalk),
}

impl Walk {
    /// Build the walk selected by `config.mode`.
    #[must_use]
    pub const fn from_config(config: &RippleConfig) -> Self {
        match config.mode {
            WalkMode::Line => Self::Line(LineWalk::new(config.step)),
            WalkMode::Cycle => Self::Cycle(CycleWalk::new(&config.cycle, config.step)),
        }
    }
}

impl NoiseWalk for Walk {
    #[inline]
    fn next_point(&mut self) -> WalkPoint {
        match self {
            Self::Line(walk) => walk.next_point(),
            Self::Cycle(walk) => walk.next_point(),
        }
    }
}
