//! Observer kinematics: forward motion, gestures, speed control.

mod gestures;
mod kinematics;

#[cfg(test)]
mod tests;

use crate::linalg::Matrix;

/// Top speed in (curvature-appropriate) length units per second.
pub const MAX_SPEED: f64 = 0.25;
/// Granularity of `accelerate`/`decelerate` steps.
pub const SPEED_INCREMENT: f64 = 0.02;
/// Per-frame time step is clamped to this before computing the motion increment.
pub const MAX_DT: f64 = 0.1;

/// The user's placement and forward speed within the manifold.
#[derive(Clone, Copy, Debug)]
pub struct Observer {
    pub placement: Matrix,
    pub speed: f64,
    pub paused_speed: f64,
}

impl Observer {
    pub fn at_origin() -> Observer {
        Observer {
            placement: Matrix::identity(),
            speed: 0.0,
            paused_speed: 0.0,
        }
    }

    pub fn accelerate(&mut self) {
        self.speed = (self.speed + SPEED_INCREMENT).min(MAX_SPEED);
    }

    pub fn decelerate(&mut self) {
        self.speed = (self.speed - SPEED_INCREMENT).max(0.0);
    }
}
