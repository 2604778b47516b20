//! Touch/mouse gesture primitives.

use super::Observer;
use crate::linalg::Matrix;

impl Observer {
    /// Rotate the user's body clockwise in the xy-plane by `theta` radians
    /// (so the scenery appears to turn counterclockwise), post-multiplying
    /// onto the placement.
    pub fn rotate(&mut self, theta: f64) {
        let increment = Matrix::rotation(0.0, 0.0, -theta);
        self.placement = increment.product(&self.placement);
    }

    /// Toggle motion: stash the current speed and stop, or resume it.
    pub fn tap(&mut self) {
        if self.speed != 0.0 {
            self.paused_speed = self.speed;
            self.speed = 0.0;
        } else {
            std::mem::swap(&mut self.speed, &mut self.paused_speed);
        }
    }
}
