//! Circular kinematic body shared by the player and enemies

use glam::{Vec2, Vec3};

use crate::consts::BOARD_EXTENT;

/// A filled circle that moves with constant velocity
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Vec3,
}

impl Body {
    pub fn new(radius: f32, pos: Vec2, color: Vec3) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            color,
        }
    }

    /// Advance position by `vel * dt`. No bounds checking.
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// If the coordinate on `axis` (0 = x, 1 = y) has left the board,
    /// negate it. Returns true when the coordinate was reflected.
    ///
    /// This mirrors through the origin rather than teleporting to the
    /// opposite edge, so a body leaving at x = 1.02 comes back at x = -1.02.
    pub fn wrap_axis(&mut self, axis: usize) -> bool {
        let c = self.pos[axis];
        if c > BOARD_EXTENT || c < -BOARD_EXTENT {
            self.pos[axis] = -c;
            true
        } else {
            false
        }
    }

    /// Squared distance from the body center to a point
    #[inline]
    pub fn distance_squared_to(&self, point: Vec2) -> f32 {
        self.pos.distance_squared(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate() {
        let mut body = Body::new(0.1, Vec2::new(0.5, -0.5), Vec3::ONE);
        body.vel = Vec2::new(1.0, 2.0);
        body.integrate(0.25);
        assert!((body.pos - Vec2::new(0.75, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_integrate_ignores_bounds() {
        let mut body = Body::new(0.1, Vec2::new(0.9, 0.0), Vec3::ONE);
        body.vel = Vec2::new(10.0, 0.0);
        body.integrate(1.0);
        assert!((body.pos.x - 10.9).abs() < 1e-5);
    }

    #[test]
    fn test_wrap_axis_reflects_through_origin() {
        let mut body = Body::new(0.1, Vec2::new(1.05, -0.3), Vec3::ONE);
        assert!(body.wrap_axis(0));
        assert!(!body.wrap_axis(1));
        assert_eq!(body.pos, Vec2::new(-1.05, -0.3));
    }

    #[test]
    fn test_wrap_axis_boundary_is_inside() {
        let mut body = Body::new(0.1, Vec2::new(1.0, -1.0), Vec3::ONE);
        assert!(!body.wrap_axis(0));
        assert!(!body.wrap_axis(1));
    }
}
