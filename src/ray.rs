//! Ray representation.
//!
//! A ray is the half-line r(t) = origin + t * direction used for every
//! intersection query in the tracer.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// The direction is not required to be unit length; intersection code
/// accounts for its magnitude.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vec3A,
    /// Direction vector of the ray.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::new(0.0, 0.0, 2.0));

        assert_eq!(ray.at(0.0), ray.origin);
        assert_eq!(ray.at(0.5), Vec3A::new(1.0, 2.0, 4.0));
        assert_eq!(ray.at(-1.0), Vec3A::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_ray_direction_not_normalized() {
        // at() scales with the direction magnitude
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 10.0, 0.0));
        assert_eq!(ray.at(1.0), Vec3A::new(0.0, 10.0, 0.0));
    }
}
