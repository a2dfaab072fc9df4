//! Ray-surface intersection records.
//!
//! Defines the Hit record shared by all primitives and the Hittable trait
//! they implement.

use glam::Vec3A;

use crate::interval::Interval;
use crate::ray::Ray;

/// Ray-surface intersection information.
///
/// Materials are not stored here; the scene keeps a material reference per
/// primitive and the intersector reports it alongside the record.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Surface normal at the intersection point, unit length, oriented
    /// against the incoming ray
    pub normal: Vec3A,
    /// True if the ray arrived from the side the geometric normal faces
    pub front_face: bool,
}

impl Hit {
    /// Sentinel "no intersection" record; t is infinite so any real hit is nearer.
    pub const NONE: Hit = Hit {
        t: f32::INFINITY,
        normal: Vec3A::ZERO,
        front_face: false,
    };

    /// Set the surface normal and record which face was hit.
    ///
    /// `outward_normal` must be unit length.
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3A) {
        self.front_face = r.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for primitives that can be intersected by rays.
pub trait Hittable {
    /// Test for ray intersection strictly inside the given parameter range.
    ///
    /// Returns true if hit, updating the record with intersection details.
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut Hit) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_normal_orientation() {
        let mut rec = Hit::NONE;
        let outward = Vec3A::new(0.0, 0.0, 1.0);

        // Ray against the normal hits the front face
        let toward = Ray::new(Vec3A::new(0.0, 0.0, 5.0), Vec3A::new(0.0, 0.0, -1.0));
        rec.set_face_normal(&toward, outward);
        assert!(rec.front_face);
        assert_eq!(rec.normal, outward);

        // Ray along the normal hits the back face, normal flips
        let along = Ray::new(Vec3A::new(0.0, 0.0, -5.0), Vec3A::new(0.0, 0.0, 1.0));
        rec.set_face_normal(&along, outward);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -outward);
    }

    #[test]
    fn test_no_hit_sentinel() {
        assert_eq!(Hit::NONE.t, f32::INFINITY);
        assert!(!Hit::NONE.front_face);
    }
}
