//! Sphere primitive.
//!
//! Ray-sphere intersection via the half-b form of the quadratic formula.

use glam::Vec3A;

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;

/// Sphere defined by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point in world coordinates.
    pub center: Vec3A,
    /// Radius, always non-negative.
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere. Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut Hit) -> bool {
        let oc = self.center - r.origin;

        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root in range first, then the far one
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        let outward_normal = (r.at(root) - self.center) / self.radius;
        rec.set_face_normal(r, outward_normal);

        true
    }
}
