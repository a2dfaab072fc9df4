//! Parallelogram primitive.

use glam::Vec3A;

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;

/// Parallelogram patch spanned by two edges from a corner point.
///
/// Built from three corners: the shared corner and the far end of each edge.
/// The cached `w` vector turns a plane hit into the patch coordinates (a, b)
/// with two dot products.
#[derive(Debug, Clone, Copy)]
pub struct Quad {
    q: Vec3A,
    u: Vec3A,
    v: Vec3A,
    w: Vec3A,
    normal: Vec3A,
    d: f32,
}

impl Quad {
    /// Create a parallelogram from corner `p0` and adjacent corners `p1`, `p2`.
    pub fn new(p0: Vec3A, p1: Vec3A, p2: Vec3A) -> Self {
        let u = p1 - p0;
        let v = p2 - p0;

        let n = u.cross(v);
        let w = n / n.dot(n);
        let normal = n.normalize();

        Self {
            q: p0,
            u,
            v,
            w,
            normal,
            d: normal.dot(p0),
        }
    }
}

impl Hittable for Quad {
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut Hit) -> bool {
        let denom = self.normal.dot(r.direction);

        // Ray parallel to the supporting plane
        if denom.abs() < 1e-8 {
            return false;
        }

        let t = (self.d - self.normal.dot(r.origin)) / denom;
        if !ray_t.surrounds(t) {
            return false;
        }

        // Patch coordinates of the plane hit; the boundary itself is excluded
        let p = r.at(t) - self.q;
        let a = self.w.dot(p.cross(self.v));
        let b = self.w.dot(self.u.cross(p));

        if !(0.0 < a && a < 1.0 && 0.0 < b && b < 1.0) {
            return false;
        }

        rec.t = t;
        rec.set_face_normal(r, self.normal);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Interval = Interval {
        min: 1e-3,
        max: f32::INFINITY,
    };

    fn unit_quad() -> Quad {
        // Unit square in the z = 0 plane, normal +Z
        Quad::new(
            Vec3A::ZERO,
            Vec3A::new(1.0, 0.0, 0.0),
            Vec3A::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_hit_center_front() {
        let quad = unit_quad();
        let ray = Ray::new(Vec3A::new(0.5, 0.5, 10.0), Vec3A::new(0.0, 0.0, -1.0));

        let mut rec = Hit::NONE;
        assert!(quad.hit(&ray, EPS, &mut rec));
        assert!((rec.t - 10.0).abs() < 1e-5);
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3A::new(0.0, 0.0, 1.0));
        assert!((ray.at(rec.t) - Vec3A::new(0.5, 0.5, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_hit_center_back() {
        let quad = unit_quad();
        let ray = Ray::new(Vec3A::new(0.5, 0.5, -10.0), Vec3A::new(0.0, 0.0, 1.0));

        let mut rec = Hit::NONE;
        assert!(quad.hit(&ray, EPS, &mut rec));
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3A::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_boundary_excluded() {
        let quad = unit_quad();
        let down = Vec3A::new(0.0, 0.0, -1.0);

        // Corner and edge hits land exactly on a = 0 or b = 1 and are rejected
        for origin in [
            Vec3A::new(0.0, 0.0, 10.0),
            Vec3A::new(0.0, 0.5, 10.0),
            Vec3A::new(0.5, 1.0, 10.0),
            Vec3A::new(1.0, 1.0, 10.0),
        ] {
            let mut rec = Hit::NONE;
            assert!(!quad.hit(&Ray::new(origin, down), EPS, &mut rec));
        }

        let mut rec = Hit::NONE;
        let inside = Ray::new(Vec3A::new(0.01, 0.99, 10.0), down);
        assert!(quad.hit(&inside, EPS, &mut rec));
    }

    #[test]
    fn test_outside_patch_missed() {
        let quad = unit_quad();
        let ray = Ray::new(Vec3A::new(1.5, 0.5, 10.0), Vec3A::new(0.0, 0.0, -1.0));

        let mut rec = Hit::NONE;
        assert!(!quad.hit(&ray, EPS, &mut rec));
    }

    #[test]
    fn test_parallel_ray_missed() {
        let quad = unit_quad();
        let ray = Ray::new(Vec3A::new(0.5, 0.5, 1.0), Vec3A::new(1.0, 0.0, 0.0));

        let mut rec = Hit::NONE;
        assert!(!quad.hit(&ray, EPS, &mut rec));
    }

    #[test]
    fn test_skewed_parallelogram() {
        // Non-rectangular patch; the (a, b) projection still accepts the center
        let quad = Quad::new(
            Vec3A::ZERO,
            Vec3A::new(2.0, 0.0, 0.0),
            Vec3A::new(1.0, 1.0, 0.0),
        );
        let center = Vec3A::new(1.5, 0.5, 0.0);
        let ray = Ray::new(center + Vec3A::new(0.0, 0.0, 5.0), Vec3A::new(0.0, 0.0, -1.0));

        let mut rec = Hit::NONE;
        assert!(quad.hit(&ray, EPS, &mut rec));
        assert!((rec.t - 5.0).abs() < 1e-5);
    }
}
