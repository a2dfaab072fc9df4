//! Scene description and nearest-hit query.
//!
//! The scene is a fixed, immutable set of primitives with parallel material
//! references into per-kind material arrays. Every worker constructs its own
//! instance and never mutates it.

use glam::Vec3A;

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::material::{Color, Dielectric, Lambertian, Light, MaterialRef, Metal};
use crate::quad::Quad;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Immutable scene: primitives, their material references, and the per-kind
/// material arrays those references index into.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Sphere primitives.
    pub spheres: Vec<Sphere>,
    /// Material reference per sphere, parallel to `spheres`.
    pub sphere_mats: Vec<MaterialRef>,
    /// Parallelogram primitives.
    pub quads: Vec<Quad>,
    /// Material reference per quad, parallel to `quads`.
    pub quad_mats: Vec<MaterialRef>,
    /// Diffuse material instances.
    pub lambertians: Vec<Lambertian>,
    /// Specular material instances.
    pub metals: Vec<Metal>,
    /// Refractive material instances.
    pub dielectrics: Vec<Dielectric>,
    /// Emissive material instances.
    pub lights: Vec<Light>,
}

impl Scene {
    /// The Cornell box: green and red side walls, white floor, ceiling and
    /// back wall, one area light, a mirror sphere and a glass sphere.
    pub fn cornell_box() -> Self {
        Self {
            spheres: vec![
                Sphere::new(Vec3A::new(405.0, 100.0, 405.0), 100.0),
                Sphere::new(Vec3A::new(150.0, 100.0, 150.0), 100.0),
            ],
            sphere_mats: vec![MaterialRef::Metal(0), MaterialRef::Dielectric(0)],
            quads: vec![
                Quad::new(
                    Vec3A::new(555.0, 0.0, 0.0),
                    Vec3A::new(555.0, 555.0, 0.0),
                    Vec3A::new(555.0, 0.0, 555.0),
                ),
                Quad::new(
                    Vec3A::new(0.0, 0.0, 0.0),
                    Vec3A::new(0.0, 555.0, 0.0),
                    Vec3A::new(0.0, 0.0, 555.0),
                ),
                Quad::new(
                    Vec3A::new(343.0, 554.0, 332.0),
                    Vec3A::new(213.0, 554.0, 332.0),
                    Vec3A::new(343.0, 554.0, 227.0),
                ),
                Quad::new(
                    Vec3A::new(0.0, 0.0, 0.0),
                    Vec3A::new(555.0, 0.0, 0.0),
                    Vec3A::new(0.0, 0.0, 555.0),
                ),
                Quad::new(
                    Vec3A::new(555.0, 555.0, 555.0),
                    Vec3A::new(0.0, 555.0, 555.0),
                    Vec3A::new(555.0, 555.0, 0.0),
                ),
                Quad::new(
                    Vec3A::new(0.0, 0.0, 555.0),
                    Vec3A::new(555.0, 0.0, 555.0),
                    Vec3A::new(0.0, 555.0, 555.0),
                ),
            ],
            quad_mats: vec![
                MaterialRef::Lambertian(0),
                MaterialRef::Lambertian(1),
                MaterialRef::Light(0),
                MaterialRef::Lambertian(2),
                MaterialRef::Lambertian(2),
                MaterialRef::Lambertian(2),
            ],
            lambertians: vec![
                Lambertian {
                    albedo: Vec3A::new(0.12, 0.45, 0.15),
                },
                Lambertian {
                    albedo: Vec3A::new(0.65, 0.05, 0.05),
                },
                Lambertian {
                    albedo: Vec3A::new(0.73, 0.73, 0.73),
                },
            ],
            metals: vec![Metal {
                albedo: Vec3A::new(0.8, 0.8, 0.8),
                fuzz: 0.0,
            }],
            dielectrics: vec![Dielectric {
                refraction_index: 1.5,
            }],
            lights: vec![Light {
                color: Vec3A::new(15.0, 15.0, 15.0),
            }],
        }
    }

    /// Nearest hit over every primitive within the given parameter range.
    ///
    /// Linear scan, spheres first, shrinking the accepted range to the
    /// nearest hit so far. On an exact-distance tie the first-declared
    /// primitive wins, since only strictly nearer hits replace the record.
    /// Returns false and leaves the outputs untouched when nothing is in
    /// range.
    pub fn ray_intersect(
        &self,
        r: &Ray,
        ray_t: Interval,
        rec: &mut Hit,
        mat: &mut MaterialRef,
    ) -> bool {
        let mut temp = Hit::NONE;
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        for (sphere, mat_ref) in self.spheres.iter().zip(&self.sphere_mats) {
            if sphere.hit(r, Interval::new(ray_t.min, closest_so_far), &mut temp) {
                hit_anything = true;
                closest_so_far = temp.t;
                *rec = temp;
                *mat = *mat_ref;
            }
        }

        for (quad, mat_ref) in self.quads.iter().zip(&self.quad_mats) {
            if quad.hit(r, Interval::new(ray_t.min, closest_so_far), &mut temp) {
                hit_anything = true;
                closest_so_far = temp.t;
                *rec = temp;
                *mat = *mat_ref;
            }
        }

        hit_anything
    }

    /// Scatter dispatch for the referenced material.
    pub fn scatter(
        &self,
        mat: MaterialRef,
        r_in: &Ray,
        hit: &Hit,
        attenuation: &mut Color,
        scattered: &mut Ray,
    ) -> bool {
        match mat {
            MaterialRef::Lambertian(i) => {
                self.lambertians[i].scatter(r_in, hit, attenuation, scattered)
            }
            MaterialRef::Metal(i) => self.metals[i].scatter(r_in, hit, attenuation, scattered),
            MaterialRef::Dielectric(i) => {
                self.dielectrics[i].scatter(r_in, hit, attenuation, scattered)
            }
            MaterialRef::Light(i) => self.lights[i].scatter(r_in, hit, attenuation, scattered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_scene() -> Scene {
        Scene {
            spheres: vec![],
            sphere_mats: vec![],
            quads: vec![],
            quad_mats: vec![],
            lambertians: vec![],
            metals: vec![],
            dielectrics: vec![],
            lights: vec![],
        }
    }

    const EPS: Interval = Interval {
        min: 1e-3,
        max: f32::INFINITY,
    };

    #[test]
    fn test_empty_scene_misses() {
        let scene = empty_scene();
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));

        let mut rec = Hit::NONE;
        let mut mat = MaterialRef::Lambertian(0);
        assert!(!scene.ray_intersect(&ray, EPS, &mut rec, &mut mat));
        assert_eq!(rec.t, f32::INFINITY);
    }

    #[test]
    fn test_cornell_back_wall() {
        // Straight down the view axis between the spheres: the white back
        // wall at z = 555 is the nearest surface.
        let scene = Scene::cornell_box();
        let ray = Ray::new(Vec3A::new(278.0, 278.0, -800.0), Vec3A::new(0.0, 0.0, 1.0));

        let mut rec = Hit::NONE;
        let mut mat = MaterialRef::Lambertian(0);
        assert!(scene.ray_intersect(&ray, EPS, &mut rec, &mut mat));
        assert!((rec.t - 1355.0).abs() < 1e-2);
        assert_eq!(mat, MaterialRef::Lambertian(2));
        // Back wall normal faces the camera after orientation
        assert_eq!(rec.normal, Vec3A::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_cornell_ceiling_light() {
        let scene = Scene::cornell_box();
        let ray = Ray::new(Vec3A::new(278.0, 100.0, 280.0), Vec3A::new(0.0, 1.0, 0.0));

        let mut rec = Hit::NONE;
        let mut mat = MaterialRef::Lambertian(0);
        assert!(scene.ray_intersect(&ray, EPS, &mut rec, &mut mat));
        // The lamp quad at y = 554 sits below the ceiling at y = 555
        assert_eq!(mat, MaterialRef::Light(0));
        assert!((rec.t - 454.0).abs() < 1e-2);
    }

    #[test]
    fn test_nearest_hit_wins() {
        let mut scene = empty_scene();
        scene.spheres = vec![
            Sphere::new(Vec3A::new(0.0, 0.0, 10.0), 1.0),
            Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0),
        ];
        scene.sphere_mats = vec![MaterialRef::Metal(0), MaterialRef::Metal(1)];

        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));
        let mut rec = Hit::NONE;
        let mut mat = MaterialRef::Lambertian(0);
        assert!(scene.ray_intersect(&ray, EPS, &mut rec, &mut mat));
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert_eq!(mat, MaterialRef::Metal(1));
    }

    #[test]
    fn test_tie_breaks_to_first_declared() {
        let mut scene = empty_scene();
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0);
        scene.spheres = vec![sphere, sphere];
        scene.sphere_mats = vec![MaterialRef::Metal(0), MaterialRef::Metal(1)];

        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));
        let mut rec = Hit::NONE;
        let mut mat = MaterialRef::Lambertian(0);
        assert!(scene.ray_intersect(&ray, EPS, &mut rec, &mut mat));
        assert_eq!(mat, MaterialRef::Metal(0));
    }

    #[test]
    fn test_interval_max_bounds_search() {
        let scene = Scene::cornell_box();
        let ray = Ray::new(Vec3A::new(278.0, 278.0, -800.0), Vec3A::new(0.0, 0.0, 1.0));

        let mut rec = Hit::NONE;
        let mut mat = MaterialRef::Lambertian(0);
        // Back wall sits at t = 1355, outside this range
        assert!(!scene.ray_intersect(&ray, Interval::new(1e-3, 100.0), &mut rec, &mut mat));
    }
}
