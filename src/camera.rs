//! Camera, sampling loop and light transport.
//!
//! The camera is a fixed pinhole view into the Cornell box. Rendering
//! accumulates sample passes into an unnormalized (width, height, 3) buffer;
//! normalization and tone mapping happen downstream in the reduction step.

use glam::Vec3A;
use log::debug;

use crate::hittable::Hit;
use crate::interval::Interval;
use crate::material::{Color, MaterialRef};
use crate::random;
use crate::ray::Ray;
use crate::scene::Scene;

/// Fixed view into the box.
const CAM_POS: Vec3A = Vec3A::new(278.0, 278.0, -800.0);
const CAM_TGT: Vec3A = Vec3A::new(278.0, 278.0, 0.0);
const CAM_UP: Vec3A = Vec3A::new(0.0, 1.0, 0.0);

/// Near-plane distance and horizontal field of view in degrees.
const CAM_NEAR: f32 = 1.0;
const CAM_HFOV: f32 = 40.0;

/// Color returned for rays that leave the scene or exhaust the depth bound.
const BACKGROUND: Color = Vec3A::ZERO;

/// Pinhole camera with a precomputed viewport basis.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Maximum number of ray bounces (recursion depth limit)
    pub max_depth: u32,

    /// Camera position in world space
    center: Vec3A,
    /// Camera frame basis vector pointing right (u)
    u: Vec3A,
    /// Camera frame basis vector pointing up (v)
    v: Vec3A,
    /// Viewport step per pixel along u
    du: f32,
    /// Viewport step per pixel along v
    dv: f32,
    /// World position of the center of pixel (0, 0)
    corner: Vec3A,
}

impl Camera {
    /// Build the fixed Cornell view for the given output size and depth bound.
    pub fn new(image_width: u32, image_height: u32, max_depth: u32) -> Self {
        // Viewport width as arc length at the near distance
        let viewport_width = (CAM_HFOV / 2.0).to_radians() * CAM_NEAR * 2.0;
        let viewport_height = viewport_width * image_height as f32 / image_width as f32;

        let du = viewport_width / image_width as f32;
        let dv = viewport_height / image_height as f32;

        // Orthonormal camera frame; w points opposite the view direction
        let w = (CAM_POS - CAM_TGT).normalize();
        let u = CAM_UP.cross(w).normalize();
        let v = w.cross(u);

        let corner = CAM_POS - w * CAM_NEAR - u * (viewport_width / 2.0)
            - v * (viewport_height / 2.0)
            + u * (du / 2.0)
            + v * (dv / 2.0);

        Self {
            image_width,
            image_height,
            max_depth,
            center: CAM_POS,
            u,
            v,
            du,
            dv,
            corner,
        }
    }

    /// Accumulate `samples` passes over every pixel.
    ///
    /// One sub-pixel offset is drawn per pass and shared by all pixels of
    /// that pass; offsets vary across passes. Returns the unnormalized sum
    /// buffer, shaped (width, height, 3).
    pub fn render(&self, scene: &Scene, samples: u32) -> Vec<f32> {
        let mut image = vec![0.0f32; self.image_width as usize * self.image_height as usize * 3];

        for pass in 0..samples {
            let jitter_u = random::random_f32() - 0.5;
            let jitter_v = random::random_f32() - 0.5;

            for i in 0..self.image_width {
                for j in 0..self.image_height {
                    let pu = (i as f32 + jitter_u) * self.du * self.u;
                    let pv = (j as f32 + jitter_v) * self.dv * self.v;

                    let pos = self.corner + pu + pv;
                    let ray = Ray::new(self.center, pos - self.center);

                    let color = self.ray_color(0, scene, &ray);

                    let idx = (i as usize * self.image_height as usize + j as usize) * 3;
                    image[idx] += color.x;
                    image[idx + 1] += color.y;
                    image[idx + 2] += color.z;

                    debug!("done {} {} {}", pass, i, j);
                }
            }
        }

        image
    }

    /// Trace a ray and compute its color contribution.
    ///
    /// Depth counts bounces taken so far; at the bound no more light is
    /// gathered and the background comes back. A miss also yields the
    /// background. A terminal scatter (emission or absorption) returns its
    /// color directly; otherwise the attenuation multiplies the color of the
    /// scattered ray, component-wise.
    fn ray_color(&self, depth: u32, scene: &Scene, r: &Ray) -> Color {
        if depth >= self.max_depth {
            return BACKGROUND;
        }

        let mut hit = Hit::NONE;
        let mut mat = MaterialRef::Lambertian(0);
        if !scene.ray_intersect(r, Interval::new(1e-3, f32::INFINITY), &mut hit, &mut mat) {
            return BACKGROUND;
        }

        let mut attenuation = Color::ZERO;
        let mut scattered = *r;
        if !scene.scatter(mat, r, &hit, &mut attenuation, &mut scattered) {
            return attenuation;
        }

        attenuation * self.ray_color(depth + 1, scene, &scattered)
    }
}
