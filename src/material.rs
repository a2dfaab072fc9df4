//! Material models.
//!
//! Four surface kinds: Lambertian (diffuse), Metal (specular), Dielectric
//! (refractive) and Light (emissive). Each exposes the same scatter
//! operation: does transport continue, what color factor applies, and where
//! does the ray go next. Scattered rays originate at the hit point
//! `r_in.at(hit.t)`.

use glam::Vec3A;

use crate::hittable::Hit;
use crate::random;
use crate::ray::Ray;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Reference to a material instance in the scene's per-kind arrays.
///
/// A closed set of kinds; dispatch is one exhaustive match, no trait
/// objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialRef {
    /// Diffuse material at the given index.
    Lambertian(usize),
    /// Specular material at the given index.
    Metal(usize),
    /// Refractive material at the given index.
    Dielectric(usize),
    /// Emissive material at the given index.
    Light(usize),
}

/// Lambertian diffuse material for matte surfaces.
#[derive(Debug, Clone, Copy)]
pub struct Lambertian {
    /// Surface color/reflectance, components in [0, 1].
    pub albedo: Color,
}

impl Lambertian {
    /// Diffuse scattering about the surface normal.
    ///
    /// Always continues. The cosine weighting is implicit in sampling
    /// `normal + random_unit_vector()`, so the attenuation is the bare
    /// albedo.
    pub fn scatter(
        &self,
        r_in: &Ray,
        hit: &Hit,
        attenuation: &mut Color,
        scattered: &mut Ray,
    ) -> bool {
        let mut direction = hit.normal + random::random_unit_vector();

        // Near-cancellation of normal and sample would leave a degenerate ray
        if direction.length() < 1e-3 {
            direction = hit.normal;
        }

        *scattered = Ray::new(r_in.at(hit.t), direction);
        *attenuation = self.albedo;
        true
    }
}

/// Metallic material with fuzzed specular reflection.
#[derive(Debug, Clone, Copy)]
pub struct Metal {
    /// Metal color.
    pub albedo: Color,
    /// Surface roughness (0.0 = mirror).
    pub fuzz: f32,
}

impl Metal {
    /// Mirror reflection perturbed by the fuzz radius.
    ///
    /// A perturbed direction that points back into the surface absorbs the
    /// sample: no continuation, zero attenuation, ray left unchanged.
    pub fn scatter(
        &self,
        r_in: &Ray,
        hit: &Hit,
        attenuation: &mut Color,
        scattered: &mut Ray,
    ) -> bool {
        let reflected = reflect(r_in.direction, hit.normal);
        let direction = reflected.normalize() + self.fuzz * random::random_unit_vector();

        if direction.dot(hit.normal) <= 0.0 {
            *attenuation = Color::ZERO;
            return false;
        }

        *scattered = Ray::new(r_in.at(hit.t), direction);
        *attenuation = self.albedo;
        true
    }
}

/// Dielectric (transparent) material with refraction.
#[derive(Debug, Clone, Copy)]
pub struct Dielectric {
    /// Index of refraction (1.5 = glass).
    pub refraction_index: f32,
}

impl Dielectric {
    /// Refract or reflect, chosen stochastically per sample.
    ///
    /// Always continues and never attenuates. Reflection is forced at total
    /// internal reflection and otherwise sampled against the Schlick
    /// reflectance; this is a per-sample coin flip, not a weighted blend.
    pub fn scatter(
        &self,
        r_in: &Ray,
        hit: &Hit,
        attenuation: &mut Color,
        scattered: &mut Ray,
    ) -> bool {
        *attenuation = Color::ONE;

        // front_face means the ray arrived from outside the surface
        let ri = if hit.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = r_in.direction.normalize();
        let cos_theta = (-unit_direction).dot(hit.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = ri * sin_theta > 1.0;

        let direction = if cannot_refract || reflectance(cos_theta, ri) > random::random_f32() {
            reflect(unit_direction, hit.normal)
        } else {
            refract(unit_direction, hit.normal, ri)
        };

        *scattered = Ray::new(r_in.at(hit.t), direction);
        true
    }
}

/// Emissive material.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// Emission color; unscaled intensity, may exceed 1.
    pub color: Color,
}

impl Light {
    /// Terminal emission: transport never continues past a light.
    pub fn scatter(
        &self,
        _r_in: &Ray,
        _hit: &Hit,
        attenuation: &mut Color,
        _scattered: &mut Ray,
    ) -> bool {
        *attenuation = self.color;
        false
    }
}

/// Reflect a vector off a surface using the law of reflection.
fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through an interface using Snell's law.
fn refract(uv: Vec3A, n: Vec3A, etai_over_etat: f32) -> Vec3A {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Fresnel reflectance via Schlick's approximation.
fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
