//! Microfacet BRDF terms.
//!
//! Standard Cook-Torrance pieces: Schlick's Fresnel approximation, the GGX
//! (Trowbridge-Reitz) normal distribution and height-correlated Smith
//! visibility, plus Lambertian diffuse. All inputs are clamped dot products
//! unless noted; roughness is perceptual and squared internally.

use std::f32::consts::{FRAC_1_PI, PI};

use glam::Vec3;

/// Schlick's approximation of the Fresnel reflectance.
#[inline]
pub fn fresnel_schlick(f0: Vec3, v_dot_h: f32) -> Vec3 {
    let f = (1.0 - v_dot_h).clamp(0.0, 1.0).powi(5);
    f0 + (Vec3::ONE - f0) * f
}

/// GGX normal distribution function.
#[inline]
pub fn ggx_distribution(roughness: f32, n_dot_h: f32) -> f32 {
    let a = roughness * roughness;
    let a2 = a * a;
    let d = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    a2 / (PI * d * d).max(1e-7)
}

/// Height-correlated Smith visibility for GGX (approximate form).
///
/// Includes the 1 / (4 * NoV * NoL) microfacet denominator, so the specular
/// lobe is `D * V * F` with no further normalization.
#[inline]
pub fn smith_ggx_visibility(roughness: f32, n_dot_v: f32, n_dot_l: f32) -> f32 {
    let a = roughness * roughness;
    let lambda_v = n_dot_l * (n_dot_v * (1.0 - a) + a);
    let lambda_l = n_dot_v * (n_dot_l * (1.0 - a) + a);
    0.5 / (lambda_v + lambda_l).max(1e-5)
}

/// Lambertian diffuse term: albedo / pi.
#[inline]
pub fn lambert_diffuse(diffuse_color: Vec3) -> Vec3 {
    diffuse_color * FRAC_1_PI
}

/// Full microfacet specular lobe, `D * V * F`.
#[inline]
pub fn microfacet_specular(
    f0: Vec3,
    roughness: f32,
    n_dot_v: f32,
    n_dot_l: f32,
    n_dot_h: f32,
    v_dot_h: f32,
) -> Vec3 {
    let d = ggx_distribution(roughness, n_dot_h);
    let v = smith_ggx_visibility(roughness, n_dot_v, n_dot_l);
    let f = fresnel_schlick(f0, v_dot_h);
    f * (d * v)
}
