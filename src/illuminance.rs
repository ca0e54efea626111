//! Punctual and area-light illuminance.
//!
//! Closed-form illuminance of sphere and disc emitters follows the
//! horizon-aware formulation from "Moving Frostbite to PBR" (Lagarde,
//! de Rousiers). Punctual falloff uses windowed inverse-square so lights
//! reach exactly zero at their attenuation radius.

use std::f32::consts::PI;

use glam::Vec3;

/// Clamp on sin^2(sigma) keeping the closed forms finite when the receiver
/// touches the source.
const MAX_SIN_SQR_SIGMA: f32 = 0.9999;

#[inline]
fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Smooth window that fades to zero at the attenuation radius.
///
/// `inv_radius_sqr` is `1 / r^2`; a value of zero disables the window.
#[inline]
pub fn distance_window(dist_sqr: f32, inv_radius_sqr: f32) -> f32 {
    let w = saturate(1.0 - (dist_sqr * inv_radius_sqr) * (dist_sqr * inv_radius_sqr));
    w * w
}

/// Windowed inverse-square falloff for punctual lights.
///
/// The `+ 1` in the denominator bounds the response as the receiver
/// approaches the source.
#[inline]
pub fn radial_attenuation(dist_sqr: f32, inv_radius_sqr: f32) -> f32 {
    distance_window(dist_sqr, inv_radius_sqr) / (dist_sqr + 1.0)
}

/// Squared smooth falloff over the spot cone.
///
/// `to_light` is the unit vector from the shaded point toward the light,
/// `direction` the light's emission axis, `spot_angles` the packed triple
/// from [`crate::gpu::LightData`].
#[inline]
pub fn spot_attenuation(to_light: Vec3, direction: Vec3, spot_angles: Vec3) -> f32 {
    let falloff = saturate((to_light.dot(-direction) - spot_angles.y) * spot_angles.z);
    falloff * falloff
}

/// Illuminance from a uniform emitter subtending `sin^2(sigma)` of the
/// hemisphere, seen at angle `cos_theta` from the surface normal.
///
/// Valid for spheres directly and for discs after scaling by the disc
/// orientation term. Accounts for partial occlusion by the horizon.
pub fn illuminance_sphere_disc(cos_theta: f32, sin_sqr_sigma: f32) -> f32 {
    let cos_theta = cos_theta.clamp(-1.0, 1.0);
    let sin_sqr_sigma = sin_sqr_sigma.clamp(0.0, MAX_SIN_SQR_SIGMA);
    let sin_sqr_theta = 1.0 - cos_theta * cos_theta;

    let illuminance = if cos_theta * cos_theta > sin_sqr_sigma {
        // Source entirely above (or below) the horizon
        PI * sin_sqr_sigma * saturate(cos_theta)
    } else {
        // Source straddles the horizon
        let sin_theta = sin_sqr_theta.sqrt();
        let x = (1.0 / sin_sqr_sigma - 1.0).sqrt();
        let y = (-x * (cos_theta / sin_theta)).clamp(-1.0, 1.0);
        let sin_theta_sqrt_y = sin_theta * (1.0 - y * y).sqrt();
        (cos_theta * y.acos() - x * sin_theta_sqrt_y) * sin_sqr_sigma
            + (sin_theta_sqrt_y / x.max(1e-6)).atan()
    };

    illuminance.max(0.0)
}

/// Illuminance from a sphere emitter of radius `src_radius` at distance
/// `dist`, with the unclamped `n_dot_l` toward the sphere center.
pub fn illuminance_sphere(src_radius: f32, dist: f32, n_dot_l: f32) -> f32 {
    let r2 = src_radius * src_radius;
    let d2 = (dist * dist).max(r2);
    illuminance_sphere_disc(n_dot_l, r2 / d2)
}

/// Illuminance from a disc emitter facing along its normal.
///
/// `cos_disc` is the cosine between the disc normal and the direction back
/// toward the shaded point; a disc seen edge-on contributes nothing.
pub fn illuminance_disc(src_radius: f32, dist: f32, n_dot_l: f32, cos_disc: f32) -> f32 {
    let r2 = src_radius * src_radius;
    let d2 = dist * dist;
    let sin_sqr_sigma = r2 / (r2 + d2.max(r2));
    illuminance_sphere_disc(n_dot_l, sin_sqr_sigma) * saturate(cos_disc)
}

/// Punctual illuminance: clamped cosine over bounded squared distance.
#[inline]
pub fn illuminance_point(dist_sqr: f32, n_dot_l: f32) -> f32 {
    saturate(n_dot_l) / (dist_sqr + 1.0)
}
