//! Per-light direct lighting evaluation.
//!
//! Each function returns the outgoing luminance contributed by one light:
//! illuminance (attenuated for punctual sources, closed-form for area
//! sources) times the surface BRDF times the light color.

use glam::Vec3;

use crate::brdf::{lambert_diffuse, microfacet_specular};
use crate::buffer::PackedLights;
use crate::gpu::LightData;
use crate::illuminance::{
    distance_window, illuminance_disc, illuminance_sphere, radial_attenuation, spot_attenuation,
};
use crate::surface::SurfaceData;

/// Evaluate the surface BRDF for one light direction.
///
/// `view_dir` and `light_dir` are unit vectors pointing away from the
/// surface. The result excludes the NoL and illuminance terms.
pub fn surface_brdf(surface: &SurfaceData, view_dir: Vec3, light_dir: Vec3) -> Vec3 {
    let n = surface.world_normal;
    let h = (view_dir + light_dir).normalize_or_zero();
    let n_dot_v = n.dot(view_dir).max(1e-4);
    let n_dot_l = n.dot(light_dir).clamp(0.0, 1.0);
    let n_dot_h = n.dot(h).clamp(0.0, 1.0);
    let v_dot_h = view_dir.dot(h).clamp(0.0, 1.0);

    let roughness = surface.clamped_roughness();
    let diffuse = lambert_diffuse(surface.diffuse_color());
    let specular = microfacet_specular(
        surface.f0(),
        roughness,
        n_dot_v,
        n_dot_l,
        n_dot_h,
        v_dot_h,
    );
    diffuse + specular
}

/// Outgoing luminance from a directional light.
pub fn directional_light_luminance(
    surface: &SurfaceData,
    view_dir: Vec3,
    light: &LightData,
) -> Vec3 {
    let l = -light.direction;
    let n_dot_l = surface.world_normal.dot(l).clamp(0.0, 1.0);
    if n_dot_l <= 0.0 {
        return Vec3::ZERO;
    }
    let brdf = surface_brdf(surface, view_dir, l);
    brdf * light.color * (light.luminance * n_dot_l)
}

/// Outgoing luminance from a radial (point or sphere) light.
pub fn radial_light_luminance(
    surface: &SurfaceData,
    world_pos: Vec3,
    view_dir: Vec3,
    light: &LightData,
) -> Vec3 {
    let to_light = light.position - world_pos;
    let dist_sqr = to_light.length_squared();
    if light.att_radius_sqrd_inv > 0.0 && dist_sqr * light.att_radius_sqrd_inv > 1.0 {
        return Vec3::ZERO;
    }
    let dist = dist_sqr.sqrt();
    let l = to_light / dist.max(1e-5);
    let n_dot_l = surface.world_normal.dot(l);

    let illuminance = if light.src_radius > 0.0 {
        // Closed-form sphere illuminance already encodes the solid angle;
        // only the radius window applies on top.
        illuminance_sphere(light.src_radius, dist, n_dot_l)
            * distance_window(dist_sqr, light.att_radius_sqrd_inv)
    } else {
        n_dot_l.clamp(0.0, 1.0) * radial_attenuation(dist_sqr, light.att_radius_sqrd_inv)
    };
    if illuminance <= 0.0 {
        return Vec3::ZERO;
    }

    let brdf = surface_brdf(surface, view_dir, l);
    brdf * light.color * (light.luminance * illuminance)
}

/// Outgoing luminance from a spot light.
///
/// Area spots evaluate a disc emitter seated at the shifted apex so the
/// cone edge stays soft near the source.
pub fn spot_light_luminance(
    surface: &SurfaceData,
    world_pos: Vec3,
    view_dir: Vec3,
    light: &LightData,
) -> Vec3 {
    let to_light = light.position - world_pos;
    let dist_sqr = to_light.length_squared();
    if light.att_radius_sqrd_inv > 0.0 && dist_sqr * light.att_radius_sqrd_inv > 1.0 {
        return Vec3::ZERO;
    }
    let dist = dist_sqr.sqrt();
    let l = to_light / dist.max(1e-5);
    let n_dot_l = surface.world_normal.dot(l);

    let spot = spot_attenuation(l, light.direction, light.spot_angles);
    if spot <= 0.0 {
        return Vec3::ZERO;
    }

    let illuminance = if light.src_radius > 0.0 {
        let to_shifted = light.shifted_position - world_pos;
        let shifted_dist = to_shifted.length();
        let cos_disc = light.direction.dot(-l);
        illuminance_disc(light.src_radius, shifted_dist, n_dot_l, cos_disc)
            * distance_window(dist_sqr, light.att_radius_sqrd_inv)
    } else {
        n_dot_l.clamp(0.0, 1.0) * radial_attenuation(dist_sqr, light.att_radius_sqrd_inv)
    };
    if illuminance <= 0.0 {
        return Vec3::ZERO;
    }

    let brdf = surface_brdf(surface, view_dir, l);
    brdf * light.color * (light.luminance * illuminance * spot)
}

/// Sum the direct lighting of every light in a packed per-view list.
pub fn accumulate_direct(
    surface: &SurfaceData,
    world_pos: Vec3,
    view_dir: Vec3,
    lights: &PackedLights,
) -> Vec3 {
    let mut total = Vec3::ZERO;
    for light in lights.directional() {
        total += directional_light_luminance(surface, view_dir, light);
    }
    for light in lights.radial() {
        total += radial_light_luminance(surface, world_pos, view_dir, light);
    }
    for light in lights.spot() {
        total += spot_light_luminance(surface, world_pos, view_dir, light);
    }
    total
}
