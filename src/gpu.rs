//! GPU-packed light data.
//!
//! Maps directly to the shader-side `LightData` uniform/storage layout.
//! Everything a shader needs per light is precomputed here so the per-pixel
//! cost is a handful of multiply-adds.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::light::{Light, LightKind};

/// Per-light GPU record.
///
/// Five 16-byte rows (80 bytes), matching an std430 struct of
/// `vec3 + float` pairs. Size must stay a multiple of 16 so arrays of
/// `LightData` keep their stride on the GPU.
///
/// `spot_angles` packs the cone terms:
/// - `x`: total cone angle in radians
/// - `y`: cos(total angle / 2)
/// - `z`: 1 / (cos(falloff angle / 2) - cos(total angle / 2))
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LightData {
    /// World-space position
    pub position: Vec3,
    /// Attenuation radius
    pub att_radius: f32,
    /// Normalized emission axis
    pub direction: Vec3,
    /// Emitted luminance
    pub luminance: f32,
    /// Packed spot cone terms (see struct docs)
    pub spot_angles: Vec3,
    /// 1 / att_radius^2
    pub att_radius_sqrd_inv: f32,
    /// Linear RGB color
    pub color: Vec3,
    /// Emitter radius, zero for punctual sources
    pub src_radius: f32,
    /// Spot apex shifted back along the axis so the emitter disc subtends
    /// the cone; equals `position` otherwise
    pub shifted_position: Vec3,
    pub _pad: f32,
}

impl Default for LightData {
    fn default() -> Self {
        Self::pack(&Light::default())
    }
}

impl LightData {
    /// Precompute the packed form of a host-side light.
    pub fn pack(light: &Light) -> Self {
        let att_radius = match light.kind {
            LightKind::Directional => 0.0,
            _ => light.effective_attenuation_radius(),
        };
        let att_radius_sqrd_inv = if att_radius > 0.0 {
            1.0 / (att_radius * att_radius)
        } else {
            0.0
        };

        let spot_angles = if light.kind == LightKind::Spot {
            let cos_total = (light.spot_angle * 0.5).cos();
            let cos_falloff = (light.spot_falloff_angle * 0.5).cos();
            Vec3::new(
                light.spot_angle,
                cos_total,
                1.0 / (cos_falloff - cos_total).max(1e-3),
            )
        } else {
            Vec3::ZERO
        };

        let shifted_position = if light.kind == LightKind::Spot && light.source_radius > 0.0 {
            let tan_half = (light.spot_angle * 0.5).tan();
            if tan_half > 1e-4 {
                light.position - light.direction * (light.source_radius / tan_half)
            } else {
                light.position
            }
        } else {
            light.position
        };

        Self {
            position: light.position,
            att_radius,
            direction: light.direction,
            luminance: light.luminance(),
            spot_angles,
            att_radius_sqrd_inv,
            color: light.color,
            src_radius: light.source_radius,
            shifted_position,
            _pad: 0.0,
        }
    }
}
