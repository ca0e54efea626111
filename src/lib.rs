//! # Radiant
//!
//! Physically based direct-lighting math with GPU-ready light buffer layouts.
//!
//! The crate is the CPU half of a renderer's lighting path: host-side light
//! descriptors, the precomputed GPU-packed [`gpu::LightData`] record, the
//! microfacet BRDF and area-light illuminance formulas, and a per-view light
//! buffer grouped by kind. The same formulas ship as WGSL fragments in
//! [`shader_lib`] so the GPU path stays in lockstep with the CPU reference.
//!
//! ## Modules
//!
//! - [`light`] - Host-side light descriptors and photometric conversions
//! - [`gpu`] - GPU-packed `LightData` (std430 layout)
//! - [`brdf`] - Fresnel, GGX distribution/visibility, Lambertian diffuse
//! - [`illuminance`] - Punctual attenuation and sphere/disc illuminance
//! - [`surface`] - Shaded-surface inputs
//! - [`shading`] - Per-light direct lighting evaluation
//! - [`buffer`] - Per-view packed light lists
//! - [`error`] - Validation errors
//!
//! ## Example
//!
//! ```
//! use glam::Vec3;
//! use radiant::{Light, LightBuffer, SurfaceData};
//!
//! let mut lights = LightBuffer::new();
//! lights.push(&Light::directional(Vec3::NEG_Y, Vec3::ONE, 100_000.0));
//! lights.push(&Light::radial(Vec3::new(0.0, 2.0, 0.0), Vec3::ONE, 800.0));
//!
//! let packed = lights.pack();
//! let surface = SurfaceData::default();
//! let color = packed.shade(&surface, Vec3::ZERO, Vec3::Y);
//! assert!(color.length() > 0.0);
//!
//! // `packed.as_bytes()` is ready for buffer upload.
//! ```

pub mod brdf;
pub mod buffer;
pub mod error;
pub mod gpu;
pub mod illuminance;
pub mod light;
pub mod shading;
pub mod surface;

// Re-export commonly used types
pub use buffer::{LightBuffer, PackedLights};
pub use error::{Error, Result};
pub use gpu::LightData;
pub use light::{Light, LightKind};
pub use surface::SurfaceData;

/// Shader library modules (WGSL counterparts of the CPU math, for renderers
/// that compose their own shader sources)
pub mod shader_lib {
    pub const COMMON: &str = include_str!("shaders/lib/common.wgsl");
    pub const FRESNEL: &str = include_str!("shaders/lib/fresnel.wgsl");
    pub const MICROFACET: &str = include_str!("shaders/lib/microfacet.wgsl");
    pub const DIFFUSE: &str = include_str!("shaders/lib/diffuse.wgsl");
    pub const LIGHTING: &str = include_str!("shaders/lib/lighting.wgsl");
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::buffer::{LightBuffer, PackedLights};
    pub use crate::error::{Error, Result};
    pub use crate::gpu::LightData;
    pub use crate::light::{Light, LightKind};
    pub use crate::shading::{
        directional_light_luminance, radial_light_luminance, spot_light_luminance,
    };
    pub use crate::surface::SurfaceData;
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Shader source tests ===

    #[test]
    fn test_shader_lib_light_data_struct() {
        // The WGSL struct must carry the same fields as gpu::LightData
        assert!(shader_lib::COMMON.contains("struct LightData"));
        assert!(shader_lib::COMMON.contains("att_radius_sqrd_inv"));
        assert!(shader_lib::COMMON.contains("shifted_position"));
        assert!(shader_lib::COMMON.contains("src_radius"));
    }

    #[test]
    fn test_shader_lib_functions_present() {
        assert!(shader_lib::FRESNEL.contains("fn fresnel_schlick"));
        assert!(shader_lib::MICROFACET.contains("fn ggx_distribution"));
        assert!(shader_lib::MICROFACET.contains("fn smith_ggx_visibility"));
        assert!(shader_lib::DIFFUSE.contains("fn lambert_diffuse"));
        assert!(shader_lib::LIGHTING.contains("fn illuminance_sphere_disc"));
        assert!(shader_lib::LIGHTING.contains("fn spot_attenuation"));
        assert!(shader_lib::LIGHTING.contains("fn directional_light_luminance"));
        assert!(shader_lib::LIGHTING.contains("fn radial_light_luminance"));
        assert!(shader_lib::LIGHTING.contains("fn spot_light_luminance"));
    }
}
