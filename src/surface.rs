//! Shaded-surface inputs.

use glam::Vec3;

/// Reflectance at normal incidence for dielectrics.
pub const DIELECTRIC_F0: f32 = 0.04;

/// Roughness floor that keeps the GGX lobe finite.
pub const MIN_ROUGHNESS: f32 = 0.045;

/// Per-point surface attributes consumed by the shading functions.
///
/// `roughness` is perceptual (squared inside the BRDF), `metalness` blends
/// between dielectric and conductor response.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceData {
    /// Base color, linear RGB
    pub albedo: Vec3,
    /// Unit shading normal in world space
    pub world_normal: Vec3,
    /// Perceptual roughness in [0, 1]
    pub roughness: f32,
    /// Metalness in [0, 1]
    pub metalness: f32,
}

impl Default for SurfaceData {
    fn default() -> Self {
        Self {
            albedo: Vec3::splat(0.8),
            world_normal: Vec3::Y,
            roughness: 0.5,
            metalness: 0.0,
        }
    }
}

impl SurfaceData {
    pub fn new(albedo: Vec3, world_normal: Vec3, roughness: f32, metalness: f32) -> Self {
        Self {
            albedo,
            world_normal: world_normal.normalize(),
            roughness,
            metalness,
        }
    }

    /// Specular reflectance at normal incidence.
    pub fn f0(&self) -> Vec3 {
        Vec3::splat(DIELECTRIC_F0).lerp(self.albedo, self.metalness)
    }

    /// Diffuse reflectance; metals have none.
    pub fn diffuse_color(&self) -> Vec3 {
        self.albedo * (1.0 - self.metalness)
    }

    /// Roughness clamped to the floor the NDF can handle.
    pub fn clamped_roughness(&self) -> f32 {
        self.roughness.clamp(MIN_ROUGHNESS, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dielectric_f0() {
        let s = SurfaceData::default();
        assert!((s.f0() - Vec3::splat(DIELECTRIC_F0)).length() < 1e-6);
    }

    #[test]
    fn test_metal_f0_is_albedo() {
        let gold = SurfaceData::new(Vec3::new(1.0, 0.77, 0.34), Vec3::Y, 0.3, 1.0);
        assert!((gold.f0() - gold.albedo).length() < 1e-6);
        assert_eq!(gold.diffuse_color(), Vec3::ZERO);
    }

    #[test]
    fn test_roughness_floor() {
        let mirror = SurfaceData::new(Vec3::ONE, Vec3::Y, 0.0, 0.0);
        assert_eq!(mirror.clamped_roughness(), MIN_ROUGHNESS);
    }

    #[test]
    fn test_normal_is_normalized() {
        let s = SurfaceData::new(Vec3::ONE, Vec3::new(0.0, 3.0, 0.0), 0.5, 0.0);
        assert!((s.world_normal.length() - 1.0).abs() < 1e-6);
    }
}
