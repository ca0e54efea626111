//! Host-side light descriptors.
//!
//! A [`Light`] is the CPU representation the application edits. It carries
//! photometric intensity and geometric parameters; the precomputed, GPU-packed
//! form lives in [`crate::gpu::LightData`].

use std::f32::consts::PI;

use glam::Vec3;

use crate::error::{Error, Result};

/// Illuminance (lux) below which a light is considered invisible.
/// Used when deriving an attenuation radius from intensity.
pub const MIN_ATTENUATION_ILLUMINANCE: f32 = 0.05;

/// Supported light source kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    /// Infinitely distant light, direction only
    Directional,
    /// Omnidirectional point or sphere source
    Radial,
    /// Cone-restricted point or disc source
    Spot,
}

/// Host-side light descriptor.
///
/// Units: `intensity` is illuminance in lux for directional lights and
/// luminous flux in lumens for radial/spot lights. Colors are linear RGB.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub kind: LightKind,
    /// World-space position (unused for directional)
    pub position: Vec3,
    /// Normalized emission axis (away from the light)
    pub direction: Vec3,
    /// Linear RGB color
    pub color: Vec3,
    /// Lux (directional) or lumens (radial/spot)
    pub intensity: f32,
    /// Distance beyond which the light contributes nothing
    pub attenuation_radius: f32,
    /// Physical emitter radius; zero means punctual
    pub source_radius: f32,
    /// Total cone angle in radians (spot only)
    pub spot_angle: f32,
    /// Cone angle at which falloff starts, radians (spot only)
    pub spot_falloff_angle: f32,
    /// Derive the attenuation radius from intensity instead of using the
    /// explicit value
    pub auto_attenuation: bool,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            kind: LightKind::Radial,
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            color: Vec3::ONE,
            intensity: 500.0,
            attenuation_radius: 10.0,
            source_radius: 0.0,
            spot_angle: 45f32.to_radians(),
            spot_falloff_angle: 35f32.to_radians(),
            auto_attenuation: false,
        }
    }
}

impl Light {
    /// Create a directional light (sun-style). `intensity` is lux.
    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional,
            direction: direction.normalize(),
            color,
            intensity,
            ..Self::default()
        }
    }

    /// Create an omnidirectional light. `intensity` is lumens.
    pub fn radial(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Radial,
            position,
            color,
            intensity,
            ..Self::default()
        }
    }

    /// Create a spot light. `intensity` is lumens, `spot_angle` the total
    /// cone angle in radians.
    pub fn spot(
        position: Vec3,
        direction: Vec3,
        color: Vec3,
        intensity: f32,
        spot_angle: f32,
    ) -> Self {
        Self {
            kind: LightKind::Spot,
            position,
            direction: direction.normalize(),
            color,
            intensity,
            spot_angle,
            spot_falloff_angle: spot_angle * 0.8,
            ..Self::default()
        }
    }

    /// Grow the emitter to an area source of the given radius.
    pub fn with_source_radius(mut self, radius: f32) -> Self {
        self.source_radius = radius;
        self
    }

    /// Use an attenuation radius derived from intensity.
    pub fn with_auto_attenuation(mut self) -> Self {
        self.auto_attenuation = true;
        self
    }

    /// Luminous intensity (candela) along the brightest direction.
    ///
    /// Flux-to-intensity conversion depends on the emission solid angle:
    /// full sphere for radial lights, the cone cap for spots.
    pub fn luminous_intensity(&self) -> f32 {
        match self.kind {
            LightKind::Directional => self.intensity,
            LightKind::Radial => self.intensity / (4.0 * PI),
            LightKind::Spot => {
                let cos_half = (self.spot_angle * 0.5).cos();
                self.intensity / (2.0 * PI * (1.0 - cos_half).max(1e-4))
            }
        }
    }

    /// Emitted luminance (nits for area sources).
    ///
    /// Punctual sources fold the area term away and return luminous
    /// intensity; area sources divide by the emitting surface.
    pub fn luminance(&self) -> f32 {
        let intensity = self.luminous_intensity();
        match self.kind {
            LightKind::Directional => intensity,
            LightKind::Radial | LightKind::Spot => {
                if self.source_radius > 0.0 {
                    // Lambertian emitter: I = L * pi * r^2
                    intensity / (PI * self.source_radius * self.source_radius)
                } else {
                    intensity
                }
            }
        }
    }

    /// Radius at which the windowed inverse-square falloff drops below
    /// [`MIN_ATTENUATION_ILLUMINANCE`].
    pub fn auto_attenuation_radius(&self) -> f32 {
        let intensity = self.luminous_intensity();
        (intensity / MIN_ATTENUATION_ILLUMINANCE).max(0.0).sqrt()
    }

    /// Effective attenuation radius, honoring `auto_attenuation`.
    pub fn effective_attenuation_radius(&self) -> f32 {
        if self.auto_attenuation {
            self.auto_attenuation_radius()
        } else {
            self.attenuation_radius
        }
    }

    /// Check the descriptor for values the packed form cannot represent.
    pub fn validate(&self) -> Result<()> {
        if !self.intensity.is_finite() || self.intensity < 0.0 {
            return Err(Error::InvalidIntensity(self.intensity));
        }
        let dir_len = self.direction.length();
        if !(0.99..=1.01).contains(&dir_len) {
            return Err(Error::InvalidDirection(dir_len));
        }
        if !self.source_radius.is_finite() || self.source_radius < 0.0 {
            return Err(Error::InvalidSourceRadius(self.source_radius));
        }
        if self.kind != LightKind::Directional {
            let radius = self.effective_attenuation_radius();
            if !radius.is_finite() || radius <= 0.0 {
                return Err(Error::InvalidAttenuationRadius(radius));
            }
        }
        if self.kind == LightKind::Spot {
            if !(0.0..PI).contains(&self.spot_angle) || self.spot_angle == 0.0 {
                return Err(Error::InvalidSpotAngle(self.spot_angle));
            }
            // NaN fails the range check, so it cannot reach pack()
            if !(0.0..=self.spot_angle).contains(&self.spot_falloff_angle) {
                return Err(Error::InvalidSpotAngles {
                    falloff: self.spot_falloff_angle,
                    total: self.spot_angle,
                });
            }
        }
        Ok(())
    }
}
