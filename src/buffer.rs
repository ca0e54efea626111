//! Per-view packed light lists.
//!
//! Shaders consume one flat `LightData` array per view, grouped by kind with
//! an offsets table: directional lights first, then radial, then spot. The
//! buffer stages lights per kind and emits the flat array plus offsets.

use glam::Vec3;
use smallvec::SmallVec;

use crate::gpu::LightData;
use crate::light::{Light, LightKind};
use crate::shading;
use crate::surface::SurfaceData;

/// Default capacity of a per-view light list.
pub const DEFAULT_MAX_LIGHTS: usize = 512;

type Bucket = SmallVec<[LightData; 8]>;

/// Staging buffer collecting lights for one view.
#[derive(Debug)]
pub struct LightBuffer {
    capacity: usize,
    directional: Bucket,
    radial: Bucket,
    spot: Bucket,
}

impl Default for LightBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LightBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_LIGHTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            directional: Bucket::new(),
            radial: Bucket::new(),
            spot: Bucket::new(),
        }
    }

    /// Number of staged lights across all kinds.
    pub fn len(&self) -> usize {
        self.directional.len() + self.radial.len() + self.spot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage a light. Returns false (and logs) when the buffer is full.
    pub fn push(&mut self, light: &Light) -> bool {
        if self.len() >= self.capacity {
            log::warn!(
                "Light buffer full ({} lights), dropping {:?} light",
                self.capacity,
                light.kind
            );
            return false;
        }
        let data = LightData::pack(light);
        match light.kind {
            LightKind::Directional => self.directional.push(data),
            LightKind::Radial => self.radial.push(data),
            LightKind::Spot => self.spot.push(data),
        }
        true
    }

    pub fn clear(&mut self) {
        self.directional.clear();
        self.radial.clear();
        self.spot.clear();
    }

    /// Flatten the staged lights into the upload layout.
    pub fn pack(&self) -> PackedLights {
        let mut data = Vec::with_capacity(self.len());
        data.extend_from_slice(&self.directional);
        data.extend_from_slice(&self.radial);
        data.extend_from_slice(&self.spot);

        let dir_end = self.directional.len() as u32;
        let radial_end = dir_end + self.radial.len() as u32;
        let spot_end = radial_end + self.spot.len() as u32;

        PackedLights {
            data,
            offsets: [dir_end, radial_end, spot_end],
        }
    }
}

/// Flat per-view light array plus the per-kind offsets table.
///
/// `offsets` holds the exclusive end of each range: directional lights are
/// `[0, offsets[0])`, radial `[offsets[0], offsets[1])`, spot
/// `[offsets[1], offsets[2])`.
#[derive(Debug, Clone)]
pub struct PackedLights {
    data: Vec<LightData>,
    offsets: [u32; 3],
}

impl PackedLights {
    pub fn data(&self) -> &[LightData] {
        &self.data
    }

    pub fn offsets(&self) -> [u32; 3] {
        self.offsets
    }

    /// Light count per kind, in buffer order.
    pub fn counts(&self) -> [u32; 3] {
        [
            self.offsets[0],
            self.offsets[1] - self.offsets[0],
            self.offsets[2] - self.offsets[1],
        ]
    }

    pub fn directional(&self) -> &[LightData] {
        &self.data[..self.offsets[0] as usize]
    }

    pub fn radial(&self) -> &[LightData] {
        &self.data[self.offsets[0] as usize..self.offsets[1] as usize]
    }

    pub fn spot(&self) -> &[LightData] {
        &self.data[self.offsets[1] as usize..self.offsets[2] as usize]
    }

    /// Raw bytes for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// CPU reference evaluation of the whole list at one point.
    pub fn shade(&self, surface: &SurfaceData, world_pos: Vec3, view_dir: Vec3) -> Vec3 {
        shading::accumulate_direct(surface, world_pos, view_dir, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lights() -> LightBuffer {
        let mut buffer = LightBuffer::new();
        buffer.push(&Light::directional(Vec3::NEG_Y, Vec3::ONE, 1000.0));
        buffer.push(&Light::radial(Vec3::Y, Vec3::ONE, 800.0));
        buffer.push(&Light::radial(Vec3::X, Vec3::ONE, 800.0));
        buffer.push(&Light::spot(
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::ONE,
            800.0,
            45f32.to_radians(),
        ));
        buffer
    }

    #[test]
    fn test_offsets_group_by_kind() {
        let packed = sample_lights().pack();
        assert_eq!(packed.offsets(), [1, 3, 4]);
        assert_eq!(packed.counts(), [1, 2, 1]);
        assert_eq!(packed.directional().len(), 1);
        assert_eq!(packed.radial().len(), 2);
        assert_eq!(packed.spot().len(), 1);
        assert_eq!(packed.data().len(), 4);
    }

    #[test]
    fn test_interleaved_push_order_still_groups() {
        let mut buffer = LightBuffer::new();
        buffer.push(&Light::radial(Vec3::X, Vec3::ONE, 100.0));
        buffer.push(&Light::directional(Vec3::NEG_Y, Vec3::ONE, 100.0));
        buffer.push(&Light::radial(Vec3::Z, Vec3::ONE, 100.0));
        let packed = buffer.pack();
        assert_eq!(packed.offsets(), [1, 3, 3]);
        // Directional ends up first regardless of push order
        assert_eq!(packed.data()[0].att_radius, 0.0);
    }

    #[test]
    fn test_capacity_drops_excess() {
        let mut buffer = LightBuffer::with_capacity(2);
        assert!(buffer.push(&Light::radial(Vec3::X, Vec3::ONE, 100.0)));
        assert!(buffer.push(&Light::radial(Vec3::Y, Vec3::ONE, 100.0)));
        assert!(!buffer.push(&Light::radial(Vec3::Z, Vec3::ONE, 100.0)));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_byte_view_matches_stride() {
        let packed = sample_lights().pack();
        assert_eq!(packed.as_bytes().len(), 4 * std::mem::size_of::<LightData>());
    }

    #[test]
    fn test_clear() {
        let mut buffer = sample_lights();
        assert!(!buffer.is_empty());
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.pack().offsets(), [0, 0, 0]);
    }
}
