//! Spatial transform value type.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// Position of an entity in world space.
///
/// Stored as a homogeneous 4-tuple so renderers can upload it unchanged.
/// The fourth component is always `0.0` and carries no meaning here.
///
/// Values are immutable: movement produces a new transform rather than
/// editing one in place.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct SpatialTransform {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl SpatialTransform {
    pub const ORIGIN: SpatialTransform = SpatialTransform::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 0.0 }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.w
    }

    /// Returns a new transform offset by `(dx, dy, dz)`.
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32, dz: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Raw bytes in `[x, y, z, w]` order, for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Model matrix translating the origin to this position.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.to_vec3())
    }
}

impl From<Vec3> for SpatialTransform {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_origin() {
        assert_eq!(SpatialTransform::default(), SpatialTransform::ORIGIN);
        assert_eq!(SpatialTransform::ORIGIN.to_vec4(), Vec4::ZERO);
    }

    #[test]
    fn w_is_always_zero() {
        let t = SpatialTransform::new(1.0, 2.0, 3.0).translated(4.0, 5.0, 6.0);
        assert_eq!(t.w(), 0.0);
        assert_eq!(SpatialTransform::from(Vec3::ONE).w(), 0.0);
    }

    #[test]
    fn translated_leaves_source_untouched() {
        let a = SpatialTransform::new(5.0, 3.0, 2.0);
        let b = a.translated(-1.0, 0.0, 0.0);
        assert_eq!(a, SpatialTransform::new(5.0, 3.0, 2.0));
        assert_eq!(b, SpatialTransform::new(4.0, 3.0, 2.0));
    }

    #[test]
    fn non_finite_components_detected() {
        assert!(SpatialTransform::new(1.0, 2.0, 3.0).is_finite());
        assert!(!SpatialTransform::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!SpatialTransform::new(0.0, f32::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn bytes_are_xyzw() {
        let t = SpatialTransform::new(1.0, 2.0, 3.0);
        let floats: &[f32] = bytemuck::cast_slice(t.as_bytes());
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn matrix_translates_origin() {
        let t = SpatialTransform::new(1.0, -2.0, 3.0);
        let p = t.to_matrix().transform_point3(Vec3::ZERO);
        assert_eq!(p, t.to_vec3());
    }
}
