//! Fixed-order composition and application of transforms to a mesh
use nalgebra::{Matrix4, Point3};

use crate::error::{Result, TransformError, W_EPSILON};
use crate::geometry::Mesh;

/// The four stages of a mesh transform, applied translate first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSet {
    pub translation: Matrix4<f32>,
    pub rotation: Matrix4<f32>,
    pub scaling: Matrix4<f32>,
    pub projection: Matrix4<f32>,
}

impl TransformSet {
    /// A single combined transform with the remaining stages left as identity
    pub fn single(transform: Matrix4<f32>) -> Self {
        Self {
            translation: transform,
            ..Self::default()
        }
    }

    pub fn composite(&self) -> Matrix4<f32> {
        compose(&self.translation, &self.rotation, &self.scaling, &self.projection)
    }
}

impl Default for TransformSet {
    fn default() -> Self {
        Self {
            translation: Matrix4::identity(),
            rotation: Matrix4::identity(),
            scaling: Matrix4::identity(),
            projection: Matrix4::identity(),
        }
    }
}

/// Composite `P * S * R * T`: translate, then rotate, then scale, then project
pub fn compose(
    t: &Matrix4<f32>,
    r: &Matrix4<f32>,
    s: &Matrix4<f32>,
    p: &Matrix4<f32>,
) -> Matrix4<f32> {
    p * s * r * t
}

/// Apply a homogeneous matrix to a point, including the perspective divide.
///
/// `index` only labels the error.
pub fn transform_point(m: &Matrix4<f32>, point: &Point3<f32>, index: usize) -> Result<Point3<f32>> {
    let h = m * point.to_homogeneous();
    let w = h.w;
    if w.abs() < W_EPSILON || !w.is_finite() {
        return Err(TransformError::ZeroHomogeneousW { index, w });
    }
    Ok(Point3::new(h.x / w, h.y / w, h.z / w))
}

/// Recompute `mesh.vertices` from the original snapshot.
///
/// Every vertex is transformed before anything is written, so on error the
/// previous frame's buffer is left intact.
pub fn apply_transforms(
    mesh: &mut Mesh,
    t: &Matrix4<f32>,
    r: &Matrix4<f32>,
    s: &Matrix4<f32>,
    p: &Matrix4<f32>,
) -> Result<()> {
    let original = mesh
        .original_vertices()
        .ok_or(TransformError::MeshNotInitialized)?;

    let composite = compose(t, r, s, p);
    let transformed = original
        .iter()
        .enumerate()
        .map(|(i, v)| transform_point(&composite, v, i))
        .collect::<Result<Vec<_>>>()
        .inspect_err(|e| tracing::debug!("Mesh transform failed: {e}"))?;

    mesh.vertices = transformed;
    Ok(())
}

/// [`apply_transforms`] with the stages bundled in a [`TransformSet`]
pub fn apply_transform_set(mesh: &mut Mesh, set: &TransformSet) -> Result<()> {
    apply_transforms(mesh, &set.translation, &set.rotation, &set.scaling, &set.projection)
}
