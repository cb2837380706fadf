//! Mesh vertex buffers for per-frame transformation
use nalgebra::Point3;

use crate::error::{Result, TransformError};

/// Vertex indices of one triangular face
pub type Face = [usize; 3];

/// A mesh whose renderable vertices are recomputed from an immutable snapshot.
///
/// `vertices` is what the renderer draws. After
/// [`initialize_for_transforming`](Mesh::initialize_for_transforming) the
/// loaded positions are frozen in `original_vertices`, and every call to
/// [`apply_transforms`](crate::pipeline::apply_transforms) overwrites
/// `vertices` wholesale from that snapshot.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<Face>,
    original_vertices: Option<Vec<Point3<f32>>>,
}

impl Mesh {
    pub fn new(vertices: Vec<Point3<f32>>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            faces,
            original_vertices: None,
        }
    }

    /// Capture the current vertex buffer as the untransformed original.
    ///
    /// Must run once after loading and before any transform is applied.
    pub fn initialize_for_transforming(&mut self) -> Result<()> {
        if self.original_vertices.is_some() {
            return Err(TransformError::AlreadyInitialized);
        }
        tracing::debug!(vertices = self.vertices.len(), "Captured original mesh vertices");
        self.original_vertices = Some(self.vertices.clone());
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.original_vertices.is_some()
    }

    /// The frozen snapshot, if one has been taken
    pub fn original_vertices(&self) -> Option<&[Point3<f32>]> {
        self.original_vertices.as_deref()
    }

    /// Create a simple cube mesh centred on the origin
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let vertices = vec![
            Point3::new(-h, -h, -h),
            Point3::new(h, -h, -h),
            Point3::new(h, h, -h),
            Point3::new(-h, h, -h),
            Point3::new(-h, -h, h),
            Point3::new(h, -h, h),
            Point3::new(h, h, h),
            Point3::new(-h, h, h),
        ];

        // Counter-clockwise when seen from outside
        let faces = vec![
            // Front (+z)
            [4, 5, 6],
            [4, 6, 7],
            // Back (-z)
            [0, 3, 2],
            [0, 2, 1],
            // Top (+y)
            [3, 7, 6],
            [3, 6, 2],
            // Bottom (-y)
            [0, 1, 5],
            [0, 5, 4],
            // Right (+x)
            [1, 2, 6],
            [1, 6, 5],
            // Left (-x)
            [0, 4, 7],
            [0, 7, 3],
        ];

        Self::new(vertices, faces)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
