//! Per-frame parameter values.
//!
//! Whatever supplies the controls (sliders, keys, a file) fills one of these
//! each frame and hands it to the core; nothing here is global or retained.
use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Mesh;
use crate::pipeline::{apply_transform_set, TransformSet};
use crate::projection::ProjectionMode;
use crate::transform::Transform;

/// Controls for transforming a single mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameParams {
    /// Shared by rotation and axis scaling
    pub axis: Vector3<f32>,
    pub angle_degrees: f32,
    /// Scale factor along `axis`
    pub scale: f32,
    pub translation: Vector3<f32>,
    pub projection: ProjectionMode,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            axis: Vector3::x(),
            angle_degrees: 0.0,
            scale: 1.0,
            translation: Vector3::zeros(),
            projection: ProjectionMode::Identity,
        }
    }
}

impl FrameParams {
    pub fn matrices(&self) -> Result<TransformSet> {
        let t = self.translation;
        Ok(TransformSet {
            translation: Transform::translation(t.x, t.y, t.z),
            rotation: Transform::rotation(&self.axis, self.angle_degrees.to_radians()),
            scaling: Transform::scaling(&self.axis, self.scale),
            projection: self.projection.matrix()?,
        })
    }

    /// Build this frame's matrices and apply them to `mesh`
    pub fn apply(&self, mesh: &mut Mesh) -> Result<()> {
        apply_transform_set(mesh, &self.matrices()?)
    }
}

/// Pose of the central body that orbiting and helix elements follow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentralParams {
    pub translation: Vector3<f32>,
    pub axis: Vector3<f32>,
    pub angle_degrees: f32,
}

impl Default for CentralParams {
    fn default() -> Self {
        Self {
            translation: Vector3::zeros(),
            axis: Vector3::x(),
            angle_degrees: 0.0,
        }
    }
}

impl CentralParams {
    /// `translation * rotation`
    pub fn central_transform(&self) -> Matrix4<f32> {
        let t = self.translation;
        Transform::translation(t.x, t.y, t.z)
            * Transform::rotation(&self.axis, self.angle_degrees.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_default_frame_is_identity() {
        let set = FrameParams::default().matrices().unwrap();
        assert_relative_eq!(set.composite(), Matrix4::identity());

        let mut mesh = Mesh::cube(2.0);
        mesh.initialize_for_transforming().unwrap();
        FrameParams::default().apply(&mut mesh).unwrap();
        assert_eq!(mesh.vertices.as_slice(), mesh.original_vertices().unwrap());
    }

    #[test]
    fn test_angle_is_converted_from_degrees() {
        let params = FrameParams {
            axis: Vector3::z(),
            angle_degrees: 90.0,
            ..FrameParams::default()
        };
        let set = params.matrices().unwrap();
        let p = set.rotation.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_orthographic_uses_frame_axis() {
        let params = FrameParams {
            axis: Vector3::y(),
            projection: ProjectionMode::Orthographic { axis: Vector3::y() },
            translation: Vector3::new(0.0, 3.0, 0.0),
            ..FrameParams::default()
        };
        let mut mesh = Mesh::cube(2.0);
        mesh.initialize_for_transforming().unwrap();
        params.apply(&mut mesh).unwrap();
        assert!(mesh.vertices.iter().all(|v| v.y.abs() < 1e-6));
    }

    #[test]
    fn test_zero_distance_perspective_propagates() {
        let params = FrameParams {
            projection: ProjectionMode::Perspective { distance: 0.0 },
            ..FrameParams::default()
        };
        let mut mesh = Mesh::cube(1.0);
        mesh.initialize_for_transforming().unwrap();
        assert_eq!(
            params.apply(&mut mesh),
            Err(TransformError::DegenerateProjection { distance: 0.0 })
        );
    }

    #[test]
    fn test_central_transform_rotates_then_translates() {
        let central = CentralParams {
            translation: Vector3::new(1.0, 0.0, 0.0),
            axis: Vector3::z(),
            angle_degrees: 90.0,
        };
        let p = central
            .central_transform()
            .transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(1.0, 1.0, 0.0), epsilon = 1e-6);
    }
}
