//! Orthographic and perspective projection matrices
use nalgebra::{Matrix3, Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};
use crate::transform::outer;
use crate::vector;

/// Project onto the plane through the origin perpendicular to `axis`
pub fn orthographic_projection(axis: &Vector3<f32>) -> Matrix4<f32> {
    let n = vector::normalize(axis);
    (Matrix3::identity() - outer(&n)).to_homogeneous()
}

/// Pinhole perspective with focal distance `d`.
///
/// Identity except for the `(3, 2)` entry, which adds `z / d` to the
/// homogeneous w so the later divide shrinks x and y with depth.
pub fn perspective_projection(d: f32) -> Result<Matrix4<f32>> {
    if d == 0.0 || !d.is_finite() {
        return Err(TransformError::DegenerateProjection { distance: d });
    }
    let mut p = Matrix4::identity();
    p[(3, 2)] = 1.0 / d;
    Ok(p)
}

/// Projection stage selected by the caller before composing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum ProjectionMode {
    #[default]
    Identity,
    Orthographic { axis: Vector3<f32> },
    Perspective { distance: f32 },
}

impl ProjectionMode {
    /// Map a raw selector value onto a mode.
    ///
    /// Strictly between -1 and 1 selects the orthographic projection along
    /// `axis`, exactly 1 selects perspective with `distance`, everything else
    /// (including -1) leaves the projection stage as identity.
    pub fn from_selector(selector: f32, axis: Vector3<f32>, distance: f32) -> Self {
        if selector > -1.0 && selector < 1.0 {
            Self::Orthographic { axis }
        } else if selector == 1.0 {
            Self::Perspective { distance }
        } else {
            Self::Identity
        }
    }

    /// Create the projection matrix
    pub fn matrix(&self) -> Result<Matrix4<f32>> {
        match self {
            Self::Identity => Ok(Matrix4::identity()),
            Self::Orthographic { axis } => Ok(orthographic_projection(axis)),
            Self::Perspective { distance } => perspective_projection(*distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector4};

    #[test]
    fn test_orthographic_is_idempotent() {
        let axes = [
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(-0.2, 0.5, 3.0),
            Vector3::zeros(),
        ];
        let points = [
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-4.0, 0.5, 0.0),
            Point3::new(0.0, 0.0, -7.0),
        ];
        for axis in &axes {
            let p = orthographic_projection(axis);
            for point in &points {
                let once = p.transform_point(point);
                let twice = p.transform_point(&once);
                assert_relative_eq!(once, twice, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_orthographic_flattens_along_axis() {
        let p = orthographic_projection(&Vector3::new(0.0, 0.0, 5.0));
        let flat = p.transform_point(&Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(flat, Point3::new(1.0, 2.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_perspective_feeds_depth_into_w() {
        let p = perspective_projection(2.0).unwrap();
        let clip = p * Vector4::new(4.0, 2.0, 2.0, 1.0);
        assert_relative_eq!(clip, Vector4::new(4.0, 2.0, 2.0, 2.0));
    }

    #[test]
    fn test_perspective_rejects_zero_distance() {
        assert_eq!(
            perspective_projection(0.0),
            Err(TransformError::DegenerateProjection { distance: 0.0 })
        );
        assert!(ProjectionMode::Perspective { distance: 0.0 }.matrix().is_err());
    }

    #[test]
    fn test_default_mode_is_identity() {
        assert_eq!(ProjectionMode::default(), ProjectionMode::Identity);
        assert_eq!(ProjectionMode::default().matrix(), Ok(Matrix4::identity()));
    }

    #[test]
    fn test_selector_policy() {
        let axis = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(ProjectionMode::from_selector(-1.0, axis, 3.0), ProjectionMode::Identity);
        assert_eq!(
            ProjectionMode::from_selector(0.2, axis, 3.0),
            ProjectionMode::Orthographic { axis }
        );
        assert_eq!(
            ProjectionMode::from_selector(1.0, axis, 3.0),
            ProjectionMode::Perspective { distance: 3.0 }
        );
    }
}
