//! Homogeneous 4x4 affine transformation matrices
//!
//! Points are column vectors multiplied on the left, so translation lives in
//! the last column and every matrix built here has `[0, 0, 0, 1]` as its last
//! row.
use nalgebra::{Matrix3, Matrix4, Vector3};

use crate::vector;

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Rotation by `theta` radians about an arbitrary axis (Rodrigues' formula).
    ///
    /// The axis is normalized first; a zero axis yields `I * cos(theta)` in the
    /// upper 3x3 block rather than an error.
    pub fn rotation(axis: &Vector3<f32>, theta: f32) -> Matrix4<f32> {
        let n = vector::normalize(axis);
        let (sin_theta, cos_theta) = theta.sin_cos();

        let r3 = Matrix3::identity() * cos_theta
            + outer(&n) * (1.0 - cos_theta)
            + cross_matrix(&n) * sin_theta;

        r3.to_homogeneous()
    }

    /// Scale by `k` along an arbitrary axis, leaving the orthogonal plane alone
    pub fn scaling(axis: &Vector3<f32>, k: f32) -> Matrix4<f32> {
        let n = vector::normalize(axis);
        let s3 = Matrix3::identity() + outer(&n) * (k - 1.0);
        s3.to_homogeneous()
    }

    /// Scale by `k` along every axis: `diag(k, k, k, 1)`
    pub fn uniform_scaling(k: f32) -> Matrix4<f32> {
        Matrix4::new_scaling(k)
    }

    /// Create a translation matrix
    pub fn translation(tx: f32, ty: f32, tz: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(tx, ty, tz))
    }
}

/// Outer product `n ⊗ n`
pub(crate) fn outer(n: &Vector3<f32>) -> Matrix3<f32> {
    n * n.transpose()
}

/// Skew-symmetric matrix `K` with `K * v == n × v`
#[rustfmt::skip]
fn cross_matrix(n: &Vector3<f32>) -> Matrix3<f32> {
    Matrix3::new(
        0.0, -n.z, n.y,
        n.z, 0.0, -n.x,
        -n.y, n.x, 0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector4};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn sample_axes() -> Vec<Vector3<f32>> {
        vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(-0.4, 2.0, 0.7),
        ]
    }

    #[test]
    fn test_zero_angle_rotation_is_identity() {
        let mut axes = sample_axes();
        axes.push(Vector3::zeros());
        for axis in axes {
            assert_relative_eq!(Transform::rotation(&axis, 0.0), Matrix4::identity());
        }
    }

    #[test]
    fn test_rotation_is_orthogonal_with_unit_determinant() {
        for axis in sample_axes() {
            for theta in [0.3, FRAC_PI_2, 2.0, PI, -1.1, 5.5] {
                let r = Transform::rotation(&axis, theta);
                assert_relative_eq!(r * r.transpose(), Matrix4::identity(), epsilon = 1e-5);
                assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-5);
                assert_eq!(r.row(3).into_owned(), Matrix4::<f32>::identity().row(3).into_owned());
            }
        }
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let r = Transform::rotation(&Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let p = r.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_accepts_non_unit_axis() {
        let unit = Transform::rotation(&Vector3::new(0.0, 1.0, 0.0), 0.8);
        let long = Transform::rotation(&Vector3::new(0.0, 7.5, 0.0), 0.8);
        assert_relative_eq!(unit, long, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_axis_rotation_degenerates_to_cosine_scale() {
        let theta = 1.0_f32;
        let r = Transform::rotation(&Vector3::zeros(), theta);
        let expected = Matrix3::identity() * theta.cos();
        assert_relative_eq!(r, expected.to_homogeneous(), epsilon = 1e-6);
    }

    #[test]
    fn test_unit_scaling_is_identity() {
        let mut axes = sample_axes();
        axes.push(Vector3::zeros());
        for axis in axes {
            assert_relative_eq!(Transform::scaling(&axis, 1.0), Matrix4::identity());
        }
        assert_eq!(Transform::uniform_scaling(1.0), Matrix4::identity());
    }

    #[test]
    fn test_scaling_only_stretches_along_axis() {
        let s = Transform::scaling(&Vector3::new(0.0, 0.0, 2.0), 3.0);
        let p = s.transform_point(&Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(p, Point3::new(1.0, 1.0, 3.0), epsilon = 1e-6);
    }

    #[test]
    fn test_uniform_scaling_diagonal() {
        let s = Transform::uniform_scaling(0.5);
        assert_eq!(s, Matrix4::from_diagonal(&Vector4::new(0.5, 0.5, 0.5, 1.0)));
    }

    #[test]
    fn test_translation_moves_origin() {
        let t = Transform::translation(2.0, -1.0, 0.0);
        let moved = t * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(moved, Vector4::new(2.0, -1.0, 0.0, 1.0));
    }
}
