//! 3-component vector arithmetic used by the matrix builders.
//!
//! These are written out explicitly rather than delegated to nalgebra so the
//! zero-length policy of [`normalize`] lives in exactly one place.

use nalgebra::Vector3;

/// Scalar product of two vectors
pub fn dot(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product
pub fn cross(a: &Vector3<f32>, b: &Vector3<f32>) -> Vector3<f32> {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Euclidean length, never negative
pub fn length(v: &Vector3<f32>) -> f32 {
    dot(v, v).sqrt()
}

/// Scale `v` to unit length.
///
/// A zero-length vector is returned unchanged instead of producing NaNs, so
/// matrix builders fed a zero axis degrade to a degenerate (but finite)
/// transform. Changing that policy only means changing this function.
pub fn normalize(v: &Vector3<f32>) -> Vector3<f32> {
    let len = length(v);
    if len == 0.0 {
        tracing::trace!("normalize called on zero vector, returning it unchanged");
        return *v;
    }
    Vector3::new(v.x / len, v.y / len, v.z / len)
}
