//! Error types for the transformation pipeline.

use thiserror::Error;

/// Homogeneous w-components closer to zero than this cannot be divided by.
pub const W_EPSILON: f32 = 1e-6;

/// Errors raised while building matrices or applying them to a mesh
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Perspective projection requested with a focal distance of zero
    #[error("Perspective projection needs a non-zero focal distance, got {distance}")]
    DegenerateProjection {
        /// Requested focal distance
        distance: f32,
    },

    /// The composite mapped a vertex onto the plane at infinity
    #[error("Vertex {index} has homogeneous w = {w}, perspective divide is undefined")]
    ZeroHomogeneousW {
        /// Position of the offending vertex in the original buffer
        index: usize,
        /// The w-component produced by the composite
        w: f32,
    },

    /// `apply_transforms` called before the original vertices were captured
    #[error("Mesh has no original vertex snapshot; call initialize_for_transforming first")]
    MeshNotInitialized,

    /// The original vertex snapshot is taken exactly once per mesh
    #[error("Mesh original vertices were already captured")]
    AlreadyInitialized,

    /// Helix element parameters were requested out of zero elements
    #[error("Helix has no elements to place")]
    EmptyHelix,

    /// Helix normalization would divide by zero
    #[error("Helix with spacing {spacing} and {turns} turns has zero extent")]
    DegenerateHelix {
        /// Spacing between turns
        spacing: f32,
        /// Number of turns
        turns: f32,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
