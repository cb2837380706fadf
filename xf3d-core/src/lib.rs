//! XF3D Core Library - Homogeneous transformation pipeline
//!
//! Builds 4x4 rotation, scaling, translation and projection matrices, composes
//! them in a fixed order and applies the result to a mesh's vertex buffer with
//! the perspective divide. Orbit and helix motion generators derive
//! per-object transforms from time and configuration.

pub mod error;
pub mod frame;
pub mod geometry;
pub mod motion;
pub mod pipeline;
pub mod projection;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use error::{Result, TransformError};
pub use frame::{CentralParams, FrameParams};
pub use geometry::{Face, Mesh};
pub use motion::{HelixConfig, OrbitBody, OrbitParams, OrbitPose, OrbitSystem, MAX_HELIX_ELEMENTS, MAX_ORBITS};
pub use pipeline::{apply_transform_set, apply_transforms, compose, TransformSet};
pub use projection::{orthographic_projection, perspective_projection, ProjectionMode};
pub use transform::Transform;
