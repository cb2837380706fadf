//! Parametric motion: bodies orbiting a central transform and elements
//! strung along a helix.
//!
//! Everything here is a pure function of the configuration and the current
//! time; the only stored state is each [`OrbitBody`]'s construction-time
//! configuration.
use std::f32::consts::{FRAC_PI_4, TAU};

use nalgebra::{Matrix4, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};
use crate::transform::Transform;

/// Number of orbiting bodies created up front; the visible count selects a prefix.
pub const MAX_ORBITS: usize = 50;

/// Upper bound on helix elements, whatever `turns * cubes_per_turn` asks for.
pub const MAX_HELIX_ELEMENTS: usize = 1 << 16;

/// Fixed configuration of one orbiting body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitBody {
    /// Axis the body spins about
    pub axis: Vector3<f32>,
    /// Starting position on the orbit (radians)
    pub phase_offset: f32,
    /// Tilt of the orbit above the horizontal plane (radians)
    pub inclination: f32,
    pub clockwise: bool,
}

/// Where an orbiting body is and how it is turned at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPose {
    pub angle: f32,
    pub position: Vector3<f32>,
    pub own_rotation: Matrix4<f32>,
}

impl OrbitBody {
    /// Draw a configuration from `rng`: phase in `[0, 2π)`, inclination in
    /// `[-π/4, π/4)`, axis components in `[-1, 1)` and a fair-coin direction.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            axis: Vector3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            ),
            phase_offset: rng.random_range(0.0..TAU),
            inclination: rng.random_range(-FRAC_PI_4..FRAC_PI_4),
            clockwise: rng.random_bool(0.5),
        }
    }

    /// Orbit angle at time `t` seconds
    pub fn angle(&self, t: f32) -> f32 {
        let direction = if self.clockwise { 1.0 } else { -1.0 };
        t * direction + self.phase_offset
    }

    /// Position on a circle of radius `radius` in the x-z plane, lifted by
    /// the inclination
    pub fn position(&self, angle: f32, radius: f32) -> Vector3<f32> {
        Vector3::new(
            angle.cos() * radius,
            self.inclination.sin() * radius,
            angle.sin() * radius,
        )
    }

    pub fn pose(&self, t: f32, radius: f32) -> OrbitPose {
        let angle = self.angle(t);
        OrbitPose {
            angle,
            position: self.position(angle, radius),
            own_rotation: Transform::rotation(&self.axis, angle),
        }
    }

    /// `central * translation(position) * own_rotation`: spin in place, move
    /// onto the orbit, then follow the central body.
    pub fn world_transform(&self, central: &Matrix4<f32>, t: f32, radius: f32) -> Matrix4<f32> {
        let pose = self.pose(t, radius);
        let placement = Transform::translation(pose.position.x, pose.position.y, pose.position.z);
        central * placement * pose.own_rotation
    }
}

/// Live orbit controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParams {
    /// Number of bodies to show; rounded and clamped to `[0, MAX_ORBITS]`
    pub visible: f32,
    pub radius: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            visible: 5.0,
            radius: 5.0,
        }
    }
}

impl OrbitParams {
    pub fn visible_count(&self) -> usize {
        if self.visible.is_nan() {
            return 0;
        }
        self.visible.round().clamp(0.0, MAX_ORBITS as f32) as usize
    }
}

/// The full set of orbiting bodies, configured once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitSystem {
    pub bodies: Vec<OrbitBody>,
}

impl OrbitSystem {
    /// Create [`MAX_ORBITS`] bodies from a seeded generator
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bodies = (0..MAX_ORBITS).map(|_| OrbitBody::random(&mut rng)).collect();
        tracing::debug!(seed, count = MAX_ORBITS, "Seeded orbit system");
        Self { bodies }
    }

    /// World transforms of the currently visible bodies
    pub fn transforms(&self, central: &Matrix4<f32>, t: f32, params: &OrbitParams) -> Vec<Matrix4<f32>> {
        self.bodies
            .iter()
            .take(params.visible_count())
            .map(|body| body.world_transform(central, t, params.radius))
            .collect()
    }
}

/// Live helix controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HelixConfig {
    pub turns: f32,
    /// Radius of the coil before normalization
    pub spacing: f32,
    pub cubes_per_turn: f32,
    pub curve_length: f32,
    /// Overall display size the helix is normalized to
    pub scale_factor: f32,
    /// Uniform scale applied to every element
    pub cube_scale: f32,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            turns: 5.0,
            spacing: 10.0,
            cubes_per_turn: 20.0,
            curve_length: 10.0,
            scale_factor: 50.0,
            cube_scale: 0.1,
        }
    }
}

/// Point on the helix at parameter `t`, normalized by `spacing * turns * 2π`
pub fn helix_point(
    curve_length: f32,
    t: f32,
    spacing: f32,
    turns: f32,
    scale_factor: f32,
) -> Result<Vector3<f32>> {
    let extent = spacing * turns * TAU;
    if extent == 0.0 {
        return Err(TransformError::DegenerateHelix { spacing, turns });
    }
    let scale = scale_factor / extent;
    Ok(Vector3::new(
        spacing * t.cos() * scale,
        curve_length * t / TAU * scale,
        spacing * t.sin() * scale,
    ))
}

impl HelixConfig {
    /// Total elements: `turns * cubes_per_turn`, truncated and capped at
    /// [`MAX_HELIX_ELEMENTS`]
    pub fn element_count(&self) -> usize {
        let n = self.turns * self.cubes_per_turn;
        if n.is_nan() || n <= 0.0 {
            return 0;
        }
        if n >= MAX_HELIX_ELEMENTS as f32 {
            tracing::trace!(requested = n, "Helix element count capped");
            return MAX_HELIX_ELEMENTS;
        }
        n as usize
    }

    /// Signed element indices, centred on zero: `floor(-n/2) .. floor(n/2)`
    pub fn indices(&self) -> std::ops::Range<i64> {
        let n = self.element_count() as i64;
        (-n).div_euclid(2)..n / 2
    }

    /// Curve parameter of element `index` out of `count`
    pub fn parameter(&self, index: i64, count: usize) -> Result<f32> {
        if count == 0 {
            return Err(TransformError::EmptyHelix);
        }
        Ok(index as f32 * (TAU * self.turns / count as f32))
    }

    /// Position of element `index` out of `count`
    pub fn position(&self, index: i64, count: usize) -> Result<Vector3<f32>> {
        helix_point(
            self.curve_length,
            self.parameter(index, count)?,
            self.spacing,
            self.turns,
            self.scale_factor,
        )
    }

    /// `central * translation(position) * spin * uniform_scaling`, with the
    /// element spinning about the vertical axis by `time` radians.
    pub fn element_transform(
        &self,
        central: &Matrix4<f32>,
        index: i64,
        count: usize,
        time: f32,
    ) -> Result<Matrix4<f32>> {
        let p = self.position(index, count)?;
        let spin = Transform::rotation(&Vector3::y(), time);
        let scaling = Transform::uniform_scaling(self.cube_scale);
        Ok(central * Transform::translation(p.x, p.y, p.z) * spin * scaling)
    }

    /// Transforms of every element at `time`
    pub fn transforms(&self, central: &Matrix4<f32>, time: f32) -> Result<Vec<Matrix4<f32>>> {
        let count = self.element_count();
        self.indices()
            .map(|i| self.element_transform(central, i, count, time))
            .collect()
    }
}
