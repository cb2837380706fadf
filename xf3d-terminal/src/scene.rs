//! Demo scenes and the keyboard-adjustable values that drive them.
//!
//! Each frame a scene turns its current values into the core's parameter
//! types, transforms the shared mesh once per drawn object and hands the
//! result to the renderer.
use clap::ValueEnum;
use nalgebra::Vector3;
use xf3d_core::{
    apply_transform_set, CentralParams, FrameParams, HelixConfig, Mesh, OrbitParams, OrbitSystem,
    ProjectionMode, TransformSet,
};

use crate::camera::Camera;
use crate::renderer::AsciiRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// One mesh under rotation, axis scaling, translation and projection
    Viewer,
    /// A central mesh with bodies orbiting it
    Orbit,
    /// Spinning elements strung along a helix
    Helix,
}

impl SceneKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Orbit => "orbit",
            Self::Helix => "helix",
        }
    }

    /// How far back the camera sits to frame the scene
    pub fn camera_distance(self) -> f32 {
        match self {
            Self::Viewer => 9.0,
            Self::Orbit => 20.0,
            Self::Helix => 4.0,
        }
    }

    pub fn params(self) -> &'static [Param] {
        use Param::*;
        match self {
            Self::Viewer => &[
                AxisX, AxisY, AxisZ, Angle, Scale, TranslateX, TranslateY, TranslateZ, Distance,
            ],
            Self::Orbit => &[
                TranslateX, TranslateY, TranslateZ, AxisX, AxisY, AxisZ, Angle, Orbits, Radius,
            ],
            Self::Helix => &[
                TranslateX, TranslateY, TranslateZ, AxisX, AxisY, AxisZ, Angle, CubeScale, Spacing,
                CubesPerTurn, Turns,
            ],
        }
    }
}

/// An adjustable scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    TranslateX,
    TranslateY,
    TranslateZ,
    AxisX,
    AxisY,
    AxisZ,
    Angle,
    Scale,
    Distance,
    Orbits,
    Radius,
    CubeScale,
    Spacing,
    CubesPerTurn,
    Turns,
}

impl Param {
    pub fn label(self) -> &'static str {
        match self {
            Self::TranslateX => "Translation X",
            Self::TranslateY => "Translation Y",
            Self::TranslateZ => "Translation Z",
            Self::AxisX => "Axis X",
            Self::AxisY => "Axis Y",
            Self::AxisZ => "Axis Z",
            Self::Angle => "Angle (deg)",
            Self::Scale => "Scale",
            Self::Distance => "Projection distance",
            Self::Orbits => "Orbiting bodies",
            Self::Radius => "Orbit radius",
            Self::CubeScale => "Cube size",
            Self::Spacing => "Turn spacing",
            Self::CubesPerTurn => "Cubes per turn",
            Self::Turns => "Turns",
        }
    }

    /// Inclusive bounds of the value
    pub fn range(self) -> (f32, f32) {
        match self {
            Self::TranslateX | Self::TranslateY | Self::TranslateZ => (-5.0, 5.0),
            Self::AxisX | Self::AxisY | Self::AxisZ => (-1.0, 1.0),
            Self::Angle => (0.0, 360.0),
            Self::Scale => (0.4, 10.0),
            Self::Distance => (1.0, 8.0),
            Self::Orbits => (0.0, xf3d_core::MAX_ORBITS as f32),
            Self::Radius => (0.0, 10.0),
            Self::CubeScale => (0.01, 1.0),
            Self::Spacing => (0.5, 15.0),
            Self::CubesPerTurn => (1.0, 30.0),
            Self::Turns => (1.0, 10.0),
        }
    }

    pub fn step(self) -> f32 {
        match self {
            Self::TranslateX | Self::TranslateY | Self::TranslateZ => 0.25,
            Self::AxisX | Self::AxisY | Self::AxisZ => 0.1,
            Self::Angle => 5.0,
            Self::Scale | Self::Distance | Self::Radius | Self::Spacing => 0.5,
            Self::Orbits | Self::CubesPerTurn | Self::Turns => 1.0,
            Self::CubeScale => 0.02,
        }
    }
}

/// Current values of every control plus the fixed orbit configuration
pub struct Scene {
    pub kind: SceneKind,
    selected: usize,
    translation: Vector3<f32>,
    axis: Vector3<f32>,
    angle_degrees: f32,
    scale: f32,
    distance: f32,
    /// -1 identity, 0 orthographic, 1 perspective
    projection_selector: f32,
    orbit: OrbitParams,
    helix: HelixConfig,
    orbits: OrbitSystem,
}

impl Scene {
    pub fn new(kind: SceneKind, seed: u64) -> Self {
        Self::with_orbits(kind, OrbitSystem::seeded(seed))
    }

    fn with_orbits(kind: SceneKind, orbits: OrbitSystem) -> Self {
        Self {
            kind,
            selected: 0,
            translation: Vector3::zeros(),
            axis: Vector3::x(),
            angle_degrees: 0.0,
            scale: 1.0,
            distance: 1.0,
            projection_selector: -1.0,
            orbit: OrbitParams::default(),
            helix: HelixConfig::default(),
            orbits,
        }
    }

    /// Restore every control to its starting value, keeping the orbit bodies
    pub fn reset(&mut self) {
        let orbits = std::mem::replace(&mut self.orbits, OrbitSystem { bodies: Vec::new() });
        *self = Self::with_orbits(self.kind, orbits);
    }

    pub fn selected(&self) -> Param {
        let params = self.kind.params();
        params[self.selected % params.len()]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.kind.params().len();
    }

    pub fn select_previous(&mut self) {
        let len = self.kind.params().len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn value(&self, param: Param) -> f32 {
        match param {
            Param::TranslateX => self.translation.x,
            Param::TranslateY => self.translation.y,
            Param::TranslateZ => self.translation.z,
            Param::AxisX => self.axis.x,
            Param::AxisY => self.axis.y,
            Param::AxisZ => self.axis.z,
            Param::Angle => self.angle_degrees,
            Param::Scale => self.scale,
            Param::Distance => self.distance,
            Param::Orbits => self.orbit.visible,
            Param::Radius => self.orbit.radius,
            Param::CubeScale => self.helix.cube_scale,
            Param::Spacing => self.helix.spacing,
            Param::CubesPerTurn => self.helix.cubes_per_turn,
            Param::Turns => self.helix.turns,
        }
    }

    fn value_mut(&mut self, param: Param) -> &mut f32 {
        match param {
            Param::TranslateX => &mut self.translation.x,
            Param::TranslateY => &mut self.translation.y,
            Param::TranslateZ => &mut self.translation.z,
            Param::AxisX => &mut self.axis.x,
            Param::AxisY => &mut self.axis.y,
            Param::AxisZ => &mut self.axis.z,
            Param::Angle => &mut self.angle_degrees,
            Param::Scale => &mut self.scale,
            Param::Distance => &mut self.distance,
            Param::Orbits => &mut self.orbit.visible,
            Param::Radius => &mut self.orbit.radius,
            Param::CubeScale => &mut self.helix.cube_scale,
            Param::Spacing => &mut self.helix.spacing,
            Param::CubesPerTurn => &mut self.helix.cubes_per_turn,
            Param::Turns => &mut self.helix.turns,
        }
    }

    /// Nudge the selected value by `steps` increments, clamped to its range
    pub fn adjust(&mut self, steps: f32) {
        let param = self.selected();
        let (min, max) = param.range();
        let value = self.value_mut(param);
        *value = (*value + steps * param.step()).clamp(min, max);
    }

    /// Cycle identity -> orthographic -> perspective
    pub fn cycle_projection(&mut self) {
        self.projection_selector = match self.projection_selector {
            s if s < 0.0 => 0.0,
            s if s < 1.0 => 1.0,
            _ => -1.0,
        };
    }

    pub fn projection(&self) -> ProjectionMode {
        ProjectionMode::from_selector(self.projection_selector, self.axis, self.distance)
    }

    pub fn frame_params(&self) -> FrameParams {
        FrameParams {
            axis: self.axis,
            angle_degrees: self.angle_degrees,
            scale: self.scale,
            translation: self.translation,
            projection: self.projection(),
        }
    }

    pub fn central_params(&self) -> CentralParams {
        CentralParams {
            translation: self.translation,
            axis: self.axis,
            angle_degrees: self.angle_degrees,
        }
    }

    /// Transform and draw everything in the scene at `time` seconds
    pub fn render(
        &self,
        mesh: &mut Mesh,
        renderer: &mut AsciiRenderer,
        camera: &Camera,
        time: f32,
    ) -> xf3d_core::Result<()> {
        match self.kind {
            SceneKind::Viewer => {
                self.frame_params().apply(mesh)?;
                renderer.render_mesh(mesh, camera);
            }
            SceneKind::Orbit => {
                let central = self.central_params().central_transform();
                apply_transform_set(mesh, &TransformSet::single(central))?;
                renderer.render_mesh(mesh, camera);

                for transform in self.orbits.transforms(&central, time, &self.orbit) {
                    apply_transform_set(mesh, &TransformSet::single(transform))?;
                    renderer.render_mesh(mesh, camera);
                }
            }
            SceneKind::Helix => {
                let central = self.central_params().central_transform();
                for transform in self.helix.transforms(&central, time)? {
                    apply_transform_set(mesh, &TransformSet::single(transform))?;
                    renderer.render_mesh(mesh, camera);
                }
            }
        }
        Ok(())
    }

    /// One-line summary of the projection mode, for the status bar
    pub fn projection_label(&self) -> &'static str {
        match self.projection() {
            ProjectionMode::Identity => "none",
            ProjectionMode::Orthographic { .. } => "orthographic",
            ProjectionMode::Perspective { .. } => "perspective",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_clamps_to_range() {
        let mut scene = Scene::new(SceneKind::Viewer, 1);
        assert_eq!(scene.selected(), Param::AxisX);
        scene.adjust(5.0);
        assert_eq!(scene.value(Param::AxisX), 1.0);
        scene.adjust(-30.0);
        assert_eq!(scene.value(Param::AxisX), -1.0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut scene = Scene::new(SceneKind::Orbit, 1);
        scene.select_previous();
        assert_eq!(scene.selected(), Param::Radius);
        scene.select_next();
        assert_eq!(scene.selected(), Param::TranslateX);
    }

    #[test]
    fn test_projection_cycle() {
        let mut scene = Scene::new(SceneKind::Viewer, 1);
        assert_eq!(scene.projection(), ProjectionMode::Identity);
        scene.cycle_projection();
        assert!(matches!(scene.projection(), ProjectionMode::Orthographic { .. }));
        scene.cycle_projection();
        assert_eq!(scene.projection(), ProjectionMode::Perspective { distance: 1.0 });
        scene.cycle_projection();
        assert_eq!(scene.projection(), ProjectionMode::Identity);
    }

    #[test]
    fn test_reset_keeps_orbit_bodies() {
        let mut scene = Scene::new(SceneKind::Orbit, 9);
        let bodies = scene.orbits.clone();
        scene.adjust(4.0);
        scene.reset();
        assert_eq!(scene.value(Param::TranslateX), 0.0);
        assert_eq!(scene.orbits, bodies);
    }

    #[test]
    fn test_every_scene_renders() {
        for kind in [SceneKind::Viewer, SceneKind::Orbit, SceneKind::Helix] {
            let scene = Scene::new(kind, 3);
            let mut mesh = Mesh::cube(2.0);
            mesh.initialize_for_transforming().unwrap();
            let camera = Camera::new(80, 40, kind.camera_distance());
            let mut renderer = AsciiRenderer::new(80, 40);

            scene.render(&mut mesh, &mut renderer, &camera, 1.5).unwrap();
            let drawn = (0..40).any(|y| (0..80).any(|x| renderer.cell(x, y) != Some(' ')));
            assert!(drawn, "{} scene drew nothing", kind.name());
        }
    }

    #[test]
    fn test_perspective_at_cube_face_reports_error() {
        let mut scene = Scene::new(SceneKind::Viewer, 1);
        scene.cycle_projection();
        scene.cycle_projection();
        let mut mesh = Mesh::cube(2.0);
        mesh.initialize_for_transforming().unwrap();
        let camera = Camera::new(80, 40, 9.0);
        let mut renderer = AsciiRenderer::new(80, 40);

        // Distance 1 puts the back face of a size-2 cube at w = 0
        assert!(scene.render(&mut mesh, &mut renderer, &camera, 0.0).is_err());
    }
}
