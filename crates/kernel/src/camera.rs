use glam::{Mat4, Vec3};

/// Radius of the orbiting camera's circle around the world origin.
pub const ORBIT_RADIUS: f32 = 10.0;

const DEFAULT_FOV_DEGREES: f32 = 45.0;
const DEFAULT_ASPECT_RATIO: f32 = 4.0 / 3.0;
const DEFAULT_NEAR_CLIP: f32 = 0.1;
const DEFAULT_FAR_CLIP: f32 = 100.0;

/// What drives a camera's position and target.
///
/// The kind is fixed when the camera is built. Only `Orbiting` animates
/// itself; the other two are written by their owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraKind {
    /// Fixed overview placed once at construction.
    Static,
    /// Circles the world origin in the horizontal plane.
    Orbiting { angle: f32, radius: f32 },
    /// Rigidly follows the actor, cockpit-style.
    ActorAttached,
}

impl CameraKind {
    pub fn orbiting() -> Self {
        Self::Orbiting {
            angle: 0.0,
            radius: ORBIT_RADIUS,
        }
    }

    /// Short human-readable name for HUDs and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Static => "global",
            Self::Orbiting { .. } => "chopper",
            Self::ActorAttached => "first-person",
        }
    }
}

/// A single viewpoint: look-at state plus fixed perspective parameters.
#[derive(Debug, Clone)]
pub struct Camera {
    kind: CameraKind,
    position: Vec3,
    target: Vec3,
    up: Vec3,
    fov_degrees: f32,
    aspect_ratio: f32,
    near_clip: f32,
    far_clip: f32,
}

impl Camera {
    /// Create a camera of the given kind with the default projection.
    pub fn new(kind: CameraKind) -> Self {
        Self::with_aspect(kind, DEFAULT_ASPECT_RATIO)
    }

    /// Create a camera with a specific aspect ratio. The aspect ratio is
    /// frozen for the camera's lifetime; there is no resize handling.
    pub fn with_aspect(kind: CameraKind, aspect_ratio: f32) -> Self {
        Self {
            kind,
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: DEFAULT_FOV_DEGREES,
            aspect_ratio,
            near_clip: DEFAULT_NEAR_CLIP,
            far_clip: DEFAULT_FAR_CLIP,
        }
    }

    /// Advance self-driven motion by `dt` seconds.
    ///
    /// Only orbiting cameras move here: the angle accumulates by `dt`
    /// radians, the position is placed on the circle at the current height
    /// and the target is pulled back to the origin.
    pub fn update(&mut self, dt: f32) {
        if let CameraKind::Orbiting { angle, radius } = &mut self.kind {
            *angle += dt;
            self.position.x = *radius * angle.cos();
            self.position.z = *radius * angle.sin();
            self.target = Vec3::ZERO;
        }
    }

    /// Look-at transform from `position` toward `target`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// OpenGL-convention perspective (clip depth in `[-1, 1]`).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_degrees.to_radians(),
            self.aspect_ratio,
            self.near_clip,
            self.far_clip,
        )
    }

    /// Projection times view.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// What drives this camera.
    pub fn kind(&self) -> &CameraKind {
        &self.kind
    }

    /// Eye position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Point the camera looks at.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Up hint used to build the view matrix.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Vertical field of view in degrees.
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Width over height, fixed at construction.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Near and far clip distances.
    pub fn clip_range(&self) -> (f32, f32) {
        (self.near_clip, self.far_clip)
    }

    /// Accumulated orbit angle in radians, `None` for non-orbiting kinds.
    pub fn orbit_angle(&self) -> Option<f32> {
        match self.kind {
            CameraKind::Orbiting { angle, .. } => Some(angle),
            _ => None,
        }
    }

    /// Jump an orbiting camera to `angle` radians. Ignored for other kinds.
    pub fn set_orbit_angle(&mut self, value: f32) {
        if let CameraKind::Orbiting { angle, .. } = &mut self.kind {
            *angle = value;
        }
    }

    /// Move the eye.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Aim the camera at `target`.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Replace the up hint.
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-4;

    #[test]
    fn default_camera_looks_at_origin() {
        let cam = Camera::new(CameraKind::Static);
        assert_eq!(cam.position(), Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(cam.target(), Vec3::ZERO);
        assert_eq!(cam.up(), Vec3::Y);
        assert_eq!(cam.fov_degrees(), 45.0);
        assert_eq!(cam.clip_range(), (0.1, 100.0));
    }

    #[test]
    fn static_camera_ignores_update() {
        let mut cam = Camera::new(CameraKind::Static);
        cam.set_position(Vec3::new(0.0, 5.0, 10.0));
        cam.update(1.0);
        assert_eq!(cam.position(), Vec3::new(0.0, 5.0, 10.0));
        assert_eq!(cam.orbit_angle(), None);
    }

    #[test]
    fn actor_attached_camera_ignores_update() {
        let mut cam = Camera::new(CameraKind::ActorAttached);
        cam.set_position(Vec3::new(0.0, 2.0, 1.0));
        cam.set_target(Vec3::new(0.0, 2.0, 0.0));
        cam.update(0.5);
        assert_eq!(cam.position(), Vec3::new(0.0, 2.0, 1.0));
        assert_eq!(cam.target(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn orbit_quarter_turn_moves_along_circle() {
        let mut cam = Camera::new(CameraKind::orbiting());
        cam.set_position(Vec3::new(0.0, 10.0, 0.0));
        cam.update(0.0);
        assert!((cam.position() - Vec3::new(10.0, 10.0, 0.0)).length() < EPS);

        cam.update(FRAC_PI_2);
        let p = cam.position();
        assert!(p.x.abs() < EPS);
        assert_eq!(p.y, 10.0);
        assert!((p.z - 10.0).abs() < EPS);
        assert_eq!(cam.target(), Vec3::ZERO);
    }

    #[test]
    fn orbit_update_resets_target_to_origin() {
        let mut cam = Camera::new(CameraKind::orbiting());
        cam.set_target(Vec3::new(3.0, 2.0, 1.0));
        cam.update(0.016);
        assert_eq!(cam.target(), Vec3::ZERO);
    }

    #[test]
    fn set_orbit_angle_only_affects_orbiting() {
        let mut orbit = Camera::new(CameraKind::orbiting());
        orbit.set_orbit_angle(1.5);
        assert_eq!(orbit.orbit_angle(), Some(1.5));

        let mut fixed = Camera::new(CameraKind::Static);
        fixed.set_orbit_angle(1.5);
        assert_eq!(fixed.kind(), &CameraKind::Static);
    }

    #[test]
    fn view_matrix_maps_target_onto_negative_z() {
        let mut cam = Camera::new(CameraKind::Static);
        cam.set_position(Vec3::new(0.0, 5.0, 10.0));
        let target_in_view = cam.view_matrix().transform_point3(cam.target());
        assert!(target_in_view.x.abs() < EPS);
        assert!(target_in_view.y.abs() < EPS);
        assert!(target_in_view.z < 0.0);
    }

    #[test]
    fn projection_is_constant_and_finite() {
        let mut cam = Camera::new(CameraKind::orbiting());
        let before = cam.projection_matrix();
        cam.update(3.0);
        assert_eq!(before, cam.projection_matrix());
        assert!(cam.view_projection().is_finite());
    }

    #[test]
    fn kind_labels() {
        assert_eq!(CameraKind::Static.label(), "global");
        assert_eq!(CameraKind::orbiting().label(), "chopper");
        assert_eq!(CameraKind::ActorAttached.label(), "first-person");
    }
}
