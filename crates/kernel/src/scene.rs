use crate::actor::Actor;
use crate::camera::{Camera, CameraKind};
use crate::tuning::ActorTuning;
use glam::{Mat4, Vec3};

/// Cockpit camera offset in the actor's yaw frame.
pub const COCKPIT_OFFSET: Vec3 = Vec3::new(0.0, 0.3, -0.5);

/// Below this `|dir x Y|` the cockpit view is treated as vertical.
const VERTICAL_VIEW_EPSILON: f32 = 1e-3;

/// The simulated scene: one actor and a fixed, ordered set of cameras.
///
/// Camera order is the selection index: 0 is the static overview, 1 the
/// orbiting chopper view, 2 the actor-attached cockpit view.
///
/// The orbiting camera circles the world origin but is re-targeted at the
/// actor every tick. Once the actor flies far from the origin the orbit no
/// longer centers on it.
#[derive(Debug, Clone)]
pub struct Scene {
    actor: Actor,
    cameras: Vec<Camera>,
    active_camera: usize,
    ticks: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Build the standard scene with default tuning and a 4:3 viewport.
    pub fn new() -> Self {
        Self::with_tuning(ActorTuning::default(), 4.0 / 3.0)
    }

    /// Build the scene with custom actor tuning and a fixed aspect ratio.
    pub fn with_tuning(tuning: ActorTuning, aspect_ratio: f32) -> Self {
        let mut global = Camera::with_aspect(CameraKind::Static, aspect_ratio);
        global.set_position(Vec3::new(0.0, 5.0, 10.0));
        global.set_target(Vec3::ZERO);

        // Position is replaced by the orbit on the first tick; the height stays.
        let mut chopper = Camera::with_aspect(CameraKind::orbiting(), aspect_ratio);
        chopper.set_position(Vec3::new(0.0, 10.0, 0.0));
        chopper.set_target(Vec3::ZERO);

        let mut cockpit = Camera::with_aspect(CameraKind::ActorAttached, aspect_ratio);
        cockpit.set_position(Vec3::new(0.0, 2.0, 1.0));
        cockpit.set_target(Vec3::new(0.0, 2.0, 0.0));

        tracing::info!(aspect_ratio, "scene constructed with 3 cameras");

        Self {
            actor: Actor::new(tuning),
            cameras: vec![global, chopper, cockpit],
            active_camera: 0,
            ticks: 0,
        }
    }

    /// Advance the simulation by one fixed step of `dt` seconds.
    ///
    /// The actor moves first; camera state that depends on it is derived
    /// from the updated actor.
    pub fn tick(&mut self, dt: f32) {
        self.actor.update(dt);

        let actor_position = self.actor.position();
        let yaw = self.actor.rotation().yaw.to_radians();
        let cockpit_position =
            actor_position + Mat4::from_rotation_y(yaw).transform_point3(COCKPIT_OFFSET);
        let cockpit_target = actor_position + self.actor.front();
        let up_hint = cockpit_up(cockpit_target - cockpit_position, yaw);

        for camera in &mut self.cameras {
            let kind = *camera.kind();
            match kind {
                CameraKind::Static => {}
                CameraKind::Orbiting { .. } => {
                    camera.update(dt);
                    camera.set_target(actor_position);
                }
                CameraKind::ActorAttached => {
                    camera.set_position(cockpit_position);
                    camera.set_target(cockpit_target);
                    camera.set_up(up_hint);
                }
            }
        }

        self.ticks += 1;
    }

    /// Make camera `index` active. Out-of-range indices are ignored.
    pub fn select_camera(&mut self, index: usize) {
        if index < self.cameras.len() {
            if index != self.active_camera {
                tracing::info!(
                    index,
                    kind = self.cameras[index].kind().label(),
                    "active camera changed"
                );
            }
            self.active_camera = index;
        } else {
            tracing::debug!(index, count = self.cameras.len(), "camera index out of range");
        }
    }

    pub fn active_camera(&self) -> &Camera {
        &self.cameras[self.active_camera]
    }

    pub fn active_camera_index(&self) -> usize {
        self.active_camera
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Control entry point for input dispatch.
    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    /// Number of ticks run since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// World up, unless the cockpit looks straight up or down. Then the up hint
/// falls back to the yaw frame's tail (looking up) or nose (looking down).
fn cockpit_up(view_dir: Vec3, yaw: f32) -> Vec3 {
    let dir = view_dir.normalize_or_zero();
    if dir.cross(Vec3::Y).length() > VERTICAL_VIEW_EPSILON {
        return Vec3::Y;
    }
    let tail = Mat4::from_rotation_y(yaw).transform_vector3(Vec3::Z);
    if dir.y >= 0.0 { tail } else { -tail }
}
