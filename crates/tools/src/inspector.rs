use dronebay_common::Orientation;
use dronebay_kernel::{Actor, Camera, Scene};
use serde::Serialize;
use std::fmt;

/// Scene inspector for developer tooling.
///
/// Produces plain, serializable snapshots of the scene for the desktop HUD
/// and the headless CLI output.
pub struct SceneInspector;

impl SceneInspector {
    /// Produce a summary of the whole scene.
    pub fn summary(scene: &Scene) -> SceneSummary {
        SceneSummary {
            tick: scene.ticks(),
            active_camera: scene.active_camera_index(),
            actor: Self::actor(scene.actor()),
            cameras: scene.cameras().iter().map(Self::camera).collect(),
        }
    }

    pub fn actor(actor: &Actor) -> ActorInfo {
        let p = actor.position();
        ActorInfo {
            position: [p.x, p.y, p.z],
            rotation: actor.rotation(),
            effective_roll: actor.effective_roll(),
            spin_rate: actor.spin_rate(),
            spin_phase: actor.spin_phase(),
            roll_progress: actor.roll_animation().map(|r| r.progress),
        }
    }

    pub fn camera(camera: &Camera) -> CameraInfo {
        let p = camera.position();
        let t = camera.target();
        CameraInfo {
            kind: camera.kind().label(),
            position: [p.x, p.y, p.z],
            target: [t.x, t.y, t.z],
            fov_degrees: camera.fov_degrees(),
            orbit_angle: camera.orbit_angle(),
        }
    }
}

/// Summary of scene state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSummary {
    pub tick: u64,
    pub active_camera: usize,
    pub actor: ActorInfo,
    pub cameras: Vec<CameraInfo>,
}

impl SceneSummary {
    pub fn active(&self) -> &CameraInfo {
        &self.cameras[self.active_camera]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActorInfo {
    pub position: [f32; 3],
    pub rotation: Orientation,
    pub effective_roll: f32,
    pub spin_rate: f32,
    pub spin_phase: f32,
    /// Degrees rolled so far, `None` when no roll is running.
    pub roll_progress: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CameraInfo {
    pub kind: &'static str,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fov_degrees: f32,
    pub orbit_angle: Option<f32>,
}

impl fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Scene: tick={} camera={} ({})",
            self.tick,
            self.active_camera + 1,
            self.active().kind
        )?;
        writeln!(f, "{}", self.actor)?;
        for (i, cam) in self.cameras.iter().enumerate() {
            let marker = if i == self.active_camera { '>' } else { ' ' };
            writeln!(f, "{marker} [{}] {cam}", i + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ActorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.position;
        let r = self.rotation;
        write!(
            f,
            "Actor: pos=({:.2}, {:.2}, {:.2}) pitch={:.1} yaw={:.1} roll={:.1} spin={:.0}deg/s phase={:.1}",
            p[0], p[1], p[2], r.pitch, r.yaw, self.effective_roll, self.spin_rate, self.spin_phase
        )?;
        if let Some(progress) = self.roll_progress {
            write!(f, " rolling={progress:.1}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.position;
        let t = self.target;
        write!(
            f,
            "{}: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.0}",
            self.kind, p[0], p[1], p[2], t[0], t[1], t[2], self.fov_degrees
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_fresh_scene() {
        let scene = Scene::new();
        let s = SceneInspector::summary(&scene);
        assert_eq!(s.tick, 0);
        assert_eq!(s.active_camera, 0);
        assert_eq!(s.cameras.len(), 3);
        assert_eq!(s.active().kind, "global");
        assert_eq!(s.actor.position, [0.0, 2.0, 0.0]);
        assert_eq!(s.actor.roll_progress, None);
        assert_eq!(s.cameras[1].orbit_angle, Some(0.0));
    }

    #[test]
    fn summary_tracks_roll_and_camera() {
        let mut scene = Scene::new();
        scene.actor_mut().trigger_roll();
        scene.select_camera(2);
        scene.tick(0.5);
        let s = SceneInspector::summary(&scene);
        assert_eq!(s.tick, 1);
        assert_eq!(s.actor.roll_progress, Some(90.0));
        assert_eq!(s.actor.effective_roll, 90.0);
        assert_eq!(s.active().kind, "first-person");
    }

    #[test]
    fn display_marks_active_camera() {
        let mut scene = Scene::new();
        scene.select_camera(1);
        let text = SceneInspector::summary(&scene).to_string();
        assert!(text.contains("camera=2 (chopper)"));
        assert!(text.contains("> [2] chopper"));
        assert!(text.contains("spin=100deg/s"));
    }

    #[test]
    fn summary_serializes_to_json() {
        let scene = Scene::new();
        let json = serde_json::to_value(SceneInspector::summary(&scene)).unwrap();
        assert_eq!(json["active_camera"], 0);
        assert_eq!(json["cameras"][2]["kind"], "first-person");
        assert_eq!(json["actor"]["rotation"]["yaw"], 0.0);
    }
}
