use crate::tuning::ActorTuning;
use dronebay_common::{Orientation, wrap_degrees};
use glam::{Mat4, Vec3};

/// In-progress one-shot roll. Present only while the roll is running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollAnimation {
    /// Degrees rolled so far, always in `[0, 360)`.
    pub progress: f32,
}

/// The drone: kinematic state plus its discrete controls.
///
/// The actor knows nothing about cameras. Every operation is total:
/// out-of-range requests are clamped or ignored.
#[derive(Debug, Clone)]
pub struct Actor {
    position: Vec3,
    rotation: Orientation,
    spin_rate: f32,
    spin_phase: f32,
    roll_animation: Option<RollAnimation>,
    tuning: ActorTuning,
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(ActorTuning::default())
    }
}

impl Actor {
    /// Create an actor at the tuning's spawn point with zero orientation.
    pub fn new(tuning: ActorTuning) -> Self {
        Self {
            position: tuning.spawn_point,
            rotation: Orientation::ZERO,
            spin_rate: tuning.initial_spin_rate,
            spin_phase: 0.0,
            roll_animation: None,
            tuning,
        }
    }

    /// Advance rotor phase and any running roll by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.spin_phase = wrap_degrees(self.spin_phase + self.spin_rate * dt);

        if let Some(roll) = &mut self.roll_animation {
            roll.progress += self.tuning.roll_rate * dt;
            if roll.progress >= 360.0 {
                self.roll_animation = None;
                tracing::debug!("roll finished");
            }
        }
    }

    /// Raise the rotor speed by one step.
    pub fn increase_spin(&mut self) {
        self.spin_rate += self.tuning.spin_step;
    }

    /// Lower the rotor speed by one step unless that would reach the floor.
    pub fn decrease_spin(&mut self) {
        let next = self.spin_rate - self.tuning.spin_step;
        if next > self.tuning.spin_floor {
            self.spin_rate = next;
        } else {
            tracing::debug!(spin_rate = self.spin_rate, "spin decrease clamped at floor");
        }
    }

    /// Start a full roll. Ignored while one is already running.
    pub fn trigger_roll(&mut self) {
        if self.roll_animation.is_none() {
            self.roll_animation = Some(RollAnimation { progress: 0.0 });
            tracing::debug!("roll started");
        }
    }

    /// Step along the facing direction. The step length scales with the
    /// rotor speed, so a faster spin travels further per press.
    pub fn move_forward(&mut self) {
        self.position += self.front() * self.step_length();
    }

    /// Step against the facing direction.
    pub fn move_backward(&mut self) {
        self.position -= self.front() * self.step_length();
    }

    /// Yaw left by one turn step.
    pub fn turn_left(&mut self) {
        self.rotation.yaw += self.tuning.turn_step;
    }

    /// Yaw right by one turn step.
    pub fn turn_right(&mut self) {
        self.rotation.yaw -= self.tuning.turn_step;
    }

    /// Pitch the nose up by one turn step.
    pub fn turn_up(&mut self) {
        self.rotation.pitch += self.tuning.turn_step;
    }

    /// Pitch the nose down by one turn step.
    pub fn turn_down(&mut self) {
        self.rotation.pitch -= self.tuning.turn_step;
    }

    /// Return to the spawn point with zero orientation and no roll.
    /// The rotor speed is kept.
    pub fn reset(&mut self) {
        self.position = self.tuning.spawn_point;
        self.rotation = Orientation::ZERO;
        self.roll_animation = None;
        tracing::info!("actor reset to spawn point");
    }

    /// Unit facing vector. Zero rotation faces -Z.
    pub fn front(&self) -> Vec3 {
        let yaw = self.rotation.yaw.to_radians();
        let pitch = self.rotation.pitch.to_radians();
        Vec3::new(
            -yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
        .normalize()
    }

    /// World transform of the actor body: translate, then yaw about Y,
    /// pitch about X and finally roll (including any running roll) about Z.
    pub fn base_transform(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.rotation.yaw.to_radians())
            * Mat4::from_rotation_x(self.rotation.pitch.to_radians())
            * Mat4::from_rotation_z(self.effective_roll().to_radians())
    }

    /// Current position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Pitch, yaw and static roll in degrees.
    pub fn rotation(&self) -> Orientation {
        self.rotation
    }

    /// Static roll plus the running roll's progress, in degrees.
    pub fn effective_roll(&self) -> f32 {
        self.rotation.roll + self.roll_animation.map_or(0.0, |r| r.progress)
    }

    /// Rotor speed in degrees per second.
    pub fn spin_rate(&self) -> f32 {
        self.spin_rate
    }

    /// Rotor angle in `[0, 360)`.
    pub fn spin_phase(&self) -> f32 {
        self.spin_phase
    }

    /// The running roll, if any.
    pub fn roll_animation(&self) -> Option<RollAnimation> {
        self.roll_animation
    }

    /// Whether a roll is in progress.
    pub fn is_rolling(&self) -> bool {
        self.roll_animation.is_some()
    }

    /// Step sizes and rates this actor was built with.
    pub fn tuning(&self) -> &ActorTuning {
        &self.tuning
    }

    fn step_length(&self) -> f32 {
        self.spin_rate * self.tuning.move_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn starts_at_spawn_with_identity_orientation() {
        let a = Actor::default();
        assert_eq!(a.position(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(a.rotation(), Orientation::ZERO);
        assert_eq!(a.spin_rate(), 100.0);
        assert_eq!(a.spin_phase(), 0.0);
        assert!(!a.is_rolling());
    }

    #[test]
    fn spin_phase_stays_in_range_and_is_continuous() {
        let mut a = Actor::default();
        for _ in 0..20 {
            a.increase_spin();
        }
        let dt = 1.0 / 60.0;
        for _ in 0..1000 {
            let before = a.spin_phase();
            a.update(dt);
            let after = a.spin_phase();
            assert!((0.0..360.0).contains(&after));
            let advanced = wrap_degrees(after - before);
            let expected = wrap_degrees(a.spin_rate() * dt);
            assert!((advanced - expected).abs() < 1e-2);
        }
    }

    #[test]
    fn zero_dt_leaves_phase_unchanged() {
        let mut a = Actor::default();
        a.update(0.5);
        let phase = a.spin_phase();
        a.update(0.0);
        assert_eq!(a.spin_phase(), phase);
    }

    #[test]
    fn decrease_spin_never_reaches_floor() {
        let mut a = Actor::default();
        for _ in 0..50 {
            a.decrease_spin();
            assert!(a.spin_rate() > 10.0);
        }
        assert_eq!(a.spin_rate(), 20.0);
    }

    #[test]
    fn increase_then_decrease_round_trips() {
        let mut a = Actor::default();
        let original = a.spin_rate();
        for _ in 0..7 {
            a.increase_spin();
        }
        assert_eq!(a.spin_rate(), original + 70.0);
        for _ in 0..7 {
            a.decrease_spin();
        }
        assert_eq!(a.spin_rate(), original);
    }

    #[test]
    fn retrigger_mid_roll_is_ignored() {
        let mut a = Actor::default();
        a.trigger_roll();
        a.update(0.5);
        let progress = a.roll_animation().unwrap().progress;
        assert_eq!(progress, 90.0);
        a.trigger_roll();
        assert_eq!(a.roll_animation().unwrap().progress, progress);
    }

    #[test]
    fn full_roll_takes_two_seconds() {
        let mut a = Actor::default();
        let resting_roll = a.effective_roll();
        a.trigger_roll();
        for _ in 0..7 {
            a.update(0.25);
            assert!(a.is_rolling());
            let p = a.roll_animation().unwrap().progress;
            assert!((0.0..360.0).contains(&p));
        }
        assert_eq!(a.effective_roll(), 315.0);
        a.update(0.25);
        assert!(!a.is_rolling());
        assert_eq!(a.effective_roll(), resting_roll);
    }

    #[test]
    fn roll_can_be_retriggered_after_completion() {
        let mut a = Actor::default();
        a.trigger_roll();
        a.update(2.0);
        assert!(!a.is_rolling());
        a.trigger_roll();
        assert_eq!(a.roll_animation(), Some(RollAnimation { progress: 0.0 }));
    }

    #[test]
    fn reset_restores_pose_but_keeps_spin() {
        let mut a = Actor::default();
        for _ in 0..5 {
            a.increase_spin();
        }
        a.turn_left();
        a.turn_up();
        a.move_forward();
        a.trigger_roll();
        a.update(0.5);
        assert_eq!(a.spin_rate(), 150.0);
        assert_eq!(a.roll_animation().unwrap().progress, 90.0);

        a.reset();
        assert_eq!(a.position(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(a.rotation(), Orientation::ZERO);
        assert!(!a.is_rolling());
        assert_eq!(a.spin_rate(), 150.0);
    }

    #[test]
    fn front_follows_fixed_convention() {
        let mut a = Actor::default();
        assert!(approx(a.front(), Vec3::new(0.0, 0.0, -1.0)));

        for _ in 0..18 {
            a.turn_left();
        }
        assert_eq!(a.rotation().yaw, 90.0);
        assert!(approx(a.front(), Vec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn front_is_unit_length_under_pitch() {
        let mut a = Actor::default();
        for _ in 0..9 {
            a.turn_up();
        }
        let f = a.front();
        assert!((f.length() - 1.0).abs() < EPS);
        assert!(f.y > 0.0);
    }

    #[test]
    fn turns_accumulate_without_clamping() {
        let mut a = Actor::default();
        for _ in 0..100 {
            a.turn_right();
            a.turn_down();
        }
        assert_eq!(a.rotation().yaw, -500.0);
        assert_eq!(a.rotation().pitch, -500.0);
    }

    #[test]
    fn move_distance_scales_with_spin_rate() {
        let mut slow = Actor::default();
        slow.move_forward();
        let slow_dist = (slow.position() - Vec3::new(0.0, 2.0, 0.0)).length();

        let mut fast = Actor::default();
        for _ in 0..10 {
            fast.increase_spin();
        }
        fast.move_forward();
        let fast_dist = (fast.position() - Vec3::new(0.0, 2.0, 0.0)).length();

        assert!((slow_dist - 0.1).abs() < EPS);
        assert!((fast_dist - 0.2).abs() < EPS);
    }

    #[test]
    fn backward_undoes_forward() {
        let mut a = Actor::default();
        a.turn_left();
        a.move_forward();
        a.move_backward();
        assert!(approx(a.position(), Vec3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn base_transform_places_origin_at_position() {
        let mut a = Actor::default();
        a.turn_left();
        a.turn_up();
        a.move_forward();
        let origin = a.base_transform().transform_point3(Vec3::ZERO);
        assert!(approx(origin, a.position()));
    }

    #[test]
    fn base_transform_applies_yaw_before_pitch() {
        let mut a = Actor::default();
        for _ in 0..18 {
            a.turn_left();
        }
        for _ in 0..18 {
            a.turn_up();
        }
        // Local -Z is the nose. Yaw 90 then pitch 90 points it straight up.
        let nose = a.base_transform().transform_vector3(Vec3::NEG_Z);
        assert!(approx(nose, Vec3::Y));
        assert!(approx(nose, a.front()));
    }

    #[test]
    fn custom_tuning_changes_steps() {
        let tuning = ActorTuning {
            turn_step: 15.0,
            spin_step: 25.0,
            ..ActorTuning::default()
        };
        let mut a = Actor::new(tuning);
        a.turn_left();
        a.increase_spin();
        assert_eq!(a.rotation().yaw, 15.0);
        assert_eq!(a.spin_rate(), 125.0);
    }
}
