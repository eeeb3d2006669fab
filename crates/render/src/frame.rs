//! Frame orchestration: camera matrices, then environment, then the drone.

use crate::renderer::{Primitive, Renderer};
use dronebay_common::Color;
use dronebay_kernel::{Actor, Scene};
use glam::{Mat4, Vec3};

const GROUND_COLOR: Color = Color::rgb(0.3, 0.8, 0.3);
const GROUND_EXTENT: f32 = 40.0;
const AXIS_THICKNESS: f32 = 0.02;
const WALL_MARKER_COLOR: Color = Color::rgb(1.0, 0.5, 0.0);

const FUSELAGE_COLOR: Color = Color::rgb(0.2, 0.2, 0.8);
const COCKPIT_COLOR: Color = Color::rgb(0.8, 0.2, 0.2);
const BLADE_COLOR: Color = Color::rgb(0.8, 0.8, 0.2);
const LEG_COLOR: Color = Color::rgb(0.5, 0.5, 0.5);
const WHEEL_COLOR: Color = Color::rgb(0.1, 0.1, 0.1);

/// Rotor hubs in the actor's local frame: right, then left.
pub const ROTOR_OFFSETS: [Vec3; 2] = [Vec3::new(1.0, 0.5, 0.0), Vec3::new(-1.0, 0.5, 0.0)];
pub const BLADES_PER_ROTOR: usize = 4;

/// Landing-leg attachment points: rear right, rear left, front right, front left.
pub const LEG_OFFSETS: [Vec3; 4] = [
    Vec3::new(0.3, -0.15, 0.3),
    Vec3::new(-0.3, -0.15, 0.3),
    Vec3::new(0.3, -0.15, -0.2),
    Vec3::new(-0.3, -0.15, -0.2),
];
const WHEEL_HEIGHT: f32 = -0.5;

/// Draw one frame of `scene` from its active camera.
pub fn render_scene<R: Renderer + ?Sized>(scene: &Scene, renderer: &mut R) {
    let camera = scene.active_camera();
    tracing::trace!(tick = scene.ticks(), camera = camera.kind().label(), "frame");
    renderer.activate();
    renderer.set_view_matrix(camera.view_matrix());
    renderer.set_projection_matrix(camera.projection_matrix());

    draw_environment(renderer);
    draw_actor(renderer, scene.actor());
}

/// Method-call form of [`render_scene`].
pub trait RenderScene {
    fn render<R: Renderer + ?Sized>(&self, renderer: &mut R);
}

impl RenderScene for Scene {
    fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        render_scene(self, renderer);
    }
}

/// Ground plane, origin axis markers and the four wall markers.
pub fn draw_environment<R: Renderer + ?Sized>(renderer: &mut R) {
    let ground = Mat4::from_rotation_x(-90f32.to_radians())
        * Mat4::from_scale(Vec3::new(GROUND_EXTENT, GROUND_EXTENT, 1.0));
    renderer.draw_solid(Primitive::Quad, ground, GROUND_COLOR);

    for (axis, color) in [
        (Vec3::X, Color::RED),
        (Vec3::Y, Color::GREEN),
        (Vec3::Z, Color::BLUE),
    ] {
        let size = axis + (Vec3::ONE - axis) * AXIS_THICKNESS;
        let marker = Mat4::from_translation(axis * 0.5) * Mat4::from_scale(size);
        renderer.draw_solid(Primitive::Cube, marker, color);
    }

    // Back, front, left, right; each rotated to face the arena.
    for (center, yaw_degrees) in [
        (Vec3::new(0.0, 5.0, -20.0), 0.0_f32),
        (Vec3::new(0.0, 5.0, 20.0), 180.0),
        (Vec3::new(-20.0, 5.0, 0.0), 90.0),
        (Vec3::new(20.0, 5.0, 0.0), -90.0),
    ] {
        let marker =
            Mat4::from_translation(center) * Mat4::from_rotation_y(yaw_degrees.to_radians());
        renderer.draw_solid(Primitive::Quad, marker, WALL_MARKER_COLOR);
    }
}

/// Body, both rotors and the landing gear, all relative to the actor's
/// base transform.
pub fn draw_actor<R: Renderer + ?Sized>(renderer: &mut R, actor: &Actor) {
    let base = actor.base_transform();
    draw_body(renderer, base);
    for offset in ROTOR_OFFSETS {
        draw_rotor(renderer, base, offset, actor.spin_phase());
    }
    draw_landing_gear(renderer, base);
}

fn draw_body<R: Renderer + ?Sized>(renderer: &mut R, base: Mat4) {
    let fuselage = base * Mat4::from_scale(Vec3::new(1.2, 0.3, 0.5));
    renderer.draw_solid(Primitive::Cube, fuselage, FUSELAGE_COLOR);

    let cockpit = base
        * Mat4::from_translation(Vec3::new(0.0, 0.0, -0.5))
        * Mat4::from_scale(Vec3::new(0.4, 0.2, 0.4));
    renderer.draw_solid(Primitive::Cube, cockpit, COCKPIT_COLOR);
}

fn draw_rotor<R: Renderer + ?Sized>(renderer: &mut R, base: Mat4, offset: Vec3, phase: f32) {
    let hub = base * Mat4::from_translation(offset) * Mat4::from_rotation_y(phase.to_radians());
    for i in 0..BLADES_PER_ROTOR {
        let blade = hub
            * Mat4::from_rotation_y((i as f32 * 90.0).to_radians())
            * Mat4::from_translation(Vec3::new(0.5, 0.0, 0.0))
            * Mat4::from_scale(Vec3::new(1.0, 0.05, 0.2));
        renderer.draw_solid(Primitive::Cube, blade, BLADE_COLOR);
    }
}

fn draw_landing_gear<R: Renderer + ?Sized>(renderer: &mut R, base: Mat4) {
    for offset in LEG_OFFSETS {
        let leg = base * Mat4::from_translation(offset) * Mat4::from_scale(Vec3::new(0.1, 0.3, 0.1));
        renderer.draw_solid(Primitive::Cube, leg, LEG_COLOR);

        let wheel = base
            * Mat4::from_translation(Vec3::new(offset.x, WHEEL_HEIGHT, offset.z))
            * Mat4::from_scale(Vec3::new(0.15, 0.05, 0.15));
        renderer.draw_solid(Primitive::Cube, wheel, WHEEL_COLOR);
    }
}
