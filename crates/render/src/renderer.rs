use dronebay_common::Color;
use glam::{Mat4, Vec3};
use std::fmt;

/// Unit primitives a renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Axis-aligned cube spanning `[-0.5, 0.5]` on every axis.
    Cube,
    /// Square in the XY plane spanning `[-0.5, 0.5]`, facing +Z.
    Quad,
}

/// Renderer-agnostic draw interface. All backends implement this trait.
///
/// The frame orchestrator calls `activate` once per frame, sets the camera
/// matrices and then issues solid draws in order. Backends own their GPU
/// resources; callers only supply transforms and colors.
pub trait Renderer {
    /// Begin a frame.
    fn activate(&mut self);

    fn set_view_matrix(&mut self, view: Mat4);

    fn set_projection_matrix(&mut self, projection: Mat4);

    /// Draw one unit primitive with a model transform and flat color.
    fn draw_solid(&mut self, primitive: Primitive, transform: Mat4, color: Color);
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub primitive: Primitive,
    pub transform: Mat4,
    pub color: Color,
}

impl DrawCommand {
    /// World-space position of the primitive's local origin.
    pub fn origin(&self) -> Vec3 {
        self.transform.transform_point3(Vec3::ZERO)
    }
}

/// Renderer that records draw calls instead of issuing them.
///
/// Useful for CLI output, logging and testing the frame sequencing. Each
/// `activate` starts a fresh frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    view: Mat4,
    projection: Mat4,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws recorded since the last `activate`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Number of frames started.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for RecordingRenderer {
    fn activate(&mut self) {
        self.commands.clear();
        self.frames += 1;
    }

    fn set_view_matrix(&mut self, view: Mat4) {
        self.view = view;
    }

    fn set_projection_matrix(&mut self, projection: Mat4) {
        self.projection = projection;
    }

    fn draw_solid(&mut self, primitive: Primitive, transform: Mat4, color: Color) {
        self.commands.push(DrawCommand {
            primitive,
            transform,
            color,
        });
    }
}

impl fmt::Display for RecordingRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Frame {} ({} draws) ===",
            self.frames,
            self.commands.len()
        )?;
        for (i, cmd) in self.commands.iter().enumerate() {
            let p = cmd.origin();
            writeln!(
                f,
                "  [{i:02}] {:?} at=({:.2}, {:.2}, {:.2}) color=({:.2}, {:.2}, {:.2})",
                cmd.primitive, p.x, p.y, p.z, cmd.color.r, cmd.color.g, cmd.color.b
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_renderer_starts_empty() {
        let r = RecordingRenderer::new();
        assert!(r.commands().is_empty());
        assert_eq!(r.frames(), 0);
        assert_eq!(r.view(), Mat4::IDENTITY);
    }

    #[test]
    fn activate_starts_a_new_frame() {
        let mut r = RecordingRenderer::new();
        r.activate();
        r.draw_solid(Primitive::Cube, Mat4::IDENTITY, Color::RED);
        assert_eq!(r.commands().len(), 1);

        r.activate();
        assert!(r.commands().is_empty());
        assert_eq!(r.frames(), 2);
    }

    #[test]
    fn display_lists_draws() {
        let mut r = RecordingRenderer::new();
        r.activate();
        r.draw_solid(
            Primitive::Quad,
            Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)),
            Color::GREEN,
        );
        let text = r.to_string();
        assert!(text.contains("1 draws"));
        assert!(text.contains("Quad at=(1.00, 2.00, 3.00)"));
    }
}
