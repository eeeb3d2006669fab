//! Rendering adapter: renderer-agnostic draw interface and frame sequencing.
//!
//! # Invariants
//! - Renderers never mutate scene state; a frame is a pure read of the scene.
//! - Draw order is fixed: environment first, then the actor.
//! - Part transforms compose the actor's base transform (translate, yaw,
//!   pitch, roll) with a part-local offset and scale, in that order.
//!
//! GPU backends implement [`Renderer`]; [`RecordingRenderer`] captures the
//! draw list for tests and headless runs.

pub mod frame;
pub mod mesh;
mod renderer;

pub use frame::{RenderScene, render_scene};
pub use mesh::{GeometryCache, Mesh, Vertex};
pub use renderer::{DrawCommand, Primitive, RecordingRenderer, Renderer};
