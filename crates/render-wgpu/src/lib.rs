//! wgpu render backend for the scene.
//!
//! Implements [`dronebay_render::Renderer`] by batching solid draws into
//! per-primitive instance lists and submitting them in one pass.
//!
//! # Invariants
//! - Renderer never mutates scene state.
//! - Geometry buffers are uploaded once at construction.
//! - Projection matrices arrive in OpenGL clip convention and are remapped
//!   to wgpu's `[0, 1]` depth range here.

mod context;
mod gpu;
mod shaders;

pub use context::{GpuContext, RenderError};
pub use gpu::WgpuRenderer;
