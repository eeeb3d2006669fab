//! Developer tooling: scene inspection for the debug HUD and the CLI.
//!
//! # Invariants
//! - Inspection is read-only; nothing here mutates a scene.

mod inspector;

pub use inspector::{ActorInfo, CameraInfo, SceneInspector, SceneSummary};
