//! Scene kernel: the drone actor, the camera rigs and the per-tick update
//! that keeps them consistent.
//!
//! # Invariants
//! - `Scene::tick` takes its step as a parameter and never reads a clock.
//! - Only the scene writes actor-dependent camera state.
//! - Control operations never fail; out-of-range input degrades to a no-op.

pub mod actor;
pub mod camera;
pub mod scene;
pub mod tuning;

pub use actor::{Actor, RollAnimation};
pub use camera::{Camera, CameraKind};
pub use scene::Scene;
pub use tuning::{ActorTuning, ConfigError};
