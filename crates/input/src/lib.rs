//! Input actions: the discrete vocabulary every input source maps onto.
//!
//! # Invariants
//! - Desktop keys and scripted runs share the same action set.
//! - Applying an action never fails; bad camera indices are ignored by the scene.

pub mod action;
pub mod script;

pub use action::{Action, ParseActionError};
pub use script::ActionScript;
