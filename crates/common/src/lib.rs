//! Shared value types used across the dronebay crates.
//!
//! # Invariants
//! - Angles stored in these types are degrees; conversion to radians happens
//!   only at the point a rotation or trigonometric function is evaluated.

mod types;

pub use types::{Color, Orientation, wrap_degrees};
