//! drift-core: deterministic float32 math for the Drift 2D simulation.
//!
//! This crate holds the numeric foundation the geometry and broad-phase
//! layers build on: a plain-value `Vec2`, scalar helpers, and the
//! simulation-wide tuning constants consumed as configuration.
//!
//! Determinism notes:
//! - All arithmetic rounds to `f32`; no fused multiply-add.
//! - No ambient RNG, no I/O, no logging in this layer.
#![forbid(unsafe_code)]

pub mod constants;
pub mod math;

pub use math::Vec2;
