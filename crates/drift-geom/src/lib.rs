//! Geometry primitives for the Drift 2D broad-phase.
//!
//! This crate provides:
//! - Axis-aligned bounding boxes (`Aabb`) with cached derived attributes.
//! - Ray-cast input/output value types (`RayCastInput`, `RayCastOutput`).
//!
//! Design notes:
//! - Plain value semantics: every type is `Copy` and intended to be
//!   stored inline by the owning tree node or query.
//! - All operations are total; invalid (inverted or non-finite) boxes
//!   are representable and detected by callers via `Aabb::is_valid`,
//!   never by panicking.
//! - Float32 throughout; operations favor clarity and reproducibility.
#![forbid(unsafe_code)]

/// Foundational geometric types.
pub mod types;

pub use types::aabb::Aabb;
pub use types::ray::{RayCastInput, RayCastOutput};
