//! Core geometry types used by the broad-phase (AABB, ray casts).
//!
//! Determinism notes:
//! - Containment and overlap semantics are inclusive on faces to avoid
//!   pair churn on contact boundaries.
//! - Ray casting clips the parameter interval axis by axis in a fixed
//!   order (x then y) so identical inputs yield identical results.
//! - All math uses `f32` without fused multiply-add to preserve
//!   identical results across platforms.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Ray-cast input/output value pair."]
pub mod ray;
