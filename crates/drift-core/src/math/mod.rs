//! Deterministic math helpers: scalar utilities and the 2D vector
//! primitive used throughout the simulation.
//!
//! All operations round to `f32` to keep behaviour identical across
//! environments.

mod vec2;

pub use vec2::Vec2;

/// Global epsilon used by math and geometry routines when detecting
/// degenerate values (for example, a ray direction component too small
/// to intersect an axis slab).
///
/// This is a degeneracy threshold, not a numeric-precision bound.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}
