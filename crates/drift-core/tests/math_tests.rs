#![allow(missing_docs)]
//! Unit tests for drift-core scalar helpers and `Vec2`.

use drift_core::math::{self, Vec2};

fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-6, "expected {b}, got {a} (diff {diff})");
}

#[test]
fn vec2_componentwise_min_max_abs() {
    let a = Vec2::new(-3.0, 4.0);
    let b = Vec2::new(2.0, -1.0);
    assert_eq!(a.min(&b).to_array(), [-3.0, -1.0]);
    assert_eq!(a.max(&b).to_array(), [2.0, 4.0]);
    assert_eq!(a.abs().to_array(), [3.0, 4.0]);
}

#[test]
fn vec2_arithmetic_matches_components() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(0.5, -0.25);
    assert_eq!(a.add(&b).to_array(), [1.5, 1.75]);
    assert_eq!(a.sub(&b).to_array(), [0.5, 2.25]);
    assert_eq!(a.scale(2.0).to_array(), [2.0, 4.0]);
    assert_eq!(a.neg().to_array(), [-1.0, -2.0]);
    approx_eq(a.dot(&b), 0.0);
}

#[test]
fn vec2_length_of_3_4_triangle() {
    let v = Vec2::new(3.0, 4.0);
    approx_eq(v.length(), 5.0);
    approx_eq(v.length_squared(), 25.0);
}

#[test]
fn vec2_is_valid_rejects_non_finite_components() {
    assert!(Vec2::new(0.0, 0.0).is_valid());
    assert!(Vec2::new(-1.0e30, 1.0e30).is_valid());
    assert!(!Vec2::new(f32::NAN, 0.0).is_valid());
    assert!(!Vec2::new(0.0, f32::NAN).is_valid());
    assert!(!Vec2::new(f32::INFINITY, 0.0).is_valid());
    assert!(!Vec2::new(0.0, f32::NEG_INFINITY).is_valid());
}

#[test]
fn clamp_stays_inside_range() {
    approx_eq(math::clamp(5.0, 0.0, 1.0), 1.0);
    approx_eq(math::clamp(-5.0, 0.0, 1.0), 0.0);
    approx_eq(math::clamp(0.5, 0.0, 1.0), 0.5);
}

#[test]
fn vec2_copies_are_independent() {
    let a = Vec2::new(1.0, 1.0);
    let mut b = a;
    b = b.scale(3.0);
    assert_eq!(a.to_array(), [1.0, 1.0]);
    assert_eq!(b.to_array(), [3.0, 3.0]);
}
