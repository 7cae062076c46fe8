//! Simulation-wide tuning constants consumed as configuration by the
//! geometry and broad-phase layers.

use crate::math::Vec2;

/// Default margin by which broad-phase proxies fatten their AABBs, in
/// metres per axis.
///
/// Proxies are stored fattened so that small shape movements do not
/// force re-insertion into the broad-phase structure. The value follows
/// the widely used Box2D extension margin (0.1 m).
pub const AABB_MARGIN: Vec2 = Vec2::splat(0.1);
