use drift_core::math::Vec2;

/// Input for a ray-cast query against a bounding volume or shape.
///
/// The ray is the segment from `p1` toward `p2`; an intersection is
/// accepted only if its parameter `t` lies in `[0, max_fraction]`, where
/// `t = 0` is `p1` and `t = 1` is `p2`. Queries that shorten the ray as
/// they find closer hits do so by lowering `max_fraction`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayCastInput {
    /// Ray origin.
    pub p1: Vec2,
    /// Ray endpoint; the direction is `p2 - p1`.
    pub p2: Vec2,
    /// Upper bound on the accepted hit parameter, usually `1.0`.
    pub max_fraction: f32,
}

/// Result of a successful ray-cast query.
///
/// `fraction` is the entry parameter along `p1 → p2` and `normal` is the
/// outward unit normal of the face the ray crossed (exactly one axis
/// component is nonzero for an AABB hit).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayCastOutput {
    /// Entry parameter in `[0, max_fraction]`.
    pub fraction: f32,
    /// Outward unit normal of the crossed face.
    pub normal: Vec2,
}
