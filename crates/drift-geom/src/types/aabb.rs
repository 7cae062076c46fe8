use drift_core::constants::AABB_MARGIN;
use drift_core::math::{Vec2, EPSILON};

use crate::types::ray::{RayCastInput, RayCastOutput};

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants (for a *valid* box, see [`Aabb::is_valid`]):
/// - `lower` components are less than or equal to `upper` components.
/// - Both corners are finite; values are `f32` metres in world space.
///
/// Inverted or non-finite boxes are representable — construction never
/// panics — and queries on them evaluate the comparisons as written
/// rather than validating first. Callers on the broad-phase hot path
/// check `is_valid` once before insertion instead of paying for
/// validation inside every query.
///
/// The box caches its center, half-extents, and perimeter. Bulk
/// mutators ([`Aabb::set`], [`Aabb::set_corners`], [`Aabb::combine`],
/// [`Aabb::combine_from`]) recompute the cache before returning; the
/// single-field setters and both `fatten` forms deliberately do not,
/// and callers follow them with [`Aabb::refresh`] when they need
/// consistent derived values. Broad-phase node maintenance relies on
/// that asymmetry to batch corner writes without paying for repeated
/// recomputation.
#[derive(Debug, Copy, Clone, Default)]
pub struct Aabb {
    lower: Vec2,
    upper: Vec2,
    // Cached derived attributes, valid as of the last bulk mutation.
    center: Vec2,
    extents: Vec2,
    perimeter: f32,
}

/// Corner-only equality: two boxes are equal iff both corners match
/// exactly. The cached attributes are deterministic functions of the
/// corners and are excluded so stale caches cannot break symmetry.
impl PartialEq for Aabb {
    fn eq(&self, other: &Self) -> bool {
        self.lower == other.lower && self.upper == other.upper
    }
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// The derived attributes are computed immediately. No validity
    /// check is performed; degenerate boxes are flagged only by
    /// [`Aabb::is_valid`].
    #[must_use]
    pub fn new(lower: Vec2, upper: Vec2) -> Self {
        let mut aabb = Self {
            lower,
            upper,
            center: Vec2::ZERO,
            extents: Vec2::ZERO,
            perimeter: 0.0,
        };
        aabb.refresh();
        aabb
    }

    /// Constructs an AABB from four corner scalars.
    #[must_use]
    pub fn from_corners(lx: f32, ly: f32, ux: f32, uy: f32) -> Self {
        Self::new(Vec2::new(lx, ly), Vec2::new(ux, uy))
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy`.
    #[must_use]
    pub fn from_center_half_extents(center: Vec2, hx: f32, hy: f32) -> Self {
        let he = Vec2::new(hx, hy);
        Self::new(center.sub(&he), center.add(&he))
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn lower_bound(&self) -> Vec2 {
        self.lower
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn upper_bound(&self) -> Vec2 {
        self.upper
    }

    /// Returns the cached center, `0.5 * (lower + upper)` as of the
    /// last bulk mutation or [`Aabb::refresh`].
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Returns the cached half-extents, `0.5 * (upper - lower)` as of
    /// the last bulk mutation or [`Aabb::refresh`].
    #[must_use]
    pub fn extents(&self) -> Vec2 {
        self.extents
    }

    /// Returns the cached perimeter, `2 * (width + height)` as of the
    /// last bulk mutation or [`Aabb::refresh`].
    ///
    /// Tree-balancing heuristics minimize total perimeter when choosing
    /// where to insert a node, so this is read on the hot path.
    #[must_use]
    pub fn perimeter(&self) -> f32 {
        self.perimeter
    }

    /// Returns `true` if the box is geometrically usable: `upper -
    /// lower` is non-negative on both axes and both corners are finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let d = self.upper.sub(&self.lower);
        d.x() >= 0.0 && d.y() >= 0.0 && self.lower.is_valid() && self.upper.is_valid()
    }

    /// Recomputes the cached center, extents, and perimeter from the
    /// current corners.
    ///
    /// Callers invoke this after mutating corners through the
    /// single-field setters or `fatten`.
    pub fn refresh(&mut self) {
        let wx = self.upper.x() - self.lower.x();
        let wy = self.upper.y() - self.lower.y();
        self.perimeter = 2.0 * (wx + wy);
        self.extents = self.upper.sub(&self.lower).scale(0.5);
        self.center = self.lower.add(&self.upper).scale(0.5);
    }

    /// Sets both corners and recomputes the derived attributes.
    pub fn set(&mut self, lower: Vec2, upper: Vec2) {
        self.lower = lower;
        self.upper = upper;
        self.refresh();
    }

    /// Sets both corners from scalars and recomputes the derived
    /// attributes.
    pub fn set_corners(&mut self, lx: f32, ly: f32, ux: f32, uy: f32) {
        self.lower = Vec2::new(lx, ly);
        self.upper = Vec2::new(ux, uy);
        self.refresh();
    }

    /// Grows this box in place to the union of itself and `other`
    /// (componentwise min of lowers, max of uppers), then recomputes
    /// the derived attributes.
    pub fn combine(&mut self, other: &Self) {
        self.lower = self.lower.min(&other.lower);
        self.upper = self.upper.max(&other.upper);
        self.refresh();
    }

    /// Overwrites this box with the union of `a` and `b`, ignoring its
    /// prior corners, then recomputes the derived attributes.
    pub fn combine_from(&mut self, a: &Self, b: &Self) {
        self.lower = a.lower.min(&b.lower);
        self.upper = a.upper.max(&b.upper);
        self.refresh();
    }

    /// Returns `true` if `other` is fully enclosed by this box,
    /// inclusive on faces (a box contains itself).
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.lower.x() <= other.lower.x()
            && self.lower.y() <= other.lower.y()
            && other.upper.x() <= self.upper.x()
            && other.upper.y() <= self.upper.y()
    }

    /// Returns `true` if this box overlaps `other`, inclusive on faces.
    ///
    /// Inclusive so that touching proxies still pair up in the
    /// broad-phase instead of churning on contact boundaries.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.upper.x() < other.lower.x()
            || self.lower.x() > other.upper.x()
            || self.upper.y() < other.lower.y()
            || self.lower.y() > other.upper.y())
    }

    /// Casts the segment `input.p1 → input.p2` against the box using
    /// the slab method, clipping the running parameter interval against
    /// the x slab and then the y slab.
    ///
    /// On a hit, returns the *entry* fraction (in
    /// `[0, input.max_fraction]`) and the outward unit normal of the
    /// face the ray crossed, so callers can resolve or reflect the
    /// query. Returns `None` when the segment misses, starts inside the
    /// box, or would only hit past `max_fraction`.
    ///
    /// A ray whose direction component on an axis is below [`EPSILON`]
    /// in magnitude is treated as parallel to that slab: it misses
    /// unless its origin coordinate lies inside the slab, inclusive of
    /// the faces.
    #[must_use]
    pub fn ray_cast(&self, input: &RayCastInput) -> Option<RayCastOutput> {
        let mut t_min = -f32::MAX;
        let mut t_max = f32::MAX;

        let p = input.p1;
        let d = input.p2.sub(&input.p1);

        let mut normal = Vec2::ZERO;

        let slabs = [
            (p.x(), d.x(), self.lower.x(), self.upper.x(), Vec2::UNIT_X),
            (p.y(), d.y(), self.lower.y(), self.upper.y(), Vec2::UNIT_Y),
        ];
        for (p_i, d_i, lb, ub, axis) in slabs {
            if d_i.abs() < EPSILON {
                // Parallel: miss unless the origin lies inside the slab.
                if p_i < lb || ub < p_i {
                    return None;
                }
            } else {
                let inv_d = 1.0 / d_i;
                let mut t1 = (lb - p_i) * inv_d;
                let mut t2 = (ub - p_i) * inv_d;

                // Sign of the candidate face normal; the face order
                // depends on the ray direction's sign on this axis.
                let mut sign = -1.0;
                if t1 > t2 {
                    core::mem::swap(&mut t1, &mut t2);
                    sign = 1.0;
                }

                // Push the entry parameter up; the last axis to raise
                // it owns the surface normal.
                if t1 > t_min {
                    normal = axis.scale(sign);
                    t_min = t1;
                }

                // Pull the exit parameter down.
                t_max = t_max.min(t2);

                if t_min > t_max {
                    return None;
                }
            }
        }

        // The box is behind the origin, or the hit lies past the
        // accepted segment.
        if t_min < 0.0 || input.max_fraction < t_min {
            return None;
        }

        Some(RayCastOutput {
            fraction: t_min,
            normal,
        })
    }

    /// Expands the box outward by `margin` on both axes.
    ///
    /// Mutates the corners directly and does *not* refresh the derived
    /// attributes; proxy maintenance fattens and then refreshes once.
    pub fn fatten_by(&mut self, margin: f32) {
        let m = Vec2::splat(margin);
        self.lower = self.lower.sub(&m);
        self.upper = self.upper.add(&m);
    }

    /// Expands the box outward by the configured default proxy margin,
    /// [`AABB_MARGIN`]. Like [`Aabb::fatten_by`], does not refresh the
    /// derived attributes.
    pub fn fatten(&mut self) {
        self.lower = self.lower.sub(&AABB_MARGIN);
        self.upper = self.upper.add(&AABB_MARGIN);
    }

    /// Sets the minimum corner without refreshing the derived
    /// attributes.
    pub fn set_lower_bound(&mut self, x: f32, y: f32) {
        self.lower = Vec2::new(x, y);
    }

    /// Sets the maximum corner without refreshing the derived
    /// attributes.
    pub fn set_upper_bound(&mut self, x: f32, y: f32) {
        self.upper = Vec2::new(x, y);
    }

    /// Returns the minimum corner's x coordinate.
    #[must_use]
    pub fn lower_x(&self) -> f32 {
        self.lower.x()
    }

    /// Sets the minimum corner's x coordinate without refreshing the
    /// derived attributes.
    pub fn set_lower_x(&mut self, value: f32) {
        self.lower = Vec2::new(value, self.lower.y());
    }

    /// Returns the minimum corner's y coordinate.
    #[must_use]
    pub fn lower_y(&self) -> f32 {
        self.lower.y()
    }

    /// Sets the minimum corner's y coordinate without refreshing the
    /// derived attributes.
    pub fn set_lower_y(&mut self, value: f32) {
        self.lower = Vec2::new(self.lower.x(), value);
    }

    /// Returns the maximum corner's x coordinate.
    #[must_use]
    pub fn upper_x(&self) -> f32 {
        self.upper.x()
    }

    /// Sets the maximum corner's x coordinate without refreshing the
    /// derived attributes.
    pub fn set_upper_x(&mut self, value: f32) {
        self.upper = Vec2::new(value, self.upper.y());
    }

    /// Returns the maximum corner's y coordinate.
    #[must_use]
    pub fn upper_y(&self) -> f32 {
        self.upper.y()
    }

    /// Sets the maximum corner's y coordinate without refreshing the
    /// derived attributes.
    pub fn set_upper_y(&mut self, value: f32) {
        self.upper = Vec2::new(self.upper.x(), value);
    }
}
