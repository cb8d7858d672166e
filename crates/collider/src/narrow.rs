//! Narrow-phase geometric predicates.
//!
//! Free functions over raw `Vec2` data so the dispatch layer and the
//! pairwise resolvers can compose them freely. Degenerate inputs (parallel
//! segments, zero-length edges) are not guarded: the resulting NaNs fail
//! every comparison and read as "no intersection".

use glam::Vec2;

/// Returns whether `point` lies exactly on the segment from `start` to
/// `end`, by testing that the two sub-distances sum to the full length.
///
/// The comparison is exact, so floating-point error can produce false
/// negatives for points that are mathematically on the segment.
#[allow(clippy::float_cmp)]
pub fn point_on_line(point: Vec2, start: Vec2, end: Vec2) -> bool {
    let d1 = start.distance(point);
    let d2 = point.distance(end);
    d1 + d2 == start.distance(end)
}

/// Returns whether `point` is strictly inside a circle; points on the
/// boundary do not count.
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius_sq: f32) -> bool {
    (point - center).length_squared() < radius_sq
}

/// Even-odd ray cast: a ray from `point` toward +x crosses the polygon
/// boundary an odd number of times iff the point is inside.
///
/// `vertices` must describe a convex polygon in winding order. Points
/// exactly on an edge may land on either side.
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let p1 = vertices[i];
        let p2 = vertices[j];
        // half-open test keeps a vertex on the ray from counting twice
        if (p1.y > point.y) != (p2.y > point.y)
            && point.x < (p2.x - p1.x) * (point.y - p1.y) / (p2.y - p1.y) + p1.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Parametric segment-segment intersection: solves
/// `p0 + s*(p1 - p0) = p2 + t*(p3 - p2)` and checks both parameters land
/// in `[0, 1]`. Parallel or zero-length segments divide by zero and fall
/// out as "not intersecting".
pub fn lines_intersect(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> bool {
    let d1 = p1 - p0;
    let d2 = p3 - p2;
    let denom = -d2.x * d1.y + d1.x * d2.y;

    let s = (-d1.y * (p0.x - p2.x) + d1.x * (p0.y - p2.y)) / denom;
    let t = (d2.x * (p0.y - p2.y) - d2.y * (p0.x - p2.x)) / denom;

    (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t)
}

/// Projects `point` onto the line through `a` and `b`, clamped to the
/// segment between them.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, point: Vec2) -> Vec2 {
    let ab = b - a;
    let t = ((point - a).dot(ab) / ab.length_squared()).clamp(0.0, 1.0);
    a + ab * t
}

/// Tests a segment against a circle. On intersection, returns the closest
/// point on the segment to the circle's center (boundary inclusive).
pub fn segment_hits_circle(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> Option<Vec2> {
    let closest = closest_point_on_segment(a, b, center);
    ((closest - center).length_squared() <= radius * radius).then_some(closest)
}
