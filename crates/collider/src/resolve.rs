//! Pairwise collision resolvers.
//!
//! Each resolver prunes with bounding boxes where the shapes carry them,
//! composes the narrow-phase predicates, and computes the minimum
//! translation vector for the pairs that support one.

use glam::Vec2;

use crate::narrow;
use crate::shapes::{CircleCollider, LineCollider, PolygonCollider};

/// Circle-vs-circle. `Some(mtv)` is the shortest push that moves `c1` out
/// of `c2`, leaving the centers exactly the sum of the radii apart.
pub fn circle_circle(c1: &CircleCollider, c2: &CircleCollider) -> Option<Vec2> {
    let delta = c1.position() - c2.position();
    let combined = c1.radius() + c2.radius();
    if delta.length_squared() >= combined * combined {
        return None;
    }
    Some(delta.normalize_or_zero() * combined - delta)
}

/// Circle-vs-polygon. `Some(mtv)` moves the circle out of the polygon;
/// `invert` flips it to move the polygon out of the circle instead.
pub fn circle_polygon(
    circle: &CircleCollider,
    polygon: &PolygonCollider,
    invert: bool,
) -> Option<Vec2> {
    // the box test rules out most pairs before any edge math runs
    if !circle.bbox().intersects(&polygon.bbox()) {
        return None;
    }

    let center = circle.position();
    let vertices = polygon.points();

    // Edge tests can't see a circle whose center is already inside the
    // polygon, so handle containment first: push out past the nearest
    // point on the boundary.
    if narrow::point_in_polygon(center, vertices) {
        let mut closest = Vec2::ZERO;
        let mut closest_dist = f32::INFINITY;
        let mut j = vertices.len() - 1;
        for i in 0..vertices.len() {
            let candidate = narrow::closest_point_on_segment(vertices[i], vertices[j], center);
            let dist = candidate.distance(center);
            if dist < closest_dist {
                closest_dist = dist;
                closest = candidate;
            }
            j = i;
        }

        let delta = closest - center;
        let mtv = delta.normalize_or_zero() * (delta.length() + circle.radius());
        return Some(if invert { -mtv } else { mtv });
    }

    // Otherwise the intersecting edge nearest the center decides the push.
    let mut closest = Vec2::ZERO;
    let mut closest_dist = f32::INFINITY;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        if let Some(hit) =
            narrow::segment_hits_circle(vertices[i], vertices[j], center, circle.radius())
        {
            let dist = hit.distance(center);
            if dist < closest_dist {
                closest_dist = dist;
                closest = hit;
            }
        }
        j = i;
    }

    if closest_dist.is_finite() {
        let delta = closest - center;
        let push = circle.radius() - delta.length();
        let mtv = delta.normalize_or_zero() * -push;
        return Some(if invert { -mtv } else { mtv });
    }
    None
}

/// Polygon-vs-polygon via the separating axis theorem.
///
/// Projects both vertex sets onto the normal of every edge; a positive gap
/// on any axis proves separation and short-circuits. When every axis
/// overlaps, the axis with the smallest overlap becomes the MTV, signed to
/// move `poly1` out of `poly2`.
pub fn polygon_polygon(poly1: &PolygonCollider, poly2: &PolygonCollider) -> Option<Vec2> {
    if !poly1.bbox().intersects(&poly2.bbox()) {
        return None;
    }

    let mut mtv_length = f32::INFINITY;
    let mut mtv_axis = Vec2::ZERO;

    for vertices in [poly1.points(), poly2.points()] {
        let mut j = vertices.len() - 1;
        for i in 0..vertices.len() {
            let edge = vertices[i] - vertices[j];
            j = i;

            // axis perpendicular to the edge; a zero-length edge makes it
            // NaN, which fails both comparisons below and is skipped
            let axis = edge.perp() / edge.length();

            let proj1 = project_onto_axis(poly1.points(), axis);
            let proj2 = project_onto_axis(poly2.points(), axis);

            let overlap = interval_distance(proj1, proj2);
            if overlap > 0.0 {
                // provably separated on this axis
                return None;
            }
            if overlap.abs() < mtv_length {
                mtv_length = overlap.abs();
                mtv_axis = if proj1.0 < proj2.0 { -axis } else { axis };
            }
        }
    }

    Some(mtv_axis * mtv_length)
}

/// Line-vs-polygon: true when an endpoint is inside the polygon or the
/// segment crosses any edge. Line pairs have no translation vector.
pub fn line_polygon(line: &LineCollider, polygon: &PolygonCollider) -> bool {
    let vertices = polygon.points();
    if narrow::point_in_polygon(line.start, vertices)
        || narrow::point_in_polygon(line.end, vertices)
    {
        return true;
    }

    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        if narrow::lines_intersect(vertices[i], vertices[j], line.start, line.end) {
            return true;
        }
        j = i;
    }
    false
}

/// Interval a vertex set covers when squashed onto `axis`.
fn project_onto_axis(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for v in vertices {
        let projection = v.dot(axis);
        if projection < min {
            min = projection;
        }
        if projection > max {
            max = projection;
        }
    }
    (min, max)
}

/// Signed gap between two intervals; negative when they overlap.
fn interval_distance(i1: (f32, f32), i2: (f32, f32)) -> f32 {
    if i1.0 < i2.0 { i2.0 - i1.1 } else { i1.0 - i2.1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn circle(x: f32, y: f32, r: f32) -> CircleCollider {
        CircleCollider::new(Vec2::new(x, y), r)
    }

    fn unit_square(x: f32, y: f32) -> PolygonCollider {
        PolygonCollider::new(
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ],
            Vec2::new(x, y),
        )
        .unwrap()
    }

    fn triangle(x: f32, y: f32) -> PolygonCollider {
        PolygonCollider::new(
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(5.0, 10.0),
            ],
            Vec2::new(x, y),
        )
        .unwrap()
    }

    #[test]
    fn test_circle_circle_overlapping() {
        // distance 8 < combined radius 9
        let mtv = circle_circle(&circle(0.0, 0.0, 5.0), &circle(8.0, 0.0, 4.0)).unwrap();

        assert!((mtv.length() - 1.0).abs() < EPSILON);
        assert!((mtv - Vec2::new(-1.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_circle_circle_separated() {
        // distance 20 > combined radius 9
        assert!(circle_circle(&circle(0.0, 0.0, 5.0), &circle(20.0, 0.0, 4.0)).is_none());
    }

    #[test]
    fn test_circle_circle_mtv_separates() {
        let mut c1 = circle(0.0, 0.0, 5.0);
        let c2 = circle(8.0, 0.0, 4.0);

        let mtv = circle_circle(&c1, &c2).unwrap();
        c1.translate(mtv);
        assert!(circle_circle(&c1, &c2).is_none());
    }

    #[test]
    fn test_circle_polygon_edge_hit() {
        // circle centered above the square's top edge, dipping into it
        let square = unit_square(0.0, 0.0);
        let c = circle(0.5, -0.4, 0.5);

        let mtv = circle_polygon(&c, &square, false).unwrap();
        // pushed straight up, just far enough to clear
        assert!((mtv - Vec2::new(0.0, -0.1)).length() < EPSILON);

        let mut pushed = c;
        pushed.translate(mtv + mtv.normalize_or_zero() * 1e-4);
        assert!(circle_polygon(&pushed, &square, false).is_none());
    }

    #[test]
    fn test_circle_polygon_center_inside() {
        let square = unit_square(0.0, 0.0);
        let c = circle(0.5, 0.1, 0.25);

        let mtv = circle_polygon(&c, &square, false).unwrap();
        // nearest boundary is the top edge: push up past it plus the radius
        assert!((mtv - Vec2::new(0.0, -0.35)).length() < EPSILON);

        let mut pushed = c;
        pushed.translate(mtv + mtv.normalize_or_zero() * 1e-4);
        assert!(circle_polygon(&pushed, &square, false).is_none());
    }

    #[test]
    fn test_circle_polygon_invert_flips_direction() {
        let square = unit_square(0.0, 0.0);
        let c = circle(0.5, -0.4, 0.5);

        let mtv = circle_polygon(&c, &square, false).unwrap();
        let inverted = circle_polygon(&c, &square, true).unwrap();
        assert!((mtv + inverted).length() < EPSILON);
    }

    #[test]
    fn test_circle_polygon_prune() {
        let square = unit_square(0.0, 0.0);
        let far = circle(50.0, 50.0, 2.0);

        assert!(!far.bbox().intersects(&square.bbox()));
        assert!(circle_polygon(&far, &square, false).is_none());
    }

    #[test]
    fn test_polygon_polygon_bbox_prune() {
        let a = triangle(0.0, 0.0);
        let b = triangle(100.0, 0.0);

        assert!(!a.bbox().intersects(&b.bbox()));
        assert!(polygon_polygon(&a, &b).is_none());
    }

    #[test]
    fn test_polygon_polygon_minimum_axis() {
        // two unit squares offset by half a width: smallest overlap is 0.5
        // on the x axis, pushing the first square left
        let a = unit_square(0.0, 0.0);
        let b = unit_square(0.5, 0.0);

        let mtv = polygon_polygon(&a, &b).unwrap();
        assert!((mtv.length() - 0.5).abs() < EPSILON);
        assert!((mtv - Vec2::new(-0.5, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_polygon_polygon_mtv_separates() {
        let mut a = unit_square(0.0, 0.0);
        let b = unit_square(0.4, 0.3);

        let mtv = polygon_polygon(&a, &b).unwrap();
        a.translate(mtv + mtv.normalize_or_zero() * 1e-4);
        assert!(polygon_polygon(&a, &b).is_none());
    }

    #[test]
    fn test_polygon_polygon_rotated() {
        let mut diamond = unit_square(0.0, 0.0);
        diamond.set_angle(std::f32::consts::FRAC_PI_4);
        let square = unit_square(0.5, 0.0);

        assert!(polygon_polygon(&diamond, &square).is_some());
    }

    #[test]
    fn test_line_polygon() {
        let square = unit_square(0.0, 0.0);

        // crosses two edges
        let crossing = LineCollider::new(Vec2::new(-1.0, 0.5), Vec2::new(2.0, 0.5));
        assert!(line_polygon(&crossing, &square));

        // fully contained: no edge crossing, but both endpoints inside
        let inside = LineCollider::new(Vec2::new(0.2, 0.5), Vec2::new(0.8, 0.5));
        assert!(line_polygon(&inside, &square));

        let outside = LineCollider::new(Vec2::new(2.0, 2.0), Vec2::new(3.0, 2.0));
        assert!(!line_polygon(&outside, &square));
    }

    #[test]
    fn test_interval_distance() {
        assert_eq!(interval_distance((0.0, 1.0), (2.0, 3.0)), 1.0);
        assert_eq!(interval_distance((2.0, 3.0), (0.0, 1.0)), 1.0);
        assert_eq!(interval_distance((0.0, 2.0), (1.0, 3.0)), -1.0);
        assert_eq!(interval_distance((0.0, 1.0), (1.0, 2.0)), 0.0);
    }

    #[test]
    fn test_project_onto_axis() {
        let square = unit_square(0.0, 0.0);
        let (min, max) = project_onto_axis(square.points(), Vec2::new(1.0, 0.0));
        assert_eq!((min, max), (0.0, 1.0));
    }
}
