//! Shape variants and the collision dispatch over them.

mod circle;
mod line;
mod point;
mod polygon;

use canvas::Canvas;
use glam::Vec2;

pub use circle::CircleCollider;
pub use line::LineCollider;
pub use point::PointCollider;
pub use polygon::PolygonCollider;

use crate::error::ColliderError;
use crate::narrow;
use crate::resolve;

/// A confirmed collision.
///
/// `mtv` is present for the circle/polygon pairings that can produce a
/// separating push; it always describes how to move the *first* shape of
/// the query out of the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub mtv: Option<Vec2>,
}

impl Contact {
    const BOOLEAN: Self = Self { mtv: None };

    fn push(mtv: Vec2) -> Self {
        Self { mtv: Some(mtv) }
    }
}

/// Any of the four collider shapes, ready for pairwise dispatch.
///
/// The enum is closed on purpose: adding a shape variant makes every
/// dispatch `match` below fail to compile until the new pairings are
/// written out.
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    Point(PointCollider),
    Line(LineCollider),
    Circle(CircleCollider),
    Polygon(PolygonCollider),
}

impl Collider {
    /// Tests this shape against `other`.
    ///
    /// Returns `None` when the shapes don't overlap. Point-vs-point
    /// compares positions exactly.
    pub fn check(&self, other: &Collider) -> Option<Contact> {
        use Collider::{Circle, Line, Point, Polygon};

        match (self, other) {
            (Point(a), Point(b)) => boolean(a.position == b.position),
            (Point(a), Line(b)) => boolean(narrow::point_on_line(a.position, b.start, b.end)),
            (Point(a), Circle(b)) => {
                boolean(narrow::point_in_circle(a.position, b.position(), b.radius_sq()))
            }
            (Point(a), Polygon(b)) => boolean(narrow::point_in_polygon(a.position, b.points())),

            (Line(a), Point(b)) => boolean(narrow::point_on_line(b.position, a.start, a.end)),
            (Line(a), Line(b)) => {
                boolean(narrow::lines_intersect(a.start, a.end, b.start, b.end))
            }
            (Line(a), Circle(b)) => boolean(
                narrow::segment_hits_circle(a.start, a.end, b.position(), b.radius()).is_some(),
            ),
            (Line(a), Polygon(b)) => boolean(resolve::line_polygon(a, b)),

            (Circle(a), Point(b)) => {
                boolean(narrow::point_in_circle(b.position, a.position(), a.radius_sq()))
            }
            (Circle(a), Line(b)) => boolean(
                narrow::segment_hits_circle(b.start, b.end, a.position(), a.radius()).is_some(),
            ),
            (Circle(a), Circle(b)) => resolve::circle_circle(a, b).map(Contact::push),
            (Circle(a), Polygon(b)) => resolve::circle_polygon(a, b, false).map(Contact::push),

            (Polygon(a), Point(b)) => boolean(narrow::point_in_polygon(b.position, a.points())),
            (Polygon(a), Line(b)) => boolean(resolve::line_polygon(b, a)),
            (Polygon(a), Circle(b)) => resolve::circle_polygon(b, a, true).map(Contact::push),
            (Polygon(a), Polygon(b)) => resolve::polygon_polygon(a, b).map(Contact::push),
        }
    }

    /// Boolean shorthand for [`Collider::check`].
    #[inline]
    pub fn is_colliding(&self, other: &Collider) -> bool {
        self.check(other).is_some()
    }

    pub fn set_position(&mut self, position: Vec2) {
        match self {
            Collider::Point(p) => p.set_position(position),
            Collider::Line(l) => l.set_position(position),
            Collider::Circle(c) => c.set_position(position),
            Collider::Polygon(p) => p.set_position(position),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Collider::Point(p) => p.translate(delta),
            Collider::Line(l) => l.translate(delta),
            Collider::Circle(c) => c.translate(delta),
            Collider::Polygon(p) => p.translate(delta),
        }
    }

    /// Rotates to an absolute angle. Only polygons rotate; everything else
    /// is [`ColliderError::UnsupportedOperation`].
    pub fn set_angle(&mut self, angle: f32) -> Result<(), ColliderError> {
        match self {
            Collider::Polygon(p) => {
                p.set_angle(angle);
                Ok(())
            }
            other => Err(ColliderError::UnsupportedOperation {
                shape: other.shape_name(),
                operation: "set_angle",
            }),
        }
    }

    /// Rotates by an angle relative to the current one. Only polygons
    /// rotate; everything else is [`ColliderError::UnsupportedOperation`].
    pub fn rotate_by(&mut self, delta: f32) -> Result<(), ColliderError> {
        match self {
            Collider::Polygon(p) => {
                p.rotate_by(delta);
                Ok(())
            }
            other => Err(ColliderError::UnsupportedOperation {
                shape: other.shape_name(),
                operation: "rotate_by",
            }),
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        match self {
            Collider::Point(p) => p.render(canvas),
            Collider::Line(l) => l.render(canvas),
            Collider::Circle(c) => c.render(canvas),
            Collider::Polygon(p) => p.render(canvas),
        }
    }

    fn shape_name(&self) -> &'static str {
        match self {
            Collider::Point(_) => "point",
            Collider::Line(_) => "line",
            Collider::Circle(_) => "circle",
            Collider::Polygon(_) => "polygon",
        }
    }
}

fn boolean(colliding: bool) -> Option<Contact> {
    colliding.then_some(Contact::BOOLEAN)
}

impl From<PointCollider> for Collider {
    fn from(shape: PointCollider) -> Self {
        Collider::Point(shape)
    }
}

impl From<LineCollider> for Collider {
    fn from(shape: LineCollider) -> Self {
        Collider::Line(shape)
    }
}

impl From<CircleCollider> for Collider {
    fn from(shape: CircleCollider) -> Self {
        Collider::Circle(shape)
    }
}

impl From<PolygonCollider> for Collider {
    fn from(shape: PolygonCollider) -> Self {
        Collider::Polygon(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shapes(offset: Vec2) -> Vec<Collider> {
        vec![
            PointCollider::new(offset + Vec2::new(5.0, 5.0)).into(),
            LineCollider::new(offset + Vec2::new(-2.0, 5.0), offset + Vec2::new(12.0, 5.0)).into(),
            CircleCollider::new(offset + Vec2::new(5.0, 5.0), 4.0).into(),
            Collider::Polygon(
                PolygonCollider::new(
                    &[
                        Vec2::new(0.0, 0.0),
                        Vec2::new(10.0, 0.0),
                        Vec2::new(10.0, 10.0),
                        Vec2::new(0.0, 10.0),
                    ],
                    offset,
                )
                .unwrap(),
            ),
        ]
    }

    #[test]
    fn test_dispatch_is_symmetric() {
        // overlapping cluster vs the same cluster, and vs a distant one:
        // boolean results must agree in both argument orders for every pair
        let near = sample_shapes(Vec2::ZERO);
        let far = sample_shapes(Vec2::new(100.0, 100.0));

        for a in &near {
            for b in near.iter().chain(&far) {
                assert_eq!(
                    a.is_colliding(b),
                    b.is_colliding(a),
                    "asymmetric result for {a:?} vs {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_point_point_exact_equality() {
        let a = Collider::Point(PointCollider::new(Vec2::new(1.5, 2.5)));
        let b = Collider::Point(PointCollider::new(Vec2::new(1.5, 2.5)));
        let c = Collider::Point(PointCollider::new(Vec2::new(1.5, 2.5001)));

        assert!(a.is_colliding(&b));
        assert!(!a.is_colliding(&c));
    }

    #[test]
    fn test_point_in_polygon_dispatch() {
        let shapes = sample_shapes(Vec2::ZERO);
        let square = &shapes[3];

        let inside = Collider::Point(PointCollider::new(Vec2::new(5.0, 5.0)));
        let outside = Collider::Point(PointCollider::new(Vec2::new(15.0, 5.0)));
        assert!(inside.is_colliding(square));
        assert!(!outside.is_colliding(square));
    }

    #[test]
    fn test_mtv_follows_the_receiver() {
        let circle: Collider = CircleCollider::new(Vec2::new(0.5, -0.4), 0.5).into();
        let square = Collider::Polygon(
            PolygonCollider::new(
                &[
                    Vec2::new(0.0, 0.0),
                    Vec2::new(1.0, 0.0),
                    Vec2::new(1.0, 1.0),
                    Vec2::new(0.0, 1.0),
                ],
                Vec2::ZERO,
            )
            .unwrap(),
        );

        let push_circle = circle.check(&square).unwrap().mtv.unwrap();
        let push_square = square.check(&circle).unwrap().mtv.unwrap();
        assert!((push_circle + push_square).length() < 1e-5);
    }

    #[test]
    fn test_boolean_pairs_have_no_mtv() {
        let shapes = sample_shapes(Vec2::ZERO);
        let point = &shapes[0];
        let line = &shapes[1];

        assert_eq!(point.check(line), Some(Contact { mtv: None }));
        assert_eq!(line.check(&shapes[3]), Some(Contact { mtv: None }));
    }

    #[test]
    fn test_rotation_through_the_enum() {
        let mut circle: Collider = CircleCollider::new(Vec2::ZERO, 1.0).into();
        let err = circle.set_angle(1.0).unwrap_err();
        assert!(matches!(
            err,
            ColliderError::UnsupportedOperation {
                shape: "circle",
                operation: "set_angle"
            }
        ));

        let mut square = sample_shapes(Vec2::ZERO).pop().unwrap();
        assert!(square.rotate_by(0.5).is_ok());
    }

    #[test]
    fn test_enum_mutators_reach_the_shape() {
        let mut line: Collider = LineCollider::new(Vec2::ZERO, Vec2::new(2.0, 0.0)).into();
        line.translate(Vec2::new(1.0, 1.0));

        let Collider::Line(inner) = &line else {
            panic!("variant changed");
        };
        assert_eq!(inner.start, Vec2::new(1.0, 1.0));
        assert_eq!(inner.end, Vec2::new(3.0, 1.0));
    }
}
