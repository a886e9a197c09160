//! Path data expressed in board coordinates.

use std::fmt;
use std::io;
use std::ops::Deref;

use crate::{Point, Vec2};

/// Fractional digits written when no precision is requested.
pub const DEFAULT_PRECISION: usize = 4;

/// The largest precision the formatting machinery accepts.
///
/// Requests above it are clamped.
pub const MAX_PRECISION: usize = u16::MAX as usize;

/// One drawing command in board coordinates.
///
/// Only the absolute forms of `M L C Q A Z` remain: axis-only lines become
/// [`LineTo`](BoardEl::LineTo) and shorthand curves carry their implied
/// control point explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardEl {
    /// Start a new sub-path at the given point.
    MoveTo(Point),
    /// A straight line to the given point.
    LineTo(Point),
    /// A cubic Bézier: two control points, then the end point.
    CurveTo(Point, Point, Point),
    /// A quadratic Bézier: control point, then the end point.
    QuadTo(Point, Point),
    /// An elliptical arc.
    ArcTo(BoardArc),
    /// Close the current sub-path.
    ClosePath,
}

/// The parameters of an arc in board coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardArc {
    /// The arc's radii, already scaled.
    pub radii: Vec2,
    /// Rotation of the ellipse's x axis, in degrees, unchanged from the source.
    pub x_rotation: f64,
    /// Does this arc sweep through more than π radians?
    pub large_arc: bool,
    /// Determines if the arc should begin moving at positive angles.
    pub sweep: bool,
    /// The arc's end point.
    pub to: Point,
}

/// A sequence of [`BoardEl`], the result of remapping one path.
///
/// `Display` writes the path data with every number in fixed notation. The
/// number of fractional digits is taken from the formatter (`{:.6}`) and
/// defaults to [`DEFAULT_PRECISION`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardPath {
    elements: Vec<BoardEl>,
}

impl BoardPath {
    /// Create a new, empty path.
    pub fn new() -> BoardPath {
        BoardPath::default()
    }

    /// Push an element onto the end of the path.
    pub fn push(&mut self, el: BoardEl) {
        self.elements.push(el);
    }

    /// The elements of the path.
    pub fn elements(&self) -> &[BoardEl] {
        &self.elements
    }

    /// Convert the path to path data with `precision` fractional digits.
    ///
    /// `precision` is clamped to [`MAX_PRECISION`].
    ///
    /// Tokens are separated by single spaces, and every command letter is
    /// written out, one per element.
    ///
    /// # Examples
    ///
    /// ```
    /// use boardpath::{BoardEl, BoardPath, Point};
    ///
    /// let mut path = BoardPath::new();
    /// path.push(BoardEl::MoveTo(Point::new(1.0, 2.0)));
    /// path.push(BoardEl::LineTo(Point::new(3.5, 4.0)));
    /// path.push(BoardEl::ClosePath);
    /// assert_eq!(path.to_svg(2), "M 1.00 2.00 L 3.50 4.00 Z");
    /// ```
    pub fn to_svg(&self, precision: usize) -> String {
        format!("{:.*}", precision.min(MAX_PRECISION), self)
    }

    /// Write the path data to anything implementing `io::Write`.
    ///
    /// `precision` is clamped as in [`to_svg`](BoardPath::to_svg).
    ///
    /// # Errors
    ///
    /// Any error returned by the writer.
    pub fn write_to(&self, mut w: impl io::Write, precision: usize) -> io::Result<()> {
        write!(w, "{:.*}", precision.min(MAX_PRECISION), self)
    }
}

impl Deref for BoardPath {
    type Target = [BoardEl];

    fn deref(&self) -> &[BoardEl] {
        &self.elements
    }
}

impl FromIterator<BoardEl> for BoardPath {
    fn from_iter<T: IntoIterator<Item = BoardEl>>(iter: T) -> BoardPath {
        BoardPath {
            elements: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BoardPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        let mut w = NumberWriter {
            f,
            precision,
            first: true,
        };
        for el in &self.elements {
            match el {
                BoardEl::MoveTo(p) => {
                    w.token("M")?;
                    w.point(*p)?;
                }
                BoardEl::LineTo(p) => {
                    w.token("L")?;
                    w.point(*p)?;
                }
                BoardEl::CurveTo(p1, p2, p3) => {
                    w.token("C")?;
                    w.point(*p1)?;
                    w.point(*p2)?;
                    w.point(*p3)?;
                }
                BoardEl::QuadTo(p1, p2) => {
                    w.token("Q")?;
                    w.point(*p1)?;
                    w.point(*p2)?;
                }
                BoardEl::ArcTo(arc) => {
                    w.token("A")?;
                    w.number(arc.radii.x)?;
                    w.number(arc.radii.y)?;
                    w.number(arc.x_rotation)?;
                    w.token(if arc.large_arc { "1" } else { "0" })?;
                    w.token(if arc.sweep { "1" } else { "0" })?;
                    w.point(arc.to)?;
                }
                BoardEl::ClosePath => w.token("Z")?,
            }
        }
        Ok(())
    }
}

/// Writes space separated tokens with a fixed number of fractional digits.
struct NumberWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    precision: usize,
    first: bool,
}

impl NumberWriter<'_, '_> {
    fn token(&mut self, s: &str) -> fmt::Result {
        if !self.first {
            self.f.write_str(" ")?;
        }
        self.first = false;
        self.f.write_str(s)
    }

    fn number(&mut self, v: f64) -> fmt::Result {
        if !self.first {
            self.f.write_str(" ")?;
        }
        self.first = false;
        // Adding zero turns -0.0 into 0.0, so it is not written as `-0.0000`.
        write!(self.f, "{:.*}", self.precision, v + 0.0)
    }

    fn point(&mut self, p: Point) -> fmt::Result {
        self.number(p.x)?;
        self.number(p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoardPath {
        [
            BoardEl::MoveTo(Point::new(100., 200.)),
            BoardEl::CurveTo(Point::new(1., 2.), Point::new(3., 4.), Point::new(5., 6.)),
            BoardEl::QuadTo(Point::new(-1.5, 0.25), Point::new(7., 8.)),
            BoardEl::ArcTo(BoardArc {
                radii: Vec2::new(10., 10.),
                x_rotation: 30.,
                large_arc: true,
                sweep: false,
                to: Point::new(9., 9.),
            }),
            BoardEl::ClosePath,
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn default_precision() {
        assert_eq!(
            sample().to_string(),
            "M 100.0000 200.0000 C 1.0000 2.0000 3.0000 4.0000 5.0000 6.0000 \
             Q -1.5000 0.2500 7.0000 8.0000 A 10.0000 10.0000 30.0000 1 0 9.0000 9.0000 Z"
        );
    }

    #[test]
    fn requested_precision() {
        let mut path = BoardPath::new();
        path.push(BoardEl::MoveTo(Point::new(1. / 3., 2. / 3.)));
        assert_eq!(path.to_svg(6), "M 0.333333 0.666667");
        assert_eq!(format!("{path:.1}"), "M 0.3 0.7");
        let mut buf = Vec::new();
        path.write_to(&mut buf, 2).unwrap();
        assert_eq!(buf, b"M 0.33 0.67");
    }

    #[test]
    fn oversized_precision_is_clamped() {
        let path: BoardPath = [BoardEl::MoveTo(Point::new(1., 0.5))].into_iter().collect();
        let out = path.to_svg(70_000);
        let numbers: Vec<_> = out.split(' ').skip(1).collect();
        assert_eq!(numbers.len(), 2);
        for n in numbers {
            let (_, frac) = n.split_once('.').unwrap();
            assert_eq!(frac.len(), MAX_PRECISION);
        }
        let mut buf = Vec::new();
        path.write_to(&mut buf, usize::MAX).unwrap();
        assert_eq!(buf, out.as_bytes());
    }

    #[test]
    fn negative_zero() {
        let path: BoardPath = [BoardEl::LineTo(Point::new(-0.0, 0.0))].into_iter().collect();
        assert_eq!(path.to_string(), "L 0.0000 0.0000");
    }

    #[test]
    fn empty() {
        assert_eq!(BoardPath::new().to_string(), "");
        assert!(BoardPath::new().is_empty());
    }
}
