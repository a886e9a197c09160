//! This module provides type [`Path`], path data grouped into typed commands.
//!
//! Tokens are grouped by the argument count of each command, so every
//! element carries its already parsed numbers. Nothing is transformed here;
//! coordinates are exactly as written in the source frame.
use crate::{Point, RemapError, Vec2};
use std::ops::Deref;

mod onevec;
mod string_repr;

pub use self::onevec::OneVec;
pub use self::string_repr::parse;

/// Parsed path data.
///
/// Each element remembers the byte offset of the command letter that
/// introduced it, so later stages can point back into the source string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    /// The elements that make up this path.
    elements: Vec<PathEl>,
    /// Byte offset of each element's command letter.
    offsets: Vec<usize>,
}

/// Whether the numbers of a command are positions or displacements.
///
/// Uppercase command letters are absolute, lowercase ones relative to the
/// current point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coords {
    /// Positions in the source frame.
    Absolute,
    /// Offsets from the current point, in source frame units.
    Relative,
}

impl Coords {
    /// The coordinate mode of a command letter.
    #[inline]
    pub fn of(letter: char) -> Coords {
        if letter.is_ascii_lowercase() {
            Coords::Relative
        } else {
            Coords::Absolute
        }
    }

    /// Case a command letter to match this mode.
    #[inline]
    pub fn apply(self, letter: char) -> char {
        match self {
            Coords::Absolute => letter.to_ascii_uppercase(),
            Coords::Relative => letter.to_ascii_lowercase(),
        }
    }
}

/// A path command with all of its argument groups.
///
/// Points of a relative element are displacements; they are stored as
/// `Point` so both modes share one shape.
#[derive(Clone, Debug, PartialEq)]
pub enum PathEl {
    /// `M`: Start a new sub-path at the first point.
    ///
    /// Subsequent points are implicit line segments, as in the path grammar.
    MoveTo(Coords, OneVec<Point>),
    /// `L`: Draw a line from the current point to each given point in turn.
    LineTo(Coords, OneVec<Point>),
    /// `H`: Horizontal lines; each value is an x coordinate (or x offset).
    Horiz(Coords, OneVec<f64>),
    /// `V`: Vertical lines; each value is a y coordinate (or y offset).
    Vert(Coords, OneVec<f64>),
    /// `C`: Cubic Bézier curves.
    CubicTo(Coords, OneVec<CubicTo>),
    /// `S`: Cubic Bézier curves whose first control point is implied.
    SmoothCubicTo(Coords, OneVec<SmoothCubicTo>),
    /// `Q`: Quadratic Bézier curves.
    QuadTo(Coords, OneVec<QuadTo>),
    /// `T`: Quadratic Bézier curves whose control point is implied.
    SmoothQuadTo(Coords, OneVec<Point>),
    /// `A`: Elliptical arcs.
    EllipticArc(Coords, OneVec<ArcTo>),
    /// `z`, `Z`: Close the current sub-path.
    ///
    /// This always writes out as `Z`; the two letters mean the same thing.
    ClosePath,
}

/// The parameters of a `CubicTo` element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicTo {
    /// The first control point (from the start)
    pub ctrl1: Point,
    /// The second control point (from the start)
    pub ctrl2: Point,
    /// The point that this curve ends at
    pub to: Point,
}

/// The parameters of a `SmoothCubicTo` element.
///
/// The first control point is the reflection of the previous curve's last
/// control point through the current point, or the current point itself
/// when there is nothing to reflect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothCubicTo {
    /// The second control point (from the start)
    pub ctrl2: Point,
    /// The point that this curve ends at
    pub to: Point,
}

/// The parameters of a `QuadTo` element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadTo {
    /// The control point
    pub ctrl: Point,
    /// The point that this curve ends at
    pub to: Point,
}

/// The parameters of an `EllipticArc` element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcTo {
    /// The arc's radii, x then y before rotation.
    pub radii: Vec2,
    /// Rotation of the ellipse's x axis, in degrees as written.
    pub x_rotation: f64,
    /// Does this arc sweep through more than π radians?
    pub large_arc: bool,
    /// Determines if the arc should begin moving at positive angles.
    pub sweep: bool,
    /// The arc's end point.
    pub to: Point,
}

impl Path {
    /// Create a new, empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to parse a string as path data.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse(input: &str) -> Result<Self, RemapError> {
        parse(input)
    }

    /// Push an element onto the end of the path.
    ///
    /// `offset` is the byte offset of the element's command letter.
    pub fn push(&mut self, offset: usize, el: PathEl) {
        self.elements.push(el);
        self.offsets.push(offset);
    }

    /// Iterate over the elements together with the offsets of their command letters.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PathEl)> + '_ {
        self.offsets.iter().copied().zip(&self.elements)
    }
}

impl Deref for Path {
    type Target = [PathEl];

    fn deref(&self) -> &[PathEl] {
        &self.elements
    }
}

impl PathEl {
    /// The command letter this element is written with.
    pub fn letter(&self) -> char {
        let (letter, coords) = match self {
            PathEl::MoveTo(c, _) => ('M', c),
            PathEl::LineTo(c, _) => ('L', c),
            PathEl::Horiz(c, _) => ('H', c),
            PathEl::Vert(c, _) => ('V', c),
            PathEl::CubicTo(c, _) => ('C', c),
            PathEl::SmoothCubicTo(c, _) => ('S', c),
            PathEl::QuadTo(c, _) => ('Q', c),
            PathEl::SmoothQuadTo(c, _) => ('T', c),
            PathEl::EllipticArc(c, _) => ('A', c),
            PathEl::ClosePath => return 'Z',
        };
        coords.apply(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords() {
        assert_eq!(Coords::of('m'), Coords::Relative);
        assert_eq!(Coords::of('Q'), Coords::Absolute);
        assert_eq!(Coords::Relative.apply('C'), 'c');
        assert_eq!(Coords::Absolute.apply('t'), 'T');
    }

    #[test]
    fn letters() {
        let el = PathEl::Horiz(Coords::Relative, OneVec::single(3.));
        assert_eq!(el.letter(), 'h');
        assert_eq!(PathEl::ClosePath.letter(), 'Z');
    }

    #[test]
    fn offsets_follow_elements() {
        let mut path = Path::new();
        path.push(0, PathEl::MoveTo(Coords::Absolute, OneVec::single(Point::ZERO)));
        path.push(7, PathEl::ClosePath);
        let collected: Vec<_> = path.iter().map(|(offset, el)| (offset, el.letter())).collect();
        assert_eq!(collected, [(0, 'M'), (7, 'Z')]);
        assert_eq!(path.len(), 2);
    }
}
