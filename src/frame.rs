//! A rectangular coordinate frame.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::token::scan_number;
use crate::{Point, RemapError, Vec2};

/// A rectangular coordinate extent, given as origin and size.
///
/// This is the shape of an SVG `viewBox`: the frame a shape was authored in,
/// or the region of the board it has to land in. Width and height must be
/// positive for the frame to take part in a transform; this is checked by
/// [`Frame::validate`] rather than at construction.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Frame {
    /// The minimum x coordinate (left edge).
    pub min_x: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub min_y: f64,
    /// The extent along x.
    pub width: f64,
    /// The extent along y.
    pub height: f64,
}

impl Frame {
    /// The unit square at the origin.
    ///
    /// Used as the source frame of a shape that declares none.
    pub const UNIT: Frame = Frame::new(0., 0., 1., 1.);

    /// A new frame from origin coordinates and size.
    #[inline]
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Frame {
        Frame {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// A new frame from an origin point and a size.
    #[inline]
    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Vec2>) -> Frame {
        let origin = origin.into();
        let size = size.into();
        Frame::new(origin.x, origin.y, size.x, size.y)
    }

    /// The origin (minimum corner) of the frame.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// The size of the frame, as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// The corner opposite the origin.
    #[inline]
    pub fn max(&self) -> Point {
        self.origin() + self.size()
    }

    /// Returns an error unless width and height are both finite and positive.
    ///
    /// # Errors
    ///
    /// [`RemapError::DegenerateFrame`] if either extent is zero, negative, NaN
    /// or infinite, or if the origin is not finite.
    pub fn validate(&self) -> Result<(), RemapError> {
        let positive = |v: f64| v.is_finite() && v > 0.;
        if positive(self.width) && positive(self.height) && self.origin().is_finite() {
            Ok(())
        } else {
            Err(RemapError::DegenerateFrame {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Whether two frames describe the same extent.
    ///
    /// Origins are compared with `origin_tolerance` and sizes with
    /// `size_tolerance`, since sizes typically come from integer board
    /// dimensions while origins come from computed placements.
    pub fn is_near(&self, other: &Frame, origin_tolerance: f64, size_tolerance: f64) -> bool {
        Point::is_near(self.origin(), other.origin(), origin_tolerance)
            && (self.width - other.width).abs() <= size_tolerance
            && (self.height - other.height).abs() <= size_tolerance
    }
}

impl From<(f64, f64, f64, f64)> for Frame {
    fn from((min_x, min_y, width, height): (f64, f64, f64, f64)) -> Frame {
        Frame::new(min_x, min_y, width, height)
    }
}

impl From<Frame> for (f64, f64, f64, f64) {
    fn from(frame: Frame) -> (f64, f64, f64, f64) {
        (frame.min_x, frame.min_y, frame.width, frame.height)
    }
}

impl Add<Vec2> for Frame {
    type Output = Frame;

    #[inline]
    fn add(self, v: Vec2) -> Frame {
        Frame::from_origin_size(self.origin() + v, self.size())
    }
}

impl Sub<Vec2> for Frame {
    type Output = Frame;

    #[inline]
    fn sub(self, v: Vec2) -> Frame {
        Frame::from_origin_size(self.origin() - v, self.size())
    }
}

/// Parses the value of a `viewBox` attribute: four numbers separated by
/// whitespace and/or commas.
impl FromStr for Frame {
    type Err = RemapError;

    fn from_str(s: &str) -> Result<Frame, RemapError> {
        let bytes = s.as_bytes();
        let mut values = [0.0; 4];
        let mut count = 0;
        let mut ix = 0;
        while ix < bytes.len() {
            let c = bytes[ix];
            if c.is_ascii_whitespace() || c == b',' {
                ix += 1;
                continue;
            }
            let (value, end) = scan_number(s, ix).ok_or(RemapError::MalformedViewBox)?;
            let slot = values.get_mut(count).ok_or(RemapError::MalformedViewBox)?;
            *slot = value;
            count += 1;
            ix = end;
        }
        if count != 4 {
            return Err(RemapError::MalformedViewBox);
        }
        let [min_x, min_y, width, height] = values;
        Ok(Frame::new(min_x, min_y, width, height))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.min_x, f)?;
        write!(f, " ")?;
        fmt::Display::fmt(&self.min_y, f)?;
        write!(f, " ")?;
        fmt::Display::fmt(&self.width, f)?;
        write!(f, " ")?;
        fmt::Display::fmt(&self.height, f)
    }
}
