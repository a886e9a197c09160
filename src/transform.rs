//! A transformation made of per-axis scale and translation.

use std::ops::Mul;

use crate::{Frame, Point, RemapError, Vec2};

/// A transformation including independent x/y scaling and translation.
///
/// If the translation is `(tx, ty)` and the scale is `(sx, sy)`, then this
/// transformation represents this augmented matrix:
///
/// ```text
/// | sx 0  tx |
/// | 0  sy ty |
/// | 0  0  1  |
/// ```
///
/// There is no rotation or skew, so axis-aligned rectangles map to
/// axis-aligned rectangles. This is exactly the family of transforms that
/// carries one [`Frame`] onto another.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameTransform {
    translation: Vec2,
    scale: Vec2,
}

impl FrameTransform {
    /// The identity transform.
    pub const IDENTITY: FrameTransform = FrameTransform::new(Vec2::ZERO, Vec2::splat(1.0));

    /// Create a new transformation from translation and per-axis scale.
    #[inline]
    pub const fn new(translation: Vec2, scale: Vec2) -> FrameTransform {
        FrameTransform { translation, scale }
    }

    /// The transform that carries `source` onto `dest`.
    ///
    /// A point at `source`'s origin lands on `dest`'s origin, and the opposite
    /// corners correspond as well.
    ///
    /// # Errors
    ///
    /// [`RemapError::DegenerateFrame`] if either frame fails [`Frame::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use boardpath::{Frame, FrameTransform, Point, Vec2};
    ///
    /// let ts = FrameTransform::between(
    ///     Frame::new(0., 0., 10., 10.),
    ///     Frame::new(100., 200., 50., 25.),
    /// )
    /// .unwrap();
    /// assert_eq!(ts.scale(), Vec2::new(5., 2.5));
    /// assert_eq!(ts * Point::new(10., 10.), Point::new(150., 225.));
    /// ```
    pub fn between(source: Frame, dest: Frame) -> Result<FrameTransform, RemapError> {
        source.validate()?;
        dest.validate()?;
        let scale = Vec2::new(dest.width / source.width, dest.height / source.height);
        let translation = dest.origin().to_vec2() - source.origin().to_vec2().mul_components(scale);
        Ok(FrameTransform { translation, scale })
    }

    /// The per-axis scale factors.
    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// The translation applied after scaling.
    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Map a displacement.
    ///
    /// Only the scale applies: relative motion is stretched exactly like
    /// absolute motion, but not shifted.
    #[inline]
    pub fn apply_offset(&self, offset: Vec2) -> Vec2 {
        offset.mul_components(self.scale)
    }

    /// Map an x coordinate on its own.
    #[inline]
    pub fn apply_x(&self, x: f64) -> f64 {
        x * self.scale.x + self.translation.x
    }

    /// Map a y coordinate on its own.
    #[inline]
    pub fn apply_y(&self, y: f64) -> f64 {
        y * self.scale.y + self.translation.y
    }

    /// The common scale factor, if x and y scale agree within `tolerance`.
    ///
    /// When they agree, the x factor is returned.
    #[inline]
    pub fn uniform_scale(&self, tolerance: f64) -> Option<f64> {
        ((self.scale.x - self.scale.y).abs() <= tolerance).then_some(self.scale.x)
    }
}

impl Default for FrameTransform {
    #[inline]
    fn default() -> FrameTransform {
        FrameTransform::IDENTITY
    }
}

impl Mul<Point> for FrameTransform {
    type Output = Point;

    #[inline]
    fn mul(self, other: Point) -> Point {
        Point::new(self.apply_x(other.x), self.apply_y(other.y))
    }
}

impl Mul<Frame> for FrameTransform {
    type Output = Frame;

    #[inline]
    fn mul(self, other: Frame) -> Frame {
        Frame::from_origin_size(self * other.origin(), self.apply_offset(other.size()))
    }
}
