//! Re-expressing path data from a source frame in a destination frame.

use crate::log::debug;
use crate::path::{ArcTo, Coords, CubicTo, Path, PathEl, QuadTo, SmoothCubicTo};
use crate::{BoardArc, BoardEl, BoardPath, Frame, FrameTransform, Point, RemapError};

/// Settings for a [`Remapper`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RemapOptions {
    /// Fractional digits of every number written by [`Remapper::remap`].
    pub precision: usize,
    /// Largest difference between x and y scale at which arcs are still accepted.
    pub arc_tolerance: f64,
    /// Move the current point back to the sub-path start on `Z`.
    ///
    /// Off by default: after `Z` the current point stays at the last drawn
    /// point, so a relative command following `Z` is measured from there.
    /// Standard path semantics measure it from the sub-path start instead;
    /// set this to get that.
    pub restore_start_on_close: bool,
}

impl Default for RemapOptions {
    fn default() -> Self {
        RemapOptions {
            precision: crate::DEFAULT_PRECISION,
            arc_tolerance: 1e-6,
            restore_start_on_close: false,
        }
    }
}

/// Re-expresses path data authored in one frame inside another.
///
/// The transform is derived once, at construction; a `Remapper` can then be
/// used for any number of paths, from any number of threads.
#[derive(Clone, Copy, Debug)]
pub struct Remapper {
    transform: FrameTransform,
    options: RemapOptions,
}

/// The running state of one remapping pass. All points are in board coordinates.
struct Cursor {
    /// The end point of the previous segment.
    current: Point,
    /// The start point of the current sub-path (this resets for every `MoveTo`).
    start: Point,
    /// The last control point of the previous segment, if it was a curve.
    last_ctrl: Option<Point>,
}

impl Remapper {
    /// A remapper carrying `source` onto `dest`.
    ///
    /// # Errors
    ///
    /// [`RemapError::DegenerateFrame`] if either frame has a non-positive or
    /// non-finite extent.
    pub fn new(source: Frame, dest: Frame) -> Result<Remapper, RemapError> {
        Ok(Remapper::from_transform(FrameTransform::between(source, dest)?))
    }

    /// A remapper applying an existing transform.
    pub fn from_transform(transform: FrameTransform) -> Remapper {
        Remapper {
            transform,
            options: RemapOptions::default(),
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: RemapOptions) -> Remapper {
        self.options = options;
        self
    }

    /// The transform applied to absolute coordinates.
    pub fn transform(&self) -> FrameTransform {
        self.transform
    }

    /// The options in use.
    pub fn options(&self) -> &RemapOptions {
        &self.options
    }

    /// Parse and remap path data, returning it as a string.
    ///
    /// # Errors
    ///
    /// Any error from [`Path::parse`] or [`Remapper::remap_path`]. No partial
    /// output is produced.
    pub fn remap(&self, data: &str) -> Result<String, RemapError> {
        let path = Path::parse(data)?;
        let remapped = self.remap_path(&path)?;
        Ok(remapped.to_svg(self.options.precision))
    }

    /// Remap an already parsed path.
    ///
    /// # Errors
    ///
    /// [`RemapError::UnsupportedArcScale`] if the path has an arc and the
    /// transform scales x and y by different amounts.
    pub fn remap_path(&self, path: &Path) -> Result<BoardPath, RemapError> {
        debug!(
            elements = path.len(),
            sx = self.transform.scale().x,
            sy = self.transform.scale().y,
            "remapping path"
        );
        // Before the first command the cursor sits at the source origin, so a
        // leading relative moveto behaves like an absolute one.
        let origin = self.transform * Point::ZERO;
        let mut cursor = Cursor {
            current: origin,
            start: origin,
            last_ctrl: None,
        };
        let mut out = BoardPath::new();
        for (offset, el) in path.iter() {
            self.step(&mut cursor, offset, el, &mut out)?;
        }
        Ok(out)
    }

    fn step(
        &self,
        cursor: &mut Cursor,
        offset: usize,
        el: &PathEl,
        out: &mut BoardPath,
    ) -> Result<(), RemapError> {
        let ts = &self.transform;
        match el {
            PathEl::MoveTo(coords, points) => {
                let (first, rest) = points.split();
                let first = cursor.map(ts, *coords, *first);
                cursor.current = first;
                cursor.start = first;
                cursor.last_ctrl = None;
                out.push(BoardEl::MoveTo(first));
                for p in rest {
                    let p = cursor.map(ts, *coords, *p);
                    cursor.current = p;
                    out.push(BoardEl::LineTo(p));
                }
            }
            PathEl::LineTo(coords, points) => {
                for p in points {
                    let p = cursor.map(ts, *coords, *p);
                    cursor.current = p;
                    out.push(BoardEl::LineTo(p));
                }
                cursor.last_ctrl = None;
            }
            PathEl::Horiz(coords, dists) => {
                // Only the x axis of the transform applies; y stays where the
                // cursor already is in board coordinates.
                for &x in dists {
                    let x = match coords {
                        Coords::Absolute => ts.apply_x(x),
                        Coords::Relative => cursor.current.x + x * ts.scale().x,
                    };
                    cursor.current = Point::new(x, cursor.current.y);
                    out.push(BoardEl::LineTo(cursor.current));
                }
                cursor.last_ctrl = None;
            }
            PathEl::Vert(coords, dists) => {
                for &y in dists {
                    let y = match coords {
                        Coords::Absolute => ts.apply_y(y),
                        Coords::Relative => cursor.current.y + y * ts.scale().y,
                    };
                    cursor.current = Point::new(cursor.current.x, y);
                    out.push(BoardEl::LineTo(cursor.current));
                }
                cursor.last_ctrl = None;
            }
            PathEl::CubicTo(coords, cubics) => {
                for CubicTo { ctrl1, ctrl2, to } in cubics {
                    let ctrl1 = cursor.map(ts, *coords, *ctrl1);
                    let ctrl2 = cursor.map(ts, *coords, *ctrl2);
                    let to = cursor.map(ts, *coords, *to);
                    out.push(BoardEl::CurveTo(ctrl1, ctrl2, to));
                    cursor.current = to;
                    cursor.last_ctrl = Some(ctrl2);
                }
            }
            PathEl::SmoothCubicTo(coords, cubics) => {
                for SmoothCubicTo { ctrl2, to } in cubics {
                    let ctrl1 = cursor.reflected_ctrl();
                    let ctrl2 = cursor.map(ts, *coords, *ctrl2);
                    let to = cursor.map(ts, *coords, *to);
                    out.push(BoardEl::CurveTo(ctrl1, ctrl2, to));
                    cursor.current = to;
                    cursor.last_ctrl = Some(ctrl2);
                }
            }
            PathEl::QuadTo(coords, quads) => {
                for QuadTo { ctrl, to } in quads {
                    let ctrl = cursor.map(ts, *coords, *ctrl);
                    let to = cursor.map(ts, *coords, *to);
                    out.push(BoardEl::QuadTo(ctrl, to));
                    cursor.current = to;
                    cursor.last_ctrl = Some(ctrl);
                }
            }
            PathEl::SmoothQuadTo(coords, points) => {
                for to in points {
                    let ctrl = cursor.reflected_ctrl();
                    let to = cursor.map(ts, *coords, *to);
                    out.push(BoardEl::QuadTo(ctrl, to));
                    cursor.current = to;
                    cursor.last_ctrl = Some(ctrl);
                }
            }
            PathEl::EllipticArc(coords, arcs) => {
                // Under unequal x/y scale an ellipse stays an ellipse, but its
                // axes no longer line up with the written rotation.
                let Some(s) = ts.uniform_scale(self.options.arc_tolerance) else {
                    debug!(offset, "arc under non-uniform scale");
                    return Err(RemapError::UnsupportedArcScale {
                        offset,
                        scale: ts.scale(),
                    });
                };
                for ArcTo {
                    radii,
                    x_rotation,
                    large_arc,
                    sweep,
                    to,
                } in arcs
                {
                    let to = cursor.map(ts, *coords, *to);
                    out.push(BoardEl::ArcTo(BoardArc {
                        radii: *radii * s,
                        x_rotation: *x_rotation,
                        large_arc: *large_arc,
                        sweep: *sweep,
                        to,
                    }));
                    cursor.current = to;
                }
                cursor.last_ctrl = None;
            }
            PathEl::ClosePath => {
                out.push(BoardEl::ClosePath);
                cursor.last_ctrl = None;
                if self.options.restore_start_on_close {
                    cursor.current = cursor.start;
                }
            }
        }
        Ok(())
    }
}

impl Cursor {
    /// Map a source coordinate, or a source displacement from the current
    /// point, into board coordinates.
    #[inline]
    fn map(&self, ts: &FrameTransform, coords: Coords, p: Point) -> Point {
        match coords {
            Coords::Absolute => *ts * p,
            Coords::Relative => self.current + ts.apply_offset(p.to_vec2()),
        }
    }

    /// The implied control point of a shorthand curve: the previous control
    /// point reflected through the current point, or the current point when
    /// the previous segment was not a curve.
    #[inline]
    fn reflected_ctrl(&self) -> Point {
        match self.last_ctrl {
            Some(ctrl) => ctrl.reflect_through(self.current),
            None => self.current,
        }
    }
}

/// Re-express path data authored in `source` inside `dest`.
///
/// Numbers are written with [`DEFAULT_PRECISION`](crate::DEFAULT_PRECISION)
/// fractional digits. Use [`Remapper`] to change that or to reuse the
/// transform across many paths.
///
/// # Errors
///
/// - [`RemapError::DegenerateFrame`] for a frame with a non-positive extent,
/// - [`RemapError::MalformedPath`] and [`RemapError::UnsupportedCommand`] for
///   path data that cannot be read,
/// - [`RemapError::UnsupportedArcScale`] for an arc under non-uniform scale.
///
/// # Examples
///
/// ```
/// use boardpath::{remap, Frame};
///
/// let out = remap(
///     "M0 0 L10 0 L10 10 Z",
///     Frame::new(0., 0., 10., 10.),
///     Frame::new(100., 200., 50., 50.),
/// )
/// .unwrap();
/// assert_eq!(out, "M 100.0000 200.0000 L 150.0000 200.0000 L 150.0000 250.0000 Z");
/// ```
pub fn remap(data: &str, source: Frame, dest: Frame) -> Result<String, RemapError> {
    Remapper::new(source, dest)?.remap(data)
}
