//! Assembling independently authored shapes on one board.

use std::borrow::Cow;

use crate::log::{debug, warn};
use crate::{Frame, RemapError, RemapOptions, Remapper};

/// Origins closer than this are treated as equal when checking alignment.
const ORIGIN_TOLERANCE: f64 = 1e-6;
/// Sizes closer than this are treated as equal when checking alignment.
const SIZE_TOLERANCE: f64 = 1e-3;

/// The shared frame that shapes are placed into.
///
/// The board spans `(0, 0)` to `(width, height)`.
///
/// # Examples
///
/// ```
/// use boardpath::{Board, Frame};
///
/// let board = Board::new(800., 1400.);
/// // Already drawn in board coordinates.
/// let d = board.place("M10 10 L20 20", Some(Frame::new(0., 0., 800., 1400.)), None);
/// assert_eq!(d.unwrap(), "M10 10 L20 20");
///
/// // A shape drawn in a unit square, placed at (100, 200).
/// let d = board.place("M0 0 L1 1", None, Some(Frame::new(100., 200., 50., 50.)));
/// assert_eq!(d.unwrap(), "M 100.0000 200.0000 L 150.0000 250.0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    /// The board width.
    pub width: f64,
    /// The board height.
    pub height: f64,
    /// Options used for every shape placed on this board.
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: RemapOptions,
}

impl Board {
    /// A board of the given size with default options.
    pub fn new(width: f64, height: f64) -> Board {
        Board {
            width,
            height,
            options: RemapOptions::default(),
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: RemapOptions) -> Board {
        self.options = options;
        self
    }

    /// The board as a frame anchored at the origin.
    #[inline]
    pub fn frame(&self) -> Frame {
        Frame::new(0., 0., self.width, self.height)
    }

    /// Whether a shape's frame already coincides with the board.
    pub fn is_aligned(&self, source: &Frame) -> bool {
        source.is_near(&self.frame(), ORIGIN_TOLERANCE, SIZE_TOLERANCE)
    }

    /// Bring one shape's path data onto the board.
    ///
    /// `source` is the frame the shape was authored in; a shape that declares
    /// none is taken to be drawn in [`Frame::UNIT`]. A board-aligned shape is
    /// returned untouched. Any other shape is remapped onto `placement`.
    ///
    /// # Errors
    ///
    /// [`RemapError::MissingPlacement`] if the shape needs remapping and no
    /// placement was given, and any error from [`Remapper::remap`].
    pub fn place<'a>(
        &self,
        data: &'a str,
        source: Option<Frame>,
        placement: Option<Frame>,
    ) -> Result<Cow<'a, str>, RemapError> {
        if let Some(source) = source {
            if self.is_aligned(&source) {
                debug!(%source, "shape is board-aligned, passing through");
                return Ok(Cow::Borrowed(data));
            }
        }
        let Some(placement) = placement else {
            warn!("shape is not board-aligned and has no placement");
            return Err(RemapError::MissingPlacement);
        };
        let source = source.unwrap_or(Frame::UNIT);
        let remapper = Remapper::new(source, placement)?.with_options(self.options);
        match remapper.remap(data) {
            Ok(d) => Ok(Cow::Owned(d)),
            Err(err) => {
                if matches!(err, RemapError::UnsupportedArcScale { .. }) {
                    warn!(error = %err, %source, %placement, "cannot place shape");
                }
                Err(err)
            }
        }
    }
}
