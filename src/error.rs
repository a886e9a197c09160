//! Errors reported while tokenizing, grouping or remapping path data.

use std::error::Error as StdError;
use std::fmt;

use crate::Vec2;

/// An error which can be returned when remapping a path.
///
/// None of these are recovered from internally: a path that fails produces no
/// output at all. Offsets are byte offsets into the path string.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum RemapError {
    /// The path data could not be read.
    MalformedPath {
        /// Where the problem was found.
        offset: usize,
        /// What was wrong there.
        kind: MalformedKind,
    },
    /// A letter that is not one of `M L H V C S Q T A Z` (in either case).
    UnsupportedCommand {
        /// Offset of the letter.
        offset: usize,
        /// The letter itself.
        letter: char,
    },
    /// An arc was found while the transform scales x and y differently.
    UnsupportedArcScale {
        /// Offset of the arc command letter.
        offset: usize,
        /// The per-axis scale of the transform.
        scale: Vec2,
    },
    /// A source or destination frame with a non-positive or non-finite extent.
    DegenerateFrame {
        /// The frame width.
        width: f64,
        /// The frame height.
        height: f64,
    },
    /// A viewBox string that is not four numbers.
    MalformedViewBox,
    /// A shape that is not aligned with the board and has no placement.
    MissingPlacement,
}

/// The ways path data can be malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedKind {
    /// Neither a command, a separator nor a number starts here.
    InvalidNumber,
    /// The command ran out of numbers before its argument group was complete.
    MissingArguments,
    /// A number appeared where only a command letter is allowed.
    ExpectedCommand,
    /// An arc flag other than `0` or `1`.
    InvalidFlag,
}

impl RemapError {
    /// The byte offset in the path string this error points at, if any.
    pub fn offset(&self) -> Option<usize> {
        match *self {
            RemapError::MalformedPath { offset, .. }
            | RemapError::UnsupportedCommand { offset, .. }
            | RemapError::UnsupportedArcScale { offset, .. } => Some(offset),
            _ => None,
        }
    }

    /// Whether the failure concerns only the one shape being remapped.
    ///
    /// Batch callers can skip the shape and continue on these; the other
    /// errors point at broken input or a broken call.
    pub fn is_shape_local(&self) -> bool {
        matches!(
            self,
            RemapError::UnsupportedArcScale { .. } | RemapError::MissingPlacement
        )
    }
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::InvalidNumber => write!(f, "unable to parse a number"),
            MalformedKind::MissingArguments => write!(f, "command is missing arguments"),
            MalformedKind::ExpectedCommand => write!(f, "expected a command letter"),
            MalformedKind::InvalidFlag => write!(f, "arc flag must be 0 or 1"),
        }
    }
}

impl fmt::Display for RemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemapError::MalformedPath { offset, kind } => {
                write!(f, "malformed path at {offset}: {kind}")
            }
            RemapError::UnsupportedCommand { offset, letter } => {
                write!(f, "unsupported path command \"{letter}\" at {offset}")
            }
            RemapError::UnsupportedArcScale { offset, scale } => write!(
                f,
                "arc at {offset} cannot be remapped under non-uniform scale ({}, {})",
                scale.x, scale.y
            ),
            RemapError::DegenerateFrame { width, height } => {
                write!(f, "frame has degenerate size {width}x{height}")
            }
            RemapError::MalformedViewBox => write!(f, "viewBox must be four numbers"),
            RemapError::MissingPlacement => {
                write!(f, "shape is not board-aligned and has no placement")
            }
        }
    }
}

impl StdError for RemapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        let err = RemapError::MalformedPath {
            offset: 6,
            kind: MalformedKind::MissingArguments,
        };
        assert_eq!(err.offset(), Some(6));
        assert_eq!(RemapError::MalformedViewBox.offset(), None);
    }

    #[test]
    fn shape_local() {
        let arc = RemapError::UnsupportedArcScale {
            offset: 0,
            scale: Vec2::new(2.0, 1.0),
        };
        assert!(arc.is_shape_local());
        assert!(RemapError::MissingPlacement.is_shape_local());
        let bad = RemapError::UnsupportedCommand {
            offset: 3,
            letter: 'B',
        };
        assert!(!bad.is_shape_local());
    }

    #[test]
    fn display() {
        let err = RemapError::MalformedPath {
            offset: 6,
            kind: MalformedKind::MissingArguments,
        };
        assert_eq!(err.to_string(), "malformed path at 6: command is missing arguments");
        let err = RemapError::UnsupportedCommand {
            offset: 0,
            letter: 'R',
        };
        assert_eq!(err.to_string(), "unsupported path command \"R\" at 0");
    }
}
