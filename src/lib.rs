// Copyright 2026 the Boardpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Re-expressing SVG path data in a shared board frame.
//!
//! Shapes drawn independently, each in its own coordinate frame (typically
//! an SVG `viewBox`), often need to be assembled on one common surface. This
//! crate reads the path data of such a shape, maps every coordinate through
//! a per-axis scale and translation from its source [`Frame`] to a
//! destination [`Frame`], and writes the result back as path data.
//!
//! The output is normalized: only absolute `M L C Q A Z` commands are
//! written. Horizontal and vertical lines become plain lines, and the
//! shorthand curves `S` and `T` are expanded with their implied control
//! points.
//!
//! # Examples
//!
//! ```
//! use boardpath::{remap, Frame};
//!
//! // A square drawn in a 10x10 viewBox, placed at (100, 200) at five times the size.
//! let source: Frame = "0 0 10 10".parse().unwrap();
//! let dest = Frame::new(100.0, 200.0, 50.0, 50.0);
//!
//! let d = remap("M0 0 L10 0 L10 10 Z", source, dest).unwrap();
//! assert_eq!(d, "M 100.0000 200.0000 L 150.0000 200.0000 L 150.0000 250.0000 Z");
//! ```
//!
//! Reusing one transform and inspecting the result before it is written:
//!
//! ```
//! use boardpath::{BoardEl, Frame, Path, Point, Remapper};
//!
//! let remapper = Remapper::new(Frame::UNIT, Frame::new(0.0, 0.0, 4.0, 2.0)).unwrap();
//! let path = Path::parse("M0.5 0.5 h0.25").unwrap();
//! let board = remapper.remap_path(&path).unwrap();
//! assert_eq!(board[1], BoardEl::LineTo(Point::new(3.0, 1.0)));
//! assert_eq!(board.to_svg(1), "M 2.0 1.0 L 3.0 1.0");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` and `Deserialize` for the geometry types, the
//!   options and [`BoardPath`]. [`Frame`] uses the `minX`, `minY`, `width`,
//!   `height` field names of placement manifests.
//! - `schemars`: `JsonSchema` for the same types.
//! - `tracing`: emit `debug` and `warn` events through [`tracing`].
//!
//! [`tracing`]: https://docs.rs/tracing

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod board;
mod board_path;
mod error;
mod frame;
mod log;
pub mod path;
mod point;
mod remap;
mod token;
mod transform;
mod vec2;

pub use crate::board::*;
pub use crate::board_path::*;
pub use crate::error::*;
pub use crate::frame::*;
pub use crate::path::Path;
pub use crate::point::*;
pub use crate::remap::*;
pub use crate::token::*;
pub use crate::transform::*;
pub use crate::vec2::*;
