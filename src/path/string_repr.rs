//! This module handles converting to/from the string representation of path data.
use arrayvec::ArrayVec;
use std::fmt;

use crate::path::{ArcTo, Coords, CubicTo, OneVec, Path, PathEl, QuadTo, SmoothCubicTo};
use crate::token::{tokenize, Token, TokenKind};
use crate::{MalformedKind, Point, RemapError, Vec2};

// parse

/// Try to parse the input as path data.
///
/// Each command consumes a fixed number of arguments per group: 2 for `M`,
/// `L` and `T`, 1 for `H` and `V`, 6 for `C`, 4 for `S` and `Q`, 7 for `A`
/// and none for `Z`. Groups after the first that are not preceded by a new
/// command letter are further repetitions of the same command.
///
/// # Errors
///
/// Anything [`tokenize`] rejects, and [`RemapError::MalformedPath`] when
/// - a command letter is followed by an incomplete group (the offset is the
///   command letter's),
/// - a number appears before the first command or after `Z`,
/// - an arc flag is neither `0` nor `1`.
pub fn parse(input: &str) -> Result<Path, RemapError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens: &tokens,
        ix: 0,
    };
    let mut path = Path::new();
    while let Some(token) = parser.next() {
        let TokenKind::Command(letter) = token.kind else {
            return Err(malformed(token.offset, MalformedKind::ExpectedCommand));
        };
        let offset = token.offset;
        let coords = Coords::of(letter);
        let el = match letter.to_ascii_uppercase() {
            'M' => PathEl::MoveTo(coords, parser.sequence(offset, coordinate_pair)?),
            'L' => PathEl::LineTo(coords, parser.sequence(offset, coordinate_pair)?),
            'H' => PathEl::Horiz(coords, parser.sequence(offset, coordinate)?),
            'V' => PathEl::Vert(coords, parser.sequence(offset, coordinate)?),
            'C' => PathEl::CubicTo(coords, parser.sequence(offset, curveto_coordinates)?),
            'S' => PathEl::SmoothCubicTo(
                coords,
                parser.sequence(offset, smooth_curveto_coordinates)?,
            ),
            'Q' => PathEl::QuadTo(coords, parser.sequence(offset, quadto_coordinates)?),
            'T' => PathEl::SmoothQuadTo(coords, parser.sequence(offset, coordinate_pair)?),
            'A' => PathEl::EllipticArc(coords, parser.sequence(offset, arcto_coordinates)?),
            // The tokenizer emits no other letters, so this is `Z`.
            _ => PathEl::ClosePath,
        };
        path.push(offset, el);
    }
    Ok(path)
}

struct Parser<'a> {
    tokens: &'a [Token],
    ix: usize,
}

impl Parser<'_> {
    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.ix).copied();
        if token.is_some() {
            self.ix += 1;
        }
        token
    }

    fn at_number(&self) -> bool {
        self.tokens
            .get(self.ix)
            .is_some_and(|t| matches!(t.kind, TokenKind::Number(_)))
    }

    /// Read exactly `N` numbers, failing at `offset` if a command or the end
    /// of input comes first.
    fn group<const N: usize>(&mut self, offset: usize) -> Result<[f64; N], RemapError> {
        let args: ArrayVec<f64, N> = self.tokens[self.ix..]
            .iter()
            .map_while(Token::number)
            .take(N)
            .collect();
        self.ix += args.len();
        args.into_inner()
            .map_err(|_| malformed(offset, MalformedKind::MissingArguments))
    }

    /// One or more argument groups for the command at `offset`.
    fn sequence<T, const N: usize>(
        &mut self,
        offset: usize,
        inner: impl Fn([f64; N], usize) -> Result<T, RemapError>,
    ) -> Result<OneVec<T>, RemapError> {
        let mut groups = OneVec::single(inner(self.group(offset)?, offset)?);
        while self.at_number() {
            groups.push(inner(self.group(offset)?, offset)?);
        }
        Ok(groups)
    }
}

fn malformed(offset: usize, kind: MalformedKind) -> RemapError {
    RemapError::MalformedPath { offset, kind }
}

fn coordinate([v]: [f64; 1], _: usize) -> Result<f64, RemapError> {
    Ok(v)
}

fn coordinate_pair([x, y]: [f64; 2], _: usize) -> Result<Point, RemapError> {
    Ok(Point::new(x, y))
}

fn curveto_coordinates([x1, y1, x2, y2, x, y]: [f64; 6], _: usize) -> Result<CubicTo, RemapError> {
    Ok(CubicTo {
        ctrl1: Point::new(x1, y1),
        ctrl2: Point::new(x2, y2),
        to: Point::new(x, y),
    })
}

fn smooth_curveto_coordinates(
    [x2, y2, x, y]: [f64; 4],
    _: usize,
) -> Result<SmoothCubicTo, RemapError> {
    Ok(SmoothCubicTo {
        ctrl2: Point::new(x2, y2),
        to: Point::new(x, y),
    })
}

fn quadto_coordinates([x1, y1, x, y]: [f64; 4], _: usize) -> Result<QuadTo, RemapError> {
    Ok(QuadTo {
        ctrl: Point::new(x1, y1),
        to: Point::new(x, y),
    })
}

fn arcto_coordinates(
    [rx, ry, x_rotation, large_arc, sweep, x, y]: [f64; 7],
    offset: usize,
) -> Result<ArcTo, RemapError> {
    Ok(ArcTo {
        radii: Vec2::new(rx, ry),
        x_rotation,
        large_arc: flag(large_arc, offset)?,
        sweep: flag(sweep, offset)?,
        to: Point::new(x, y),
    })
}

fn flag(value: f64, offset: usize) -> Result<bool, RemapError> {
    if value == 0. {
        Ok(false)
    } else if value == 1. {
        Ok(true)
    } else {
        Err(malformed(offset, MalformedKind::InvalidFlag))
    }
}

// Stringify

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.elements.iter();
        if let Some(el) = iter.next() {
            write!(f, "{el}")?;
        }
        for el in iter {
            write!(f, " {el}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PathEl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        match self {
            PathEl::MoveTo(_, points)
            | PathEl::LineTo(_, points)
            | PathEl::SmoothQuadTo(_, points) => points.write_spaced(write_point, f),
            PathEl::Horiz(_, amts) | PathEl::Vert(_, amts) => {
                amts.write_spaced(|v, f| write!(f, "{v}"), f)
            }
            PathEl::CubicTo(_, cubic_tos) => cubic_tos.write_spaced(CubicTo::write_vals, f),
            PathEl::SmoothCubicTo(_, cubic_tos) => {
                cubic_tos.write_spaced(SmoothCubicTo::write_vals, f)
            }
            PathEl::QuadTo(_, quad_tos) => quad_tos.write_spaced(QuadTo::write_vals, f),
            PathEl::EllipticArc(_, arcs) => arcs.write_spaced(ArcTo::write_vals, f),
            PathEl::ClosePath => Ok(()),
        }
    }
}

impl CubicTo {
    fn write_vals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} {},{} {},{}",
            self.ctrl1.x, self.ctrl1.y, self.ctrl2.x, self.ctrl2.y, self.to.x, self.to.y
        )
    }
}

impl SmoothCubicTo {
    fn write_vals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} {},{}",
            self.ctrl2.x, self.ctrl2.y, self.to.x, self.to.y
        )
    }
}

impl QuadTo {
    fn write_vals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} {},{}",
            self.ctrl.x, self.ctrl.y, self.to.x, self.to.y
        )
    }
}

impl ArcTo {
    fn write_vals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} {} {} {} {},{}",
            self.radii.x,
            self.radii.y,
            self.x_rotation,
            u8::from(self.large_arc),
            u8::from(self.sweep),
            self.to.x,
            self.to.y
        )
    }
}

fn write_point(Point { x, y }: &Point, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{x},{y}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(offset: usize) -> RemapError {
        malformed(offset, MalformedKind::MissingArguments)
    }

    #[test]
    fn groups_by_arity() {
        let path = parse("M0 0 L10 0 10 10 H5 v-2 Z").unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(
            path[1],
            PathEl::LineTo(
                Coords::Absolute,
                OneVec::from_vec(vec![Point::new(10., 0.), Point::new(10., 10.)]).unwrap()
            )
        );
        assert_eq!(path[2], PathEl::Horiz(Coords::Absolute, OneVec::single(5.)));
        assert_eq!(path[3], PathEl::Vert(Coords::Relative, OneVec::single(-2.)));
        assert_eq!(path[4], PathEl::ClosePath);
    }

    #[test]
    fn implicit_repetition() {
        let path = parse(
            "c1 2 3 4 5 6 7 8 9 10 11 12 s1 2 3 4 5 6 7 8 q1 2 3 4 5 6 7 8 t1 2 3 4 \
             h1 2 3 V4 5 a1 1 0 0 1 2 2 1 1 0 1 0 3 3 L1 1 2 2",
        )
        .unwrap();
        let counts: Vec<_> = path
            .iter()
            .map(|(_, el)| match el {
                PathEl::MoveTo(_, v) | PathEl::LineTo(_, v) => v.iter().count(),
                PathEl::Horiz(_, v) | PathEl::Vert(_, v) => v.iter().count(),
                PathEl::EllipticArc(_, v) => v.iter().count(),
                PathEl::CubicTo(_, v) => v.iter().count(),
                PathEl::SmoothCubicTo(_, v) => v.iter().count(),
                PathEl::QuadTo(_, v) => v.iter().count(),
                PathEl::SmoothQuadTo(_, v) => v.iter().count(),
                _ => 0,
            })
            .collect();
        assert_eq!(counts, [2, 2, 2, 2, 3, 2, 2, 2]);
    }

    #[test]
    fn arcs() {
        let path = parse("M0 0 a5 5 30 1 0 10 0").unwrap();
        let PathEl::EllipticArc(Coords::Relative, arcs) = &path[1] else {
            panic!("expected a relative arc, got {:?}", path[1]);
        };
        assert_eq!(
            arcs.first,
            ArcTo {
                radii: Vec2::new(5., 5.),
                x_rotation: 30.,
                large_arc: true,
                sweep: false,
                to: Point::new(10., 0.),
            }
        );
        assert_eq!(
            parse("M0 0 A5 5 0 2 0 10 0"),
            Err(malformed(5, MalformedKind::InvalidFlag))
        );
    }

    #[test]
    fn offsets_point_at_letters() {
        let path = parse("M 1 2 Q 3 4 5 6").unwrap();
        let offsets: Vec<_> = path.iter().map(|(offset, _)| offset).collect();
        assert_eq!(offsets, [0, 6]);
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(parse("M 1 2 Q 3"), Err(missing(6)));
        assert_eq!(parse("M 1"), Err(missing(0)));
        assert_eq!(parse("L"), Err(missing(0)));
        // A partial repetition is reported at the command that owns it.
        assert_eq!(parse("M0 0 C1 1 2 2 3 3 4 4 Z"), Err(missing(5)));
        assert_eq!(parse("M0 0 H"), Err(missing(5)));
    }

    #[test]
    fn stray_numbers() {
        assert_eq!(
            parse("10 20 M0 0"),
            Err(malformed(0, MalformedKind::ExpectedCommand))
        );
        assert_eq!(
            parse("M0 0 Z 5"),
            Err(malformed(7, MalformedKind::ExpectedCommand))
        );
    }

    #[test]
    fn tokenizer_errors_propagate() {
        assert_eq!(
            parse("M0 0 X 1"),
            Err(RemapError::UnsupportedCommand {
                offset: 5,
                letter: 'X',
            })
        );
        assert!(matches!(
            parse("M0 0 L ! 1"),
            Err(RemapError::MalformedPath {
                offset: 7,
                kind: MalformedKind::InvalidNumber,
            })
        ));
    }

    #[test]
    fn display() {
        let path = parse("m1 2 3 4 h5 C1,2 3,4 5,6 s7 8 9 10 Q1 2 3 4 t5 6 A2 3 45 0 1 7 8 z").unwrap();
        assert_eq!(
            path.to_string(),
            "m1,2 3,4 h5 C1,2 3,4 5,6 s7,8 9,10 Q1,2 3,4 t5,6 A2,3 45 0 1 7,8 Z"
        );
        assert_eq!(parse(&path.to_string()).unwrap(), path);
    }

    #[test]
    fn empty() {
        assert!(parse("").unwrap().is_empty());
    }
}
