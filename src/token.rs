//! Splitting path data into command letters and numbers.

use crate::{MalformedKind, RemapError};

/// The command letters path data may contain.
const COMMANDS: &[u8] = b"MmLlHhVvCcSsQqTtAaZz";

/// A single lexical item of path data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    /// Byte offset of the first character of the token.
    pub offset: usize,
    /// What the token is.
    pub kind: TokenKind,
}

/// The two kinds of token in path data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    /// One of the command letters `M L H V C S Q T A Z`, in either case.
    Command(char),
    /// A numeric literal.
    Number(f64),
}

impl Token {
    /// The value of a number token.
    #[inline]
    pub fn number(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(v) => Some(v),
            TokenKind::Command(_) => None,
        }
    }
}

/// Split path data into a flat sequence of command letters and numbers.
///
/// Whitespace and commas separate tokens but are not required: a number ends
/// where the next one can no longer continue it, so `1.5-2.3` and `0.5.5` are
/// both two numbers. Exponents are accepted (`1e-3`).
///
/// # Errors
///
/// [`RemapError::UnsupportedCommand`] for a letter outside the supported set,
/// and [`RemapError::MalformedPath`] naming the offset of any other character
/// that cannot start a number.
///
/// # Examples
///
/// ```
/// use boardpath::{tokenize, TokenKind};
///
/// let tokens = tokenize("M1.5-2.3l.5.5").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Command('M'),
///         TokenKind::Number(1.5),
///         TokenKind::Number(-2.3),
///         TokenKind::Command('l'),
///         TokenKind::Number(0.5),
///         TokenKind::Number(0.5),
///     ]
/// );
/// ```
pub fn tokenize(data: &str) -> Result<Vec<Token>, RemapError> {
    let bytes = data.as_bytes();
    let mut tokens = Vec::new();
    let mut ix = 0;
    while let Some(&c) = bytes.get(ix) {
        if COMMANDS.contains(&c) {
            tokens.push(Token {
                offset: ix,
                kind: TokenKind::Command(char::from(c)),
            });
            ix += 1;
        } else if is_separator(c) {
            ix += 1;
        } else if c.is_ascii_alphabetic() {
            return Err(RemapError::UnsupportedCommand {
                offset: ix,
                letter: char::from(c),
            });
        } else {
            let (value, end) = scan_number(data, ix).ok_or(RemapError::MalformedPath {
                offset: ix,
                kind: MalformedKind::InvalidNumber,
            })?;
            tokens.push(Token {
                offset: ix,
                kind: TokenKind::Number(value),
            });
            ix = end;
        }
    }
    Ok(tokens)
}

fn is_separator(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0c | b'\r' | b',')
}

/// Scan the longest numeric literal starting at `start`.
///
/// Returns the value and the offset just past the literal, or `None` if no
/// literal starts there or its value overflows to infinity.
pub(crate) fn scan_number(data: &str, start: usize) -> Option<(f64, usize)> {
    let bytes = data.as_bytes();
    let mut ix = start;
    if matches!(bytes.get(ix), Some(b'-' | b'+')) {
        ix += 1;
    }
    let mut digit_count = 0;
    let mut seen_period = false;
    while let Some(&c) = bytes.get(ix) {
        if c.is_ascii_digit() {
            digit_count += 1;
        } else if c == b'.' && !seen_period {
            seen_period = true;
        } else {
            break;
        }
        ix += 1;
    }
    if digit_count == 0 {
        return None;
    }
    // Only take the exponent if it has digits; otherwise the `e` is left for
    // the caller to reject.
    if matches!(bytes.get(ix), Some(b'e' | b'E')) {
        let mut exp_ix = ix + 1;
        if matches!(bytes.get(exp_ix), Some(b'-' | b'+')) {
            exp_ix += 1;
        }
        let digits_start = exp_ix;
        while bytes.get(exp_ix).is_some_and(u8::is_ascii_digit) {
            exp_ix += 1;
        }
        if exp_ix > digits_start {
            ix = exp_ix;
        }
    }
    data[start..ix]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| (v, ix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(data: &str) -> Vec<TokenKind> {
        tokenize(data).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn separators() {
        use TokenKind::{Command, Number};
        assert_eq!(
            kinds(" M 10,20\tL\n30 , 40 z "),
            [
                Command('M'),
                Number(10.),
                Number(20.),
                Command('L'),
                Number(30.),
                Number(40.),
                Command('z'),
            ]
        );
    }

    #[test]
    fn compact_numbers() {
        use TokenKind::{Command, Number};
        assert_eq!(
            kinds("m1.5-2.3+4"),
            [Command('m'), Number(1.5), Number(-2.3), Number(4.)]
        );
        assert_eq!(kinds("0.5.5.5"), [Number(0.5), Number(0.5), Number(0.5)]);
        assert_eq!(kinds("1e-3 2E2 -3.5e+1"), [Number(1e-3), Number(200.), Number(-35.)]);
        assert_eq!(kinds("C1-1-1-1"), [Command('C'), Number(1.), Number(-1.), Number(-1.), Number(-1.)]);
        assert_eq!(kinds("5."), [Number(5.)]);
    }

    #[test]
    fn offsets() {
        let tokens = tokenize("M 10 -2.5Z").unwrap();
        let offsets: Vec<_> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, [0, 2, 5, 9]);
        assert_eq!(tokens[1].number(), Some(10.));
        assert_eq!(tokens[0].number(), None);
    }

    #[test]
    fn empty() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" , \n").unwrap().is_empty());
    }

    #[test]
    fn invalid_number() {
        for (data, offset) in [
            ("M 1 2 L # 3", 8),
            ("M - 1", 2),
            ("M .", 2),
            ("M 1 2 L 3 4 é", 12),
            ("M0 0 L1e400 0", 6),
            ("M0 0 L1 -1e309", 8),
        ] {
            assert_eq!(
                tokenize(data),
                Err(RemapError::MalformedPath {
                    offset,
                    kind: MalformedKind::InvalidNumber,
                }),
                "{data:?}"
            );
        }
    }

    #[test]
    fn unsupported_letter() {
        assert_eq!(
            tokenize("M 0 0 R 1 1"),
            Err(RemapError::UnsupportedCommand {
                offset: 6,
                letter: 'R',
            })
        );
        // An exponent marker with no digits is not part of the number.
        assert_eq!(
            tokenize("M 1e 2"),
            Err(RemapError::UnsupportedCommand {
                offset: 3,
                letter: 'e',
            })
        );
    }

    #[test]
    fn scan() {
        assert_eq!(scan_number("12.5abc", 0), Some((12.5, 4)));
        assert_eq!(scan_number("x-3", 1), Some((-3., 3)));
        assert_eq!(scan_number("+.", 0), None);
        assert_eq!(scan_number("7e+", 0), Some((7., 1)));
        assert_eq!(scan_number("1e400", 0), None);
        assert_eq!(scan_number("1e-400", 0), Some((0., 6)));
    }
}
