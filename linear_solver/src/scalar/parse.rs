use crate::error::{Result, SolverError};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Term {
    value: f64,
    imaginary: bool,
}

struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn is_done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn malformed(&self) -> SolverError {
        SolverError::malformed(self.text)
    }

    fn read_term(&mut self, sign_required: bool) -> Result<Term> {
        let sign = if self.eat(b'+') {
            1.0
        } else if self.eat(b'-') {
            -1.0
        } else if sign_required {
            return Err(self.malformed());
        } else {
            1.0
        };

        let number_start = self.pos;
        let mut mantissa_digits = self.eat_digits();
        if self.eat(b'.') {
            mantissa_digits += self.eat_digits();
        }
        if mantissa_digits == 0 && self.pos != number_start {
            // a lone '.'
            return Err(self.malformed());
        }
        if mantissa_digits > 0 && matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if !self.eat(b'+') {
                self.eat(b'-');
            }
            if self.eat_digits() == 0 {
                return Err(self.malformed());
            }
        }
        let number_end = self.pos;
        let imaginary = self.eat(b'i');

        let magnitude = if mantissa_digits > 0 {
            self.text[number_start..number_end]
                .parse::<f64>()
                .ok()
                .filter(|magnitude| magnitude.is_finite())
                .ok_or_else(|| self.malformed())?
        } else if imaginary {
            1.0
        } else {
            return Err(self.malformed());
        };

        Ok(Term {
            value: sign * magnitude,
            imaginary,
        })
    }
}

pub(crate) fn parse_components(text: &str) -> Result<(f64, f64)> {
    let mut cursor = Cursor::new(text);
    if cursor.is_done() {
        return Err(cursor.malformed());
    }

    let first = cursor.read_term(false)?;
    if cursor.is_done() {
        return Ok(if first.imaginary {
            (0.0, first.value)
        } else {
            (first.value, 0.0)
        });
    }
    if first.imaginary {
        return Err(cursor.malformed());
    }

    let second = cursor.read_term(true)?;
    if !second.imaginary || !cursor.is_done() {
        return Err(cursor.malformed());
    }
    Ok((first.value, second.value))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_real_only_literals() {
        assert_eq!(parse_components("3").unwrap(), (3.0, 0.0));
        assert_eq!(parse_components("-2.5").unwrap(), (-2.5, 0.0));
        assert_eq!(parse_components("+.5").unwrap(), (0.5, 0.0));
        assert_eq!(parse_components("7.").unwrap(), (7.0, 0.0));
        assert_eq!(parse_components("1e3").unwrap(), (1000.0, 0.0));
        assert_eq!(parse_components("1.5E-2").unwrap(), (0.015, 0.0));
    }

    #[test]
    fn reads_imaginary_only_literals() {
        assert_eq!(parse_components("i").unwrap(), (0.0, 1.0));
        assert_eq!(parse_components("-i").unwrap(), (0.0, -1.0));
        assert_eq!(parse_components("+i").unwrap(), (0.0, 1.0));
        assert_eq!(parse_components("4i").unwrap(), (0.0, 4.0));
        assert_eq!(parse_components("-0.5i").unwrap(), (0.0, -0.5));
        assert_eq!(parse_components("2e-1i").unwrap(), (0.0, 0.2));
    }

    #[test]
    fn reads_two_term_literals() {
        assert_eq!(parse_components("1+i").unwrap(), (1.0, 1.0));
        assert_eq!(parse_components("1-i").unwrap(), (1.0, -1.0));
        assert_eq!(parse_components("-3+4i").unwrap(), (-3.0, 4.0));
        assert_eq!(parse_components("2.5-0.5i").unwrap(), (2.5, -0.5));
        assert_eq!(parse_components("1e2+1e-1i").unwrap(), (100.0, 0.1));
    }

    #[test]
    fn rejects_malformed_literals() {
        for token in [
            "", "+", "-", ".", "e5", "1e", "1e+", "abc", "1..2", "i1", "2i+3", "1+2", "1+2i3",
            "1 + 2i", "ii", "--1", "1+-2i", "|", "1e999", "-1e400i", "1+1e309i", "inf", "NaN",
        ] {
            assert_eq!(
                parse_components(token),
                Err(SolverError::MalformedScalar {
                    token: token.to_owned()
                }),
                "token {token:?} should be rejected"
            );
        }
    }
}
