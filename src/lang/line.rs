use super::lit::{self, Radix};
use super::token::*;
use super::{Int, UInt};

/// Position after the token starting at `pos`. Literals are skipped by
/// their width, strings through their closing quote and comments up to
/// (not including) the `EOL`.
pub fn skip_token(code: &[u8], pos: usize) -> usize {
    match code.get(pos) {
        None => pos,
        Some(&STRING) => {
            let mut pos = pos + 1;
            loop {
                match code.get(pos) {
                    None => return pos,
                    Some(&b'\\') => pos += 2,
                    Some(&STRING) => return pos + 1,
                    Some(_) => pos += 1,
                }
            }
        }
        Some(&COMMENT) => {
            let mut pos = pos + 1;
            while code.get(pos).map_or(false, |b| *b != EOL) {
                pos += 1;
            }
            pos
        }
        Some(_) => lit::skip(code, pos).unwrap_or(pos + 1),
    }
}

/// Bytes that end a statement.
pub(crate) fn is_delimiter(byte: u8) -> bool {
    byte == b':'
        || byte == EOL
        || byte == COMMENT
        || byte == Word::Else.byte()
        || byte == Word::EndIf.byte()
}

/// ## One line of bytecode
///
/// Displays as listing text which encodes back to the same bytes.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<'a> {
    code: &'a [u8],
}

impl<'a> Line<'a> {
    pub fn new(code: &'a [u8]) -> Line<'a> {
        Line { code }
    }

    /// The decimal literal a stored line starts with.
    pub fn label(&self) -> Option<Int> {
        match lit::radix(self.code, 0) {
            Some(Radix::Decimal) => lit::decode(self.code, 0).map(|(value, _)| value),
            _ => None,
        }
    }

    /// Bytes up to and including the `EOL`.
    pub fn len(&self) -> usize {
        let mut pos = 0;
        while let Some(&byte) = self.code.get(pos) {
            if byte == EOL {
                return pos + 1;
            }
            pos = skip_token(self.code, pos);
        }
        pos
    }

    pub fn is_empty(&self) -> bool {
        self.code.first().map_or(true, |b| *b == EOL)
    }
}

impl<'a> std::fmt::Display for Line<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code = self.code;
        let mut pos = 0;
        while let Some(&byte) = code.get(pos) {
            if byte == EOL {
                break;
            }
            let next = skip_token(code, pos);
            if let Some((value, _)) = lit::decode(code, pos) {
                match lit::radix(code, pos) {
                    Some(Radix::Hexadecimal) => write!(f, "0x{:X}", value as UInt)?,
                    _ => {
                        write!(f, "{}", value)?;
                        if pos == 0 {
                            write!(f, " ")?;
                        }
                    }
                }
            } else if let Some(word) = Word::from_byte(byte) {
                if pos != 0 && word.is_spaced() {
                    write!(f, " ")?;
                }
                write!(f, "{}", word)?;
                if word <= Word::Step && !is_delimiter(code.get(next).copied().unwrap_or(EOL)) {
                    write!(f, " ")?;
                }
            } else if byte == STRING || byte == COMMENT {
                write!(f, "{}", String::from_utf8_lossy(&code[pos..next]))?;
            } else {
                write!(f, "{}", byte as char)?;
            }
            pos = next;
        }
        Ok(())
    }
}
