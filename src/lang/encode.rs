use super::lit::{self, Radix};
use super::token::*;
use super::{Error, Int};

type Result<T> = std::result::Result<T, Error>;

/// Encodes one line of text into `out` and returns the number of bytes
/// written, including the terminating `EOL`.
pub fn encode_line(raw: &str, out: &mut [u8]) -> Result<usize> {
    Encoder {
        src: raw.as_bytes(),
        pos: 0,
        out,
        len: 0,
        value_like: false,
    }
    .encode()
}

fn is_punctuation(ch: u8) -> bool {
    matches!(
        ch,
        b'!' | b'#'
            | b'$'
            | b'%'
            | b'&'
            | b'('
            | b')'
            | b'*'
            | b'+'
            | b','
            | b'-'
            | b'.'
            | b'/'
            | b':'
            | b';'
            | b'<'
            | b'='
            | b'>'
            | b'['
            | b']'
            | b'^'
            | b'|'
            | b'~'
    )
}

struct Encoder<'a> {
    src: &'a [u8],
    pos: usize,
    out: &'a mut [u8],
    len: usize,
    value_like: bool,
}

impl<'a> Encoder<'a> {
    fn encode(mut self) -> Result<usize> {
        while let Some(&ch) = self.src.get(self.pos) {
            if ch <= b' ' {
                self.pos += 1;
                continue;
            }
            match ch.to_ascii_uppercase() {
                b'?' => {
                    self.pos += 1;
                    self.emit(Word::Print.byte())?;
                    self.value_like = false;
                }
                ch @ b'A'..=b'Z' => self.alphabetic(ch)?,
                b'0'..=b'9' => self.number()?,
                b'+' | b'-' if !self.value_like && self.is_digit_at(1) => self.number()?,
                b'$' if self.is_hex_digit_at(1) => self.number()?,
                STRING => self.string()?,
                COMMENT => {
                    self.pos += 1;
                    self.comment()?;
                }
                b'/' if self.src.get(self.pos + 1) == Some(&b'/') => {
                    self.pos += 2;
                    self.comment()?;
                }
                ARRAY => {
                    if self.src.get(self.pos + 1) != Some(&b'[') {
                        return Err(error!(Syntax));
                    }
                    self.pos += 1;
                    self.emit(ARRAY)?;
                    self.value_like = false;
                }
                ch if is_punctuation(ch) => {
                    self.pos += 1;
                    self.emit(ch)?;
                    self.value_like = ch == b')' || ch == b']';
                }
                _ => return Err(error!(Syntax)),
            }
        }
        self.emit(EOL)?;
        Ok(self.len)
    }

    fn emit(&mut self, byte: u8) -> Result<()> {
        match self.out.get_mut(self.len) {
            Some(slot) => {
                *slot = byte;
                self.len += 1;
                Ok(())
            }
            None => Err(error!(LineTooLong)),
        }
    }

    fn is_digit_at(&self, offset: usize) -> bool {
        self.src
            .get(self.pos + offset)
            .map_or(false, |ch| ch.is_ascii_digit())
    }

    fn is_hex_digit_at(&self, offset: usize) -> bool {
        self.src
            .get(self.pos + offset)
            .map_or(false, |ch| ch.is_ascii_hexdigit())
    }

    fn alphabetic(&mut self, ch: u8) -> Result<()> {
        let next_is_letter = self
            .src
            .get(self.pos + 1)
            .map_or(false, |ch| ch.is_ascii_alphabetic());
        if next_is_letter {
            let (word, len) = match Word::lookup(&self.src[self.pos..]) {
                Some(found) => found,
                None => return Err(error!(Syntax)),
            };
            self.pos += len;
            self.emit(word.byte())?;
            self.value_like = word.is_value();
        } else {
            self.pos += 1;
            self.emit(ch)?;
            self.value_like = true;
        }
        Ok(())
    }

    fn number(&mut self) -> Result<()> {
        let mut negative = false;
        match self.src[self.pos] {
            b'-' => {
                negative = true;
                self.pos += 1;
            }
            b'+' => self.pos += 1,
            _ => {}
        }
        let hex_prefix = self.src[self.pos] == b'0'
            && self
                .src
                .get(self.pos + 1)
                .map_or(false, |ch| ch.eq_ignore_ascii_case(&b'x'))
            && self.is_hex_digit_at(2);
        let (value, radix) = if hex_prefix {
            self.pos += 2;
            (self.digits(16), Radix::Hexadecimal)
        } else if self.src[self.pos] == HEXCHR {
            self.pos += 1;
            (self.digits(16), Radix::Hexadecimal)
        } else {
            (self.digits(10), Radix::Decimal)
        };
        let value = if negative {
            value.wrapping_neg()
        } else {
            value
        };
        self.len = match lit::encode(self.out, self.len, value, radix) {
            Some(len) => len,
            None => return Err(error!(LineTooLong)),
        };
        self.value_like = true;
        Ok(())
    }

    fn digits(&mut self, radix: u32) -> Int {
        let mut value: Int = 0;
        while let Some(digit) = self
            .src
            .get(self.pos)
            .and_then(|ch| (*ch as char).to_digit(radix))
        {
            value = value
                .wrapping_mul(radix as Int)
                .wrapping_add(digit as Int);
            self.pos += 1;
        }
        value
    }

    fn string(&mut self) -> Result<()> {
        self.emit(STRING)?;
        self.pos += 1;
        loop {
            let ch = match self.src.get(self.pos) {
                Some(ch) if *ch >= b' ' => *ch,
                _ => return Err(error!(Syntax)),
            };
            self.emit(ch)?;
            self.pos += 1;
            if ch == STRING {
                break;
            }
            if ch == b'\\' {
                match self.src.get(self.pos) {
                    Some(escaped) if *escaped >= b' ' => self.emit(*escaped)?,
                    _ => return Err(error!(Syntax)),
                }
                self.pos += 1;
            }
        }
        self.value_like = false;
        Ok(())
    }

    fn comment(&mut self) -> Result<()> {
        self.emit(COMMENT)?;
        while let Some(&ch) = self.src.get(self.pos) {
            if ch >= b' ' {
                self.emit(ch)?;
            }
            self.pos += 1;
        }
        Ok(())
    }
}
