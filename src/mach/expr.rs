use super::runtime::Result;
use super::{Bios, Runtime};
use crate::error;
use crate::lang::{lit, Int, Word, ARRAY};

const BITS: Int = (std::mem::size_of::<Int>() * 8) as Int;

fn truth(value: bool) -> Int {
    value as Int
}

pub(super) fn shift_left(value: Int, count: Int) -> Int {
    if (0..BITS).contains(&count) {
        value.wrapping_shl(count as u32)
    } else {
        0
    }
}

pub(super) fn shift_right(value: Int, count: Int) -> Int {
    if (0..BITS).contains(&count) {
        value >> count
    } else if value < 0 {
        -1
    } else {
        0
    }
}

pub(super) fn divide(lhs: Int, rhs: Int) -> Result<Int> {
    if rhs == 0 {
        return Err(error!(DivisionByZero));
    }
    Ok(lhs.wrapping_div(rhs))
}

pub(super) fn modulo(lhs: Int, rhs: Int) -> Result<Int> {
    if rhs == 0 {
        return Err(error!(DivisionByZero));
    }
    Ok(lhs.wrapping_rem(rhs))
}

impl<B: Bios> Runtime<B> {
    /// Evaluates the expression at the cursor, leaving the cursor after it.
    pub(super) fn expr(&mut self) -> Result<Int> {
        let mut lhs = self.comparison()?;
        loop {
            let op = self.byte();
            if op != b'&' && op != b'|' && op != b'^' {
                return Ok(lhs);
            }
            self.cursor += 1;
            let double = op != b'^' && self.byte() == op;
            if double {
                self.cursor += 1;
            }
            let rhs = self.comparison()?;
            lhs = match (op, double) {
                (b'&', false) => lhs & rhs,
                (b'&', true) => truth(lhs != 0 && rhs != 0),
                (b'|', false) => lhs | rhs,
                (b'|', true) => truth(lhs != 0 || rhs != 0),
                _ => lhs ^ rhs,
            };
        }
    }

    fn comparison(&mut self) -> Result<Int> {
        let mut lhs = self.additive()?;
        loop {
            let first = self.byte();
            let second = self.program.byte(self.cursor + 1);
            let (op, len) = match (first, second) {
                (b'=', b'=') => ("==", 2),
                (b'=', _) => ("=", 1),
                (b'!', b'=') => ("!=", 2),
                (b'<', b'>') => ("!=", 2),
                (b'<', b'=') => ("<=", 2),
                (b'<', b'<') => ("<<", 2),
                (b'<', _) => ("<", 1),
                (b'>', b'=') => (">=", 2),
                (b'>', b'>') => (">>", 2),
                (b'>', _) => (">", 1),
                _ => return Ok(lhs),
            };
            self.cursor += len;
            let rhs = self.additive()?;
            lhs = match op {
                "=" | "==" => truth(lhs == rhs),
                "!=" => truth(lhs != rhs),
                "<=" => truth(lhs <= rhs),
                "<" => truth(lhs < rhs),
                ">=" => truth(lhs >= rhs),
                ">" => truth(lhs > rhs),
                "<<" => shift_left(lhs, rhs),
                _ => shift_right(lhs, rhs),
            };
        }
    }

    fn additive(&mut self) -> Result<Int> {
        let mut lhs = self.multiplicative()?;
        loop {
            match self.byte() {
                b'+' => {
                    self.cursor += 1;
                    lhs = lhs.wrapping_add(self.multiplicative()?);
                }
                b'-' => {
                    self.cursor += 1;
                    lhs = lhs.wrapping_sub(self.multiplicative()?);
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn multiplicative(&mut self) -> Result<Int> {
        let mut lhs = self.primary()?;
        loop {
            match self.byte() {
                b'*' => {
                    self.cursor += 1;
                    lhs = lhs.wrapping_mul(self.primary()?);
                }
                b'/' => {
                    self.cursor += 1;
                    lhs = divide(lhs, self.primary()?)?;
                }
                b'%' => {
                    self.cursor += 1;
                    lhs = modulo(lhs, self.primary()?)?;
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn primary(&mut self) -> Result<Int> {
        if self.depth >= self.config.max_expr_depth {
            return Err(error!(ExpressionTooDeep));
        }
        self.depth += 1;
        let value = self.value();
        self.depth -= 1;
        value
    }

    fn value(&mut self) -> Result<Int> {
        let byte = self.byte();
        match byte {
            b'(' => {
                self.cursor += 1;
                let value = self.expr()?;
                self.expect(b')')?;
                Ok(value)
            }
            b'-' => {
                self.cursor += 1;
                Ok(self.primary()?.wrapping_neg())
            }
            b'+' => {
                self.cursor += 1;
                self.primary()
            }
            b'!' => {
                self.cursor += 1;
                Ok(truth(self.primary()? == 0))
            }
            b'~' => {
                self.cursor += 1;
                Ok(!self.primary()?)
            }
            b'A'..=b'Z' | ARRAY => {
                let slot = self.slot()?;
                Ok(self.var.fetch(slot))
            }
            _ => {
                if let Some((value, next)) = lit::decode(self.program.mem(), self.cursor) {
                    self.cursor = next;
                    return Ok(value);
                }
                match Word::from_byte(byte) {
                    Some(word) if word.is_value() => {
                        self.cursor += 1;
                        self.function(word)
                    }
                    _ => Err(error!(Syntax)),
                }
            }
        }
    }

    fn function(&mut self, word: Word) -> Result<Int> {
        match word {
            Word::Rnd => {
                let bound = self.argument()?;
                Ok(self.bios.random(bound))
            }
            Word::Abs => Ok(self.argument()?.wrapping_abs()),
            Word::Inp => {
                let pin = self.argument()?;
                match self.bios.gpio_read(pin) {
                    value if value < 0 => Err(error!(BadParameter)),
                    value => Ok(value),
                }
            }
            Word::Adc => {
                let channel = self.argument()?;
                match self.bios.adc_read(channel) {
                    value if value < 0 => Err(error!(BadParameter)),
                    value => Ok(value),
                }
            }
            Word::Tick => Ok(self.bios.now_ms() as Int),
            Word::Inkey => {
                let timeout = if self.byte() == b'(' {
                    Some(self.argument()?)
                } else {
                    None
                };
                self.inkey(timeout)
            }
            _ => Err(error!(Syntax)),
        }
    }

    /// A parenthesised argument.
    pub(super) fn argument(&mut self) -> Result<Int> {
        self.expect(b'(')?;
        let value = self.expr()?;
        self.expect(b')')?;
        Ok(value)
    }

    fn inkey(&mut self, timeout: Option<Int>) -> Result<Int> {
        let start = self.bios.now_ms();
        loop {
            if let Some(ch) = self.poll_key()? {
                return Ok(ch as Int);
            }
            match timeout {
                Some(ms) if ms > 0 => {
                    if self.bios.now_ms().wrapping_sub(start) >= ms as u32 {
                        return Ok(-1);
                    }
                }
                _ => return Ok(-1),
            }
            self.bios.idle();
        }
    }
}
