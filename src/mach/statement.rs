use super::expr::{divide, modulo, shift_left, shift_right};
use super::runtime::{Flow, Result};
use super::scan::{self, LoopKind};
use super::{format, persist, Bios, Cursor, Frame, Runtime};
use crate::error;
use crate::lang::lit::{self, Radix};
use crate::lang::{is_delimiter, skip_token, Int, Line, Word, ARRAY, HEXCHR, STRING};

impl<B: Bios> Runtime<B> {
    pub(super) fn dispatch(&mut self, word: Word) -> Result<Flow> {
        match word {
            Word::Print => self.r#print(),
            Word::Input => self.r#input(),
            Word::Goto => self.r#goto(),
            Word::Gosub => self.r#gosub(),
            Word::Return => self.r#return(),
            Word::For => self.r#for(),
            Word::Next => self.r#next(),
            Word::Do => self.r#do(),
            Word::Loop => self.r#loop(),
            Word::While => self.r#while(),
            Word::If => self.r#if(),
            Word::Run => self.run_program(),
            Word::Resume => self.r#resume(),
            Word::Stop => self.r#stop(),
            Word::End => self.r#end(),
            Word::New => self.r#new_(),
            Word::List => self.r#list(),
            Word::Prog => self.r#prog(),
            Word::Save => self.r#save(),
            Word::Load => self.r#load(),
            Word::Delay => self.r#delay(),
            Word::Pause => self.r#pause(),
            Word::Reset => self.r#reset(),
            Word::Exit => self.r#exit(),
            Word::Continue => self.r#continue(),
            Word::Randomize => self.r#randomize(),
            Word::Data => self.r#data(),
            Word::Read => self.r#read(),
            Word::Restore => self.r#restore(),
            Word::Outp => self.r#outp(),
            Word::Pwm => self.r#pwm(),
            Word::Else | Word::ElseIf => self.r#else(),
            Word::EndIf => self.r#endif(),
            _ => Err(error!(Syntax)),
        }
    }

    pub(super) fn assignment(&mut self) -> Result<Flow> {
        let slot = self.slot()?;
        let op = self.byte();
        if op == b'=' {
            self.cursor += 1;
            let value = self.expr()?;
            self.check_delimiter()?;
            self.var.store(slot, value);
            return Ok(Flow::Continue);
        }
        if !b"+-*/%|&^<>".contains(&op) {
            return Err(error!(Syntax));
        }
        self.cursor += 1;
        let value = self.var.fetch(slot);
        let value = if self.byte() == op {
            self.cursor += 1;
            match op {
                b'+' => {
                    self.check_delimiter()?;
                    value.wrapping_add(1)
                }
                b'-' => {
                    self.check_delimiter()?;
                    value.wrapping_sub(1)
                }
                b'<' | b'>' => {
                    self.expect(b'=')?;
                    let count = self.expr()?;
                    self.check_delimiter()?;
                    if op == b'<' {
                        shift_left(value, count)
                    } else {
                        shift_right(value, count)
                    }
                }
                _ => return Err(error!(Syntax)),
            }
        } else {
            self.expect(b'=')?;
            let rhs = self.expr()?;
            self.check_delimiter()?;
            match op {
                b'+' => value.wrapping_add(rhs),
                b'-' => value.wrapping_sub(rhs),
                b'*' => value.wrapping_mul(rhs),
                b'/' => divide(value, rhs)?,
                b'%' => modulo(value, rhs)?,
                b'|' => value | rhs,
                b'&' => value & rhs,
                b'^' => value ^ rhs,
                _ => return Err(error!(Syntax)),
            }
        };
        self.var.store(slot, value);
        Ok(Flow::Continue)
    }

    fn r#print(&mut self) -> Result<Flow> {
        let mut last = 0;
        loop {
            let byte = self.byte();
            if is_delimiter(byte) {
                if last != b';' && last != b',' {
                    self.bios.write_str("\r\n");
                }
                return Ok(Flow::Continue);
            }
            last = byte;
            let paren = self.program.byte(self.cursor + 1) == b'(';
            match byte {
                STRING => self.print_string(),
                b',' => {
                    self.cursor += 1;
                    self.bios.write_char(b'\t');
                }
                b';' => self.cursor += 1,
                HEXCHR if paren => {
                    self.cursor += 1;
                    let (value, width) = self.print_form()?;
                    self.write_bytes(format::hex(value, width).as_bytes());
                }
                b'0' if paren => {
                    self.cursor += 1;
                    let (value, width) = self.print_form()?;
                    self.write_bytes(format::decimal(value, width).as_bytes());
                }
                _ if self.at_word(Word::Chr) => {
                    self.cursor += 1;
                    let value = self.argument()?;
                    if value >= 0x100 {
                        self.bios.write_char((value >> 8) as u8);
                    }
                    self.bios.write_char(value as u8);
                }
                _ => {
                    let value = self.expr()?;
                    self.write_bytes(format::decimal(value, 0).as_bytes());
                }
            }
        }
    }

    fn print_string(&mut self) {
        let end = skip_token(self.program.mem(), self.cursor);
        let text = unescape(&self.program.mem()[self.cursor + 1..end - 1]);
        self.cursor = end;
        self.write_bytes(&text);
    }

    /// `(value[,width])` after `$` or `0`.
    fn print_form(&mut self) -> Result<(Int, Int)> {
        self.expect(b'(')?;
        let value = self.expr()?;
        let width = if self.byte() == b',' {
            self.cursor += 1;
            self.expr()?
        } else {
            0
        };
        self.expect(b')')?;
        Ok((value, width))
    }

    fn r#input(&mut self) -> Result<Flow> {
        let slot = self.slot()?;
        let chr = self.byte() == HEXCHR;
        if chr {
            self.cursor += 1;
        }
        self.check_delimiter()?;
        let input = self.read_line()?;
        let value = if chr {
            input.first().map_or(0, |ch| *ch as Int)
        } else {
            parse_number(&input)
        };
        self.var.store(slot, value);
        Ok(Flow::Continue)
    }

    fn jump_target(&mut self) -> Result<Cursor> {
        let label = self.expr()?;
        self.check_delimiter()?;
        match self.program.find_label(label) {
            Some(cursor) => Ok(cursor),
            None => Err(error!(UnresolvedLabel)),
        }
    }

    fn r#goto(&mut self) -> Result<Flow> {
        Ok(Flow::JumpTo(self.jump_target()?))
    }

    fn r#gosub(&mut self) -> Result<Flow> {
        let target = self.jump_target()?;
        self.stack.push(Frame::Gosub(Cursor {
            pos: self.cursor,
            line: self.line,
        }))?;
        Ok(Flow::JumpTo(target))
    }

    fn r#return(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        loop {
            match self.stack.pop() {
                Some(Frame::Gosub(resume)) => return Ok(self.rewind(resume)),
                Some(_) => {}
                None => return Err(error!(UnexpectedReturn)),
            }
        }
    }

    fn rewind(&mut self, to: Cursor) -> Flow {
        self.cursor = to.pos;
        self.line = to.line;
        Flow::Continue
    }

    fn r#for(&mut self) -> Result<Flow> {
        let slot = self.slot()?;
        self.expect(b'=')?;
        let from = self.expr()?;
        self.expect_word(Word::To)?;
        let limit = self.expr()?;
        let step = if self.at_word(Word::Step) {
            self.cursor += 1;
            self.expr()?
        } else {
            1
        };
        self.check_delimiter()?;
        self.stack.push(Frame::For {
            resume: Cursor {
                pos: self.cursor,
                line: self.line,
            },
            slot,
            limit,
            step,
        })?;
        self.var.store(slot, from);
        Ok(Flow::Continue)
    }

    fn r#next(&mut self) -> Result<Flow> {
        let named = match self.byte() {
            b'A'..=b'Z' | ARRAY => Some(self.slot()?),
            _ => None,
        };
        self.check_delimiter()?;
        let (resume, slot, limit, step) = match self.stack.last() {
            Some(Frame::For {
                resume,
                slot,
                limit,
                step,
            }) => (*resume, *slot, *limit, *step),
            _ => return Err(error!(UnexpectedNext)),
        };
        if named.map_or(false, |named| named != slot) {
            return Err(error!(UnexpectedNext));
        }
        let value = self.var.fetch(slot);
        if value == limit {
            self.stack.pop();
            return Ok(Flow::Continue);
        }
        let value = value.wrapping_add(step);
        self.var.store(slot, value);
        let passed = if step > 0 { value > limit } else { value < limit };
        if passed {
            self.stack.pop();
            return Ok(Flow::Continue);
        }
        Ok(self.rewind(resume))
    }

    fn r#do(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        self.stack.push(Frame::Do(Cursor {
            pos: self.statement,
            line: self.line,
        }))?;
        Ok(Flow::Continue)
    }

    fn r#loop(&mut self) -> Result<Flow> {
        let resume = match self.stack.last() {
            Some(Frame::Do(resume)) => *resume,
            _ => return Err(error!(UnexpectedLoop)),
        };
        self.stack.pop();
        if self.at_word(Word::While) {
            self.cursor += 1;
            let condition = self.expr()?;
            self.check_delimiter()?;
            if condition == 0 {
                return Ok(Flow::Continue);
            }
        } else {
            self.check_delimiter()?;
        }
        Ok(self.rewind(resume))
    }

    fn r#while(&mut self) -> Result<Flow> {
        let condition = self.expr()?;
        self.check_delimiter()?;
        if condition != 0 {
            self.stack.push(Frame::Do(Cursor {
                pos: self.statement,
                line: self.line,
            }))?;
            return Ok(Flow::Continue);
        }
        let code = self.program.mem();
        match scan::find_loop_end(code, self.cursor, LoopKind::Do, self.line) {
            Some(found) => {
                let pos = scan::statement_end(code, found.pos);
                Ok(self.rewind(Cursor {
                    pos,
                    line: found.line,
                }))
            }
            None => Err(error!(NoMatchingLoop)),
        }
    }

    fn innermost_loop(&self) -> Option<LoopKind> {
        match self.stack.last() {
            Some(Frame::For { .. }) => Some(LoopKind::For),
            Some(Frame::Do(_)) => Some(LoopKind::Do),
            _ => None,
        }
    }

    fn r#exit(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        let code = self.program.mem();
        let found = self
            .innermost_loop()
            .and_then(|kind| scan::find_loop_end(code, self.cursor, kind, self.line));
        match found {
            Some(found) => {
                let pos = scan::statement_end(code, found.pos);
                self.stack.pop();
                Ok(self.rewind(Cursor {
                    pos,
                    line: found.line,
                }))
            }
            None => Err(error!(UnexpectedExit)),
        }
    }

    fn r#continue(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        let code = self.program.mem();
        let found = self
            .innermost_loop()
            .and_then(|kind| scan::find_loop_end(code, self.cursor, kind, self.line));
        match found {
            Some(found) => Ok(self.rewind(Cursor {
                pos: found.at,
                line: found.line,
            })),
            None => Err(error!(UnexpectedContinue)),
        }
    }

    fn r#if(&mut self) -> Result<Flow> {
        loop {
            let condition = self.expr()?;
            self.expect_word(Word::Then)?;
            let single = scan::opens_inline(self.program.mem(), self.cursor);
            if condition != 0 {
                return self.goto_label_literal();
            }
            let line = if single { 0 } else { self.line };
            let code = self.program.mem();
            let targets = [Word::Else, Word::ElseIf, Word::EndIf];
            let found = match scan::find(code, self.cursor, &targets, line) {
                Some(found) => found,
                None if single => {
                    self.cursor = scan::line_end(code, self.cursor);
                    return Ok(Flow::Continue);
                }
                None => return Err(error!(NoMatchingEndif)),
            };
            self.cursor = found.pos;
            if !single {
                self.line = found.line;
            }
            match found.word {
                Word::ElseIf => continue,
                Word::Else => return self.goto_label_literal(),
                _ => return Ok(Flow::Continue),
            }
        }
    }

    /// `THEN 100` and `ELSE 100` are jumps.
    fn goto_label_literal(&mut self) -> Result<Flow> {
        if lit::radix(self.program.mem(), self.cursor) == Some(Radix::Decimal) {
            self.r#goto()
        } else {
            Ok(Flow::Continue)
        }
    }

    /// Reached at the end of a taken branch: skip to the `ENDIF`.
    fn r#else(&mut self) -> Result<Flow> {
        let code = self.program.mem();
        let start = self.program.line_start(self.line);
        let single = scan::has_open_inline_if(code, start, self.statement);
        let line = if single { 0 } else { self.line };
        match scan::find(code, self.cursor, &[Word::EndIf], line) {
            Some(found) => {
                let line = if single { self.line } else { found.line };
                Ok(self.rewind(Cursor {
                    pos: found.pos,
                    line,
                }))
            }
            None if single => {
                self.cursor = scan::line_end(code, self.cursor);
                Ok(Flow::Continue)
            }
            None => Err(error!(NoMatchingEndif)),
        }
    }

    fn r#endif(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        Ok(Flow::Continue)
    }

    fn run_program(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        self.var.clear();
        self.finish();
        Ok(Flow::JumpTo(Cursor { pos: 0, line: 1 }))
    }

    fn r#resume(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        match self.resume {
            Some(resume) => Ok(self.rewind(resume)),
            None => Err(error!(NothingToResume)),
        }
    }

    fn r#stop(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        if self.line != 0 {
            self.resume = Some(Cursor {
                pos: self.cursor,
                line: self.line,
            });
        }
        Err(error!(Break))
    }

    fn r#end(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        self.finish();
        Ok(Flow::End)
    }

    fn r#new_(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        self.program.clear();
        self.var.clear();
        self.finish();
        if self.line == 0 {
            Ok(Flow::Continue)
        } else {
            Ok(Flow::End)
        }
    }

    fn r#list(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        let code = self.program.mem();
        let mut text = String::new();
        for (start, _) in self.program.lines() {
            text.push_str(&format!("{}\r\n", Line::new(&code[start..])));
        }
        let len = match self.program.len() {
            len if len < 2 => 0,
            len => len,
        };
        text.push_str(&format!("[{} bytes]\r\n", len));
        self.bios.write_str(&text);
        Ok(Flow::Continue)
    }

    fn r#prog(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        if self.line != 0 {
            return Err(error!(NotInRunMode));
        }
        self.program.clear();
        self.var.clear();
        self.finish();
        self.entry = true;
        Ok(Flow::End)
    }

    fn r#save(&mut self) -> Result<Flow> {
        let autorun = if is_delimiter(self.byte()) {
            false
        } else {
            self.expr()? != 0
        };
        self.check_delimiter()?;
        persist::save(&mut self.bios, &self.program, autorun)?;
        Ok(Flow::Continue)
    }

    fn r#load(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        persist::load(&mut self.bios, &mut self.program)?;
        self.var.clear();
        self.finish();
        if self.line == 0 {
            Ok(Flow::Continue)
        } else {
            Ok(Flow::End)
        }
    }

    fn r#delay(&mut self) -> Result<Flow> {
        let ms = self.expr()?;
        self.check_delimiter()?;
        if ms > 0 {
            self.sleep(ms as u32)?;
        }
        Ok(Flow::Continue)
    }

    fn r#pause(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        self.wait_key()?;
        Ok(Flow::Continue)
    }

    fn r#reset(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        self.bios.system_reset();
        self.reboot = true;
        Ok(Flow::End)
    }

    fn r#randomize(&mut self) -> Result<Flow> {
        let seed = self.expr()?;
        self.check_delimiter()?;
        self.bios.seed_random(seed);
        Ok(Flow::Continue)
    }

    fn r#data(&mut self) -> Result<Flow> {
        self.cursor = scan::statement_end(self.program.mem(), self.cursor);
        Ok(Flow::Continue)
    }

    fn r#read(&mut self) -> Result<Flow> {
        let slot = self.slot()?;
        self.check_delimiter()?;
        let after = self.cursor;
        self.cursor = self.next_data()?;
        let value = self.expr()?;
        let end = self.byte();
        if end != b',' && !is_delimiter(end) {
            return Err(error!(BadParameter));
        }
        self.data = Some(self.cursor);
        self.cursor = after;
        self.var.store(slot, value);
        Ok(Flow::Continue)
    }

    /// Position of the next `DATA` item, wrapping to the first `DATA` in
    /// the program once the last one is used up.
    fn next_data(&self) -> Result<usize> {
        if self.program.is_empty() {
            return Err(error!(UnexpectedRead));
        }
        let code = self.program.mem();
        let from = self.data.unwrap_or(0);
        if self.data.is_some() && code.get(from) == Some(&b',') {
            return Ok(from + 1);
        }
        let found = scan::find_word(code, from, Word::Data, 1).or_else(|| {
            if from != 0 {
                scan::find_word(code, 0, Word::Data, 1)
            } else {
                None
            }
        });
        match found {
            Some(found) => Ok(found.pos),
            None => Err(error!(UnexpectedRead)),
        }
    }

    fn r#restore(&mut self) -> Result<Flow> {
        self.check_delimiter()?;
        self.data = None;
        Ok(Flow::Continue)
    }

    fn pin_and_value(&mut self) -> Result<(Int, Int)> {
        let pin = self.expr()?;
        self.expect(b',')?;
        let value = self.expr()?;
        self.check_delimiter()?;
        Ok((pin, value))
    }

    fn r#outp(&mut self) -> Result<Flow> {
        let (pin, value) = self.pin_and_value()?;
        if !self.bios.gpio_write(pin, value) {
            return Err(error!(BadParameter));
        }
        Ok(Flow::Continue)
    }

    fn r#pwm(&mut self) -> Result<Flow> {
        let (pin, value) = self.pin_and_value()?;
        if !self.bios.pwm_write(pin, value) {
            return Err(error!(BadParameter));
        }
        Ok(Flow::Continue)
    }
}

/// Decodes the backslash escapes of a string literal.
fn unescape(body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len());
    let mut pos = 0;
    while let Some(&ch) = body.get(pos) {
        pos += 1;
        if ch != b'\\' {
            out.push(ch);
            continue;
        }
        let escaped = match body.get(pos) {
            Some(escaped) => *escaped,
            None => break,
        };
        pos += 1;
        match escaped {
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'e' => out.push(0x1b),
            b'0' => out.push(0),
            b'x' => {
                let digits = body
                    .get(pos..pos + 2)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match digits {
                    Some(byte) => {
                        out.push(byte);
                        pos += 2;
                    }
                    None => out.push(b'x'),
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Number typed at `INPUT`: decimal, or hex after `0x` or `$`, with an
/// optional leading minus. Parsing stops at the first stray character.
fn parse_number(text: &[u8]) -> Int {
    let mut pos = text
        .iter()
        .position(|ch| *ch > b' ')
        .unwrap_or_else(|| text.len());
    let negative = text.get(pos) == Some(&b'-');
    if negative {
        pos += 1;
    }
    let rest = &text[pos..];
    let (digits, radix) = if rest.len() > 1 && rest[0] == b'0' && (rest[1] | 0x20) == b'x' {
        (&rest[2..], 16)
    } else if rest.first() == Some(&HEXCHR) {
        (&rest[1..], 16)
    } else {
        (rest, 10)
    };
    let mut value: Int = 0;
    for ch in digits {
        match (*ch as char).to_digit(radix) {
            Some(digit) => {
                value = value
                    .wrapping_mul(radix as Int)
                    .wrapping_add(digit as Int)
            }
            None => break,
        }
    }
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(br#"a\nb"#), b"a\nb");
        assert_eq!(unescape(br#"\"q\"\\"#), b"\"q\"\\");
        assert_eq!(unescape(br#"\x41\x4"#), b"Ax4");
        assert_eq!(unescape(br#"\e[0m"#), b"\x1b[0m");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(b"  42"), 42);
        assert_eq!(parse_number(b"-17xyz"), -17);
        assert_eq!(parse_number(b"0x1F"), 31);
        assert_eq!(parse_number(b"$ff"), 255);
        assert_eq!(parse_number(b""), 0);
        assert_eq!(parse_number(b"abc"), 0);
    }
}
