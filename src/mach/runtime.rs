use super::{persist, scan, Bios, Config, Cursor, Frame, Program, Slot, Stack, Var};
use crate::error;
use crate::lang::lit::{self, Radix};
use crate::lang::{encode_line, is_delimiter, Error, Line, LineNumber, Word, ARRAY, COMMENT, EOL};

pub(super) type Result<T> = std::result::Result<T, Error>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const CTRL_C: u8 = 0x03;

/// What the run loop does after a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Start executing at the beginning of a stored line.
    JumpTo(Cursor),
    End,
}

/// ## Interpreter state
///
/// Everything the interpreter knows lives here and every statement works
/// on it through `&mut self`. The shell feeds lines of text to
/// [`enter`](Runtime::enter); console traffic, clock, pins and storage go
/// through the [`Bios`].

pub struct Runtime<B: Bios> {
    pub(super) bios: B,
    pub(super) config: Config,
    pub(super) program: Program,
    pub(super) var: Var,
    pub(super) stack: Stack<Frame>,
    pub(super) cursor: usize,
    pub(super) line: LineNumber,
    pub(super) statement: usize,
    pub(super) data: Option<usize>,
    pub(super) resume: Option<Cursor>,
    pub(super) depth: usize,
    pub(super) pending: Option<u8>,
    pub(super) entry: bool,
    pub(super) reboot: bool,
}

impl<B: Bios> Runtime<B> {
    pub fn new(bios: B, config: Config) -> Runtime<B> {
        Runtime {
            program: Program::new(config.program_size, config.code_line_size),
            var: Var::new(config.array_size),
            stack: Stack::new(config.stack_size),
            bios,
            config,
            cursor: 0,
            line: 0,
            statement: 0,
            data: None,
            resume: None,
            depth: 0,
            pending: None,
            entry: false,
            reboot: false,
        }
    }

    pub fn bios(&self) -> &B {
        &self.bios
    }

    pub fn bios_mut(&mut self) -> &mut B {
        &mut self.bios
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// True between `PROG` and the closing `#` line.
    pub fn is_entry_mode(&self) -> bool {
        self.entry
    }

    /// Power-on: banner, load of the saved program and the autorun
    /// countdown. Repeats for as long as the program asks for `RESET`.
    pub fn boot(&mut self) {
        loop {
            self.reboot = false;
            self.entry = false;
            self.var.clear();
            self.finish();
            self.bios
                .write_str(&format!("\r\nNanoBASIC RS Ver {}\r\n", VERSION));
            match persist::load(&mut self.bios, &mut self.program) {
                Ok(true) => {
                    if self.countdown() {
                        let result = self.execute(Flow::JumpTo(Cursor { pos: 0, line: 1 }));
                        if let Err(error) = result {
                            self.report(error);
                        }
                    }
                }
                Ok(false) => {}
                Err(_) => self.program.clear(),
            }
            if !self.reboot {
                break;
            }
        }
        self.bios.write_str("OK\r\n");
    }

    /// One line from the console.
    pub fn enter(&mut self, raw: &str) {
        if self.entry {
            self.entry_line(raw);
            return;
        }
        if let Err(error) = self.direct(raw) {
            self.report(error);
        }
        if self.reboot {
            self.boot();
            return;
        }
        if !self.entry {
            self.bios.write_str("OK\r\n");
        }
    }

    fn entry_line(&mut self, raw: &str) {
        if raw.starts_with('#') {
            self.entry = false;
            self.bios.write_str("OK\r\n");
            return;
        }
        let len = match encode_line(raw, self.program.line_area_mut()) {
            Ok(len) => len,
            Err(error) => {
                self.report(error);
                return;
            }
        };
        if let Err(error) = self.program.append_line(len) {
            self.report(error);
            self.entry = false;
            self.bios.write_str("OK\r\n");
        }
    }

    fn direct(&mut self, raw: &str) -> Result<()> {
        self.line = 0;
        let base = self.program.line_base();
        let len = encode_line(raw, self.program.line_area_mut())?;
        if self.config.dump {
            self.dump(base, len);
        }
        if Line::new(&self.program.mem()[base..]).label().is_some() {
            self.program.store_line(len)?;
            self.stack.clear();
            self.data = None;
            self.resume = None;
            return Ok(());
        }
        if len < 2 {
            return Ok(());
        }
        self.stack.cut(|frame| frame.resume().pos >= base);
        self.cursor = base;
        self.execute(Flow::Continue)
    }

    fn dump(&mut self, base: usize, len: usize) {
        let mut s = String::new();
        for byte in &self.program.mem()[base..base + len] {
            s.push_str(&format!("{:02X} ", byte));
        }
        s.push_str("\r\n");
        self.bios.write_str(&s);
    }

    fn report(&mut self, error: Error) {
        self.bios.write_str(&format!("\r\n{}\r\n", error));
    }

    fn countdown(&mut self) -> bool {
        let start = self.bios.now_ms();
        loop {
            if self.bios.read_char().is_some() {
                return false;
            }
            if self.bios.now_ms().wrapping_sub(start) >= self.config.autorun_delay_ms {
                return true;
            }
            self.bios.idle();
        }
    }

    fn execute(&mut self, flow: Flow) -> Result<()> {
        let result = self.run(flow);
        result.map_err(|error| error.in_line_number(self.line))
    }

    fn run(&mut self, mut flow: Flow) -> Result<()> {
        loop {
            match flow {
                Flow::End => return Ok(()),
                Flow::JumpTo(to) => {
                    self.cursor = to.pos;
                    self.line = to.line;
                    if !self.start_line() {
                        return Ok(());
                    }
                }
                Flow::Continue => {}
            }
            self.statement = self.cursor;
            self.depth = 0;
            self.check_break()?;
            flow = self.statement()?;
        }
    }

    /// Skips the label of the stored line at the cursor. False at the end
    /// of the program.
    fn start_line(&mut self) -> bool {
        if self.byte() == EOL {
            self.finish();
            return false;
        }
        if self.config.trace {
            self.bios.write_str(&format!("[{}]", self.line));
        }
        if lit::radix(self.program.mem(), self.cursor) == Some(Radix::Decimal) {
            if let Some(next) = lit::skip(self.program.mem(), self.cursor) {
                self.cursor = next;
            }
        }
        true
    }

    fn statement(&mut self) -> Result<Flow> {
        let byte = self.byte();
        match byte {
            EOL => {
                if self.line == 0 {
                    return Ok(Flow::End);
                }
                Ok(Flow::JumpTo(Cursor {
                    pos: self.cursor + 1,
                    line: self.line + 1,
                }))
            }
            b':' => {
                self.cursor += 1;
                Ok(Flow::Continue)
            }
            COMMENT => {
                self.cursor = scan::line_end(self.program.mem(), self.cursor);
                Ok(Flow::Continue)
            }
            b'A'..=b'Z' | ARRAY => self.assignment(),
            _ => match Word::from_byte(byte) {
                Some(word) if word.is_statement() => {
                    self.cursor += 1;
                    self.dispatch(word)
                }
                _ => Err(error!(Syntax)),
            },
        }
    }

    /// Run state that does not outlive a program run.
    pub(super) fn finish(&mut self) {
        self.stack.clear();
        self.data = None;
        self.resume = None;
    }

    pub(super) fn byte(&self) -> u8 {
        self.program.byte(self.cursor)
    }

    pub(super) fn at_word(&self, word: Word) -> bool {
        self.byte() == word.byte()
    }

    pub(super) fn expect(&mut self, byte: u8) -> Result<()> {
        if self.byte() != byte {
            return Err(error!(Syntax));
        }
        self.cursor += 1;
        Ok(())
    }

    pub(super) fn expect_word(&mut self, word: Word) -> Result<()> {
        self.expect(word.byte())
    }

    pub(super) fn check_delimiter(&self) -> Result<()> {
        if is_delimiter(self.byte()) {
            Ok(())
        } else {
            Err(error!(Syntax))
        }
    }

    /// A variable or `@[index]` at the cursor.
    pub(super) fn slot(&mut self) -> Result<Slot> {
        match self.byte() {
            letter @ b'A'..=b'Z' => {
                self.cursor += 1;
                Ok(Var::letter(letter))
            }
            ARRAY => {
                self.cursor += 1;
                self.expect(b'[')?;
                let index = self.expr()?;
                self.expect(b']')?;
                self.var.element(index)
            }
            _ => Err(error!(Syntax)),
        }
    }

    fn check_break(&mut self) -> Result<()> {
        match self.bios.read_char() {
            Some(CTRL_C) => Err(self.interrupt()),
            Some(ch) => {
                self.pending = Some(ch);
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Break at the current statement, which `RESUME` will run again.
    pub(super) fn interrupt(&mut self) -> Error {
        if self.line != 0 {
            self.resume = Some(Cursor {
                pos: self.statement,
                line: self.line,
            });
        }
        error!(Break)
    }

    /// The pending key or the next key typed, if any.
    pub(super) fn poll_key(&mut self) -> Result<Option<u8>> {
        if let Some(ch) = self.pending.take() {
            return Ok(Some(ch));
        }
        match self.bios.read_char() {
            Some(CTRL_C) => Err(self.interrupt()),
            key => Ok(key),
        }
    }

    pub(super) fn wait_key(&mut self) -> Result<u8> {
        loop {
            if let Some(ch) = self.poll_key()? {
                return Ok(ch);
            }
            self.bios.idle();
        }
    }

    /// Waits `ms` milliseconds, still answering Ctrl-C.
    pub(super) fn sleep(&mut self, ms: u32) -> Result<()> {
        let start = self.bios.now_ms();
        while self.bios.now_ms().wrapping_sub(start) < ms {
            self.check_break()?;
            self.bios.idle();
        }
        Ok(())
    }

    pub(super) fn write_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.bios.write_char(*byte);
        }
    }

    /// A line typed at the console with echo and backspace.
    pub(super) fn read_line(&mut self) -> Result<Vec<u8>> {
        let limit = self.config.raw_line_size.saturating_sub(1);
        let mut input = Vec::with_capacity(limit);
        loop {
            match self.wait_key()? {
                b'\r' | b'\n' => {
                    self.bios.write_str("\r\n");
                    return Ok(input);
                }
                0x08 | 0x7f => {
                    if input.pop().is_some() {
                        self.bios.write_str("\x08 \x08");
                    }
                }
                ch if ch >= b' ' && input.len() < limit => {
                    input.push(ch);
                    self.bios.write_char(ch);
                }
                _ => {}
            }
        }
    }
}
