use crate::error;
use crate::lang::{skip_token, Error, Int, Line, LineNumber, EOL};

type Result<T> = std::result::Result<T, Error>;

/// A position in the arena and the line it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub pos: usize,
    pub line: LineNumber,
}

/// ## Program memory
///
/// One fixed arena: the stored program followed by room for the
/// immediate line. Stored lines are concatenated bytecode, each ending
/// in `EOL`, and the program ends with an extra `EOL`.

#[derive(Debug)]
pub struct Program {
    mem: Vec<u8>,
    size: usize,
}

impl Program {
    pub fn new(program_size: usize, line_size: usize) -> Program {
        let size = program_size.max(1);
        Program {
            mem: vec![EOL; size + line_size],
            size,
        }
    }

    pub fn clear(&mut self) {
        self.mem[0] = EOL;
    }

    pub fn mem(&self) -> &[u8] {
        &self.mem
    }

    pub fn byte(&self, pos: usize) -> u8 {
        self.mem.get(pos).copied().unwrap_or(EOL)
    }

    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Start of the immediate line.
    pub fn line_base(&self) -> usize {
        self.size
    }

    pub fn line_area_mut(&mut self) -> &mut [u8] {
        &mut self.mem[self.size..]
    }

    pub fn is_immediate(&self, pos: usize) -> bool {
        pos >= self.size
    }

    pub fn is_empty(&self) -> bool {
        self.mem[0] == EOL
    }

    /// Start and end (past the `EOL`) of every stored line.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            mem: &self.mem[..self.size],
            pos: 0,
        }
    }

    /// Bytes in use, terminator included.
    pub fn len(&self) -> usize {
        self.lines().last().map_or(0, |(_, end)| end) + 1
    }

    /// The stored program, terminator included.
    pub fn bytes(&self) -> &[u8] {
        &self.mem[..self.len()]
    }

    pub fn program_area_mut(&mut self) -> &mut [u8] {
        &mut self.mem[..self.size]
    }

    pub fn line_start(&self, line: LineNumber) -> usize {
        if line == 0 {
            return self.line_base();
        }
        self.lines()
            .nth(line as usize - 1)
            .map_or(self.len() - 1, |(start, _)| start)
    }

    /// First stored line labelled `label`.
    pub fn find_label(&self, label: Int) -> Option<Cursor> {
        self.lines()
            .enumerate()
            .find(|(_, (start, _))| Line::new(&self.mem[*start..]).label() == Some(label))
            .map(|(index, (start, _))| Cursor {
                pos: start,
                line: index as LineNumber + 1,
            })
    }

    /// Stores the encoded immediate line by its label: a line with the
    /// same label is replaced in place, a new label is appended, and a
    /// bare label deletes its line.
    pub fn store_line(&mut self, len: usize) -> Result<()> {
        let base = self.line_base();
        let line = Line::new(&self.mem[base..base + len]);
        let label = match line.label() {
            Some(label) => label,
            None => return self.append_line(len),
        };
        let bare = crate::lang::lit::skip(&self.mem, base)
            .map_or(false, |pos| self.byte(pos) == EOL);
        match self.find_label(label) {
            Some(found) => {
                let old_len = Line::new(&self.mem[found.pos..]).len();
                if bare {
                    self.splice(found.pos, old_len, base, 0)
                } else {
                    self.splice(found.pos, old_len, base, len)
                }
            }
            None if bare => Ok(()),
            None => self.append_line(len),
        }
    }

    /// Appends the encoded immediate line to the end of the program.
    pub fn append_line(&mut self, len: usize) -> Result<()> {
        if len < 2 {
            return Ok(());
        }
        let end = self.len() - 1;
        let base = self.line_base();
        self.splice(end, 0, base, len)
    }

    fn splice(&mut self, at: usize, remove: usize, src: usize, len: usize) -> Result<()> {
        let used = self.len();
        if used - remove + len > self.size {
            return Err(error!(ProgramAreaOverflow));
        }
        self.mem.copy_within(at + remove..used, at + len);
        self.mem.copy_within(src..src + len, at);
        Ok(())
    }
}

pub struct Lines<'a> {
    mem: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        let start = self.pos;
        if self.mem.get(start).map_or(true, |b| *b == EOL) {
            return None;
        }
        let mut pos = start;
        while self.mem.get(pos).map_or(false, |b| *b != EOL) {
            pos = skip_token(self.mem, pos);
        }
        self.pos = pos + 1;
        Some((start, self.pos))
    }
}
