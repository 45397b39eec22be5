//! ## Structural scanner
//!
//! Forward searches over bytecode that understand literal widths,
//! strings, comments and block nesting. A line number of zero keeps a
//! search on the current line; otherwise it follows the program onto
//! the following lines and counts them.

use crate::lang::{is_delimiter, skip_token, LineNumber, Word, COMMENT, EOL};

/// A match: the token at `at`, execution continues from `pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found {
    pub at: usize,
    pub pos: usize,
    pub word: Word,
    pub line: LineNumber,
}

/// Which loop a search is closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    For,
    Do,
}

/// A `THEN` followed by more statements on its line opens a single-line IF.
pub fn opens_inline(code: &[u8], after_then: usize) -> bool {
    match code.get(after_then) {
        None => false,
        Some(&byte) => byte != EOL && byte != COMMENT,
    }
}

/// Walks tokens across lines. Yields the token start, its word if it is
/// a keyword, and the line it is on.
struct Walker<'a> {
    code: &'a [u8],
    pos: usize,
    line: LineNumber,
}

enum Step {
    Token(usize, Option<Word>),
    NewLine,
    Done,
}

impl<'a> Walker<'a> {
    fn step(&mut self) -> Step {
        let byte = match self.code.get(self.pos) {
            Some(byte) => *byte,
            None => return Step::Done,
        };
        if byte == EOL {
            if self.line == 0 {
                return Step::Done;
            }
            self.pos += 1;
            if self.code.get(self.pos).map_or(true, |b| *b == EOL) {
                return Step::Done;
            }
            self.line += 1;
            return Step::NewLine;
        }
        let at = self.pos;
        self.pos = skip_token(self.code, at);
        Step::Token(at, Word::from_byte(byte))
    }
}

/// Finds the first of `targets` not inside a nested IF.
pub fn find(code: &[u8], pos: usize, targets: &[Word], line: LineNumber) -> Option<Found> {
    let mut walker = Walker { code, pos, line };
    let mut depth = 0usize;
    let mut inline = 0usize;
    let mut after_if = false;
    loop {
        match walker.step() {
            Step::Done => return None,
            Step::NewLine => {
                depth -= inline.min(depth);
                inline = 0;
                after_if = false;
            }
            Step::Token(_, None) => {}
            Step::Token(at, Some(word)) => match word {
                Word::If => {
                    depth += 1;
                    after_if = true;
                }
                Word::Then if after_if => {
                    after_if = false;
                    if opens_inline(code, walker.pos) {
                        inline += 1;
                    }
                }
                Word::EndIf if depth > 0 => {
                    depth -= 1;
                    inline = inline.saturating_sub(1);
                }
                word if depth == 0 && targets.contains(&word) => {
                    return Some(Found {
                        at,
                        pos: walker.pos,
                        word,
                        line: walker.line,
                    })
                }
                _ => {}
            },
        }
    }
}

/// Finds the next `word` ignoring block structure.
pub fn find_word(code: &[u8], pos: usize, word: Word, line: LineNumber) -> Option<Found> {
    let mut walker = Walker { code, pos, line };
    loop {
        match walker.step() {
            Step::Done => return None,
            Step::Token(at, Some(found)) if found == word => {
                return Some(Found {
                    at,
                    pos: walker.pos,
                    word,
                    line: walker.line,
                })
            }
            _ => {}
        }
    }
}

/// Finds the `NEXT` or `LOOP` closing the loop the search starts in,
/// stepping over complete inner loops of the same kind.
pub fn find_loop_end(
    code: &[u8],
    pos: usize,
    kind: LoopKind,
    line: LineNumber,
) -> Option<Found> {
    let mut walker = Walker { code, pos, line };
    let mut depth = 0usize;
    let mut prev = None;
    loop {
        let (at, word) = match walker.step() {
            Step::Done => return None,
            Step::NewLine => {
                prev = None;
                continue;
            }
            Step::Token(at, word) => (at, word),
        };
        let opens = match (kind, word) {
            (LoopKind::For, Some(Word::For)) => true,
            (LoopKind::Do, Some(Word::Do)) => true,
            (LoopKind::Do, Some(Word::While)) => prev != Some(Word::Loop),
            _ => false,
        };
        let closes = match (kind, word) {
            (LoopKind::For, Some(Word::Next)) => true,
            (LoopKind::Do, Some(Word::Loop)) => true,
            _ => false,
        };
        if opens {
            depth += 1;
        } else if closes {
            if depth == 0 {
                return Some(Found {
                    at,
                    pos: walker.pos,
                    word: word.unwrap_or(Word::Next),
                    line: walker.line,
                });
            }
            depth -= 1;
        }
        prev = word;
    }
}

/// Position of the `EOL` ending the line `pos` is on.
pub fn line_end(code: &[u8], mut pos: usize) -> usize {
    while code.get(pos).map_or(false, |b| *b != EOL) {
        pos = skip_token(code, pos);
    }
    pos
}

/// Position of the delimiter ending the statement `pos` is in.
pub fn statement_end(code: &[u8], mut pos: usize) -> usize {
    while code.get(pos).map_or(false, |b| !is_delimiter(*b)) {
        pos = skip_token(code, pos);
    }
    pos
}

/// Whether a single-line IF opened between `start` and `pos` is still
/// open at `pos`.
pub fn has_open_inline_if(code: &[u8], start: usize, pos: usize) -> bool {
    let mut depth = 0usize;
    let mut inline = 0usize;
    let mut after_if = false;
    let mut at = start;
    while at < pos {
        let byte = match code.get(at) {
            Some(&EOL) | None => break,
            Some(byte) => *byte,
        };
        let next = skip_token(code, at);
        match Word::from_byte(byte) {
            Some(Word::If) => {
                depth += 1;
                after_if = true;
            }
            Some(Word::Then) if after_if => {
                after_if = false;
                if opens_inline(code, next) {
                    inline += 1;
                }
            }
            Some(Word::EndIf) if depth > 0 => {
                depth -= 1;
                inline = inline.saturating_sub(1);
            }
            _ => {}
        }
        at = next;
    }
    inline > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::encode_line;

    fn program(lines: &[&str]) -> Vec<u8> {
        let mut code = vec![];
        let mut buf = [0u8; 64];
        for line in lines {
            let len = encode_line(line, &mut buf).unwrap();
            code.extend_from_slice(&buf[..len]);
        }
        code.push(EOL);
        code
    }

    #[test]
    fn test_find_skips_nested_if() {
        let code = program(&["IF A THEN", "IF B THEN", "ELSE", "ENDIF", "ELSE", "ENDIF"]);
        let found = find(&code, 3, &[Word::Else, Word::ElseIf, Word::EndIf], 1).unwrap();
        assert_eq!(found.word, Word::Else);
        assert_eq!(found.line, 5);
    }

    #[test]
    fn test_find_inline_if_closes_at_line_end() {
        let code = program(&["IF A THEN", "IF B THEN PRINT 1", "ELSE", "ENDIF"]);
        let found = find(&code, 3, &[Word::Else, Word::ElseIf, Word::EndIf], 1).unwrap();
        assert_eq!(found.word, Word::Else);
        assert_eq!(found.line, 3);
    }

    #[test]
    fn test_find_stays_on_line() {
        let code = program(&["IF A THEN PRINT 1", "ELSE"]);
        assert_eq!(find(&code, 3, &[Word::Else], 0), None);
        assert!(find(&code, 3, &[Word::Else], 1).is_some());
    }

    #[test]
    fn test_find_skips_literal_payloads() {
        // 0x9f is ELSE; as a payload byte it must not match
        let code = program(&["A=0x9F:B=159:ELSE"]);
        let found = find(&code, 0, &[Word::Else], 0).unwrap();
        assert_eq!(code[found.at], Word::Else.byte());
    }

    #[test]
    fn test_find_loop_end() {
        let code = program(&["DO", "FOR I=1 TO 2", "DO:LOOP", "WHILE X", "LOOP", "NEXT", "LOOP WHILE 1"]);
        let found = find_loop_end(&code, 1, LoopKind::Do, 1).unwrap();
        assert_eq!(found.line, 7);
        assert_eq!(code[found.at], Word::Loop.byte());
        assert_eq!(find_loop_end(&code, 1, LoopKind::For, 1), None);
        let found = find_loop_end(&code, line_end(&code, 2), LoopKind::For, 2).unwrap();
        assert_eq!(found.line, 6);
        assert_eq!(code[found.at], Word::Next.byte());
    }

    #[test]
    fn test_inline_if_detection() {
        let code = program(&["IF A THEN PRINT 1 ELSE PRINT 2"]);
        let else_at = code.iter().position(|b| *b == Word::Else.byte()).unwrap();
        assert!(has_open_inline_if(&code, 0, else_at));
        let code = program(&["ELSE"]);
        assert!(!has_open_inline_if(&code, 0, 0));
    }

    #[test]
    fn test_find_word_ignores_blocks() {
        let code = program(&["IF A THEN", "DATA 1,2", "ENDIF", "DATA 3"]);
        let found = find_word(&code, 0, Word::Data, 1).unwrap();
        assert_eq!(found.line, 2);
        let found = find_word(&code, found.pos, Word::Data, found.line).unwrap();
        assert_eq!(found.line, 4);
        assert_eq!(find_word(&code, found.pos, Word::Data, found.line), None);
    }

    #[test]
    fn test_ends() {
        let code = program(&["PRINT \"a:b\":A=1"]);
        assert_eq!(code[statement_end(&code, 0)], b':');
        assert_eq!(statement_end(&code, 0), 6);
        assert_eq!(code[line_end(&code, 0)], EOL);
    }
}
