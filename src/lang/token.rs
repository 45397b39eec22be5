pub const EOL: u8 = 0x00;
pub const STRING: u8 = b'"';
pub const COMMENT: u8 = b'\'';
pub const ARRAY: u8 = b'@';
pub const HEXCHR: u8 = b'$';

/// ## Keyword opcodes
///
/// Every keyword is stored as a single byte from 0x80 upward, in the
/// order of [`Word::ALL`]. The order also drives keyword matching.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Word {
    Print = 0x80,
    Input,
    Goto,
    Gosub,
    Return,
    For,
    Next,
    Do,
    Loop,
    While,
    If,
    Run,
    Resume,
    Stop,
    End,
    New,
    List,
    Prog,
    Save,
    Load,
    Delay,
    Pause,
    Reset,
    Exit,
    Continue,
    Randomize,
    Data,
    Read,
    Restore,
    Outp,
    Pwm,
    Else,
    ElseIf,
    EndIf,
    Then,
    To,
    Step,
    Rnd,
    Abs,
    Inp,
    Adc,
    Chr,
    Tick,
    Inkey,
}

impl Word {
    pub const ALL: [Word; 44] = [
        Word::Print,
        Word::Input,
        Word::Goto,
        Word::Gosub,
        Word::Return,
        Word::For,
        Word::Next,
        Word::Do,
        Word::Loop,
        Word::While,
        Word::If,
        Word::Run,
        Word::Resume,
        Word::Stop,
        Word::End,
        Word::New,
        Word::List,
        Word::Prog,
        Word::Save,
        Word::Load,
        Word::Delay,
        Word::Pause,
        Word::Reset,
        Word::Exit,
        Word::Continue,
        Word::Randomize,
        Word::Data,
        Word::Read,
        Word::Restore,
        Word::Outp,
        Word::Pwm,
        Word::Else,
        Word::ElseIf,
        Word::EndIf,
        Word::Then,
        Word::To,
        Word::Step,
        Word::Rnd,
        Word::Abs,
        Word::Inp,
        Word::Adc,
        Word::Chr,
        Word::Tick,
        Word::Inkey,
    ];

    pub fn from_byte(byte: u8) -> Option<Word> {
        if byte < Word::Print as u8 {
            return None;
        }
        Word::ALL.get((byte - Word::Print as u8) as usize).copied()
    }

    pub fn byte(self) -> u8 {
        self as u8
    }

    /// Words the run loop dispatches on.
    pub fn is_statement(self) -> bool {
        self <= Word::EndIf
    }

    /// Words that get a space in front of them in a listing.
    pub fn is_spaced(self) -> bool {
        self >= Word::Else && self <= Word::Step
    }

    /// Function and value words. A sign after one of these is an operator.
    pub fn is_value(self) -> bool {
        self >= Word::Rnd
    }

    /// First table entry spelled at the start of `text`, ignoring case,
    /// and not followed by another letter.
    pub fn lookup(text: &[u8]) -> Option<(Word, usize)> {
        Word::ALL.iter().find_map(|word| {
            let spelling = word.as_str().as_bytes();
            let len = spelling.len();
            if text.len() < len || !text[..len].eq_ignore_ascii_case(spelling) {
                return None;
            }
            match text.get(len) {
                Some(ch) if ch.is_ascii_alphabetic() => None,
                _ => Some((*word, len)),
            }
        })
    }

    pub fn as_str(self) -> &'static str {
        use Word::*;
        match self {
            Print => "PRINT",
            Input => "INPUT",
            Goto => "GOTO",
            Gosub => "GOSUB",
            Return => "RETURN",
            For => "FOR",
            Next => "NEXT",
            Do => "DO",
            Loop => "LOOP",
            While => "WHILE",
            If => "IF",
            Run => "RUN",
            Resume => "RESUME",
            Stop => "STOP",
            End => "END",
            New => "NEW",
            List => "LIST",
            Prog => "PROG",
            Save => "SAVE",
            Load => "LOAD",
            Delay => "DELAY",
            Pause => "PAUSE",
            Reset => "RESET",
            Exit => "EXIT",
            Continue => "CONTINUE",
            Randomize => "RANDOMIZE",
            Data => "DATA",
            Read => "READ",
            Restore => "RESTORE",
            Outp => "OUTP",
            Pwm => "PWM",
            Else => "ELSE",
            ElseIf => "ELSEIF",
            EndIf => "ENDIF",
            Then => "THEN",
            To => "TO",
            Step => "STEP",
            Rnd => "RND",
            Abs => "ABS",
            Inp => "INP",
            Adc => "ADC",
            Chr => "CHR",
            Tick => "TICK",
            Inkey => "INKEY",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
