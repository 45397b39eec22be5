/// ## Engine sizes and switches
///
/// All arenas are allocated once from these sizes when the
/// [`Runtime`](super::Runtime) is built and never grow.

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Bytes of stored program, terminator included.
    pub program_size: usize,
    /// Longest line of text accepted by `INPUT`.
    pub raw_line_size: usize,
    /// Longest encoded line.
    pub code_line_size: usize,
    /// Control stack frames.
    pub stack_size: usize,
    /// Elements of the `@[]` array.
    pub array_size: usize,
    /// Nesting limit for expressions.
    pub max_expr_depth: usize,
    /// Countdown before a saved program with the autorun flag starts.
    pub autorun_delay_ms: u32,
    /// Print `[n]` whenever a program line starts.
    pub trace: bool,
    /// Print the bytecode of each immediate line before it runs.
    pub dump: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            program_size: 512,
            raw_line_size: 64,
            code_line_size: 64,
            stack_size: 8,
            array_size: 64,
            max_expr_depth: 32,
            autorun_delay_ms: 3000,
            trace: false,
            dump: false,
        }
    }
}

impl Config {
    /// Sizes for a desktop host.
    pub fn host() -> Config {
        Config {
            program_size: 1024 - super::persist::HEADER_LEN,
            raw_line_size: 128,
            code_line_size: 128,
            stack_size: 16,
            array_size: 256,
            ..Config::default()
        }
    }
}
