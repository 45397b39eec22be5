/*!
# Rust Language Module

This Rust module turns lines of NanoBASIC text into bytecode and
renders bytecode back into text for `LIST`.

*/

#[macro_use]
mod error;
mod encode;
mod line;
pub mod lit;
mod token;

pub use encode::encode_line;
pub use error::Error;
pub use error::ErrorCode;
pub(crate) use line::is_delimiter;
pub use line::skip_token;
pub use line::Line;
pub use token::Word;
pub use token::{ARRAY, COMMENT, EOL, HEXCHR, STRING};

/// Physical position of a stored line, counted from 1. Zero is the
/// immediate line.
pub type LineNumber = u16;

#[cfg(not(feature = "wide"))]
pub type Int = i16;
#[cfg(not(feature = "wide"))]
pub type UInt = u16;

#[cfg(feature = "wide")]
pub type Int = i32;
#[cfg(feature = "wide")]
pub type UInt = u32;

#[cfg(test)]
mod tests;
