/*!
## Rust Machine Module

This Rust module executes NanoBASIC bytecode in place. There is no
compile step: the run loop walks the stored bytes with a cursor and
dispatches on each statement opcode.

*/

mod bios;
mod config;
mod expr;
mod format;
pub mod persist;
mod program;
mod runtime;
pub mod scan;
mod stack;
mod statement;
mod var;

pub use bios::Bios;
pub use config::Config;
pub use program::Cursor;
pub use program::Program;
pub use runtime::Flow;
pub use runtime::Runtime;
pub use runtime::VERSION;
pub use stack::Frame;
pub use stack::Stack;
pub use var::Slot;
pub use var::Var;

#[cfg(test)]
mod tests;
