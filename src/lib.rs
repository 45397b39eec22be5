//! # NanoBASIC
//!
//! A tiny integer BASIC for small boards, executed straight from its
//! stored bytecode.
//!
//! The `nanobasic` binary runs the interpreter in a terminal with a file
//! standing in for the EEPROM. Build it with `cargo install --path .`
//! then run `nanobasic`. If you get the following, you have achieved
//! success.
//! ```text
//! NanoBASIC RS Ver 0.14.0
//! OK
//! █
//! ```
//!
//! The engine itself knows nothing about terminals. Everything it needs
//! from the outside world goes through the [`Bios`](mach::Bios) trait so
//! the same [`Runtime`](mach::Runtime) drives a microcontroller, a
//! desktop console or a test harness.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

#[path = "doc/appendix_c.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_C;

pub mod lang;
pub mod mach;
