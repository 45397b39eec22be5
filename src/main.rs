//! # NanoBASIC
//!
//! Terminal front end for the NanoBASIC engine.
//!

mod term;

fn main() {
    term::main()
}
