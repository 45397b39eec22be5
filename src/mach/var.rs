use crate::error;
use crate::lang::{Error, Int};

type Result<T> = std::result::Result<T, Error>;

/// Where a value lives: one of the 26 letters or an array element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Var(u8),
    Array(usize),
}

/// ## Variable memory

#[derive(Debug)]
pub struct Var {
    vars: [Int; 26],
    array: Vec<Int>,
}

impl Var {
    pub fn new(array_size: usize) -> Var {
        Var {
            vars: [0; 26],
            array: vec![0; array_size],
        }
    }

    pub fn clear(&mut self) {
        self.vars = [0; 26];
        for val in self.array.iter_mut() {
            *val = 0;
        }
    }

    /// Slot of variable `letter`, an uppercase ASCII letter.
    pub fn letter(letter: u8) -> Slot {
        debug_assert!(letter.is_ascii_uppercase());
        Slot::Var(letter - b'A')
    }

    pub fn element(&self, index: Int) -> Result<Slot> {
        if index < 0 || index as usize >= self.array.len() {
            Err(error!(ArrayIndexOutOfRange))
        } else {
            Ok(Slot::Array(index as usize))
        }
    }

    pub fn fetch(&self, slot: Slot) -> Int {
        match slot {
            Slot::Var(index) => self.vars[index as usize],
            Slot::Array(index) => self.array[index],
        }
    }

    pub fn store(&mut self, slot: Slot, value: Int) {
        match slot {
            Slot::Var(index) => self.vars[index as usize] = value,
            Slot::Array(index) => self.array[index] = value,
        }
    }
}
