use super::{Cursor, Slot};
use crate::error;
use crate::lang::{Error, Int};

type Result<T> = std::result::Result<T, Error>;

/// One entry of the control stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Gosub(Cursor),
    For {
        resume: Cursor,
        slot: Slot,
        limit: Int,
        step: Int,
    },
    Do(Cursor),
}

impl Frame {
    pub fn resume(&self) -> Cursor {
        match self {
            Frame::Gosub(resume) | Frame::Do(resume) => *resume,
            Frame::For { resume, .. } => *resume,
        }
    }
}

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    vec: Vec<T>,
    limit: usize,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(limit: usize) -> Stack<T> {
        Stack {
            vec: Vec::with_capacity(limit),
            limit,
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.limit {
            return Err(error!(ControlStackOverflow));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
    /// Drops the first entry matching `f` and everything above it.
    pub fn cut<F: Fn(&T) -> bool>(&mut self, f: F) {
        if let Some(index) = self.vec.iter().position(f) {
            self.vec.truncate(index);
        }
    }
}
