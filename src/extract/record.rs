// Thu Jan 15 2026 - Alex

use std::fmt;

/// One struct definition found in the header text.
///
/// `body` is the complete matched definition, from the `struct` keyword
/// through the closing `};`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructRecord<'a> {
    pub name: &'a str,
    pub body: &'a str,
    pub offset: usize,
}

impl<'a> StructRecord<'a> {
    pub fn new(name: &'a str, body: &'a str, offset: usize) -> Self {
        Self { name, body, offset }
    }
}

impl fmt::Display for StructRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ 0x{:x} ({} bytes)", self.name, self.offset, self.body.len())
    }
}
