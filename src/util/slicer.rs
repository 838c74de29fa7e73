//! Sequential byte cursor.
//!
//! Tracks a read position over a borrowed buffer so a record like
//! `aaaaaaaabbccccdeeee` can be decomposed without manual index arithmetic:
//!
//! ```
//! use spliterati::util::Slicer;
//!
//! let mut s = Slicer::new(b"aaaaaaaabbccccdeeee");
//! assert_eq!(s.take(8), Some(&b"aaaaaaaa"[..]));
//! assert_eq!(s.take(2), Some(&b"bb"[..]));
//! assert_eq!(s.take(4), Some(&b"cccc"[..]));
//! assert_eq!(s.take_one(), Some(b'd'));
//! assert_eq!(s.rest(), &b"eeee"[..]);
//! ```

/// Cursor over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct Slicer<'a> {
    data: &'a [u8],
    index: usize,
}

impl<'a> Slicer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Takes a single byte, or `None` at the end of the buffer.
    pub fn take_one(&mut self) -> Option<u8> {
        let b = *self.data.get(self.index)?;
        self.index += 1;
        Some(b)
    }

    /// Takes the next `amt` bytes. Returns `None` and leaves the cursor
    /// untouched if fewer than `amt` bytes remain.
    pub fn take(&mut self, amt: usize) -> Option<&'a [u8]> {
        let end = self.index.checked_add(amt)?;
        let out = self.data.get(self.index..end)?;
        self.index = end;
        Some(out)
    }

    /// Takes everything up to the end of the buffer.
    pub fn rest(&mut self) -> &'a [u8] {
        let out = &self.data[self.index..];
        self.index = self.data.len();
        out
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.index
    }
}
