//! Growable byte buffer used to assemble flag output
//!
//! Capacity starts at [`MIN_CAPACITY`] and doubles until the requested
//! length fits. Capacity never shrinks; rollback only moves the logical
//! length back.

use std::io::{self, Write};

/// Capacity allocated on first growth
pub const MIN_CAPACITY: usize = 128;

/// Append-only byte buffer with rollback support
#[derive(Debug, Default, Clone)]
pub struct FlagBuffer {
    data: Vec<u8>,
}

impl FlagBuffer {
    /// Create an empty buffer without allocating
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Logical length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated capacity in bytes
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Last byte, if any
    pub fn last(&self) -> Option<u8> {
        self.data.last().copied()
    }

    /// Contents as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Append a single byte
    pub fn push(&mut self, byte: u8) {
        self.grow_for(1);
        self.data.push(byte);
    }

    /// Append a run of bytes
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.grow_for(bytes.len());
        self.data.extend_from_slice(bytes);
    }

    /// Append the UTF-8 bytes of a string
    pub fn push_str(&mut self, s: &str) {
        self.extend_from_slice(s.as_bytes());
    }

    /// Reserve `count` bytes at the tail and advance the length over them.
    ///
    /// Returns the reserved region so a reader can fill it in place. The
    /// caller truncates back to the number of bytes actually written.
    pub fn reserve_tail(&mut self, count: usize) -> &mut [u8] {
        let start = self.data.len();
        self.grow_for(count);
        self.data.resize(start + count, 0);
        &mut self.data[start..]
    }

    /// Shrink the logical length. Lengths past the end are ignored.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// Drop the contents, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Contents from `start` onward as UTF-8, if valid
    pub fn str_from(&self, start: usize) -> Option<&str> {
        self.data
            .get(start..)
            .and_then(|tail| std::str::from_utf8(tail).ok())
    }

    /// Write the contents followed by a newline in a single write.
    ///
    /// An empty buffer writes nothing.
    pub fn write_line<W: Write>(mut self, out: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        self.push(b'\n');
        out.write_all(&self.data)?;
        out.flush()
    }

    fn grow_for(&mut self, additional: usize) {
        let needed = self.data.len() + additional;
        let mut capacity = self.data.capacity();
        if needed <= capacity {
            return;
        }
        if capacity == 0 {
            capacity = MIN_CAPACITY;
        }
        while capacity < needed {
            capacity *= 2;
        }
        self.data.reserve_exact(capacity - self.data.len());
    }
}

impl AsRef<[u8]> for FlagBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_buffer_is_unallocated() {
        let buffer = FlagBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 0);
        assert_eq!(buffer.last(), None);
    }

    #[test]
    fn test_first_append_allocates_minimum() {
        let mut buffer = FlagBuffer::new();
        buffer.push(b'x');
        assert_eq!(buffer.capacity(), MIN_CAPACITY);
        assert_eq!(buffer.as_bytes(), b"x");
    }

    #[test]
    fn test_capacity_doubles() {
        let mut buffer = FlagBuffer::new();
        buffer.extend_from_slice(&[b'a'; MIN_CAPACITY]);
        assert_eq!(buffer.capacity(), MIN_CAPACITY);

        buffer.push(b'b');
        assert_eq!(buffer.capacity(), MIN_CAPACITY * 2);

        // Jumps straight to the smallest doubling that fits
        buffer.extend_from_slice(&[b'c'; MIN_CAPACITY * 4]);
        assert_eq!(buffer.capacity(), MIN_CAPACITY * 8);
    }

    #[test]
    fn test_reserve_tail_advances_length() {
        let mut buffer = FlagBuffer::new();
        buffer.push_str("-I");
        let tail = buffer.reserve_tail(1024);
        assert_eq!(tail.len(), 1024);
        tail[..3].copy_from_slice(b"abc");

        assert_eq!(buffer.len(), 2 + 1024);
        assert!(buffer.capacity() >= buffer.len());

        buffer.truncate(5);
        assert_eq!(buffer.as_bytes(), b"-Iabc");
    }

    #[test]
    fn test_truncate_keeps_capacity() {
        let mut buffer = FlagBuffer::new();
        buffer.extend_from_slice(&[0; 300]);
        let capacity = buffer.capacity();

        buffer.truncate(10);
        assert_eq!(buffer.len(), 10);
        assert_eq!(buffer.capacity(), capacity);

        buffer.truncate(50);
        assert_eq!(buffer.len(), 10);
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut buffer = FlagBuffer::new();
        buffer.push_str("-I/usr/include");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), MIN_CAPACITY);

        buffer.push_str("-lm");
        assert_eq!(buffer.as_bytes(), b"-lm");
    }

    #[test]
    fn test_str_from() {
        let mut buffer = FlagBuffer::new();
        buffer.push_str("-L/opt/pkgs/foo/lib");
        assert_eq!(buffer.str_from(2), Some("/opt/pkgs/foo/lib"));
        assert_eq!(buffer.str_from(100), None);
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut buffer = FlagBuffer::new();
        buffer.push_str("-lz -lm");
        let mut out = Vec::new();
        buffer.write_line(&mut out).unwrap();
        assert_eq!(out, b"-lz -lm\n");
    }

    #[test]
    fn test_write_line_empty_writes_nothing() {
        let mut out = Vec::new();
        FlagBuffer::new().write_line(&mut out).unwrap();
        assert!(out.is_empty());
    }

    proptest! {
        #[test]
        fn prop_appends_survive_growth(chunks in prop::collection::vec(
            prop::collection::vec(any::<u8>(), 0..700),
            0..20,
        )) {
            let mut buffer = FlagBuffer::new();
            let mut expected = Vec::new();

            for chunk in &chunks {
                if chunk.len() == 1 {
                    buffer.push(chunk[0]);
                } else {
                    buffer.extend_from_slice(chunk);
                }
                expected.extend_from_slice(chunk);
                prop_assert!(buffer.len() <= buffer.capacity());
            }

            prop_assert_eq!(buffer.as_bytes(), expected.as_slice());
        }
    }
}
