/// The immutable text a document starts from.
#[derive(Debug)]
pub enum OriginalBuffer {
    InMemory(Box<[u8]>),
    Mapped(io::mmap::MmapFile),
}

impl OriginalBuffer {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            OriginalBuffer::InMemory(bytes) => bytes,
            OriginalBuffer::Mapped(file) => file.as_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for OriginalBuffer {
    fn from(text: &str) -> Self {
        OriginalBuffer::InMemory(text.as_bytes().into())
    }
}

impl From<io::mmap::MmapFile> for OriginalBuffer {
    fn from(file: io::mmap::MmapFile) -> Self {
        OriginalBuffer::Mapped(file)
    }
}

pub trait SliceOf {
    /// Bytes of `range` inside the buffer selected by `buf_kind`.
    fn slice_of(
        &self,
        buf_kind: crate::enums::BufferKind,
        range: std::ops::Range<usize>,
    ) -> &[u8];
}

/// The original buffer plus the append-only add buffer.
#[derive(Debug)]
pub struct Buffers {
    pub original: OriginalBuffer,
    /// Every byte ever inserted, in insertion order. Only grows between resets.
    pub add: Vec<u8>,
}

impl Buffers {
    pub fn new(original: OriginalBuffer, baseline_capacity: usize) -> Self {
        Self {
            original,
            add: Vec::with_capacity(baseline_capacity),
        }
    }

    /// Appends `bytes` to the add buffer and returns where they landed.
    pub fn append(&mut self, bytes: &[u8]) -> std::ops::Range<usize> {
        let start = self.add.len();

        self.add.extend_from_slice(bytes);

        start..self.add.len()
    }

    #[inline]
    pub fn len_of(&self, buf_kind: crate::enums::BufferKind) -> usize {
        match buf_kind {
            crate::enums::BufferKind::Original => self.original.len(),
            crate::enums::BufferKind::Add => self.add.len(),
        }
    }
}

impl SliceOf for Buffers {
    #[inline]
    fn slice_of(
        &self,
        buf_kind: crate::enums::BufferKind,
        range: std::ops::Range<usize>,
    ) -> &[u8] {
        let bytes = match buf_kind {
            crate::enums::BufferKind::Original => self.original.as_bytes().get(range),
            crate::enums::BufferKind::Add => self.add.get(range),
        };

        debug_assert!(bytes.is_some(), "piece range outside its backing buffer");

        bytes.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Buffers, OriginalBuffer, SliceOf};
    use crate::enums::BufferKind;

    #[test]
    fn append_returns_position_in_add_buffer() {
        let mut buffers = Buffers::new(OriginalBuffer::from("abc"), 16);

        assert_eq!(buffers.append(b"xy"), 0..2);
        assert_eq!(buffers.append(b"z"), 2..3);
        assert_eq!(buffers.add, b"xyz");
        assert_eq!(buffers.len_of(BufferKind::Add), 3);
        assert_eq!(buffers.len_of(BufferKind::Original), 3);
    }

    #[test]
    fn slice_of_reads_selected_buffer() {
        let mut buffers = Buffers::new(OriginalBuffer::from("hello"), 0);

        buffers.append(b"world");

        assert_eq!(buffers.slice_of(BufferKind::Original, 1..3), b"el");
        assert_eq!(buffers.slice_of(BufferKind::Add, 3..5), b"ld");
    }
}
