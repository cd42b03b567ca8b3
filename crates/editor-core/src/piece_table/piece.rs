#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub buf_kind: crate::enums::BufferKind,
    /// Range inside the buffer selected by `buf_kind`.
    pub range: std::ops::Range<usize>,
}

impl Piece {
    #[inline]
    pub fn new(buf_kind: crate::enums::BufferKind, range: std::ops::Range<usize>) -> Self {
        Self { buf_kind, range }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
