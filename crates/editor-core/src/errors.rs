pub type PieceTableResult<T> = Result<T, PieceTableError>;

#[derive(Debug, thiserror::Error)]
pub enum PieceTableError {
    /// The offset is negative or lies past the end of the document.
    #[error("offset {offset} out of range (len={len})")]
    OffsetOutOfRange { offset: isize, len: usize },

    #[error("failed to map original buffer: {0}")]
    Io(#[from] std::io::Error),
}

impl PieceTableError {
    pub(crate) fn out_of_range(offset: usize, len: usize) -> Self {
        PieceTableError::OffsetOutOfRange {
            offset: isize::try_from(offset).unwrap_or(isize::MAX),
            len,
        }
    }
}
