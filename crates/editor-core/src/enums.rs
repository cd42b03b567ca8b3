/// Selects which backing buffer a piece reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferKind {
    Original,
    Add,
}

impl std::fmt::Display for BufferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferKind::Original => f.write_str("Original"),
            BufferKind::Add => f.write_str("Add"),
        }
    }
}
