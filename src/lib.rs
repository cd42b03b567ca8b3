//! Piece-table text buffer engine.
//!
//! The editing core lives in the `editor-core` crate; this crate gathers its
//! public surface in one place for adapters.
//!
//! ```
//! use piece_buffer::PieceTable;
//!
//! let mut table = PieceTable::new("hello");
//!
//! table.insert(5, " world").unwrap();
//! assert_eq!(table.get_text(), "hello world");
//!
//! table.undo_history();
//! assert_eq!(table.get_text(), "hello");
//! ```

pub use editor_core::config::PieceTableConfig;
pub use editor_core::enums::BufferKind;
pub use editor_core::errors::{PieceTableError, PieceTableResult};
pub use editor_core::history::{History, Snapshot};
pub use editor_core::piece_table::buffers::OriginalBuffer;
pub use editor_core::piece_table::piece::Piece;
pub use editor_core::piece_table::table::PieceTable;
pub use editor_core::piece_table::{BASELINE_CAPACITY, MAX_HISTORY};
pub use io::mmap::MmapFile;
