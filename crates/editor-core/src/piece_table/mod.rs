/// # Piece Table Module.
///
/// The document is an ordered list of pieces, each a range into either the
/// original buffer or the append-only add buffer.
pub mod buffers;
pub mod piece;
pub mod table;

/// Default number of snapshots kept by the history log.
pub const MAX_HISTORY: usize = 100;

/// Bytes reserved for the add buffer when a table is created or reset.
pub const BASELINE_CAPACITY: usize = 4 * 1024;
