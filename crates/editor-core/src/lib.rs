//! Piece-table text buffer with bounded snapshot undo/redo.
//!
//! A document is an ordered list of [`piece_table::piece::Piece`]s pointing into
//! two backing buffers: the immutable original text and an append-only add
//! buffer. Every successful edit records a snapshot in [`history::History`].

pub mod config;
pub mod enums;
pub mod errors;
pub mod history;
pub mod piece_table;
