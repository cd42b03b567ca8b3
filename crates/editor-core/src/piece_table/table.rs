use std::ops::{AddAssign, SubAssign};

use crate::enums::BufferKind;
use crate::errors::{PieceTableError, PieceTableResult};
use crate::history::{History, Snapshot};
use crate::piece_table::buffers::{Buffers, OriginalBuffer, SliceOf};
use crate::piece_table::piece::Piece;

/// A mutable document stored as pieces over two backing buffers.
///
/// Offsets and lengths are byte positions in the document. Every edit that
/// changes the text records a snapshot, so [`PieceTable::undo_history`] and
/// [`PieceTable::redo_history`] restore exact earlier states.
#[derive(Debug)]
pub struct PieceTable {
    buffers: Buffers,
    /// Ordered list of pieces describing the visible document.
    pieces: Vec<Piece>,
    /// Cached sum of all piece lengths.
    len: usize,
    history: History,
    config: crate::config::PieceTableConfig,
}

/*

====================================
========= CREATION METHOD ==========
====================================

*/

impl PieceTable {
    pub fn new(initial: &str) -> Self {
        Self::with_config(initial, crate::config::PieceTableConfig::default())
    }

    pub fn with_config(initial: &str, config: crate::config::PieceTableConfig) -> Self {
        Self::from_original(OriginalBuffer::from(initial), config)
    }

    /// Uses a memory-mapped file as the original buffer.
    pub fn from_mmap(file: io::mmap::MmapFile) -> Self {
        Self::from_original(
            OriginalBuffer::from(file),
            crate::config::PieceTableConfig::default(),
        )
    }

    /// Maps the file at `path` and uses it as the original buffer.
    ///
    /// # Errors
    ///
    /// - [`PieceTableError::Io`] if the file cannot be opened or mapped.
    pub fn open(path: impl AsRef<std::path::Path>) -> PieceTableResult<Self> {
        Ok(Self::from_mmap(io::mmap::MmapFile::open(path)?))
    }

    fn from_original(original: OriginalBuffer, config: crate::config::PieceTableConfig) -> Self {
        let pieces = initial_pieces(&original);
        let len = original.len();

        tracing::debug!(len, "created piece table");

        Self {
            buffers: Buffers::new(original, config.baseline_capacity),
            history: History::new(
                Snapshot {
                    len,
                    pieces: pieces.clone(),
                },
                config.max_history,
            ),
            pieces,
            len,
            config,
        }
    }
}

impl Default for PieceTable {
    fn default() -> Self {
        Self::new("")
    }
}

fn initial_pieces(original: &OriginalBuffer) -> Vec<Piece> {
    if original.is_empty() {
        Vec::new()
    } else {
        vec![Piece::new(BufferKind::Original, 0..original.len())]
    }
}

/*

====================================
========= INLINE METHODS  ==========
====================================

*/

impl PieceTable {
    /// Document length in bytes.
    #[inline]
    pub fn get_len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn config(&self) -> crate::config::PieceTableConfig {
        self.config
    }

    /// Resolves a document offset to the index of the first piece whose
    /// cumulative length reaches it, and the matching position inside that
    /// piece's buffer. An offset on a piece boundary therefore lands at the
    /// end of the earlier piece.
    ///
    /// An empty document resolves offset 0 to `(0, 0)`.
    pub fn locate(&self, offset: usize) -> PieceTableResult<(usize, usize)> {
        let mut remaining = offset;

        for (idx, piece) in self.pieces.iter().enumerate() {
            let piece_len = piece.len();

            if remaining <= piece_len {
                return Ok((idx, piece.range.start + remaining));
            }

            remaining.sub_assign(piece_len);
        }

        if offset == 0 {
            return Ok((0, 0));
        }

        Err(PieceTableError::out_of_range(offset, self.len))
    }

    /// End offset of `offset..offset + length`, if it fits the document.
    fn checked_end(&self, offset: usize, length: usize) -> PieceTableResult<usize> {
        offset
            .checked_add(length)
            .filter(|end| *end <= self.len)
            .ok_or_else(|| PieceTableError::out_of_range(offset.saturating_add(length), self.len))
    }
}

/*

=====================================
========= INSERT / DELETE  ==========
=====================================

*/

impl PieceTable {
    /// Inserts `text` so that it starts at `offset`.
    ///
    /// # Errors
    ///
    /// - [`PieceTableError::OffsetOutOfRange`] if `offset` is past the end.
    pub fn insert(&mut self, offset: usize, text: &str) -> PieceTableResult<()> {
        self.insert_bytes(offset, text.as_bytes())
    }

    /// Byte-level [`PieceTable::insert`].
    ///
    /// # Errors
    ///
    /// - [`PieceTableError::OffsetOutOfRange`] if `offset` is past the end.
    pub fn insert_bytes(&mut self, offset: usize, bytes: &[u8]) -> PieceTableResult<()> {
        if bytes.is_empty() {
            return Ok(());
        }

        if offset > self.len {
            return Err(PieceTableError::out_of_range(offset, self.len));
        }

        self.insert_no_history(offset, bytes)?;
        self.take_snapshot();

        Ok(())
    }

    fn insert_no_history(&mut self, offset: usize, bytes: &[u8]) -> PieceTableResult<()> {
        let (idx, buf_pos) = self.locate(offset)?;
        let added = self.buffers.append(bytes);

        self.len.add_assign(bytes.len());

        let Some(target) = self.pieces.get(idx).cloned() else {
            self.pieces.push(Piece::new(BufferKind::Add, added));

            return Ok(());
        };

        // Typing forward: the text lands right after what this piece
        // already covers in the add buffer.
        if target.buf_kind == BufferKind::Add
            && buf_pos == target.range.end
            && target.range.end == added.start
        {
            self.pieces[idx] = Piece::new(BufferKind::Add, target.range.start..added.end);
            tracing::trace!(offset, len = bytes.len(), "insert extended piece");

            return Ok(());
        }

        let replacement = [
            Piece::new(target.buf_kind, target.range.start..buf_pos),
            Piece::new(BufferKind::Add, added),
            Piece::new(target.buf_kind, buf_pos..target.range.end),
        ];

        self.pieces.splice(
            idx..=idx,
            replacement.into_iter().filter(|piece| !piece.is_empty()),
        );
        tracing::trace!(offset, len = bytes.len(), idx, "insert split piece");

        Ok(())
    }

    /// Removes `length` bytes starting at `offset`. A negative `length`
    /// deletes backward, so `remove(offset, -n)` is `remove(offset - n, n)`.
    ///
    /// # Errors
    ///
    /// - [`PieceTableError::OffsetOutOfRange`] if the range starts before 0
    ///   or ends past the end of the document.
    pub fn remove(&mut self, offset: usize, length: isize) -> PieceTableResult<()> {
        if length == 0 {
            return Ok(());
        }

        let (start, count) = if length < 0 {
            let back = length.unsigned_abs();
            let start = offset.checked_sub(back).ok_or_else(|| {
                PieceTableError::OffsetOutOfRange {
                    offset: isize::try_from(offset)
                        .unwrap_or(isize::MAX)
                        .saturating_add(length),
                    len: self.len,
                }
            })?;

            (start, back)
        } else {
            (offset, length.unsigned_abs())
        };

        self.delete_no_history(start, count)?;
        self.take_snapshot();

        Ok(())
    }

    fn delete_no_history(&mut self, offset: usize, length: usize) -> PieceTableResult<()> {
        let end = self.checked_end(offset, length)?;
        let (start_idx, start_buf) = self.locate(offset)?;
        let (end_idx, end_buf) = self.locate(end)?;

        self.len.sub_assign(length);

        if start_idx == end_idx {
            let piece = self.pieces[start_idx].clone();
            let trimmed = if start_buf == piece.range.start {
                Some(Piece::new(piece.buf_kind, end_buf..piece.range.end))
            } else if end_buf == piece.range.end {
                Some(Piece::new(piece.buf_kind, piece.range.start..start_buf))
            } else {
                None
            };

            if let Some(trimmed) = trimmed {
                if trimmed.is_empty() {
                    self.pieces.remove(start_idx);
                } else {
                    self.pieces[start_idx] = trimmed;
                }

                tracing::trace!(offset, length, "delete trimmed piece");

                return Ok(());
            }
        }

        let start_piece = &self.pieces[start_idx];
        let end_piece = &self.pieces[end_idx];
        let remainders = [
            Piece::new(start_piece.buf_kind, start_piece.range.start..start_buf),
            Piece::new(end_piece.buf_kind, end_buf..end_piece.range.end),
        ];

        self.pieces.splice(
            start_idx..=end_idx,
            remainders.into_iter().filter(|piece| !piece.is_empty()),
        );
        tracing::trace!(offset, length, start_idx, end_idx, "delete spliced pieces");

        Ok(())
    }

    /// Replaces `length` bytes at `offset` with `text` as a single history step.
    ///
    /// # Errors
    ///
    /// - [`PieceTableError::OffsetOutOfRange`] if the range ends past the end.
    pub fn replace(&mut self, offset: usize, length: usize, text: &str) -> PieceTableResult<()> {
        self.checked_end(offset, length)?;

        if length == 0 && text.is_empty() {
            return Ok(());
        }

        if length > 0 {
            self.delete_no_history(offset, length)?;
        }

        if !text.is_empty() {
            self.insert_no_history(offset, text.as_bytes())?;
        }

        self.take_snapshot();

        Ok(())
    }

    fn take_snapshot(&mut self) {
        self.debug_check_invariants();
        self.history.commit(Snapshot {
            len: self.len,
            pieces: self.pieces.clone(),
        });
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            self.pieces.iter().all(|piece| !piece.is_empty()),
            "empty piece left in the piece list"
        );
        debug_assert_eq!(
            self.pieces.iter().map(Piece::len).sum::<usize>(),
            self.len,
            "cached length diverged from piece lengths"
        );
        debug_assert!(
            self.pieces
                .iter()
                .all(|piece| piece.range.end <= self.buffers.len_of(piece.buf_kind)),
            "piece range outside its backing buffer"
        );
    }
}

/*

====================================
=========== UNDO / REDO ============
====================================

*/

impl PieceTable {
    /// Restores the previous snapshot. Returns `false` at the oldest state.
    pub fn undo_history(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };

        self.len = snapshot.len;
        self.pieces.clone_from(&snapshot.pieces);

        true
    }

    /// Restores the next snapshot. Returns `false` at the newest state.
    pub fn redo_history(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };

        self.len = snapshot.len;
        self.pieces.clone_from(&snapshot.pieces);

        true
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

/*

====================================
========== MISCELLANEOUS ===========
====================================

*/

impl PieceTable {
    /// The whole document as raw bytes.
    pub fn get_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.len);

        for piece in &self.pieces {
            res.extend_from_slice(self.buffers.slice_of(piece.buf_kind, piece.range.clone()));
        }

        res
    }

    /// The whole document. Byte sequences that are not valid UTF-8, such as a
    /// character split by an edit, come out as U+FFFD.
    pub fn get_text(&self) -> String {
        String::from_utf8_lossy(&self.get_bytes()).into_owned()
    }

    /// Bytes of `offset..offset + length`, reading only the pieces the range
    /// touches.
    ///
    /// # Errors
    ///
    /// - [`PieceTableError::OffsetOutOfRange`] if the range ends past the end.
    pub fn get_bytes_at(&self, offset: usize, length: usize) -> PieceTableResult<Vec<u8>> {
        let end = self.checked_end(offset, length)?;
        let mut res = Vec::with_capacity(length);

        if length == 0 {
            return Ok(res);
        }

        let (start_idx, start_buf) = self.locate(offset)?;
        let (end_idx, end_buf) = self.locate(end)?;

        for (idx, piece) in self
            .pieces
            .iter()
            .enumerate()
            .take(end_idx + 1)
            .skip(start_idx)
        {
            let from = if idx == start_idx {
                start_buf
            } else {
                piece.range.start
            };
            let to = if idx == end_idx {
                end_buf
            } else {
                piece.range.end
            };

            res.extend_from_slice(self.buffers.slice_of(piece.buf_kind, from..to));
        }

        Ok(res)
    }

    /// Text of `offset..offset + length`, decoded like [`PieceTable::get_text`].
    ///
    /// # Errors
    ///
    /// - [`PieceTableError::OffsetOutOfRange`] if the range ends past the end.
    pub fn get_text_at(&self, offset: usize, length: usize) -> PieceTableResult<String> {
        Ok(String::from_utf8_lossy(&self.get_bytes_at(offset, length)?).into_owned())
    }

    /// Human-readable rendering of both buffers and the piece list.
    pub fn dump(&self) -> String {
        Dump(self).to_string()
    }
}

struct Dump<'a>(&'a PieceTable);

impl std::fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let buffers = &self.0.buffers;

        writeln!(
            f,
            "Original: {}",
            String::from_utf8_lossy(buffers.original.as_bytes())
        )?;
        writeln!(f, "Add:      {}", String::from_utf8_lossy(&buffers.add))?;

        for piece in &self.0.pieces {
            writeln!(f, "{} {} {}", piece.buf_kind, piece.range.start, piece.len())?;
        }

        Ok(())
    }
}

/*

=================
===== RESET =====
=================

*/

impl PieceTable {
    /// Starts over from `text`, as when a new document is opened.
    ///
    /// The add buffer is emptied and shrunk back to its baseline capacity,
    /// and history restarts with the new state as its only entry.
    pub fn reset(&mut self, text: &str) {
        self.reseed(OriginalBuffer::from(text));
    }

    /// Like [`PieceTable::reset`], with a mapped file as the new original.
    pub fn reset_to_mmap(&mut self, file: io::mmap::MmapFile) {
        self.reseed(OriginalBuffer::from(file));
    }

    fn reseed(&mut self, original: OriginalBuffer) {
        let baseline = self.config.baseline_capacity;

        self.pieces = initial_pieces(&original);
        self.len = original.len();
        self.buffers.original = original;
        self.buffers.add.clear();

        if self.buffers.add.capacity() > baseline {
            self.buffers.add.shrink_to(baseline);
        }

        self.history = History::new(
            Snapshot {
                len: self.len,
                pieces: self.pieces.clone(),
            },
            self.config.max_history,
        );

        tracing::debug!(len = self.len, "reset piece table");
    }
}
