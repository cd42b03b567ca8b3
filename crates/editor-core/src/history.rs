/// Document state at one point in the edit history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub len: usize,
    pub pieces: Vec<crate::piece_table::piece::Piece>,
}

/// Bounded linear history of full snapshots.
///
/// The entry under the cursor mirrors the live document. Committing discards
/// everything after the cursor; undo and redo only move the cursor.
#[derive(Debug)]
pub struct History {
    entries: std::collections::VecDeque<Snapshot>,
    cursor: usize,
    max_entries: usize,
}

impl History {
    /// Starts a log holding only `initial`. `max_entries` is clamped to one.
    pub fn new(initial: Snapshot, max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        let mut entries = std::collections::VecDeque::with_capacity(max_entries.min(64));

        entries.push_back(initial);

        Self {
            entries,
            cursor: 0,
            max_entries,
        }
    }

    /// Records `snapshot` as the new current state.
    pub fn commit(&mut self, snapshot: Snapshot) {
        let discarded = self.entries.len() - (self.cursor + 1);

        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(snapshot);
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > self.max_entries {
            self.entries.pop_front();
            self.cursor -= 1;

            tracing::debug!(max = self.max_entries, "history full, evicted oldest snapshot");
        }

        tracing::trace!(
            cursor = self.cursor,
            entries = self.entries.len(),
            discarded,
            "committed snapshot"
        );
    }

    /// Steps back one entry and returns the state to restore.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }

        self.cursor -= 1;
        tracing::trace!(cursor = self.cursor, "history backward");

        self.entries.get(self.cursor)
    }

    /// Steps forward one entry and returns the state to restore.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }

        self.cursor += 1;
        tracing::trace!(cursor = self.cursor, "history forward");

        self.entries.get(self.cursor)
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of stored snapshots, the current one included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the log holds at least the current state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    #[inline]
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }
}
