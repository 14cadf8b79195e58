//! Matrix entries

/// Raw `(row, col, value)` triple as it appears in input blocks
///
/// The value is an arbitrary integer; it is narrowed into the ring when a
/// matrix stores it.
pub type Triplet = (usize, usize, i64);

/// A nonzero entry at a logical coordinate
///
/// Ordering is lexicographic on `(row, col)`, which is the order
/// [`SparseMatrix::entries`](crate::SparseMatrix::entries) reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }

    /// Key used to index storage
    pub const fn key(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl From<Triplet> for Entry {
    fn from((row, col, value): Triplet) -> Self {
        Self { row, col, value }
    }
}

impl From<Entry> for Triplet {
    fn from(entry: Entry) -> Self {
        (entry.row, entry.col, entry.value)
    }
}
