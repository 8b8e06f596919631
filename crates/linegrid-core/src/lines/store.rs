//! The row store.
//!
//! An ordered list of [`LineRecord`]s that is never empty: any operation that
//! would leave it without rows re-seeds a single blank line.

use super::LineRecord;

#[derive(Clone, Debug, PartialEq)]
pub struct RowStore {
    rows: Vec<LineRecord>,
}

impl RowStore {
    /// A store holding one blank line.
    pub fn new() -> Self {
        RowStore {
            rows: vec![LineRecord::blank()],
        }
    }

    pub fn from_records(records: Vec<LineRecord>) -> Self {
        let mut store = RowStore { rows: records };
        store.ensure_seeded();
        store
    }

    fn ensure_seeded(&mut self) {
        if self.rows.is_empty() {
            self.rows.push(LineRecord::blank());
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: the store keeps at least one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&LineRecord> {
        self.rows.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut LineRecord> {
        self.rows.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineRecord> {
        self.rows.iter()
    }

    pub fn records(&self) -> &[LineRecord] {
        &self.rows
    }

    /// Append one blank line and return its index.
    pub fn append(&mut self) -> usize {
        self.rows.push(LineRecord::blank());
        self.rows.len() - 1
    }

    /// Splice `count` blank lines in before `index` (clamped to the end).
    /// Returns the position of the first inserted line.
    pub fn insert_at(&mut self, index: usize, count: usize) -> usize {
        let at = index.min(self.rows.len());
        self.rows
            .splice(at..at, std::iter::repeat_with(LineRecord::blank).take(count));
        at
    }

    /// Remove the given rows. Out-of-range and repeated indices are ignored.
    /// Returns how many rows were removed.
    pub fn remove_at(&mut self, indices: &[usize]) -> usize {
        let mut targets: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.rows.len())
            .collect();
        targets.sort_unstable();
        targets.dedup();
        // High to low so earlier indices stay valid.
        for &i in targets.iter().rev() {
            self.rows.remove(i);
        }
        self.ensure_seeded();
        targets.len()
    }

    /// Swap two adjacent rows. Returns false (and does nothing) otherwise.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i.abs_diff(j) != 1 || i.max(j) >= self.rows.len() {
            return false;
        }
        self.rows.swap(i, j);
        true
    }

    /// Replace every row, e.g. after an external reload.
    pub fn replace_all(&mut self, records: Vec<LineRecord>) {
        self.rows = records;
        self.ensure_seeded();
    }
}

impl Default for RowStore {
    fn default() -> Self {
        Self::new()
    }
}
