//! Column layout.
//!
//! The layout is the fixed, ordered list of columns a grid shows. Column
//! order drives rectangle geometry and arrow navigation, so a layout is
//! validated once at construction and never mutated afterwards.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

use super::CellCoord;
use crate::error::EngineError;

/// Whether a column takes part in selection arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Metadata for one column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn new(key: &str, label: &str, kind: ColumnKind) -> Self {
        ColumnSpec {
            key: key.to_string(),
            label: label.to_string(),
            kind,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }
}

/// An ordered, validated set of columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<ColumnSpec>,
}

fn coord_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?<row>[0-9]+)\s*:\s*(?<key>[A-Za-z_][A-Za-z0-9_]*)\s*$").unwrap()
    })
}

impl ColumnSet {
    /// Build a layout. Empty layouts and duplicate keys are rejected.
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self, EngineError> {
        if columns.is_empty() {
            return Err(EngineError::EmptyLayout);
        }
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(EngineError::DuplicateColumn(column.key.clone()));
            }
        }
        Ok(ColumnSet { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false: a layout holds at least one column.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColumnSpec> {
        self.columns.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter()
    }

    /// Index of the last column.
    pub fn last_index(&self) -> usize {
        self.columns.len() - 1
    }

    /// Clamp a column-order index into the layout.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    /// Column-order index for a key, or `UnknownColumn`.
    pub fn index_of(&self, key: &str) -> Result<usize, EngineError> {
        self.columns
            .iter()
            .position(|c| c.key == key)
            .ok_or_else(|| EngineError::UnknownColumn(key.to_string()))
    }

    /// Key for a column-order index. Out-of-range indices are clamped.
    pub fn key(&self, index: usize) -> &str {
        &self.columns[self.clamp_index(index)].key
    }

    pub fn is_numeric(&self, index: usize) -> bool {
        self.get(index).is_some_and(ColumnSpec::is_numeric)
    }

    /// Format a coordinate as `<row-number>:<column-key>` (1-based row).
    pub fn format_coord(&self, coord: CellCoord) -> String {
        format!("{}:{}", coord.row + 1, self.key(coord.col))
    }

    /// Parse `<row-number>:<column-key>` (1-based row) into a coordinate.
    pub fn parse_coord(&self, text: &str) -> Result<CellCoord, EngineError> {
        let caps = coord_re()
            .captures(text)
            .ok_or_else(|| EngineError::InvalidCoord(text.to_string()))?;
        let row = caps["row"]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| EngineError::InvalidCoord(text.to_string()))?;
        let col = self.index_of(&caps["key"])?;
        Ok(CellCoord::new(row, col))
    }
}
