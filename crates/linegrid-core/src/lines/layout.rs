//! Binding of grid columns to line fields.

use linegrid_engine::{ColumnKind, ColumnSet, ColumnSpec, EngineError};

use super::{Catalog, CellValue, LineField, LineRecord};

/// Every column a line grid knows how to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineColumn {
    Seq,
    Code,
    Item,
    Qty,
    Unit,
    Wastage,
    Optional,
    Remarks,
}

impl LineColumn {
    pub const ALL: [LineColumn; 8] = [
        LineColumn::Seq,
        LineColumn::Code,
        LineColumn::Item,
        LineColumn::Qty,
        LineColumn::Unit,
        LineColumn::Wastage,
        LineColumn::Optional,
        LineColumn::Remarks,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LineColumn::Seq => "seq",
            LineColumn::Code => "code",
            LineColumn::Item => "item",
            LineColumn::Qty => "qty",
            LineColumn::Unit => "unit",
            LineColumn::Wastage => "wastage",
            LineColumn::Optional => "optional",
            LineColumn::Remarks => "remarks",
        }
    }

    pub fn from_key(key: &str) -> Option<LineColumn> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn default_label(self) -> &'static str {
        match self {
            LineColumn::Seq => "SN",
            LineColumn::Code => "Item Code",
            LineColumn::Item => "Item",
            LineColumn::Qty => "Qty",
            LineColumn::Unit => "UOM",
            LineColumn::Wastage => "Wastage %",
            LineColumn::Optional => "Optional",
            LineColumn::Remarks => "Remarks",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            LineColumn::Qty | LineColumn::Wastage => ColumnKind::Numeric,
            _ => ColumnKind::Categorical,
        }
    }

    /// The record field an edit of this column writes. `None` for `seq`.
    pub fn field(self) -> Option<LineField> {
        match self {
            LineColumn::Seq => None,
            LineColumn::Code | LineColumn::Item => Some(LineField::Item),
            LineColumn::Qty => Some(LineField::Qty),
            LineColumn::Unit => Some(LineField::Unit),
            LineColumn::Wastage => Some(LineField::Wastage),
            LineColumn::Optional => Some(LineField::Optional),
            LineColumn::Remarks => Some(LineField::Remarks),
        }
    }

    pub fn spec(self) -> ColumnSpec {
        ColumnSpec::new(self.key(), self.default_label(), self.kind())
    }
}

/// A validated column set with each column bound to a line field.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    columns: ColumnSet,
    bindings: Vec<LineColumn>,
}

impl Layout {
    /// Bind a column set. A key with no line field behind it is rejected.
    pub fn new(columns: ColumnSet) -> Result<Self, EngineError> {
        let bindings = columns
            .iter()
            .map(|spec| {
                LineColumn::from_key(&spec.key)
                    .ok_or_else(|| EngineError::UnknownColumn(spec.key.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layout { columns, bindings })
    }

    pub fn from_specs(specs: Vec<ColumnSpec>) -> Result<Self, EngineError> {
        Self::new(ColumnSet::new(specs)?)
    }

    /// The standard bill-of-materials layout.
    pub fn bom() -> Self {
        Self::from_specs(LineColumn::ALL.iter().map(|c| c.spec()).collect())
            .expect("built-in layout is valid")
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The column bound at a column-order index (clamped).
    pub fn binding(&self, col: usize) -> LineColumn {
        self.bindings[self.columns.clamp_index(col)]
    }

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    /// Display value of column `col` for the line at `row`.
    pub fn cell_value(&self, row: usize, col: usize, line: &LineRecord, catalog: &Catalog) -> CellValue {
        match self.binding(col) {
            LineColumn::Seq => CellValue::Number((row + 1) as f64),
            LineColumn::Code => line
                .item_id
                .and_then(|id| catalog.item_code(id))
                .map(str::to_string)
                .into(),
            LineColumn::Item => line.item_id.map(|id| catalog.item_name(id)).into(),
            LineColumn::Qty => line.qty.into(),
            LineColumn::Unit => line
                .unit_id
                .and_then(|id| catalog.unit_code(id))
                .map(str::to_string)
                .into(),
            LineColumn::Wastage => line.wastage_percent().into(),
            LineColumn::Optional => {
                CellValue::Text(if line.optional { "Yes" } else { "No" }.to_string())
            }
            LineColumn::Remarks if line.remarks.is_empty() => CellValue::Empty,
            LineColumn::Remarks => CellValue::Text(line.remarks.clone()),
        }
    }

    /// Cell text formatted for the grid. Numbers get fixed precision.
    pub fn display_text(&self, row: usize, col: usize, line: &LineRecord, catalog: &Catalog) -> String {
        match (self.binding(col), self.cell_value(row, col, line, catalog)) {
            (LineColumn::Wastage, CellValue::Number(n)) => format!("{:.2}%", n),
            (_, value) => value.to_string(),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::bom()
    }
}
