//! Selection summaries.
//!
//! One numeric column gets sum/avg/min/max over its finite values, one
//! categorical column gets a distinct-value count, several columns get a cell
//! count per column. Nothing is ever added across columns.

use linegrid_engine::{CellCoord, ColumnSet};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::lines::CellValue;

/// Arithmetic over one numeric column.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericStats {
    /// Selected cells, blanks included.
    pub count: usize,
    /// Cells holding a finite number.
    pub arithmetic_count: usize,
    pub sum: f64,
    pub avg: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericStats {
    pub fn from_values(values: &[CellValue]) -> Self {
        let numbers: Vec<f64> = values.iter().filter_map(CellValue::as_number).collect();
        let sum: f64 = numbers.iter().sum();
        let avg = (!numbers.is_empty()).then(|| sum / numbers.len() as f64);
        NumericStats {
            count: values.len(),
            arithmetic_count: numbers.len(),
            sum,
            avg,
            min: numbers.iter().copied().reduce(f64::min),
            max: numbers.iter().copied().reduce(f64::max),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnCount {
    pub column: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SummaryDetail {
    Empty,
    Numeric {
        column: String,
        stats: NumericStats,
    },
    Categorical {
        column: String,
        count: usize,
        unique: usize,
    },
    /// Cells per column, in column order.
    PerColumn(Vec<ColumnCount>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSummary {
    pub total_lines: usize,
    pub selected: usize,
    pub detail: SummaryDetail,
}

/// A label/value pair for the status area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pill {
    pub label: String,
    pub value: String,
}

impl Pill {
    fn new(label: &str, value: impl ToString) -> Self {
        Pill {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Summarize `selected`, reading each cell through `value_of`.
pub fn summarize<F>(
    columns: &ColumnSet,
    total_lines: usize,
    selected: &BTreeSet<CellCoord>,
    mut value_of: F,
) -> SelectionSummary
where
    F: FnMut(CellCoord) -> CellValue,
{
    let mut by_column: BTreeMap<usize, Vec<CellCoord>> = BTreeMap::new();
    for coord in selected {
        by_column.entry(coord.col).or_default().push(*coord);
    }

    let detail = if by_column.len() > 1 {
        SummaryDetail::PerColumn(
            by_column
                .iter()
                .map(|(&col, cells)| ColumnCount {
                    column: columns.key(col).to_string(),
                    count: cells.len(),
                })
                .collect(),
        )
    } else if let Some((&col, cells)) = by_column.first_key_value() {
        let column = columns.key(col).to_string();
        let values: Vec<CellValue> = cells.iter().map(|c| value_of(*c)).collect();
        if columns.is_numeric(col) {
            SummaryDetail::Numeric {
                column,
                stats: NumericStats::from_values(&values),
            }
        } else {
            let unique: HashSet<String> = values.iter().map(|v| v.to_string()).collect();
            SummaryDetail::Categorical {
                column,
                count: values.len(),
                unique: unique.len(),
            }
        }
    } else {
        SummaryDetail::Empty
    };

    SelectionSummary {
        total_lines,
        selected: selected.len(),
        detail,
    }
}

impl SelectionSummary {
    /// Status pills. Numbers show three decimals; a numeric column with no
    /// usable values shows no arithmetic pills.
    pub fn pills(&self) -> Vec<Pill> {
        let mut pills = vec![Pill::new("Lines", self.total_lines)];
        if self.selected == 0 {
            return pills;
        }
        pills.push(Pill::new("Selected", self.selected));
        match &self.detail {
            SummaryDetail::Empty => {}
            SummaryDetail::Numeric { stats, .. } => {
                if let (Some(avg), Some(min), Some(max)) = (stats.avg, stats.min, stats.max) {
                    pills.push(Pill::new("Sum", format!("{:.3}", stats.sum)));
                    pills.push(Pill::new("Avg", format!("{:.3}", avg)));
                    pills.push(Pill::new("Min", format!("{:.3}", min)));
                    pills.push(Pill::new("Max", format!("{:.3}", max)));
                }
            }
            SummaryDetail::Categorical { unique, .. } => {
                pills.push(Pill::new("Unique", unique));
            }
            SummaryDetail::PerColumn(counts) => {
                pills.extend(counts.iter().map(|c| Pill::new(&c.column, c.count)));
            }
        }
        pills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linegrid_engine::{ColumnKind, ColumnSpec};

    fn columns() -> ColumnSet {
        ColumnSet::new(vec![
            ColumnSpec::new("qty", "Qty", ColumnKind::Numeric),
            ColumnSpec::new("remarks", "Remarks", ColumnKind::Categorical),
        ])
        .unwrap()
    }

    fn qty_cells(n: usize) -> BTreeSet<CellCoord> {
        (0..n).map(|r| CellCoord::new(r, 0)).collect()
    }

    #[test]
    fn test_empty_selection_is_neutral() {
        let summary = summarize(&columns(), 4, &BTreeSet::new(), |_| CellValue::Empty);
        assert_eq!(summary.selected, 0);
        assert_eq!(summary.detail, SummaryDetail::Empty);
        assert_eq!(summary.pills(), vec![Pill::new("Lines", 4)]);
    }

    #[test]
    fn test_numeric_column_stats() {
        let values = [2.0, 4.0, 6.0];
        let summary = summarize(&columns(), 3, &qty_cells(3), |c| {
            CellValue::Number(values[c.row])
        });
        let SummaryDetail::Numeric { column, stats } = summary.detail else {
            panic!("expected numeric detail");
        };
        assert_eq!(column, "qty");
        assert_eq!(stats.count, 3);
        assert_eq!(stats.sum, 12.0);
        assert_eq!(stats.avg, Some(4.0));
        assert_eq!(stats.min, Some(2.0));
        assert_eq!(stats.max, Some(6.0));
    }

    #[test]
    fn test_numeric_blanks_counted_but_not_summed() {
        let values = [CellValue::Number(2.0), CellValue::Empty, CellValue::Number(6.0)];
        let stats = NumericStats::from_values(&values);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.arithmetic_count, 2);
        assert_eq!(stats.sum, 8.0);
        assert_eq!(stats.avg, Some(4.0));
    }

    #[test]
    fn test_numeric_pills_three_decimals() {
        let summary = summarize(&columns(), 2, &qty_cells(2), |c| {
            CellValue::Number(if c.row == 0 { 1.5 } else { 0.25 })
        });
        let pills = summary.pills();
        let labels: Vec<&str> = pills.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Lines", "Selected", "Sum", "Avg", "Min", "Max"]);
        assert_eq!(pills[2].value, "1.750");
        assert_eq!(pills[4].value, "0.250");
    }

    #[test]
    fn test_all_blank_numeric_column_has_no_arithmetic_pills() {
        let summary = summarize(&columns(), 2, &qty_cells(2), |_| CellValue::Empty);
        assert_eq!(summary.pills().len(), 2);
    }

    #[test]
    fn test_categorical_unique_count() {
        let cells: BTreeSet<CellCoord> = (0..4).map(|r| CellCoord::new(r, 1)).collect();
        let texts = ["a", "b", "a", ""];
        let summary = summarize(&columns(), 4, &cells, |c| {
            if texts[c.row].is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(texts[c.row].to_string())
            }
        });
        assert_eq!(
            summary.detail,
            SummaryDetail::Categorical {
                column: "remarks".into(),
                count: 4,
                unique: 3
            }
        );
        assert_eq!(summary.pills().last().unwrap(), &Pill::new("Unique", 3));
    }

    #[test]
    fn test_multiple_columns_only_count() {
        let cells = BTreeSet::from([
            CellCoord::new(0, 0),
            CellCoord::new(0, 1),
            CellCoord::new(1, 1),
        ]);
        let summary = summarize(&columns(), 2, &cells, |_| CellValue::Number(1.0));
        assert_eq!(
            summary.detail,
            SummaryDetail::PerColumn(vec![
                ColumnCount {
                    column: "qty".into(),
                    count: 1
                },
                ColumnCount {
                    column: "remarks".into(),
                    count: 2
                },
            ])
        );
    }
}
