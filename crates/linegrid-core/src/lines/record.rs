//! Line records.
//!
//! A [`LineRecord`] is one editable row of a bill of materials (or SOP,
//! production plan...). Its identity is its position in the row store; the
//! optional host `id` is carried through but never interpreted.

use serde::{Deserialize, Deserializer, Serialize};

/// Stored wastage values up to this bound are fractions, larger ones percents.
pub const WASTAGE_FRACTION_LIMIT: f64 = 1.5;

/// Decimal places kept when a stored fraction is turned back into a percent.
const WASTAGE_PERCENT_PLACES: i32 = 6;

/// Host JSON sends `null` for blank text and flags.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One editable line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, alias = "stock_item_id")]
    pub item_id: Option<i64>,
    #[serde(default, alias = "qty_per_reference_output")]
    pub qty: Option<f64>,
    #[serde(default, alias = "uom_id")]
    pub unit_id: Option<i64>,
    /// Fraction of the quantity lost in processing (0..1).
    #[serde(default, alias = "wastage_pct")]
    pub wastage: Option<f64>,
    #[serde(default, alias = "is_optional", deserialize_with = "null_as_default")]
    pub optional: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remarks: String,
}

/// The editable fields of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineField {
    Item,
    Qty,
    Unit,
    Wastage,
    Optional,
    Remarks,
}

/// A snapshot of one field, used to revert a cancelled edit.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Id(Option<i64>),
    Number(Option<f64>),
    Flag(bool),
    Text(String),
}

impl LineRecord {
    pub fn blank() -> Self {
        Self::default()
    }

    /// True when no field carries data.
    pub fn is_blank(&self) -> bool {
        self.item_id.is_none()
            && self.qty.is_none()
            && self.unit_id.is_none()
            && self.wastage.is_none()
            && !self.optional
            && self.remarks.is_empty()
    }

    /// Wastage as a percentage, rounded so `0.07` reads back as `7`.
    pub fn wastage_percent(&self) -> Option<f64> {
        let scale = 10f64.powi(WASTAGE_PERCENT_PLACES);
        self.wastage.map(|raw| {
            let percent = if raw <= WASTAGE_FRACTION_LIMIT {
                raw * 100.0
            } else {
                raw
            };
            (percent * scale).round() / scale
        })
    }

    pub fn set_item(&mut self, item_id: Option<i64>) {
        self.item_id = item_id;
    }

    pub fn set_qty(&mut self, qty: Option<f64>) {
        self.qty = qty;
    }

    pub fn set_unit(&mut self, unit_id: Option<i64>) {
        self.unit_id = unit_id;
    }

    pub fn set_wastage(&mut self, wastage: Option<f64>) {
        self.wastage = wastage;
    }

    pub fn set_optional(&mut self, optional: bool) {
        self.optional = optional;
    }

    pub fn set_remarks(&mut self, remarks: &str) {
        self.remarks = remarks.to_string();
    }

    pub fn field(&self, field: LineField) -> FieldValue {
        match field {
            LineField::Item => FieldValue::Id(self.item_id),
            LineField::Qty => FieldValue::Number(self.qty),
            LineField::Unit => FieldValue::Id(self.unit_id),
            LineField::Wastage => FieldValue::Number(self.wastage),
            LineField::Optional => FieldValue::Flag(self.optional),
            LineField::Remarks => FieldValue::Text(self.remarks.clone()),
        }
    }

    /// Write a snapshot back. A value of the wrong shape for the field is ignored.
    pub fn restore_field(&mut self, field: LineField, value: FieldValue) {
        match (field, value) {
            (LineField::Item, FieldValue::Id(v)) => self.item_id = v,
            (LineField::Qty, FieldValue::Number(v)) => self.qty = v,
            (LineField::Unit, FieldValue::Id(v)) => self.unit_id = v,
            (LineField::Wastage, FieldValue::Number(v)) => self.wastage = v,
            (LineField::Optional, FieldValue::Flag(v)) => self.optional = v,
            (LineField::Remarks, FieldValue::Text(v)) => self.remarks = v,
            (field, value) => {
                log::warn!("ignoring {:?} snapshot for field {:?}", value, field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        let line = LineRecord::blank();
        assert!(line.is_blank());
        assert_eq!(line.wastage_percent(), None);
    }

    #[test]
    fn test_wastage_percent_has_no_float_noise() {
        let mut line = LineRecord::blank();
        line.set_wastage(Some(0.07));
        assert_eq!(line.wastage_percent(), Some(7.0));
        line.set_wastage(Some(0.0125));
        assert_eq!(line.wastage_percent(), Some(1.25));
        line.set_wastage(Some(12.5));
        assert_eq!(line.wastage_percent(), Some(12.5));
    }

    #[test]
    fn test_deserialize_host_field_names() {
        let json = r#"{
            "id": 17,
            "stock_item_id": 4,
            "qty_per_reference_output": 2.5,
            "uom_id": 3,
            "wastage_pct": 0.02,
            "is_optional": true,
            "remarks": null
        }"#;
        let line: LineRecord = serde_json::from_str(json).unwrap();
        assert_eq!(line.id, Some(17));
        assert_eq!(line.item_id, Some(4));
        assert_eq!(line.qty, Some(2.5));
        assert_eq!(line.unit_id, Some(3));
        assert_eq!(line.wastage, Some(0.02));
        assert!(line.optional);
        assert_eq!(line.remarks, "");
    }

    #[test]
    fn test_deserialize_short_names_and_missing_fields() {
        let line: LineRecord = serde_json::from_str(r#"{"qty": 1, "remarks": "x"}"#).unwrap();
        assert_eq!(line.qty, Some(1.0));
        assert_eq!(line.item_id, None);
        assert!(!line.optional);
        assert_eq!(line.remarks, "x");
    }

    #[test]
    fn test_wastage_percent_threshold() {
        let mut line = LineRecord::blank();
        line.set_wastage(Some(0.05));
        assert!((line.wastage_percent().unwrap() - 5.0).abs() < 1e-9);
        line.set_wastage(Some(12.0));
        assert_eq!(line.wastage_percent(), Some(12.0));
    }

    #[test]
    fn test_field_snapshot_restores_single_field() {
        let mut line = LineRecord::blank();
        line.set_qty(Some(4.0));
        line.set_remarks("keep");
        let snapshot = line.field(LineField::Qty);
        line.set_qty(Some(9.0));
        line.set_remarks("changed");
        line.restore_field(LineField::Qty, snapshot);
        assert_eq!(line.qty, Some(4.0));
        assert_eq!(line.remarks, "changed");
    }

    #[test]
    fn test_restore_mismatched_snapshot_is_ignored() {
        let mut line = LineRecord::blank();
        line.set_qty(Some(1.0));
        line.restore_field(LineField::Qty, FieldValue::Flag(true));
        assert_eq!(line.qty, Some(1.0));
    }
}
