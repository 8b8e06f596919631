//! Item and unit lookup tables supplied by the host.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::record::null_as_default;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CatalogUnit {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<CatalogItem>,
    #[serde(default)]
    units: Vec<CatalogUnit>,
}

/// Items and units indexed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "CatalogFile")]
pub struct Catalog {
    items: BTreeMap<i64, CatalogItem>,
    units: BTreeMap<i64, CatalogUnit>,
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        Catalog::new(file.items, file.units)
    }
}

impl Catalog {
    /// Later entries win on duplicate ids.
    pub fn new(items: Vec<CatalogItem>, units: Vec<CatalogUnit>) -> Self {
        Catalog {
            items: items.into_iter().map(|i| (i.id, i)).collect(),
            units: units.into_iter().map(|u| (u.id, u)).collect(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn item_code(&self, id: i64) -> Option<&str> {
        self.items
            .get(&id)
            .map(|i| i.code.as_str())
            .filter(|c| !c.is_empty())
    }

    /// Item name, falling back to `Item #<id>` for ids the catalog lacks.
    pub fn item_name(&self, id: i64) -> String {
        match self.items.get(&id) {
            Some(item) if !item.name.is_empty() => item.name.clone(),
            _ => format!("Item #{}", id),
        }
    }

    pub fn unit_code(&self, id: i64) -> Option<&str> {
        self.units
            .get(&id)
            .map(|u| u.code.as_str())
            .filter(|c| !c.is_empty())
    }

    /// Resolve typed text to an item: code, then name (both case-insensitive),
    /// then a numeric id.
    pub fn find_item(&self, text: &str) -> Option<i64> {
        let text = text.trim();
        self.items
            .values()
            .find(|i| i.code.eq_ignore_ascii_case(text))
            .or_else(|| self.items.values().find(|i| i.name.eq_ignore_ascii_case(text)))
            .map(|i| i.id)
            .or_else(|| text.parse::<i64>().ok())
    }

    /// Resolve typed text to a unit by code (case-insensitive) or numeric id.
    pub fn find_unit(&self, text: &str) -> Option<i64> {
        let text = text.trim();
        self.units
            .values()
            .find(|u| u.code.eq_ignore_ascii_case(text))
            .map(|u| u.id)
            .or_else(|| text.parse::<i64>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        serde_json::from_str(
            r#"{
                "items": [
                    {"id": 1, "code": "RM-001", "name": "Steel Sheet"},
                    {"id": 2, "code": "RM-002", "name": null}
                ],
                "units": [{"id": 7, "code": "KG"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let cat = catalog();
        assert_eq!(cat.item_count(), 2);
        assert_eq!(cat.item_code(1), Some("RM-001"));
        assert_eq!(cat.item_name(1), "Steel Sheet");
        assert_eq!(cat.unit_code(7), Some("KG"));
        assert_eq!(cat.unit_code(8), None);
    }

    #[test]
    fn test_item_name_fallback() {
        let cat = catalog();
        assert_eq!(cat.item_name(2), "Item #2");
        assert_eq!(cat.item_name(99), "Item #99");
    }

    #[test]
    fn test_find_item_and_unit() {
        let cat = catalog();
        assert_eq!(cat.find_item("rm-002"), Some(2));
        assert_eq!(cat.find_item("steel sheet"), Some(1));
        assert_eq!(cat.find_item("42"), Some(42));
        assert_eq!(cat.find_item("nothing"), None);
        assert_eq!(cat.find_unit("kg"), Some(7));
        assert_eq!(cat.find_unit("lb"), None);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let cat: Catalog = serde_json::from_str("{}").unwrap();
        assert_eq!(cat, Catalog::default());
    }
}
