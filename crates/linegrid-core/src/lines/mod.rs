//! Line records, the row store and how columns read them.

mod catalog;
mod layout;
mod record;
mod store;
mod value;

pub use catalog::{Catalog, CatalogItem, CatalogUnit};
pub use layout::{Layout, LineColumn};
pub use record::{FieldValue, LineField, LineRecord, WASTAGE_FRACTION_LIMIT};
pub use store::RowStore;
pub use value::CellValue;
