pub mod aggregate;
pub mod display;
pub mod error;

pub use aggregate::{parse_product_list, ParsedProductList, ProductRecord};
pub use display::{resolve_display, try_resolve_display, DerivedDisplay, StyleVariant};
pub use error::ProductRecordError;
