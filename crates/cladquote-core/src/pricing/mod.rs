pub mod catalog;
pub mod engine;
pub mod schema;

pub use catalog::{builtin_catalog, load_catalog, validate_catalog};
pub use engine::calculate_quote;
pub use schema::{LineItem, PriceCatalog, QuoteInput, QuoteResult};
