pub mod operations;
pub mod pure;
pub mod types;
pub mod watchlist;


// Re-exports
pub use operations::{import_catalog, load_or_bundled};
pub use types::{Catalog, CatalogItem, Episode, MediaKind};
pub use watchlist::{load_watchlist, save_watchlist, Watchlist};
