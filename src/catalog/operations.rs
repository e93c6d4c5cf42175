pub mod io;

// Re-exports
pub use io::{
    bundled_catalog, import_catalog, import_catalog_to, load_catalog, load_imported_or_bundled,
    load_or_bundled, parse_catalog, validate_catalog,
};
