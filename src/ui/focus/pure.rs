pub mod adjacency;
pub mod coords;
pub mod input_map;
pub mod resolver;

// Re-exports
pub use adjacency::{detail_table, home_table, watchlist_table, AdjacencyTable};
pub use coords::{grid_id, GridCoord};
pub use input_map::map_key_to_nav;
pub use resolver::{first_existing, resolve, resolve_traced, Resolved, Strategy};
