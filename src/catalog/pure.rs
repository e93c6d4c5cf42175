pub mod episode_match;
pub mod rows;

// Re-exports
pub use episode_match::{belongs_to, episodes_for, normalize_title, seasons};
pub use rows::{chunk_rows, featured_pick, genre_counts, has_genre, home_rows, CatalogRow};
