pub mod poster_tile;

pub use poster_tile::{chrome_button, poster_tile, TileContent};
