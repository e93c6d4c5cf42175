mod app;
mod app_panels;
mod focus;
mod pages_detail;
mod pages_home;
mod pages_watchlist;

pub use app::Cinegrid;
