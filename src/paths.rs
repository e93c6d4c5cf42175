use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> = LazyLock::new(|| {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir)
});

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".local/share"));

/// Data directory holding settings, the catalog and the watchlist
pub static PATH_CINEGRID: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data_home).join("cinegrid");
    }
    PATH_LOCAL_SHARE.join("cinegrid")
});

pub fn settings_path() -> PathBuf {
    PATH_CINEGRID.join("settings.json")
}

pub fn catalog_path() -> PathBuf {
    PATH_CINEGRID.join("catalog.yaml")
}

pub fn watchlist_path() -> PathBuf {
    PATH_CINEGRID.join("watchlist.json")
}
