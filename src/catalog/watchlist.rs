//! Per-user watchlist, persisted as JSON in the data directory

use crate::catalog::types::{Catalog, CatalogItem};
use crate::error::{CinegridError, Result};
use crate::paths::watchlist_path;

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Ordered set of item ids, most recently added last
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    #[serde(default)]
    ids: Vec<String>,
}

impl Watchlist {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// Add or remove `id`; returns whether it is now on the list
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|x| x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Items still present in the catalog, in watchlist order
    pub fn items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogItem> {
        self.ids.iter().filter_map(|id| catalog.item(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

pub fn load_watchlist() -> Watchlist {
    load_watchlist_from(&watchlist_path())
}

/// A missing or unreadable file yields an empty list
pub fn load_watchlist_from(path: &Path) -> Watchlist {
    let Ok(file) = File::open(path) else {
        return Watchlist::default();
    };
    match serde_json::from_reader(BufReader::new(file)) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt watchlist");
            Watchlist::default()
        }
    }
}

pub fn save_watchlist(list: &Watchlist) -> Result<()> {
    save_watchlist_to(list, &watchlist_path())
}

pub fn save_watchlist_to(list: &Watchlist, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CinegridError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| CinegridError::io(path, e))?;
    serde_json::to_writer_pretty(file, list)?;
    Ok(())
}
