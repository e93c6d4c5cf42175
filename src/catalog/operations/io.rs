use crate::catalog::types::Catalog;
use crate::error::{CinegridError, Result};
use crate::paths::catalog_path;

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Demo catalog shipped with the binary
static BUNDLED_CATALOG: &str = include_str!("../../../res/catalog.yaml");

pub fn parse_catalog(yaml: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_yaml::from_str(yaml)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path).map_err(|e| CinegridError::io(path, e))?;
    let catalog: Catalog = serde_yaml::from_reader(BufReader::new(file))?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn bundled_catalog() -> Result<Catalog> {
    parse_catalog(BUNDLED_CATALOG)
}

/// Load an explicitly requested catalog, or the imported one, falling back
/// to the bundled catalog only when nothing was imported
pub fn load_or_bundled(path: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = path {
        tracing::info!(path = %path.display(), "loading requested catalog");
        return load_catalog(path);
    }
    load_imported_or_bundled(&catalog_path())
}

pub fn load_imported_or_bundled(path: &Path) -> Result<Catalog> {
    if path.exists() {
        tracing::info!(path = %path.display(), "loading catalog");
        return load_catalog(path);
    }
    tracing::info!(path = %path.display(), "no catalog file, using bundled catalog");
    bundled_catalog()
}

/// Validate `src` and copy it over the user's catalog file
pub fn import_catalog(src: &Path) -> Result<Catalog> {
    import_catalog_to(src, &catalog_path())
}

pub fn import_catalog_to(src: &Path, dest: &Path) -> Result<Catalog> {
    let catalog = load_catalog(src)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| CinegridError::io(parent, e))?;
    }
    fs::copy(src, dest).map_err(|e| CinegridError::io(PathBuf::from(dest), e))?;

    tracing::info!(
        src = %src.display(),
        items = catalog.items.len(),
        episodes = catalog.episodes.len(),
        "catalog imported"
    );
    Ok(catalog)
}

pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    let mut seen = HashSet::new();
    for item in &catalog.items {
        if item.id.trim().is_empty() {
            return Err(CinegridError::Validation(format!(
                "item '{}' has an empty id",
                item.title
            )));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(CinegridError::Validation(format!(
                "duplicate item id '{}'",
                item.id
            )));
        }
    }

    let mut seen = HashSet::new();
    for episode in &catalog.episodes {
        if !seen.insert(episode.id.as_str()) {
            return Err(CinegridError::Validation(format!(
                "duplicate episode id '{}'",
                episode.id
            )));
        }
    }
    Ok(())
}
