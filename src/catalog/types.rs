//! Catalog entities: movies, series, anime and their episodes

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
    Anime,
}

impl MediaKind {
    /// Home grid row order
    pub const ROW_ORDER: [MediaKind; 3] = [MediaKind::Movie, MediaKind::Series, MediaKind::Anime];

    pub fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movies",
            Self::Series => "Series",
            Self::Anime => "Anime",
        }
    }

    /// Whether items of this kind have episodes
    pub fn is_episodic(self) -> bool {
        !matches!(self, Self::Movie)
    }
}

/// A movie, series or anime title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub kind: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    /// Movies play this directly; episodic titles usually leave it empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
    /// Eligible for the hero banner
    #[serde(default)]
    pub featured: bool,
}

/// One episode of a series or anime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    /// Parent item id, when the uploader linked it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<String>,
    /// Parent title, used when `series_id` is missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_title: Option<String>,
    #[serde(default = "default_season")]
    pub season: u32,
    pub number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
}

fn default_season() -> u32 {
    1
}

impl Episode {
    /// Short label such as `S1 E4`
    pub fn code(&self) -> String {
        format!("S{} E{}", self.season, self.number)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

impl Catalog {
    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
