// Matching uploaded episodes to their parent series

use crate::catalog::types::{CatalogItem, Episode};
use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

/// Lowercase and collapse punctuation/whitespace runs into single spaces
pub fn normalize_title(title: &str) -> String {
    NON_ALNUM
        .replace_all(&title.to_lowercase(), " ")
        .trim()
        .to_string()
}

/// Whether `episode` belongs to `item`.
///
/// An explicit `series_id` is authoritative. Episodes without one fall back
/// to comparing normalised series titles.
pub fn belongs_to(item: &CatalogItem, episode: &Episode) -> bool {
    match (&episode.series_id, &episode.series_title) {
        (Some(series_id), _) => *series_id == item.id,
        (None, Some(series_title)) => {
            let wanted = normalize_title(series_title);
            !wanted.is_empty() && wanted == normalize_title(&item.title)
        }
        (None, None) => false,
    }
}

/// Episodes of `item`, ordered by season then episode number
pub fn episodes_for<'a>(item: &CatalogItem, episodes: &'a [Episode]) -> Vec<&'a Episode> {
    if !item.kind.is_episodic() {
        return Vec::new();
    }
    let mut matched: Vec<&Episode> = episodes.iter().filter(|ep| belongs_to(item, ep)).collect();
    matched.sort_by_key(|ep| (ep.season, ep.number));
    matched
}

/// Group sorted episodes into one row per season
pub fn seasons<'a>(episodes: &[&'a Episode]) -> Vec<(u32, Vec<&'a Episode>)> {
    let mut rows: Vec<(u32, Vec<&'a Episode>)> = Vec::new();
    for ep in episodes {
        if let Some((season, row)) = rows.last_mut()
            && *season == ep.season
        {
            row.push(*ep);
            continue;
        }
        rows.push((ep.season, vec![*ep]));
    }
    rows
}
