// Arranging catalog items into grid rows

use crate::catalog::types::{CatalogItem, MediaKind};
use std::collections::{BTreeMap, BTreeSet};

/// One home-grid row: a kind and its items in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow<'a> {
    pub kind: MediaKind,
    pub items: Vec<&'a CatalogItem>,
}

/// Rows in Movies / Series / Anime order, empty kinds dropped so row
/// indices stay dense
pub fn home_rows(items: &[CatalogItem]) -> Vec<CatalogRow<'_>> {
    MediaKind::ROW_ORDER
        .iter()
        .map(|&kind| CatalogRow {
            kind,
            items: items.iter().filter(|item| item.kind == kind).collect(),
        })
        .filter(|row| !row.items.is_empty())
        .collect()
}

/// Split a flat list into rows of at most `per_row` items
pub fn chunk_rows<T>(items: &[T], per_row: usize) -> Vec<&[T]> {
    items.chunks(per_row.max(1)).collect()
}

/// Pick the hero item: a featured one when available, otherwise any.
/// `seed` selects among the candidates.
pub fn featured_pick(items: &[CatalogItem], seed: usize) -> Option<&CatalogItem> {
    let featured: Vec<&CatalogItem> = items.iter().filter(|item| item.featured).collect();
    let pool: Vec<&CatalogItem> = if featured.is_empty() {
        items.iter().collect()
    } else {
        featured
    };
    if pool.is_empty() {
        return None;
    }
    Some(pool[seed % pool.len()])
}

/// Case-insensitive genre key, shared by the sidebar and the row filter
pub fn genre_key(genre: &str) -> String {
    genre.trim().to_lowercase()
}

/// Whether `item` is tagged with `genre`, ignoring case
pub fn has_genre(item: &CatalogItem, genre: &str) -> bool {
    let wanted = genre_key(genre);
    item.genres.iter().any(|g| genre_key(g) == wanted)
}

/// Genre keys across `items`, sorted, with the number of items tagged
pub fn genre_counts(items: &[CatalogItem]) -> Vec<(String, usize)> {
    let mut counts = BTreeMap::<String, usize>::new();
    for item in items {
        let keys: BTreeSet<String> = item.genres.iter().map(|g| genre_key(g)).collect();
        for key in keys {
            *counts.entry(key).or_default() += 1;
        }
    }
    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, kind: MediaKind, featured: bool) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            title: id.to_uppercase(),
            kind,
            year: None,
            genres: vec![],
            synopsis: String::new(),
            poster_url: None,
            stream_url: None,
            featured,
        }
    }

    #[test]
    fn test_home_rows_order_and_density() {
        let items = vec![
            item("a1", MediaKind::Anime, false),
            item("m1", MediaKind::Movie, false),
            item("a2", MediaKind::Anime, false),
        ];
        let rows = home_rows(&items);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, MediaKind::Movie);
        assert_eq!(rows[1].kind, MediaKind::Anime);
        let anime: Vec<&str> = rows[1].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(anime, vec!["a1", "a2"]);
    }

    #[test]
    fn test_chunk_rows() {
        let ids = [1, 2, 3, 4, 5, 6, 7];
        let rows = chunk_rows(&ids, 3);
        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7][..]]);
        assert_eq!(chunk_rows(&ids, 0).len(), 7);
    }

    #[test]
    fn test_non_ascii_genre_filter_matches_sidebar() {
        let mut sci = item("m1", MediaKind::Movie, false);
        sci.genres = vec!["CIÊNCIA".to_string(), "Ciência".to_string()];
        let mut drama = item("m2", MediaKind::Movie, false);
        drama.genres = vec!["Drama".to_string()];
        let items = vec![sci, drama];

        let counts = genre_counts(&items);
        assert_eq!(
            counts,
            vec![("ciência".to_string(), 1), ("drama".to_string(), 1)]
        );

        // Every listed genre selects the items it counted
        for (genre, count) in &counts {
            let hits = items.iter().filter(|i| has_genre(i, genre)).count();
            assert_eq!(hits, *count, "{genre}");
        }
        assert!(!has_genre(&items[1], "ciência"));
    }

    #[test]
    fn test_featured_pick_prefers_featured() {
        let items = vec![
            item("m1", MediaKind::Movie, false),
            item("m2", MediaKind::Movie, true),
        ];
        for seed in 0..4 {
            assert_eq!(featured_pick(&items, seed).unwrap().id, "m2");
        }
    }

    #[test]
    fn test_featured_pick_falls_back() {
        let items = vec![
            item("m1", MediaKind::Movie, false),
            item("m2", MediaKind::Movie, false),
        ];
        assert_eq!(featured_pick(&items, 3).unwrap().id, "m2");
        assert!(featured_pick(&[], 0).is_none());
    }
}
