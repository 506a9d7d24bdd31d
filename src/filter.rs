//! # Tile filter
//!
//! Live search over the rendered order tiles. Each item tile carries a stable
//! [`TileId`] derived from the item name; a query hides every tile whose id
//! does not contain it.
//!
//! The reducer [`apply_filter`] is pure: the server runs it for the initial
//! `?q=` query and the page script repeats the same rule on every keystroke.
//! The total row has no tile id and is never filtered.

use std::collections::HashMap;
use std::fmt;

/// Single-token identifier of an item tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileId(String);

impl TileId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercases the name and joins its whitespace-separated words with `_`.
///
/// `"Ser  Żółty\tGouda"` becomes `"ser_żółty_gouda"`. Leading, trailing and
/// repeated whitespace all collapse, so names differing only in spacing share
/// an id; [`crate::domain::Order`] rejects such pairs.
pub fn tile_id(name: &str) -> TileId {
    TileId(name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

pub type VisibilityMap = HashMap<TileId, Visibility>;

/// Computes the visibility of every tile for `query`.
///
/// The query is lowercased and otherwise used verbatim (no trimming), so any
/// character is a literal. An empty query shows everything.
pub fn apply_filter<'a, I>(query: &str, tiles: I) -> VisibilityMap
where
    I: IntoIterator<Item = &'a TileId>,
{
    let needle = query.to_lowercase();
    tiles
        .into_iter()
        .map(|tile| {
            let visibility = if needle.is_empty() || tile.as_str().to_lowercase().contains(&needle) {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
            (tile.clone(), visibility)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn tiles(names: &[&str]) -> Vec<TileId> {
        names.iter().map(|name| tile_id(name)).collect()
    }

    fn visible(map: &VisibilityMap) -> BTreeSet<&str> {
        map.iter()
            .filter(|(_, visibility)| visibility.is_visible())
            .map(|(tile, _)| tile.as_str())
            .collect()
    }

    #[test]
    fn test_tile_id_collapses_whitespace_and_case() {
        assert_eq!(tile_id("Jabłka").as_str(), "jabłka");
        assert_eq!(tile_id("Ser  Żółty\tGouda").as_str(), "ser_żółty_gouda");
        assert_eq!(tile_id("  Mleko 3,2% ").as_str(), "mleko_3,2%");
    }

    #[test]
    fn test_tile_id_is_deterministic() {
        assert_eq!(tile_id("Chleb Żytni"), tile_id("Chleb Żytni"));
        assert_ne!(tile_id("Chleb Żytni"), tile_id("Chleb Pszenny"));
    }

    #[test]
    fn test_query_selects_matching_tiles() {
        let tiles = tiles(&["Jabłka", "Mleko"]);
        let map = apply_filter("mle", &tiles);
        assert_eq!(visible(&map), BTreeSet::from(["mleko"]));
        assert_eq!(map[&tile_id("Jabłka")], Visibility::Hidden);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let tiles = tiles(&["Jabłka", "Mleko"]);
        assert_eq!(visible(&apply_filter("JAB", &tiles)), BTreeSet::from(["jabłka"]));
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let tiles = tiles(&["Ser Żółty"]);
        assert_eq!(visible(&apply_filter("ser ", &tiles)), BTreeSet::new());
        assert_eq!(visible(&apply_filter("ser_", &tiles)), BTreeSet::from(["ser_żółty"]));
    }

    #[test]
    fn test_special_characters_are_literal() {
        let tiles = tiles(&["Mleko 3,2%", "Masło"]);
        assert_eq!(visible(&apply_filter("3,2%", &tiles)), BTreeSet::from(["mleko_3,2%"]));
        assert_eq!(visible(&apply_filter(".*", &tiles)), BTreeSet::new());
    }

    #[test]
    fn test_no_tiles_gives_empty_map() {
        assert!(apply_filter("anything", &Vec::<TileId>::new()).is_empty());
    }

    proptest! {
        #[test]
        fn prop_empty_query_shows_everything(names in prop::collection::vec("[a-zA-Zżółć ]{1,12}", 0..8)) {
            let tiles: Vec<TileId> = names.iter().map(|name| tile_id(name)).collect();
            let map = apply_filter("", &tiles);
            prop_assert!(map.values().all(|visibility| visibility.is_visible()));
        }

        #[test]
        fn prop_filter_is_idempotent(
            names in prop::collection::vec("[a-zA-Zżółć ]{1,12}", 0..8),
            query in "[a-zżó _]{0,4}",
        ) {
            let tiles: Vec<TileId> = names.iter().map(|name| tile_id(name)).collect();
            let once = apply_filter(&query, &tiles);
            let twice = apply_filter(&query, &tiles);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_visible_iff_substring(
            names in prop::collection::vec("[a-zA-Zżółć ]{1,12}", 1..8),
            query in "[a-zA-Zżó _]{0,4}",
        ) {
            let tiles: Vec<TileId> = names.iter().map(|name| tile_id(name)).collect();
            let map = apply_filter(&query, &tiles);
            let needle = query.to_lowercase();
            for tile in &tiles {
                let expected = tile.as_str().to_lowercase().contains(&needle);
                prop_assert_eq!(map[tile].is_visible(), expected);
            }
        }
    }
}
