// Grid coordinate parsing for `<section>-<row>-<col>` focus ids

use crate::ui::focus::types::FocusId;

/// A focus id split into its grid coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCoord {
    pub section: String,
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    pub fn new(section: impl Into<String>, row: usize, col: usize) -> Self {
        Self {
            section: section.into(),
            row,
            col,
        }
    }

    /// Parse `section-row-col`, splitting on the last two dashes so that
    /// sections may themselves contain dashes.
    pub fn parse(id: &FocusId) -> Option<Self> {
        let mut parts = id.as_str().rsplitn(3, '-');
        let col = parts.next()?.parse().ok()?;
        let row = parts.next()?.parse().ok()?;
        let section = parts.next()?;
        if section.is_empty() {
            return None;
        }
        Some(Self::new(section, row, col))
    }

    #[cfg(test)]
    pub fn to_focus_id(&self) -> FocusId {
        grid_id(&self.section, self.row, self.col)
    }

    pub fn in_section(&self, section: &str) -> bool {
        self.section == section
    }
}

/// Build the focus id of a grid tile
pub fn grid_id(section: &str, row: usize, col: usize) -> FocusId {
    FocusId::new(format!("{section}-{row}-{col}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid_id() {
        let coord = GridCoord::parse(&"home-2-7".into()).unwrap();
        assert_eq!(coord, GridCoord::new("home", 2, 7));
        assert_eq!(coord.to_focus_id(), FocusId::from("home-2-7"));
    }

    #[test]
    fn test_parse_dashed_section() {
        let coord = GridCoord::parse(&"top-picks-0-3".into()).unwrap();
        assert_eq!(coord.section, "top-picks");
        assert_eq!((coord.row, coord.col), (0, 3));
    }

    #[test]
    fn test_chrome_ids_are_not_coordinates() {
        assert_eq!(GridCoord::parse(&"hero-play-0".into()), None);
        assert_eq!(GridCoord::parse(&"sidebar-toggle-0".into()), None);
        assert_eq!(GridCoord::parse(&"0-0".into()), None);
        assert_eq!(GridCoord::parse(&"-1-2".into()), None);
        assert_eq!(GridCoord::parse(&"home-x-2".into()), None);
    }
}
