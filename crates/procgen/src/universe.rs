//! The sector grid handed to the map shell.

use crate::name::NameModel;
use crate::star_system::StarSystem;
use thiserror::Error;

/// Errors rejected while building a [`Universe`] window.
#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("sector size must be positive, got {0}")]
    InvalidSectorSize(i64),
    /// Extents must divide evenly into sectors; truncating silently would
    /// shift which coordinates the map shows.
    #[error("extent {extent} is not divisible by sector size {sector_size}")]
    UnevenExtent { extent: i64, sector_size: i64 },
}

/// A rectangular window of sectors in row-major order (y outer, x inner),
/// each cell evaluated eagerly but left unexpanded.
///
/// Re-querying the same window reproduces identical existence and star
/// attributes for every cell — returning to the same place shows the same
/// stars.
#[derive(Debug, Clone)]
pub struct Universe {
    origin_x: i64,
    origin_y: i64,
    cols: usize,
    rows: usize,
    systems: Vec<StarSystem>,
}

impl Universe {
    /// Build the grid for an `extent_x` x `extent_y` window split into
    /// `sector_size`-unit sectors, with `(origin_x, origin_y)` as the
    /// top-left sector coordinate.
    pub fn generate(
        extent_x: i64,
        extent_y: i64,
        sector_size: i64,
        origin_x: i64,
        origin_y: i64,
        names: &NameModel,
    ) -> Result<Self, UniverseError> {
        if sector_size <= 0 {
            return Err(UniverseError::InvalidSectorSize(sector_size));
        }
        for extent in [extent_x, extent_y] {
            if extent < 0 || extent % sector_size != 0 {
                return Err(UniverseError::UnevenExtent {
                    extent,
                    sector_size,
                });
            }
        }

        let cols = (extent_x / sector_size) as usize;
        let rows = (extent_y / sector_size) as usize;

        let mut systems = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                systems.push(StarSystem::new(
                    origin_x + col as i64,
                    origin_y + row as i64,
                    false,
                    names,
                ));
            }
        }

        let star_count = systems.iter().filter(|s| s.exists()).count();
        log::debug!("generated {cols}x{rows} sector window, {star_count} stars");

        Ok(Self {
            origin_x,
            origin_y,
            cols,
            rows,
            systems,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn origin(&self) -> (i64, i64) {
        (self.origin_x, self.origin_y)
    }

    /// Cell at grid position, or `None` outside the window.
    pub fn at(&self, col: usize, row: usize) -> Option<&StarSystem> {
        if col < self.cols && row < self.rows {
            self.systems.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn systems(&self) -> impl Iterator<Item = &StarSystem> {
        self.systems.iter()
    }

    /// Snapshot-select a sector: clone the cell and expand the clone. The
    /// grid itself is never mutated by selection, so a later hover over the
    /// same cell still sees the cheap unexpanded form.
    pub fn select(&self, col: usize, row: usize) -> Option<StarSystem> {
        self.at(col, row).map(|cell| {
            let mut snapshot = cell.clone();
            snapshot.generate_system();
            snapshot
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_names() -> NameModel {
        NameModel::from_corpus("ka-to\nlu-ra\nzo-mi-den\n").unwrap()
    }

    /// Same window parameters, cell-by-cell identical results.
    #[test]
    fn grid_deterministic_across_queries() {
        let names = test_names();
        let a = Universe::generate(500, 500, 50, 0, 0, &names).unwrap();
        let b = Universe::generate(500, 500, 50, 0, 0, &names).unwrap();
        assert_eq!(a.cols(), 10);
        assert_eq!(a.rows(), 10);
        for (cell_a, cell_b) in a.systems().zip(b.systems()) {
            assert_eq!(cell_a.exists(), cell_b.exists());
            assert_eq!(cell_a.star_diameter(), cell_b.star_diameter());
            assert_eq!(cell_a.star_color(), cell_b.star_color());
        }
    }

    #[test]
    fn layout_is_row_major_with_origin_offset() {
        let names = test_names();
        let universe = Universe::generate(30, 20, 10, 100, -40, &names).unwrap();
        assert_eq!(universe.cols(), 3);
        assert_eq!(universe.rows(), 2);
        let cell = universe.at(2, 1).unwrap();
        assert_eq!((cell.x(), cell.y()), (102, -39));
        // row-major: the fourth element starts the second row
        let fourth = universe.systems().nth(3).unwrap();
        assert_eq!((fourth.x(), fourth.y()), (100, -39));
    }

    #[test]
    fn uneven_extent_rejected() {
        let names = test_names();
        let err = Universe::generate(105, 100, 10, 0, 0, &names).unwrap_err();
        assert!(matches!(
            err,
            UniverseError::UnevenExtent { extent: 105, sector_size: 10 }
        ));
    }

    #[test]
    fn non_positive_sector_size_rejected() {
        let names = test_names();
        assert!(matches!(
            Universe::generate(100, 100, 0, 0, 0, &names),
            Err(UniverseError::InvalidSectorSize(0))
        ));
        assert!(matches!(
            Universe::generate(100, 100, -5, 0, 0, &names),
            Err(UniverseError::InvalidSectorSize(-5))
        ));
    }

    /// Offset windows agree with direct construction: the same coordinate
    /// yields the same star regardless of which window framed it.
    #[test]
    fn windows_agree_on_shared_coordinates() {
        let names = test_names();
        let left = Universe::generate(100, 100, 10, 0, 0, &names).unwrap();
        let shifted = Universe::generate(100, 100, 10, 5, 5, &names).unwrap();
        // coordinate (5, 5): cell (5, 5) in `left`, cell (0, 0) in `shifted`
        let a = left.at(5, 5).unwrap();
        let b = shifted.at(0, 0).unwrap();
        assert_eq!((a.x(), a.y()), (b.x(), b.y()));
        assert_eq!(a.exists(), b.exists());
        assert_eq!(a.star_diameter(), b.star_diameter());
    }

    #[test]
    fn select_returns_expanded_snapshot_without_mutating_grid() {
        let names = test_names();
        let universe = Universe::generate(1000, 1000, 10, 0, 0, &names).unwrap();
        let (col, row) = universe
            .systems()
            .enumerate()
            .find(|(_, s)| s.exists())
            .map(|(i, _)| (i % universe.cols(), i / universe.cols()))
            .expect("no star in 100x100 window");

        let snapshot = universe.select(col, row).unwrap();
        assert!(snapshot.is_expanded());
        // the grid cell is untouched
        assert!(!universe.at(col, row).unwrap().is_expanded());
        // selecting again reproduces the same planets
        let again = universe.select(col, row).unwrap();
        assert_eq!(snapshot.planets(), again.planets());
    }

    #[test]
    fn out_of_window_access_is_none() {
        let names = test_names();
        let universe = Universe::generate(20, 20, 10, 0, 0, &names).unwrap();
        assert!(universe.at(2, 0).is_none());
        assert!(universe.at(0, 2).is_none());
        assert!(universe.select(9, 9).is_none());
    }
}
