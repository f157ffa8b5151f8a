//! Map module - the scrolling playfield grid
//!
//! The map is an H×W grid of [`CellKind`]s stored row-major in one flat
//! allocation. Coordinates are `(row, col)` with row 0 at the top.
//!
//! Every frame the whole grid scrolls one column left and a fresh column is
//! generated on the right. The play band is then cleared so the obstacle and
//! the player can be painted on top of the new frame.
//!
//! Out-of-range access panics; a bad coordinate is a placement bug upstream.

use crate::config::{ConfigError, Layout};
use crate::rng::SimpleRng;
use crate::types::{CellKind, GRASS_PER_MILLE, STAR_PER_MILLE};

/// The playfield grid
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    layout: Layout,
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<CellKind>,
}

impl Map {
    /// Allocate and fill the initial landscape.
    pub fn generate(layout: Layout, rng: &mut SimpleRng) -> Result<Self, ConfigError> {
        let width = layout.width as usize;
        let height = layout.height as usize;
        let len = width * height;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| ConfigError::Allocation { cells: len })?;
        cells.resize(len, CellKind::Empty);

        let mut map = Self {
            layout,
            width,
            height,
            cells,
        };
        for row in 0..height {
            for col in 0..width {
                let kind = map.fresh_cell(row, rng);
                map.set(row, col, kind);
            }
        }
        Ok(map)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "map cell ({}, {}) out of range for {}x{} grid",
            row,
            col,
            self.width,
            self.height
        );
        row * self.width + col
    }

    /// Cell at `(row, col)`. Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> CellKind {
        self.cells[self.index(row, col)]
    }

    /// Overwrite the cell at `(row, col)`. Panics when out of range.
    pub fn set(&mut self, row: usize, col: usize, kind: CellKind) {
        let i = self.index(row, col);
        self.cells[i] = kind;
    }

    /// One full row.
    pub fn row(&self, row: usize) -> &[CellKind] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.width]
    }

    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Shift every row one column left and generate a new rightmost column.
    pub fn scroll_left(&mut self, rng: &mut SimpleRng) {
        let w = self.width;
        for row in 0..self.height {
            let start = row * w;
            self.cells.copy_within(start + 1..start + w, start);
            let kind = self.fresh_cell(row, rng);
            self.cells[start + w - 1] = kind;
        }
    }

    /// Blank every cell of the play band.
    pub fn clear_band(&mut self) {
        let rows = self.layout.band();
        let start = *rows.start() as usize * self.width;
        let end = (*rows.end() as usize + 1) * self.width;
        self.cells[start..end].fill(CellKind::Empty);
    }

    /// Row rendered as plain glyphs.
    pub fn row_string(&self, row: usize) -> String {
        self.row(row).iter().map(|k| k.glyph()).collect()
    }

    /// Whole grid as plain glyph lines, top to bottom.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height).map(|row| self.row_string(row)).collect()
    }

    fn fresh_cell(&self, row: usize, rng: &mut SimpleRng) -> CellKind {
        let row = row as u16;
        if self.layout.is_sky_row(row) {
            if rng.chance(STAR_PER_MILLE) {
                CellKind::Star
            } else {
                CellKind::Empty
            }
        } else if row == self.layout.surface_row {
            CellKind::Surface
        } else if self.layout.is_ground_row(row) {
            if rng.chance(GRASS_PER_MILLE) {
                CellKind::Grass
            } else {
                CellKind::Gravel
            }
        } else {
            CellKind::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn map_80x32(seed: u32) -> (Map, SimpleRng) {
        let layout = GameConfig::new(80, 32, seed).validate().unwrap();
        let mut rng = SimpleRng::new(seed);
        let map = Map::generate(layout, &mut rng).unwrap();
        (map, rng)
    }

    #[test]
    fn generate_fills_each_band_with_its_kinds() {
        let (map, _) = map_80x32(3);
        let layout = *map.layout();

        for row in 0..map.height() {
            for &kind in map.row(row) {
                let r = row as u16;
                if layout.is_sky_row(r) {
                    assert!(matches!(kind, CellKind::Star | CellKind::Empty));
                } else if r == layout.surface_row {
                    assert_eq!(kind, CellKind::Surface);
                } else if layout.is_ground_row(r) {
                    assert!(matches!(kind, CellKind::Grass | CellKind::Gravel));
                } else {
                    assert_eq!(kind, CellKind::Empty);
                }
            }
        }
    }

    #[test]
    fn sky_is_sparse() {
        let (map, _) = map_80x32(11);
        let sky = map.layout().sky_rows as usize * map.width();
        let stars = map.cells()[..sky]
            .iter()
            .filter(|&&k| k == CellKind::Star)
            .count();
        // ~1% of 1200 cells
        assert!(stars < sky / 20, "too many stars: {}", stars);
    }

    #[test]
    fn scroll_is_a_left_shift_plus_one_new_column() {
        let (mut map, mut rng) = map_80x32(5);
        for _ in 0..50 {
            let before = map.clone();
            map.scroll_left(&mut rng);
            for row in 0..map.height() {
                assert_eq!(map.row(row).len(), map.width());
                assert_eq!(&map.row(row)[..map.width() - 1], &before.row(row)[1..]);
            }
        }
    }

    #[test]
    fn surface_edge_is_always_hard() {
        let (mut map, mut rng) = map_80x32(8);
        let surface = map.layout().surface_row as usize;
        for _ in 0..500 {
            map.scroll_left(&mut rng);
            assert_eq!(map.get(surface, map.width() - 1), CellKind::Surface);
        }
    }

    #[test]
    fn clear_band_only_touches_band_rows() {
        let (mut map, _) = map_80x32(9);
        let layout = *map.layout();
        for row in layout.band() {
            map.set(row as usize, 10, CellKind::ObstacleShell);
        }
        let before = map.clone();
        map.clear_band();

        for row in 0..map.height() {
            if layout.band().contains(&(row as u16)) {
                assert!(map.row(row).iter().all(|&k| k == CellKind::Empty));
            } else {
                assert_eq!(map.row(row), before.row(row));
            }
        }
    }

    #[test]
    fn same_seed_same_landscape() {
        let (a, _) = map_80x32(42);
        let (b, _) = map_80x32(42);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_row_panics() {
        let (map, _) = map_80x32(1);
        let _ = map.get(32, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_col_panics_on_set() {
        let (mut map, _) = map_80x32(1);
        map.set(0, 80, CellKind::Star);
    }
}
