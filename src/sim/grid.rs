//! Grid coordinate model
//!
//! Entities live on a 5x6 cell grid and store `(col, row)` pairs. Pixel
//! positions are derived from fixed per-sprite anchor tables only when a
//! sprite is drawn or a horizontal span is compared; each sprite family has
//! its own table because the art is padded differently.

/// Grid width in columns
pub const COLS: usize = 5;
/// Grid height in rows (row 0 is water, 1..=3 road, 4..=5 grass)
pub const ROWS: usize = 6;

/// Rows above this one are water; standing there scores and respawns
pub const WATER_BORDER_ROW: usize = 1;

/// Player sprite x anchor per column
pub const PLAYER_COL_X: [i32; COLS] = [1, 101, 201, 301, 401];
/// Player sprite y anchor per row
pub const PLAYER_ROW_Y: [i32; ROWS] = [-11, 72, 155, 238, 321, 404];

/// Tile-aligned y anchor per row, shared by bugs and rocks
pub const TILE_ROW_Y: [i32; ROWS] = [-23, 60, 143, 226, 309, 392];

/// Gem x anchor per column (gems draw at half tile width, centered)
pub const GEM_COL_X: [i32; COLS] = [27, 127, 227, 327, 427];
/// Gem y anchor per row
pub const GEM_ROW_Y: [i32; ROWS] = [34, 117, 200, 283, 366, 449];

/// Full sprite width used for horizontal overlap (player, bug, rock)
pub const SPRITE_WIDTH: f32 = 101.0;
/// Gem draw width
pub const GEM_WIDTH: f32 = 50.0;
/// Gem draw height
pub const GEM_HEIGHT: f32 = 85.0;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub col: usize,
    pub row: usize,
}

/// One-step movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl GridCell {
    /// Where the player starts and respawns; placement never uses this cell
    pub const SPAWN: GridCell = GridCell { col: 2, row: 5 };

    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Neighboring cell in `dir`, or `None` at the board edge
    pub fn step(self, dir: Direction) -> Option<GridCell> {
        match dir {
            Direction::Left if self.col > 0 => Some(Self::new(self.col - 1, self.row)),
            Direction::Right if self.col + 1 < COLS => Some(Self::new(self.col + 1, self.row)),
            Direction::Up if self.row > 0 => Some(Self::new(self.col, self.row - 1)),
            Direction::Down if self.row + 1 < ROWS => Some(Self::new(self.col, self.row + 1)),
            _ => None,
        }
    }

    /// Player sprite anchor in pixels
    pub fn player_px(self) -> (i32, i32) {
        (PLAYER_COL_X[self.col], PLAYER_ROW_Y[self.row])
    }

    /// Rock sprite anchor in pixels (tile-aligned)
    pub fn tile_px(self) -> (i32, i32) {
        (PLAYER_COL_X[self.col], TILE_ROW_Y[self.row])
    }

    /// Gem sprite anchor in pixels
    pub fn gem_px(self) -> (i32, i32) {
        (GEM_COL_X[self.col], GEM_ROW_Y[self.row])
    }
}

/// Pixel y of a bug driving in `lane` (bugs share the tile-aligned anchors)
pub fn lane_y(lane: usize) -> i32 {
    TILE_ROW_Y[lane]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_cell_anchors() {
        assert_eq!(GridCell::SPAWN.player_px(), (201, 404));
        assert_eq!(GridCell::SPAWN.tile_px(), (201, 392));
        assert_eq!(GridCell::SPAWN.gem_px(), (227, 449));
    }

    #[test]
    fn test_step_moves_one_cell() {
        let cell = GridCell::new(2, 3);
        assert_eq!(cell.step(Direction::Left), Some(GridCell::new(1, 3)));
        assert_eq!(cell.step(Direction::Right), Some(GridCell::new(3, 3)));
        assert_eq!(cell.step(Direction::Up), Some(GridCell::new(2, 2)));
        assert_eq!(cell.step(Direction::Down), Some(GridCell::new(2, 4)));
    }

    #[test]
    fn test_step_stops_at_edges() {
        assert_eq!(GridCell::new(0, 0).step(Direction::Left), None);
        assert_eq!(GridCell::new(0, 0).step(Direction::Up), None);
        assert_eq!(GridCell::new(COLS - 1, ROWS - 1).step(Direction::Right), None);
        assert_eq!(GridCell::new(COLS - 1, ROWS - 1).step(Direction::Down), None);
    }

    #[test]
    fn test_lane_anchors_match_rock_rows() {
        // Bugs and rocks sit on the same vertical anchors
        for row in 0..ROWS {
            assert_eq!(lane_y(row), GridCell::new(0, row).tile_px().1);
        }
    }

    proptest! {
        #[test]
        fn prop_walks_stay_on_the_anchor_tables(moves in prop::collection::vec(0u8..4, 0..200)) {
            let mut cell = GridCell::SPAWN;
            for m in moves {
                let dir = match m {
                    0 => Direction::Left,
                    1 => Direction::Right,
                    2 => Direction::Up,
                    _ => Direction::Down,
                };
                if let Some(next) = cell.step(dir) {
                    cell = next;
                }
                let (x, y) = cell.player_px();
                prop_assert!(PLAYER_COL_X.contains(&x));
                prop_assert!(PLAYER_ROW_Y.contains(&y));
            }
        }
    }
}
