//! Randomized entity placement
//!
//! Gems and rocks are rejection-sampled onto free cells at reset time, gems
//! first so rocks can avoid them. Candidate rows exclude the water row, and
//! the player's spawn cell is never handed out.

use rand_pcg::Pcg32;

use super::grid::GridCell;
use super::rng::random_number;
use super::state::{Collectible, GemKind, Rock};

/// Retry cap per entity. Running past it means the configured entity counts
/// cannot fit on the board, which is a tuning file error.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Rock presence in the four cells around the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RockNeighbors {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub up: bool,
}

/// True when `candidate` matches an already placed cell. Placement runs
/// front to back, so each entity only has to check the ones before it.
pub fn overlaps_placed(placed: &[GridCell], candidate: GridCell) -> bool {
    placed.contains(&candidate)
}

/// True when an uncollected gem occupies `cell`
pub fn cell_has_gem(gems: &[Collectible], cell: GridCell) -> bool {
    gems.iter().any(|gem| gem.cell == Some(cell))
}

/// Which of the player's four neighboring cells hold a rock
pub fn rock_neighbors(rocks: &[Rock], cell: GridCell) -> RockNeighbors {
    let mut n = RockNeighbors::default();
    for rock in rocks {
        let r = rock.cell;
        if r.row == cell.row && cell.col == r.col + 1 {
            n.left = true;
        }
        if r.row == cell.row && r.col == cell.col + 1 {
            n.right = true;
        }
        if r.col == cell.col && r.row == cell.row + 1 {
            n.down = true;
        }
        if r.col == cell.col && cell.row == r.row + 1 {
            n.up = true;
        }
    }
    n
}

/// Draw random board cells until `reject` passes one.
///
/// Panics after [`MAX_PLACEMENT_ATTEMPTS`] rejections; see the constant.
fn sample_cell(rng: &mut Pcg32, mut reject: impl FnMut(GridCell) -> bool) -> GridCell {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        // Columns 0..=4; rows 1..=5, never the water row
        let cell = GridCell::new(
            random_number(rng, 0, 4) as usize,
            random_number(rng, 1, 5) as usize,
        );
        if !reject(cell) {
            return cell;
        }
    }
    panic!("no free cell after {MAX_PLACEMENT_ATTEMPTS} attempts; too many entities configured");
}

/// Place `count` gems on distinct free cells with random colors
pub fn place_collectibles(rng: &mut Pcg32, count: usize) -> Vec<Collectible> {
    let mut placed: Vec<GridCell> = Vec::with_capacity(count);
    let mut gems = Vec::with_capacity(count);
    for _ in 0..count {
        let cell = sample_cell(rng, |c| c == GridCell::SPAWN || overlaps_placed(&placed, c));
        placed.push(cell);
        gems.push(Collectible {
            cell: Some(cell),
            kind: GemKind::random(rng),
            collided: false,
        });
    }
    gems
}

/// Place `count` rocks on distinct free cells, also avoiding the gems
pub fn place_rocks(rng: &mut Pcg32, count: usize, gems: &[Collectible]) -> Vec<Rock> {
    let mut placed: Vec<GridCell> = Vec::with_capacity(count);
    let mut rocks = Vec::with_capacity(count);
    for _ in 0..count {
        let cell = sample_cell(rng, |c| {
            c == GridCell::SPAWN || overlaps_placed(&placed, c) || cell_has_gem(gems, c)
        });
        placed.push(cell);
        rocks.push(Rock { cell });
    }
    rocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::{COLS, ROWS};
    use rand::SeedableRng;

    #[test]
    fn test_gems_land_on_distinct_legal_cells() {
        for seed in 0..200 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let gems = place_collectibles(&mut rng, 2);
            let cells: Vec<GridCell> = gems.iter().filter_map(|g| g.cell).collect();
            assert_eq!(cells.len(), 2);
            assert_ne!(cells[0], cells[1], "seed {seed} placed overlapping gems");
            for cell in cells {
                assert_ne!(cell, GridCell::SPAWN, "seed {seed} used the spawn cell");
                assert!(cell.col < COLS);
                assert!((1..ROWS).contains(&cell.row), "seed {seed} placed on water");
            }
        }
    }

    #[test]
    fn test_rocks_avoid_gems_and_each_other() {
        for seed in 0..200 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let gems = place_collectibles(&mut rng, 2);
            let rocks = place_rocks(&mut rng, 2, &gems);
            assert_eq!(rocks.len(), 2);
            assert_ne!(rocks[0].cell, rocks[1].cell, "seed {seed} stacked rocks");
            for rock in &rocks {
                assert_ne!(rock.cell, GridCell::SPAWN);
                assert!((1..ROWS).contains(&rock.cell.row));
                assert!(
                    !cell_has_gem(&gems, rock.cell),
                    "seed {seed} put a rock on a gem"
                );
            }
        }
    }

    #[test]
    fn test_collected_gems_do_not_block_cells() {
        let gem = Collectible {
            cell: None,
            kind: GemKind::Blue,
            collided: false,
        };
        assert!(!cell_has_gem(&[gem], GridCell::new(1, 2)));
    }

    #[test]
    fn test_overlaps_placed_only_sees_earlier_entries() {
        let placed = [GridCell::new(0, 1), GridCell::new(3, 4)];
        assert!(overlaps_placed(&placed, GridCell::new(0, 1)));
        assert!(overlaps_placed(&placed, GridCell::new(3, 4)));
        assert!(!overlaps_placed(&placed, GridCell::new(2, 2)));
        assert!(!overlaps_placed(&[], GridCell::new(0, 1)));
    }

    #[test]
    fn test_rock_neighbors_flags_each_side() {
        let center = GridCell::new(2, 3);
        let rocks = [
            Rock { cell: GridCell::new(1, 3) }, // left
            Rock { cell: GridCell::new(3, 3) }, // right
            Rock { cell: GridCell::new(2, 4) }, // down
            Rock { cell: GridCell::new(2, 2) }, // up
        ];
        let n = rock_neighbors(&rocks, center);
        assert_eq!(
            n,
            RockNeighbors {
                left: true,
                right: true,
                down: true,
                up: true
            }
        );
    }

    #[test]
    fn test_rock_neighbors_ignores_diagonals_and_distance() {
        let center = GridCell::new(2, 3);
        let rocks = [
            Rock { cell: GridCell::new(1, 2) }, // diagonal
            Rock { cell: GridCell::new(4, 3) }, // two cells away
            Rock { cell: GridCell::new(2, 1) }, // two rows up
        ];
        assert_eq!(rock_neighbors(&rocks, center), RockNeighbors::default());
    }

    #[test]
    fn test_rock_neighbors_at_the_left_border() {
        // col 0 has no left neighbor; a rock at col 1 is to the right
        let rocks = [Rock { cell: GridCell::new(1, 3) }];
        let n = rock_neighbors(&rocks, GridCell::new(0, 3));
        assert!(!n.left);
        assert!(n.right);
    }

    #[test]
    #[should_panic(expected = "no free cell")]
    fn test_sampling_gives_up_when_the_board_is_full() {
        let mut rng = Pcg32::seed_from_u64(0);
        sample_cell(&mut rng, |_| true);
    }
}
