//! Player overlap predicates
//!
//! Collisions are row-exact: the player only ever hits something sharing its
//! row index. Within a row, horizontal sprite spans are compared in pixels
//! with a transparency margin trimmed from both player edges.

use super::grid::{GEM_WIDTH, SPRITE_WIDTH};
use super::state::{Collectible, Enemy, Player};

/// Horizontal span overlap between the player sprite and another sprite.
///
/// `margin` trims the transparent columns on the player's edges so near
/// misses don't count. Both comparisons are strict, so an exact x tie does
/// not register; a moving bug leaves the tie on its next update.
pub fn spans_overlap(
    player_x: f32,
    player_width: f32,
    margin: f32,
    other_x: f32,
    other_width: f32,
) -> bool {
    if other_x > player_x {
        player_x + player_width - margin > other_x
    } else if player_x > other_x {
        other_x + other_width > player_x + margin
    } else {
        false
    }
}

/// Does the player overlap this bug this frame
pub fn player_hits_enemy(player: &Player, enemy: &Enemy, margin: f32) -> bool {
    enemy.lane == player.cell.row
        && spans_overlap(
            player.cell.player_px().0 as f32,
            SPRITE_WIDTH,
            margin,
            enemy.x,
            SPRITE_WIDTH,
        )
}

/// Does the player overlap this gem this frame
pub fn player_hits_gem(player: &Player, gem: &Collectible, margin: f32) -> bool {
    let Some(cell) = gem.cell else {
        return false;
    };
    cell.row == player.cell.row
        && spans_overlap(
            player.cell.player_px().0 as f32,
            SPRITE_WIDTH,
            margin,
            cell.gem_px().0 as f32,
            GEM_WIDTH,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::{GridCell, PLAYER_COL_X};
    use crate::sim::state::GemKind;
    use crate::tuning::Tuning;

    const MARGIN: f32 = 17.0;

    fn player_at(col: usize, row: usize) -> Player {
        let mut player = Player::new(&Tuning::default());
        player.cell = GridCell::new(col, row);
        player
    }

    fn bug(lane: usize, x: f32) -> Enemy {
        Enemy {
            lane,
            x,
            speed: 200.0,
            collided: false,
        }
    }

    #[test]
    fn test_bug_from_the_right_needs_to_cross_the_margin() {
        // Player at col 0 (x = 1); trimmed right edge is 1 + 101 - 17 = 85
        let player = player_at(0, 2);
        assert!(player_hits_enemy(&player, &bug(2, 84.9), MARGIN));
        assert!(!player_hits_enemy(&player, &bug(2, 85.0), MARGIN));
        assert!(!player_hits_enemy(&player, &bug(2, 200.0), MARGIN));
    }

    #[test]
    fn test_bug_from_the_left_needs_to_cross_the_margin() {
        // Player at col 0 (x = 1); trimmed left edge is 1 + 17 = 18, and the
        // bug's right edge is its x + 101
        let player = player_at(0, 2);
        assert!(player_hits_enemy(&player, &bug(2, -82.9), MARGIN));
        assert!(!player_hits_enemy(&player, &bug(2, -83.0), MARGIN));
    }

    #[test]
    fn test_exact_x_tie_is_not_a_hit() {
        let player = player_at(0, 2);
        assert!(!player_hits_enemy(&player, &bug(2, PLAYER_COL_X[0] as f32), MARGIN));
    }

    #[test]
    fn test_wrong_lane_never_hits() {
        let player = player_at(0, 2);
        let overlapping = bug(3, 10.0);
        assert!(!player_hits_enemy(&player, &overlapping, MARGIN));
    }

    #[test]
    fn test_gem_hits_only_in_its_own_column() {
        let player = player_at(2, 3);
        let here = Collectible {
            cell: Some(GridCell::new(2, 3)),
            kind: GemKind::Green,
            collided: false,
        };
        let next_column = Collectible {
            cell: Some(GridCell::new(3, 3)),
            kind: GemKind::Green,
            collided: false,
        };
        let wrong_row = Collectible {
            cell: Some(GridCell::new(2, 4)),
            kind: GemKind::Green,
            collided: false,
        };
        assert!(player_hits_gem(&player, &here, MARGIN));
        assert!(!player_hits_gem(&player, &next_column, MARGIN));
        assert!(!player_hits_gem(&player, &wrong_row, MARGIN));
    }

    #[test]
    fn test_collected_gem_never_hits() {
        let player = player_at(2, 3);
        let collected = Collectible {
            cell: None,
            kind: GemKind::Blue,
            collided: false,
        };
        assert!(!player_hits_gem(&player, &collected, MARGIN));
    }

    #[test]
    fn test_margin_comes_from_tuning() {
        let tuning = Tuning::default();
        assert_eq!(tuning.sprite_margin_px as f32, MARGIN);
    }
}
