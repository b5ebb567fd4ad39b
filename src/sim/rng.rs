//! Bounded random integers
//!
//! Every random draw in the game goes through [`random_number`], which keeps
//! a two-convention contract all callers are written against.

use rand::Rng;

/// Random integer with asymmetric inclusive bounds.
///
/// - `lower == 0`: uniform over `0..=upper` (`upper + 1` values).
/// - `lower > 0`: uniform over `lower..=lower + upper - 1` (`upper` values,
///   so `upper` must be at least 1).
///
/// Placement draws column/row indices with the first form; lane and speed
/// draws use the second: `random_number(rng, 1, 3)` is a road lane in 1..=3
/// and `random_number(rng, 100, 400)` a speed in 100..=499 px/s.
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, lower: u32, upper: u32) -> u32 {
    if lower == 0 {
        rng.random_range(0..=upper)
    } else {
        debug_assert!(upper >= 1, "positive lower bound needs a span of at least 1");
        lower + rng.random_range(0..upper)
    }
}
