//! Fixture universe construction.
//!
//! A double round robin plays every ordered pair (home, away) exactly
//! once, so the universe for n teams has n·(n−1) fixtures. Traversal
//! order only affects the order in which the search discovers
//! schedules, never which schedules are valid.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{universe_size, Fixture};

/// All ordered fixtures for n teams in row-major (home-major) order.
pub fn matchup_universe(n: usize) -> Vec<Fixture> {
    let mut matchups = Vec::with_capacity(universe_size(n));
    for home in 0..n {
        for away in 0..n {
            if home != away {
                matchups.push(Fixture::new(home, away));
            }
        }
    }
    matchups
}

/// The universe in a random traversal order. Used by the randomized
/// sampling mode so each restart explores a different branch first.
pub fn shuffled_universe(n: usize, rng: &mut impl Rng) -> Vec<Fixture> {
    let mut matchups = matchup_universe(n);
    matchups.shuffle(rng);
    matchups
}
