//! Shared helpers for unit tests: independent schedule verification
//! and parsing of the persisted line format. These deliberately avoid
//! the `constraints` module so they can catch its mistakes.

use std::collections::HashSet;

use crate::matchups::matchup_universe;
use crate::types::{round_size, Fixture, Schedule};

/// Parse one persisted schedule line back into fixtures.
pub fn parse_schedule_line(line: &str) -> Schedule {
    line.split_whitespace()
        .map(|token| {
            let (h, a) = token.split_once(',').expect("token must be home,away");
            Fixture::new(h.parse().unwrap(), a.parse().unwrap())
        })
        .collect()
}

/// Assert the four completed-schedule invariants: full universe usage,
/// round integrity, the run cap of 3, and no back-to-back reverses.
pub fn verify_schedule(n: usize, schedule: &[Fixture]) {
    let r = round_size(n);

    // 1. Exactly the fixture universe, each ordered pair once
    assert_eq!(schedule.len(), n * (n - 1), "wrong schedule length");
    let seen: HashSet<Fixture> = schedule.iter().copied().collect();
    assert_eq!(seen.len(), schedule.len(), "duplicate fixture");
    let universe: HashSet<Fixture> = matchup_universe(n).into_iter().collect();
    assert_eq!(seen, universe, "schedule does not cover the universe");

    // 2. Every round contains each team exactly once
    for round in schedule.chunks(r) {
        let mut teams = HashSet::new();
        for m in round {
            assert!(teams.insert(m.home), "team {} twice in round", m.home);
            assert!(teams.insert(m.away), "team {} twice in round", m.away);
        }
        assert_eq!(teams.len(), n, "round does not cover all teams");
    }

    // 3. No 4 consecutive home-only or away-only games for any team
    for team in 0..n {
        let venues: Vec<bool> = schedule
            .iter()
            .filter(|m| m.involves(team))
            .map(|m| m.home == team)
            .collect();
        assert_eq!(venues.len(), 2 * (n - 1));
        let mut run = 1;
        for w in venues.windows(2) {
            run = if w[0] == w[1] { run + 1 } else { 1 };
            assert!(run <= 3, "team {} has a run of {}", team, run);
        }
    }

    // 4. No round immediately followed by a reverse fixture
    let rounds: Vec<&[Fixture]> = schedule.chunks(r).collect();
    for pair in rounds.windows(2) {
        for m in pair[0] {
            assert!(
                !pair[1].contains(&m.reversed()),
                "back-to-back reverse of {}",
                m
            );
        }
    }
}
