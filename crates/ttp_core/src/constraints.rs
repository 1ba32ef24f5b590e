//! Fixture acceptance rules.
//!
//! A candidate fixture is checked against four rules, in order, with
//! short-circuit rejection:
//! 1. round integrity + canonical ordering within the round,
//! 2. no back-to-back reverse fixture across consecutive rounds,
//! 3. the hard cap of 3 on consecutive home-only or away-only games,
//! 4. a forward-feasibility bound that rejects branches which cannot
//!    satisfy the run cap in any completion.
//!
//! Rules 1–3 reject actual violations; rule 4 is a lookahead that
//! generalizes rule 3 over the remaining rounds.

use crate::streaks::{TeamStreak, Venue};
use crate::types::{round_size, Fixture};

/// The in-progress round: the trailing `len % (n/2)` fixtures of the
/// flat schedule.
pub fn current_round(schedule: &[Fixture], n: usize) -> &[Fixture] {
    let k = schedule.len() % round_size(n);
    &schedule[schedule.len() - k..]
}

/// The most recent complete round, or an empty slice before one exists.
pub fn previous_round(schedule: &[Fixture], n: usize) -> &[Fixture] {
    let r = round_size(n);
    if schedule.len() < r {
        return &[];
    }
    let k = schedule.len() % r;
    &schedule[schedule.len() - k - r..schedule.len() - k]
}

/// Rule 1: a team of `m` already plays in the in-progress round, or
/// `m` would break the canonical non-decreasing home-index order.
///
/// The ordering half is a symmetry break: a round is a set, so the
/// (n/2)! orderings of its fixtures would otherwise each be discovered
/// as a distinct schedule. Accepting fixtures only in non-decreasing
/// home-index order keeps exactly one of them.
pub fn conflicts_with_round(m: Fixture, current: &[Fixture]) -> bool {
    current
        .iter()
        .any(|p| p.involves(m.home) || p.involves(m.away) || m.home < p.home)
}

/// Rule 2: the reverse of `m` was played in the previous round.
pub fn is_back_to_back(m: Fixture, prev_round: &[Fixture]) -> bool {
    prev_round.contains(&m.reversed())
}

/// Rule 3: placing `m` would give either team a 4th consecutive game
/// of the same venue.
pub fn run_cap_reached(m: Fixture, streaks: &[TeamStreak]) -> bool {
    let home = streaks[m.home];
    let away = streaks[m.away];
    (home.run_len == 3 && home.run_venue == Venue::Home)
        || (away.run_len == 3 && away.run_venue == Venue::Away)
}

/// Rule 4: after tentatively spending `m`, one of its teams could not
/// schedule its remaining fixtures without exceeding the run cap.
///
/// For each team, with the fixture charged to its own venue budget:
/// x = max(home_left−δ, away_left), y = min(home_left−δ, away_left),
/// and s = the current run length if that run sits on the strictly
/// larger remaining side, else 0. The branch is infeasible when
/// x + s > 3·(y + 1): even interleaving every run of 3 from the larger
/// side with games from the smaller side cannot absorb the surplus.
/// The inequality is the original formulation and is kept verbatim;
/// its exactness is validated against brute-force enumeration in the
/// search tests rather than argued here.
pub fn future_run_infeasible(m: Fixture, streaks: &[TeamStreak]) -> bool {
    fn team_infeasible(s: TeamStreak, venue: Venue) -> bool {
        // The fixture being tested is charged to this team's own venue
        let (mine, other) = match venue {
            Venue::Home => (s.home_left as i64 - 1, s.away_left as i64),
            Venue::Away => (s.away_left as i64 - 1, s.home_left as i64),
        };
        let x = mine.max(other);
        let y = mine.min(other);
        let s_bonus = if s.run_venue == venue && mine > other {
            s.run_len as i64
        } else {
            0
        };
        x + s_bonus > 3 * (y + 1)
    }

    team_infeasible(streaks[m.home], Venue::Home) || team_infeasible(streaks[m.away], Venue::Away)
}

/// Full check: true if `m` must be rejected at this point of the
/// search. Rules run in the order above and stop at the first hit.
pub fn is_pruned(schedule: &[Fixture], streaks: &[TeamStreak], n: usize, m: Fixture) -> bool {
    if conflicts_with_round(m, current_round(schedule, n)) {
        return true;
    }
    if is_back_to_back(m, previous_round(schedule, n)) {
        return true;
    }
    if run_cap_reached(m, streaks) {
        return true;
    }
    future_run_infeasible(m, streaks)
}

#[cfg(test)]
#[path = "constraints_tests.rs"]
mod constraints_tests;
