//! Per-team home/away bookkeeping.
//!
//! Each team tracks how many home and away fixtures it still has to
//! play, plus its current run: the length of its most recent unbroken
//! sequence of home-only or away-only appearances. The constraint
//! checker reads this state; the search engine updates it with a
//! make/unmake pair so sibling branches never see each other's changes.

use crate::types::{Fixture, Team};

/// Venue of a fixture from one team's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn other(self) -> Venue {
        match self {
            Venue::Home => Venue::Away,
            Venue::Away => Venue::Home,
        }
    }
}

/// Remaining venue budget and current run for one team.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamStreak {
    /// Home fixtures still to be placed for this team.
    pub home_left: u32,
    /// Away fixtures still to be placed for this team.
    pub away_left: u32,
    /// Length of the current unbroken run (0 before the first fixture).
    pub run_len: u32,
    /// Venue of the current run. Home is the sentinel for run_len == 0.
    pub run_venue: Venue,
}

impl TeamStreak {
    /// State after this team plays at home: extend or restart the home
    /// run and spend one home fixture from the budget.
    pub fn after_home(self) -> TeamStreak {
        let run_len = if self.run_venue == Venue::Home {
            self.run_len + 1
        } else {
            1
        };
        TeamStreak {
            home_left: self.home_left - 1,
            away_left: self.away_left,
            run_len,
            run_venue: Venue::Home,
        }
    }

    /// State after this team plays away. Symmetric with `after_home`.
    pub fn after_away(self) -> TeamStreak {
        let run_len = if self.run_venue == Venue::Away {
            self.run_len + 1
        } else {
            1
        };
        TeamStreak {
            home_left: self.home_left,
            away_left: self.away_left - 1,
            run_len,
            run_venue: Venue::Away,
        }
    }
}

/// Initial streak table: every team owes n−1 home and n−1 away
/// fixtures and has no run yet.
pub fn initial_streaks(n: usize) -> Vec<TeamStreak> {
    let matches = (n - 1) as u32;
    vec![
        TeamStreak {
            home_left: matches,
            away_left: matches,
            run_len: 0,
            run_venue: Venue::Home,
        };
        n
    ]
}

/// Undo token for one applied fixture: the two touched entries as they
/// were before the update.
#[derive(Clone, Copy, Debug)]
pub struct StreakUndo {
    home_team: Team,
    away_team: Team,
    home_prev: TeamStreak,
    away_prev: TeamStreak,
}

/// Apply a fixture to the streak table, returning the token that
/// restores it.
pub fn apply_fixture(streaks: &mut [TeamStreak], m: Fixture) -> StreakUndo {
    let undo = StreakUndo {
        home_team: m.home,
        away_team: m.away,
        home_prev: streaks[m.home],
        away_prev: streaks[m.away],
    };
    streaks[m.home] = streaks[m.home].after_home();
    streaks[m.away] = streaks[m.away].after_away();
    undo
}

/// Restore the streak table to its state before `apply_fixture`.
pub fn undo_fixture(streaks: &mut [TeamStreak], undo: StreakUndo) {
    streaks[undo.home_team] = undo.home_prev;
    streaks[undo.away_team] = undo.away_prev;
}

#[cfg(test)]
#[path = "streaks_tests.rs"]
mod streaks_tests;
