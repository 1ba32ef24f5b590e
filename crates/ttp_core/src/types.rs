use std::fmt;

/// Team identifier in [0, n).
pub type Team = usize;

/// One scheduled game as an ordered (home, away) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fixture {
    pub home: Team,
    pub away: Team,
}

impl Fixture {
    pub fn new(home: Team, away: Team) -> Self {
        Self { home, away }
    }

    /// The same pairing with venues swapped.
    pub fn reversed(self) -> Fixture {
        Fixture {
            home: self.away,
            away: self.home,
        }
    }

    /// True if `team` plays in this fixture, home or away.
    pub fn involves(self, team: Team) -> bool {
        self.home == team || self.away == team
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.home, self.away)
    }
}

/// A complete or partial schedule as a flat fixture sequence.
/// Rounds are recovered by chunking every n/2 entries.
pub type Schedule = Vec<Fixture>;

/// Number of fixtures per round for n teams.
pub fn round_size(n: usize) -> usize {
    n / 2
}

/// Total fixtures in a double round robin for n teams.
pub fn universe_size(n: usize) -> usize {
    n * (n - 1)
}

/// Render a schedule as its persisted line: `home,away` tokens joined
/// by single spaces, in placement order. The trailing newline is added
/// by the writer.
pub fn schedule_line(schedule: &[Fixture]) -> String {
    let tokens: Vec<String> = schedule.iter().map(|m| m.to_string()).collect();
    tokens.join(" ")
}
