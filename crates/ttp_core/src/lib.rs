//! TTP Schedule Enumerator
//!
//! This crate enumerates feasible double round-robin tournament
//! schedules for n teams under the Traveling Tournament Problem
//! constraint set:
//! - every ordered (home, away) pair plays exactly once,
//! - every round covers every team exactly once,
//! - no team plays more than 3 consecutive home or away games,
//! - no fixture is immediately followed by its reverse.
//!
//! The engine is a depth-first backtracking search with a forward
//! feasibility bound that prunes branches which can no longer satisfy
//! the run cap. It enumerates schedules; it does not optimize travel
//! distance, and the randomized mode is a restart heuristic rather
//! than a uniform sampler.
//!
//! # Usage
//!
//! ```bash
//! # Count all normalized schedules for 4 teams
//! cargo run -p ttp_cli -- 4 --normalize --count 0
//!
//! # Sample 100 random schedules for 6 teams into Schedules/
//! cargo run -p ttp_cli -- 6 --random 100 --save sample
//! ```

pub mod config;
pub mod constraints;
pub mod generate;
pub mod matchups;
pub mod report;
pub mod search;
pub mod sink;
pub mod streaks;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::GeneratorConfig;
pub use generate::{generate, generate_random};
pub use matchups::{matchup_universe, shuffled_universe};
pub use report::RunSummary;
pub use search::{enumerate, NodeOutcome};
pub use sink::{count_path, init_save, schedule_paths, ScheduleSink};
pub use streaks::{initial_streaks, TeamStreak, Venue};
pub use types::{round_size, schedule_line, universe_size, Fixture, Schedule, Team};
