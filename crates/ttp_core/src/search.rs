//! Backtracking enumeration engine.
//!
//! Depth-first traversal of the fixture pool: at each node every
//! remaining fixture is offered to the constraint checker in pool
//! order; accepted fixtures are placed, the node recurses, and the
//! placement is unwound before the next sibling is tried. An empty
//! pool means a complete valid schedule, which is handed to the sink.
//!
//! The pool, partial schedule, and streak table are updated in place
//! with exact undo on return, so every branch sees the same state it
//! would under per-branch copies. The sink's limit is polled before
//! the sibling loop and again before each sibling so that reaching the
//! maximum unwinds every active frame promptly instead of finishing
//! in-flight loops.

use crate::constraints::is_pruned;
use crate::sink::ScheduleSink;
use crate::streaks::{apply_fixture, undo_fixture, TeamStreak};
use crate::types::Fixture;

/// Outcome of expanding one search node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeOutcome {
    /// The pool was empty: a complete schedule was reported.
    Accepted,
    /// Every candidate at this node was rejected or fully explored.
    Pruned,
    /// The sink's schedule limit was reached; unwind without trying
    /// further siblings anywhere on the stack.
    Terminated,
}

/// Expand one node of the search. On entry `schedule` holds the
/// fixtures placed so far and `pool` the rest; both (and `streaks`)
/// are restored to their entry state before returning, except that a
/// sink I/O failure aborts the run as `Err`.
pub fn enumerate(
    pool: &mut Vec<Fixture>,
    streaks: &mut [TeamStreak],
    schedule: &mut Vec<Fixture>,
    n: usize,
    sink: &mut ScheduleSink,
) -> Result<NodeOutcome, String> {
    if sink.limit_reached() {
        return Ok(NodeOutcome::Terminated);
    }

    if pool.is_empty() {
        sink.report(schedule)?;
        return Ok(NodeOutcome::Accepted);
    }

    for i in 0..pool.len() {
        if sink.limit_reached() {
            return Ok(NodeOutcome::Terminated);
        }

        let m = pool[i];
        if is_pruned(schedule, streaks, n, m) {
            continue;
        }

        // Place m, keeping pool order stable for the remaining siblings
        pool.remove(i);
        schedule.push(m);
        let undo = apply_fixture(streaks, m);

        let outcome = enumerate(pool, streaks, schedule, n, sink)?;

        undo_fixture(streaks, undo);
        schedule.pop();
        pool.insert(i, m);

        if outcome == NodeOutcome::Terminated {
            return Ok(NodeOutcome::Terminated);
        }
    }

    Ok(NodeOutcome::Pruned)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
