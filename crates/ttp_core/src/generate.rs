//! Top-level generation modes.
//!
//! `generate` is the single exhaustive (or max-bounded) run, with
//! optional normalization of the first round. `generate_random` is the
//! restart-sampling heuristic: it repeatedly reruns the generator with
//! a reshuffled fixture pool and the schedule limit forced to 1, so
//! each repetition keeps the first complete schedule it stumbles into.
//! The sample is only as unbiased as the interaction of the shuffle
//! with the search order, which has not been analyzed; treat it as a
//! heuristic, not a uniform draw from the solution space.

use rand::thread_rng;

use crate::config::GeneratorConfig;
use crate::matchups::{matchup_universe, shuffled_universe};
use crate::search::enumerate;
use crate::sink::{init_save, ScheduleSink};
use crate::streaks::{apply_fixture, initial_streaks};
use crate::types::{round_size, schedule_line, Fixture, Schedule};

/// Build the per-run sink from the configuration. `max_override`
/// replaces the configured maximum (the randomized mode forces 1) and
/// `progress` disables the in-sink progress report when the caller
/// owns progress output.
fn build_sink(
    n: usize,
    config: &GeneratorConfig,
    max_override: Option<Option<u64>>,
    progress: bool,
) -> Result<ScheduleSink, String> {
    let max = max_override.unwrap_or(config.max);
    let mut sink = ScheduleSink::counting(max);

    if let Some(cap) = config.verbose {
        sink = sink.with_retention(cap);
    }
    if let Some(name) = &config.save {
        sink = sink.with_save(n, name)?;
    }
    if progress {
        if let Some(every) = config.count {
            sink = sink.with_progress(n, every);
        }
    }
    Ok(sink)
}

/// Run one full search over `matchups`, seeding the canonical first
/// round first when `normalize` is set.
fn run_search(
    n: usize,
    normalize: bool,
    mut matchups: Vec<Fixture>,
    sink: &mut ScheduleSink,
) -> Result<(), String> {
    let mut streaks = initial_streaks(n);
    let mut schedule: Schedule = Vec::with_capacity(matchups.len());

    if normalize {
        // Fix round 1 to (0,1),(2,3),... so schedules that differ only
        // by a relabeling of an arbitrary first round appear once
        for i in (0..n).step_by(2) {
            let m = Fixture::new(i, i + 1);
            let pos = matchups
                .iter()
                .position(|&p| p == m)
                .ok_or_else(|| format!("Fixture {} missing from universe", m))?;
            matchups.remove(pos);
            schedule.push(m);
            apply_fixture(&mut streaks, m);
        }
    }

    enumerate(&mut matchups, &mut streaks, &mut schedule, n, sink)?;
    Ok(())
}

/// Print retained schedules one round per line, blank line between
/// schedules.
fn print_schedules(n: usize, schedules: &[Schedule]) {
    println!("First {} possible TTP schedules:", schedules.len());
    for schedule in schedules {
        for round in schedule.chunks(round_size(n)) {
            println!("{}", schedule_line(round));
        }
        println!();
    }
}

/// One exhaustive (or max-bounded) generation run for n teams.
/// Returns the number of completed schedules.
pub fn generate(n: usize, config: &GeneratorConfig) -> Result<u64, String> {
    config.validate(n)?;

    if let Some(name) = &config.save {
        if !config.append {
            init_save(n, name)?;
        }
    }

    let mut sink = build_sink(n, config, None, true)?;
    run_search(n, config.normalize, matchup_universe(n), &mut sink)?;

    if config.verbose.is_some() {
        print_schedules(n, sink.retained());
    }
    if config.count.is_some() && config.verbose.is_none() {
        println!("Final schedule count ({} teams): {}", n, sink.count());
        sink.checkpoint_count()?;
    }
    sink.finish()?;

    Ok(sink.count())
}

/// Randomized sampling: `config.random` independent restarts, each over
/// a freshly shuffled universe with the schedule limit forced to 1.
/// Returns the total number of schedules produced (one per repetition).
pub fn generate_random(n: usize, config: &GeneratorConfig) -> Result<u64, String> {
    config.validate(n)?;
    let repetitions = config
        .random
        .ok_or_else(|| "Randomized mode requires a repetition count".to_string())?;

    if let Some(name) = &config.save {
        if !config.append {
            // Once up front, so repetitions append instead of wiping
            init_save(n, name)?;
        }
    }

    // One sink shared across repetitions: the writer stays open and the
    // counter is reset between runs
    let mut sink = build_sink(n, config, Some(Some(1)), false)?;
    let mut total = 0u64;

    for i in 0..repetitions {
        if let Some(every) = config.count {
            if every != 0 && i % every == 0 {
                println!("Current schedule count: {}", i);
            }
        }

        sink.reset();
        run_search(
            n,
            config.normalize,
            shuffled_universe(n, &mut thread_rng()),
            &mut sink,
        )?;
        total += sink.count();
    }

    if config.verbose.is_some() {
        print_schedules(n, sink.retained());
    }
    sink.finish()?;

    Ok(total)
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod generate_tests;
