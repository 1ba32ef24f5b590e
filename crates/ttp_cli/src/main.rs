//! TTP generator CLI
//!
//! Enumerate or sample double round-robin schedules for a range of
//! team counts, mirroring the core's configuration surface.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use ttp_core::{generate, generate_random, GeneratorConfig, RunSummary};

fn print_usage() {
    println!("TTP Schedule Generator");
    println!();
    println!("Usage:");
    println!("  ttp <n_start> [n_end] [options]");
    println!();
    println!("Generates all feasible TTP schedules for every even n in");
    println!("[n_start, n_end] (n_end defaults to n_start).");
    println!();
    println!("Options:");
    println!("  -N, --normalize    Fix round 1 to (0,1),(2,3),... to skip relabelings");
    println!("  -m, --max M        Stop after M completed schedules");
    println!("  -c, --count K      Report progress every K schedules (0 = final only)");
    println!("  -v, --verbose V    Keep and print the first V schedules");
    println!("  -s, --save NAME    Append schedules to Schedules/Schedules_NAME/");
    println!("      --append       Keep existing schedule files instead of truncating");
    println!("  -r, --random R     Sample R schedules via randomized restarts");
    println!("  -t, --timer        Print the time taken per n");
    println!("      --summary P    Write a JSON run summary to P-<n>.json");
    println!("  -p, --parallel     Parallel search (not implemented)");
    println!("  -h, --help         Show this help");
    println!();
    println!("Examples:");
    println!("  ttp 4 --normalize --count 0");
    println!("  ttp 6 --random 100 --save sample");
    println!("  ttp 4 8 --normalize --max 1000 --timer");
}

struct CliArgs {
    n_start: usize,
    n_end: usize,
    config: GeneratorConfig,
    timer: bool,
    summary: Option<String>,
}

/// Value of a flag that takes an argument; advances the cursor.
fn flag_value(args: &[String], i: &mut usize, flag: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn numeric_value(args: &[String], i: &mut usize, flag: &str) -> Result<u64, String> {
    let raw = flag_value(args, i, flag)?;
    raw.parse()
        .map_err(|_| format!("{} must be a non-negative integer, got '{}'", flag, raw))
}

/// Parse everything after the binary name. `Ok(None)` means help was
/// requested and printed.
fn parse_args(args: &[String]) -> Result<Option<CliArgs>, String> {
    let mut positionals: Vec<usize> = Vec::new();
    let mut config = GeneratorConfig::default();
    let mut timer = false;
    let mut summary = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-N" | "--normalize" => config.normalize = true,
            "--append" => config.append = true,
            "-t" | "--timer" => timer = true,
            "-p" | "--parallel" => {
                return Err("Parallel processing not yet implemented".to_string());
            }
            "-m" | "--max" => config.max = Some(numeric_value(args, &mut i, "--max")?),
            "-c" | "--count" => config.count = Some(numeric_value(args, &mut i, "--count")?),
            "-r" | "--random" => config.random = Some(numeric_value(args, &mut i, "--random")?),
            "-v" | "--verbose" => {
                config.verbose = Some(numeric_value(args, &mut i, "--verbose")? as usize)
            }
            "-s" | "--save" => config.save = Some(flag_value(args, &mut i, "--save")?),
            "--summary" => summary = Some(flag_value(args, &mut i, "--summary")?),
            other => {
                let n: usize = other
                    .parse()
                    .map_err(|_| format!("Unexpected argument: {}", other))?;
                positionals.push(n);
            }
        }
        i += 1;
    }

    let n_start = *positionals
        .first()
        .ok_or_else(|| "Number of teams is required".to_string())?;
    if positionals.len() > 2 {
        return Err("At most two team counts may be given".to_string());
    }
    let n_end = positionals.get(1).copied().unwrap_or(n_start);

    if n_start % 2 != 0 || n_end % 2 != 0 {
        return Err("Number of teams must be even".to_string());
    }
    if n_start > n_end {
        return Err("n_start must be less than or equal to n_end".to_string());
    }
    // Flag combinations fail here, before any work starts
    config.validate(n_start)?;

    Ok(Some(CliArgs {
        n_start,
        n_end,
        config,
        timer,
        summary,
    }))
}

/// Human-readable elapsed time with the unit picked by magnitude.
fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 1.0 {
        format!("{:.2} ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.2} s", secs)
    } else if secs < 3600.0 {
        format!("{:.2} min", secs / 60.0)
    } else if secs < 3600.0 * 24.0 {
        format!("{:.2} h", secs / 3600.0)
    } else {
        format!("{:.2} days", secs / (3600.0 * 24.0))
    }
}

fn summary_path(base: &str, n: usize) -> PathBuf {
    PathBuf::from(format!("{}-{}.json", base.trim_end_matches(".json"), n))
}

fn run(args: &[String]) -> Result<(), String> {
    let cli = match parse_args(args)? {
        Some(cli) => cli,
        None => return Ok(()),
    };

    for n in (cli.n_start..=cli.n_end).step_by(2) {
        println!("Generating schedules for {} teams", n);

        let started = Instant::now();
        let schedules = if cli.config.random.is_some() {
            generate_random(n, &cli.config)?
        } else {
            generate(n, &cli.config)?
        };
        let elapsed = started.elapsed();

        if cli.timer {
            println!("Time taken: {}", format_elapsed(elapsed));
            println!();
        }

        if let Some(base) = &cli.summary {
            let summary = RunSummary {
                n,
                normalized: cli.config.normalize,
                randomized: cli.config.random,
                schedules,
                elapsed_secs: elapsed.as_secs_f64(),
            };
            summary.save(&summary_path(base, n))?;
        }
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1..]) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_minimal() {
        let cli = parse_args(&argv(&["4"])).unwrap().unwrap();
        assert_eq!(cli.n_start, 4);
        assert_eq!(cli.n_end, 4);
        assert!(!cli.config.normalize);
        assert!(cli.config.max.is_none());
    }

    #[test]
    fn test_parse_range_and_flags() {
        let cli = parse_args(&argv(&[
            "4", "8", "--normalize", "--max", "100", "--save", "out", "--timer",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(cli.n_start, 4);
        assert_eq!(cli.n_end, 8);
        assert!(cli.config.normalize);
        assert_eq!(cli.config.max, Some(100));
        assert_eq!(cli.config.save.as_deref(), Some("out"));
        assert!(cli.timer);
    }

    #[test]
    fn test_parse_rejects_bad_inputs() {
        assert!(parse_args(&argv(&["5"])).is_err()); // odd
        assert!(parse_args(&argv(&["2"])).is_err()); // too small
        assert!(parse_args(&argv(&["8", "4"])).is_err()); // reversed range
        assert!(parse_args(&argv(&["4", "7"])).is_err()); // odd n_end
        assert!(parse_args(&argv(&["--max", "3"])).is_err()); // no n
        assert!(parse_args(&argv(&["4", "--max"])).is_err()); // missing value
        assert!(parse_args(&argv(&["4", "--max", "-1"])).is_err()); // negative
        assert!(parse_args(&argv(&["4", "--random", "5", "--max", "3"])).is_err());
        assert!(parse_args(&argv(&["4", "--append"])).is_err()); // append sans save
        assert!(parse_args(&argv(&["4", "--parallel"])).is_err()); // unimplemented
    }

    #[test]
    fn test_format_elapsed_units() {
        assert_eq!(format_elapsed(Duration::from_millis(5)), "5.00 ms");
        assert_eq!(format_elapsed(Duration::from_secs(2)), "2.00 s");
        assert_eq!(format_elapsed(Duration::from_secs(120)), "2.00 min");
        assert_eq!(format_elapsed(Duration::from_secs(7200)), "2.00 h");
        assert_eq!(format_elapsed(Duration::from_secs(172800)), "2.00 days");
    }

    #[test]
    fn test_summary_path_suffix() {
        assert_eq!(summary_path("run", 6), PathBuf::from("run-6.json"));
        assert_eq!(summary_path("run.json", 6), PathBuf::from("run-6.json"));
    }
}
