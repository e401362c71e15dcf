mod config;

use clap::{App, Arg};
use config::Config;
use itertools::Itertools;
use solver::{
    loader::load_formulas, solve_with_limits, Algorithm, Outcome, SATSolution, CNF, DEFAULT_TIMEOUT, WORKER_STACK_SIZE,
};
use std::io::{self, prelude::*};
use std::path::PathBuf;
use std::process::exit;
use std::time::{Duration, Instant};

const DEFAULT_INPUT: &str = "benchmark_formulas.txt";
const MIB: usize = 1024 * 1024;

fn make_config() -> Config {
    let default_timeout = DEFAULT_TIMEOUT.as_secs().to_string();
    let default_stack = (WORKER_STACK_SIZE / MIB).to_string();
    let matches = App::new("satisfaction")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("A console to race DPLL, DP, resolution and CDCL against your formulas")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .default_value(DEFAULT_INPUT)
                .help("File with one formula per line, e.g. [[1, -2], [2]]"),
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .value_name("ALGORITHM")
                .takes_value(true)
                .help("SAT solving algorithm (dpll, dp, resolution, cdcl); asked for when omitted"),
        )
        .arg(
            Arg::with_name("time")
                .short("t")
                .long("time")
                .takes_value(true)
                .default_value(&default_timeout)
                .help("Timeout for a single formula in seconds"),
        )
        .arg(
            Arg::with_name("dimacs")
                .long("dimacs")
                .takes_value(false)
                .help("Input is a single formula in DIMACS format, solutions are printed as DIMACS too"),
        )
        .arg(
            Arg::with_name("stack_size")
                .short("s")
                .long("stack-size")
                .takes_value(true)
                .default_value(&default_stack)
                .help("Stack of the solving thread in MiB, raise it for formulas with many variables"),
        )
        .arg(
            Arg::with_name("return_code")
                .long("return-code")
                .short("r")
                .help("Will return 1 if all formulas are satisfiable and 0 if not (useful for scripting)")
                .takes_value(false),
        )
        .get_matches();

    Config {
        input: PathBuf::from(matches.value_of("input").unwrap_or(DEFAULT_INPUT)),
        algorithm: matches.value_of("algorithm").map(String::from),
        timeout: matches
            .value_of("time")
            .and_then(|t| t.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT),
        dimacs: matches.is_present("dimacs"),
        stack_size: matches
            .value_of("stack_size")
            .and_then(|s| s.parse::<usize>().ok())
            .map_or(WORKER_STACK_SIZE, |mib| mib.max(1) * MIB),
        return_code: matches.is_present("return_code"),
    }
}

fn prompt_algorithm() -> io::Result<String> {
    println!("Choose algorithm: {}", Algorithm::ALL.iter().join(" / "));
    print!("Algorithm: ");
    io::stdout().flush()?;

    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_lowercase())
}

fn load(config: &Config) -> solver::Result<Vec<CNF>> {
    if config.dimacs {
        let content = std::fs::read_to_string(&config.input)?;
        Ok(vec![CNF::from_dimacs(&content)?])
    } else {
        load_formulas(&config.input)
    }
}

/// What is printed for one solved formula, DIMACS `s`/`v` lines in DIMACS mode
fn report(outcome: &Outcome, dimacs: bool) -> String {
    match outcome.solution() {
        Some(solution) if dimacs => solution.to_dimacs().trim_end().to_string(),
        _ => match outcome.witness().filter(|witness| !witness.is_empty()) {
            Some(witness) => format!("{}\nAssignment: {}", outcome, witness),
            None => outcome.to_string(),
        },
    }
}

/// With `--return-code`: 1 iff every formula is satisfiable, else 0.
/// Otherwise: 2 iff some formula got no verdict (timeout, error, unknown algorithm), else 0.
fn exit_code(outcomes: &[Outcome], return_code: bool) -> i32 {
    fn verdict(outcome: &Outcome) -> Option<&SATSolution> {
        outcome.solution().filter(|solution| !solution.is_unknown())
    }

    if return_code {
        if outcomes.iter().all(|outcome| verdict(outcome).map_or(false, |s| s.is_sat())) {
            return 1;
        }
    } else if outcomes.iter().any(|outcome| verdict(outcome).is_none()) {
        return 2;
    }
    0
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = make_config();

    println!("SAT Solver Console");
    let algorithm = match config.algorithm.clone() {
        Some(algorithm) => algorithm,
        None => prompt_algorithm()?,
    };

    let formulas = match load(&config) {
        Ok(formulas) => formulas,
        Err(err) => {
            println!("Error reading file: {}", err);
            Vec::new()
        }
    };
    if formulas.is_empty() {
        println!("No valid formulas loaded.");
        return Ok(());
    }
    log::info!("Solving {} formulas with {}", formulas.len(), algorithm);

    let start = Instant::now();
    let mut outcomes = Vec::with_capacity(formulas.len());

    for (i, formula) in formulas.iter().enumerate() {
        println!("\nFormula {}:", i + 1);
        println!("Formula: {}", formula);

        let formula_start = Instant::now();
        let outcome = solve_with_limits(&algorithm, formula, config.timeout, config.stack_size);
        let elapsed = formula_start.elapsed();

        println!("{}", report(&outcome, config.dimacs));
        println!("Formula solving time: {:.4} seconds", elapsed.as_secs_f64());
        outcomes.push(outcome);
    }

    println!("\nTotal execution time: {:.4} seconds", start.elapsed().as_secs_f64());

    match exit_code(&outcomes, config.return_code) {
        0 => Ok(()),
        code => exit(code),
    }
}
