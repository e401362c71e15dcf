mod config;
mod plotting;

use clap::{App, Arg};
use config::Config;
use itertools::Itertools;
use plotting::plot_runtimes;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use solver::{
    generator::{random_k_cnf, seeded},
    loader::load_formulas,
    solvers::{Outcome, TimeLimitedSolver, TimedSolver},
    Algorithm, CNF,
};
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

/// Clause to variable ratio around which random 3-CNF gets hard
const CLAUSE_RATIO: f64 = 4.26;

fn make_config() -> Config {
    let matches = App::new("satisfaction benchmarking")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("Racing pit for SAT solvers")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .help("Formula file, one formula per line"),
        )
        .arg(
            Arg::with_name("generate")
                .short("g")
                .long("generate")
                .takes_value(true)
                .default_value("20")
                .help("Number of random 3-CNF formulas to race on when no input is given"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .default_value("2020")
                .help("Seed for the random formulas"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(false)
                .help("Output file for plot"),
        )
        .arg(
            Arg::with_name("time")
                .short("t")
                .long("time")
                .takes_value(true)
                .required(false)
                .default_value("60")
                .help("Timeout for a single instance in seconds"),
        )
        .get_matches();

    Config {
        input: matches.value_of("input").map(PathBuf::from),
        generate: matches
            .value_of("generate")
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(20),
        seed: matches
            .value_of("seed")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(2020),
        output: PathBuf::from(matches.value_of("output").unwrap_or("out.svg")),
        max_duration: matches
            .value_of("time")
            .and_then(|t| t.parse::<u64>().ok())
            .unwrap_or(60),
    }
}

/// Random 3-CNF formulas growing from 5 variables upwards
fn generate_formulae(count: usize, seed: u64) -> Vec<CNF> {
    let mut rng = seeded(seed);
    (0..count)
        .map(|i| {
            let variables = 5 + i / 2;
            let clauses = (variables as f64 * CLAUSE_RATIO).round() as usize;
            random_k_cnf(&mut rng, variables, clauses, 3)
        })
        .collect()
}

fn run_tests(
    formulae: &[CNF],
    algorithm: Algorithm,
    max_duration: Duration,
) -> Vec<(Duration, Outcome)> {
    let solver = TimedSolver::new(TimeLimitedSolver::new(algorithm.solver(), max_duration));
    formulae
        .iter()
        .map(|formula| solver.solve_limited_timed(formula.clone()))
        .collect()
}

fn count_in_minute(durations: &[Duration]) -> usize {
    let mut total = Duration::from_secs(0);
    let mut count: usize = 0;

    while total < Duration::from_secs(60) && count < durations.len() {
        total += durations[count];
        count += 1;
    }

    count
}

/// For each engine its duration and outcome on each formula
fn run_benchmark(
    formulae: &[CNF],
    max_duration: Duration,
) -> HashMap<Algorithm, Vec<(Duration, Outcome)>> {
    Algorithm::ALL
        .to_vec()
        .into_par_iter()
        .map(|algorithm| {
            println!("Started {}", algorithm);
            let result = run_tests(formulae, algorithm, max_duration);
            println!("Finished {}", algorithm);
            (algorithm, result)
        })
        .collect()
}

/// Indices of formulas on which two engines reached different verdicts
/// or a witness does not satisfy its formula
fn cross_check(formulae: &[CNF], results: &HashMap<Algorithm, Vec<(Duration, Outcome)>>) -> Vec<usize> {
    (0..formulae.len())
        .filter(|&i| {
            let solutions = results
                .values()
                .filter_map(|runs| runs[i].1.solution())
                .filter(|solution| !solution.is_unknown())
                .collect::<Vec<_>>();

            let disagree = solutions.iter().tuple_windows().any(|(a, b)| !a.agrees_with(b));
            let bad_witness = solutions
                .iter()
                .filter_map(|solution| solution.witness())
                .any(|witness| !witness.satisfies(&formulae[i]));
            disagree || bad_witness
        })
        .collect()
}

/// Writes each listed formula as `disagreement-<n>.cnf` into `dir`,
/// ready to be replayed with `solver-cli --dimacs`
fn save_disagreements(formulae: &[CNF], indices: &[usize], dir: &Path) -> io::Result<Vec<PathBuf>> {
    indices
        .iter()
        .map(|&i| {
            let path = dir.join(format!("disagreement-{}.cnf", i + 1));
            fs::write(&path, formulae[i].to_dimacs())?;
            Ok(path)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = make_config();

    let formulae = match &config.input {
        Some(path) => load_formulas(path)?,
        None => generate_formulae(config.generate, config.seed),
    };
    println!("Racing on {} formulas", formulae.len());

    let results = run_benchmark(&formulae, Duration::from_secs(config.max_duration));

    let mut runtimes: HashMap<String, Vec<Duration>> = HashMap::new();
    for algorithm in Algorithm::ALL.iter() {
        let runs = &results[algorithm];
        let solved = runs
            .iter()
            .filter(|(_, outcome)| outcome.solution().map_or(false, |s| !s.is_unknown()))
            .map(|(duration, _)| *duration)
            .collect::<Vec<_>>();
        let timed_out = runs.iter().filter(|(_, outcome)| *outcome == Outcome::TimedOut).count();
        let errored = runs.iter().filter(|(_, outcome)| matches!(outcome, Outcome::Errored(_))).count();

        println!(
            "{:>10}: solved {}, timed out {}, errors {}, {} in a minute",
            algorithm.name(),
            solved.len(),
            timed_out,
            errored,
            count_in_minute(&solved.iter().copied().sorted().collect::<Vec<_>>()),
        );
        runtimes.insert(algorithm.name().to_string(), solved);
    }

    let disagreements = cross_check(&formulae, &results);
    if disagreements.is_empty() {
        println!("All engines agree");
    } else {
        for i in &disagreements {
            log::error!("Engines disagree on formula {}: {}", i + 1, formulae[*i]);
        }
        let dir = config.output.parent().unwrap_or_else(|| Path::new("."));
        let saved = save_disagreements(&formulae, &disagreements, dir)?;
        println!("Engines disagree on {} formulas, saved to {}", disagreements.len(),
            saved.iter().map(|path| path.display()).join(", "));
    }

    plot_runtimes(&runtimes, &config.output, (600, 480))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generated_formulae_grow() {
        let formulae = generate_formulae(4, 1);
        assert_eq!(formulae.len(), 4);
        assert!(formulae[3].len() >= formulae[0].len());
    }

    #[test]
    fn agreeing_engines_pass_cross_check() {
        let formulae = vec![
            CNF::from_literals(vec![vec![1], vec![-1]]).unwrap(),
            CNF::from_literals(vec![vec![1, 2], vec![-1, -2]]).unwrap(),
        ];
        let results = run_benchmark(&formulae, Duration::from_secs(5));
        assert!(cross_check(&formulae, &results).is_empty());
    }

    #[test]
    fn disagreements_are_saved_as_dimacs() {
        let formulae = vec![
            CNF::from_literals(vec![vec![1]]).unwrap(),
            CNF::from_literals(vec![vec![1, -2], vec![2]]).unwrap(),
        ];
        let dir = std::env::temp_dir().join("solver-bench-disagreements");
        fs::create_dir_all(&dir).unwrap();

        let saved = save_disagreements(&formulae, &[1], &dir).unwrap();
        assert_eq!(saved, vec![dir.join("disagreement-2.cnf")]);
        let content = fs::read_to_string(&saved[0]).unwrap();
        assert_eq!(CNF::from_dimacs(&content).unwrap(), formulae[1]);
    }

    #[test]
    fn minute_budget() {
        let durations = vec![Duration::from_secs(20); 5];
        assert_eq!(count_in_minute(&durations), 3);
    }
}
