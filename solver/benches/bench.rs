extern crate solver;

use criterion::{criterion_group, criterion_main, Criterion, BatchSize};
use solver::{
    generator::{independent_pairs, random_k_cnf, seeded},
    Algorithm, CNF, Solver,
};

const SEED: u64 = 2020;

fn load_formulae() -> Vec<(String, CNF)> {
    let mut rng = seeded(SEED);
    let mut formulae = vec![("pairs-20".to_string(), independent_pairs(20))];
    for &(variables, clauses) in &[(8, 30), (12, 50), (16, 68)] {
        formulae.push((
            format!("3cnf-{}-{}", variables, clauses),
            random_k_cnf(&mut rng, variables, clauses, 3),
        ));
    }
    formulae
}

fn create_group_for_solver(c: &mut Criterion, algorithm: Algorithm, formulae: &[(String, CNF)]) {
    let mut group = c.benchmark_group(algorithm.name());
    let solver = algorithm.solver();

    for (name, formula) in formulae {
        // saturation blows up on the random instances
        if algorithm == Algorithm::Resolution && name.starts_with("3cnf") {
            continue;
        }
        group.bench_function(name.as_str(), |b| {
            b.iter_batched(|| formula.clone(), |formula| solver.solve(&formula), BatchSize::SmallInput)
        });
    }

    group.finish()
}

fn criterion_benchmark(c: &mut Criterion) {
    let formulae = load_formulae();
    for algorithm in Algorithm::ALL.iter() {
        create_group_for_solver(c, *algorithm, &formulae);
    }
}

criterion_group!{
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}
criterion_main!(benches);
