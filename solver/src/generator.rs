use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{CNFClause, CNFVar, CNF};

/// Reproducible source of random formulas
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `num_clauses` clauses of `k` literals each, drawn uniformly over `num_variables`
/// variables and both polarities. Literals may repeat within a clause.
pub fn random_k_cnf<R: Rng + ?Sized>(rng: &mut R, num_variables: usize, num_clauses: usize, k: usize) -> CNF {
    if num_variables == 0 {
        return CNF::empty();
    }
    (0..num_clauses)
        .map(|_| (0..k)
            .map(|_| CNFVar::new(rng.gen_range(1, num_variables + 1), rng.gen()))
            .collect::<CNFClause>())
        .collect()
}

/// `n` two-literal clauses over pairwise disjoint variables: `[[1, 2], [3, 4], ...]`
pub fn independent_pairs(n: usize) -> CNF {
    (0..n)
        .map(|i| vec![CNFVar::pos(2 * i + 1), CNFVar::pos(2 * i + 2)].into_iter().collect::<CNFClause>())
        .collect()
}
