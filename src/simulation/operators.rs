//! Variation and selection operators.
//!
//! Blend crossover, Gaussian mutation and tournament selection with their usual
//! closed-form definitions, plus `var_and`, the vary-then-select offspring step.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::genome::Individual;
use super::params::EvolutionParams;
use crate::error::{EvoError, Result};

/// Blend crossover of two individuals, in place.
///
/// For each gene pair `(x1, x2)` draws `gamma` uniformly from
/// `[-alpha, 1 + alpha)` and sets `x1' = (1 - gamma) x1 + gamma x2`,
/// `x2' = gamma x1 + (1 - gamma) x2`. The pair's sum is preserved.
/// Both fitnesses are invalidated.
pub fn cx_blend<R: Rng + ?Sized>(a: &mut Individual, b: &mut Individual, alpha: f32, rng: &mut R) {
    let genes_a = a.genes_mut();
    let genes_b = b.genes_mut();
    for (x1, x2) in genes_a.iter_mut().zip(genes_b.iter_mut()) {
        let gamma = (1.0 + 2.0 * alpha) * rng.random::<f32>() - alpha;
        let (old1, old2) = (*x1, *x2);
        *x1 = (1.0 - gamma) * old1 + gamma * old2;
        *x2 = gamma * old1 + (1.0 - gamma) * old2;
    }
}

/// Gaussian mutation, in place.
///
/// Each gene independently, with probability `indpb`, gets `N(mu, sigma)` noise
/// added. Genes are not clamped. The fitness is invalidated even if no gene
/// changed, matching the other operators.
pub fn mut_gaussian<R: Rng + ?Sized>(
    individual: &mut Individual,
    mu: f32,
    sigma: f32,
    indpb: f64,
    rng: &mut R,
) -> Result<()> {
    let normal = Normal::new(mu, sigma)
        .map_err(|e| EvoError::Configuration(format!("Invalid mutation distribution: {e}")))?;
    for gene in individual.genes_mut().iter_mut() {
        if rng.random::<f64>() < indpb {
            *gene += normal.sample(rng);
        }
    }
    Ok(())
}

/// Clones `population` and varies the copies.
///
/// Consecutive pairs `(0, 1), (2, 3), ...` are crossed with probability
/// `crossover_prob`, then every individual is mutated with probability
/// `mutation_prob`. Offspring count equals parent count; untouched offspring
/// keep their fitness.
pub fn var_and<R: Rng + ?Sized>(
    population: &[Individual],
    params: &EvolutionParams,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    let mut offspring = population.to_vec();

    for pair in offspring.chunks_exact_mut(2) {
        if rng.random::<f64>() < params.crossover_prob {
            let (first, second) = pair.split_at_mut(1);
            cx_blend(&mut first[0], &mut second[0], params.blend_alpha, rng);
        }
    }

    for individual in &mut offspring {
        if rng.random::<f64>() < params.mutation_prob {
            mut_gaussian(
                individual,
                params.mutation_mu,
                params.mutation_sigma,
                params.mutation_indpb,
                rng,
            )?;
        }
    }

    Ok(offspring)
}

/// Tournament selection.
///
/// Fills `k` slots; for each, samples `tournament_size` individuals uniformly
/// with replacement and keeps a clone of the fittest (the first sampled on
/// ties). Unevaluated individuals count as fitness 0.
pub fn sel_tournament<R: Rng + ?Sized>(
    individuals: &[Individual],
    k: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<Individual> {
    if individuals.is_empty() {
        return Vec::new();
    }

    (0..k)
        .map(|_| {
            let mut best = &individuals[rng.random_range(0..individuals.len())];
            for _ in 1..tournament_size {
                let aspirant = &individuals[rng.random_range(0..individuals.len())];
                if aspirant.fitness_or_zero() > best.fitness_or_zero() {
                    best = aspirant;
                }
            }
            best.clone()
        })
        .collect()
}

/// The fittest individual, first one on ties.
pub fn sel_best(individuals: &[Individual]) -> Option<&Individual> {
    individuals.iter().fold(None, |best: Option<&Individual>, candidate| match best {
        Some(b) if b.fitness_or_zero() >= candidate.fitness_or_zero() => Some(b),
        _ => Some(candidate),
    })
}
