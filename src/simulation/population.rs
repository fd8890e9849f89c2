//! Fixed-size populations of individuals.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::fitness::FitnessFunction;
use super::genome::Individual;
use super::operators;
use super::params::EvolutionParams;
use crate::error::Result;

/// An ordered collection of individuals, replaced wholesale each generation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Population {
    /// Individuals in order.
    pub individuals: Vec<Individual>,
}

impl Population {
    /// Wraps individuals.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// `size` unevaluated individuals with uniform random genes.
    pub fn random<R: Rng + ?Sized>(size: usize, genome_len: usize, rng: &mut R) -> Self {
        Self::new(
            (0..size)
                .map(|_| Individual::new_random(genome_len, rng))
                .collect(),
        )
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Evaluates every individual whose fitness is stale, in parallel.
    ///
    /// Each result is written back to its own individual, so input order is
    /// preserved. Returns the number of evaluations performed.
    pub fn evaluate<F: FitnessFunction>(&mut self, fitness: &F) -> Result<usize> {
        let pending = self
            .individuals
            .iter()
            .filter(|individual| !individual.is_evaluated())
            .count();

        self.individuals
            .par_iter_mut()
            .filter(|individual| !individual.is_evaluated())
            .try_for_each(|individual| -> Result<()> {
                let value = fitness.fitness(individual.genes())?;
                individual.set_fitness(value);
                Ok(())
            })?;

        Ok(pending)
    }

    /// One generation: vary, evaluate, then tournament-select a population of
    /// the same size.
    pub fn next_generation<F: FitnessFunction, R: Rng + ?Sized>(
        &self,
        fitness: &F,
        params: &EvolutionParams,
        rng: &mut R,
    ) -> Result<Self> {
        let mut offspring = Self::new(operators::var_and(&self.individuals, params, rng)?);
        let evaluated = offspring.evaluate(fitness)?;
        log::debug!("{evaluated} of {} offspring evaluated", offspring.len());
        Ok(Self::new(operators::sel_tournament(
            &offspring.individuals,
            self.len(),
            params.tournament_size,
            rng,
        )))
    }

    /// The fittest individual, first one on ties.
    pub fn best(&self) -> Option<&Individual> {
        operators::sel_best(&self.individuals)
    }

    /// The top `n` individuals by fitness, descending, ties in original order.
    pub fn top(&self, n: usize) -> Vec<Individual> {
        let mut ranked: Vec<&Individual> = self.individuals.iter().collect();
        ranked.sort_by(|a, b| b.fitness_or_zero().total_cmp(&a.fitness_or_zero()));
        ranked.into_iter().take(n).cloned().collect()
    }

    /// Median fitness (upper median for even sizes), or `None` when empty.
    pub fn median_fitness(&self) -> Option<f32> {
        let mut values: Vec<f32> = self.individuals.iter().map(Individual::fitness_or_zero).collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f32::total_cmp);
        Some(values[values.len() / 2])
    }
}
