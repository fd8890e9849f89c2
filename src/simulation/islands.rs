//! Island model bookkeeping.
//!
//! Islands evolve independently; between epochs they are merged pairwise by
//! concatenating each partner's top half, so the island count halves per merge.

use rand::Rng;

use super::fitness::FitnessFunction;
use super::genome::Individual;
use super::params::EvolutionParams;
use super::population::Population;
use crate::error::Result;

/// Merges two islands into one of the same total size as either parent.
///
/// Takes the top `ceil(M/2)` of `first` and the top `floor(M/2)` of `second`,
/// where `M` is the size of `first`. Ranking is by fitness, descending; ties
/// keep their original order.
pub fn merge(first: &Population, second: &Population) -> Population {
    let size = first.len();
    let mut individuals: Vec<Individual> = first.top(size.div_ceil(2));
    individuals.extend(second.top(size / 2));
    Population::new(individuals)
}

/// An ordered set of islands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Archipelago {
    /// Islands in order.
    pub islands: Vec<Population>,
}

impl Archipelago {
    /// `count` random islands of `size` individuals each.
    pub fn random<R: Rng + ?Sized>(
        count: usize,
        size: usize,
        genome_len: usize,
        rng: &mut R,
    ) -> Self {
        Self {
            islands: (0..count)
                .map(|_| Population::random(size, genome_len, rng))
                .collect(),
        }
    }

    /// Number of islands.
    pub fn len(&self) -> usize {
        self.islands.len()
    }

    /// Whether there are no islands.
    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    /// Runs one generation on every island.
    pub fn next_generation<F: FitnessFunction, R: Rng + ?Sized>(
        &mut self,
        fitness: &F,
        params: &EvolutionParams,
        rng: &mut R,
    ) -> Result<()> {
        for island in &mut self.islands {
            *island = island.next_generation(fitness, params, rng)?;
        }
        Ok(())
    }

    /// Merges islands `(0, 1), (2, 3), ...`. An odd trailing island is kept as is.
    pub fn merge_pairs(&mut self) {
        let mut islands = std::mem::take(&mut self.islands).into_iter();
        while let Some(first) = islands.next() {
            let merged = match islands.next() {
                Some(second) => merge(&first, &second),
                None => first,
            };
            self.islands.push(merged);
        }
    }

    /// Best fitness of every island, in island order.
    pub fn best_fitnesses(&self) -> Vec<f32> {
        self.islands
            .iter()
            .map(|island| island.best().map_or(0.0, Individual::fitness_or_zero))
            .collect()
    }

    /// The fittest individual across all islands, first one on ties.
    pub fn best(&self) -> Option<&Individual> {
        self.islands
            .iter()
            .filter_map(Population::best)
            .fold(None, |best: Option<&Individual>, candidate| match best {
                Some(b) if b.fitness_or_zero() >= candidate.fitness_or_zero() => Some(b),
                _ => Some(candidate),
            })
    }
}
