//! Individuals: a genome plus its (possibly not yet computed) fitness.
//!
//! Genes are only reachable mutably through [`Individual::genes_mut`], which
//! clears the fitness, so a stale score can never survive a mutation.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A candidate layout and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    genes: Array1<f32>,
    fitness: Option<f32>,
}

impl Individual {
    /// Creates an unevaluated individual from explicit genes.
    pub fn new(genes: Array1<f32>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Creates an unevaluated individual with genes drawn uniformly from [0, 1).
    pub fn new_random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self::new(Array1::from_shape_fn(len, |_| rng.random::<f32>()))
    }

    /// Creates an individual whose fitness is already known.
    pub fn with_fitness(genes: Array1<f32>, fitness: f32) -> Self {
        Self {
            genes,
            fitness: Some(fitness),
        }
    }

    /// The genes.
    pub fn genes(&self) -> &Array1<f32> {
        &self.genes
    }

    /// Mutable access to the genes. Invalidates the fitness.
    pub fn genes_mut(&mut self) -> &mut Array1<f32> {
        self.fitness = None;
        &mut self.genes
    }

    /// The fitness, if this individual has been evaluated since its last change.
    pub fn fitness(&self) -> Option<f32> {
        self.fitness
    }

    /// The fitness, treating an unevaluated individual as 0.
    pub fn fitness_or_zero(&self) -> f32 {
        self.fitness.unwrap_or(0.0)
    }

    /// Whether the fitness is current.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Attaches an evaluation result.
    pub fn set_fitness(&mut self, fitness: f32) {
        self.fitness = Some(fitness);
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the genome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}
