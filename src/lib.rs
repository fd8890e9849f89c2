//! # Ramp Evo - Evolving Obstacle Layouts with a Physics Simulation
//!
//! A genetic algorithm searches for obstacle layouts (or drop points) that make a
//! ball, dropped onto a fixed ramp, strike as many obstacles as possible and leave
//! the ramp as fast as possible. Every genome is scored by a 2D rigid-body
//! simulation; the best genome of each generation can be replayed live.
//!
//! ## Features
//!
//! - Fixed-step rigid-body simulation (rapier2d) with bounded run length
//! - Partial-credit and all-or-nothing scoring policies
//! - Blend crossover, Gaussian mutation and tournament selection
//! - Parallel fitness evaluation with rayon
//! - Island model with pairwise top-half merging
//! - JSON parameter files
//!
//! ## Core Modules
//!
//! - [`simulation::scene`] - Genome to geometry
//! - [`simulation::simulator`] - Step loop and terminal outcomes
//! - [`simulation::fitness`] - Scoring
//! - [`simulation::driver`] - Generations, epochs and island merges

/// Optional debugger-attach wait before startup.
pub mod debugger;
/// Crate-wide error type.
pub mod error;

/// Core simulation and evolution logic.
pub mod simulation {
    /// Generational loop, epochs and the display regime.
    pub mod driver;
    /// Genome scoring and the fitness-function seam.
    pub mod fitness;
    /// Individuals and their fitness.
    pub mod genome;
    /// Fitness history for plotting.
    pub mod history;
    /// Island model merges.
    pub mod islands;
    /// Crossover, mutation and selection.
    pub mod operators;
    /// Run configuration.
    pub mod params;
    /// Rigid-body world backed by rapier2d.
    pub mod physics;
    /// Populations and parallel evaluation.
    pub mod population;
    /// Scene construction from a genome.
    pub mod scene;
    /// Fixed-step run with hit tracking and terminal outcomes.
    pub mod simulator;
}
