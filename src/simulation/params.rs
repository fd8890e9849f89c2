use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EvoError, Result};

/// Environment variable naming an optional JSON parameter file.
pub const PARAMS_ENV: &str = "RAMP_EVO_PARAMS";

/// How a genome is decoded into a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Genome holds normalized `(x, y)` pairs, one per obstacle.
    Layout,
    /// Genome holds a single normalized drop x-coordinate; obstacles are fixed.
    DropPoint,
}

/// How a run that reached the target zone is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPolicy {
    /// Exit speed times the number of distinct obstacles hit.
    PartialCredit,
    /// Exit speed, but only when every obstacle was hit.
    AllOrNothing,
}

/// Fixed scene geometry and genome decoding constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneParams {
    /// Ramp vertices. The collider is their convex hull; empty means no ramp.
    pub ramp: Vec<[f32; 2]>,
    /// Number of obstacles encoded by a [`Variant::Layout`] genome.
    pub layout_obstacles: usize,
    /// Obstacle circle radius.
    pub obstacle_radius: f32,
    /// Ball radius.
    pub ball_radius: f32,
    /// Ball mass.
    pub ball_mass: f32,
    /// Ball start position for [`Variant::Layout`].
    pub ball_start: [f32; 2],
    /// Multiplier applied to normalized layout coordinates.
    pub layout_scale: [f32; 2],
    /// Offset added after scaling layout coordinates.
    pub layout_offset: [f32; 2],
    /// Obstacle centers for [`Variant::DropPoint`].
    pub fixed_obstacles: Vec<[f32; 2]>,
    /// Multiplier applied to the normalized drop coordinate.
    pub drop_scale: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            ramp: vec![
                [0.0, 300.0],
                [200.0, 350.0],
                [400.0, 375.0],
                [570.0, 370.0],
                [600.0, 400.0],
                [630.0, 380.0],
            ],
            layout_obstacles: 4,
            obstacle_radius: 15.0,
            ball_radius: 10.0,
            ball_mass: 1.0,
            ball_start: [300.0, 50.0],
            layout_scale: [600.0, 200.0],
            layout_offset: [0.0, 50.0],
            fixed_obstacles: vec![[275.0, 110.0], [325.0, 200.0]],
            drop_scale: 600.0,
        }
    }
}

/// Physics stepping and terminal-condition constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimParams {
    /// Gravity vector. Y grows downward, so gravity is positive y.
    pub gravity: [f32; 2],
    /// Fixed step size.
    pub dt: f32,
    /// Step cap; a run that hits it is exhausted.
    pub max_steps: usize,
    /// The ball has fallen once its y exceeds this.
    pub fall_y: f32,
    /// The ball has reached the target once `x >= target[0]` and `y >= target[1]`.
    pub target: [f32; 2],
    /// Friction coefficient of every collider.
    pub friction: f32,
    /// Restitution of every collider.
    pub restitution: f32,
    /// Typical object size handed to the physics engine's tolerances.
    pub length_unit: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: [0.0, 900.0],
            dt: 0.02,
            max_steps: 500,
            fall_y: 600.0,
            target: [600.0, 380.0],
            friction: 0.0,
            restitution: 0.0,
            length_unit: 20.0,
        }
    }
}

/// Genetic algorithm parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionParams {
    /// Individuals per population (per island in island mode).
    pub population_size: usize,
    /// Generations to run when there is a single island.
    pub generations: usize,
    /// Probability that a consecutive pair is crossed over.
    pub crossover_prob: f64,
    /// Probability that an individual is mutated.
    pub mutation_prob: f64,
    /// Blend crossover extent.
    pub blend_alpha: f32,
    /// Mean of the Gaussian mutation.
    pub mutation_mu: f32,
    /// Standard deviation of the Gaussian mutation.
    pub mutation_sigma: f32,
    /// Per-gene probability of Gaussian mutation.
    pub mutation_indpb: f64,
    /// Individuals sampled per tournament.
    pub tournament_size: usize,
    /// Number of islands. 1 disables the island model.
    pub num_islands: usize,
    /// Generations per epoch between island merges.
    pub epoch_generations: usize,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            population_size: 500,
            generations: 100,
            crossover_prob: 0.5,
            mutation_prob: 0.2,
            blend_alpha: 0.2,
            mutation_mu: 0.0,
            mutation_sigma: 0.1,
            mutation_indpb: 0.2,
            tournament_size: 3,
            num_islands: 1,
            epoch_generations: 20,
            seed: None,
        }
    }
}

/// Visualization parameters. Only the binary reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayParams {
    /// World width mapped onto the drawing area.
    pub world_width: f32,
    /// World height mapped onto the drawing area.
    pub world_height: f32,
    /// Frame rate while replaying the best genome.
    pub replay_fps: f32,
    /// Frame rate of the pause between generations.
    pub pause_fps: f32,
    /// Whether the best genome is replayed after each generation.
    pub render_enabled: bool,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            world_width: 600.0,
            world_height: 600.0,
            replay_fps: 60.0,
            pause_fps: 10.0,
            render_enabled: true,
        }
    }
}

/// Complete run configuration, passed explicitly to every evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Genome decoding.
    pub variant: Variant,
    /// Scoring rule for runs that reach the target.
    pub scoring: ScoringPolicy,
    /// Scene geometry.
    pub scene: SceneParams,
    /// Physics stepping.
    pub sim: SimParams,
    /// Genetic algorithm.
    pub evolution: EvolutionParams,
    /// Visualization.
    pub display: DisplayParams,
}

impl Default for Params {
    fn default() -> Self {
        Self::layout()
    }
}

impl Params {
    /// Four genome-placed obstacles, partial credit, population 500 for 100 generations.
    pub fn layout() -> Self {
        Self {
            variant: Variant::Layout,
            scoring: ScoringPolicy::PartialCredit,
            scene: SceneParams::default(),
            sim: SimParams::default(),
            evolution: EvolutionParams::default(),
            display: DisplayParams::default(),
        }
    }

    /// Evolved drop point over two fixed obstacles, all-or-nothing scoring,
    /// population 50 for 50 generations.
    pub fn drop_point() -> Self {
        Self {
            variant: Variant::DropPoint,
            scoring: ScoringPolicy::AllOrNothing,
            evolution: EvolutionParams {
                population_size: 50,
                generations: 50,
                ..EvolutionParams::default()
            },
            ..Self::layout()
        }
    }

    /// Number of genes a genome must have for this configuration.
    pub fn genome_len(&self) -> usize {
        match self.variant {
            Variant::Layout => self.scene.layout_obstacles * 2,
            Variant::DropPoint => 1,
        }
    }

    /// Number of obstacles a scene built from these params contains.
    pub fn obstacle_count(&self) -> usize {
        match self.variant {
            Variant::Layout => self.scene.layout_obstacles,
            Variant::DropPoint => self.scene.fixed_obstacles.len(),
        }
    }

    /// Checks that the parameters describe a runnable evolution.
    pub fn validate(&self) -> Result<()> {
        let evo = &self.evolution;
        if self.genome_len() == 0 {
            return Err(EvoError::Configuration(
                "Genome must have at least one gene".to_string(),
            ));
        }
        if evo.population_size < 2 {
            return Err(EvoError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        for (name, p) in [
            ("Crossover", evo.crossover_prob),
            ("Mutation", evo.mutation_prob),
            ("Per-gene mutation", evo.mutation_indpb),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(EvoError::Configuration(format!(
                    "{name} probability must be between 0 and 1"
                )));
            }
        }
        if evo.mutation_sigma < 0.0 {
            return Err(EvoError::Configuration(
                "Mutation sigma must not be negative".to_string(),
            ));
        }
        if evo.tournament_size == 0 {
            return Err(EvoError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        if evo.num_islands == 0 {
            return Err(EvoError::Configuration(
                "At least one island is required".to_string(),
            ));
        }
        if evo.num_islands > 1 && evo.epoch_generations == 0 {
            return Err(EvoError::Configuration(
                "Epochs must span at least one generation".to_string(),
            ));
        }
        if self.sim.dt <= 0.0 {
            return Err(EvoError::Configuration(
                "Step size must be positive".to_string(),
            ));
        }
        if self.sim.max_steps == 0 {
            return Err(EvoError::Configuration(
                "Step cap must be at least 1".to_string(),
            ));
        }
        if self.scene.ball_radius <= 0.0 || self.scene.obstacle_radius <= 0.0 {
            return Err(EvoError::Configuration(
                "Ball and obstacle radii must be positive".to_string(),
            ));
        }
        if self.scene.ball_mass <= 0.0 {
            return Err(EvoError::Configuration(
                "Ball mass must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Saves the parameters as pretty JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads and validates parameters from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads the file named by [`PARAMS_ENV`] if set, otherwise the layout preset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(PARAMS_ENV) {
            Ok(path) if !path.is_empty() => {
                log::info!("Loading parameters from {path}");
                Self::load_from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }
}
