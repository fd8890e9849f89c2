//! Fixed-step simulation of one drop.
//!
//! Each step runs, in order: physics step, fell check, reached check, obstacle
//! hit check. The fell check comes first because a ball below the screen also
//! satisfies the reached region's y-bound. Every run ends within
//! [`SimParams::max_steps`] steps.

use geo::Point;

use super::params::SimParams;
use super::physics::World;
use super::scene::Scene;
use crate::error::Result;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// The ball dropped below the bottom of the world.
    Fell,
    /// The ball entered the target zone with this speed.
    Reached {
        /// Speed of the ball on entering the target zone.
        speed: f32,
    },
    /// The step cap ran out first.
    Exhausted,
}

/// Per-run mutable state. Created per evaluation, never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Ball center after the last step.
    pub position: Point<f32>,
    /// Ball velocity after the last step.
    pub velocity: Point<f32>,
    /// One flag per obstacle; set once and never cleared.
    pub hits: Vec<bool>,
    /// Steps taken so far.
    pub steps: usize,
}

impl SimulationState {
    /// Number of distinct obstacles hit.
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&hit| hit).count()
    }
}

/// Final result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// How the run ended.
    pub termination: Termination,
    /// Hit flags at termination.
    pub hits: Vec<bool>,
    /// Steps taken, including the terminal one.
    pub steps: usize,
}

impl Outcome {
    /// Number of distinct obstacles hit.
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&hit| hit).count()
    }

    /// Whether every obstacle was hit.
    pub fn all_hit(&self) -> bool {
        self.hits.iter().all(|&hit| hit)
    }
}

/// One drawable frame of a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Step index, starting at 1.
    pub step: usize,
    /// Ball center.
    pub ball: Point<f32>,
    /// Hit flags so far.
    pub hits: Vec<bool>,
}

/// A replay of a run: one frame per non-terminal step, plus the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Frames in step order.
    pub frames: Vec<Frame>,
    /// How the run ended.
    pub outcome: Outcome,
}

/// Drives a [`World`] through the terminal-condition state machine.
pub struct Simulator {
    world: World,
    state: SimulationState,
    sim: SimParams,
    termination: Option<Termination>,
}

impl Simulator {
    /// Builds a fresh world and state for a scene.
    pub fn new(scene: &Scene, sim: &SimParams) -> Result<Self> {
        let world = World::new(scene, sim)?;
        let state = SimulationState {
            position: world.ball_position(),
            velocity: world.ball_velocity(),
            hits: vec![false; world.obstacle_count()],
            steps: 0,
        };
        Ok(Self {
            world,
            state,
            sim: sim.clone(),
            termination: None,
        })
    }

    /// Current state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The terminal outcome, once reached.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Takes one step. Returns the termination if this step ended the run.
    ///
    /// Calling this after the run has ended does nothing and returns the
    /// existing termination.
    pub fn advance(&mut self) -> Option<Termination> {
        if self.termination.is_some() {
            return self.termination;
        }

        self.world.step();
        self.state.steps += 1;
        self.state.position = self.world.ball_position();
        self.state.velocity = self.world.ball_velocity();

        let Point(pos) = self.state.position;
        if pos.y > self.sim.fall_y {
            self.termination = Some(Termination::Fell);
        } else if pos.y >= self.sim.target[1] && pos.x >= self.sim.target[0] {
            self.termination = Some(Termination::Reached {
                speed: self.world.ball_speed(),
            });
        } else {
            for (i, hit) in self.state.hits.iter_mut().enumerate() {
                if !*hit && self.world.touching(i) {
                    log::trace!("step {}: obstacle {i} hit", self.state.steps);
                    *hit = true;
                }
            }
            if self.state.steps >= self.sim.max_steps {
                self.termination = Some(Termination::Exhausted);
            }
        }

        self.termination
    }

    /// Runs to termination.
    pub fn run(mut self) -> Outcome {
        let termination = loop {
            if let Some(termination) = self.advance() {
                break termination;
            }
        };
        self.into_outcome(termination)
    }

    /// Runs to termination, recording a frame for every non-terminal step.
    pub fn trace(mut self) -> Trace {
        let mut frames = Vec::new();
        let termination = loop {
            if let Some(termination) = self.advance() {
                break termination;
            }
            frames.push(Frame {
                step: self.state.steps,
                ball: self.state.position,
                hits: self.state.hits.clone(),
            });
        };
        Trace {
            frames,
            outcome: self.into_outcome(termination),
        }
    }

    fn into_outcome(self, termination: Termination) -> Outcome {
        Outcome {
            termination,
            hits: self.state.hits,
            steps: self.state.steps,
        }
    }
}

/// Builds and runs a simulation of `scene` to termination.
pub fn simulate(scene: &Scene, sim: &SimParams) -> Result<Outcome> {
    Ok(Simulator::new(scene, sim)?.run())
}

/// Builds and runs a simulation of `scene`, keeping every frame for replay.
pub fn trace(scene: &Scene, sim: &SimParams) -> Result<Trace> {
    Ok(Simulator::new(scene, sim)?.trace())
}
