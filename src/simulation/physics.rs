//! Rigid-body world for one evaluation, backed by rapier2d.
//!
//! The world owns every rapier structure it needs, so worlds built on different
//! threads share nothing.

use rapier2d::prelude::*;

use super::params::SimParams;
use super::scene::Scene;
use crate::error::{EvoError, Result};

/// A ramp, static obstacles and one dynamic ball.
pub struct World {
    pipeline: PhysicsPipeline,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    island_manager: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    ball_body: RigidBodyHandle,
    ball_collider: ColliderHandle,
    obstacle_colliders: Vec<ColliderHandle>,
}

impl World {
    /// Builds the world for a scene.
    ///
    /// Fails only when the ramp vertices do not span a polygon.
    pub fn new(scene: &Scene, sim: &SimParams) -> Result<Self> {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = sim.dt;
        integration_parameters.length_unit = sim.length_unit;

        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        let vertices = scene.ramp_vertices();
        if !vertices.is_empty() {
            let points: Vec<Point<Real>> = vertices.iter().map(|p| point![p.x(), p.y()]).collect();
            let ramp = ColliderBuilder::convex_hull(&points)
                .ok_or_else(|| {
                    EvoError::Geometry(format!(
                        "ramp vertices {vertices:?} do not form a convex polygon"
                    ))
                })?
                .friction(sim.friction)
                .restitution(sim.restitution)
                .build();
            let ramp_body = bodies.insert(RigidBodyBuilder::fixed().build());
            colliders.insert_with_parent(ramp, ramp_body, &mut bodies);
        }

        let obstacle_colliders = scene
            .obstacles
            .iter()
            .map(|obstacle| {
                let body = bodies.insert(
                    RigidBodyBuilder::fixed()
                        .translation(vector![obstacle.center.x(), obstacle.center.y()])
                        .build(),
                );
                let collider = ColliderBuilder::ball(obstacle.radius)
                    .friction(sim.friction)
                    .restitution(sim.restitution)
                    .build();
                colliders.insert_with_parent(collider, body, &mut bodies)
            })
            .collect();

        let ball_body = bodies.insert(
            RigidBodyBuilder::dynamic()
                .translation(vector![scene.ball.start.x(), scene.ball.start.y()])
                .ccd_enabled(true)
                .build(),
        );
        let ball_collider = colliders.insert_with_parent(
            ColliderBuilder::ball(scene.ball.radius)
                .mass(scene.ball.mass)
                .friction(sim.friction)
                .restitution(sim.restitution)
                .build(),
            ball_body,
            &mut bodies,
        );

        Ok(Self {
            pipeline: PhysicsPipeline::new(),
            gravity: vector![sim.gravity[0], sim.gravity[1]],
            integration_parameters,
            island_manager: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            ball_body,
            ball_collider,
            obstacle_colliders,
        })
    }

    /// Advances the world by one fixed step.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    /// Current ball center.
    pub fn ball_position(&self) -> geo::Point<f32> {
        let t = self.bodies[self.ball_body].translation();
        geo::Point::new(t.x, t.y)
    }

    /// Current ball velocity.
    pub fn ball_velocity(&self) -> geo::Point<f32> {
        let v = self.bodies[self.ball_body].linvel();
        geo::Point::new(v.x, v.y)
    }

    /// Current ball speed.
    pub fn ball_speed(&self) -> f32 {
        self.bodies[self.ball_body].linvel().norm()
    }

    /// Number of obstacles in the world.
    pub fn obstacle_count(&self) -> usize {
        self.obstacle_colliders.len()
    }

    /// Whether the ball's shape is in contact with obstacle `index` after the last step.
    pub fn touching(&self, index: usize) -> bool {
        self.obstacle_colliders
            .get(index)
            .and_then(|&obstacle| self.narrow_phase.contact_pair(self.ball_collider, obstacle))
            .is_some_and(|pair| pair.has_any_active_contact)
    }
}
