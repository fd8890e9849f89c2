//! Scene construction from a genome.
//!
//! The ramp is fixed; obstacle positions (or the ball's drop point) come from the
//! genome according to [`Variant`]. Geometry is in world units with y growing
//! downward.

use geo::{ConvexHull, MultiPoint, Point, Polygon};
use ndarray::Array1;

use super::params::{Params, Variant};

/// A static circular collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Circle center.
    pub center: Point<f32>,
    /// Circle radius.
    pub radius: f32,
}

/// The dynamic ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Start position.
    pub start: Point<f32>,
    /// Collider radius.
    pub radius: f32,
    /// Mass.
    pub mass: f32,
}

/// Everything one evaluation needs to build its physics world.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Convex hull of the ramp vertices, or `None` when the ramp is disabled.
    pub ramp: Option<Polygon<f32>>,
    /// Obstacles in genome order.
    pub obstacles: Vec<Obstacle>,
    /// The ball.
    pub ball: Ball,
}

impl Scene {
    /// Decodes a genome into a scene.
    ///
    /// Missing genes decode as 0 and surplus genes are ignored, so any genome
    /// yields a scene; out-of-range genes just place things off the ramp.
    pub fn build(genes: &Array1<f32>, params: &Params) -> Self {
        let scene = &params.scene;
        let gene = |i: usize| genes.get(i).copied().unwrap_or(0.0);

        let (start, centers) = match params.variant {
            Variant::Layout => {
                let centers: Vec<Point<f32>> = (0..scene.layout_obstacles)
                    .map(|i| {
                        Point::new(
                            gene(2 * i) * scene.layout_scale[0] + scene.layout_offset[0],
                            gene(2 * i + 1) * scene.layout_scale[1] + scene.layout_offset[1],
                        )
                    })
                    .collect();
                (Point::from(scene.ball_start), centers)
            }
            Variant::DropPoint => {
                let start = Point::new(gene(0) * scene.drop_scale, scene.ball_start[1]);
                let centers = scene.fixed_obstacles.iter().copied().map(Point::from).collect();
                (start, centers)
            }
        };

        Self {
            ramp: ramp_hull(&scene.ramp),
            obstacles: centers
                .into_iter()
                .map(|center| Obstacle {
                    center,
                    radius: scene.obstacle_radius,
                })
                .collect(),
            ball: Ball {
                start,
                radius: scene.ball_radius,
                mass: scene.ball_mass,
            },
        }
    }

    /// Ramp vertices without the closing point, counter-clockwise.
    pub fn ramp_vertices(&self) -> Vec<Point<f32>> {
        let Some(ramp) = &self.ramp else {
            return Vec::new();
        };
        let mut points: Vec<Point<f32>> = ramp.exterior().points().collect();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        points
    }
}

/// Convex hull of the ramp vertices, matching how polygon colliders are built.
pub fn ramp_hull(vertices: &[[f32; 2]]) -> Option<Polygon<f32>> {
    if vertices.is_empty() {
        return None;
    }
    let points: MultiPoint<f32> = vertices.iter().copied().map(Point::from).collect();
    Some(points.convex_hull())
}
