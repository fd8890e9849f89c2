#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::{Array1, array};
use ramp_evo::simulation::params::{Params, Variant};
use ramp_evo::simulation::scene::{Scene, ramp_hull};

#[test]
fn test_layout_genes_decode_to_scaled_centers() {
    let params = Params::layout();
    let genes = array![0.5, 0.5, 0.0, 0.0, 1.0, 1.0, 0.25, 0.75];
    let scene = Scene::build(&genes, &params);

    assert_eq!(scene.obstacles.len(), 4);
    let c0 = scene.obstacles[0].center;
    assert_eq!((c0.x(), c0.y()), (300.0, 150.0));
    let c1 = scene.obstacles[1].center;
    assert_eq!((c1.x(), c1.y()), (0.0, 50.0));
    let c2 = scene.obstacles[2].center;
    assert_eq!((c2.x(), c2.y()), (600.0, 250.0));
    let c3 = scene.obstacles[3].center;
    assert_eq!((c3.x(), c3.y()), (150.0, 200.0));

    for obstacle in &scene.obstacles {
        assert_eq!(obstacle.radius, 15.0);
    }
    assert_eq!((scene.ball.start.x(), scene.ball.start.y()), (300.0, 50.0));
    assert_eq!(scene.ball.radius, 10.0);
    assert_eq!(scene.ball.mass, 1.0);
}

#[test]
fn test_out_of_range_genes_still_build_a_scene() {
    let params = Params::layout();
    let genes = array![-3.0, 7.5, 2.0, -1.0, 100.0, 0.5, -0.2, 1.2];
    let scene = Scene::build(&genes, &params);

    assert_eq!(scene.obstacles.len(), 4);
    let c0 = scene.obstacles[0].center;
    assert_eq!((c0.x(), c0.y()), (-1800.0, 1550.0));
    assert!(scene.ramp.is_some());
}

#[test]
fn test_short_genome_decodes_missing_genes_as_zero() {
    let params = Params::layout();
    let genes = array![0.5];
    let scene = Scene::build(&genes, &params);

    assert_eq!(scene.obstacles.len(), 4);
    let c0 = scene.obstacles[0].center;
    assert_eq!((c0.x(), c0.y()), (300.0, 50.0));
    let c3 = scene.obstacles[3].center;
    assert_eq!((c3.x(), c3.y()), (0.0, 50.0));
}

#[test]
fn test_drop_point_moves_ball_and_keeps_fixed_obstacles() {
    let params = Params::drop_point();
    assert_eq!(params.variant, Variant::DropPoint);
    assert_eq!(params.genome_len(), 1);

    let scene = Scene::build(&array![0.5], &params);
    assert_eq!((scene.ball.start.x(), scene.ball.start.y()), (300.0, 50.0));
    assert_eq!(scene.obstacles.len(), 2);
    let c0 = scene.obstacles[0].center;
    assert_eq!((c0.x(), c0.y()), (275.0, 110.0));
    let c1 = scene.obstacles[1].center;
    assert_eq!((c1.x(), c1.y()), (325.0, 200.0));

    let left = Scene::build(&array![0.0], &params);
    assert_eq!(left.ball.start.x(), 0.0);
}

#[test]
fn test_ramp_is_the_convex_hull_of_its_vertices() {
    let params = Params::layout();
    let scene = Scene::build(&Array1::zeros(params.genome_len()), &params);
    let vertices = scene.ramp_vertices();

    // The interior points are dropped by the hull.
    assert!(vertices.len() >= 3);
    assert!(vertices.len() <= params.scene.ramp.len());
    for corner in [[0.0, 300.0], [630.0, 380.0], [600.0, 400.0]] {
        assert!(
            vertices.iter().any(|p| p.x() == corner[0] && p.y() == corner[1]),
            "hull should keep corner {corner:?}"
        );
    }
    assert!(vertices.first() != vertices.last());
}

#[test]
fn test_square_hull_drops_interior_point() {
    let hull = ramp_hull(&[[0.0, 0.0], [10.0, 0.0], [5.0, 5.0], [10.0, 10.0], [0.0, 10.0]])
        .expect("non-empty input has a hull");
    let points: Vec<_> = hull.exterior().points().collect();
    // Four corners plus the closing point.
    assert_eq!(points.len(), 5);
    assert!(!points.iter().any(|p| p.x() == 5.0 && p.y() == 5.0));
}

#[test]
fn test_empty_ramp_builds_no_ramp() {
    assert!(ramp_hull(&[]).is_none());

    let mut params = Params::layout();
    params.scene.ramp.clear();
    let scene = Scene::build(&Array1::zeros(8), &params);
    assert!(scene.ramp.is_none());
    assert!(scene.ramp_vertices().is_empty());
}
