#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::array;
use ramp_evo::simulation::params::Params;
use ramp_evo::simulation::scene::Scene;
use ramp_evo::simulation::simulator::{self, Simulator, Termination};

/// Obstacles pinned to the left wall, well away from the ball's path.
fn far_obstacles() -> ndarray::Array1<f32> {
    array![0.0, 0.1, 0.0, 0.4, 0.0, 0.7, 0.0, 1.0]
}

fn no_ramp_params() -> Params {
    let mut params = Params::layout();
    params.scene.ramp.clear();
    params
}

#[test]
fn test_free_fall_without_ramp_falls() {
    let params = no_ramp_params();
    let scene = Scene::build(&far_obstacles(), &params);
    let outcome = simulator::simulate(&scene, &params.sim).expect("world builds");

    assert_eq!(outcome.termination, Termination::Fell);
    // 550 units under 900 units/s^2 takes about 1.1 s, i.e. about 55 steps.
    assert!(outcome.steps > 30, "fell too early: {}", outcome.steps);
    assert!(outcome.steps < 100, "fell too late: {}", outcome.steps);
    assert_eq!(outcome.hit_count(), 0);
}

#[test]
fn test_target_below_start_is_reached_before_falling() {
    let mut params = no_ramp_params();
    params.sim.target = [0.0, 380.0];
    let scene = Scene::build(&far_obstacles(), &params);
    let outcome = simulator::simulate(&scene, &params.sim).expect("world builds");

    match outcome.termination {
        Termination::Reached { speed } => assert!(speed > 0.0),
        other => panic!("expected the target to be reached, got {other:?}"),
    }
}

#[test]
fn test_every_run_respects_the_step_cap() {
    let params = Params::layout();
    for genes in [
        far_obstacles(),
        array![0.5, 0.5, 0.4, 0.6, 0.6, 0.2, 0.3, 0.9],
        array![0.45, 0.1, 0.5, 0.3, 0.55, 0.5, 0.6, 0.7],
    ] {
        let scene = Scene::build(&genes, &params);
        let outcome = simulator::simulate(&scene, &params.sim).expect("world builds");
        assert!(outcome.steps >= 1);
        assert!(outcome.steps <= params.sim.max_steps);
    }
}

#[test]
fn test_small_step_cap_exhausts() {
    let mut params = Params::layout();
    params.sim.max_steps = 3;
    let scene = Scene::build(&far_obstacles(), &params);
    let outcome = simulator::simulate(&scene, &params.sim).expect("world builds");

    assert_eq!(outcome.termination, Termination::Exhausted);
    assert_eq!(outcome.steps, 3);
}

#[test]
fn test_overlapping_obstacle_is_hit_on_first_step() {
    let params = no_ramp_params();
    // First obstacle at (318, 50) overlaps the ball start at (300, 50).
    let genes = array![0.53, 0.0, 0.0, 0.4, 0.0, 0.7, 0.0, 1.0];
    let scene = Scene::build(&genes, &params);
    let mut sim = Simulator::new(&scene, &params.sim).expect("world builds");

    assert_eq!(sim.state().hits, vec![false; 4]);
    assert!(sim.advance().is_none());
    assert_eq!(sim.state().steps, 1);
    assert!(sim.state().hits[0]);
    assert_eq!(sim.state().hit_count(), 1);
}

#[test]
fn test_hits_are_never_cleared() {
    let params = no_ramp_params();
    let genes = array![0.53, 0.0, 0.0, 0.4, 0.0, 0.7, 0.0, 1.0];
    let scene = Scene::build(&genes, &params);
    let trace = simulator::trace(&scene, &params.sim).expect("world builds");

    let mut seen = vec![false; 4];
    for frame in &trace.frames {
        for (was, &now) in seen.iter_mut().zip(&frame.hits) {
            assert!(!*was || now, "a hit flag was cleared at step {}", frame.step);
            *was = now;
        }
    }
    assert!(trace.outcome.hits[0]);
}

#[test]
fn test_trace_has_a_frame_per_non_terminal_step() {
    let params = Params::layout();
    let scene = Scene::build(&far_obstacles(), &params);
    let trace = simulator::trace(&scene, &params.sim).expect("world builds");

    assert_eq!(trace.frames.len(), trace.outcome.steps - 1);
    for (i, frame) in trace.frames.iter().enumerate() {
        assert_eq!(frame.step, i + 1);
    }

    let outcome = simulator::simulate(&scene, &params.sim).expect("world builds");
    assert_eq!(outcome, trace.outcome);
}

#[test]
fn test_advance_is_idle_after_termination() {
    let mut params = Params::layout();
    params.sim.max_steps = 2;
    let scene = Scene::build(&far_obstacles(), &params);
    let mut sim = Simulator::new(&scene, &params.sim).expect("world builds");

    assert!(sim.advance().is_none());
    assert_eq!(sim.advance(), Some(Termination::Exhausted));
    assert_eq!(sim.advance(), Some(Termination::Exhausted));
    assert_eq!(sim.state().steps, 2);
    assert_eq!(sim.termination(), Some(Termination::Exhausted));
}

#[test]
fn test_ball_lands_on_ramp_and_exits_right() {
    let params = Params::layout();
    let scene = Scene::build(&far_obstacles(), &params);
    let outcome = simulator::simulate(&scene, &params.sim).expect("world builds");

    // The ramp's top edge slopes down to the right, so an unobstructed ball
    // slides off its right end into the target zone.
    assert!(matches!(outcome.termination, Termination::Reached { .. }));
    assert_eq!(outcome.hit_count(), 0);
}

#[test]
fn test_falling_wins_over_reaching_on_the_same_step() {
    let mut params = no_ramp_params();
    params.sim.target = [0.0, 0.0];
    params.scene.ball_start = [300.0, 599.9];
    let scene = Scene::build(&far_obstacles(), &params);
    let outcome = simulator::simulate(&scene, &params.sim).expect("world builds");

    // After one step the ball is both below the floor and inside the target zone.
    assert_eq!(outcome.termination, Termination::Fell);
    assert_eq!(outcome.steps, 1);
}

#[test]
fn test_state_tracks_the_ball_body() {
    let params = no_ramp_params();
    let scene = Scene::build(&far_obstacles(), &params);
    let mut sim = Simulator::new(&scene, &params.sim).expect("world builds");

    let start = sim.state().position;
    assert_eq!((start.x(), start.y()), (300.0, 50.0));
    assert_eq!(sim.state().velocity.y(), 0.0);

    sim.advance();
    sim.advance();
    assert!(sim.state().position.y() > 50.0);
    assert!(sim.state().velocity.y() > 0.0);
}

#[test]
fn test_column_layout_balances_on_first_obstacle() {
    let params = Params::layout();
    let genes = array![0.5, 0.17, 0.5, 0.42, 0.5, 0.67, 0.5, 0.92];
    let scene = Scene::build(&genes, &params);
    let outcome = simulator::simulate(&scene, &params.sim).expect("world builds");

    // Dropped dead center onto the first obstacle, the ball comes to rest on it.
    assert_eq!(outcome.termination, Termination::Exhausted);
    assert_eq!(outcome.hits, vec![true, false, false, false]);
    assert_eq!(outcome.steps, params.sim.max_steps);
}
