#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ramp_evo::error::EvoError;
use ramp_evo::simulation::params::{Params, ScoringPolicy, Variant};
use std::fs;

#[test]
fn test_presets() {
    let layout = Params::layout();
    assert_eq!(layout.variant, Variant::Layout);
    assert_eq!(layout.scoring, ScoringPolicy::PartialCredit);
    assert_eq!(layout.evolution.population_size, 500);
    assert_eq!(layout.evolution.generations, 100);
    assert_eq!(layout.genome_len(), 8);
    assert_eq!(layout.obstacle_count(), 4);
    assert_eq!(layout.sim.max_steps, 500);
    assert_eq!(layout.sim.dt, 0.02);

    let drop = Params::drop_point();
    assert_eq!(drop.variant, Variant::DropPoint);
    assert_eq!(drop.scoring, ScoringPolicy::AllOrNothing);
    assert_eq!(drop.evolution.population_size, 50);
    assert_eq!(drop.evolution.generations, 50);
    assert_eq!(drop.genome_len(), 1);
    assert_eq!(drop.obstacle_count(), 2);

    assert!(layout.validate().is_ok());
    assert!(drop.validate().is_ok());
}

#[test]
fn test_validate_rejects_broken_params() {
    let cases: [fn(&mut Params); 14] = [
        |p| p.evolution.population_size = 1,
        |p| p.evolution.crossover_prob = 1.5,
        |p| p.evolution.mutation_prob = -0.1,
        |p| p.evolution.mutation_indpb = 2.0,
        |p| p.evolution.mutation_sigma = -1.0,
        |p| p.evolution.tournament_size = 0,
        |p| p.evolution.num_islands = 0,
        |p| {
            p.evolution.num_islands = 4;
            p.evolution.epoch_generations = 0;
        },
        |p| p.sim.dt = 0.0,
        |p| p.sim.max_steps = 0,
        |p| p.scene.ball_radius = 0.0,
        |p| p.scene.obstacle_radius = -2.0,
        |p| p.scene.ball_mass = 0.0,
        |p| p.scene.layout_obstacles = 0,
    ];

    for (i, break_params) in cases.into_iter().enumerate() {
        let mut params = Params::layout();
        break_params(&mut params);
        assert!(
            matches!(params.validate(), Err(EvoError::Configuration(_))),
            "case {i} should be rejected"
        );
    }
}

#[test]
fn test_save_and_load_roundtrip() {
    let temp_file = std::env::temp_dir().join("ramp_evo_params_roundtrip.json");

    let mut params = Params::drop_point();
    params.evolution.seed = Some(17);
    params.evolution.num_islands = 4;
    params.sim.friction = 0.3;
    params.save_to_file(&temp_file).expect("Failed to save params");

    let loaded = Params::load_from_file(&temp_file).expect("Failed to load params");
    assert_eq!(loaded.variant, Variant::DropPoint);
    assert_eq!(loaded.evolution.seed, Some(17));
    assert_eq!(loaded.evolution.num_islands, 4);
    assert_eq!(loaded.sim.friction, 0.3);
    assert_eq!(loaded.scene.fixed_obstacles, params.scene.fixed_obstacles);

    fs::remove_file(&temp_file).ok();
}

#[test]
fn test_load_rejects_invalid_file_contents() {
    let temp_file = std::env::temp_dir().join("ramp_evo_params_invalid.json");

    let mut params = Params::layout();
    params.evolution.tournament_size = 0;
    params.save_to_file(&temp_file).expect("Failed to save params");
    assert!(matches!(
        Params::load_from_file(&temp_file),
        Err(EvoError::Configuration(_))
    ));

    fs::write(&temp_file, "{ not json").expect("Failed to write file");
    assert!(matches!(
        Params::load_from_file(&temp_file),
        Err(EvoError::Serde(_))
    ));

    fs::remove_file(&temp_file).ok();
}

#[test]
fn test_load_missing_file_is_io_error() {
    let missing = std::env::temp_dir().join("ramp_evo_params_does_not_exist.json");
    assert!(matches!(
        Params::load_from_file(missing),
        Err(EvoError::Io(_))
    ));
}
