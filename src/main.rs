use macroquad::prelude::*;
use ramp_evo::debugger;
use ramp_evo::simulation::driver::{EvolutionDriver, Phase};
use ramp_evo::simulation::fitness::SimulationFitness;
use ramp_evo::simulation::genome::Individual;
use ramp_evo::simulation::params::Params;
use ramp_evo::simulation::scene::Scene;
use ramp_evo::simulation::simulator;

mod graphics;
mod ui;

use graphics::RenderContext;
use ui::UIState;

/// Plays the best genome's trajectory frame by frame. Stops early when the
/// user turns replay off or asks to stop.
async fn replay(
    best: &Individual,
    params: &Params,
    render: &mut RenderContext,
    ui_state: &mut UIState,
) -> ramp_evo::error::Result<()> {
    let scene = Scene::build(best.genes(), params);
    let trace = simulator::trace(&scene, &params.sim)?;
    log::debug!(
        "Replaying {} frames, outcome {:?}",
        trace.frames.len(),
        trace.outcome.termination
    );

    for frame in &trace.frames {
        if ui_state.stop_requested || !ui_state.rendering_enabled {
            break;
        }
        let viewport = render.viewport(ui_state.stats_panel_width);
        graphics::draw_scene(&scene, Some(frame), &viewport);
        ui::draw_ui(ui_state);
        ui::process_egui();
        render.replay.tick().await;
    }
    Ok(())
}

/// One frame between generations showing the best scene at rest.
async fn pause(
    best: Option<&Individual>,
    params: &Params,
    render: &mut RenderContext,
    ui_state: &mut UIState,
) {
    let viewport = render.viewport(ui_state.stats_panel_width);
    match best {
        Some(best) => graphics::draw_scene(&Scene::build(best.genes(), params), None, &viewport),
        None => clear_background(BLACK),
    }
    ui::draw_ui(ui_state);
    ui::process_egui();
    render.pause.tick().await;
}

#[macroquad::main("Ramp Evolution")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if debugger::requested() {
        if let Err(e) = debugger::wait_for_attach() {
            log::error!("Waiting for debugger failed: {e}");
            return;
        }
    }

    let mut params = match Params::from_env() {
        Ok(params) => params,
        Err(e) => {
            log::error!("Failed to load parameters: {e}");
            return;
        }
    };

    log::info!("Starting ramp evolution");

    let mut status: Option<String> = None;
    loop {
        if ui::draw_genesis_screen(&mut params, status.as_deref()) {
            match params.validate() {
                Ok(()) => break,
                Err(e) => {
                    log::warn!("Rejected parameters: {e}");
                    status = Some(e.to_string());
                }
            }
        }
        next_frame().await;
    }

    log::info!(
        "Variant {:?}, population {}, islands {}, genome length {}",
        params.variant,
        params.evolution.population_size,
        params.evolution.num_islands,
        params.genome_len()
    );

    let mut driver = EvolutionDriver::new(
        SimulationFitness::new(params.clone()),
        &params.evolution,
        params.genome_len(),
    );
    let mut render = RenderContext::new(&params.display);
    let mut ui_state = UIState::new(params.evolution.num_islands, params.display.render_enabled);

    loop {
        if ui_state.stop_requested {
            log::info!("Stopped by user after {} generations", driver.generation());
            break;
        }

        match driver.phase() {
            Phase::Evolving => {
                let report = match driver.step() {
                    Ok(Some(report)) => report,
                    Ok(None) => continue,
                    Err(e) => {
                        log::error!("Evolution failed: {e}");
                        break;
                    }
                };
                ui_state.record(&report, driver.archipelago().len(), driver.phase());
                if report.merged {
                    ui_state.status_message = Some(format!(
                        "Epoch {} merged: {} islands remaining",
                        report.epoch,
                        driver.archipelago().len()
                    ));
                }

                if ui_state.rendering_enabled {
                    ui_state.replay_label =
                        Some(format!("Replaying best of generation {}", report.generation));
                    if let Err(e) = replay(&report.best, &params, &mut render, &mut ui_state).await
                    {
                        log::error!("Replay failed: {e}");
                        break;
                    }
                }
                pause(Some(&report.best), &params, &mut render, &mut ui_state).await;
            }
            Phase::Display => {
                let Some(best) = driver.best_known().cloned() else {
                    break;
                };
                ui_state.phase = Phase::Display;
                ui_state.replay_label = Some(format!(
                    "Replaying best genome (fitness {:.1})",
                    best.fitness_or_zero()
                ));
                if let Err(e) = replay(&best, &params, &mut render, &mut ui_state).await {
                    log::error!("Replay failed: {e}");
                    break;
                }
                pause(Some(&best), &params, &mut render, &mut ui_state).await;
            }
            Phase::Finished => break,
        }
    }

    if let Some(best) = driver.best_known() {
        log::info!(
            "Best fitness {} with genes {}",
            best.fitness_or_zero(),
            best.genes()
        );
    }
}
