use egui_macroquad::egui;
use macroquad::prelude::*;
use ramp_evo::simulation::params::{Params, ScoringPolicy, Variant};

/// Configuration screen shown before a run. Returns `true` once Start is clicked.
pub fn draw_genesis_screen(params: &mut Params, status: Option<&str>) -> bool {
    clear_background(LIGHTGRAY);

    let mut start_evolution = false;

    egui_macroquad::ui(|egui_ctx| {
        egui::CentralPanel::default().show(egui_ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Ramp Evolution - Configuration");
                ui.add_space(10.0);

                ui.collapsing("Variant", |ui| {
                    let previous = params.variant;
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut params.variant, Variant::Layout, "Obstacle layout");
                        ui.radio_value(&mut params.variant, Variant::DropPoint, "Drop point");
                    });
                    if params.variant != previous {
                        // Switching variant loads that variant's preset.
                        let display = params.display.clone();
                        *params = match params.variant {
                            Variant::Layout => Params::layout(),
                            Variant::DropPoint => Params::drop_point(),
                        };
                        params.display = display;
                    }

                    ui.horizontal(|ui| {
                        ui.label("Scoring:");
                        ui.radio_value(
                            &mut params.scoring,
                            ScoringPolicy::PartialCredit,
                            "Speed x hits",
                        );
                        ui.radio_value(
                            &mut params.scoring,
                            ScoringPolicy::AllOrNothing,
                            "Speed if all hit",
                        );
                    });

                    if params.variant == Variant::Layout {
                        ui.add(
                            egui::Slider::new(&mut params.scene.layout_obstacles, 1..=8)
                                .text("Obstacles"),
                        );
                    }
                });

                ui.collapsing("Population Parameters", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.evolution.population_size, 2..=2000)
                            .text("Population Size"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.evolution.generations, 1..=500)
                            .text("Generations"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.evolution.num_islands, 1..=16)
                            .text("Islands"),
                    );
                    if params.evolution.num_islands > 1 {
                        ui.add(
                            egui::Slider::new(&mut params.evolution.epoch_generations, 1..=100)
                                .text("Generations per Epoch"),
                        );
                    }

                    let mut fixed_seed = params.evolution.seed.is_some();
                    ui.checkbox(&mut fixed_seed, "Fixed seed");
                    if fixed_seed {
                        let seed = params.evolution.seed.get_or_insert(0);
                        ui.add(egui::DragValue::new(seed));
                    } else {
                        params.evolution.seed = None;
                    }
                });

                ui.collapsing("Variation & Selection", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.evolution.crossover_prob, 0.0..=1.0)
                            .text("Crossover Probability"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.evolution.blend_alpha, 0.0..=1.0)
                            .text("Blend Alpha"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.evolution.mutation_prob, 0.0..=1.0)
                            .text("Mutation Probability"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.evolution.mutation_sigma, 0.0..=0.5)
                            .text("Mutation Sigma"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.evolution.mutation_indpb, 0.0..=1.0)
                            .text("Per-Gene Mutation Probability"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.evolution.tournament_size, 1..=10)
                            .text("Tournament Size"),
                    );
                });

                ui.collapsing("Simulation Parameters", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.sim.gravity[1], 100.0..=2000.0)
                            .text("Gravity"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.sim.dt, 0.005..=0.05).text("Step Size"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.sim.max_steps, 50..=2000).text("Step Cap"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.sim.friction, 0.0..=1.0).text("Friction"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.sim.restitution, 0.0..=1.0)
                            .text("Restitution"),
                    );
                });

                ui.collapsing("Display", |ui| {
                    ui.checkbox(
                        &mut params.display.render_enabled,
                        "Replay the best genome after each generation",
                    );
                    ui.add(
                        egui::Slider::new(&mut params.display.replay_fps, 10.0..=240.0)
                            .text("Replay FPS"),
                    );
                });

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(10.0);

                if let Some(msg) = status {
                    ui.colored_label(egui::Color32::from_rgb(255, 120, 120), msg);
                }

                ui.horizontal(|ui| {
                    if ui.button("Start Evolution").clicked() {
                        start_evolution = true;
                    }
                    ui.label("Configure parameters above, then click to start");
                });
            });
        });
    });

    egui_macroquad::draw();

    start_evolution
}
