use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use ramp_evo::simulation::driver::Phase;

use super::ui::UIState;

/// Distinct color per island.
fn get_island_color(island: usize) -> egui::Color32 {
    match island % 6 {
        0 => egui::Color32::from_rgb(255, 100, 100), // Red
        1 => egui::Color32::from_rgb(100, 150, 255), // Blue
        2 => egui::Color32::from_rgb(255, 255, 100), // Yellow
        3 => egui::Color32::from_rgb(255, 100, 255), // Magenta
        4 => egui::Color32::from_rgb(100, 255, 255), // Cyan
        _ => egui::Color32::from_rgb(200, 200, 200),
    }
}

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState) {
    egui::SidePanel::right("stats_panel")
        .default_width(state.stats_panel_width)
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading("Evolution Stats");
            ui.separator();

            ui.horizontal(|ui| {
                let button_text = if state.rendering_enabled {
                    "🎨 Replay: ON"
                } else {
                    "🎨 Replay: OFF"
                };
                if ui.button(button_text).clicked() {
                    state.rendering_enabled = !state.rendering_enabled;
                }
                if ui.button("⏹ Stop").clicked() {
                    state.stop_requested = true;
                }
            });

            if let Some(ref msg) = state.status_message {
                ui.label(msg.as_str());
            }

            ui.separator();

            let phase = match state.phase {
                Phase::Evolving => "Evolving",
                Phase::Display => "Displaying best genome",
                Phase::Finished => "Finished",
            };
            ui.label(format!("Phase: {phase}"));
            ui.label(format!("Generation: {}", state.generation));
            ui.label(format!("Epoch: {}", state.epoch));
            ui.label(format!("Islands: {}", state.island_count));
            ui.label(format!("Generation best: {:.1}", state.generation_best));
            ui.label(format!("Best so far: {:.1}", state.best_known));
            if let Some(ref label) = state.replay_label {
                ui.label(label.as_str());
            }

            ui.separator();
            ui.label("Best Fitness per Generation");
            draw_fitness_plot(ui, state);
        });
}

fn draw_fitness_plot(ui: &mut egui::Ui, state: &UIState) {
    if state.history.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("fitness_plot")
        .height(200.0)
        .show_axes([true, true])
        .label_formatter(|name, value| {
            format!("{}: Generation: {:.0}, Fitness: {:.1}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            if state.history.islands().len() > 1 {
                for (island, history) in state.history.islands().iter().enumerate() {
                    if history.is_empty() {
                        continue;
                    }
                    let points: PlotPoints = history.iter().map(|&(x, y)| [x, y]).collect();
                    let line = Line::new(points)
                        .color(get_island_color(island))
                        .name(format!("Island {}", island));
                    plot_ui.line(line);
                }
            } else {
                let points: PlotPoints =
                    state.history.best().iter().map(|&(x, y)| [x, y]).collect();
                plot_ui.line(Line::new(points).name("Best"));
            }
        });
}
