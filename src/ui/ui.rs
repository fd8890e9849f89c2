use egui_macroquad::egui;
use ramp_evo::simulation::driver::{GenerationReport, Phase};
use ramp_evo::simulation::history::FitnessHistory;

pub struct UIState {
    pub stats_panel_width: f32,
    pub history: FitnessHistory,
    pub generation: usize,
    pub epoch: usize,
    pub island_count: usize,
    pub generation_best: f32,
    pub best_known: f32,
    pub phase: Phase,
    pub replay_label: Option<String>,
    pub status_message: Option<String>,
    pub rendering_enabled: bool,
    pub stop_requested: bool,
}

impl UIState {
    pub fn new(island_count: usize, rendering_enabled: bool) -> Self {
        Self {
            stats_panel_width: 300.0,
            history: FitnessHistory::new(island_count),
            generation: 0,
            epoch: 0,
            island_count,
            generation_best: 0.0,
            best_known: 0.0,
            phase: Phase::Evolving,
            replay_label: None,
            status_message: None,
            rendering_enabled,
            stop_requested: false,
        }
    }

    pub fn record(&mut self, report: &GenerationReport, island_count: usize, phase: Phase) {
        self.generation = report.generation;
        self.epoch = report.epoch;
        self.island_count = island_count;
        self.phase = phase;
        self.generation_best = report.best.fitness_or_zero();
        self.best_known = self.best_known.max(self.generation_best);
        self.history.record(report, island_count);
    }
}

pub fn draw_ui(state: &mut UIState) {
    egui_macroquad::ui(|egui_ctx| {
        // Configure brighter text and UI
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 220);
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state);
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
