//! Plot-ready fitness history.

use std::collections::VecDeque;

use super::driver::GenerationReport;

/// Points kept per line before the oldest are dropped.
pub const MAX_HISTORY_POINTS: usize = 500;

/// `(generation, fitness)` points.
pub type Series = VecDeque<(f64, f64)>;

/// Best fitness per generation, overall and per island.
///
/// Island lines follow the live islands: after a merge the lines of islands
/// that no longer exist are dropped.
#[derive(Debug, Clone, Default)]
pub struct FitnessHistory {
    best: Series,
    islands: Vec<Series>,
}

impl FitnessHistory {
    /// Empty history with one line per starting island.
    pub fn new(island_count: usize) -> Self {
        Self {
            best: Series::new(),
            islands: vec![Series::new(); island_count],
        }
    }

    /// Appends one generation. `islands_remaining` is the island count after
    /// any merge that followed the generation.
    pub fn record(&mut self, report: &GenerationReport, islands_remaining: usize) {
        let x = report.generation as f64;
        push_point(&mut self.best, (x, f64::from(report.best.fitness_or_zero())));

        if self.islands.len() < report.island_best.len() {
            self.islands.resize(report.island_best.len(), Series::new());
        }
        for (line, &fitness) in self.islands.iter_mut().zip(&report.island_best) {
            push_point(line, (x, f64::from(fitness)));
        }
        self.islands.truncate(islands_remaining.max(1));
    }

    /// Best fitness across all islands.
    pub fn best(&self) -> &Series {
        &self.best
    }

    /// One line per live island.
    pub fn islands(&self) -> &[Series] {
        &self.islands
    }

    /// Whether no generation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

fn push_point(series: &mut Series, point: (f64, f64)) {
    series.push_back(point);
    if series.len() > MAX_HISTORY_POINTS {
        series.pop_front();
    }
}
