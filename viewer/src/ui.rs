// ui.rs - Draws the board and forwards clicks and buttons to the simulation

use std::time::Duration;

use conway_engine::{GameOfLifeInterface, PATTERNS, Simulation, WorldConfig};
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Default,
    Dark,
    Light,
}

impl Theme {
    const ALL: [Theme; 3] = [Theme::Default, Theme::Dark, Theme::Light];

    fn name(self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// `(alive, dead)` colours.
    fn colors(self) -> (Color32, Color32) {
        match self {
            Theme::Default => (Color32::from_rgb(0, 200, 0), Color32::from_rgb(40, 40, 40)),
            Theme::Dark => (Color32::from_rgb(200, 200, 200), Color32::from_rgb(10, 10, 10)),
            Theme::Light => (Color32::from_rgb(30, 30, 30), Color32::from_rgb(235, 235, 235)),
        }
    }
}

pub struct ViewerApp {
    // Must drop before `_runtime`.
    simulation: Simulation,
    _runtime: tokio::runtime::Runtime,
    world: WorldConfig,
    theme: Theme,
    selected_pattern: usize,
}

impl ViewerApp {
    pub fn new(simulation: Simulation, runtime: tokio::runtime::Runtime, world: WorldConfig) -> Self {
        Self {
            simulation,
            _runtime: runtime,
            world,
            theme: Theme::Default,
            selected_pattern: 0,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Update every");
            let mut interval = self.simulation.interval();
            if ui
                .add(egui::Slider::new(&mut interval, 0..=2000).suffix(" ms"))
                .changed()
            {
                self.simulation.set_interval(interval);
            }

            if self.simulation.is_running() {
                if ui.button("⏹ Stop").clicked() {
                    self.simulation.stop();
                }
            } else if ui.button("▶ Run").clicked() {
                self.simulation.run();
            }

            if ui.button("Step").clicked() {
                self.simulation.step_once();
            }
            if ui.button("🎲 Random").clicked() {
                self.simulation.randomize();
            }
            if ui.button("Clear").clicked() {
                self.simulation.clear();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Apply Pattern").clicked() {
                self.simulation.apply_pattern(&PATTERNS[self.selected_pattern]);
            }

            ui.separator();
            ui.label("Theme:");
            for theme in Theme::ALL {
                ui.radio_value(&mut self.theme, theme, theme.name());
            }
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let (alive, dead) = self.theme.colors();
        let cell = self.world.cell_size as f32;
        let (rows, cols) = self.simulation.dimensions();
        let size = Vec2::new(cols as f32 * cell, rows as f32 * cell);

        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(Rect::from_min_size(origin, size), 0.0, dead);
        for (x, y) in self.simulation.live_cells() {
            let min = origin + Vec2::new(x as f32 * cell + 1.0, y as f32 * cell + 1.0);
            let rect = Rect::from_min_size(min, Vec2::splat((cell - 2.0).max(1.0)));
            painter.rect_filled(rect, 1.0, alive);
        }
        painter.rect_stroke(
            Rect::from_min_size(origin, size),
            0.0,
            Stroke::new(1.0, Color32::from_gray(90)),
        );

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                let (x, y) = self.world.cell_at(offset.x, offset.y);
                debug!(x, y, "cell clicked");
                self.simulation.toggle_cell(x, y);
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            self.controls(ui);
            ui.separator();
            self.board(ui);
            ui.separator();

            let (rows, cols) = self.simulation.dimensions();
            let population = self.simulation.population();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.simulation.generation()));
                ui.label(format!("Live cells: {population}"));
                ui.label(format!(
                    "Population: {:.1}%",
                    population as f32 / (rows * cols) as f32 * 100.0
                ));
            });
        });

        // The timer task advances the board off-frame; poll it at the step rate.
        if self.simulation.is_running() {
            let interval = self.simulation.interval().max(16);
            ctx.request_repaint_after(Duration::from_millis(interval));
        }
    }
}
