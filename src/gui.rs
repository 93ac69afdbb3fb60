// CleanSlate - gui.rs
//
// Top-level eframe::App implementation. Wires the action and results
// panels together, dispatches requested batches to the background runner,
// and folds progress messages back into state.

use crate::app::runner::TaskRunner;
use crate::app::state::AppState;
use crate::core::model::TaskProgress;
use crate::ui;

/// The CleanSlate application.
pub struct CleanSlateApp {
    pub state: AppState,
    pub runner: TaskRunner,
}

impl CleanSlateApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            runner: TaskRunner::new(),
        }
    }
}

impl eframe::App for CleanSlateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for batch progress.
        let messages = self.runner.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                TaskProgress::Started { kind } => {
                    self.state.status_message = format!("Running: {}\u{2026}", kind.label());
                }
                TaskProgress::Completed { report } => {
                    self.state.status_message = match &report.outcome {
                        Ok(_) => format!("{}: done.", report.kind.label()),
                        Err(e) => format!("{}: {e}", report.kind.label()),
                    };
                    self.state.push_report(report);
                }
                TaskProgress::Finished => {
                    self.state.status_message = "Ready.".to_string();
                }
            }
        }
        self.state.busy = self.runner.is_busy();

        // Repaint while a batch is active so progress appears promptly.
        if had_messages || self.state.busy {
            ctx.request_repaint();
        }

        // A panel requested a batch this frame: hand it to the runner.
        // `start` refuses while busy, so two rapid triggers can never
        // produce interleaved sweeps.
        if let Some(batch) = self.state.pending_batch.take() {
            if !self.runner.start(batch, self.state.env.clone()) {
                self.state.status_message =
                    "An action is already running; wait for it to finish.".to_string();
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.busy {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.state.env.platform.label())
                            .small()
                            .weak(),
                    );
                });
            });
        });

        // Left: actions. Centre: results history.
        egui::SidePanel::left("actions")
            .default_width(ui::theme::ACTIONS_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui::panels::actions::render(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::results::render(ui, &mut self.state);
        });

        // About dialog (modal-ish)
        ui::panels::about::render(ctx, &mut self.state);
    }
}
