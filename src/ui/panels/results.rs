// CleanSlate - ui/panels/results.rs
//
// Results history: one entry per completed operation, newest first.
// Success shows what was removed; failure shows the typed reason and, for
// partial failures, the list of paths that remain.

use crate::app::state::AppState;
use crate::core::model::{format_bytes, CleanupReport, TaskKind};
use crate::ui::theme;
use crate::util::constants::MAX_FAILED_PATHS_SHOWN;
use crate::util::error::CleanupError;
use egui::RichText;

/// Render the results panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Results");
    ui.add_space(6.0);

    // Config warnings surface once, dismissably, above the history.
    if !state.config_warnings.is_empty() {
        let mut dismiss = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            for warning in &state.config_warnings {
                ui.label(RichText::new(warning).small().color(theme::ADVISORY));
            }
            dismiss = ui.small_button("Dismiss").clicked();
        });
        if dismiss {
            state.config_warnings.clear();
        }
        ui.add_space(6.0);
    }

    if state.reports.is_empty() {
        ui.label(RichText::new("No actions run yet.").weak());
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for report in state.reports.iter().rev() {
                render_report(ui, report);
                ui.add_space(4.0);
            }
        });
}

fn render_report(ui: &mut egui::Ui, report: &CleanupReport) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            let (mark, colour) = match &report.outcome {
                Ok(_) => ("\u{2713}", theme::SUCCESS),
                Err(_) => ("\u{2717}", theme::FAILURE),
            };
            ui.label(RichText::new(mark).color(colour).strong());
            let mut title = report.kind.label();
            if report.dry_run {
                title.push_str(" (dry run)");
            }
            ui.label(RichText::new(title).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(report.finished_at.format("%H:%M:%S").to_string())
                        .small()
                        .color(theme::DETAIL),
                );
            });
        });

        match &report.outcome {
            Ok(stats) => {
                let summary = match report.kind {
                    TaskKind::FlushDns => "DNS resolver cache flushed.".to_string(),
                    _ if report.dry_run => format!(
                        "Would remove {} item(s) ({}).",
                        stats.removed,
                        format_bytes(stats.bytes_reclaimed)
                    ),
                    _ => format!(
                        "Removed {} item(s), reclaimed {}.",
                        stats.removed,
                        format_bytes(stats.bytes_reclaimed)
                    ),
                };
                ui.label(RichText::new(summary).small());
            }
            Err(error) => {
                ui.label(
                    RichText::new(error.to_string())
                        .small()
                        .color(theme::FAILURE),
                );
                if let CleanupError::PathsLocked {
                    failed,
                    total_failed,
                    ..
                } = error
                {
                    for item in failed.iter().take(MAX_FAILED_PATHS_SHOWN) {
                        ui.label(
                            RichText::new(format!("  {}", item.path.display()))
                                .small()
                                .color(theme::DETAIL),
                        );
                    }
                    let shown = failed.len().min(MAX_FAILED_PATHS_SHOWN);
                    if *total_failed > shown {
                        ui.label(
                            RichText::new(format!("  +{} more", total_failed - shown))
                                .small()
                                .color(theme::DETAIL),
                        );
                    }
                }
            }
        }
    });
}
