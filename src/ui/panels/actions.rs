// CleanSlate - ui/panels/actions.rs
//
// The action buttons: one per operation plus Run All. Every control is
// disabled while a batch is in flight -- that gate, together with the
// single worker thread, is what serialises operations.

use crate::app::state::AppState;
use crate::core::model::{DesktopApp, TaskKind};
use crate::ui::theme;
use egui::RichText;

/// Render the actions panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Actions");
    ui.add_space(6.0);

    ui.add_enabled_ui(!state.busy, |ui| {
        // -- DNS flush --
        if action_button(ui, "Flush DNS Cache")
            .on_hover_text("Discard the operating system's cached name lookups (affects all applications)")
            .clicked()
        {
            state.pending_batch = Some(vec![TaskKind::FlushDns]);
        }
        if state.env.platform.flush_needs_elevation() {
            ui.label(
                RichText::new("Requires administrator rights on this platform.")
                    .small()
                    .color(theme::ADVISORY),
            );
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // -- Browser data --
        for browser in state.browsers.clone() {
            let hover = format!(
                "Delete cache, cookies, history, and saved logins for {}. \
                 Close {} first -- open files cannot be removed.",
                browser.label(),
                browser.label()
            );
            if action_button(ui, &format!("Clear {} Data", browser.label()))
                .on_hover_text(hover)
                .clicked()
            {
                state.pending_batch = Some(vec![TaskKind::ClearBrowser {
                    id: browser.id().to_string(),
                }]);
            }
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // -- Desktop sign-out --
        for app in DesktopApp::all() {
            let hover = format!(
                "Delete {}'s stored session so it asks you to sign in again.",
                app.label()
            );
            if action_button(ui, &format!("Sign Out of {}", app.label()))
                .on_hover_text(hover)
                .clicked()
            {
                state.pending_batch = Some(vec![TaskKind::SignOut {
                    id: app.id().to_string(),
                }]);
            }
        }

        ui.add_space(14.0);

        // -- Run everything --
        if action_button(ui, "Run All")
            .on_hover_text("Perform every cleanup action above, one after another")
            .clicked()
        {
            state.pending_batch = Some(state.run_all_batch());
        }
    });

    if state.env.dry_run {
        ui.add_space(10.0);
        ui.label(
            RichText::new("Dry run: actions only report what they would remove.")
                .small()
                .color(theme::ADVISORY),
        );
    }
}

/// A full-width action button with consistent height.
fn action_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add_sized(
        [ui.available_width(), theme::BUTTON_HEIGHT],
        egui::Button::new(label),
    )
}
