use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – run summary and figure toggles
// ---------------------------------------------------------------------------

/// Render the summary of the loaded run and one checkbox per figure window.
pub fn run_panel(ui: &mut Ui, state: &mut AppState) {
    let layout = state.config.layout;
    let run = match &mut state.run {
        Some(run) => run,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a data directory  (File → Open data directory…)");
            });
            return;
        }
    };

    ui.heading("Run");
    ui.separator();

    egui::Grid::new("run_summary")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.strong("Directory");
            ui.label(run.data_dir.display().to_string());
            ui.end_row();

            ui.strong("Samples");
            ui.label(run.samples.to_string());
            ui.end_row();

            ui.strong("Window");
            ui.label(format!(
                "[{}, {})  ({} samples)",
                run.window.start,
                run.window.end,
                run.window.len()
            ));
            ui.end_row();

            if let Some((t0, t1)) = run.time_span {
                ui.strong("Time");
                ui.label(format!("{t0:.3} s … {t1:.3} s"));
                ui.end_row();
            }

            ui.strong("Layout");
            ui.label(format!("{layout:?}"));
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.heading("Figures");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for w in &mut run.figures {
                ui.horizontal(|ui: &mut Ui| {
                    ui.checkbox(
                        &mut w.open,
                        format!("{}: {}", w.placement.figure_number, w.figure.title),
                    );
                    ui.weak(w.placement.geometry());
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data directory…").clicked() {
                open_directory_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.run.is_some(), egui::Button::new("Export aligned window…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if ui.button("Show all").clicked() {
            state.set_all_open(true);
        }
        if ui.button("Hide all").clicked() {
            state.set_all_open(false);
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_directory_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new().set_title("Open experiment data directory");
    if let Some(run) = &state.run {
        dialog = dialog.set_directory(&run.data_dir);
    }

    if let Some(dir) = dialog.pick_folder() {
        state.reload(&dir);
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export aligned window")
        .add_filter("CSV", &["csv"])
        .set_file_name("aligned_window.csv")
        .save_file();

    if let Some(path) = file {
        state.export(&path);
    }
}
