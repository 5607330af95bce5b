use eframe::egui;

use crate::state::{AppState, FigureWindow};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlotJointApp {
    pub state: AppState,
}

impl PlotJointApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PlotJointApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: run summary ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::run_panel(ui, &mut self.state);
        });

        // ---- One native window per figure ----
        if let Some(run) = &mut self.state.run {
            for window in run.figures.iter_mut().filter(|w| w.open) {
                show_figure_window(ctx, window);
            }
        }
    }
}

/// Draw one figure in its own viewport at its placed position. Closing the
/// viewport hides the figure until it is re-enabled from the control window.
fn show_figure_window(ctx: &egui::Context, window: &mut FigureWindow) {
    let p = window.placement;
    let figure = &window.figure;
    let (pos, size) = p.logical(ctx.pixels_per_point());
    let viewport_id = egui::ViewportId::from_hash_of(("figure", p.figure_number));
    let builder = egui::ViewportBuilder::default()
        .with_title(figure.title.clone())
        .with_inner_size(size)
        .with_position(pos);

    let closed = ctx.show_viewport_immediate(viewport_id, builder, |ctx, class| {
        if class == egui::ViewportClass::Embedded {
            // Backend cannot open native windows: fall back to an egui window.
            let mut open = true;
            egui::Window::new(figure.title.as_str())
                .id(egui::Id::new(("figure", p.figure_number)))
                .open(&mut open)
                .default_pos(pos)
                .default_size(size)
                .show(ctx, |ui| plot::figure_view(ui, figure));
            return !open;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure_view(ui, figure);
        });
        ctx.input(|i| i.viewport().close_requested())
    });

    if closed {
        log::debug!("figure {} hidden", p.figure_number);
        window.open = false;
    }
}
