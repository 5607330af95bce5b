use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::figure::Figure;

/// Smallest subplot height before the stack stops shrinking.
const MIN_SUBPLOT_HEIGHT: f32 = 60.0;

// ---------------------------------------------------------------------------
// Figure (one viewport): stacked joint subplots
// ---------------------------------------------------------------------------

/// Render the subplots of `figure` stacked vertically, sharing the available
/// height. Only the bottom subplot carries the time axis label.
pub fn figure_view(ui: &mut Ui, figure: &Figure) {
    let n = figure.subplots.len().max(1);
    let spacing = ui.spacing().item_spacing.y * (n - 1) as f32;
    let height = ((ui.available_height() - spacing) / n as f32).max(MIN_SUBPLOT_HEIGHT);

    for (i, sub) in figure.subplots.iter().enumerate() {
        let mut plot = Plot::new((figure.key.as_str(), sub.joint))
            .height(height)
            .show_grid(true)
            .legend(Legend::default())
            .y_axis_label(format!("joint {}", sub.joint))
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_zoom(true);
        if i + 1 == figure.subplots.len() {
            plot = plot.x_axis_label("time (sec)");
        }

        plot.show(ui, |plot_ui| {
            for trace in &sub.traces {
                let points: PlotPoints = figure
                    .time
                    .iter()
                    .zip(trace.values.iter())
                    .map(|(&t, &v)| [t, v])
                    .collect();

                let line = Line::new(points)
                    .name(&trace.label)
                    .color(trace.color)
                    .width(1.0);

                plot_ui.line(line);
            }
        });
    }
}
