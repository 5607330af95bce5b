use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::PlotConfig;
use crate::data::export::export_csv;
use crate::data::loader::load_experiment;
use crate::data::window::{Window, align_experiment};
use crate::figure::{Figure, build_figures};
use crate::layout::{Placement, place_figures};

// ---------------------------------------------------------------------------
// One loaded experiment
// ---------------------------------------------------------------------------

/// A figure together with its window placement and visibility.
pub struct FigureWindow {
    pub figure: Figure,
    pub placement: Placement,
    pub open: bool,
}

/// Everything derived from one data directory.
pub struct LoadedRun {
    pub data_dir: PathBuf,
    /// Samples in the time vector before trimming.
    pub samples: usize,
    pub window: Window,
    /// First and last timestamp inside the window.
    pub time_span: Option<(f64, f64)>,
    pub figures: Vec<FigureWindow>,
}

impl LoadedRun {
    /// Load, align and lay out the figures for `data_dir`.
    pub fn load(config: &PlotConfig, data_dir: &Path) -> Result<Self> {
        let log = load_experiment(data_dir)
            .with_context(|| format!("loading experiment from {}", data_dir.display()))?;
        let (window, aligned) =
            align_experiment(&log, config.warm_up_samples, config.tail_margin)
                .context("aligning series")?;
        let figures = build_figures(&aligned).context("building figures")?;

        let (placements, _) = place_figures(
            figures.len(),
            config.start_cursor(),
            config.figure_size(),
            config.layout,
        );
        for (fig, p) in figures.iter().zip(&placements) {
            log::info!(
                "figure {} '{}' at {}",
                p.figure_number,
                fig.title,
                p.geometry()
            );
        }

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            samples: log.samples(),
            window,
            time_span: aligned.time.span(),
            figures: figures
                .into_iter()
                .zip(placements)
                .map(|(figure, placement)| FigureWindow {
                    figure,
                    placement,
                    open: true,
                })
                .collect(),
        })
    }

    pub fn export(&self, path: &Path) -> Result<()> {
        export_csv(path, self.figures.iter().map(|w| &w.figure))
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: PlotConfig,

    /// Currently displayed experiment.
    pub run: Option<LoadedRun>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: PlotConfig, run: LoadedRun) -> Self {
        Self {
            config,
            run: Some(run),
            status_message: None,
        }
    }

    /// Replace the current run with one loaded from `dir`. On failure the
    /// previous figures stay and the error is shown.
    pub fn reload(&mut self, dir: &Path) {
        match LoadedRun::load(&self.config, dir) {
            Ok(run) => {
                log::info!("Loaded {} samples from {}", run.samples, dir.display());
                self.run = Some(run);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", dir.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn export(&mut self, path: &Path) {
        let Some(run) = &self.run else {
            return;
        };
        match run.export(path) {
            Ok(()) => {
                self.status_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Show or hide every figure window.
    pub fn set_all_open(&mut self, open: bool) {
        if let Some(run) = &mut self.run {
            for w in &mut run.figures {
                w.open = open;
            }
        }
    }
}
