use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use plot_joint::app::PlotJointApp;
use plot_joint::config::PlotConfig;
use plot_joint::layout::LayoutDirection;
use plot_joint::state::{AppState, LoadedRun};

/// Plot desired vs. measured joint signals of a robot experiment.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory with jpos_des.txt, config.txt, ... time.txt
    /// [default: ../../experiment_data_check]
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// JSON file with plot settings; flags given here take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Samples skipped at the start of the recording
    #[arg(long)]
    warm_up: Option<usize>,

    /// Samples dropped at the end of the recording
    #[arg(long)]
    tail_margin: Option<usize>,

    /// Direction in which figure windows are tiled
    #[arg(long, value_enum)]
    layout: Option<LayoutDirection>,

    /// Figure window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Figure window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Grid column of the first figure
    #[arg(long)]
    start_column: Option<u32>,

    /// Grid row of the first figure
    #[arg(long)]
    start_row: Option<u32>,

    /// Number of the first figure
    #[arg(long)]
    first_figure: Option<usize>,

    /// Write the aligned series to this CSV file and exit without plotting
    #[arg(long)]
    export: Option<PathBuf>,
}

impl Cli {
    fn plot_config(&self) -> Result<PlotConfig> {
        let mut cfg = match &self.config {
            Some(path) => PlotConfig::from_json_file(path)?,
            None => PlotConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            cfg.data_dir = dir.clone();
        }
        if let Some(n) = self.warm_up {
            cfg.warm_up_samples = n;
        }
        if let Some(n) = self.tail_margin {
            cfg.tail_margin = n;
        }
        if let Some(layout) = self.layout {
            cfg.layout = layout;
        }
        if let Some(w) = self.width {
            cfg.subfigure_width = w;
        }
        if let Some(h) = self.height {
            cfg.subfigure_height = h;
        }
        if let Some(c) = self.start_column {
            cfg.start_column = c;
        }
        if let Some(r) = self.start_row {
            cfg.start_row = r;
        }
        if let Some(n) = self.first_figure {
            cfg.first_figure = n;
        }
        Ok(cfg)
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.plot_config()?;
    let cwd = std::env::current_dir().context("reading working directory")?;
    let data_dir = config.resolved_data_dir(&cwd);

    let run = LoadedRun::load(&config, &data_dir)?;

    if let Some(path) = &cli.export {
        return run.export(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 340.0])
            .with_min_inner_size([320.0, 200.0]),
        ..Default::default()
    };

    let state = AppState::new(config, run);
    eframe::run_native(
        "plot_joint",
        options,
        Box::new(|_cc| Ok(Box::new(PlotJointApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("plot-joint").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_gives_defaults() {
        assert_eq!(cli(&[]).plot_config().unwrap(), PlotConfig::default());
    }

    #[test]
    fn flags_override_json_which_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.json");
        std::fs::write(
            &path,
            r#"{ "warm_up_samples": 500, "tail_margin": 50, "layout": "vertical" }"#,
        )
        .unwrap();
        let path = path.to_str().unwrap();

        let cfg = cli(&["--config", path, "--warm-up", "700", "--width", "320"])
            .plot_config()
            .unwrap();
        assert_eq!(cfg.warm_up_samples, 700);
        assert_eq!(cfg.subfigure_width, 320);
        assert_eq!(cfg.tail_margin, 50);
        assert_eq!(cfg.layout, LayoutDirection::Vertical);
        assert_eq!(cfg.subfigure_height, PlotConfig::default().subfigure_height);
        assert_eq!(cfg.data_dir, PlotConfig::default().data_dir);
    }

    #[test]
    fn layout_flag_beats_json_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.json");
        std::fs::write(&path, r#"{ "layout": "vertical", "start_row": 2 }"#).unwrap();

        let cfg = cli(&["--config", path.to_str().unwrap(), "--layout", "horizontal"])
            .plot_config()
            .unwrap();
        assert_eq!(cfg.layout, LayoutDirection::Horizontal);
        assert_eq!(cfg.start_row, 2);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = cli(&["--config", path.to_str().unwrap()])
            .plot_config()
            .unwrap_err();
        assert!(format!("{err:#}").contains("reading config"));
    }
}
