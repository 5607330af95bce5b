use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::layout::{FigureSize, LayoutCursor, LayoutDirection};

/// Joints per leg (hip, knee, ankle).
pub const JOINTS_PER_LEG: usize = 3;

/// Leading floating-base coordinates in configuration vectors (`config.txt`,
/// `qdot.txt`) before the first joint.
pub const FLOATING_BASE_DOF: usize = 6;

/// Data directory relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "../../experiment_data_check";

/// Samples dropped at the start of a recording while the controller settles.
pub const DEFAULT_WARM_UP_SAMPLES: usize = 2000;

/// Samples dropped at the end of a recording.
pub const DEFAULT_TAIL_MARGIN: usize = 100;

pub const DEFAULT_SUBFIGURE_WIDTH: u32 = 480;
pub const DEFAULT_SUBFIGURE_HEIGHT: u32 = 600;

// ---------------------------------------------------------------------------
// PlotConfig
// ---------------------------------------------------------------------------

/// Everything that controls one run. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Directory holding the experiment log files.
    pub data_dir: PathBuf,
    pub warm_up_samples: usize,
    pub tail_margin: usize,
    pub subfigure_width: u32,
    pub subfigure_height: u32,
    /// Number given to the first figure window.
    pub first_figure: usize,
    pub start_column: u32,
    pub start_row: u32,
    pub layout: LayoutDirection,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            warm_up_samples: DEFAULT_WARM_UP_SAMPLES,
            tail_margin: DEFAULT_TAIL_MARGIN,
            subfigure_width: DEFAULT_SUBFIGURE_WIDTH,
            subfigure_height: DEFAULT_SUBFIGURE_HEIGHT,
            first_figure: 1,
            start_column: 0,
            start_row: 0,
            layout: LayoutDirection::Horizontal,
        }
    }
}

impl PlotConfig {
    /// Read a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Data directory resolved against `cwd` when relative.
    pub fn resolved_data_dir(&self, cwd: &Path) -> PathBuf {
        if self.data_dir.is_absolute() {
            self.data_dir.clone()
        } else {
            cwd.join(&self.data_dir)
        }
    }

    pub fn figure_size(&self) -> FigureSize {
        FigureSize {
            width: self.subfigure_width,
            height: self.subfigure_height,
        }
    }

    pub fn start_cursor(&self) -> LayoutCursor {
        LayoutCursor::new(self.start_column, self.start_row, self.first_figure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: PlotConfig =
            serde_json::from_str(r#"{ "warm_up_samples": 500, "layout": "vertical" }"#).unwrap();
        assert_eq!(cfg.warm_up_samples, 500);
        assert_eq!(cfg.layout, LayoutDirection::Vertical);
        assert_eq!(cfg.tail_margin, DEFAULT_TAIL_MARGIN);
        assert_eq!(cfg.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn relative_data_dir_resolves_against_cwd() {
        let cfg = PlotConfig::default();
        let dir = cfg.resolved_data_dir(Path::new("/work/run"));
        assert_eq!(dir, Path::new("/work/run/../../experiment_data_check"));

        let abs = PlotConfig {
            data_dir: PathBuf::from("/data/exp"),
            ..PlotConfig::default()
        };
        assert_eq!(abs.resolved_data_dir(Path::new("/work")), Path::new("/data/exp"));
    }

    #[test]
    fn unknown_layout_is_rejected() {
        let res: std::result::Result<PlotConfig, _> =
            serde_json::from_str(r#"{ "layout": "diagonal" }"#);
        assert!(res.is_err());
    }
}
