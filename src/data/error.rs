use std::path::PathBuf;

use thiserror::Error;

use super::model::LogFile;

/// Everything that can go wrong between reading the log directory and
/// handing plot-ready series to the UI.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: '{token}' is not a number", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("{}:{line}: expected {expected} columns, found {found}", .path.display())]
    Ragged {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}: no data rows", .path.display())]
    Empty { path: PathBuf },

    #[error("{}:{line}: time file must hold one value per line, found {found}", .path.display())]
    TimeNotColumn {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    /// The time vector does not extend past warm-up plus tail margin.
    #[error(
        "time vector has {samples} samples, need more than {} (warm-up {warm_up} + tail margin {tail_margin})",
        .warm_up + .tail_margin
    )]
    WindowTooShort {
        samples: usize,
        warm_up: usize,
        tail_margin: usize,
    },

    #[error("{file} covers rows {first}..{end}, window needs {start}..{required_end}")]
    TableTooShort {
        file: LogFile,
        first: usize,
        end: usize,
        start: usize,
        required_end: usize,
    },

    #[error("{file} has {columns} columns, column {column} requested")]
    ColumnOutOfRange {
        file: LogFile,
        column: usize,
        columns: usize,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;
