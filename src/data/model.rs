use std::fmt;

use super::error::{DataError, Result};

// ---------------------------------------------------------------------------
// LogFile – the fixed set of files an experiment writes
// ---------------------------------------------------------------------------

/// One of the files in an experiment data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogFile {
    /// Desired joint positions.
    JposDes,
    /// Measured configuration (floating base followed by joints).
    Config,
    /// Desired joint velocities.
    JvelDes,
    /// Measured configuration velocities.
    Qdot,
    /// Joint-sensor velocities.
    JointJvel,
    /// Motor-encoder positions.
    MotorJpos,
    /// Timestamps, one per sample row.
    Time,
}

impl LogFile {
    /// The six tabular files, in load order.
    pub const TABLES: [LogFile; 6] = [
        LogFile::JposDes,
        LogFile::Config,
        LogFile::JvelDes,
        LogFile::Qdot,
        LogFile::JointJvel,
        LogFile::MotorJpos,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            LogFile::JposDes => "jpos_des.txt",
            LogFile::Config => "config.txt",
            LogFile::JvelDes => "jvel_des.txt",
            LogFile::Qdot => "qdot.txt",
            LogFile::JointJvel => "joint_jvel.txt",
            LogFile::MotorJpos => "motor_jpos.txt",
            LogFile::Time => "time.txt",
        }
    }

    /// File name without the `.txt` suffix, used for series labels.
    pub fn stem(self) -> &'static str {
        let name = self.file_name();
        name.strip_suffix(".txt").unwrap_or(name)
    }
}

impl fmt::Display for LogFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// ---------------------------------------------------------------------------
// Table – dense row-major samples × channels
// ---------------------------------------------------------------------------

/// A dense 2-D table of samples (rows) by channels (columns).
///
/// `origin` is the absolute row index of the first stored row in the source
/// file, so a table that has already been windowed still answers in file
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    origin: usize,
    columns: usize,
    values: Vec<f64>,
}

impl Table {
    /// Build a table from row-major values. `values.len()` must be a multiple
    /// of `columns`; a trailing partial row is dropped.
    pub fn from_rows(columns: usize, mut values: Vec<f64>) -> Self {
        if columns == 0 {
            values.clear();
        } else {
            values.truncate(values.len() - values.len() % columns);
        }
        Self {
            origin: 0,
            columns,
            values,
        }
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    /// One past the absolute index of the last stored row.
    pub fn end(&self) -> usize {
        self.origin + self.rows()
    }

    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.values.len() / self.columns
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row by position within this table (not by absolute index).
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.rows() {
            return None;
        }
        let start = index * self.columns;
        self.values.get(start..start + self.columns)
    }

    /// Copy out one channel, or `None` if the table is too narrow.
    pub fn column(&self, column: usize) -> Option<Vec<f64>> {
        if column >= self.columns {
            return None;
        }
        Some(
            self.values
                .chunks_exact(self.columns)
                .map(|row| row[column])
                .collect(),
        )
    }

    /// Rows `[start, end)` in absolute coordinates, or `None` if the range
    /// is not covered.
    pub(crate) fn slice_absolute(&self, start: usize, end: usize) -> Option<Table> {
        if start < self.origin || end > self.end() || start > end {
            return None;
        }
        let lo = (start - self.origin) * self.columns;
        let hi = (end - self.origin) * self.columns;
        Some(Table {
            origin: start,
            columns: self.columns,
            values: self.values[lo..hi].to_vec(),
        })
    }
}

// ---------------------------------------------------------------------------
// TimeVector – one timestamp per sample row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TimeVector {
    origin: usize,
    /// Samples in the source file, kept across slicing.
    recorded: usize,
    values: Vec<f64>,
}

impl TimeVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            origin: 0,
            recorded: values.len(),
            values,
        }
    }

    /// Length of the full recording this vector was cut from.
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn end(&self) -> usize {
        self.origin + self.values.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// First and last timestamp, if any.
    pub fn span(&self) -> Option<(f64, f64)> {
        Some((*self.values.first()?, *self.values.last()?))
    }

    pub(crate) fn slice_absolute(&self, start: usize, end: usize) -> Option<TimeVector> {
        if start < self.origin || end > self.end() || start > end {
            return None;
        }
        Some(TimeVector {
            origin: start,
            recorded: self.recorded,
            values: self.values[start - self.origin..end - self.origin].to_vec(),
        })
    }
}

// ---------------------------------------------------------------------------
// ExperimentLog – everything loaded from one data directory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentLog {
    pub jpos_des: Table,
    pub config: Table,
    pub jvel_des: Table,
    pub qdot: Table,
    pub joint_jvel: Table,
    pub motor_jpos: Table,
    pub time: TimeVector,
}

impl ExperimentLog {
    /// The table loaded from `file`; `None` for [`LogFile::Time`].
    pub fn table(&self, file: LogFile) -> Option<&Table> {
        match file {
            LogFile::JposDes => Some(&self.jpos_des),
            LogFile::Config => Some(&self.config),
            LogFile::JvelDes => Some(&self.jvel_des),
            LogFile::Qdot => Some(&self.qdot),
            LogFile::JointJvel => Some(&self.joint_jvel),
            LogFile::MotorJpos => Some(&self.motor_jpos),
            LogFile::Time => None,
        }
    }

    /// One channel of a table, failing if the table is narrower than asked.
    pub fn column(&self, file: LogFile, column: usize) -> Result<Vec<f64>> {
        let columns = self.table(file).map_or(0, Table::columns);
        self.table(file)
            .and_then(|t| t.column(column))
            .ok_or(DataError::ColumnOutOfRange {
                file,
                column,
                columns,
            })
    }

    /// Number of samples, as given by the time vector.
    pub fn samples(&self) -> usize {
        self.time.len()
    }
}
