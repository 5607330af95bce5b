use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::{DataError, Result};
use super::model::{ExperimentLog, LogFile, Table, TimeVector};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every log file of one experiment from `dir`.
///
/// The whole load fails on the first missing or malformed file; there is no
/// partial result.
pub fn load_experiment(dir: &Path) -> Result<ExperimentLog> {
    let table = |file: LogFile| load_table(&dir.join(file.file_name()));

    let log = ExperimentLog {
        jpos_des: table(LogFile::JposDes)?,
        config: table(LogFile::Config)?,
        jvel_des: table(LogFile::JvelDes)?,
        qdot: table(LogFile::Qdot)?,
        joint_jvel: table(LogFile::JointJvel)?,
        motor_jpos: table(LogFile::MotorJpos)?,
        time: load_time(&dir.join(LogFile::Time.file_name()))?,
    };

    for file in LogFile::TABLES {
        if let Some(t) = log.table(file) {
            log::info!("{file}: {} rows x {} columns", t.rows(), t.columns());
        }
    }
    log::info!("{}: {} samples", LogFile::Time, log.time.len());

    Ok(log)
}

// ---------------------------------------------------------------------------
// Whitespace-delimited tables
// ---------------------------------------------------------------------------

/// Load a whitespace-delimited numeric table without a header.
pub fn load_table(path: &Path) -> Result<Table> {
    let file = open(path)?;
    parse_table(BufReader::new(file), path)
}

/// Parse table text. `path` is only used to label errors.
///
/// Fields are separated by any run of whitespace, blank lines are skipped and
/// `#` starts a comment. Every row must be as wide as the first.
pub fn parse_table<R: BufRead>(reader: R, path: &Path) -> Result<Table> {
    let mut columns: Option<usize> = None;
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fields = split_fields(&line);
        if fields.is_empty() {
            continue;
        }

        let expected = *columns.get_or_insert(fields.len());
        if fields.len() != expected {
            return Err(DataError::Ragged {
                path: path.to_path_buf(),
                line: line_no,
                expected,
                found: fields.len(),
            });
        }

        for tok in fields {
            values.push(parse_value(tok, path, line_no)?);
        }
    }

    let Some(columns) = columns else {
        return Err(DataError::Empty {
            path: path.to_path_buf(),
        });
    };
    log::debug!(
        "{}: parsed {} values in {columns} columns",
        path.display(),
        values.len()
    );
    Ok(Table::from_rows(columns, values))
}

// ---------------------------------------------------------------------------
// Newline-delimited time vector
// ---------------------------------------------------------------------------

/// Load the time vector: exactly one value per non-blank line.
pub fn load_time(path: &Path) -> Result<TimeVector> {
    let file = open(path)?;
    parse_time(BufReader::new(file), path)
}

pub fn parse_time<R: BufRead>(reader: R, path: &Path) -> Result<TimeVector> {
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match split_fields(&line).as_slice() {
            [] => continue,
            [tok] => values.push(parse_value(tok, path, line_no)?),
            more => {
                return Err(DataError::TimeNotColumn {
                    path: path.to_path_buf(),
                    line: line_no,
                    found: more.len(),
                })
            }
        }
    }

    if values.is_empty() {
        return Err(DataError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(TimeVector::new(values))
}

// -- helpers --

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn split_fields(line: &str) -> Vec<&str> {
    let data = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    data.split_whitespace().collect()
}

fn parse_value(tok: &str, path: &Path, line: usize) -> Result<f64> {
    tok.parse::<f64>().map_err(|_| DataError::Parse {
        path: path.to_path_buf(),
        line,
        token: tok.to_string(),
    })
}
