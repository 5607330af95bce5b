use super::error::{DataError, Result};
use super::model::{ExperimentLog, LogFile, Table};

/// Half-open range `[start, end)` of absolute sample indices kept for
/// plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Skip `warm_up` samples at the front and `tail_margin` at the back of a
    /// recording with `samples` rows.
    ///
    /// Fails instead of yielding an empty or inverted window when the
    /// recording is not longer than `warm_up + tail_margin`.
    pub fn trimmed(samples: usize, warm_up: usize, tail_margin: usize) -> Result<Window> {
        let too_short = || DataError::WindowTooShort {
            samples,
            warm_up,
            tail_margin,
        };
        let end = samples.checked_sub(tail_margin).ok_or_else(too_short)?;
        if end <= warm_up {
            return Err(too_short());
        }
        Ok(Window {
            start: warm_up,
            end,
        })
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl ExperimentLog {
    /// Restrict every table and the time vector to `window`.
    ///
    /// Indices are absolute, so aligning an already-aligned log with the same
    /// window returns it unchanged.
    pub fn align(&self, window: Window) -> Result<ExperimentLog> {
        let slice = |file: LogFile, table: &Table| {
            table
                .slice_absolute(window.start, window.end)
                .ok_or(DataError::TableTooShort {
                    file,
                    first: table.origin(),
                    end: table.end(),
                    start: window.start,
                    required_end: window.end,
                })
        };

        let time = self
            .time
            .slice_absolute(window.start, window.end)
            .ok_or(DataError::TableTooShort {
                file: LogFile::Time,
                first: self.time.origin(),
                end: self.time.end(),
                start: window.start,
                required_end: window.end,
            })?;

        Ok(ExperimentLog {
            jpos_des: slice(LogFile::JposDes, &self.jpos_des)?,
            config: slice(LogFile::Config, &self.config)?,
            jvel_des: slice(LogFile::JvelDes, &self.jvel_des)?,
            qdot: slice(LogFile::Qdot, &self.qdot)?,
            joint_jvel: slice(LogFile::JointJvel, &self.joint_jvel)?,
            motor_jpos: slice(LogFile::MotorJpos, &self.motor_jpos)?,
            time,
        })
    }
}

/// Compute the window from the recording length and align every series to it.
///
/// The window is derived from the full recording, not the current slice, so
/// calling this again on its own output with the same margins is a no-op.
pub fn align_experiment(
    log: &ExperimentLog,
    warm_up: usize,
    tail_margin: usize,
) -> Result<(Window, ExperimentLog)> {
    let window = Window::trimmed(log.time.recorded(), warm_up, tail_margin)?;
    log::info!(
        "window [{}, {}) keeps {} of {} samples",
        window.start,
        window.end,
        window.len(),
        log.time.recorded()
    );
    Ok((window, log.align(window)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TimeVector;

    fn log_with(rows: usize, time_rows: usize) -> ExperimentLog {
        let table = |cols: usize| {
            Table::from_rows(cols, (0..rows * cols).map(|v| v as f64).collect())
        };
        ExperimentLog {
            jpos_des: table(6),
            config: table(12),
            jvel_des: table(6),
            qdot: table(12),
            joint_jvel: table(6),
            motor_jpos: table(6),
            time: TimeVector::new((0..time_rows).map(|i| i as f64 * 0.001).collect()),
        }
    }

    #[test]
    fn window_of_2500_samples_keeps_400() {
        let w = Window::trimmed(2500, 2000, 100).unwrap();
        assert_eq!(w, Window { start: 2000, end: 2400 });
        assert_eq!(w.len(), 400);
    }

    #[test]
    fn window_boundary_is_an_error() {
        assert!(matches!(
            Window::trimmed(2100, 2000, 100),
            Err(DataError::WindowTooShort { samples: 2100, .. })
        ));
        assert!(matches!(
            Window::trimmed(50, 2000, 100),
            Err(DataError::WindowTooShort { .. })
        ));
        assert_eq!(Window::trimmed(2101, 2000, 100).unwrap().len(), 1);
    }

    #[test]
    fn aligned_series_share_window_length() {
        let log = log_with(2500, 2500);
        let (window, aligned) = align_experiment(&log, 2000, 100).unwrap();
        assert_eq!(aligned.time.len(), window.len());
        for file in LogFile::TABLES {
            let t = aligned.table(file).unwrap();
            assert_eq!(t.rows(), window.len(), "{file}");
            assert_eq!(t.origin(), 2000);
        }
        assert_eq!(aligned.time.values()[0], log.time.values()[2000]);
        assert_eq!(aligned.time.values()[399], log.time.values()[2399]);
    }

    #[test]
    fn aligning_twice_is_identity() {
        let log = log_with(2500, 2500);
        let (window, once) = align_experiment(&log, 2000, 100).unwrap();
        let twice = once.align(window).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn realigning_output_keeps_the_window() {
        let log = log_with(2500, 2500);
        let (w1, once) = align_experiment(&log, 2000, 100).unwrap();
        let (w2, twice) = align_experiment(&once, 2000, 100).unwrap();
        assert_eq!(w1, w2);
        assert_eq!(twice.time.len(), 400);
        assert_eq!(once, twice);
    }

    #[test]
    fn short_table_fails_alignment() {
        let mut log = log_with(2500, 2500);
        log.qdot = Table::from_rows(12, vec![0.0; 12 * 2300]);
        let err = align_experiment(&log, 2000, 100).unwrap_err();
        assert!(matches!(
            err,
            DataError::TableTooShort { file: LogFile::Qdot, end: 2300, required_end: 2400, .. }
        ));
    }

    #[test]
    fn longer_tables_are_cut_to_time_vector() {
        let log = log_with(2600, 2500);
        let (_, aligned) = align_experiment(&log, 2000, 100).unwrap();
        assert_eq!(aligned.config.rows(), 400);
    }
}
