use std::fs;
use std::path::Path;

use plot_joint::config::PlotConfig;
use plot_joint::data::DataError;
use plot_joint::data::loader::load_experiment;
use plot_joint::data::model::LogFile;
use plot_joint::data::sample::{SampleSpec, write_sample_experiment};
use plot_joint::data::window::align_experiment;
use plot_joint::figure::build_figures;
use plot_joint::layout::LayoutDirection;
use plot_joint::state::LoadedRun;

fn sample_dir(samples: usize) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_sample_experiment(
        dir.path(),
        SampleSpec {
            samples,
            ..SampleSpec::default()
        },
    )
    .unwrap();
    dir
}

/// Rewrite `file` keeping only its first `columns` columns.
fn truncate_columns(dir: &Path, file: LogFile, columns: usize) {
    let path = dir.join(file.file_name());
    let text = fs::read_to_string(&path).unwrap();
    let narrowed: Vec<String> = text
        .lines()
        .map(|l| l.split_whitespace().take(columns).collect::<Vec<_>>().join(" "))
        .collect();
    fs::write(&path, narrowed.join("\n")).unwrap();
}

#[test]
fn default_run_of_2500_samples() {
    let dir = sample_dir(2500);
    let run = LoadedRun::load(&PlotConfig::default(), dir.path()).unwrap();

    assert_eq!(run.samples, 2500);
    assert_eq!((run.window.start, run.window.end), (2000, 2400));
    assert_eq!(run.figures.len(), 4);

    let (t0, t1) = run.time_span.unwrap();
    assert!((t0 - 2.0).abs() < 1e-9);
    assert!((t1 - 2.399).abs() < 1e-9);

    for w in &run.figures {
        assert_eq!(w.figure.time.len(), 400);
        assert_eq!(w.figure.subplots.len(), 3);
        for sub in &w.figure.subplots {
            assert_eq!(sub.traces.len(), 3);
            assert!(sub.traces.iter().all(|t| t.values.len() == 400));
        }
    }

    let xs: Vec<u32> = run.figures.iter().map(|w| w.placement.x).collect();
    assert_eq!(xs, vec![0, 480, 960, 1440]);
}

#[test]
fn vertical_layout_stacks_windows() {
    let dir = sample_dir(2200);
    let config = PlotConfig {
        layout: LayoutDirection::Vertical,
        ..PlotConfig::default()
    };
    let run = LoadedRun::load(&config, dir.path()).unwrap();
    let geometry: Vec<String> = run.figures.iter().map(|w| w.placement.geometry()).collect();
    assert_eq!(
        geometry,
        vec!["480x600+0+0", "480x600+0+600", "480x600+0+1200", "480x600+0+1800"]
    );
}

#[test]
fn short_recording_is_rejected() {
    let dir = sample_dir(2100);
    let log = load_experiment(dir.path()).unwrap();
    let err = align_experiment(&log, 2000, 100).unwrap_err();
    assert!(matches!(err, DataError::WindowTooShort { samples: 2100, .. }));

    let err = LoadedRun::load(&PlotConfig::default(), dir.path())
        .err()
        .unwrap();
    assert!(format!("{err:#}").contains("time vector has 2100 samples"));
}

#[test]
fn narrow_config_fails_left_leg() {
    let dir = sample_dir(2300);
    truncate_columns(dir.path(), LogFile::Config, 10);

    let log = load_experiment(dir.path()).unwrap();
    let (_, aligned) = align_experiment(&log, 2000, 100).unwrap();
    let err = build_figures(&aligned).unwrap_err();
    assert!(matches!(
        err,
        DataError::ColumnOutOfRange {
            file: LogFile::Config,
            column: 10,
            ..
        }
    ));
}

#[test]
fn missing_file_aborts_load() {
    let dir = sample_dir(2300);
    fs::remove_file(dir.path().join("motor_jpos.txt")).unwrap();
    let err = load_experiment(dir.path()).unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
    assert!(err.to_string().contains("motor_jpos.txt"));
}

#[test]
fn export_writes_one_row_per_sample() {
    let dir = sample_dir(2300);
    let run = LoadedRun::load(&PlotConfig::default(), dir.path()).unwrap();
    let out = dir.path().join("aligned.csv");
    run.export(&out).unwrap();

    let mut reader = csv::Reader::from_path(&out).unwrap();
    let header = reader.headers().unwrap().clone();
    assert_eq!(header.len(), 1 + 4 * 3 * 3);
    assert_eq!(&header[0], "time");
    assert_eq!(&header[1], "jpos_right_leg.j0.jpos_des[0]");
    assert_eq!(reader.records().count(), 200);
}
