use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::figure::Figure;

/// Write the aligned series of `figures` to a CSV file.
///
/// Layout: a `time` column followed by one column per plotted series, named
/// `<figure key>.j<joint>.<series label>`; one row per aligned sample.
pub fn export_csv<'a>(path: &Path, figures: impl IntoIterator<Item = &'a Figure>) -> Result<()> {
    let writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let count = write_figures(writer, figures)?;
    log::info!("exported {count} figures to {}", path.display());
    Ok(())
}

/// Same as [`export_csv`] but into any writer. Returns the number of figures
/// written.
pub fn write_figures<'a, W: Write>(
    mut writer: csv::Writer<W>,
    figures: impl IntoIterator<Item = &'a Figure>,
) -> Result<usize> {
    let figures: Vec<&Figure> = figures.into_iter().collect();
    let Some(first) = figures.first() else {
        bail!("nothing to export");
    };
    let time = &first.time;

    let mut header = vec!["time".to_string()];
    let mut columns: Vec<&[f64]> = Vec::new();
    for fig in &figures {
        if fig.time.len() != time.len() {
            bail!(
                "{} has {} samples, expected {}",
                fig.title,
                fig.time.len(),
                time.len()
            );
        }
        for sub in &fig.subplots {
            for trace in &sub.traces {
                header.push(format!("{}.j{}.{}", fig.key, sub.joint, trace.label));
                columns.push(&trace.values);
            }
        }
    }

    writer.write_record(&header).context("writing CSV header")?;
    for (row, t) in time.iter().enumerate() {
        let mut record = Vec::with_capacity(header.len());
        record.push(t.to_string());
        record.extend(columns.iter().map(|col| col[row].to_string()));
        writer
            .write_record(&record)
            .with_context(|| format!("writing CSV row {row}"))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(figures.len())
}
