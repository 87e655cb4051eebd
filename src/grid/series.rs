//! Wide/long transforms between grid rows and per-subject series
//!
//! The grid is wide (one row per time point, one column per subject); the
//! NCA engine consumes one subject's long-format `(time, concentration)`
//! series with blanks stripped. These transforms bridge the two shapes.

use super::reconcile::{Column, ColumnKey, Row, SubjectId};

/// Extract every subject's cleaned series from grid rows
///
/// A row contributes a point to subject `s` only when both its time cell
/// and that subject's concentration cell are entered; blank cells are
/// dropped, not zeroed. Subjects with no usable rows yield an empty
/// series. The output is indexed by subject.
pub fn to_series(rows: &[Row], subjects: usize) -> Vec<Vec<(f64, f64)>> {
    (0..subjects)
        .map(|s| {
            rows.iter()
                .filter_map(|row| {
                    let time = row.time()?;
                    let conc = row.concentration(s)?;
                    Some((time, conc))
                })
                .collect()
        })
        .collect()
}

/// Seed grid rows from per-subject series
///
/// Builds one row per distinct time (sorted ascending, union across
/// subjects), with every subject column present and blank where that
/// subject has no observation at the time.
pub fn from_series(series: &[Vec<(f64, f64)>]) -> Vec<Row> {
    let columns: Vec<Column> = std::iter::once(Column::time())
        .chain((0..series.len()).map(Column::subject))
        .collect();

    let mut times: Vec<f64> = series.iter().flatten().map(|p| p.0).collect();
    times.sort_by(|a, b| a.total_cmp(b));
    times.dedup();

    times
        .iter()
        .map(|&time| {
            let mut row = Row::blank(&columns);
            row.set(ColumnKey::Time, Some(time));
            for (s, subject_series) in series.iter().enumerate() {
                if let Some(&(_, conc)) = subject_series.iter().find(|p| p.0 == time) {
                    row.set(ColumnKey::Subject(s as SubjectId), Some(conc));
                }
            }
            row
        })
        .collect()
}

/// The demo dataset of the study workbook: 3 subjects sampled at 8 time
/// points over 8 hours after an oral dose
pub fn example_rows() -> Vec<Row> {
    let times = [0.0833, 0.25, 0.5, 1.0, 2.0, 4.0, 6.0, 8.0];
    let concs = [
        [1.1, 3.04, 4.85, 3.93, 2.01, 1.02, 0.51, 0.25],
        [0.92, 2.8, 4.6, 4.1, 1.99, 1.05, 0.55, 0.3],
        [1.04, 3.23, 5.35, 4.1, 2.4, 1.12, 0.52, 0.27],
    ];

    let series: Vec<Vec<(f64, f64)>> = concs
        .iter()
        .map(|subject| times.iter().copied().zip(subject.iter().copied()).collect())
        .collect();

    from_series(&series)
}
