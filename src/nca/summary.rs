//! Cross-subject summary statistics and results-table export
//!
//! Aggregates per-subject [`PkResult`]s into the reporting table of the
//! study workbook: one row per parameter, one column per subject, plus
//! arithmetic mean and sample standard deviation. Subjects with an
//! undefined value for a parameter are excluded from that parameter's
//! aggregate — never treated as zero.

use super::error::NcaError;
use super::types::PkResult;

/// Reported parameters: internal key and display label, in reporting order
pub(crate) const METRIC_LABELS: [(&str, &str); 6] = [
    ("t_half", "T½ (hr)"),
    ("auc0_t", "AUC_0-t (uM*hr)"),
    ("auc0_inf", "AUC_0-inf (uM*hr)"),
    ("percent_extrap", "%Extrap"),
    ("c_max", "Cmax (uM)"),
    ("t_max", "Tmax (hr)"),
];

/// Aggregate of one parameter across subjects
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    /// Parameter key (matches [`PkResult::to_params`] names)
    pub name: &'static str,
    /// Number of subjects with a defined value
    pub n: usize,
    /// Arithmetic mean over defined values; `None` when no subject qualifies
    pub mean: Option<f64>,
    /// Sample standard deviation; `None` with fewer than 2 defined values
    pub sd: Option<f64>,
}

/// Summarize each parameter across a population of per-subject results
///
/// Takes the output of [`compute_pk_batch`]: failed subjects contribute to
/// no aggregate, and subjects whose terminal phase did not qualify are
/// excluded only from the half-life-dependent parameters.
///
/// [`compute_pk_batch`]: super::compute_pk_batch
pub fn summarize(results: &[Result<PkResult, NcaError>]) -> Vec<MetricSummary> {
    METRIC_LABELS
        .iter()
        .enumerate()
        .map(|(i, &(name, _))| {
            let values: Vec<f64> = results
                .iter()
                .filter_map(|r| r.as_ref().ok())
                .filter_map(|pk| pk.to_params()[i].1)
                .collect();
            let (mean, sd) = mean_sd(&values);
            MetricSummary {
                name,
                n: values.len(),
                mean,
                sd,
            }
        })
        .collect()
}

/// Render the results table as CSV
///
/// Shape matches the study workbook's results table: a `Parameter` column
/// with display labels, one `Subj{n}` column per subject in index order,
/// then `Mean` and `StDev`. Undefined values are left blank.
pub fn summary_to_csv(results: &[Result<PkResult, NcaError>]) -> Result<String, NcaError> {
    let summaries = summarize(results);

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<String> = vec!["Parameter".to_string()];
    header.extend((0..results.len()).map(|i| format!("Subj{}", i + 1)));
    header.push("Mean".to_string());
    header.push("StDev".to_string());
    writer
        .write_record(&header)
        .map_err(|e| NcaError::CsvExport(e.to_string()))?;

    for (i, (_, label)) in METRIC_LABELS.iter().enumerate() {
        let mut record: Vec<String> = vec![label.to_string()];
        for result in results {
            let cell = result.as_ref().ok().and_then(|pk| pk.to_params()[i].1);
            record.push(cell.map(|v| v.to_string()).unwrap_or_default());
        }
        record.push(format_opt(summaries[i].mean));
        record.push(format_opt(summaries[i].sd));
        writer
            .write_record(&record)
            .map_err(|e| NcaError::CsvExport(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| NcaError::CsvExport(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| NcaError::CsvExport(e.to_string()))
}

fn format_opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Arithmetic mean and sample standard deviation
fn mean_sd(values: &[f64]) -> (Option<f64>, Option<f64>) {
    let n = values.len();
    if n == 0 {
        return (None, None);
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let sd = if n > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0);
        Some(var.sqrt())
    } else {
        None
    };

    (Some(mean), sd)
}
