//! Internal profile representation for NCA analysis
//!
//! A `Profile` is a validated, time-sorted concentration-time series with
//! the Cmax and Tlast indices cached for the calculation functions.

use super::error::NcaError;

/// A validated concentration-time profile ready for analysis
#[derive(Debug, Clone)]
pub(crate) struct Profile {
    /// Time points, sorted ascending
    pub times: Vec<f64>,
    /// Concentration values, parallel to `times`
    pub concentrations: Vec<f64>,
    /// Index of Cmax (first occurrence on ties)
    pub cmax_idx: usize,
    /// Index of the last strictly positive concentration, if any
    pub tlast_idx: Option<usize>,
}

impl Profile {
    /// Build a profile from a subject's cleaned `(time, concentration)`
    /// series. Blank cells must already be stripped; duplicate times are a
    /// caller error and are not defended against. The input order does not
    /// matter — points are sorted by time here.
    ///
    /// # Errors
    /// [`NcaError::InsufficientData`] if the series is empty.
    pub fn new(series: &[(f64, f64)]) -> Result<Self, NcaError> {
        if series.is_empty() {
            return Err(NcaError::InsufficientData { n: 0, required: 1 });
        }

        let mut points = series.to_vec();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        let times: Vec<f64> = points.iter().map(|p| p.0).collect();
        let concentrations: Vec<f64> = points.iter().map(|p| p.1).collect();

        // First occurrence wins on ties
        let cmax_idx = concentrations
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(max_i, max_c), (i, &c)| {
                if c > max_c {
                    (i, c)
                } else {
                    (max_i, max_c)
                }
            })
            .0;

        let tlast_idx = concentrations.iter().rposition(|&c| c > 0.0);

        Ok(Self {
            times,
            concentrations,
            cmax_idx,
            tlast_idx,
        })
    }

    /// Maximum observed concentration
    #[inline]
    pub fn cmax(&self) -> f64 {
        self.concentrations[self.cmax_idx]
    }

    /// Time of the maximum
    #[inline]
    pub fn tmax(&self) -> f64 {
        self.times[self.cmax_idx]
    }

    /// Last strictly positive concentration, if any
    #[inline]
    pub fn clast(&self) -> Option<f64> {
        self.tlast_idx.map(|i| self.concentrations[i])
    }
}
