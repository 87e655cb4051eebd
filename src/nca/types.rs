//! NCA result and option types

use serde::{Deserialize, Serialize};

/// Method for calculating AUC segments
///
/// [`AucMethod::Linear`] is the default: every segment uses the linear
/// trapezoid `(C1 + C2) / 2 × Δt`. [`AucMethod::LinUpLogDown`] is the
/// textbook refinement: the log trapezoid `(C1 − C2) × Δt / ln(C1/C2)` is
/// used where both concentrations are positive and strictly declining,
/// linear everywhere else (ascending segments, zeros, equal values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AucMethod {
    /// Linear trapezoidal rule for every segment
    #[default]
    Linear,
    /// Linear for ascending segments, log-linear for descending
    LinUpLogDown,
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NcaOptions {
    /// AUC integration method (default: Linear)
    pub auc_method: AucMethod,

    /// Number of terminal points to use for the log-linear half-life
    /// regression (default: 3). The fit takes up to this many points,
    /// walking back from the last positive concentration while the
    /// profile is strictly positive and strictly declining; at least
    /// 2 qualifying points are required.
    pub terminal_points: usize,
}

impl Default for NcaOptions {
    fn default() -> Self {
        Self {
            auc_method: AucMethod::Linear,
            terminal_points: 3,
        }
    }
}

impl NcaOptions {
    /// Set the AUC integration method
    pub fn with_auc_method(mut self, method: AucMethod) -> Self {
        self.auc_method = method;
        self
    }

    /// Set the number of terminal points for the half-life regression
    pub fn with_terminal_points(mut self, n: usize) -> Self {
        self.terminal_points = n;
        self
    }
}

/// Terminal-phase parameters, defined only when the log-linear fit qualifies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalPhase {
    /// Terminal elimination rate constant (1/time)
    pub lambda_z: f64,
    /// Terminal half-life, ln(2)/λz
    pub t_half: f64,
    /// AUC extrapolated to infinity: AUC0-t + Clast/λz
    pub auc0_inf: f64,
    /// Percent of AUC0-inf beyond the last observation
    pub percent_extrap: f64,
    /// Coefficient of determination of the log-linear regression
    pub r_squared: f64,
    /// Number of points used in the regression
    pub n_points: usize,
}

/// Per-subject NCA results
///
/// `c_max`, `t_max` and `auc0_t` are always defined for a non-empty
/// series. The half-life-dependent parameters live in [`terminal`] and
/// are absent when the terminal phase does not qualify; accessors flatten
/// them to `Option<f64>` for reporting.
///
/// [`terminal`]: PkResult::terminal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PkResult {
    /// Maximum observed concentration
    pub c_max: f64,
    /// Time of the maximum (earliest, on ties)
    pub t_max: f64,
    /// AUC from the first to the last observed time point
    pub auc0_t: f64,
    /// Terminal-phase parameters, if the fit qualified
    pub terminal: Option<TerminalPhase>,
}

impl PkResult {
    /// Terminal half-life, if defined
    #[inline]
    pub fn t_half(&self) -> Option<f64> {
        self.terminal.as_ref().map(|t| t.t_half)
    }

    /// AUC extrapolated to infinity, if defined
    #[inline]
    pub fn auc0_inf(&self) -> Option<f64> {
        self.terminal.as_ref().map(|t| t.auc0_inf)
    }

    /// Percent of AUC extrapolated, if defined
    #[inline]
    pub fn percent_extrap(&self) -> Option<f64> {
        self.terminal.as_ref().map(|t| t.percent_extrap)
    }

    /// All reported parameters as `(name, value)` pairs, in reporting
    /// order; undefined parameters are `None`
    pub fn to_params(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("t_half", self.t_half()),
            ("auc0_t", Some(self.auc0_t)),
            ("auc0_inf", self.auc0_inf()),
            ("percent_extrap", self.percent_extrap()),
            ("c_max", Some(self.c_max)),
            ("t_max", Some(self.t_max)),
        ]
    }
}
