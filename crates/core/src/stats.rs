//! Exam-hall arithmetic: standardization, standard errors, confidence
//! intervals and critical-value lookups for the t and chi-squared
//! distributions.

use std::fmt;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("standard deviation must be positive and finite, got {provided}")]
    InvalidStandardDeviation { provided: f64 },
    #[error("sample size must be at least 1")]
    InvalidSampleSize,
    #[error("degrees of freedom must be at least 1")]
    InvalidDegreesOfFreedom,
}

//
// ─── STANDARDIZATION ───────────────────────────────────────────────────────────
//

/// Standardizes a value: `Z = (X - μ) / σ`.
///
/// # Errors
///
/// Returns `StatsError::InvalidStandardDeviation` if `sd` is zero, negative,
/// or not finite.
///
/// # Examples
///
/// ```
/// # use quiz_core::stats::z_score;
/// let z = z_score(70.0, 50.0, 10.0)?;
/// assert_eq!(z, 2.0);
/// # Ok::<(), quiz_core::stats::StatsError>(())
/// ```
pub fn z_score(value: f64, mean: f64, sd: f64) -> Result<f64, StatsError> {
    if !sd.is_finite() || sd <= 0.0 {
        return Err(StatsError::InvalidStandardDeviation { provided: sd });
    }
    Ok((value - mean) / sd)
}

/// Japanese-style deviation score (hensachi): `T = 10Z + 50`.
///
/// A Z-score of 2 maps to 70, a Z-score of -1 maps to 40.
#[must_use]
pub fn t_score(z: f64) -> f64 {
    z * 10.0 + 50.0
}

/// Standard error of the sample mean: `SE = σ / √n`.
///
/// # Errors
///
/// Returns `StatsError::InvalidStandardDeviation` for a non-positive or
/// non-finite `sd`, and `StatsError::InvalidSampleSize` for `n == 0`.
pub fn standard_error(sd: f64, n: u32) -> Result<f64, StatsError> {
    if !sd.is_finite() || sd <= 0.0 {
        return Err(StatsError::InvalidStandardDeviation { provided: sd });
    }
    if n == 0 {
        return Err(StatsError::InvalidSampleSize);
    }
    Ok(sd / f64::from(n).sqrt())
}

//
// ─── CONFIDENCE INTERVALS ──────────────────────────────────────────────────────
//

/// Two-sided confidence level for a mean interval with known σ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    Ninety,
    NinetyFive,
    NinetyNine,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 3] = [
        ConfidenceLevel::Ninety,
        ConfidenceLevel::NinetyFive,
        ConfidenceLevel::NinetyNine,
    ];

    /// The two-sided normal rejection point for this level.
    #[must_use]
    pub fn z_value(self) -> f64 {
        match self {
            ConfidenceLevel::Ninety => 1.645,
            ConfidenceLevel::NinetyFive => 1.960,
            ConfidenceLevel::NinetyNine => 2.576,
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = match self {
            ConfidenceLevel::Ninety => "90%",
            ConfidenceLevel::NinetyFive => "95%",
            ConfidenceLevel::NinetyNine => "99%",
        };
        f.write_str(pct)
    }
}

/// A two-sided interval estimate for the population mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Distance from the center to either bound.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        (self.upper - self.lower) / 2.0
    }
}

/// Confidence interval for the population mean with known σ:
/// `X̄ ± z × σ/√n`.
///
/// # Errors
///
/// Same conditions as [`standard_error`].
///
/// # Examples
///
/// ```
/// # use quiz_core::stats::{mean_confidence_interval, ConfidenceLevel};
/// let ci = mean_confidence_interval(60.0, 15.0, 100, ConfidenceLevel::NinetyFive)?;
/// assert!((ci.half_width() - 2.94).abs() < 1e-9);
/// # Ok::<(), quiz_core::stats::StatsError>(())
/// ```
pub fn mean_confidence_interval(
    mean: f64,
    sd: f64,
    n: u32,
    level: ConfidenceLevel,
) -> Result<ConfidenceInterval, StatsError> {
    let margin = level.z_value() * standard_error(sd, n)?;
    Ok(ConfidenceInterval {
        lower: mean - margin,
        upper: mean + margin,
    })
}

//
// ─── CRITICAL VALUE TABLES ─────────────────────────────────────────────────────
//

/// Significance level column in the printed tables.
///
/// For the t table these are two-sided levels; for the chi-squared table
/// they are upper-tail levels, matching how the tables appear in exam
/// formula sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignificanceLevel {
    TenPercent,
    FivePercent,
    TwoPointFivePercent,
    OnePercent,
}

impl SignificanceLevel {
    pub const ALL: [SignificanceLevel; 4] = [
        SignificanceLevel::TenPercent,
        SignificanceLevel::FivePercent,
        SignificanceLevel::TwoPointFivePercent,
        SignificanceLevel::OnePercent,
    ];

    /// The level as a probability.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            SignificanceLevel::TenPercent => 0.10,
            SignificanceLevel::FivePercent => 0.05,
            SignificanceLevel::TwoPointFivePercent => 0.025,
            SignificanceLevel::OnePercent => 0.01,
        }
    }

    fn column(self) -> usize {
        match self {
            SignificanceLevel::TenPercent => 0,
            SignificanceLevel::FivePercent => 1,
            SignificanceLevel::TwoPointFivePercent => 2,
            SignificanceLevel::OnePercent => 3,
        }
    }
}

impl fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SignificanceLevel::TenPercent => "0.10",
            SignificanceLevel::FivePercent => "0.05",
            SignificanceLevel::TwoPointFivePercent => "0.025",
            SignificanceLevel::OnePercent => "0.01",
        };
        f.write_str(label)
    }
}

/// A looked-up critical value, including which table row supplied it.
///
/// The tables carry the usual printed rows, so a request for an absent
/// df falls back to the nearest row. `df_used` records which one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalValue {
    pub value: f64,
    pub df_requested: u32,
    pub df_used: u32,
}

impl CriticalValue {
    /// True when the nearest-row fallback kicked in.
    #[must_use]
    pub fn is_approximate(&self) -> bool {
        self.df_requested != self.df_used
    }
}

/// Two-sided critical values of the t distribution. The 999 row stands in
/// for infinite degrees of freedom and matches the normal rejection points.
const T_TABLE: &[(u32, [f64; 4])] = &[
    (1, [6.314, 12.706, 25.452, 63.657]),
    (2, [2.920, 4.303, 6.205, 9.925]),
    (3, [2.353, 3.182, 4.177, 5.841]),
    (4, [2.132, 2.776, 3.495, 4.604]),
    (5, [2.015, 2.571, 3.163, 4.032]),
    (6, [1.943, 2.447, 2.969, 3.707]),
    (7, [1.895, 2.365, 2.841, 3.499]),
    (8, [1.860, 2.306, 2.752, 3.355]),
    (9, [1.833, 2.262, 2.685, 3.250]),
    (10, [1.812, 2.228, 2.634, 3.169]),
    (15, [1.753, 2.131, 2.490, 2.947]),
    (20, [1.725, 2.086, 2.423, 2.845]),
    (25, [1.708, 2.060, 2.385, 2.787]),
    (30, [1.697, 2.042, 2.360, 2.750]),
    (40, [1.684, 2.021, 2.329, 2.704]),
    (60, [1.671, 2.000, 2.299, 2.660]),
    (120, [1.658, 1.980, 2.270, 2.617]),
    (999, [1.645, 1.960, 2.241, 2.576]),
];

/// Upper-tail critical values of the chi-squared distribution.
const CHI_SQUARED_TABLE: &[(u32, [f64; 4])] = &[
    (1, [2.706, 3.841, 5.024, 6.635]),
    (2, [4.605, 5.991, 7.378, 9.210]),
    (3, [6.251, 7.815, 9.348, 11.345]),
    (4, [7.779, 9.488, 11.143, 13.277]),
    (5, [9.236, 11.070, 12.833, 15.086]),
    (6, [10.645, 12.592, 14.449, 16.812]),
    (7, [12.017, 14.067, 16.013, 18.475]),
    (8, [13.362, 15.507, 17.535, 20.090]),
    (9, [14.684, 16.919, 19.023, 21.666]),
    (10, [15.987, 18.307, 20.483, 23.209]),
    (15, [22.307, 24.996, 27.488, 30.578]),
    (20, [28.412, 31.410, 34.170, 37.566]),
    (25, [34.382, 37.652, 40.646, 44.314]),
    (30, [40.256, 43.773, 46.979, 50.892]),
];

fn lookup(
    table: &[(u32, [f64; 4])],
    df: u32,
    level: SignificanceLevel,
) -> Result<CriticalValue, StatsError> {
    if df == 0 {
        return Err(StatsError::InvalidDegreesOfFreedom);
    }

    // Strict < keeps the earlier row on a tie, so equidistant requests
    // resolve to the smaller df.
    let mut best = &table[0];
    for row in &table[1..] {
        if row.0.abs_diff(df) < best.0.abs_diff(df) {
            best = row;
        }
    }

    Ok(CriticalValue {
        value: best.1[level.column()],
        df_requested: df,
        df_used: best.0,
    })
}

/// Two-sided critical value of the t distribution.
///
/// # Errors
///
/// Returns `StatsError::InvalidDegreesOfFreedom` for `df == 0`.
///
/// # Examples
///
/// ```
/// # use quiz_core::stats::{t_critical, SignificanceLevel};
/// let t = t_critical(10, SignificanceLevel::FivePercent)?;
/// assert_eq!(t.value, 2.228);
/// assert!(!t.is_approximate());
/// # Ok::<(), quiz_core::stats::StatsError>(())
/// ```
pub fn t_critical(df: u32, level: SignificanceLevel) -> Result<CriticalValue, StatsError> {
    lookup(T_TABLE, df, level)
}

/// Upper-tail critical value of the chi-squared distribution.
///
/// # Errors
///
/// Returns `StatsError::InvalidDegreesOfFreedom` for `df == 0`.
pub fn chi_squared_critical(
    df: u32,
    level: SignificanceLevel,
) -> Result<CriticalValue, StatsError> {
    lookup(CHI_SQUARED_TABLE, df, level)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
