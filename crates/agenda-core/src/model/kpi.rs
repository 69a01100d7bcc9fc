use serde::{Deserialize, Serialize};

/// Dashboard snapshot: headline numbers plus the three chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub call_volume: u64,
    /// Fraction in `[0, 1]`.
    pub resolution_rate: f64,
    pub sentiment: SentimentBreakdown,
    /// Backend order is preserved; it drives bar order and palette cycling.
    pub job_types: Vec<JobTypeCount>,
    pub trend: Vec<TrendPoint>,
}

impl KpiSnapshot {
    /// Total number of categorized jobs across every job type.
    ///
    /// Conversion rejects totals that overflow; a hand-built snapshot
    /// saturates at `u64::MAX`.
    pub fn jobs_categorized(&self) -> u64 {
        self.job_types
            .iter()
            .fold(0, |total, j| total.saturating_add(j.count))
    }
}

/// Sentiment fractions. Each lies in `[0, 1]`; the sum is only approximately 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentBreakdown {
    pub fn total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTypeCount {
    pub job_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub day: String,
    pub calls: u64,
}
