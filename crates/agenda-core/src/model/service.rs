use serde::{Deserialize, Serialize};

/// Aggregate figures for one service line. Names are unique per response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub name: String,
    pub count: u64,
    /// Average handle time in minutes.
    pub avg_handle_time: f64,
    /// First-call-resolution fraction in `[0, 1]`.
    pub first_call_resolution: f64,
}
