//! Response types for the Voice Agenda analytics API.
//!
//! All types match the JSON bodies returned under `/api/`.
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`.
//! Every field is required: a missing or mistyped field fails deserialization,
//! which the client reports as [`Error::Shape`](crate::Error::Shape).

use serde::{Deserialize, Serialize};

// ── Envelopes ────────────────────────────────────────────────────────

/// `{ "items": [...] }` wrapper used by the calls, summaries, and
/// integrations endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsEnvelope<T> {
    pub items: Vec<T>,
}

/// `{ "categories": [...] }` wrapper used by the service-insights endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriesEnvelope<T> {
    pub categories: Vec<T>,
}

/// Record identifier. The backend emits either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

// ── KPIs ─────────────────────────────────────────────────────────────

/// Dashboard snapshot, from `GET /api/kpis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiResponse {
    pub call_volume: u64,
    /// Fraction in `[0, 1]`.
    pub resolution_rate: f64,
    pub sentiment: SentimentFractions,
    pub job_type_distribution: Vec<JobTypeCountResponse>,
    pub trend: Vec<TrendPointResponse>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentFractions {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTypeCountResponse {
    #[serde(rename = "type")]
    pub job_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPointResponse {
    pub day: String,
    pub calls: u64,
}

// ── Calls ────────────────────────────────────────────────────────────

/// One call record, from `GET /api/calls` (`items`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecordResponse {
    pub id: RawId,
    pub caller_name: String,
    pub call_type: String,
    /// ISO 8601 date-time, with or without offset.
    pub datetime: String,
    /// One of: `positive`, `neutral`, `negative`.
    pub sentiment: String,
    pub resolution_status: String,
}

// ── Service insights ─────────────────────────────────────────────────

/// Per-service aggregate, from `GET /api/service-insights` (`categories`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategoryResponse {
    pub name: String,
    pub count: u64,
    /// Minutes.
    pub avg_handle_time: f64,
    /// Fraction in `[0, 1]`.
    pub first_call_resolution: f64,
}

// ── Summaries ────────────────────────────────────────────────────────

/// Post-call summary, from `GET /api/summaries` (`items`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub id: RawId,
    pub caller: String,
    pub transcript_preview: String,
    pub action_items: Vec<String>,
}

// ── Integrations ─────────────────────────────────────────────────────

/// Integration toggle, from `GET /api/integrations` (`items`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationResponse {
    pub name: String,
    pub enabled: bool,
}

// ── Settings ─────────────────────────────────────────────────────────

/// Settings bundle, from `GET /api/settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub security: SecurityResponse,
    pub data_retention: RetentionResponse,
    pub access_controls: AccessControlsResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityResponse {
    pub mfa: bool,
    pub sso: bool,
    pub ip_allowlist: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionResponse {
    pub transcripts_days: u32,
    pub analytics_months: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessControlsResponse {
    pub roles: Vec<String>,
    pub default_role: String,
}

// ── Health ───────────────────────────────────────────────────────────

/// Liveness probe, from `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
