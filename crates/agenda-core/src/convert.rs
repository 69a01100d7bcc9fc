// ── API-to-domain type conversions ──
//
// Bridges raw `agenda_api` response types into `agenda_core::model` types.
// Serde already rejects missing or mistyped fields; the checks here cover
// contract rules JSON types cannot express (ranges, enums carried as
// strings, per-response uniqueness). Every violation is a `Shape` error so
// the owning tab fails cleanly instead of rendering garbage.

use std::collections::HashSet;
use std::hash::Hash;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};

use agenda_api::types::{
    CallRecordResponse, CategoriesEnvelope, IntegrationResponse, ItemsEnvelope, KpiResponse,
    ServiceCategoryResponse, SettingsResponse, SummaryResponse,
};

use crate::error::CoreError;
use crate::model::{
    AccessControls, CallRecord, DataRetention, IntegrationEntry, IntegrationList, JobTypeCount,
    KpiSnapshot, SecurityFlags, Sentiment, SentimentBreakdown, ServiceCategory, SettingsBundle,
    Summary, TrendPoint,
};

/// Layouts accepted for timestamps that carry no UTC offset.
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

// ── Helpers ────────────────────────────────────────────────────────

/// Require a finite value in `[0, 1]`.
fn fraction(field: &str, value: f64) -> Result<f64, CoreError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::shape(format!(
            "{field} must be a fraction in [0, 1], got {value}"
        )))
    }
}

/// Parse an ISO-8601 timestamp. Offset-less values are read as local time.
fn parse_datetime(raw: &str) -> Result<DateTime<FixedOffset>, CoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt);
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| CoreError::shape(format!("datetime {raw:?} is not ISO-8601")))
}

/// Fail on the first key that appears twice.
fn ensure_unique<'a, K, I>(what: &str, keys: I) -> Result<(), CoreError>
where
    K: Eq + Hash + std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a K>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CoreError::shape(format!("duplicate {what} {key}")));
        }
    }
    Ok(())
}

// ── KPIs ─────────────────────────────────────────────────────────────

impl TryFrom<KpiResponse> for KpiSnapshot {
    type Error = CoreError;

    fn try_from(raw: KpiResponse) -> Result<Self, Self::Error> {
        // The "Jobs Categorized" card sums these.
        raw.job_type_distribution
            .iter()
            .try_fold(0_u64, |total, j| total.checked_add(j.count))
            .ok_or_else(|| CoreError::shape("jobTypeDistribution counts overflow"))?;

        Ok(Self {
            call_volume: raw.call_volume,
            resolution_rate: fraction("resolutionRate", raw.resolution_rate)?,
            sentiment: SentimentBreakdown {
                positive: fraction("sentiment.positive", raw.sentiment.positive)?,
                neutral: fraction("sentiment.neutral", raw.sentiment.neutral)?,
                negative: fraction("sentiment.negative", raw.sentiment.negative)?,
            },
            job_types: raw
                .job_type_distribution
                .into_iter()
                .map(|j| JobTypeCount {
                    job_type: j.job_type,
                    count: j.count,
                })
                .collect(),
            trend: raw
                .trend
                .into_iter()
                .map(|t| TrendPoint {
                    day: t.day,
                    calls: t.calls,
                })
                .collect(),
        })
    }
}

// ── Calls ────────────────────────────────────────────────────────────

impl TryFrom<CallRecordResponse> for CallRecord {
    type Error = CoreError;

    fn try_from(raw: CallRecordResponse) -> Result<Self, Self::Error> {
        let sentiment = Sentiment::from_str(&raw.sentiment).map_err(|_| {
            CoreError::shape(format!(
                "sentiment {:?} is not one of positive, neutral, negative",
                raw.sentiment
            ))
        })?;
        Ok(Self {
            id: raw.id.into(),
            caller_name: raw.caller_name,
            call_type: raw.call_type,
            datetime: parse_datetime(&raw.datetime)?,
            sentiment,
            resolution_status: raw.resolution_status,
        })
    }
}

pub fn call_records(
    raw: ItemsEnvelope<CallRecordResponse>,
) -> Result<Vec<CallRecord>, CoreError> {
    let records = raw
        .items
        .into_iter()
        .map(CallRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    ensure_unique("call id", records.iter().map(|r| &r.id))?;
    Ok(records)
}

// ── Service insights ─────────────────────────────────────────────────

impl TryFrom<ServiceCategoryResponse> for ServiceCategory {
    type Error = CoreError;

    fn try_from(raw: ServiceCategoryResponse) -> Result<Self, Self::Error> {
        if !raw.avg_handle_time.is_finite() || raw.avg_handle_time < 0.0 {
            return Err(CoreError::shape(format!(
                "avgHandleTime for {:?} must be a non-negative number, got {}",
                raw.name, raw.avg_handle_time
            )));
        }
        Ok(Self {
            first_call_resolution: fraction("firstCallResolution", raw.first_call_resolution)?,
            avg_handle_time: raw.avg_handle_time,
            count: raw.count,
            name: raw.name,
        })
    }
}

pub fn service_categories(
    raw: CategoriesEnvelope<ServiceCategoryResponse>,
) -> Result<Vec<ServiceCategory>, CoreError> {
    let categories = raw
        .categories
        .into_iter()
        .map(ServiceCategory::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    ensure_unique("service category", categories.iter().map(|c| &c.name))?;
    Ok(categories)
}

// ── Summaries ────────────────────────────────────────────────────────

impl From<SummaryResponse> for Summary {
    fn from(raw: SummaryResponse) -> Self {
        Self {
            id: raw.id.into(),
            caller: raw.caller,
            transcript_preview: raw.transcript_preview,
            action_items: raw.action_items,
        }
    }
}

pub fn summaries(raw: ItemsEnvelope<SummaryResponse>) -> Result<Vec<Summary>, CoreError> {
    let summaries: Vec<Summary> = raw.items.into_iter().map(Summary::from).collect();
    ensure_unique("summary id", summaries.iter().map(|s| &s.id))?;
    Ok(summaries)
}

// ── Integrations ─────────────────────────────────────────────────────

impl From<IntegrationResponse> for IntegrationEntry {
    fn from(raw: IntegrationResponse) -> Self {
        Self {
            name: raw.name,
            enabled: raw.enabled,
        }
    }
}

pub fn integrations(raw: ItemsEnvelope<IntegrationResponse>) -> IntegrationList {
    IntegrationList::new(raw.items.into_iter().map(IntegrationEntry::from).collect())
}

// ── Settings ─────────────────────────────────────────────────────────

impl From<SettingsResponse> for SettingsBundle {
    fn from(raw: SettingsResponse) -> Self {
        Self {
            security: SecurityFlags {
                mfa: raw.security.mfa,
                sso: raw.security.sso,
                ip_allowlist: raw.security.ip_allowlist,
            },
            retention: DataRetention {
                transcripts_days: raw.data_retention.transcripts_days,
                analytics_months: raw.data_retention.analytics_months,
            },
            access: AccessControls {
                roles: raw.access_controls.roles,
                default_role: raw.access_controls.default_role,
            },
        }
    }
}
