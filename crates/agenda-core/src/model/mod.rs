// ── Domain model ──
//
// Validated, read-only snapshots of what the backend returned. Built from
// `agenda_api::types` by `crate::convert`; nothing here is written back.

pub mod call;
pub mod entity_id;
pub mod integration;
pub mod kpi;
pub mod service;
pub mod settings;
pub mod summary;

pub use call::{CallRecord, Sentiment};
pub use entity_id::EntityId;
pub use integration::{IntegrationEntry, IntegrationList};
pub use kpi::{JobTypeCount, KpiSnapshot, SentimentBreakdown, TrendPoint};
pub use service::ServiceCategory;
pub use settings::{AccessControls, DataRetention, SecurityFlags, SettingsBundle};
pub use summary::Summary;
