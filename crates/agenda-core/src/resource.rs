// ── Dashboard resources ──
//
// Binds each backend endpoint to the domain model it produces and to the
// tab that owns it. `Dashboard::load::<R>()` is generic over this trait,
// so adding a resource means one impl here and nothing else.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use agenda_api::Endpoint;
use agenda_api::endpoints::{Calls, Integrations, Kpis, ServiceInsights, Settings, Summaries};

use crate::convert;
use crate::error::CoreError;
use crate::model::{CallRecord, IntegrationList, KpiSnapshot, ServiceCategory, SettingsBundle, Summary};

/// An endpoint whose response converts into a validated domain model.
pub trait Resource: Endpoint {
    type Model: Send + Sync + 'static;

    /// The tab this resource feeds.
    const KIND: ResourceKind;

    fn into_model(raw: Self::Response) -> Result<Self::Model, CoreError>;
}

impl Resource for Kpis {
    type Model = KpiSnapshot;
    const KIND: ResourceKind = ResourceKind::Kpis;

    fn into_model(raw: Self::Response) -> Result<Self::Model, CoreError> {
        KpiSnapshot::try_from(raw)
    }
}

impl Resource for Calls {
    type Model = Vec<CallRecord>;
    const KIND: ResourceKind = ResourceKind::Calls;

    fn into_model(raw: Self::Response) -> Result<Self::Model, CoreError> {
        convert::call_records(raw)
    }
}

impl Resource for ServiceInsights {
    type Model = Vec<ServiceCategory>;
    const KIND: ResourceKind = ResourceKind::ServiceInsights;

    fn into_model(raw: Self::Response) -> Result<Self::Model, CoreError> {
        convert::service_categories(raw)
    }
}

impl Resource for Summaries {
    type Model = Vec<Summary>;
    const KIND: ResourceKind = ResourceKind::Summaries;

    fn into_model(raw: Self::Response) -> Result<Self::Model, CoreError> {
        convert::summaries(raw)
    }
}

impl Resource for Integrations {
    type Model = IntegrationList;
    const KIND: ResourceKind = ResourceKind::Integrations;

    fn into_model(raw: Self::Response) -> Result<Self::Model, CoreError> {
        Ok(convert::integrations(raw))
    }
}

impl Resource for Settings {
    type Model = SettingsBundle;
    const KIND: ResourceKind = ResourceKind::Settings;

    fn into_model(raw: Self::Response) -> Result<Self::Model, CoreError> {
        Ok(SettingsBundle::from(raw))
    }
}

// ── ResourceKind ─────────────────────────────────────────────────

/// The six dashboard resources, in tab order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ResourceKind {
    Kpis,
    Calls,
    ServiceInsights,
    Summaries,
    Integrations,
    Settings,
}

impl ResourceKind {
    pub const ALL: [Self; 6] = [
        Self::Kpis,
        Self::Calls,
        Self::ServiceInsights,
        Self::Summaries,
        Self::Integrations,
        Self::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Kpis => Kpis::PATH,
            Self::Calls => Calls::PATH,
            Self::ServiceInsights => ServiceInsights::PATH,
            Self::Summaries => Summaries::PATH,
            Self::Integrations => Integrations::PATH,
            Self::Settings => Settings::PATH,
        }
    }

    /// Tab label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Kpis => "Dashboard",
            Self::Calls => "Call Records",
            Self::ServiceInsights => "Service Insights",
            Self::Summaries => "Post-Call Summaries",
            Self::Integrations => "Integrations & Workflows",
            Self::Settings => "Settings & Compliance",
        }
    }

    /// Terse message shown in place of the tab when its fetch fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Kpis => "Failed to load KPIs",
            Self::Calls => "Failed to load calls",
            Self::ServiceInsights => "Failed to load service insights",
            Self::Summaries => "Failed to load summaries",
            Self::Integrations => "Failed to load integrations",
            Self::Settings => "Failed to load settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn paths_are_distinct_and_under_api() {
        let paths: HashSet<_> = ResourceKind::iter().map(ResourceKind::path).collect();
        assert_eq!(paths.len(), 6);
        assert!(paths.iter().all(|p| p.starts_with("/api/")));
    }

    #[test]
    fn all_matches_iteration_order() {
        let iterated: Vec<_> = ResourceKind::iter().collect();
        assert_eq!(iterated, ResourceKind::ALL);
    }

    #[test]
    fn resource_impls_point_at_their_kind() {
        assert_eq!(<Kpis as Resource>::KIND.path(), "/api/kpis");
        assert_eq!(<ServiceInsights as Resource>::KIND.path(), "/api/service-insights");
        assert_eq!(ResourceKind::Kpis.failure_message(), "Failed to load KPIs");
    }
}
