//! Static endpoint table.
//!
//! Each endpoint is a zero-sized marker binding a request path to the JSON
//! shape it returns, so [`ApiClient::get`](crate::ApiClient::get) can be
//! generic over the six dashboard resources plus the health probe.

use serde::de::DeserializeOwned;

use crate::types::{
    CallRecordResponse, CategoriesEnvelope, HealthResponse, IntegrationResponse, ItemsEnvelope,
    KpiResponse, ServiceCategoryResponse, SettingsResponse, SummaryResponse,
};

/// A GET endpoint with a fixed path and response shape.
pub trait Endpoint {
    /// Absolute path below the base URL, e.g. `/api/kpis`.
    const PATH: &'static str;
    type Response: DeserializeOwned + Send + 'static;
}

pub struct Kpis;
pub struct Calls;
pub struct ServiceInsights;
pub struct Summaries;
pub struct Integrations;
pub struct Settings;
pub struct Health;

impl Endpoint for Kpis {
    const PATH: &'static str = "/api/kpis";
    type Response = KpiResponse;
}

impl Endpoint for Calls {
    const PATH: &'static str = "/api/calls";
    type Response = ItemsEnvelope<CallRecordResponse>;
}

impl Endpoint for ServiceInsights {
    const PATH: &'static str = "/api/service-insights";
    type Response = CategoriesEnvelope<ServiceCategoryResponse>;
}

impl Endpoint for Summaries {
    const PATH: &'static str = "/api/summaries";
    type Response = ItemsEnvelope<SummaryResponse>;
}

impl Endpoint for Integrations {
    const PATH: &'static str = "/api/integrations";
    type Response = ItemsEnvelope<IntegrationResponse>;
}

impl Endpoint for Settings {
    const PATH: &'static str = "/api/settings";
    type Response = SettingsResponse;
}

impl Endpoint for Health {
    const PATH: &'static str = "/api/health";
    type Response = HealthResponse;
}
