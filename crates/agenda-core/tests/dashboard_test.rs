// Integration tests for `Dashboard` + `ViewController` against wiremock.
#![allow(clippy::unwrap_used)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use agenda_api::ApiClient;
use agenda_core::present::dashboard_cards;
use agenda_core::{
    Calls, ConnectionState, CoreError, Dashboard, DashboardConfig, Integrations, Kpis,
    ResourceKind, RevisitPolicy, ServiceInsights, Settings, StateKind, Summaries,
    ViewController,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn dashboard(server: &MockServer, revisit: RevisitPolicy) -> Dashboard {
    let mut config = DashboardConfig::new(server.uri().parse().unwrap());
    config.revisit = revisit;
    let client = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    Dashboard::with_client(config, client)
}

async fn mount(server: &MockServer, route: &str, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

fn kpis_body() -> Value {
    json!({
        "callVolume": 1240,
        "resolutionRate": 0.873,
        "sentiment": { "positive": 0.6, "neutral": 0.25, "negative": 0.15 },
        "jobTypeDistribution": [
            { "type": "Plumbing", "count": 12 },
            { "type": "HVAC", "count": 8 }
        ],
        "trend": [{ "day": "Mon", "calls": 200 }]
    })
}

fn calls_body() -> Value {
    json!({ "items": [
        {
            "id": 1, "callerName": "Dana", "callType": "Booking",
            "datetime": "2025-03-04T09:30:00Z", "sentiment": "positive",
            "resolutionStatus": "Resolved"
        },
        {
            "id": 2, "callerName": "Lee", "callType": "Support",
            "datetime": "2025-03-04T11:00:00", "sentiment": "negative",
            "resolutionStatus": "Escalated"
        }
    ]})
}

// ── Activation ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_each_tab_activation_issues_exactly_one_request() {
    let server = MockServer::start().await;
    mount(&server, "/api/kpis", kpis_body(), 1).await;
    mount(&server, "/api/calls", calls_body(), 1).await;
    mount(
        &server,
        "/api/service-insights",
        json!({ "categories": [
            { "name": "HVAC", "count": 3, "avgHandleTime": 4.5, "firstCallResolution": 0.5 }
        ]}),
        1,
    )
    .await;
    mount(
        &server,
        "/api/summaries",
        json!({ "items": [
            { "id": "a", "caller": "Dana", "transcriptPreview": "Hi", "actionItems": [] }
        ]}),
        1,
    )
    .await;
    mount(
        &server,
        "/api/integrations",
        json!({ "items": [{ "name": "Slack", "enabled": false }] }),
        1,
    )
    .await;
    mount(
        &server,
        "/api/settings",
        json!({
            "security": { "mfa": true, "sso": true, "ipAllowlist": false },
            "dataRetention": { "transcriptsDays": 30, "analyticsMonths": 6 },
            "accessControls": { "roles": ["Admin"], "defaultRole": "Admin" }
        }),
        1,
    )
    .await;

    let dash = dashboard(&server, RevisitPolicy::Keep);

    // Activate every tab twice; the second activation must be a no-op.
    let mut kpis = dash.controller();
    let mut calls = dash.controller();
    let mut insights = dash.controller();
    let mut summaries = dash.controller();
    let mut integrations = dash.controller();
    let mut settings = dash.controller();
    for _ in 0..2 {
        assert_eq!(dash.run::<Kpis>(&mut kpis).await.kind(), StateKind::Ready);
        assert_eq!(dash.run::<Calls>(&mut calls).await.kind(), StateKind::Ready);
        assert_eq!(
            dash.run::<ServiceInsights>(&mut insights).await.kind(),
            StateKind::Ready
        );
        assert_eq!(
            dash.run::<Summaries>(&mut summaries).await.kind(),
            StateKind::Ready
        );
        assert_eq!(
            dash.run::<Integrations>(&mut integrations).await.kind(),
            StateKind::Ready
        );
        assert_eq!(
            dash.run::<Settings>(&mut settings).await.kind(),
            StateKind::Ready
        );
    }

    let snapshot = kpis.state().value().unwrap();
    let values: Vec<_> = dashboard_cards(snapshot)
        .into_iter()
        .map(|c| c.value)
        .collect();
    assert_eq!(values, vec!["1240", "87%", "60%", "20"]);
}

#[tokio::test]
async fn test_refetch_policy_requests_again_on_revisit() {
    let server = MockServer::start().await;
    mount(&server, "/api/calls", calls_body(), 2).await;

    let dash = dashboard(&server, RevisitPolicy::Refetch);
    let mut calls = dash.controller();

    dash.run::<Calls>(&mut calls).await;
    calls.deactivate();
    assert_eq!(calls.state().kind(), StateKind::Idle);
    let state = dash.run::<Calls>(&mut calls).await;

    assert_eq!(state.value().unwrap().len(), 2);
}

// ── Failure isolation ───────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_fails_only_that_tab() {
    let server = MockServer::start().await;
    mount(&server, "/api/kpis", kpis_body(), 1).await;
    Mock::given(method("GET"))
        .and(path("/api/calls"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let dash = dashboard(&server, RevisitPolicy::Keep);
    let mut kpis = dash.controller();
    let mut calls = dash.controller();

    let calls_state = dash.run::<Calls>(&mut calls).await;
    let kpis_state = dash.run::<Kpis>(&mut kpis).await;

    assert!(matches!(
        **calls_state.error().unwrap(),
        CoreError::RequestFailed { status: 500 }
    ));
    assert_eq!(kpis_state.kind(), StateKind::Ready);
    assert_eq!(
        ResourceKind::Calls.failure_message(),
        "Failed to load calls"
    );
}

#[tokio::test]
async fn test_contract_drift_becomes_failed_state() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/calls",
        json!({ "items": [{
            "id": 1, "callerName": "Dana", "callType": "Booking",
            "datetime": "2025-03-04T09:30:00Z", "sentiment": "ecstatic",
            "resolutionStatus": "Resolved"
        }]}),
        1,
    )
    .await;
    mount(&server, "/api/kpis", json!({ "callVolume": 3 }), 1).await;

    let dash = dashboard(&server, RevisitPolicy::Keep);
    let mut calls = dash.controller();
    let mut kpis = dash.controller();

    let calls_state = dash.run::<Calls>(&mut calls).await;
    let kpis_state = dash.run::<Kpis>(&mut kpis).await;

    assert_eq!(calls_state.error().unwrap().kind(), "shape");
    assert_eq!(kpis_state.error().unwrap().kind(), "shape");
}

#[tokio::test]
async fn test_malformed_json_becomes_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let dash = dashboard(&server, RevisitPolicy::Keep);
    let err = dash.load::<Settings>().await.unwrap_err();

    assert_eq!(err.kind(), "parse");
}

// ── Stale responses ─────────────────────────────────────────────────

#[tokio::test]
async fn test_out_of_order_resolution_keeps_newest() {
    let server = MockServer::start().await;
    mount(&server, "/api/kpis", kpis_body(), 2).await;

    let dash = dashboard(&server, RevisitPolicy::Refetch);
    let mut kpis: ViewController<_> = dash.controller();

    let first = kpis.activate().unwrap();
    kpis.deactivate();
    let second = kpis.activate().unwrap();

    let (old, new) = tokio::join!(dash.load::<Kpis>(), dash.load::<Kpis>());

    assert!(kpis.resolve(second, new));
    assert!(!kpis.resolve(first, old));
    assert_eq!(kpis.epoch(), second.epoch());
    assert_eq!(kpis.state().kind(), StateKind::Ready);
}

// ── Health ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_updates_connection_state() {
    let server = MockServer::start().await;
    mount(&server, "/api/health", json!({ "status": "ok" }), 1).await;

    let dash = dashboard(&server, RevisitPolicy::Keep);
    let rx = dash.connection_state();
    assert_eq!(*rx.borrow(), ConnectionState::Unknown);

    assert_eq!(dash.health().await.unwrap(), "ok");
    assert_eq!(*rx.borrow(), ConnectionState::Online);
}

#[tokio::test]
async fn test_failed_health_marks_offline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dash = dashboard(&server, RevisitPolicy::Keep);
    assert!(dash.health().await.is_err());
    assert_eq!(*dash.connection_state().borrow(), ConnectionState::Offline);
}
