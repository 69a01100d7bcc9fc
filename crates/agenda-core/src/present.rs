// ── Presentation contracts ──
//
// Pure mappings from domain values to the strings, colors, and proportions
// a renderer shows. The CLI and TUI both draw from here, so the two
// surfaces cannot disagree about what "87%" means.

use chrono::{DateTime, Datelike, FixedOffset, Local};

use crate::model::{KpiSnapshot, Sentiment, SentimentBreakdown, ServiceCategory, SettingsBundle};

pub const PRODUCT_NAME: &str = "Voice Agenda";

/// Placeholder for `Idle` and `Loading` states.
pub const LOADING: &str = "Loading...";

pub const TREND_TITLE: &str = "Weekly Call Trend";
pub const SENTIMENT_TITLE: &str = "Sentiment Breakdown";
pub const JOB_TYPES_TITLE: &str = "Job Type Distribution";

/// Decorative buttons on every summary card. They trigger nothing.
pub const SUMMARY_ACTIONS: [&str; 2] = ["Assign", "Follow-up"];

pub const CALL_COLUMNS: [&str; 5] = [
    "Caller Name",
    "Call Type",
    "Date/Time",
    "Sentiment",
    "Resolution Status",
];

// ── Colors ───────────────────────────────────────────────────────

/// 24-bit color, independent of any rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub const GREEN: Rgb = Rgb(0x4C, 0xAF, 0x50);
pub const GRAY: Rgb = Rgb(0x9E, 0x9E, 0x9E);
pub const RED: Rgb = Rgb(0xB7, 0x1C, 0x1C);

/// Bar colors, cycled by index.
pub const WARM_PALETTE: [Rgb; 4] = [
    GREEN,
    Rgb(0x8B, 0xC3, 0x4A),
    Rgb(0xA5, 0xD6, 0xA7),
    Rgb(0xC8, 0xE6, 0xC9),
];

/// Fixed sentiment colors. Never depends on data order.
pub fn sentiment_color(sentiment: Sentiment) -> Rgb {
    match sentiment {
        Sentiment::Positive => GREEN,
        Sentiment::Neutral => GRAY,
        Sentiment::Negative => RED,
    }
}

pub fn bar_palette_slot(index: usize) -> usize {
    index % WARM_PALETTE.len()
}

pub fn bar_color(index: usize) -> Rgb {
    WARM_PALETTE[bar_palette_slot(index)]
}

// ── Numbers ──────────────────────────────────────────────────────

/// Round-half-up percentage of a fraction: `0.873 -> 87`, `0.875 -> 88`.
///
/// Inputs are clamped to `[0, 1]`; conversion already rejects anything
/// outside that range.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
pub fn percent(fraction: f64) -> u32 {
    let clamped = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (clamped * 100.0 + 0.5).floor() as u32
}

pub fn percent_label(fraction: f64) -> String {
    format!("{}%", percent(fraction))
}

// ── Dashboard ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub label: &'static str,
    pub value: String,
}

/// The four headline cards, in display order.
pub fn dashboard_cards(kpis: &KpiSnapshot) -> [Card; 4] {
    [
        Card {
            label: "Monthly Call Volume",
            value: kpis.call_volume.to_string(),
        },
        Card {
            label: "Resolution Rate",
            value: percent_label(kpis.resolution_rate),
        },
        Card {
            label: "Positive Sentiment",
            value: percent_label(kpis.sentiment.positive),
        },
        Card {
            label: "Jobs Categorized",
            value: kpis.jobs_categorized().to_string(),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentSegment {
    pub sentiment: Sentiment,
    pub color: Rgb,
    /// Fraction of the whole ring; the three shares sum to 1 (or all are 0).
    pub share: f64,
    /// The fraction as received.
    pub raw: f64,
}

/// Ring segments in fixed positive, neutral, negative order.
///
/// Shares are normalized by the sum so the segments always fill the whole,
/// even when the backend's fractions only approximately add up to 1.
pub fn sentiment_segments(sentiment: &SentimentBreakdown) -> [SentimentSegment; 3] {
    let total = sentiment.total();
    let segment = |kind: Sentiment, raw: f64| SentimentSegment {
        sentiment: kind,
        color: sentiment_color(kind),
        share: if total > 0.0 { raw / total } else { 0.0 },
        raw,
    };
    [
        segment(Sentiment::Positive, sentiment.positive),
        segment(Sentiment::Neutral, sentiment.neutral),
        segment(Sentiment::Negative, sentiment.negative),
    ]
}

// ── Calls ────────────────────────────────────────────────────────

/// Render a call timestamp in the viewer's local zone.
pub fn format_local(datetime: &DateTime<FixedOffset>) -> String {
    datetime
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

// ── Service insights ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub name: String,
    pub cases: String,
    pub avg_handle: String,
    pub fcr: String,
}

pub fn service_card(category: &ServiceCategory) -> ServiceCard {
    ServiceCard {
        name: category.name.clone(),
        cases: category.count.to_string(),
        avg_handle: format!("{} min", category.avg_handle_time),
        fcr: percent_label(category.first_call_resolution),
    }
}

// ── Settings ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsCard {
    pub title: &'static str,
    /// `(label, value)` pairs, rendered as `label: value`.
    pub lines: Vec<(&'static str, String)>,
}

fn enabled_label(flag: bool) -> &'static str {
    if flag { "Enabled" } else { "Disabled" }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "On" } else { "Off" }
}

/// Security, retention, and access-control cards, in display order.
pub fn settings_cards(settings: &SettingsBundle) -> [SettingsCard; 3] {
    [
        SettingsCard {
            title: "Security",
            lines: vec![
                ("MFA", enabled_label(settings.security.mfa).to_owned()),
                ("SSO", enabled_label(settings.security.sso).to_owned()),
                ("IP Allowlist", on_off(settings.security.ip_allowlist).to_owned()),
            ],
        },
        SettingsCard {
            title: "Data Retention",
            lines: vec![
                (
                    "Transcripts",
                    format!("{} days", settings.retention.transcripts_days),
                ),
                (
                    "Analytics",
                    format!("{} months", settings.retention.analytics_months),
                ),
            ],
        },
        SettingsCard {
            title: "Access Controls",
            lines: vec![
                ("Roles", settings.access.roles.join(", ")),
                ("Default Role", settings.access.default_role.clone()),
            ],
        },
    ]
}

// ── Chrome ───────────────────────────────────────────────────────

pub fn footer(year: i32) -> String {
    format!("© {year} {PRODUCT_NAME}")
}

pub fn footer_now() -> String {
    footer(Local::now().year())
}
