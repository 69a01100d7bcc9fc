use serde::{Deserialize, Serialize};

/// Read-only compliance settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsBundle {
    pub security: SecurityFlags,
    pub retention: DataRetention,
    pub access: AccessControls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityFlags {
    pub mfa: bool,
    pub sso: bool,
    pub ip_allowlist: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRetention {
    pub transcripts_days: u32,
    pub analytics_months: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControls {
    /// Backend order is preserved.
    pub roles: Vec<String>,
    pub default_role: String,
}
