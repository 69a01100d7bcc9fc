//! Screen identifier enum: one per dashboard tab.

use std::fmt;

use agenda_core::ResourceKind;

/// Identifies each TUI tab, navigable by number keys 1-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Dashboard, // 1
    Calls,        // 2
    Insights,     // 3
    Summaries,    // 4
    Integrations, // 5
    Settings,     // 6
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 6] = [
        Self::Dashboard,
        Self::Calls,
        Self::Insights,
        Self::Summaries,
        Self::Integrations,
        Self::Settings,
    ];

    /// Numeric key (1-6) for this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::Dashboard => 1,
            Self::Calls => 2,
            Self::Insights => 3,
            Self::Summaries => 4,
            Self::Integrations => 5,
            Self::Settings => 6,
        }
    }

    /// Screen from a numeric key (1-6). Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Dashboard),
            2 => Some(Self::Calls),
            3 => Some(Self::Insights),
            4 => Some(Self::Summaries),
            5 => Some(Self::Integrations),
            6 => Some(Self::Settings),
            _ => None,
        }
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The backend resource this tab shows.
    pub fn kind(self) -> ResourceKind {
        match self {
            Self::Dashboard => ResourceKind::Kpis,
            Self::Calls => ResourceKind::Calls,
            Self::Insights => ResourceKind::ServiceInsights,
            Self::Summaries => ResourceKind::Summaries,
            Self::Integrations => ResourceKind::Integrations,
            Self::Settings => ResourceKind::Settings,
        }
    }

    /// Label for the tab bar.
    pub fn label(self) -> &'static str {
        self.kind().title()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
