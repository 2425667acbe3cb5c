use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::JournalEntry;

/// Analytics timeframe: everything, the last 7 days, or the last calendar
/// month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsWindow {
    All,
    Week,
    Month,
}

impl StatsWindow {
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(StatsWindow::All),
            "week" => Some(StatsWindow::Week),
            "month" => Some(StatsWindow::Month),
            _ => None,
        }
    }

    /// Oldest `created_at` still inside the window, or `None` for `All`.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            StatsWindow::All => None,
            StatsWindow::Week => Some(now - Duration::days(7)),
            StatsWindow::Month => Some(
                now.checked_sub_months(Months::new(1))
                    .unwrap_or(now - Duration::days(30)),
            ),
        }
    }

    pub fn apply(&self, entries: &[JournalEntry], now: DateTime<Utc>) -> Vec<JournalEntry> {
        match self.cutoff(now) {
            None => entries.to_vec(),
            Some(cutoff) => entries
                .iter()
                .filter(|e| e.created_at >= cutoff)
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Display for StatsWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsWindow::All => write!(f, "all"),
            StatsWindow::Week => write!(f, "week"),
            StatsWindow::Month => write!(f, "month"),
        }
    }
}
