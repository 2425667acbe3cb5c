use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{EntryType, Sentiment, TradeResult};

/// One journal record. Simple entries are free-form reflections; technical
/// entries carry the trade fields. Optional columns stay optional here —
/// a null `result` means the trade is still open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub pair: Option<String>,
    #[serde(default)]
    pub entry_price: Option<f64>,
    #[serde(default)]
    pub exit_price: Option<f64>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub take_profit: Option<f64>,
    #[serde(default)]
    pub lot_size: Option<f64>,
    #[serde(default)]
    pub result: Option<TradeResult>,
    #[serde(default)]
    pub pnl: Option<f64>,
    #[serde(default)]
    pub pnl_percentage: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// A technical entry with a recorded result — the only kind that
    /// participates in statistics.
    pub fn is_closed_trade(&self) -> bool {
        self.entry_type == EntryType::Technical && self.result.is_some()
    }

    pub fn pnl_or_zero(&self) -> f64 {
        self.pnl.unwrap_or(0.0)
    }

    /// Realized risk:reward of this trade. Needs entry, stop and exit prices;
    /// returns 0.0 when any is missing or the stop distance is zero.
    pub fn realized_rr(&self) -> f64 {
        let (entry, stop, exit) = match (self.entry_price, self.stop_loss, self.exit_price) {
            (Some(e), Some(s), Some(x)) => (e, s, x),
            _ => return 0.0,
        };
        let risk = (entry - stop).abs();
        let reward = (exit - entry).abs();
        if risk > 0.0 {
            reward / risk
        } else {
            0.0
        }
    }
}
