use chrono::{DateTime, Duration, Utc};
use nexus_journal::models::{EntryType, JournalEntry, Sentiment, TradeResult};

/// Fixed reference time so window and streak assertions are reproducible.
pub fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// A closed technical trade with full fill prices, `minutes_ago` before the
/// reference time.
pub fn technical_entry(
    pair: &str,
    result: TradeResult,
    pnl: f64,
    minutes_ago: i64,
) -> JournalEntry {
    JournalEntry {
        id: format!("{}-{}", pair, minutes_ago),
        entry_type: EntryType::Technical,
        title: format!("{} {}", pair, result),
        content: None,
        sentiment: None,
        pair: Some(pair.to_string()),
        entry_price: Some(1.1000),
        exit_price: Some(1.1100),
        stop_loss: Some(1.0950),
        take_profit: Some(1.1100),
        lot_size: Some(0.5),
        result: Some(result),
        pnl: Some(pnl),
        pnl_percentage: None,
        tags: Vec::new(),
        created_at: base_time() - Duration::minutes(minutes_ago),
    }
}

/// A free-form reflection entry.
pub fn reflection(title: &str, minutes_ago: i64) -> JournalEntry {
    JournalEntry {
        id: format!("note-{}", minutes_ago),
        entry_type: EntryType::Simple,
        title: title.to_string(),
        content: Some("Notes".to_string()),
        sentiment: Some(Sentiment::Neutral),
        pair: None,
        entry_price: None,
        exit_price: None,
        stop_loss: None,
        take_profit: None,
        lot_size: None,
        result: None,
        pnl: None,
        pnl_percentage: None,
        tags: Vec::new(),
        created_at: base_time() - Duration::minutes(minutes_ago),
    }
}
