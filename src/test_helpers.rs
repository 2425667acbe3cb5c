use chrono::{DateTime, Duration, Utc};

use crate::models::{EntryType, JournalEntry, Sentiment, TradeResult};

/// Fixed reference time so streak and window tests are reproducible.
pub fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn simple_entry(title: &str, minutes_ago: i64) -> JournalEntry {
    JournalEntry {
        id: String::new(),
        entry_type: EntryType::Simple,
        title: title.to_string(),
        content: Some("Reflection for the day".to_string()),
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

/// A closed EURUSD trade with just a result and a pnl — no fill prices.
pub fn closed_trade(result: TradeResult, pnl: f64, minutes_ago: i64) -> JournalEntry {
    JournalEntry {
        id: String::new(),
        entry_type: EntryType::Technical,
        title: format!("EURUSD {}", result),
        content: None,
        sentiment: None,
        pair: Some("EURUSD".to_string()),
        entry_price: None,
        exit_price: None,
        stop_loss: None,
        take_profit: None,
        lot_size: None,
        result: Some(result),
        pnl: Some(pnl),
        pnl_percentage: None,
        tags: Vec::new(),
        created_at: base_time() - Duration::minutes(minutes_ago),
    }
}

/// A closed trade with full fill prices, for R:R-sensitive tests.
pub fn priced_trade(
    result: TradeResult,
    pnl: f64,
    entry_price: f64,
    stop_loss: f64,
    exit_price: f64,
    minutes_ago: i64,
) -> JournalEntry {
    let mut entry = closed_trade(result, pnl, minutes_ago);
    entry.entry_price = Some(entry_price);
    entry.stop_loss = Some(stop_loss);
    entry.exit_price = Some(exit_price);
    entry
}

pub fn trade_for_pair(pair: &str, result: TradeResult, pnl: f64, minutes_ago: i64) -> JournalEntry {
    let mut entry = closed_trade(result, pnl, minutes_ago);
    entry.title = format!("{} {}", pair, result);
    entry.pair = Some(pair.to_string());
    entry
}

/// A technical entry that passes every validation rule.
pub fn full_technical_entry(minutes_ago: i64) -> JournalEntry {
    let mut entry = closed_trade(TradeResult::Win, 250.0, minutes_ago);
    entry.title = "London sweep long".to_string();
    entry.entry_price = Some(1.1000);
    entry.stop_loss = Some(1.0950);
    entry.take_profit = Some(1.1100);
    entry.exit_price = Some(1.1100);
    entry.lot_size = Some(0.5);
    entry.tags = vec!["london".to_string(), "sweep".to_string()];
    entry
}
