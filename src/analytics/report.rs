use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::analytics::stats::{calculate_trade_stats, pair_performance, PairPerformance, TradeStats};
use crate::analytics::window::StatsWindow;
use crate::models::{JournalEntry, StreakType};

/// Window-filtered analytics over a journal, ready to render.
#[derive(Debug, Clone)]
pub struct JournalReport {
    pub window: StatsWindow,
    pub generated_at: DateTime<Utc>,
    pub total_entries: usize,
    pub stats: TradeStats,
    pub pairs: HashMap<String, PairPerformance>,
}

impl JournalReport {
    pub fn new(entries: &[JournalEntry], window: StatsWindow, now: DateTime<Utc>) -> Self {
        let windowed = window.apply(entries, now);
        let stats = calculate_trade_stats(&windowed);
        let pairs = pair_performance(&windowed);

        JournalReport {
            window,
            generated_at: now,
            total_entries: windowed.len(),
            stats,
            pairs,
        }
    }

    /// Pair table rows, best PnL first. Ties resolve by symbol so output is
    /// stable between runs.
    pub fn pair_rows(&self) -> Vec<(&str, &PairPerformance)> {
        let mut rows: Vec<(&str, &PairPerformance)> = self
            .pairs
            .iter()
            .map(|(s, p)| (s.as_str(), p))
            .collect();
        rows.sort_by(|a, b| {
            b.1.total_pnl
                .partial_cmp(&a.1.total_pnl)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        rows
    }

    pub fn print_summary(&self) {
        let s = &self.stats;

        println!("\n{}", "=".repeat(60));
        println!("  TRADING JOURNAL — {} ", window_label(self.window));
        println!("{}", "=".repeat(60));
        println!(
            "  Generated:   {}",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        );
        println!("  Entries:     {}", self.total_entries);
        println!();
        println!("  PERFORMANCE");
        println!("  ───────────────────────────────────");
        println!("  Closed Trades: {}", s.total_trades);
        println!(
            "  Win/Loss/BE:   {} / {} / {}",
            s.winning_trades, s.losing_trades, s.breakeven_trades
        );
        println!("  Win Rate:      {:.1}%", s.win_rate);
        println!("  Total PnL:     {}", format_currency(s.total_pnl));
        println!("  Avg Trade:     {}", format_currency(s.average_pnl));
        println!("  Largest Win:   {}", format_currency(s.largest_win));
        println!("  Largest Loss:  {}", format_currency(-s.largest_loss));
        println!("  Profit Factor: {}", s.profit_factor);
        println!("  Avg R:R:       {:.2}", s.average_rr);
        println!();
        println!("  STREAK");
        println!("  ───────────────────────────────────");
        match s.streak_type {
            StreakType::None => println!("  No active streak"),
            streak => println!("  {} consecutive {}(s)", s.current_streak, streak),
        }

        if !self.pairs.is_empty() {
            println!();
            println!("  BY PAIR");
            println!("  ───────────────────────────────────");
            for (pair, perf) in self.pair_rows() {
                let trades = perf.wins + perf.losses;
                let win_rate = if trades > 0 {
                    perf.wins as f64 / trades as f64 * 100.0
                } else {
                    0.0
                };
                println!(
                    "  {:>8}: {} trades | WR {:.0}% | PnL {}",
                    pair,
                    trades,
                    win_rate,
                    format_signed_pnl(Some(perf.total_pnl))
                );
            }
        }

        println!("{}", "=".repeat(60));
    }
}

fn window_label(window: StatsWindow) -> &'static str {
    match window {
        StatsWindow::All => "ALL TIME",
        StatsWindow::Week => "THIS WEEK",
        StatsWindow::Month => "THIS MONTH",
    }
}

pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${:.2}", value)
    }
}

pub fn format_percentage(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Signed PnL the way the entry list renders it; a dash for open trades.
pub fn format_signed_pnl(pnl: Option<f64>) -> String {
    match pnl {
        None => "-".to_string(),
        Some(v) if v >= 0.0 => format!("+${:.2}", v),
        Some(v) => format!("-${:.2}", v.abs()),
    }
}
