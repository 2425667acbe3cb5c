use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::models::{JournalEntry, StreakType, TradeResult};

/// Gross-profit to gross-loss ratio. A journal with profit and no recorded
/// losses has no finite ratio, so that case gets its own variant instead of
/// leaning on `f64::INFINITY` — it serializes and compares cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitFactor {
    Finite(f64),
    Infinite,
}

impl ProfitFactor {
    pub fn from_gross(total_win_pnl: f64, total_loss_pnl: f64) -> Self {
        if total_loss_pnl > 0.0 {
            ProfitFactor::Finite(total_win_pnl / total_loss_pnl)
        } else if total_win_pnl > 0.0 {
            ProfitFactor::Infinite
        } else {
            ProfitFactor::Finite(0.0)
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, ProfitFactor::Infinite)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            ProfitFactor::Finite(v) => Some(*v),
            ProfitFactor::Infinite => None,
        }
    }
}

impl fmt::Display for ProfitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitFactor::Finite(v) => write!(f, "{:.2}", v),
            ProfitFactor::Infinite => write!(f, "inf"),
        }
    }
}

impl Default for ProfitFactor {
    fn default() -> Self {
        ProfitFactor::Finite(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeStats {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub breakeven_trades: usize,
    pub win_rate: f64,
    pub profit_factor: ProfitFactor,
    pub average_rr: f64,
    pub total_pnl: f64,
    pub average_pnl: f64,
    pub largest_win: f64,
    pub largest_loss: f64,
    pub current_streak: usize,
    pub streak_type: StreakType,
    pub best_pair: Option<String>,
    pub worst_pair: Option<String>,
}

impl TradeStats {
    /// The defined result for a journal with no closed technical trades.
    pub fn empty() -> Self {
        Self {
            total_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            breakeven_trades: 0,
            win_rate: 0.0,
            profit_factor: ProfitFactor::Finite(0.0),
            average_rr: 0.0,
            total_pnl: 0.0,
            average_pnl: 0.0,
            largest_win: 0.0,
            largest_loss: 0.0,
            current_streak: 0,
            streak_type: StreakType::None,
            best_pair: None,
            worst_pair: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairPerformance {
    pub wins: usize,
    pub losses: usize,
    pub total_pnl: f64,
}

/// Aggregate performance statistics over a set of journal entries.
///
/// Only technical entries with a recorded result count; everything else is
/// ignored. Never mutates its input, never fails — numeric gaps fall back to
/// the documented defaults (missing pnl counts as 0).
pub fn calculate_trade_stats(entries: &[JournalEntry]) -> TradeStats {
    let trades: Vec<&JournalEntry> = entries.iter().filter(|e| e.is_closed_trade()).collect();

    if trades.is_empty() {
        return TradeStats::empty();
    }

    let total = trades.len();
    let wins: Vec<&&JournalEntry> = trades
        .iter()
        .filter(|t| t.result == Some(TradeResult::Win))
        .collect();
    let losses: Vec<&&JournalEntry> = trades
        .iter()
        .filter(|t| t.result == Some(TradeResult::Loss))
        .collect();
    let breakevens = trades
        .iter()
        .filter(|t| t.result == Some(TradeResult::Breakeven))
        .count();

    let total_pnl: f64 = trades.iter().map(|t| t.pnl_or_zero()).sum();
    let total_win_pnl: f64 = wins.iter().map(|t| t.pnl_or_zero()).sum();
    let total_loss_pnl: f64 = losses.iter().map(|t| t.pnl_or_zero()).sum::<f64>().abs();

    // Average realized R:R over the trades where it is computable
    let rr_values: Vec<f64> = trades
        .iter()
        .map(|t| t.realized_rr())
        .filter(|rr| *rr > 0.0)
        .collect();
    let average_rr = if rr_values.is_empty() {
        0.0
    } else {
        rr_values.iter().sum::<f64>() / rr_values.len() as f64
    };

    // Streak walks most-recent-first; a breakeven ends it
    let mut sorted = trades.clone();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let (current_streak, streak_type) = current_streak(&sorted);

    let pairs = pair_performance(entries);
    let (best_pair, worst_pair) = best_and_worst_pairs(&pairs);

    let largest_win = trades
        .iter()
        .map(|t| t.pnl_or_zero())
        .fold(0.0_f64, f64::max);
    let largest_loss = trades
        .iter()
        .map(|t| t.pnl_or_zero())
        .fold(0.0_f64, f64::min)
        .abs();

    TradeStats {
        total_trades: total,
        winning_trades: wins.len(),
        losing_trades: losses.len(),
        breakeven_trades: breakevens,
        win_rate: wins.len() as f64 / total as f64 * 100.0,
        profit_factor: ProfitFactor::from_gross(total_win_pnl, total_loss_pnl),
        average_rr,
        total_pnl,
        average_pnl: total_pnl / total as f64,
        largest_win,
        largest_loss,
        current_streak,
        streak_type,
        best_pair,
        worst_pair,
    }
}

/// Per-pair win/loss counts and summed PnL across the closed trades.
/// Entries without a pair are left out of the grouping.
pub fn pair_performance(entries: &[JournalEntry]) -> HashMap<String, PairPerformance> {
    let mut stats: HashMap<String, PairPerformance> = HashMap::new();

    for entry in entries.iter().filter(|e| e.is_closed_trade()) {
        if let Some(pair) = &entry.pair {
            let bucket = stats.entry(pair.clone()).or_default();
            match entry.result {
                Some(TradeResult::Win) => bucket.wins += 1,
                Some(TradeResult::Loss) => bucket.losses += 1,
                _ => {}
            }
            bucket.total_pnl += entry.pnl_or_zero();
        }
    }

    stats
}

fn current_streak(sorted: &[&JournalEntry]) -> (usize, StreakType) {
    let first = match sorted.first().and_then(|t| t.result) {
        Some(TradeResult::Win) => TradeResult::Win,
        Some(TradeResult::Loss) => TradeResult::Loss,
        _ => return (0, StreakType::None),
    };

    let count = sorted
        .iter()
        .take_while(|t| t.result == Some(first))
        .count();

    let streak_type = if first == TradeResult::Win {
        StreakType::Win
    } else {
        StreakType::Loss
    };
    (count, streak_type)
}

fn best_and_worst_pairs(
    pairs: &HashMap<String, PairPerformance>,
) -> (Option<String>, Option<String>) {
    if pairs.is_empty() {
        return (None, None);
    }

    // Ties resolve by symbol, ascending, so repeated runs agree
    let mut ranked: Vec<(&String, &PairPerformance)> = pairs.iter().collect();
    ranked.sort_by(|a, b| {
        b.1.total_pnl
            .partial_cmp(&a.1.total_pnl)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    let best = ranked.first().map(|(s, _)| (*s).clone());

    ranked.sort_by(|a, b| {
        a.1.total_pnl
            .partial_cmp(&b.1.total_pnl)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    let worst = ranked.first().map(|(s, _)| (*s).clone());

    (best, worst)
}
