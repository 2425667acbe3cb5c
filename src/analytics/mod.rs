pub mod report;
pub mod stats;
pub mod window;

pub use report::JournalReport;
pub use stats::{calculate_trade_stats, pair_performance, PairPerformance, ProfitFactor, TradeStats};
pub use window::StatsWindow;
