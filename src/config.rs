use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Journal
    pub journal_file: String,

    // Account defaults
    pub default_account_balance: f64,
    pub default_risk_percent: f64,
    pub default_stop_loss_pips: f64,
    pub default_take_profit_pips: f64,
    pub default_pair: String,
    pub preferred_pairs: Vec<String>,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let preferred_pairs: Vec<String> = env("PREFERRED_PAIRS", "EURUSD,GBPUSD,XAUUSD")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Config {
            journal_file: env("JOURNAL_FILE", "journal.json"),
            default_account_balance: env("ACCOUNT_BALANCE", "10000")
                .parse()
                .unwrap_or(10_000.0),
            default_risk_percent: env("RISK_PERCENT", "1").parse().unwrap_or(1.0),
            default_stop_loss_pips: env("STOP_LOSS_PIPS", "20").parse().unwrap_or(20.0),
            default_take_profit_pips: env("TAKE_PROFIT_PIPS", "40").parse().unwrap_or(40.0),
            default_pair: env("DEFAULT_PAIR", "EURUSD"),
            preferred_pairs,
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }
}
