use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Forex,
    Indices,
    Commodities,
    Crypto,
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetCategory::Forex => write!(f, "forex"),
            AssetCategory::Indices => write!(f, "indices"),
            AssetCategory::Commodities => write!(f, "commodities"),
            AssetCategory::Crypto => write!(f, "crypto"),
        }
    }
}

/// Per-instrument sizing constants. `pip_value` is the currency value of one
/// pip move per standard lot; `pip_size` is the price increment that counts
/// as one pip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    pub name: String,
    pub symbol: String,
    pub pip_value: f64,
    pub pip_size: f64,
    pub category: AssetCategory,
    pub contract_size: f64,
}

/// Read-only instrument table. Built once at startup and handed around by
/// reference; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    assets: HashMap<String, AssetConfig>,
}

impl AssetCatalog {
    pub fn builtin() -> Self {
        let mut assets = HashMap::new();

        let mut add = |name: &str, symbol: &str, pip_value: f64, pip_size: f64, category: AssetCategory, contract_size: f64| {
            assets.insert(
                symbol.to_string(),
                AssetConfig {
                    name: name.to_string(),
                    symbol: symbol.to_string(),
                    pip_value,
                    pip_size,
                    category,
                    contract_size,
                },
            );
        };

        // Major forex pairs
        add("EUR/USD", "EURUSD", 10.0, 0.0001, AssetCategory::Forex, 100_000.0);
        add("GBP/USD", "GBPUSD", 10.0, 0.0001, AssetCategory::Forex, 100_000.0);
        add("USD/JPY", "USDJPY", 9.1, 0.01, AssetCategory::Forex, 100_000.0);
        add("USD/CHF", "USDCHF", 10.2, 0.0001, AssetCategory::Forex, 100_000.0);
        add("AUD/USD", "AUDUSD", 10.0, 0.0001, AssetCategory::Forex, 100_000.0);
        add("USD/CAD", "USDCAD", 7.6, 0.0001, AssetCategory::Forex, 100_000.0);
        add("NZD/USD", "NZDUSD", 10.0, 0.0001, AssetCategory::Forex, 100_000.0);

        // Cross pairs
        add("EUR/GBP", "EURGBP", 12.7, 0.0001, AssetCategory::Forex, 100_000.0);
        add("EUR/JPY", "EURJPY", 9.1, 0.01, AssetCategory::Forex, 100_000.0);
        add("GBP/JPY", "GBPJPY", 9.1, 0.01, AssetCategory::Forex, 100_000.0);

        // Indices
        add("NASDAQ 100", "NAS100", 1.0, 0.1, AssetCategory::Indices, 1.0);
        add("Dow Jones 30", "US30", 1.0, 0.1, AssetCategory::Indices, 1.0);
        add("S&P 500", "SPX500", 1.0, 0.1, AssetCategory::Indices, 1.0);
        add("DAX 40", "GER40", 1.0, 0.1, AssetCategory::Indices, 1.0);
        add("FTSE 100", "UK100", 1.0, 0.1, AssetCategory::Indices, 1.0);

        // Commodities — gold quotes pips in 0.01 but pays $1 per 0.01 per lot,
        // so the sizer special-cases XAUUSD by symbol
        add("Gold", "XAUUSD", 1.0, 0.01, AssetCategory::Commodities, 100.0);
        add("Silver", "XAGUSD", 50.0, 0.001, AssetCategory::Commodities, 5000.0);
        add("WTI Crude Oil", "USOIL", 1.0, 0.01, AssetCategory::Commodities, 1000.0);

        // Crypto
        add("Bitcoin", "BTCUSD", 1.0, 0.01, AssetCategory::Crypto, 1.0);
        add("Ethereum", "ETHUSD", 1.0, 0.01, AssetCategory::Crypto, 1.0);

        Self { assets }
    }

    pub fn get(&self, symbol: &str) -> Option<&AssetConfig> {
        self.assets.get(symbol)
    }

    pub fn all(&self) -> impl Iterator<Item = &AssetConfig> {
        self.assets.values()
    }

    pub fn by_category(&self, category: AssetCategory) -> Vec<&AssetConfig> {
        let mut out: Vec<&AssetConfig> = self
            .assets
            .values()
            .filter(|a| a.category == category)
            .collect();
        out.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        out
    }

    /// All known symbols, sorted — used by the sizer CLI for its error hint.
    pub fn symbols(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.assets.keys().map(|s| s.as_str()).collect();
        out.sort_unstable();
        out
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
