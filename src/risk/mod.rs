pub mod assets;
pub mod calculator;

pub use assets::{AssetCatalog, AssetCategory, AssetConfig};
pub use calculator::{
    calculate_lot_size, calculate_position, calculate_risk_reward, estimate_pnl, RiskCalculation,
    RiskReward,
};
