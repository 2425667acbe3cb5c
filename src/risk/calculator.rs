use serde::{Deserialize, Serialize};

use crate::models::TradeResult;
use crate::risk::assets::{AssetCategory, AssetConfig};

/// Brokers won't fill below a micro lot.
const MIN_LOT_SIZE: f64 = 0.01;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskCalculation {
    pub lot_size: f64,
    pub position_size: f64,
    pub risk_amount: f64,
    pub potential_profit: f64,
    pub risk_reward_ratio: f64,
    pub pip_value: f64,
    pub pips_at_risk: f64,
    pub pips_to_target: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskReward {
    pub risk_pips: f64,
    pub reward_pips: f64,
    pub ratio: f64,
}

/// Size a position so that `stop_loss_pips` against it loses
/// `risk_percent` of the account.
///
/// The lot size is floored to two decimals and clamped to 0.01, and every
/// derived figure (position size, scaled pip value) uses the clamped value.
/// `stop_loss_pips` must be positive — zero propagates an infinite lot size
/// rather than panicking; the validation layer rejects it upstream.
pub fn calculate_lot_size(
    account_balance: f64,
    risk_percent: f64,
    stop_loss_pips: f64,
    asset: &AssetConfig,
) -> RiskCalculation {
    let risk_amount = account_balance * (risk_percent / 100.0);

    let raw_lot = match asset.category {
        // Index CFDs quote point value directly, one unit per point
        AssetCategory::Indices => risk_amount / stop_loss_pips,
        // Gold pays $1 per 0.01 move per lot, so a pip of stop is $100/lot.
        // Keyed by symbol: silver and oil use the generic formula.
        AssetCategory::Commodities if asset.symbol == "XAUUSD" => {
            risk_amount / (stop_loss_pips * 100.0)
        }
        _ => risk_amount / (stop_loss_pips * asset.pip_value),
    };

    let lot_size = floor2(raw_lot).max(MIN_LOT_SIZE);

    RiskCalculation {
        lot_size,
        position_size: lot_size * asset.contract_size,
        risk_amount,
        potential_profit: 0.0,
        risk_reward_ratio: 0.0,
        pip_value: lot_size * asset.pip_value,
        pips_at_risk: stop_loss_pips,
        pips_to_target: 0.0,
    }
}

/// [`calculate_lot_size`] plus the take-profit figures: ratio of target to
/// stop distance, and the profit earned if the target is hit at this risk.
pub fn calculate_position(
    account_balance: f64,
    risk_percent: f64,
    stop_loss_pips: f64,
    take_profit_pips: f64,
    asset: &AssetConfig,
) -> RiskCalculation {
    let mut calc = calculate_lot_size(account_balance, risk_percent, stop_loss_pips, asset);
    calc.risk_reward_ratio = take_profit_pips / stop_loss_pips;
    calc.potential_profit = calc.risk_amount / stop_loss_pips * take_profit_pips;
    calc.pips_to_target = take_profit_pips;
    calc
}

/// Pip distances and ratio for a planned trade, from raw prices.
pub fn calculate_risk_reward(
    entry_price: f64,
    stop_loss: f64,
    take_profit: f64,
    asset: &AssetConfig,
) -> RiskReward {
    let pip_multiplier = 1.0 / asset.pip_size;

    let risk_pips = (entry_price - stop_loss).abs() * pip_multiplier;
    let reward_pips = (take_profit - entry_price).abs() * pip_multiplier;
    let ratio = if risk_pips > 0.0 {
        reward_pips / risk_pips
    } else {
        0.0
    };

    RiskReward {
        risk_pips: round1(risk_pips),
        reward_pips: round1(reward_pips),
        ratio: round2(ratio),
    }
}

/// PnL for a closed trade from its fill prices, in account currency.
/// Losses come back negative; breakeven keeps the sign of the move.
pub fn estimate_pnl(
    entry_price: f64,
    exit_price: f64,
    lot_size: f64,
    result: TradeResult,
    asset: &AssetConfig,
) -> f64 {
    let pip_diff = (exit_price - entry_price).abs() / asset.pip_size;
    let pnl = pip_diff * asset.pip_value * lot_size;
    if result == TradeResult::Loss {
        -pnl
    } else {
        pnl
    }
}

fn floor2(x: f64) -> f64 {
    (x * 100.0).floor() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::assets::AssetCatalog;

    fn catalog() -> AssetCatalog {
        AssetCatalog::builtin()
    }

    #[test]
    fn eurusd_standard_sizing() {
        // $10k at 1% with a 20 pip stop: $100 risk, $10/pip/lot -> 0.50 lots
        let catalog = catalog();
        let eurusd = catalog.get("EURUSD").unwrap();
        let calc = calculate_lot_size(10_000.0, 1.0, 20.0, eurusd);
        assert!((calc.risk_amount - 100.0).abs() < 1e-9);
        assert!((calc.lot_size - 0.50).abs() < 1e-9);
        assert!((calc.position_size - 50_000.0).abs() < 1e-6);
        assert!((calc.pip_value - 5.0).abs() < 1e-9);
        assert_eq!(calc.pips_at_risk, 20.0);
    }

    #[test]
    fn gold_uses_dollar_per_point_convention() {
        let catalog = catalog();
        let gold = catalog.get("XAUUSD").unwrap();
        let calc = calculate_lot_size(10_000.0, 1.0, 20.0, gold);
        assert!((calc.risk_amount - 100.0).abs() < 1e-9);
        assert!((calc.lot_size - 0.05).abs() < 1e-9);
    }

    #[test]
    fn silver_keeps_generic_commodity_formula() {
        let catalog = catalog();
        let silver = catalog.get("XAGUSD").unwrap();
        // $100 / (20 * 50) = 0.10 lots
        let calc = calculate_lot_size(10_000.0, 1.0, 20.0, silver);
        assert!((calc.lot_size - 0.10).abs() < 1e-9);
    }

    #[test]
    fn indices_divide_by_points_only() {
        let catalog = catalog();
        let nas = catalog.get("NAS100").unwrap();
        let calc = calculate_lot_size(10_000.0, 1.0, 50.0, nas);
        assert!((calc.lot_size - 2.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_risk_clamps_to_micro_lot() {
        let catalog = catalog();
        let eurusd = catalog.get("EURUSD").unwrap();
        // $1 risk over 200 pips computes to 0.0005 lots
        let calc = calculate_lot_size(100.0, 1.0, 200.0, eurusd);
        assert_eq!(calc.lot_size, 0.01);
        // Derived figures follow the clamped lot, not the raw one
        assert!((calc.position_size - 1_000.0).abs() < 1e-6);
        assert!((calc.pip_value - 0.1).abs() < 1e-9);
    }

    #[test]
    fn lot_size_floors_rather_than_rounds() {
        let catalog = catalog();
        let eurusd = catalog.get("EURUSD").unwrap();
        // 150 / (19 * 10) = 0.789... -> 0.78, never 0.79
        let calc = calculate_lot_size(15_000.0, 1.0, 19.0, eurusd);
        assert!((calc.lot_size - 0.78).abs() < 1e-9);
    }

    #[test]
    fn position_fills_take_profit_figures() {
        let catalog = catalog();
        let eurusd = catalog.get("EURUSD").unwrap();
        let calc = calculate_position(10_000.0, 1.0, 20.0, 40.0, eurusd);
        assert!((calc.risk_reward_ratio - 2.0).abs() < 1e-9);
        assert!((calc.potential_profit - 200.0).abs() < 1e-9);
        assert_eq!(calc.pips_to_target, 40.0);
    }

    #[test]
    fn risk_reward_from_prices() {
        let catalog = catalog();
        let eurusd = catalog.get("EURUSD").unwrap();
        let rr = calculate_risk_reward(1.1000, 1.0950, 1.1100, eurusd);
        assert!((rr.risk_pips - 50.0).abs() < 1e-9);
        assert!((rr.reward_pips - 100.0).abs() < 1e-9);
        assert!((rr.ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn risk_reward_zero_ratio_when_stop_at_entry() {
        let catalog = catalog();
        let eurusd = catalog.get("EURUSD").unwrap();
        let rr = calculate_risk_reward(1.1000, 1.1000, 1.1100, eurusd);
        assert_eq!(rr.ratio, 0.0);
    }

    #[test]
    fn estimated_pnl_signs() {
        let catalog = catalog();
        let eurusd = catalog.get("EURUSD").unwrap();
        // 50 pips on half a lot at $10/pip
        let win = estimate_pnl(1.1000, 1.1050, 0.5, TradeResult::Win, eurusd);
        assert!((win - 250.0).abs() < 1e-6);
        let loss = estimate_pnl(1.1000, 1.0950, 0.5, TradeResult::Loss, eurusd);
        assert!((loss + 250.0).abs() < 1e-6);
    }
}
