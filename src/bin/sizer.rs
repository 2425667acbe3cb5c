use anyhow::{bail, Result};
use tracing_subscriber::{fmt, EnvFilter};

use nexus_journal::analytics::report::format_currency;
use nexus_journal::config::Config;
use nexus_journal::risk::{calculate_position, AssetCatalog};

fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Parse CLI args or use config defaults:
    //   sizer [balance] [risk %] [stop pips] [target pips] [symbol]
    let args: Vec<String> = std::env::args().collect();

    let balance: f64 = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(cfg.default_account_balance);

    let risk_percent: f64 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(cfg.default_risk_percent);

    let stop_pips: f64 = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(cfg.default_stop_loss_pips);

    let target_pips: f64 = args
        .get(4)
        .and_then(|s| s.parse().ok())
        .unwrap_or(cfg.default_take_profit_pips);

    let symbol = args
        .get(5)
        .cloned()
        .unwrap_or_else(|| cfg.default_pair.clone());

    if stop_pips <= 0.0 {
        bail!("stop loss must be a positive number of pips");
    }
    if balance <= 0.0 {
        bail!("account balance must be positive");
    }

    let catalog = AssetCatalog::builtin();
    let asset = match catalog.get(&symbol) {
        Some(asset) => asset,
        None => bail!(
            "Unknown symbol '{}'. Known symbols: {}",
            symbol,
            catalog.symbols().join(", ")
        ),
    };

    let calc = calculate_position(balance, risk_percent, stop_pips, target_pips, asset);

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║                    POSITION SIZER                        ║");
    println!("╠══════════════════════════════════════════════════════════╣");
    println!("║  Instrument:  {} ({})", asset.name, asset.symbol);
    println!("║  Balance:     {}", format_currency(balance));
    println!("║  Risk:        {:.2}%", risk_percent);
    println!("║  Stop:        {:.1} pips", stop_pips);
    println!("║  Target:      {:.1} pips", target_pips);
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();
    println!("  Recommended Lot Size: {:.2}", calc.lot_size);
    println!();
    println!("  Position Size:    {:.2}", calc.position_size);
    println!("  Risk Amount:      {}", format_currency(calc.risk_amount));
    println!("  Pip Value:        {}/pip", format_currency(calc.pip_value));
    println!("  Potential Profit: {}", format_currency(calc.potential_profit));
    println!("  Risk : Reward:    1 : {:.2}", calc.risk_reward_ratio);

    if !cfg.preferred_pairs.is_empty() {
        println!();
        println!("  PREFERRED PAIRS (same parameters)");
        println!("  ───────────────────────────────────");
        for pair in &cfg.preferred_pairs {
            if let Some(asset) = catalog.get(pair) {
                let c = calculate_position(balance, risk_percent, stop_pips, target_pips, asset);
                println!(
                    "  {:>8}: {:.2} lots | pip value {}/pip",
                    pair,
                    c.lot_size,
                    format_currency(c.pip_value)
                );
            }
        }
    }

    Ok(())
}
