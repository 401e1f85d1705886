//! Inventory and return ratios shown on the branch dashboard.
//!
//! All functions are plain `f64` arithmetic with no validation. A zero divisor
//! yields NaN or an infinity; callers guard before display.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

/// Days in the sales year used for DSI.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Weight of the wastage term in the efficiency score.
pub const WASTAGE_WEIGHT: f64 = 0.4;
/// Weight of the turnover term in the efficiency score.
pub const TURNOVER_WEIGHT: f64 = 0.3;
/// Weight of the days-sales-of-inventory term in the efficiency score.
pub const DSI_WEIGHT: f64 = 0.3;

/// Return on investment as a percentage: `((returns - investment) / investment) * 100`.
pub fn calculate_roi(investment: f64, returns: f64) -> f64 {
    ((returns - investment) / investment) * 100.0
}

/// Inventory turnover: cost of goods sold over average inventory value.
pub fn calculate_inventory_turnover(cogs: f64, avg_inventory: f64) -> f64 {
    cogs / avg_inventory
}

/// Days sales of inventory for a given turnover.
pub fn calculate_days_sales_of_inventory(turnover: f64) -> f64 {
    DAYS_PER_YEAR / turnover
}

/// Share of stock value lost to expiry, as a percentage.
pub fn calculate_wastage_rate(expired_value: f64, total_value: f64) -> f64 {
    (expired_value / total_value) * 100.0
}

/// Composite 0-100 efficiency score.
///
/// Each input is normalized onto a 0-100 scale before weighting:
/// - wastage: `max(0, 100 - wastage_rate)`, lower wastage scores higher
/// - turnover: `min(100, turnover * 10)`, a turnover of 10 or more saturates
/// - DSI: `max(0, 100 - dsi / 365 * 100)`, a full year of stock scores zero
///
/// Each clamp only bounds one side, so pathological inputs (negative wastage,
/// negative DSI) can still push the total past 100.
pub fn calculate_efficiency_score(wastage_rate: f64, turnover: f64, dsi: f64) -> f64 {
    let wastage_norm = (100.0 - wastage_rate).max(0.0);
    let turnover_norm = (turnover * 10.0).min(100.0);
    let dsi_norm = (100.0 - (dsi / DAYS_PER_YEAR) * 100.0).max(0.0);
    WASTAGE_WEIGHT * wastage_norm + TURNOVER_WEIGHT * turnover_norm + DSI_WEIGHT * dsi_norm
}
