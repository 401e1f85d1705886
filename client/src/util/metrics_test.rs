use super::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// calculate_roi
// =============================================================

#[test]
fn roi_of_fifty_percent_gain() {
    assert!(approx_eq(calculate_roi(100.0, 150.0), 50.0));
}

#[test]
fn roi_is_negative_on_loss() {
    assert!(approx_eq(calculate_roi(200.0, 150.0), -25.0));
}

#[test]
fn roi_with_zero_investment_is_not_finite() {
    assert!(calculate_roi(0.0, 150.0).is_infinite());
    assert!(calculate_roi(0.0, 0.0).is_nan());
}

// =============================================================
// turnover / DSI / wastage
// =============================================================

#[test]
fn inventory_turnover_divides_cogs_by_average_inventory() {
    assert!(approx_eq(calculate_inventory_turnover(1_200_000.0, 300_000.0), 4.0));
}

#[test]
fn inventory_turnover_with_zero_inventory_is_infinite() {
    assert!(calculate_inventory_turnover(10.0, 0.0).is_infinite());
}

#[test]
fn days_sales_of_inventory_from_turnover() {
    assert!(approx_eq(calculate_days_sales_of_inventory(5.0), 73.0));
    assert!(calculate_days_sales_of_inventory(0.0).is_infinite());
}

#[test]
fn wastage_rate_is_percentage_of_total() {
    assert!(approx_eq(calculate_wastage_rate(25.0, 1000.0), 2.5));
    assert!(calculate_wastage_rate(0.0, 0.0).is_nan());
}

// =============================================================
// calculate_efficiency_score
// =============================================================

#[test]
fn efficiency_score_of_all_zero_inputs_is_seventy() {
    assert!(approx_eq(calculate_efficiency_score(0.0, 0.0, 0.0), 70.0));
}

#[test]
fn efficiency_score_saturates_turnover_term() {
    let at_ten = calculate_efficiency_score(0.0, 10.0, 0.0);
    let at_fifty = calculate_efficiency_score(0.0, 50.0, 0.0);
    assert!(approx_eq(at_ten, 100.0));
    assert!(approx_eq(at_ten, at_fifty));
}

#[test]
fn efficiency_score_floors_wastage_and_dsi_terms_at_zero() {
    // 150% wastage and two years of stock both clamp to zero.
    assert!(approx_eq(calculate_efficiency_score(150.0, 2.0, 730.0), 6.0));
}

#[test]
fn efficiency_score_weights_each_term() {
    // wastage 10 -> 90, turnover 4 -> 40, dsi 73 -> 80
    let score = calculate_efficiency_score(10.0, 4.0, 73.0);
    assert!(approx_eq(score, 0.4 * 90.0 + 0.3 * 40.0 + 0.3 * 80.0));
}

#[test]
fn efficiency_score_can_exceed_bounds_for_pathological_inputs() {
    assert!(calculate_efficiency_score(-50.0, 10.0, 0.0) > 100.0);
}

#[test]
fn efficiency_weights_sum_to_one() {
    assert!(approx_eq(WASTAGE_WEIGHT + TURNOVER_WEIGHT + DSI_WEIGHT, 1.0));
}
