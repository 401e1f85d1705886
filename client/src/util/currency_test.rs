use super::*;

#[test]
fn format_ugx_thousand_has_symbol_and_no_fraction() {
    let text = format_ugx(1000.0);
    assert_eq!(text, "USh\u{a0}1,000");
    assert!(text.contains(UGX_SYMBOL));
    assert!(!text.contains('.'));
}

#[test]
fn format_ugx_small_values_have_no_grouping() {
    assert_eq!(format_ugx(0.0), "USh\u{a0}0");
    assert_eq!(format_ugx(999.0), "USh\u{a0}999");
}

#[test]
fn format_ugx_groups_large_values() {
    assert_eq!(format_ugx(1_234_567.0), "USh\u{a0}1,234,567");
    assert_eq!(format_ugx(100_000.0), "USh\u{a0}100,000");
}

#[test]
fn format_ugx_rounds_half_away_from_zero() {
    assert_eq!(format_ugx(2.5), "USh\u{a0}3");
    assert_eq!(format_ugx(1999.4), "USh\u{a0}1,999");
    assert_eq!(format_ugx(-2500.5), "-USh\u{a0}2,501");
}

#[test]
fn format_ugx_negative_values_lead_with_minus() {
    assert_eq!(format_ugx(-45_000.0), "-USh\u{a0}45,000");
}

#[test]
fn format_ugx_non_finite_values() {
    assert_eq!(format_ugx(f64::NAN), "USh\u{a0}NaN");
    assert_eq!(format_ugx(f64::INFINITY), "USh\u{a0}∞");
    assert_eq!(format_ugx(f64::NEG_INFINITY), "-USh\u{a0}∞");
}
