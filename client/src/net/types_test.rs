use super::*;

#[test]
fn user_deserializes_without_name() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": "u1", "email": "a@b.ug" })).unwrap();
    assert_eq!(user.name, None);
    assert_eq!(user.display_name(), "a@b.ug");
}

#[test]
fn user_display_name_prefers_profile_name() {
    let user = User { id: "u1".to_owned(), email: "a@b.ug".to_owned(), name: Some("Amina".to_owned()) };
    assert_eq!(user.display_name(), "Amina");
}

#[test]
fn user_display_name_ignores_blank_profile_name() {
    let user = User { id: "u1".to_owned(), email: "a@b.ug".to_owned(), name: Some("  ".to_owned()) };
    assert_eq!(user.display_name(), "a@b.ug");
}

#[test]
fn inventory_summary_missing_amounts_default_to_zero() {
    let summary: InventorySummary = serde_json::from_value(serde_json::json!({
        "branch_id": "b1",
        "investment": 1000.0,
    }))
    .unwrap();
    assert_eq!(summary.investment, 1000.0);
    assert_eq!(summary.returns, 0.0);
    assert_eq!(summary.total_inventory_value, 0.0);
}

#[test]
fn branch_location_is_optional() {
    let branch: Branch = serde_json::from_value(serde_json::json!({ "id": "b1", "name": "Kampala Central" })).unwrap();
    assert_eq!(branch.location, None);
}
