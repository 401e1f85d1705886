//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server proxy normalizes backend payloads into these shapes, so the
//! browser never depends on the hosted backend's raw schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier (UUID string).
    pub id: String,
    pub email: String,
    /// Display name from the user's profile metadata, if set.
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Name to show in page chrome: profile name, else the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// A store or warehouse location the user can scope their work to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Stock and sales aggregates for one branch. Amounts are UGX.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub branch_id: String,
    /// Capital put into stock over the reporting period.
    #[serde(default)]
    pub investment: f64,
    /// Sales revenue over the reporting period.
    #[serde(default)]
    pub returns: f64,
    #[serde(default)]
    pub cost_of_goods_sold: f64,
    #[serde(default)]
    pub average_inventory_value: f64,
    /// Value of stock written off as expired.
    #[serde(default)]
    pub expired_value: f64,
    #[serde(default)]
    pub total_inventory_value: f64,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
