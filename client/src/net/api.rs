//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Error bodies from
//! the backend proxy are reduced to one display line by
//! `util::error_message::extract_error_body`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Branch, InventorySummary, User};

#[cfg(any(test, feature = "hydrate"))]
fn branch_summary_endpoint(branch_id: &str) -> String {
    format!("/api/branches/{branch_id}/summary")
}

#[cfg(any(test, feature = "hydrate"))]
fn failure_message(body: &str, operation: &str, status: u16) -> String {
    crate::util::error_message::extract_error_body(body, &format!("{operation} failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response, operation: &str) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    failure_message(&body, operation, status)
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's error text, or a status fallback, if sign-in fails.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp, "sign in").await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch the branches visible to the current user from `/api/branches`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn fetch_branches() -> Result<Vec<Branch>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/branches")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp, "branch list").await);
        }
        resp.json::<Vec<Branch>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch inventory aggregates for `branch_id` from `/api/branches/{id}/summary`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn fetch_inventory_summary(branch_id: &str) -> Result<InventorySummary, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = branch_summary_endpoint(branch_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(resp, "inventory summary").await);
        }
        resp.json::<InventorySummary>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = branch_id;
        Err("not available on server".to_owned())
    }
}
