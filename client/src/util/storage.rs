//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so state modules
//! can persist small JSON values without repeating web-sys glue. On the server
//! every call is a no-op.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            leptos::logging::warn!("localStorage write failed: key={key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                leptos::logging::warn!("localStorage remove failed: key={key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
