//! Browser `localStorage` helpers for the persisted theme flag.
//!
//! The only persisted value in the crate is a bare string token, so these
//! helpers read and write raw strings. Persistence is best-effort
//! browser-only behavior; native builds safely report nothing stored.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read the raw string stored under `key`.
#[must_use]
pub fn get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`. Storage may be unavailable (private browsing,
/// quota); failures are ignored.
pub fn set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
