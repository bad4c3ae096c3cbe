//! Platform-aware wall-clock helper.

/// Current time in milliseconds since the Unix epoch.
///
/// Uses `js_sys::Date::now()` on WASM and `std::time::SystemTime` on native,
/// so session timestamps are sensible in both environments.
pub fn now_millis() -> u64 {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
