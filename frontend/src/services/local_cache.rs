use serde::Serialize;
use web_sys::window;

/// Mirrors a value into `localStorage` under `key` as JSON.
pub fn store<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))?;
    let storage = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())?;
    storage
        .set_item(key, &json)
        .map_err(|e| format!("localStorage write failed: {:?}", e))
}
