//! sessionStorage access.
//!
//! Session credentials are tab-scoped: they live in `sessionStorage` and
//! disappear when the tab ends.

/// Static wrapper around the browser's sessionStorage.
pub struct SessionStorage;

impl SessionStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }

    /// Stored string value, or `None` when the key is absent or storage is
    /// unavailable.
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// Returns `true` when the write succeeded.
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// Returns `true` when the removal succeeded.
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
