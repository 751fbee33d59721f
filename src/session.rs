//! Explicit session context.
//!
//! Credentials are never read through ambient storage lookups: the HTTP
//! client and the auth layer receive a `Session` handle with a clear
//! lifecycle (populated on login success, cleared on logout).

use serde_json::Value;

use crate::web::SessionStorage;

/// Storage key for the JSON-serialized login response.
pub const USER_KEY: &str = "user";
/// Storage key for the bearer token. Distinct from `USER_KEY` on purpose:
/// the token is what outgoing requests carry, the user record is what the
/// route guard checks.
pub const TOKEN_KEY: &str = "auth_token";

// =========================================================
// Storage adapter
// =========================================================

/// Session-scoped key-value store.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn delete(&self, key: &str) -> bool;
}

/// Production store backed by the browser tab's sessionStorage.
#[derive(Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        SessionStorage::get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        SessionStorage::set(key, value)
    }

    fn delete(&self, key: &str) -> bool {
        SessionStorage::delete(key)
    }
}

// =========================================================
// Session context
// =========================================================

/// Session credentials handle: an opaque user record plus a bearer token.
#[derive(Clone)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Raw JSON string stored under `"user"`.
    pub fn user_raw(&self) -> Option<String> {
        self.store.get(USER_KEY)
    }

    /// Parsed user record, if one is stored and parses as JSON.
    pub fn user(&self) -> Option<Value> {
        self.user_raw()
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Persists the full login response body under `"user"`.
    pub fn set_user(&self, record: &Value) -> bool {
        self.store.set(USER_KEY, &record.to_string())
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) -> bool {
        self.store.set(TOKEN_KEY, token)
    }

    /// Presence of a user record is what the route guard checks; the token
    /// is not consulted.
    pub fn is_logged_in(&self) -> bool {
        self.user_raw().is_some()
    }

    /// Explicit teardown: removes the user record AND the token, so no
    /// residual credential survives a logout.
    pub fn clear(&self) {
        self.store.delete(USER_KEY);
        self.store.delete(TOKEN_KEY);
    }
}

impl Default for Session<BrowserSession> {
    fn default() -> Self {
        Self::new(BrowserSession)
    }
}

// =========================================================
// Test double
// =========================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory store shared between the client under test and the
    /// assertions.
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        entries: Rc<RefCell<HashMap<String, String>>>,
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }

        fn delete(&self, key: &str) -> bool {
            self.entries.borrow_mut().remove(key).is_some()
        }
    }

    #[test]
    fn user_round_trip() {
        let session = Session::new(MemoryStore::default());
        assert!(!session.is_logged_in());

        let record = serde_json::json!({"id": 1, "name": "A"});
        session.set_user(&record);

        assert!(session.is_logged_in());
        assert_eq!(session.user_raw().as_deref(), Some(r#"{"id":1,"name":"A"}"#));
        assert_eq!(session.user(), Some(record));
    }

    #[test]
    fn clear_removes_user_and_token() {
        let session = Session::new(MemoryStore::default());
        session.set_user(&serde_json::json!({"id": 7}));
        session.set_token("abc123");

        session.clear();

        assert!(session.user_raw().is_none());
        assert!(session.token().is_none());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn token_is_independent_of_user() {
        let session = Session::new(MemoryStore::default());
        session.set_token("t-1");

        // A token alone does not make the session logged in.
        assert!(!session.is_logged_in());
        assert_eq!(session.token().as_deref(), Some("t-1"));
    }
}
