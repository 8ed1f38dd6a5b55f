use std::cell::RefCell;
use std::rc::Rc;

pub const SESSION_STORAGE_KEY: &str = "menta_session";
pub const SESSION_COOKIE_NAME: &str = "menta_session";
pub const SESSION_MAX_AGE_SECONDS: u64 = 60 * 60 * 24 * 7; // 7 days

/// Holder of the opaque session token issued by the backend after OTP
/// verification. The token is never parsed, only stored and presented.
///
/// The in-memory cell backs every target so tests can inject fake
/// sessions; in the browser the token is mirrored to localStorage and a
/// cookie so it survives reloads. This store is the sole writer of
/// session material.
#[derive(Clone, Default)]
pub struct SessionStore {
    memory: Rc<RefCell<Option<String>>>,
}

impl SessionStore {
    /// Store seeded from whatever the browser already persisted.
    pub fn new() -> Self {
        let store = Self::in_memory();
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(token) = persisted_token() {
                *store.memory.borrow_mut() = Some(token);
            }
        }
        store
    }

    /// Empty store with no browser persistence behind it.
    pub fn in_memory() -> Self {
        Self {
            memory: Rc::new(RefCell::new(None)),
        }
    }

    #[cfg(test)]
    pub fn with_token(token: &str) -> Self {
        let store = Self::in_memory();
        *store.memory.borrow_mut() = Some(token.to_string());
        store
    }

    pub fn set(&self, token: &str) {
        *self.memory.borrow_mut() = Some(token.to_string());
        #[cfg(target_arch = "wasm32")]
        persist_token(token);
    }

    pub fn get(&self) -> Option<String> {
        self.memory.borrow().clone()
    }

    pub fn is_present(&self) -> bool {
        self.memory.borrow().is_some()
    }

    pub fn clear(&self) {
        *self.memory.borrow_mut() = None;
        #[cfg(target_arch = "wasm32")]
        clear_persisted_token();
    }
}

#[cfg(target_arch = "wasm32")]
fn persisted_token() -> Option<String> {
    use crate::utils::storage;

    // localStorage first, cookie as the reload fallback, matching the
    // read order of the HTTP interceptor this store replaced.
    if let Ok(local) = storage::local_storage() {
        if let Ok(Some(token)) = local.get_item(SESSION_STORAGE_KEY) {
            if !token.is_empty() {
                return Some(token);
            }
        }
    }
    storage::read_cookie(SESSION_COOKIE_NAME).filter(|token| !token.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn persist_token(token: &str) {
    use crate::utils::storage;

    if let Ok(local) = storage::local_storage() {
        let _ = local.set_item(SESSION_STORAGE_KEY, token);
    }
    // HttpOnly cannot be set from script; the cookie carries the
    // remaining attributes and exists to survive reloads.
    let mut cookie = format!(
        "{}={}; Max-Age={}; Path=/; SameSite=Lax",
        SESSION_COOKIE_NAME, token, SESSION_MAX_AGE_SECONDS
    );
    if storage::is_secure_context() {
        cookie.push_str("; Secure");
    }
    if storage::write_cookie(&cookie).is_err() {
        log::warn!("failed to persist session cookie");
    }
}

#[cfg(target_arch = "wasm32")]
fn clear_persisted_token() {
    use crate::utils::storage;

    if let Ok(local) = storage::local_storage() {
        let _ = local.remove_item(SESSION_STORAGE_KEY);
    }
    let expired = format!("{}=; Max-Age=0; Path=/; SameSite=Lax", SESSION_COOKIE_NAME);
    let _ = storage::write_cookie(&expired);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear_round_trip() {
        let store = SessionStore::in_memory();
        assert!(store.get().is_none());
        assert!(!store.is_present());

        store.set("tok_1");
        assert_eq!(store.get().as_deref(), Some("tok_1"));
        assert!(store.is_present());

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn clones_share_the_same_token() {
        let store = SessionStore::in_memory();
        let handle = store.clone();
        store.set("tok_2");
        assert_eq!(handle.get().as_deref(), Some("tok_2"));
        handle.clear();
        assert!(store.get().is_none());
    }
}
