//! Stored session tokens.
//!
//! The browser build keeps the pair in `localStorage` so a page reload stays
//! signed in; native builds (tests, a future desktop shell) use a
//! process-local slot instead.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Mutex;

#[cfg(target_arch = "wasm32")]
const ACCESS_TOKEN_KEY: &str = "access_token";
#[cfg(target_arch = "wasm32")]
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// The access/refresh pair the client's authorization header is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: String,
}

#[cfg(not(target_arch = "wasm32"))]
static NATIVE_SESSION: Mutex<Option<SessionTokens>> = Mutex::new(None);

/// Read the stored session, if any.
pub fn load() -> Option<SessionTokens> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let access = storage.get_item(ACCESS_TOKEN_KEY).ok()??;
        let refresh = storage.get_item(REFRESH_TOKEN_KEY).ok()??;
        Some(SessionTokens { access, refresh })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        NATIVE_SESSION.lock().unwrap().clone()
    }
}

/// Persist a session, replacing any previous one.
pub fn store(tokens: &SessionTokens) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, &tokens.access);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, &tokens.refresh);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        *NATIVE_SESSION.lock().unwrap() = Some(tokens.clone());
    }
}

/// Drop the stored session. Logout is this plus a redirect.
pub fn clear() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        *NATIVE_SESSION.lock().unwrap() = None;
    }
}
