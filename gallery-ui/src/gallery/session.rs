//! Auth token lifecycle
//!
//! A single optional bearer token; absence means unauthenticated. The
//! client tracks no expiry; an invalid token is only discovered when an
//! authenticated call fails.

use crate::api;
use crate::error::GalleryError;
use crate::gallery::settings::{SettingsStore, TOKEN_KEY};

pub fn load_token<S: SettingsStore>(store: &S) -> String {
    store.get(TOKEN_KEY).unwrap_or_default()
}

pub fn store_token<S: SettingsStore>(store: &S, token: &str) {
    store.set(TOKEN_KEY, token);
}

/// Client-local logout; there is no server-side session to invalidate.
pub fn clear_token<S: SettingsStore>(store: &S) {
    store.remove(TOKEN_KEY);
}

pub fn is_authenticated(token: &str) -> bool {
    !token.is_empty()
}

/// Exchange credentials for a bearer token and persist it. Concurrent
/// logins are not deduplicated; the last response wins.
pub async fn login<S: SettingsStore>(
    store: &S,
    username: &str,
    password: &str,
) -> Result<String, GalleryError> {
    let response = api::login(username, password).await?;
    store_token(store, &response.access_token);
    Ok(response.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::settings::MemorySettings;

    #[test]
    fn missing_token_means_unauthenticated() {
        let store = MemorySettings::default();
        let token = load_token(&store);
        assert_eq!(token, "");
        assert!(!is_authenticated(&token));
    }

    #[test]
    fn stored_token_loads_back_authenticated() {
        let store = MemorySettings::default();
        store_token(&store, "tok-abc");
        let token = load_token(&store);
        assert_eq!(token, "tok-abc");
        assert!(is_authenticated(&token));
    }

    #[test]
    fn clearing_unauthenticates_without_a_round_trip() {
        let store = MemorySettings::default();
        store_token(&store, "tok-abc");
        clear_token(&store);
        assert!(!is_authenticated(&load_token(&store)));
    }
}
