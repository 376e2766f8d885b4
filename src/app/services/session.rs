//! Mock sign-in session
//!
//! There is no real authentication: any non-blank username is accepted and
//! issued a fixed placeholder token. Token and username live in the injected
//! key-value store next to the selections.

use crate::app::models::User;
use crate::app::services::selection::KeyValueStore;
use crate::constants::{EMPTY_USERNAME_MESSAGE, MOCK_SESSION_TOKEN, storage_keys};
use crate::{Error, Result};
use tracing::info;

/// Sign in, storing the placeholder token and the trimmed username
pub fn login<S: KeyValueStore + ?Sized>(store: &mut S, username: &str) -> Result<User> {
    let username = username.trim();
    if username.is_empty() {
        return Err(Error::authentication(EMPTY_USERNAME_MESSAGE));
    }

    store.set(storage_keys::TOKEN, MOCK_SESSION_TOKEN)?;
    store.set(storage_keys::USERNAME, username)?;
    info!("Signed in as {}", username);

    Ok(User {
        username: username.to_string(),
        token: MOCK_SESSION_TOKEN.to_string(),
    })
}

/// Sign out by removing the token; the last username is kept for the prompt
pub fn logout<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<()> {
    store.remove(storage_keys::TOKEN)?;
    info!("Signed out");
    Ok(())
}

/// The signed-in user, if a token is present
pub fn current_user<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<User>> {
    let Some(token) = store.get(storage_keys::TOKEN)? else {
        return Ok(None);
    };

    let username = store.get(storage_keys::USERNAME)?.unwrap_or_default();
    Ok(Some(User { username, token }))
}

/// The signed-in user, or [`Error::NotAuthenticated`]
pub fn require_user<S: KeyValueStore + ?Sized>(store: &S) -> Result<User> {
    current_user(store)?.ok_or(Error::NotAuthenticated)
}

/// Last username used to sign in, for prefilling the prompt
pub fn last_username<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<String>> {
    store.get(storage_keys::USERNAME)
}
