//! Session persistence and the guard every page runs before loading.

use log::{info, warn};
use crate::client::error::ClientError;
use crate::client::model::auth::AuthenticationResponse;
use crate::client::model::session::Session;
use crate::client::storage::StateStore;

pub(crate) const TOKEN_KEY: &str = "token";
pub(crate) const USERNAME_KEY: &str = "username";
pub(crate) const ROLE_KEY: &str = "role";
pub(crate) const USER_ID_KEY: &str = "userId";

pub(crate) fn save<S: StateStore>(store: &mut S, auth: &AuthenticationResponse) -> Result<(), ClientError> {
    store.set_item(TOKEN_KEY, auth.jwt.clone())?;
    store.set_item(USERNAME_KEY, auth.username.clone())?;
    store.set_item(ROLE_KEY, auth.role.to_string())?;
    store.set_item(USER_ID_KEY, auth.user_id.to_string())?;
    info!("session stored for user={} role={}", auth.username, auth.role);
    Ok(())
}

pub(crate) fn load<S: StateStore>(store: &S) -> Option<Session> {
    let token = store.get_item(TOKEN_KEY).filter(|t| !t.is_empty())?;
    Some(Session {
        token,
        username: store.get_item(USERNAME_KEY),
        role: store.get_item(ROLE_KEY).and_then(|r| r.parse().ok()),
        user_id: store.get_item(USER_ID_KEY).and_then(|id| id.parse().ok()),
    })
}

/// Token presence check.
pub(crate) fn require<S: StateStore>(store: &S) -> Result<Session, ClientError> {
    load(store).ok_or(ClientError::MissingSession)
}

/// Token and user id, for pages scoped to the logged in customer.
pub(crate) fn require_user<S: StateStore>(store: &S) -> Result<Session, ClientError> {
    require(store).and_then(|session| match session.user_id {
        Some(_) => Ok(session),
        None => Err(ClientError::MissingSession),
    })
}

/// Token and the STAFF role. Any other role clears the session.
pub(crate) fn require_staff<S: StateStore>(store: &mut S) -> Result<Session, ClientError> {
    match load(store) {
        Some(session) if session.is_staff() => Ok(session),
        _ => {
            warn!("staff console opened without a staff session");
            invalidate(store)?;
            Err(ClientError::Forbidden)
        }
    }
}

/// Drop everything the client persisted, cart included.
pub(crate) fn invalidate<S: StateStore>(store: &mut S) -> Result<(), ClientError> {
    store.clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::model::session::Role;
    use crate::client::storage::memory::MemoryStore;

    fn auth(role: Role) -> AuthenticationResponse {
        AuthenticationResponse {
            jwt: "jwt-token".to_string(),
            username: "asha".to_string(),
            role,
            user_id: 7,
        }
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::default();
        save(&mut store, &auth(Role::Customer)).unwrap();

        let session = require_user(&store).unwrap();
        assert_eq!(session.token, "jwt-token");
        assert_eq!(session.username.as_deref(), Some("asha"));
        assert_eq!(session.role, Some(Role::Customer));
        assert_eq!(session.user_id, Some(7));
        assert!(!session.is_staff());
    }

    #[test]
    fn missing_token_fails_the_guard() {
        let mut store = MemoryStore::default();
        assert!(matches!(require(&store), Err(ClientError::MissingSession)));

        store.set_item(TOKEN_KEY, "t".to_string()).unwrap();
        assert!(require(&store).is_ok());
        assert!(matches!(require_user(&store), Err(ClientError::MissingSession)));
    }

    #[test]
    fn customer_on_staff_console_is_logged_out() {
        let mut store = MemoryStore::default();
        save(&mut store, &auth(Role::Customer)).unwrap();
        store.set_item("cart", "[]".to_string()).unwrap();

        assert!(matches!(require_staff(&mut store), Err(ClientError::Forbidden)));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn staff_passes_the_staff_guard() {
        let mut store = MemoryStore::default();
        save(&mut store, &auth(Role::Staff)).unwrap();
        assert!(require_staff(&mut store).unwrap().is_staff());
    }
}
