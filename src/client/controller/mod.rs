//! Page controllers. Each handles one intent end to end and reports what to show next.
//!
//! Failures are caught here and turned into notices. Only local storage
//! errors escape to the caller.

pub(crate) mod auth;
pub(crate) mod cart;
pub(crate) mod history;
pub(crate) mod menu;
pub(crate) mod staff;

use log::info;
use crate::client::error::ClientError;
use crate::client::session;
use crate::client::storage::StateStore;
use crate::client::view::{Notice, Outcome, Page};

/// The session recovery policy: a missing session goes back to login, a
/// refused one is wiped first. Anything else becomes a blocking alert.
pub(crate) fn recover<S: StateStore>(store: &mut S, err: ClientError) -> Result<Outcome, ClientError> {
    match err {
        ClientError::MissingSession => Ok(Outcome::redirect(Page::Login)),
        e if e.ends_session() => {
            info!("clearing local session, {}", e);
            session::invalidate(store)?;
            Ok(Outcome::redirect(Page::Login))
        }
        e @ ClientError::Storage { .. } => Err(e),
        e => Ok(Outcome::stay().with(Notice::Alert(format!("Error: {e}")))),
    }
}

/// Like [`recover`], but a failed load is reported next to the list instead of as an alert.
pub(crate) fn recover_inline<S: StateStore>(store: &mut S, err: ClientError) -> Result<Outcome, ClientError> {
    match err {
        e @ (ClientError::MissingSession | ClientError::Storage { .. }) => recover(store, e),
        e if e.ends_session() => recover(store, e),
        e => Ok(Outcome::stay().with(Notice::Inline(format!("Error: {e}")))),
    }
}
