//! Persisted client state, the terminal stand-in for browser local storage.

pub(crate) mod file;
#[cfg(test)]
pub(crate) mod memory;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::client::error::ClientError;

/// String key/value store shared by every page of the client.
pub(crate) trait StateStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String) -> Result<(), ClientError>;
    fn remove_item(&mut self, key: &str) -> Result<(), ClientError>;
    fn clear(&mut self) -> Result<(), ClientError>;
}

/// Read a JSON encoded value, an unreadable value counts as absent.
pub(crate) fn read_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: StateStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("ignoring unreadable value under key={}, {}", key, e);
            None
        }
    }
}

pub(crate) fn write_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), ClientError>
where
    S: StateStore + ?Sized,
    T: Serialize + ?Sized,
{
    store.set_item(key, serde_json::to_string(value)?)
}
