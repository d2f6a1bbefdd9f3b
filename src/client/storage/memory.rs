use std::collections::BTreeMap;
use crate::client::error::ClientError;
use crate::client::storage::StateStore;

/// for test
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl StateStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), ClientError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ClientError> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ClientError> {
        self.entries.clear();
        Ok(())
    }
}
