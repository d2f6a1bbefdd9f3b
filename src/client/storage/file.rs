use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use tempfile::NamedTempFile;
use crate::client::error::ClientError;
use crate::client::storage::StateStore;

/// State store backed by one JSON object on disk.
///
/// The whole file is replaced after every mutation by renaming a sibling temp
/// file over it, so a reader never sees a partially applied update.
#[derive(Debug)]
pub(crate) struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, a missing or unreadable file is an empty store.
    pub fn open(path: &Path) -> Result<Self, ClientError> {
        let entries = match fs::read_to_string(path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("discarding unreadable client state at {}, {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("no client state at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    fn flush(&self) -> Result<(), ClientError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };
        let raw = serde_json::to_string_pretty(&self.entries).map_err(|e| ClientError::Storage {
            reason: e.to_string(),
        })?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(raw.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!("client state flushed to {}", self.path.display());
        Ok(())
    }
}

impl StateStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), ClientError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ClientError> {
        if self.entries.remove(key).is_some() {
            return self.flush();
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ClientError> {
        self.entries.clear();
        self.flush()
    }
}
