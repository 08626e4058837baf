use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use shared_models::ClientError;

use crate::models::Session;

pub const USERNAME_KEY: &str = "username";
pub const PATIENT_NAME_KEY: &str = "patientName";

/// Persistent string key-value storage, the client's equivalent of the
/// browser's local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
    fn remove(&self, key: &str) -> Result<(), ClientError>;
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, ClientError> {
        self.entries
            .lock()
            .map_err(|_| ClientError::Storage("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// JSON object on disk, rewritten on every change. Survives restarts until
/// the keys are removed.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, ClientError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            ClientError::Storage(format!("failed to read {:?}: {}", self.path, e))
        })?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            ClientError::Storage(format!("failed to parse {:?}: {}", self.path, e))
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ClientError::Storage(format!("failed to create {:?}: {}", parent, e))
            })?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content).map_err(|e| {
            ClientError::Storage(format!("failed to write {:?}: {}", self.path, e))
        })
    }

    fn update<F>(&self, change: F) -> Result<(), ClientError>
    where F: FnOnce(&mut BTreeMap<String, String>) {
        let _guard = self.lock
            .lock()
            .map_err(|_| ClientError::Storage("file store lock poisoned".to_string()))?;
        let mut entries = self.read_all()?;
        change(&mut entries);
        self.write_all(&entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

/// Session gate over a key-value store. The username is written under two
/// keys: `username` gates actions, `patientName` pre-fills the booking form.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// An unreadable store counts as logged out.
    pub fn current(&self) -> Option<Session> {
        match self.store.get(USERNAME_KEY) {
            Ok(Some(username)) if !username.is_empty() => Some(Session { username }),
            Ok(_) => None,
            Err(e) => {
                warn!("Could not read session: {}", e);
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current().is_some()
    }

    /// The gate for personal actions: the current session or `NotLoggedIn`.
    pub fn require(&self) -> Result<Session, ClientError> {
        self.current().ok_or(ClientError::NotLoggedIn)
    }

    pub fn saved_patient_name(&self) -> Option<String> {
        match self.store.get(PATIENT_NAME_KEY) {
            Ok(name) => name.filter(|n| !n.is_empty()),
            Err(e) => {
                warn!("Could not read saved patient name: {}", e);
                None
            }
        }
    }

    pub fn persist_login(&self, username: &str) -> Result<Session, ClientError> {
        self.store.set(USERNAME_KEY, username)?;
        self.store.set(PATIENT_NAME_KEY, username)?;
        info!("Session started for {}", username);
        Ok(Session { username: username.to_string() })
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        self.store.remove(USERNAME_KEY)?;
        self.store.remove(PATIENT_NAME_KEY)?;
        debug!("Session keys removed");
        Ok(())
    }
}
