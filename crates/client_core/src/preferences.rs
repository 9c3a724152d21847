//! Process-wide key-value preferences with an in-memory cache.
//!
//! Reads are answered from the cache once warmed. Writes update the cache
//! immediately and are persisted by a single writer task, so callers never
//! wait on storage and writes land in the order they were issued. Storage
//! failures are logged and swallowed; the cached value is never rolled back.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use anyhow::Result;
use async_trait::async_trait;
use storage::Storage;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

pub const THEME_KEY: &str = "app_theme";
pub const LANGUAGE_KEY: &str = "app_language";

#[async_trait]
pub trait PreferenceBackend: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>>;
    async fn write(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl PreferenceBackend for Storage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        self.get_preference(key).await
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        self.set_preference(key, value).await
    }
}

enum WriteCommand {
    Put {
        key: String,
        value: String,
        done: oneshot::Sender<bool>,
    },
    Flush {
        done: oneshot::Sender<()>,
    },
}

/// Handle to a queued preference write.
#[must_use = "dropping a PendingWrite does not cancel it; await `settled` to observe the outcome"]
pub struct PendingWrite {
    key: String,
    outcome: oneshot::Receiver<bool>,
}

impl PendingWrite {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolves to `true` once the value reached storage.
    pub async fn settled(self) -> bool {
        self.outcome.await.unwrap_or(false)
    }
}

pub struct PreferenceStore {
    cache: Mutex<HashMap<String, String>>,
    backend: Arc<dyn PreferenceBackend>,
    writes: mpsc::UnboundedSender<WriteCommand>,
}

impl PreferenceStore {
    /// Must be called from within a tokio runtime; the writer task is spawned
    /// onto it and stops once the store is dropped and its queue drained.
    pub fn open(backend: Arc<dyn PreferenceBackend>) -> Self {
        let (writes, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(Arc::clone(&backend), queue));
        Self {
            cache: Mutex::new(HashMap::new()),
            backend,
            writes,
        }
    }

    /// Warms the cache with `keys`. Keys that fail to load are left absent.
    pub async fn load(&self, keys: &[&str]) {
        for key in keys {
            match self.backend.read(key).await {
                Ok(Some(value)) => {
                    debug!(key, %value, "loaded preference");
                    self.cache_insert(key, value);
                }
                Ok(None) => debug!(key, "preference not set"),
                Err(error) => warn!(key, %error, "failed to load preference"),
            }
        }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.cached(key) {
            return Some(value);
        }

        match self.backend.read(key).await {
            Ok(Some(value)) => {
                self.cache_insert(key, value.clone());
                Some(value)
            }
            Ok(None) => None,
            Err(error) => {
                warn!(key, %error, "failed to read preference; treating as unset");
                None
            }
        }
    }

    pub fn cached(&self, key: &str) -> Option<String> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn set(&self, key: &str, value: &str) -> PendingWrite {
        self.cache_insert(key, value.to_string());

        let (done, outcome) = oneshot::channel();
        let command = WriteCommand::Put {
            key: key.to_string(),
            value: value.to_string(),
            done,
        };
        if self.writes.send(command).is_err() {
            warn!(key, "preference writer stopped; value kept in memory only");
        }

        PendingWrite {
            key: key.to_string(),
            outcome,
        }
    }

    /// Waits until every write queued before this call has been attempted.
    pub async fn flush(&self) {
        let (done, flushed) = oneshot::channel();
        if self.writes.send(WriteCommand::Flush { done }).is_err() {
            return;
        }
        let _ = flushed.await;
    }

    fn cache_insert(&self, key: &str, value: String) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }
}

async fn run_writer(
    backend: Arc<dyn PreferenceBackend>,
    mut queue: mpsc::UnboundedReceiver<WriteCommand>,
) {
    while let Some(command) = queue.recv().await {
        match command {
            WriteCommand::Put { key, value, done } => {
                let persisted = match backend.write(&key, &value).await {
                    Ok(()) => {
                        debug!(%key, %value, "persisted preference");
                        true
                    }
                    Err(error) => {
                        warn!(%key, %error, "failed to persist preference; keeping in-memory value");
                        false
                    }
                };
                let _ = done.send(persisted);
            }
            WriteCommand::Flush { done } => {
                let _ = done.send(());
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
}

/// A typed value stored under a fixed preference key.
pub trait PreferenceValue: Copy + PartialEq + Send + Sync + 'static {
    const KEY: &'static str;

    fn encode(self) -> &'static str;
    fn decode(raw: &str) -> Option<Self>;
}

/// One typed preference with the `Uninitialized -> Loading -> Ready` lifecycle
/// shared by the theme and language stores.
pub struct PreferenceCell<T> {
    store: Arc<PreferenceStore>,
    state: LoadState,
    default: T,
    value: T,
}

impl<T: PreferenceValue> PreferenceCell<T> {
    pub fn new(store: Arc<PreferenceStore>, default: T) -> Self {
        Self {
            store,
            state: LoadState::Uninitialized,
            default,
            value: default,
        }
    }

    pub async fn load(&mut self) -> T {
        self.state = LoadState::Loading;
        self.value = match self.store.get(T::KEY).await {
            Some(raw) => T::decode(&raw).unwrap_or_else(|| {
                warn!(key = T::KEY, %raw, "unrecognised stored preference; using default");
                self.default
            }),
            None => self.default,
        };
        self.state = LoadState::Ready;
        self.value
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn set(&mut self, value: T) -> PendingWrite {
        self.value = value;
        self.store.set(T::KEY, value.encode())
    }
}

#[cfg(test)]
#[path = "tests/preferences_tests.rs"]
mod tests;
