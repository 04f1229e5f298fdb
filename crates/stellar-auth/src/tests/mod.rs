
use crate::{Notification, NotificationSink, NoopDelay, SessionManager, SessionOptions};

use stellar_core::ErrorLocation;
use stellar_db::{DbError, KeyValueStore, MemoryKeyValueStore, SessionRepository};

use std::panic::Location;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

/// Records every notification for later assertions
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub(crate) fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// In-memory store that counts writes and can be told to fail them
#[derive(Default)]
pub(crate) struct InstrumentedStore {
    inner: MemoryKeyValueStore,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InstrumentedStore {
    pub(crate) fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw slot access that bypasses instrumentation and failure injection
    pub(crate) async fn inner_get(&self, key: &str) -> Option<String> {
        self.inner.get(key).await.unwrap()
    }

    /// Seed the slot directly, bypassing instrumentation
    pub(crate) async fn inner_set(&self, key: &str, value: &str) {
        self.inner.set(key, value).await.unwrap();
    }

    fn injected_failure() -> DbError {
        DbError::Initialization {
            message: "injected write failure".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl KeyValueStore for InstrumentedStore {
    async fn get(&self, key: &str) -> stellar_db::Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> stellar_db::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> stellar_db::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        self.inner.delete(key).await
    }
}

pub(crate) struct Harness {
    pub(crate) manager: SessionManager,
    pub(crate) store: Arc<InstrumentedStore>,
    pub(crate) notifier: Arc<RecordingNotifier>,
}

/// Manager over an instrumented in-memory store with no real waiting
pub(crate) fn harness() -> Harness {
    let store = Arc::new(InstrumentedStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let repository = SessionRepository::new(store.clone());
    let manager = SessionManager::new(
        repository,
        notifier.clone(),
        Arc::new(NoopDelay),
        SessionOptions::default(),
    );
    Harness {
        manager,
        store,
        notifier,
    }
}
