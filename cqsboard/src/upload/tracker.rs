use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use super::UploadStatus;

/// Bounded in-memory record of recent uploads.
///
/// Oldest entries are evicted once `capacity` uploads are tracked; nothing
/// survives a restart.
#[derive(Clone)]
pub struct UploadTracker {
    entries: Arc<Mutex<LruCache<Uuid, UploadStatus>>>,
}

impl UploadTracker {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<Uuid, UploadStatus>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, id: &Uuid) -> Option<UploadStatus> {
        self.lock().get(id).cloned()
    }

    pub fn put(&self, status: UploadStatus) {
        self.lock().put(status.id, status);
    }

    /// Apply `f` to the entry for `id` and return the updated status.
    ///
    /// Returns `None` if the entry was evicted in the meantime.
    pub fn update<F>(&self, id: &Uuid, f: F) -> Option<UploadStatus>
    where
        F: FnOnce(&mut UploadStatus),
    {
        let mut entries = self.lock();
        let status = entries.get_mut(id)?;
        f(status);
        Some(status.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
