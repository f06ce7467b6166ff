use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::cache::{CacheError, ProfileCache};
use crate::models::profile::ResumeProfile;

/// Bounded in-process cache. Evicts the oldest insertion once `capacity` is reached.
pub struct InMemoryProfileCache {
    capacity: usize,
    inner: Mutex<Entries>,
}

#[derive(Default)]
struct Entries {
    profiles: HashMap<String, ResumeProfile>,
    order: VecDeque<String>,
}

impl InMemoryProfileCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(Entries::default()),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.lock().map(|e| e.profiles.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ProfileCache for InMemoryProfileCache {
    async fn get(&self, key: &str) -> Result<Option<ResumeProfile>, CacheError> {
        let entries = self.inner.lock().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.profiles.get(key).cloned())
    }

    async fn put(&self, key: &str, profile: &ResumeProfile) -> Result<(), CacheError> {
        if self.capacity == 0 {
            return Ok(());
        }
        let mut entries = self.inner.lock().map_err(|_| CacheError::Poisoned)?;
        if entries
            .profiles
            .insert(key.to_string(), profile.clone())
            .is_none()
        {
            entries.order.push_back(key.to_string());
        }
        while entries.order.len() > self.capacity {
            if let Some(oldest) = entries.order.pop_front() {
                entries.profiles.remove(&oldest);
            }
        }
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
