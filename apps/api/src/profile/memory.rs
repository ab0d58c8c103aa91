use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfileDocument};
use crate::profile::store::ProfileStore;

/// Process-local store. The existence check and the write share one lock, so
/// the singleton invariant holds under concurrent inserts.
#[derive(Default)]
pub struct InMemoryProfileStore {
    slot: RwLock<Option<Profile>>,
    reads: AtomicUsize,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `find` calls served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find(&self) -> Result<Option<Profile>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.slot.read().await.clone())
    }

    async fn insert(&self, doc: &ProfileDocument) -> Result<Option<Profile>, AppError> {
        let mut slot = self.slot.write().await;
        if slot.is_some() {
            return Ok(None);
        }
        let now = Utc::now();
        let profile = Profile {
            id: Uuid::new_v4(),
            document: doc.clone(),
            created_at: now,
            updated_at: now,
        };
        *slot = Some(profile.clone());
        Ok(Some(profile))
    }

    async fn update(&self, id: Uuid, doc: &ProfileDocument) -> Result<Option<Profile>, AppError> {
        let mut slot = self.slot.write().await;
        match slot.as_mut() {
            Some(profile) if profile.id == id => {
                profile.document = doc.clone();
                profile.updated_at = Utc::now();
                Ok(Some(profile.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut slot = self.slot.write().await;
        if slot.as_ref().is_some_and(|p| p.id == id) {
            *slot = None;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn replace(&self, doc: &ProfileDocument) -> Result<Profile, AppError> {
        let now = Utc::now();
        let profile = Profile {
            id: Uuid::new_v4(),
            document: doc.clone(),
            created_at: now,
            updated_at: now,
        };
        *self.slot.write().await = Some(profile.clone());
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> ProfileDocument {
        ProfileDocument {
            name: name.into(),
            email: "a@b.c".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_second_insert_is_refused() {
        let store = InMemoryProfileStore::new();
        assert!(store.insert(&doc("first")).await.unwrap().is_some());
        assert!(store.insert(&doc("second")).await.unwrap().is_none());
        assert_eq!(store.find().await.unwrap().unwrap().document.name, "first");
    }

    #[tokio::test]
    async fn test_update_targets_current_id_only() {
        let store = InMemoryProfileStore::new();
        let created = store.insert(&doc("first")).await.unwrap().unwrap();
        assert!(store
            .update(Uuid::new_v4(), &doc("stale"))
            .await
            .unwrap()
            .is_none());
        let updated = store.update(created.id, &doc("renamed")).await.unwrap().unwrap();
        assert_eq!(updated.document.name, "renamed");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_delete_only_once() {
        let store = InMemoryProfileStore::new();
        let created = store.insert(&doc("first")).await.unwrap().unwrap();
        assert!(store.delete(created.id).await.unwrap());
        assert!(!store.delete(created.id).await.unwrap());
        assert!(store.find().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_on_empty_and_occupied_store() {
        let store = InMemoryProfileStore::new();
        let first = store.replace(&doc("first")).await.unwrap();
        let second = store.replace(&doc("second")).await.unwrap();
        assert_ne!(first.id, second.id);

        let stored = store.find().await.unwrap().unwrap();
        assert_eq!(stored.id, second.id);
        assert_eq!(stored.document.name, "second");
    }

    #[tokio::test]
    async fn test_concurrent_inserts_leave_one_profile() {
        let store = std::sync::Arc::new(InMemoryProfileStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(&doc(&format!("p{i}"))).await })
            })
            .collect();
        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap().is_some() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
    }
}
