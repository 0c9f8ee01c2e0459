//! In-process link store
//!
//! Backed by two `DashMap`s. The key map's entry API provides the atomic
//! insert-if-absent; the target index keeps the first key assigned to each
//! target so lookups by target stay O(1).

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::{InsertOutcome, LinkGateway, ShortLink};
use crate::errors::Result;

#[derive(Default)]
pub struct MemoryStorage {
    links: DashMap<String, ShortLink>,
    by_target: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored records, in no particular order.
    pub fn snapshot(&self) -> Vec<ShortLink> {
        self.links.iter().map(|entry| entry.value().clone()).collect()
    }
}

#[async_trait]
impl LinkGateway for MemoryStorage {
    async fn count_records(&self) -> Result<u64> {
        Ok(self.links.len() as u64)
    }

    async fn find_by_target(&self, target: &str) -> Result<Option<ShortLink>> {
        let Some(code) = self.by_target.get(target).map(|c| c.value().clone()) else {
            return Ok(None);
        };
        Ok(self.links.get(&code).map(|link| link.value().clone()))
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<ShortLink>> {
        Ok(self.links.get(key).map(|link| link.value().clone()))
    }

    async fn insert_if_absent(&self, key: &str, target: &str) -> Result<InsertOutcome> {
        let link = match self.links.entry(key.to_string()) {
            Entry::Occupied(_) => return Ok(InsertOutcome::Conflict),
            Entry::Vacant(slot) => {
                let link = ShortLink::new(key, target);
                slot.insert(link.clone());
                link
            }
        };

        // 同一 target 只记录第一个 key
        self.by_target
            .entry(target.to_string())
            .or_insert_with(|| key.to_string());

        Ok(InsertOutcome::Inserted(link))
    }

    fn backend_name(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = MemoryStorage::new();
        let outcome = store.insert_if_absent("ab", "https://a.example").await.unwrap();
        assert!(matches!(outcome, InsertOutcome::Inserted(ref l) if l.code == "ab"));

        let by_key = store.find_by_key("ab").await.unwrap().unwrap();
        assert_eq!(by_key.target, "https://a.example");

        let by_target = store.find_by_target("https://a.example").await.unwrap().unwrap();
        assert_eq!(by_target.code, "ab");
        assert_eq!(store.count_records().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_conflict_keeps_original() {
        let store = MemoryStorage::new();
        store.insert_if_absent("ab", "https://a.example").await.unwrap();

        let outcome = store.insert_if_absent("ab", "https://b.example").await.unwrap();
        assert_eq!(outcome, InsertOutcome::Conflict);

        let link = store.find_by_key("ab").await.unwrap().unwrap();
        assert_eq!(link.target, "https://a.example");
        assert!(store.find_by_target("https://b.example").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_target_index_keeps_first_key() {
        let store = MemoryStorage::new();
        store.insert_if_absent("ab", "https://a.example").await.unwrap();
        store.insert_if_absent("abc", "https://a.example").await.unwrap();

        let link = store.find_by_target("https://a.example").await.unwrap().unwrap();
        assert_eq!(link.code, "ab");
        assert_eq!(store.count_records().await.unwrap(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_single_winner() {
        let store = Arc::new(MemoryStorage::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .insert_if_absent("same", &format!("https://{}.example", i))
                    .await
                    .unwrap()
            }));
        }

        let mut inserted = 0;
        for handle in handles {
            if let InsertOutcome::Inserted(_) = handle.await.unwrap() {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
        assert_eq!(store.snapshot().len(), 1);
    }
}
