//! Bounded, thread-safe memoization of reference lookups
//!
//! Keyed by the exact topic string. Owned by the finder instance
//! rather than being process-global, so tests can inject a fresh or
//! pre-populated cache. The capacity bound is the only guarantee;
//! eviction picks an arbitrary entry.

use crate::models::ReferenceArticle;
use dashmap::DashMap;
use std::sync::Arc;

/// Default number of memoized topics.
pub const DEFAULT_CAPACITY: usize = 128;

/// Thread-safe topic → reference-list cache.
#[derive(Clone)]
pub struct LookupCache {
    entries: Arc<DashMap<String, Arc<Vec<ReferenceArticle>>>>,
    capacity: usize,
}

impl LookupCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Get the memoized references for an exact topic string.
    pub fn get(&self, topic: &str) -> Option<Arc<Vec<ReferenceArticle>>> {
        self.entries.get(topic).map(|r| Arc::clone(&r))
    }

    /// Insert a resolved topic, evicting an arbitrary entry when full.
    pub fn insert(&self, topic: &str, references: Vec<ReferenceArticle>) {
        if !self.entries.contains_key(topic) && self.entries.len() >= self.capacity {
            // Bind first: iter() holds a shard guard, and removing while
            // it lives would deadlock.
            let victim = self.entries.iter().next().map(|e| e.key().clone());
            if let Some(victim) = victim {
                self.entries.remove(&victim);
            }
        }
        self.entries
            .insert(topic.to_string(), Arc::new(references));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Viewpoint;

    fn article(title: &str) -> ReferenceArticle {
        ReferenceArticle {
            title: title.to_string(),
            source: "test".to_string(),
            summary: String::new(),
            link: String::new(),
            viewpoint: Viewpoint::Mainstream,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let cache = LookupCache::new(4);
        assert!(cache.get("topic").is_none());
        cache.insert("topic", vec![article("a")]);
        let hit = cache.get("topic").expect("cached entry");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].title, "a");
    }

    #[test]
    fn test_capacity_is_bounded() {
        let cache = LookupCache::new(3);
        for i in 0..10 {
            cache.insert(&format!("topic-{i}"), vec![]);
        }
        assert!(cache.len() <= 3);
    }

    #[test]
    fn test_reinserting_existing_key_does_not_evict() {
        let cache = LookupCache::new(2);
        cache.insert("a", vec![]);
        cache.insert("b", vec![]);
        cache.insert("a", vec![article("updated")]);
        assert_eq!(cache.len(), 2);
        assert!(cache.get("b").is_some());
    }

    #[test]
    fn test_keys_are_exact_strings() {
        let cache = LookupCache::new(4);
        cache.insert("Topic", vec![article("a")]);
        assert!(cache.get("topic").is_none());
    }
}
