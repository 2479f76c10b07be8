//! # Query cache: per-key generations with invalidation broadcast
//!
//! [`QueryCache`] does not hold query data itself; the views own their data.
//! What it tracks is *freshness*: every key has a generation counter that starts
//! at 0, and [`invalidate`](QueryCache::invalidate) bumps it and broadcasts an
//! [`Invalidation`] to every subscriber. A view that displays a key subscribes
//! once and refetches on each event for its key.
//!
//! Clones share the same generation table and broadcast channel, so the cache
//! can be handed to both the writer (the create path) and the readers (the list
//! view) without wrapping it again.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use crate::models::{Invalidation, QueryKey};

/// Events buffered per subscriber before a slow one starts lagging.
const EVENT_CAPACITY: usize = 16;

#[derive(Clone, Debug)]
pub struct QueryCache {
    generations: Arc<Mutex<HashMap<QueryKey, u64>>>,
    events: broadcast::Sender<Invalidation>,
}

impl Default for QueryCache {
    fn default() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            generations: Arc::default(),
            events,
        }
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation of `key`; 0 if it was never invalidated.
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.generations
            .lock()
            .unwrap()
            .get(key)
            .copied()
            .unwrap_or(0)
    }

    /// Mark `key` stale and notify subscribers.
    pub fn invalidate(&self, key: &QueryKey) -> Invalidation {
        let generation = {
            let mut generations = self.generations.lock().unwrap();
            let entry = generations.entry(key.clone()).or_insert(0);
            *entry += 1;
            *entry
        };

        let event = Invalidation {
            key: key.clone(),
            generation,
        };
        // No receivers is fine: nothing is displaying the key right now.
        let _ = self.events.send(event.clone());
        event
    }

    /// Receive every invalidation published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Invalidation> {
        self.events.subscribe()
    }

    /// Whether two handles share the same underlying cache.
    pub fn same_cache(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.generations, &other.generations)
    }
}
