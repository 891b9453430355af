//! LRU Tracker Module
//!
//! Recency ordering for eviction decisions, O(1) per operation.

use std::collections::HashMap;

// == Node ==
/// A slot in the recency list. Slots are slab-allocated in `nodes` and
/// recycled through `free` so touches never reallocate in steady state.
#[derive(Debug)]
struct Node {
    key: String,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction.
///
/// A hash index maps each key to its slot in a doubly linked list:
/// - Head = most recently used
/// - Tail = least recently used
///
/// Every operation (touch, remove, evict) is O(1); correctness of the
/// cache's overhead bound depends on this, so a scan-based container is
/// not an acceptable substitute.
#[derive(Debug, Default)]
pub struct LruTracker {
    nodes: Vec<Node>,
    free: Vec<usize>,
    index: HashMap<String, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// An existing key is unlinked and relinked at the head; a new key is
    /// allocated a slot and linked at the head.
    pub fn touch(&mut self, key: &str) {
        if let Some(&idx) = self.index.get(key) {
            if self.head == Some(idx) {
                return;
            }
            self.unlink(idx);
            self.link_front(idx);
        } else {
            let idx = self.alloc(key.to_string());
            self.index.insert(key.to_string(), idx);
            self.link_front(idx);
        }
    }

    // == Remove ==
    /// Removes a key from the tracker; no-op if absent.
    pub fn remove(&mut self, key: &str) {
        if let Some(idx) = self.index.remove(key) {
            self.unlink(idx);
            self.free.push(idx);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let idx = self.tail?;
        self.unlink(idx);
        self.free.push(idx);
        let key = std::mem::take(&mut self.nodes[idx].key);
        self.index.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.tail.map(|idx| &self.nodes[idx].key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Clear ==
    /// Drops all tracked keys and recycled slots.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    // == Internal: Slot Allocation ==
    fn alloc(&mut self, key: String) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Node {
                    key,
                    prev: None,
                    next: None,
                };
                idx
            }
            None => {
                self.nodes.push(Node {
                    key,
                    prev: None,
                    next: None,
                });
                self.nodes.len() - 1
            }
        }
    }

    // == Internal: List Surgery ==
    /// Detaches a slot from the list, patching neighbours and head/tail.
    fn unlink(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        self.nodes[idx].prev = None;
        self.nodes[idx].next = None;
    }

    /// Attaches a detached slot at the head (most recent).
    fn link_front(&mut self, idx: usize) {
        self.nodes[idx].prev = None;
        self.nodes[idx].next = self.head;

        if let Some(old_head) = self.head {
            self.nodes[old_head].prev = Some(idx);
        }
        self.head = Some(idx);

        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }
}
