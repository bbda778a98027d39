//! LRU List Module
//!
//! Recency ordering for the cache, kept as a doubly-linked list whose nodes
//! live in an arena and link to each other by slot index.

// == Node Handle ==
/// Opaque handle to a node in an [`LruList`].
///
/// Stays valid until the node is removed; slots are recycled afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    key: String,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU List ==
/// Tracks access order for LRU eviction.
///
/// - Head = most recently used
/// - Tail = least recently used (eviction candidate)
#[derive(Debug, Default)]
pub struct LruList {
    /// Node arena; `None` marks a free slot
    nodes: Vec<Option<Node>>,
    /// Free slot indices available for reuse
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl LruList {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn alloc(&mut self, node: Node) -> usize {
        if let Some(idx) = self.free.pop() {
            self.nodes[idx] = Some(node);
            idx
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    // == Push Front ==
    /// Inserts a key as the most recently used entry.
    pub fn push_front(&mut self, key: String) -> NodeId {
        let idx = self.alloc(Node {
            key,
            prev: None,
            next: self.head,
        });
        self.attach_front(idx);
        self.len += 1;
        NodeId(idx)
    }

    // == Move To Front ==
    /// Marks a node as most recently used.
    pub fn move_to_front(&mut self, id: NodeId) {
        if self.head == Some(id.0) {
            return;
        }
        if self.unlink(id.0) {
            let head = self.head;
            if let Some(node) = self.node_mut(id.0) {
                node.prev = None;
                node.next = head;
            }
            self.attach_front(id.0);
        }
    }

    // == Remove ==
    /// Removes a node, returning its key.
    pub fn remove(&mut self, id: NodeId) -> Option<String> {
        if !self.unlink(id.0) {
            return None;
        }
        let node = self.nodes.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.key)
    }

    // == Back ==
    /// Returns the least recently used key without removing it.
    pub fn back(&self) -> Option<&str> {
        let tail = self.tail?;
        self.nodes[tail].as_ref().map(|node| node.key.as_str())
    }

    // == Pop Back ==
    /// Removes and returns the least recently used key.
    pub fn pop_back(&mut self) -> Option<String> {
        let tail = self.tail?;
        self.remove(NodeId(tail))
    }

    // == Clear ==
    /// Drops every node and resets the arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iter ==
    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Links an already-allocated node in at the head. The node's `next`
    /// must already point at the current head.
    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;
        match old_head.and_then(|h| self.node_mut(h)) {
            Some(node) => node.prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    /// Splices a live node out of the chain, leaving its slot occupied.
    /// Returns false for a stale or freed handle.
    fn unlink(&mut self, idx: usize) -> bool {
        let (prev, next) = match self.nodes.get(idx).and_then(Option::as_ref) {
            Some(node) => (node.prev, node.next),
            None => return false,
        };

        match prev.and_then(|p| self.node_mut(p)) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.node_mut(n)) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }
        true
    }
}

// == Iterator ==
/// Head-to-tail iterator over the keys of an [`LruList`].
pub struct Iter<'a> {
    list: &'a LruList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.cursor?)?.as_ref()?;
        self.cursor = node.next;
        Some(node.key.as_str())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(lru: &LruList) -> Vec<&str> {
        lru.iter().collect()
    }

    #[test]
    fn test_lru_new() {
        let lru = LruList::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.back(), None);
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut lru = LruList::with_capacity(3);

        lru.push_front("key1".to_string());
        lru.push_front("key2".to_string());
        lru.push_front("key3".to_string());

        assert_eq!(lru.len(), 3);
        assert_eq!(keys(&lru), vec!["key3", "key2", "key1"]);
        assert_eq!(lru.back(), Some("key1"));
    }

    #[test]
    fn test_move_to_front() {
        let mut lru = LruList::new();

        let a = lru.push_front("a".to_string());
        lru.push_front("b".to_string());
        lru.push_front("c".to_string());

        lru.move_to_front(a);

        assert_eq!(keys(&lru), vec!["a", "c", "b"]);
        assert_eq!(lru.back(), Some("b"));
    }

    #[test]
    fn test_move_middle_to_front_keeps_back_links() {
        let mut lru = LruList::new();

        lru.push_front("a".to_string());
        let b = lru.push_front("b".to_string());
        lru.push_front("c".to_string());

        lru.move_to_front(b);
        lru.move_to_front(b);

        // Drain from the tail to exercise prev links
        assert_eq!(lru.pop_back(), Some("a".to_string()));
        assert_eq!(lru.pop_back(), Some("c".to_string()));
        assert_eq!(lru.pop_back(), Some("b".to_string()));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_remove_middle_and_reuse_slot() {
        let mut lru = LruList::new();

        lru.push_front("a".to_string());
        let b = lru.push_front("b".to_string());
        lru.push_front("c".to_string());

        assert_eq!(lru.remove(b), Some("b".to_string()));
        assert_eq!(lru.remove(b), None, "Stale handle must be rejected");
        assert_eq!(keys(&lru), vec!["c", "a"]);

        let d = lru.push_front("d".to_string());
        assert_eq!(d, b, "Freed slot should be recycled");
        assert_eq!(keys(&lru), vec!["d", "c", "a"]);
        assert_eq!(lru.len(), 3);
    }

    #[test]
    fn test_pop_back_empty() {
        let mut lru = LruList::new();
        assert_eq!(lru.pop_back(), None);
    }

    #[test]
    fn test_single_node_remove_resets_ends() {
        let mut lru = LruList::new();

        let only = lru.push_front("only".to_string());
        lru.remove(only);

        assert!(lru.is_empty());
        assert_eq!(lru.back(), None);
        assert_eq!(lru.iter().count(), 0);

        lru.push_front("next".to_string());
        assert_eq!(lru.back(), Some("next"));
    }

    #[test]
    fn test_clear() {
        let mut lru = LruList::new();
        lru.push_front("a".to_string());
        lru.push_front("b".to_string());

        lru.clear();

        assert!(lru.is_empty());
        assert_eq!(lru.back(), None);
        assert_eq!(keys(&lru), Vec::<&str>::new());
    }
}
