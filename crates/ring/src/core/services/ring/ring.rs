use std::{fmt, sync::Arc};

use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};
use tracing::{debug, trace};

use crate::core::{
    domain::{
        models::{DuplicateIdPolicy, Node, RingConfig, RingError, RingResult},
        services::ConsistentHasherService,
    },
    services::{
        checksum::checksum,
        ring::search::{insert_position, owner_index, position_of},
    },
};

/// Nodes sorted ascending by hash behind a reader/writer lock.
///
/// Lookups share the read lock; `add_node` and `remove_node` take the write
/// lock, so the sequence is sorted whenever a reader can see it.
pub struct Ring {
    nodes: RwLock<Vec<Node>>,
    config: RingConfig,
}

impl Ring {
    pub fn new() -> Self {
        Self::with_config(RingConfig::default())
    }

    pub fn with_config(config: RingConfig) -> Self {
        Self {
            nodes: RwLock::new(Vec::with_capacity(config.initial_capacity)),
            config,
        }
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Places `id` on the ring at its sorted position.
    ///
    /// Returns `false` only when the ring rejects duplicate ids and `id` is
    /// already present; the ring is left unchanged in that case.
    pub fn add_node(&self, id: &str) -> bool {
        let node = Node::new(id);
        let hash = node.hash();

        let mut nodes = self.nodes.write();

        if self.config.duplicate_ids == DuplicateIdPolicy::Reject
            && position_of(&nodes, id, hash).is_some()
        {
            debug!(node_id = %id, hash, "duplicate node id rejected");
            return false;
        }

        let i = insert_position(&nodes, hash);
        nodes.insert(i, node);

        debug!(node_id = %id, hash, size = nodes.len(), "added node to ring");
        true
    }

    pub fn remove_node(&self, id: &str) -> RingResult<()> {
        let hash = checksum(id);

        let mut nodes = self.nodes.write();

        let Some(i) = position_of(&nodes, id, hash) else {
            debug!(node_id = %id, hash, "node to remove not found");
            return Err(RingError::NodeNotFound(id.to_string()));
        };

        nodes.remove(i);

        debug!(node_id = %id, hash, size = nodes.len(), "removed node from ring");
        Ok(())
    }

    /// Id of the node owning `key`: the first node at or after the key's
    /// hash, or the lowest-hash node when the key hashes past every node.
    pub fn get(&self, key: &str) -> RingResult<String> {
        let hash = checksum(key);
        let owner = self.get_by_hash(hash)?;

        trace!(%key, hash, %owner, "resolved key");
        Ok(owner)
    }

    pub fn get_by_hash(&self, hash: u32) -> RingResult<String> {
        let nodes = self.nodes.read();

        owner_index(&nodes, hash)
            .map(|i| nodes[i].id().to_string())
            .ok_or(RingError::EmptyRing)
    }

    pub fn contains(&self, id: &str) -> bool {
        position_of(&self.nodes.read(), id, checksum(id)).is_some()
    }

    pub fn len(&self) -> usize {
        self.nodes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.read().is_empty()
    }

    /// Read-only view of the sorted nodes. Holds the read lock until dropped,
    /// so keep it short-lived; writers block while it is alive.
    pub fn nodes(&self) -> MappedRwLockReadGuard<'_, [Node]> {
        RwLockReadGuard::map(self.nodes.read(), |nodes| nodes.as_slice())
    }

    /// Owned copy of the sorted nodes.
    pub fn snapshot(&self) -> Vec<Node> {
        self.nodes.read().clone()
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.nodes.read();

        f.debug_struct("Ring")
            .field("len", &nodes.len())
            .field("nodes", &nodes.iter().map(Node::id).collect::<Vec<_>>())
            .finish()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Ring {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut ring = Ring::new();
        ring.extend(iter);
        ring
    }
}

impl<S: AsRef<str>> Extend<S> for Ring {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for id in iter {
            self.add_node(id.as_ref());
        }
    }
}

impl ConsistentHasherService for Ring {
    fn create_hash(&self, key: &str) -> u32 {
        checksum(key)
    }

    fn add_node(&self, node_id: &str) -> bool {
        Ring::add_node(self, node_id)
    }

    fn remove_node(&self, node_id: &str) -> RingResult<()> {
        Ring::remove_node(self, node_id)
    }

    fn node_exists(&self, node_id: &str) -> bool {
        self.contains(node_id)
    }

    fn get_node_id(&self, key: &str) -> RingResult<String> {
        self.get(key)
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}
