use crate::core::domain::models::Node;

/// First index whose hash is not less than `hash`.
#[inline]
pub(crate) fn search(nodes: &[Node], hash: u32) -> usize {
    nodes.partition_point(|node| node.hash() < hash)
}

/// Index of the node owning `hash`, wrapping past the highest hash to 0.
pub(crate) fn owner_index(nodes: &[Node], hash: u32) -> Option<usize> {
    if nodes.is_empty() {
        return None;
    }

    let i = search(nodes, hash);
    if i >= nodes.len() { Some(0) } else { Some(i) }
}

/// Index of the entry with exactly this `id`, looked up through its hash.
///
/// Colliding ids share a hash, so the whole run of entries at `hash` is
/// checked rather than only the first one.
pub(crate) fn position_of(nodes: &[Node], id: &str, hash: u32) -> Option<usize> {
    let start = search(nodes, hash);

    nodes[start..]
        .iter()
        .take_while(|node| node.hash() == hash)
        .position(|node| node.id() == id)
        .map(|offset| start + offset)
}

/// Slot after every entry with hash `<= hash`; keeps equal hashes in insertion order.
#[inline]
pub(crate) fn insert_position(nodes: &[Node], hash: u32) -> usize {
    nodes.partition_point(|node| node.hash() <= hash)
}
