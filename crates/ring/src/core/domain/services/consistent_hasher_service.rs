use crate::core::domain::models::RingResult;

pub trait ConsistentHasherService: Send + Sync {
    fn create_hash(&self, key: &str) -> u32;

    fn add_node(&self, node_id: &str) -> bool;

    fn remove_node(&self, node_id: &str) -> RingResult<()>;

    fn node_exists(&self, node_id: &str) -> bool;

    fn get_node_id(&self, key: &str) -> RingResult<String>;

    fn node_count(&self) -> usize;
}
