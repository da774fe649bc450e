/// What `add_node` does with an id that is already on the ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateIdPolicy {
    /// Insert another entry for the same id.
    #[default]
    Allow,
    /// Leave the ring unchanged and report the add as not applied.
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct RingConfig {
    pub initial_capacity: usize,
    pub duplicate_ids: DuplicateIdPolicy,
}

impl RingConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_duplicate_ids(mut self, duplicate_ids: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = duplicate_ids;
        self
    }
}
