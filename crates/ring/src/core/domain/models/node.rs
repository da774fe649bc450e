use std::{fmt, sync::Arc};

use crate::core::services::checksum::checksum;

/// A named endpoint with a fixed position on the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: Arc<str>,
    hash: u32,
}

impl Node {
    #[inline]
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: Arc::<str>::from(id),
            hash: checksum(id),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn hash(&self) -> u32 {
        self.hash
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:08x}", self.id, self.hash)
    }
}
