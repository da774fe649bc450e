use thiserror::Error;

pub type RingResult<T> = Result<T, RingError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Ring has no nodes")]
    EmptyRing,
}
