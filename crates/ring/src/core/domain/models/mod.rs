pub mod config;
pub mod error;
pub mod node;

pub use config::DuplicateIdPolicy;
pub use config::RingConfig;
pub use error::RingError;
pub use error::RingResult;
pub use node::Node;
