pub mod ring;
pub(crate) mod search;

pub use ring::Ring;
