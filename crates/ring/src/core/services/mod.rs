pub mod checksum;
pub mod ring;
