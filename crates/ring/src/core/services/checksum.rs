/// CRC-32 (IEEE) of `input`. Node ids and keys share this hash space.
#[inline]
pub fn checksum(input: &str) -> u32 {
    crc32fast::hash(input.as_bytes())
}
