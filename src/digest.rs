use std::io;

/// Size in bytes of a 64-bit digest.
pub const DIGEST_SIZE: usize = 8;

/// Fixed-size 64-bit digest contract, the shape generic hash consumers expect.
///
/// Writes go through the [`io::Write`] supertrait. Implementations over a fixed
/// input may refuse them.
pub trait Hash64: io::Write {
    /// Current digest. Does not change any state.
    fn sum64(&self) -> u64;

    /// Append the big-endian digest to `prefix` and return the result.
    fn sum(&self, mut prefix: Vec<u8>) -> Vec<u8> {
        prefix.extend_from_slice(&self.sum64().to_be_bytes());
        prefix
    }

    /// Number of bytes [`Hash64::sum`] appends.
    fn size(&self) -> usize {
        DIGEST_SIZE
    }

    /// In buzhash a block size has no meaning; reported as 1.
    fn block_size(&self) -> usize {
        1
    }

    fn reset(&mut self);
}
