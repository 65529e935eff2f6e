//! Bulk rolling: hashes of every window at a fixed stride in one tight loop.
//!
//! Two backends implement the same algorithm and must agree bit for bit:
//! [`Portable`] uses safe slice iteration, [`Raw`] walks the buffer and the
//! table through raw pointers after validating the whole range once.
//! The `accelerated` feature picks [`Raw`] as the [`DefaultRoller`].

use crate::rolling_hash::{roll_byte, rotation};
use crate::table::TABLE;

/// Backend for [`crate::RollingHasher::bulk_roll`].
pub trait BulkRoller {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Hashes of the windows starting at `start`, `start + stride`, ... that fit
    /// in `buf`, where `hash` is the hash of the window at `start`.
    ///
    /// Returns an empty vector when `stride` is 0 or the first window does not fit.
    fn bulk_roll(
        &self,
        buf: &[u8],
        start: usize,
        window_size: usize,
        stride: usize,
        hash: u64,
    ) -> Vec<u64>;
}

#[cfg(feature = "accelerated")]
pub type DefaultRoller = Raw;
#[cfg(not(feature = "accelerated"))]
pub type DefaultRoller = Portable;

/// Number of windows a bulk roll emits.
pub fn window_count(len: usize, start: usize, window_size: usize, stride: usize) -> usize {
    if stride == 0 {
        return 0;
    }
    match len.checked_sub(window_size).and_then(|last| last.checked_sub(start)) {
        Some(room) => room / stride + 1,
        None => 0,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

impl BulkRoller for Portable {
    fn name(&self) -> &'static str {
        "portable"
    }

    fn bulk_roll(
        &self,
        buf: &[u8],
        start: usize,
        window_size: usize,
        stride: usize,
        hash: u64,
    ) -> Vec<u64> {
        let count = window_count(buf.len(), start, window_size, stride);
        let mut hashes = Vec::with_capacity(count);
        if count == 0 {
            return hashes;
        }

        let window_rot = rotation(window_size);
        let mut pos = start;
        let mut hash = hash;
        loop {
            hashes.push(hash);
            if stride > buf.len() - window_size - pos {
                break;
            }
            let leaving = &buf[pos..pos + stride];
            let entering = &buf[pos + window_size..pos + window_size + stride];
            for (&out, &inc) in leaving.iter().zip(entering) {
                hash = roll_byte(hash, out, inc, window_rot);
            }
            pos += stride;
        }
        hashes
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl BulkRoller for Raw {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn bulk_roll(
        &self,
        buf: &[u8],
        start: usize,
        window_size: usize,
        stride: usize,
        hash: u64,
    ) -> Vec<u64> {
        let count = window_count(buf.len(), start, window_size, stride);
        let mut hashes: Vec<u64> = Vec::with_capacity(count);
        if count == 0 {
            return hashes;
        }

        // Every byte read below lies in buf[start..start + (count - 1) * stride + window_size],
        // which window_count guarantees is inside buf.
        let window_rot = rotation(window_size);
        let table = TABLE.as_ptr();
        let out_ptr = hashes.as_mut_ptr();
        let mut leaving = buf[start..].as_ptr();
        let mut hash = hash;

        // SAFETY: `leaving` stays within the range above, `leaving + window_size`
        // never passes its last byte, table indices are u8, and exactly `count`
        // slots of the reserved capacity are written before `set_len`.
        unsafe {
            for i in 0..count {
                out_ptr.add(i).write(hash);
                if i + 1 == count {
                    break;
                }
                for _ in 0..stride {
                    let out = *table.add(*leaving as usize);
                    let inc = *table.add(*leaving.add(window_size) as usize);
                    hash = hash.rotate_left(1) ^ out.rotate_left(window_rot) ^ inc;
                    leaving = leaving.add(1);
                }
            }
            hashes.set_len(count);
        }
        hashes
    }
}
