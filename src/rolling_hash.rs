//! Cyclic polynomial (buzhash) rolling hash over a fixed buffer.
//!
//! The hash of a window `w` of length `n` is the XOR of `rotl(T[w[i]], n - 1 - i)`.
//! Rotating the whole accumulator left by one bit ages every byte still in the
//! window by one position, so sliding the window forward by a byte is O(1):
//! rotate, XOR out the leaving byte at rotation `n`, XOR in the entering byte.

use std::fmt;
use std::io;

use log::{debug, trace};

use crate::bulk_roll::{BulkRoller, DefaultRoller};
use crate::digest::Hash64;
use crate::error::{Error, Result};
use crate::table::lookup;

/// Hash a buffer in one shot, as if it were a single window spanning all of it.
pub fn hash(buf: &[u8]) -> u64 {
    let n = buf.len();
    buf.iter().enumerate().fold(0u64, |h, (i, &byte)| {
        h ^ lookup(byte).rotate_left(rotation(n - 1 - i))
    })
}

/// Rotation amount for a byte that has `age` newer bytes after it in the window.
#[inline(always)]
pub(crate) fn rotation(age: usize) -> u32 {
    (age % 64) as u32
}

/// Slide the window by one byte: `out` leaves, `inc` enters.
/// `window_rot` is `rotation(window_size)`.
#[inline(always)]
pub(crate) fn roll_byte(hash: u64, out: u8, inc: u8, window_rot: u32) -> u64 {
    hash.rotate_left(1) ^ lookup(out).rotate_left(window_rot) ^ lookup(inc)
}

/// A hash that can be rolled forward over its input.
pub trait RollingHash: Hash64 {
    /// Advance the window start by `step` bytes and return the new hash.
    ///
    /// Either the whole step is applied or nothing is.
    fn roll(&mut self, step: usize) -> Result<u64>;

    /// Hashes of every window starting at the current position and advancing by
    /// `stride`, for as long as a full window fits. Does not move the window.
    fn bulk_roll(&self, stride: usize) -> Result<Vec<u64>>;

    /// Start offset of the current window.
    fn position(&self) -> usize;
}

/// Rolling hasher over an immutable buffer.
///
/// Also implements [`Hash64`] for interop, but this is NOT a streaming hash:
/// the buffer is handed over in [`RollingHasher::new`] and writes always fail.
#[derive(Clone)]
pub struct RollingHasher<'a> {
    buf: &'a [u8],
    window_size: usize,
    position: usize,
    hash: u64,
}

impl<'a> RollingHasher<'a> {
    /// Create a hasher with its window at the start of `buf`.
    pub fn new(buf: &'a [u8], window_size: usize) -> Result<Self> {
        if window_size > buf.len() {
            return Err(Error::WindowTooLong {
                window_size,
                len: buf.len(),
            });
        }
        debug!(
            "rolling hasher over {} bytes with a {} byte window",
            buf.len(),
            window_size
        );
        Ok(Self {
            buf,
            window_size,
            position: 0,
            hash: hash(&buf[..window_size]),
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes the window can still advance before reaching the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position - self.window_size
    }

    /// Current window contents.
    pub fn window(&self) -> &'a [u8] {
        &self.buf[self.position..self.position + self.window_size]
    }

    pub fn roll(&mut self, step: usize) -> Result<u64> {
        let remaining = self.remaining();
        if step > remaining {
            return Err(Error::IllegalRoll { step, remaining });
        }

        let window_rot = rotation(self.window_size);
        let start = self.position;
        let leaving = &self.buf[start..start + step];
        let entering = &self.buf[start + self.window_size..start + self.window_size + step];

        let mut hash = self.hash;
        for (&out, &inc) in leaving.iter().zip(entering) {
            hash = roll_byte(hash, out, inc, window_rot);
        }

        self.hash = hash;
        self.position += step;
        Ok(hash)
    }

    pub fn bulk_roll(&self, stride: usize) -> Result<Vec<u64>> {
        self.bulk_roll_with(&DefaultRoller::default(), stride)
    }

    /// Bulk roll using a specific backend.
    pub fn bulk_roll_with<R: BulkRoller>(&self, roller: &R, stride: usize) -> Result<Vec<u64>> {
        if stride == 0 {
            return Err(Error::IllegalStride);
        }
        trace!(
            "bulk roll from {} with stride {} using the {} backend",
            self.position,
            stride,
            roller.name()
        );
        Ok(roller.bulk_roll(
            self.buf,
            self.position,
            self.window_size,
            stride,
            self.hash,
        ))
    }

    /// Move the window back to the start of the buffer.
    pub fn reset(&mut self) {
        self.position = 0;
        self.hash = hash(&self.buf[..self.window_size]);
    }

    pub fn sum64(&self) -> u64 {
        self.hash
    }
}

impl fmt::Debug for RollingHasher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollingHasher")
            .field("len", &self.buf.len())
            .field("window_size", &self.window_size)
            .field("position", &self.position)
            .field("hash", &format_args!("{:016x}", self.hash))
            .finish()
    }
}

impl io::Write for RollingHasher<'_> {
    /// Always fails: the input is fixed at construction.
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Unsupported, Error::NotWritable))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Hash64 for RollingHasher<'_> {
    fn sum64(&self) -> u64 {
        self.hash
    }

    fn reset(&mut self) {
        RollingHasher::reset(self)
    }
}

impl RollingHash for RollingHasher<'_> {
    fn roll(&mut self, step: usize) -> Result<u64> {
        RollingHasher::roll(self, step)
    }

    fn bulk_roll(&self, stride: usize) -> Result<Vec<u64>> {
        RollingHasher::bulk_roll(self, stride)
    }

    fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DATA: &[u8] = b"abcdefghijk";

    #[test]
    fn test_hash_empty_is_zero() {
        assert_eq!(hash(&[]), 0);
    }

    #[test]
    fn test_hash_single_byte_is_table_entry() {
        assert_eq!(hash(b"a"), lookup(b'a'));
    }

    #[test]
    fn test_hash_rotates_older_bytes_further() {
        let expected = lookup(b'a').rotate_left(2) ^ lookup(b'b').rotate_left(1) ^ lookup(b'c');
        assert_eq!(hash(b"abc"), expected);
        assert_ne!(hash(b"abc"), hash(b"cba"));
    }

    #[test]
    fn test_new_seeds_first_window() {
        let h = RollingHasher::new(DATA, 4).unwrap();
        assert_eq!(h.sum64(), hash(b"abcd"));
        assert_eq!(h.position(), 0);
        assert_eq!(h.window(), b"abcd");
    }

    #[test]
    fn test_new_window_too_long() {
        let err = RollingHasher::new(b"abc", 4).unwrap_err();
        assert_eq!(err, Error::WindowTooLong { window_size: 4, len: 3 });
    }

    #[test]
    fn test_window_equal_to_buffer() {
        let mut h = RollingHasher::new(DATA, DATA.len()).unwrap();
        assert_eq!(h.sum64(), hash(DATA));
        assert_eq!(h.roll(0).unwrap(), hash(DATA));
        assert!(h.roll(1).is_err());
    }

    #[test]
    fn test_roll_one_matches_fresh_hash() {
        let mut h = RollingHasher::new(DATA, 4).unwrap();
        assert_eq!(h.roll(1).unwrap(), hash(b"bcde"));
        assert_eq!(h.sum64(), hash(b"bcde"));
        assert_eq!(h.position(), 1);
    }

    #[test]
    fn test_roll_to_every_offset() {
        let window = 4;
        let mut h = RollingHasher::new(DATA, window).unwrap();
        let mut rolled = vec![h.sum64()];
        for _ in 1..=DATA.len() - window {
            rolled.push(h.roll(1).unwrap());
        }
        for (i, got) in rolled.iter().enumerate() {
            assert_eq!(*got, hash(&DATA[i..i + window]), "mismatch at offset {}", i);
        }
        assert_eq!(
            h.roll(1).unwrap_err(),
            Error::IllegalRoll { step: 1, remaining: 0 }
        );
    }

    #[test]
    fn test_roll_multi_step() {
        let mut h = RollingHasher::new(DATA, 3).unwrap();
        assert_eq!(h.roll(2).unwrap(), hash(&DATA[2..5]));
        assert_eq!(h.window(), &DATA[2..5]);
        assert_eq!(h.roll(1).unwrap(), hash(&DATA[3..6]));
        assert!(matches!(h.roll(DATA.len()), Err(Error::IllegalRoll { .. })));
    }

    #[test]
    fn test_roll_zero_is_noop() {
        let mut h = RollingHasher::new(DATA, 3).unwrap();
        let before = h.sum64();
        assert_eq!(h.roll(0).unwrap(), before);
        assert_eq!(h.position(), 0);
    }

    #[test]
    fn test_failed_roll_leaves_state_untouched() {
        let mut h = RollingHasher::new(DATA, 4).unwrap();
        h.roll(3).unwrap();
        let (pos, sum) = (h.position(), h.sum64());

        assert!(h.roll(5).is_err());
        assert!(h.roll(usize::MAX).is_err());
        assert_eq!(h.position(), pos);
        assert_eq!(h.sum64(), sum);
    }

    #[test]
    fn test_roll_past_end_from_start() {
        let mut h = RollingHasher::new(DATA, 1).unwrap();
        assert_eq!(
            h.roll(DATA.len()).unwrap_err(),
            Error::IllegalRoll { step: DATA.len(), remaining: DATA.len() - 1 }
        );
    }

    #[test]
    fn test_window_longer_than_word() {
        let data: Vec<u8> = (0..200u32).map(|i| (i * 7 % 251) as u8).collect();
        let window = 70;
        let mut h = RollingHasher::new(&data, window).unwrap();
        for i in 1..=data.len() - window {
            assert_eq!(h.roll(1).unwrap(), hash(&data[i..i + window]));
        }
    }

    #[test]
    fn test_zero_window() {
        let mut h = RollingHasher::new(DATA, 0).unwrap();
        assert_eq!(h.sum64(), 0);
        assert_eq!(h.roll(DATA.len()).unwrap(), 0);
        assert_eq!(h.position(), DATA.len());
        assert_eq!(h.bulk_roll(4).unwrap(), vec![0]);
    }

    #[test]
    fn test_reset() {
        let mut h = RollingHasher::new(DATA, 4).unwrap();
        let original = h.sum64();

        h.roll(2).unwrap();
        assert_ne!(h.sum64(), original);

        h.reset();
        assert_eq!(h.sum64(), original);
        assert_eq!(h.position(), 0);
        assert_eq!(h.roll(1).unwrap(), hash(&DATA[1..5]));

        h.reset();
        h.reset();
        assert_eq!(h.sum64(), original);
    }

    #[test]
    fn test_bulk_roll_stride_one() {
        let h = RollingHasher::new(DATA, 3).unwrap();
        let expected: Vec<u64> = DATA.windows(3).map(hash).collect();
        assert_eq!(h.bulk_roll(1).unwrap(), expected);
        assert_eq!(expected.len(), 9);
    }

    #[test]
    fn test_bulk_roll_stride_two() {
        let data = b"abcdefghijkx";
        let h = RollingHasher::new(data, 3).unwrap();
        let expected: Vec<u64> = (0..=data.len() - 3)
            .step_by(2)
            .map(|i| hash(&data[i..i + 3]))
            .collect();
        assert_eq!(h.bulk_roll(2).unwrap(), expected);
    }

    #[test]
    fn test_bulk_roll_does_not_move_window() {
        let mut h = RollingHasher::new(DATA, 3).unwrap();
        h.roll(2).unwrap();
        let (pos, sum) = (h.position(), h.sum64());

        let hashes = h.bulk_roll(3).unwrap();
        assert_eq!(hashes[0], sum);
        assert_eq!(h.position(), pos);
        assert_eq!(h.sum64(), sum);
    }

    #[test]
    fn test_bulk_roll_zero_stride() {
        let mut h = RollingHasher::new(DATA, 3).unwrap();
        assert_eq!(h.bulk_roll(0).unwrap_err(), Error::IllegalStride);
        h.roll(8).unwrap();
        assert_eq!(h.bulk_roll(0).unwrap_err(), Error::IllegalStride);
    }

    #[test]
    fn test_bulk_roll_at_last_window() {
        let mut h = RollingHasher::new(DATA, 3).unwrap();
        h.roll(8).unwrap();
        assert_eq!(h.bulk_roll(1).unwrap(), vec![hash(b"ijk")]);
        assert_eq!(h.bulk_roll(usize::MAX).unwrap(), vec![hash(b"ijk")]);
    }

    #[test]
    fn test_debug_omits_buffer() {
        let h = RollingHasher::new(DATA, 3).unwrap();
        let dbg = format!("{:?}", h);
        assert!(dbg.contains("len: 11"));
        assert!(!dbg.contains("abc"));
    }

    proptest! {
        #[test]
        fn prop_roll_matches_one_shot(
            data in prop::collection::vec(any::<u8>(), 1..300),
            window in 1usize..80,
        ) {
            prop_assume!(window <= data.len());
            let mut h = RollingHasher::new(&data, window)?;
            prop_assert_eq!(h.sum64(), hash(&data[..window]));
            for i in 1..=data.len() - window {
                prop_assert_eq!(h.roll(1)?, hash(&data[i..i + window]));
            }
            h.reset();
            prop_assert_eq!(h.sum64(), hash(&data[..window]));
        }

        #[test]
        fn prop_bulk_roll_matches_repeated_roll(
            data in prop::collection::vec(any::<u8>(), 1..300),
            window in 1usize..40,
            start in 0usize..50,
            stride in 1usize..20,
        ) {
            prop_assume!(window <= data.len() && start <= data.len() - window);
            let mut h = RollingHasher::new(&data, window)?;
            h.roll(start)?;

            let bulk = h.bulk_roll(stride)?;

            let mut cursor = h.clone();
            let mut expected = vec![cursor.sum64()];
            while let Ok(next) = cursor.roll(stride) {
                expected.push(next);
            }
            prop_assert_eq!(bulk, expected);
            prop_assert_eq!(h.position(), start);
        }
    }
}
