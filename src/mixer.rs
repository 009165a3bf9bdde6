//! Hash builders for primitive keys.
//!
//! [`PhiMixer`] is a fixed, allocation-free bit mixer: the key is multiplied
//! by the 64-bit golden ratio constant and the high half is folded into the
//! low half, so masking the result with a power-of-two table mask still sees
//! bits from the whole key. It is deterministic unless seeded, which makes it
//! useful for reproducible layouts in tests and benchmarks.

use core::hash::BuildHasher;
use core::hash::Hasher;

/// 2^64 / phi, rounded to odd.
const PHI_C64: u64 = 0x9E37_79B9_7F4A_7C15;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hash builder used when none is specified.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hash builder used when none is specified.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// The hash builder used when none is specified.
        pub type DefaultHashBuilder = PhiMixer;
    }
}

#[inline(always)]
fn mix_phi(value: u64) -> u64 {
    let h = value.wrapping_mul(PHI_C64);
    h ^ (h >> 32)
}

/// A [`BuildHasher`] producing [`PhiHasher`]s.
///
/// # Examples
///
/// ```rust
/// use prim_hash::PhiMixer;
/// use prim_hash::PrimitiveHashMap;
///
/// let mut map = PrimitiveHashMap::<i64, &str, _>::with_hasher(PhiMixer::default());
/// map.insert(7, "seven");
/// assert_eq!(map.get(7), Some(&"seven"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhiMixer {
    seed: u64,
}

impl PhiMixer {
    /// Creates a mixer whose output is perturbed by `seed`.
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl BuildHasher for PhiMixer {
    type Hasher = PhiHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        PhiHasher {
            seed: self.seed,
            state: 0,
        }
    }
}

/// The [`Hasher`] behind [`PhiMixer`].
///
/// Integer writes are folded into a single 64-bit word and mixed on
/// [`finish`](Hasher::finish). Arbitrary byte writes are supported but are
/// not the intended use.
#[derive(Debug, Clone, Copy)]
pub struct PhiHasher {
    seed: u64,
    state: u64,
}

impl Hasher for PhiHasher {
    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            self.write_u64(u64::from_le_bytes(buf));
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.state = self.state.rotate_left(5) ^ i;
    }

    #[inline]
    fn write_u128(&mut self, i: u128) {
        self.write_u64(i as u64);
        self.write_u64((i >> 64) as u64);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        mix_phi(self.state ^ self.seed)
    }
}
