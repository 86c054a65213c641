use std::cell::Cell;

use crate::clock::Clock;

/// The increment used to update the state of the RNG. This value was selected so that it is
/// coprime to 2^64, and `INCREMENT / 2^64` is approximately `phi - 1`, where `phi` is the
/// golden ratio. This produces a low discrepancy sequence with a period of 2^64.
pub(crate) const INCREMENT: u64 = 0x9E3779B97F4A7FFF;

// These constants, like the `INCREMENT` constant, are coprime to 2^64.
const ALPHA: u128 = 0x11F9ADBB8F8DA6FFF;
const BETA: u128 = 0x1E3DF208C6781EFFF;

#[derive(Debug)]
/// A locally owned random number generator. Draws take `&self`, so the emitter can hold a
/// shared reference while writing.
///
/// The implementation is based on hashing the Weyl sequence with `wyhash`, adapted from
/// https://github.com/lemire/testingRNG/blob/master/source/wyhash.h.
pub struct WeylRng {
    /// The current position in the Weyl sequence.
    pub(crate) state: Cell<u64>,
}

impl WeylRng {
    /// Fills the slice `data` with random bytes.
    pub fn bytes(&self, data: &mut [u8]) {
        const CHUNK_SIZE: usize = std::mem::size_of::<u64>();
        let mut chunks = data.chunks_exact_mut(CHUNK_SIZE);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.u64().to_ne_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.u64().to_ne_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }

    /// Seeds a new RNG with the current time of `clock`, in whole seconds.
    ///
    /// Two generators created within the same second yield the same sequence.
    ///
    /// # Example
    /// ```
    /// # use bitgen::{FixedClock, WeylRng};
    /// let clock = FixedClock(1_700_000_000);
    /// let a = WeylRng::from_clock(&clock);
    /// let b = WeylRng::from_clock(&clock);
    /// assert_eq!(a.random::<u64>(), b.random::<u64>());
    /// ```
    pub fn from_clock<C>(clock: &C) -> Self
    where
        C: Clock + ?Sized,
    {
        Self::with_seed(clock.now_epoch_secs())
    }

    /// Returns a random value of type `T`. For integers, the value is in the range `[T::MIN,
    /// T::MAX]`.
    ///
    /// # Example
    /// ```
    /// # use bitgen::WeylRng;
    /// let rng = WeylRng::with_seed(42);
    /// let value: u32 = rng.random();
    /// println!("{value}");
    /// ```
    pub fn random<T>(&self) -> T
    where
        T: Random<Self>,
    {
        T::random(self)
    }

    /// Creates an RNG starting at `seed`.
    pub fn with_seed(seed: u64) -> Self {
        let state = Cell::new(seed);
        Self { state }
    }

    /// Returns the next `u64` value from the pseudorandom sequence.
    pub(crate) fn u64(&self) -> u64 {
        // Read the current state and increment it
        let old_state = self.state.get();
        self.state.set(old_state.wrapping_add(INCREMENT));

        // Hash the old state to produce the next value
        wyhash(old_state)
    }
}

#[inline]
pub(crate) fn wyhash(value: u64) -> u64 {
    let mut tmp = (value as u128).wrapping_mul(ALPHA);
    tmp ^= tmp >> 64;
    tmp = tmp.wrapping_mul(BETA);
    ((tmp >> 64) ^ tmp) as _
}

/// A generator of values of type `T`.
pub trait Generator<T> {
    /// Generates a value of type `T`.
    fn generate(&self) -> T;
}

impl Generator<u64> for WeylRng {
    fn generate(&self) -> u64 {
        self.u64()
    }
}

pub trait Random<G> {
    fn random(generator: &G) -> Self;
}

impl<G> Random<G> for bool
where
    G: Generator<u64>,
{
    fn random(generator: &G) -> Self {
        generator.generate() % 2 == 1
    }
}

macro_rules! impl_int_random {
    ($($int:ty),+) => {
        $(
            impl<G> Random<G> for $int
            where
                G: Generator<u64>,
            {
                fn random(generator: &G) -> Self {
                    generator.generate() as _
                }
            }
        )+
    };
}

impl_int_random!(u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn same_seed_same_sequence() {
        let a = WeylRng::with_seed(7);
        let b = WeylRng::with_seed(7);
        for _ in 0..64 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn state_advances_by_increment() {
        let rng = WeylRng::with_seed(u64::MAX);
        let value = rng.u64();
        assert_eq!(value, wyhash(u64::MAX));
        assert_eq!(rng.state.get(), u64::MAX.wrapping_add(INCREMENT));
    }

    #[test]
    fn from_clock_starts_at_clock_seconds() {
        let rng = WeylRng::from_clock(&FixedClock(1_700_000_123));
        assert_eq!(rng.state.get(), 1_700_000_123);
    }

    #[test]
    fn bytes_fills_partial_tail() {
        let rng = WeylRng::with_seed(3);
        let mut buffer = [0u8; 13];
        rng.bytes(&mut buffer);

        let check = WeylRng::with_seed(3);
        assert_eq!(buffer[..8], check.u64().to_ne_bytes());
        assert_eq!(buffer[8..], check.u64().to_ne_bytes()[..5]);
    }

    #[test]
    fn bool_is_parity_of_draw() {
        let rng = WeylRng::with_seed(11);
        let check = WeylRng::with_seed(11);
        for _ in 0..32 {
            assert_eq!(rng.random::<bool>(), check.u64() % 2 == 1);
        }
    }
}
