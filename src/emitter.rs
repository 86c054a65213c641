use std::io::{self, Write};

use tracing::debug;

use crate::{clock::Clock, rng::WeylRng};

/// Number of bits written per run.
pub const BIT_COUNT: usize = 128;

#[inline]
fn next_digit(rng: &WeylRng) -> u8 {
    b'0' + (rng.u64() % 2) as u8
}

/// Writes [`BIT_COUNT`] characters, each `'0'` or `'1'`, to `output`. Each character is the
/// parity of a fresh draw from `rng`. No newline is written.
///
/// # Example
/// ```
/// # use bitgen::{emit_bits, WeylRng, BIT_COUNT};
/// let rng = WeylRng::with_seed(5);
/// let mut output = Vec::new();
/// emit_bits(&rng, &mut output).unwrap();
/// assert_eq!(output.len(), BIT_COUNT);
/// assert!(output.iter().all(|&c| c == b'0' || c == b'1'));
/// ```
pub fn emit_bits<W>(rng: &WeylRng, output: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let mut buffer = [0; BIT_COUNT];
    for digit in buffer.iter_mut() {
        *digit = next_digit(rng);
    }
    output.write_all(&buffer)?;
    output.flush()
}

/// Collects the same characters [`emit_bits`] would write.
pub fn bit_string(rng: &WeylRng) -> String {
    (0..BIT_COUNT).map(|_| char::from(next_digit(rng))).collect()
}

/// Seeds a generator from `clock` and emits one run of bits to `output`.
pub fn generate<C, W>(clock: &C, output: &mut W) -> io::Result<()>
where
    C: Clock + ?Sized,
    W: Write + ?Sized,
{
    let rng = WeylRng::from_clock(clock);
    debug!(seed = rng.state.get(), bits = BIT_COUNT, "Seeding generator");
    emit_bits(&rng, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn emits_exactly_128_binary_digits() {
        let rng = WeylRng::with_seed(0);
        let mut output = Vec::new();
        emit_bits(&rng, &mut output).unwrap();
        assert_eq!(output.len(), 128);
        assert!(output.iter().all(|c| matches!(c, b'0' | b'1')));
    }

    #[test]
    fn bit_string_matches_emitted_bytes() {
        let mut output = Vec::new();
        emit_bits(&WeylRng::with_seed(77), &mut output).unwrap();
        let collected = bit_string(&WeylRng::with_seed(77));
        assert_eq!(collected.as_bytes(), &output[..]);
    }

    #[test]
    fn digits_follow_draw_parity() {
        let rng = WeylRng::with_seed(2024);
        let collected = bit_string(&rng);

        let check = WeylRng::with_seed(2024);
        for digit in collected.chars() {
            let expected = if check.random::<u64>() % 2 == 0 { '0' } else { '1' };
            assert_eq!(digit, expected);
        }
    }

    #[test]
    fn same_second_same_output() {
        let clock = FixedClock(1_700_000_000);
        let (mut first, mut second) = (Vec::new(), Vec::new());
        generate(&clock, &mut first).unwrap();
        generate(&clock, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn generate_matches_clock_seeded_rng() {
        let clock = FixedClock(1_650_000_000);
        let mut output = Vec::new();
        generate(&clock, &mut output).unwrap();
        assert_eq!(output, bit_string(&WeylRng::from_clock(&clock)).into_bytes());
    }

    #[test]
    fn different_seconds_differ() {
        let (mut first, mut second) = (Vec::new(), Vec::new());
        generate(&FixedClock(1_700_000_000), &mut first).unwrap();
        generate(&FixedClock(1_700_000_001), &mut second).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn both_digits_appear() {
        let collected = bit_string(&WeylRng::with_seed(31337));
        assert!(collected.contains('0'));
        assert!(collected.contains('1'));
    }
}
