//! Frequency (monobit) test: chi-square of the zero/one counts against an even split.

use crate::error::Error;

/// Counts of each digit in a bit sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitCounts {
    pub zeros: usize,
    pub ones: usize,
}

impl BitCounts {
    /// Tallies `sequence`, rejecting anything but `'0'` and `'1'`. Surrounding whitespace is
    /// ignored. An invalid character's position is its char offset in `sequence` itself.
    pub fn tally(sequence: &str) -> Result<Self, Error> {
        let body = sequence.trim_start();
        let skipped = sequence[..sequence.len() - body.len()].chars().count();

        let mut counts = Self::default();
        for (index, found) in body.trim_end().chars().enumerate() {
            match found {
                '0' => counts.zeros += 1,
                '1' => counts.ones += 1,
                _ => {
                    let position = skipped + index;
                    return Err(Error::InvalidBit { position, found });
                }
            }
        }
        if counts.total() == 0 {
            return Err(Error::EmptySequence);
        }
        Ok(counts)
    }

    pub fn total(&self) -> usize {
        self.zeros + self.ones
    }

    pub fn chi_square(&self) -> f64 {
        let expected = self.total() as f64 / 2.0;
        let deviation = |observed: usize| (observed as f64 - expected).powi(2) / expected;
        deviation(self.zeros) + deviation(self.ones)
    }
}

/// Returns the chi-square statistic (one degree of freedom) of `sequence` against an even
/// split of zeros and ones.
///
/// # Example
/// ```
/// # use bitgen::frequency_bit_test;
/// assert_eq!(frequency_bit_test("0101").unwrap(), 0.0);
/// assert_eq!(frequency_bit_test("1111").unwrap(), 4.0);
/// ```
pub fn frequency_bit_test(sequence: &str) -> Result<f64, Error> {
    BitCounts::tally(sequence).map(|counts| counts.chi_square())
}
