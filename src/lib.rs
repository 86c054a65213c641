//! Prints pseudo-random bits from a generator seeded by the wall clock.
//!
//! ```
//! use bitgen::{generate, SystemClock, BIT_COUNT};
//!
//! let mut output = Vec::new();
//! generate(&SystemClock, &mut output).unwrap();
//! assert_eq!(output.len(), BIT_COUNT);
//! ```

mod clock;
mod emitter;
mod error;
mod frequency;
mod logging;
mod options;
#[cfg(feature = "rand")]
mod rand_support;
mod rng;


pub use clock::{Clock, FixedClock, SystemClock};
pub use emitter::{bit_string, emit_bits, generate, BIT_COUNT};
pub use error::Error;
pub use frequency::{frequency_bit_test, BitCounts};
pub use logging::init_logging;
pub use options::{LabeledSequence, Options, DEFAULT_OPTIONS_PATH};
pub use rng::{Generator, Random, WeylRng};
