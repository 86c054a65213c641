use std::cell::Cell;

use rand::{RngCore, SeedableRng};

use crate::WeylRng;

impl RngCore for WeylRng {
    fn next_u32(&mut self) -> u32 {
        (self.u64() >> 32) as _
    }

    fn next_u64(&mut self) -> u64 {
        self.u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for WeylRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let seed = u64::from_le_bytes(seed);
        let state = Cell::new(seed);
        WeylRng { state }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::with_seed(state)
    }
}
