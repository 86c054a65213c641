use std::io;

use bitgen::{generate, init_logging, SystemClock};
use tracing::warn;

fn main() {
    init_logging("warn");
    let mut output = io::stdout().lock();
    if let Err(e) = generate(&SystemClock, &mut output) {
        warn!(error = %e, "Failed to write bits");
    }
}
