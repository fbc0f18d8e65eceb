//! Bounded uniform draws and runtime seed derivation for room generation.

use std::process;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::rand_core::Rng;

/// Uniform integer in `min_value..=max_value`, rejection-sampled so every value is equally likely.
pub(super) fn uniform_inclusive<R: Rng>(rng: &mut R, min_value: u64, max_value: u64) -> u64 {
    debug_assert!(min_value <= max_value);
    let span = max_value - min_value;
    if span == u64::MAX {
        return rng.next_u64();
    }
    let range_size = span + 1;
    let accept_below = u64::MAX - (u64::MAX % range_size);
    loop {
        let value = rng.next_u64();
        if value < accept_below {
            return min_value + value % range_size;
        }
    }
}

pub(super) fn uniform_usize<R: Rng>(rng: &mut R, min_value: usize, max_value: usize) -> usize {
    uniform_inclusive(rng, min_value as u64, max_value as u64) as usize
}

static PROCESS_ENTROPY: OnceLock<u64> = OnceLock::new();
static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Seed for unseeded generators; differs on every call within a process.
pub fn generate_runtime_seed() -> u64 {
    let base = *PROCESS_ENTROPY.get_or_init(process_entropy);
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    mix_seed(base ^ counter.wrapping_mul(0xD6E8_FD9A_5B89_7A4D))
}

fn process_entropy() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    (now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17)
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
