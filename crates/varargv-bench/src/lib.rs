//! Benchmark workloads for the varargv argument buffer.
//!
//! Provides pre-built argument runs and buffers for benchmarking:
//!
//! - [`arg_run`]: a run of `n` distinct values
//! - [`filled_buffer`]: a buffer already retaining `n` values
//! - [`insert_indices`]: deterministic signed insertion indices via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use varargv::ArgBuffer;

/// Build a run of `n` distinct values, `0..n`.
pub fn arg_run(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

/// Build a buffer retaining `n` values.
pub fn filled_buffer(n: usize) -> ArgBuffer<u64> {
    let mut argv = ArgBuffer::new();
    argv.set(0, arg_run(n))
        .expect("default capacity holds benchmark runs");
    argv
}

/// Generate `n` deterministic signed insertion indices for a buffer of
/// length `len`.
///
/// Mixes head, tail, and interior positions from both ends using a simple
/// hash of the seed.
pub fn insert_indices(len: usize, n: usize, seed: u64) -> Vec<i64> {
    let span = len as u64 + 2;
    (0..n as u64)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            let magnitude = ((h >> 33) % span) as i64;
            if h & 1 == 0 {
                magnitude
            } else {
                -magnitude
            }
        })
        .collect()
}
