//! # Coercion Benchmark Harness
//!
//! Purpose: Provide a dependency-free, repeatable benchmark driver for the
//! reply coercions so baseline throughput can be compared over time.
//!
//! ## Design Principles
//! 1. **Deterministic Workload**: Use a fixed PRNG seed for stable comparisons.
//! 2. **Allocation Control**: Pre-build replies so setup costs stay off the hot path.
//! 3. **Realistic Shapes**: Integers and floats arrive as bulk text, arrays
//!    mix bulk strings with nil elements, as a RESP2 server would send them.
//!
//! Usage: `bench_reply [op_count] [array_len]`

use std::env;
use std::hint::black_box;
use std::time::{Duration, Instant};

use hkv_reply::{Reply, ReplyError, ReplyResult};

const DEFAULT_OP_COUNT: usize = 1_000_000;
const DEFAULT_ARRAY_LEN: usize = 16;
const REPLY_POOL: usize = 1 << 10;

struct BenchConfig {
    op_count: usize,
    array_len: usize,
}

impl BenchConfig {
    fn from_args() -> Self {
        let mut args = env::args().skip(1);
        BenchConfig {
            op_count: parse_usize(args.next(), DEFAULT_OP_COUNT),
            array_len: parse_usize(args.next(), DEFAULT_ARRAY_LEN),
        }
    }
}

fn parse_usize(value: Option<String>, fallback: usize) -> usize {
    value.and_then(|raw| raw.parse().ok()).unwrap_or(fallback)
}

/// Tiny deterministic PRNG used to avoid external dependencies.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    #[inline]
    fn next_index(&mut self, mask: usize) -> usize {
        (self.next_u64() as usize) & mask
    }
}

fn build_integers(rng: &mut XorShift64) -> Vec<Reply> {
    (0..REPLY_POOL)
        .map(|_| Reply::bulk((rng.next_u64() as i64).to_string()))
        .collect()
}

fn build_floats(rng: &mut XorShift64) -> Vec<Reply> {
    (0..REPLY_POOL)
        .map(|_| {
            let value = (rng.next_u64() >> 11) as f64 / (1u64 << 20) as f64;
            Reply::bulk(format!("{value:e}"))
        })
        .collect()
}

fn build_arrays(rng: &mut XorShift64, len: usize) -> Vec<Reply> {
    (0..REPLY_POOL)
        .map(|_| {
            let items = (0..len)
                .map(|_| {
                    let word = rng.next_u64();
                    // Roughly one element in eight is missing.
                    if word & 7 == 0 {
                        Reply::Nil
                    } else {
                        Reply::bulk(format!("member:{word:x}"))
                    }
                })
                .collect();
            Reply::Array(items)
        })
        .collect()
}

fn report(label: &str, ops: usize, elapsed: Duration) {
    let secs = elapsed.as_secs_f64();
    let ops_per_sec = (ops as f64) / secs;
    let nanos_per_op = (secs * 1e9) / (ops as f64);
    println!("{label}: {ops} ops in {secs:.3}s ({ops_per_sec:.0} ops/s, {nanos_per_op:.1} ns/op)");
}

fn main() {
    if let Err(err) = run() {
        eprintln!("bench_reply failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> ReplyResult<()> {
    let config = BenchConfig::from_args();
    let mask = REPLY_POOL - 1;
    let mut rng = XorShift64::new(0xA5A5_A5A5_A5A5_A5A5);

    let integers = build_integers(&mut rng);
    let floats = build_floats(&mut rng);
    let arrays = build_arrays(&mut rng, config.array_len);

    println!(
        "ops={}, array_len={}, pool={}",
        config.op_count, config.array_len, REPLY_POOL
    );

    let mut rng = XorShift64::new(0x1234_5678_9ABC_DEF0);
    let start = Instant::now();
    for _ in 0..config.op_count {
        let reply = integers[rng.next_index(mask)].clone();
        black_box(hkv_reply::int64(Ok::<_, ReplyError>(reply))?);
    }
    report("Int64", config.op_count, start.elapsed());

    let start = Instant::now();
    for _ in 0..config.op_count {
        let reply = floats[rng.next_index(mask)].clone();
        black_box(hkv_reply::float64(Ok::<_, ReplyError>(reply))?);
    }
    report("Float64", config.op_count, start.elapsed());

    let start = Instant::now();
    for _ in 0..config.op_count {
        let reply = arrays[rng.next_index(mask)].clone();
        black_box(hkv_reply::strings(Ok::<_, ReplyError>(reply))?);
    }
    report("Strings", config.op_count, start.elapsed());

    Ok(())
}
