//! Login Rate Limiter (Token Bucket)
//!
//! Throttles credential guessing. Lock-free: the bucket state lives in one
//! atomic word updated by a CAS loop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Tokens are tracked in thousandths so slow refill rates do not round to zero
const MILLI: u64 = 1000;

/// Largest burst whose milli-token count fits the 32-bit half of the state word
pub const MAX_BURST: u32 = (u32::MAX as u64 / MILLI) as u32;

pub struct RateLimiter {
    // Upper 32 bits: milli-tokens. Lower 32 bits: ms since `origin` at last refill
    packed: AtomicU64,
    origin: Instant,
    capacity_milli: u64,
    /// Tokens per second, which is also milli-tokens per millisecond
    refill_rate: u64,
}

impl RateLimiter {
    /// `burst` attempts at once (capped at [`MAX_BURST`]), refilled at
    /// `refill_rate` per second
    pub fn new(burst: u32, refill_rate: u32) -> Self {
        let capacity_milli = burst.min(MAX_BURST) as u64 * MILLI;
        Self {
            packed: AtomicU64::new(capacity_milli << 32),
            origin: Instant::now(),
            capacity_milli,
            refill_rate: refill_rate as u64,
        }
    }

    /// Consume one token; false when the bucket is empty
    pub async fn check(&self) -> bool {
        loop {
            let packed = self.packed.load(Ordering::Acquire);
            let tokens = packed >> 32;
            let last_refill_ms = packed & 0xFFFF_FFFF;

            let now_ms = self.origin.elapsed().as_millis() as u64 & 0xFFFF_FFFF;
            let delta_ms = now_ms.saturating_sub(last_refill_ms);
            let refilled = tokens
                .saturating_add(delta_ms.saturating_mul(self.refill_rate))
                .min(self.capacity_milli);

            let (remaining, allowed) = if refilled >= MILLI {
                (refilled - MILLI, true)
            } else {
                (refilled, false)
            };

            let next = (remaining << 32) | now_ms;
            if self
                .packed
                .compare_exchange(packed, next, Ordering::Release, Ordering::Acquire)
                .is_ok()
            {
                return allowed;
            }
        }
    }
}
