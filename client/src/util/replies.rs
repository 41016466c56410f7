//! Canned support replies and the randomness that picks and delays them.
//!
//! DESIGN
//! ======
//! Selection and delay are pure functions over a [`RandomSource`], so tests
//! drive them with a seeded generator while the browser build reads
//! `Math.random`.

#[cfg(test)]
#[path = "replies_test.rs"]
mod replies_test;

use std::time::Duration;

/// Fixed automated replies. Trusted markup: the first one carries a link.
pub const REPLIES: [&str; 3] = [
    "Thanks for reaching out! A volunteer will respond within 2–3 business days. In the meantime, feel free to browse our <a href='contact.html'>contact form</a> for other ways to get help.",
    "We've received your message. Someone from our team will get back to you soon!",
    "Got it — we'll look into this and reply shortly. Is there anything else we can help with?",
];

/// Shortest simulated reply latency.
pub const REPLY_DELAY_BASE_MS: u64 = 800;
/// Width of the random window added on top of the base latency.
pub const REPLY_DELAY_JITTER_MS: usize = 700;

/// Source of uniformly distributed samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// `Math.random` in the browser. Native builds always yield `0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        #[cfg(feature = "csr")]
        {
            js_sys::Math::random()
        }
        #[cfg(not(feature = "csr"))]
        {
            0.0
        }
    }
}

/// Uniformly choose one of [`REPLIES`].
pub fn pick_reply(rng: &mut impl RandomSource) -> &'static str {
    REPLIES[scaled_index(rng.next_unit(), REPLIES.len())]
}

/// Uniform delay in `[800ms, 1500ms)`.
pub fn reply_delay(rng: &mut impl RandomSource) -> Duration {
    let jitter = scaled_index(rng.next_unit(), REPLY_DELAY_JITTER_MS);
    Duration::from_millis(REPLY_DELAY_BASE_MS + jitter as u64)
}

/// Map a unit sample onto `0..len`, clamping samples outside `[0, 1)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn scaled_index(sample: f64, len: usize) -> usize {
    if len == 0 || !sample.is_finite() || sample <= 0.0 {
        return 0;
    }
    let idx = (sample * len as f64).floor() as usize;
    idx.min(len - 1)
}
