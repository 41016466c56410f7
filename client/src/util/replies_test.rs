use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Seeded(StdRng);

impl RandomSource for Seeded {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

struct Fixed(f64);

impl RandomSource for Fixed {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

// =============================================================
// pick_reply
// =============================================================

#[test]
fn pick_reply_maps_unit_interval_onto_three_thirds() {
    assert_eq!(pick_reply(&mut Fixed(0.0)), REPLIES[0]);
    assert_eq!(pick_reply(&mut Fixed(0.34)), REPLIES[1]);
    assert_eq!(pick_reply(&mut Fixed(0.99)), REPLIES[2]);
}

#[test]
fn pick_reply_clamps_out_of_range_samples() {
    assert_eq!(pick_reply(&mut Fixed(1.0)), REPLIES[2]);
    assert_eq!(pick_reply(&mut Fixed(-0.5)), REPLIES[0]);
    assert_eq!(pick_reply(&mut Fixed(f64::NAN)), REPLIES[0]);
}

#[test]
fn pick_reply_reaches_every_reply_with_seeded_source() {
    let mut rng = Seeded(StdRng::seed_from_u64(7));
    let mut seen = [false; 3];
    for _ in 0..300 {
        let reply = pick_reply(&mut rng);
        let idx = REPLIES.iter().position(|r| *r == reply).expect("reply from fixed set");
        seen[idx] = true;
    }
    assert_eq!(seen, [true, true, true]);
}

// =============================================================
// reply_delay
// =============================================================

#[test]
fn reply_delay_bounds() {
    assert_eq!(reply_delay(&mut Fixed(0.0)), Duration::from_millis(800));
    assert_eq!(reply_delay(&mut Fixed(0.5)), Duration::from_millis(1150));
    assert_eq!(reply_delay(&mut Fixed(0.999_999)), Duration::from_millis(1499));
    assert_eq!(reply_delay(&mut Fixed(1.0)), Duration::from_millis(1499));
}

#[test]
fn reply_delay_stays_in_window_with_seeded_source() {
    let mut rng = Seeded(StdRng::seed_from_u64(42));
    for _ in 0..500 {
        let ms = reply_delay(&mut rng).as_millis();
        assert!((800..1500).contains(&ms), "delay {ms}ms out of window");
    }
}

#[test]
fn native_math_random_is_deterministic_zero() {
    let mut rng = MathRandom;
    assert_eq!(rng.next_unit(), 0.0);
    assert_eq!(pick_reply(&mut rng), REPLIES[0]);
}
