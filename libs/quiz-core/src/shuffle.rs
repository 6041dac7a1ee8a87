//! Deterministic seeded shuffle.
//!
//! The permutation for a given seed is part of the output format: changing
//! the generator, the draw scaling or the loop order changes every
//! generated option order.

/// 32-bit xorshift generator (shifts 13, 17, 5).
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Seeds are reduced modulo 2^32. A zero state stays zero forever.
    pub fn new(seed: i64) -> Self {
        Self { state: seed as u32 }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next draw in `[0, 1]`, scaled by `u32::MAX`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

/// Fisher–Yates shuffle driven by [`XorShift32`], from the last index down.
pub fn seeded_shuffle<T>(items: &mut [T], seed: i64) {
    let mut rng = XorShift32::new(seed);

    for i in (1..items.len()).rev() {
        let draw = rng.next_f64();
        // A draw of exactly 1.0 would index past `i`.
        let j = ((draw * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}

/// Shuffled copy of `items`.
pub fn shuffled<T: Clone>(items: &[T], seed: i64) -> Vec<T> {
    let mut copy = items.to_vec();
    seeded_shuffle(&mut copy, seed);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn generator_reference_sequence() {
        let mut rng = XorShift32::new(1);
        assert_eq!(rng.next_u32(), 270_369);
        assert_eq!(rng.next_u32(), 67_634_689);
        assert_eq!(rng.next_u32(), 2_647_435_461);
    }

    #[test]
    fn seed_wraps_to_32_bits() {
        let mut a = XorShift32::new(1);
        let mut b = XorShift32::new(1 + (1_i64 << 32));
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn zero_seed_rotates_left() {
        // Every draw is 0, so each step swaps index i with 0.
        assert_eq!(shuffled(&[0, 1, 2, 3], 0), vec![1, 2, 3, 0]);
    }

    #[test]
    fn reference_permutations_of_four() {
        let items = [0, 1, 2, 3];
        assert_eq!(shuffled(&items, 1), vec![2, 1, 3, 0]);
        assert_eq!(shuffled(&items, 2), vec![1, 2, 3, 0]);
        assert_eq!(shuffled(&items, 3), vec![2, 1, 3, 0]);
        assert_eq!(shuffled(&items, 4), vec![1, 2, 3, 0]);
        assert_eq!(shuffled(&items, 42), vec![2, 3, 1, 0]);
    }

    #[test]
    fn reference_permutations_of_ten() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(shuffled(&items, 1), vec![1, 2, 5, 7, 6, 3, 8, 4, 9, 0]);
        assert_eq!(shuffled(&items, 5), vec![2, 8, 4, 3, 7, 1, 5, 6, 9, 0]);
    }

    #[test]
    fn empty_and_single_are_untouched() {
        assert_eq!(shuffled::<u8>(&[], 7), Vec::<u8>::new());
        assert_eq!(shuffled(&["only"], 7), vec!["only"]);
    }

    proptest! {
        #[test]
        fn shuffle_is_deterministic(items in proptest::collection::vec(any::<u16>(), 0..32), seed in any::<i64>()) {
            prop_assert_eq!(shuffled(&items, seed), shuffled(&items, seed));
        }

        #[test]
        fn shuffle_is_a_permutation(items in proptest::collection::vec(any::<u16>(), 0..32), seed in any::<i64>()) {
            let mut out = shuffled(&items, seed);
            let mut expected = items.clone();
            out.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(out, expected);
        }
    }
}
