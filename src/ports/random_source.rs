//! Random Source Port - Injectable randomness for names and synthetic research.
//!
//! Every stochastic piece of the planner (name patterns, alternative picks,
//! fabricated market statistics) draws through this port so that tests can
//! replace it with a seeded or scripted source and assert on the derived
//! values deterministically.

/// A source of uniform random draws.
///
/// Implementations only need to provide [`RandomSource::next_unit`]; the
/// remaining helpers are expressed in terms of it.
pub trait RandomSource: Send {
    /// Returns a uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns a uniform index in `0..len`. `len` of zero yields zero.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let idx = (self.next_unit() * len as f64).floor() as usize;
        idx.min(len - 1)
    }

    /// Returns a uniform float in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }

    /// Returns a uniform integer in `low..=high`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        low + self.index((high - low + 1) as usize) as u32
    }
}

impl<'a> dyn RandomSource + 'a {
    /// Picks one element uniformly; `None` for an empty slice.
    pub fn pick<'t, T>(&mut self, items: &'t [T]) -> Option<&'t T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.index(items.len());
        items.get(idx)
    }
}

/// Factory handing out a fresh [`RandomSource`] per operation.
///
/// Handlers are shared across requests, while a random source is mutable
/// state; the provider bridges the two.
pub trait RandomProvider: Send + Sync {
    /// Creates a random source for one operation.
    fn source(&self) -> Box<dyn RandomSource>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn index_maps_unit_interval_onto_range() {
        assert_eq!(Fixed(0.0).index(10), 0);
        assert_eq!(Fixed(0.55).index(10), 5);
        assert_eq!(Fixed(0.999_999).index(10), 9);
    }

    #[test]
    fn index_never_reaches_len() {
        // A misbehaving source returning exactly 1.0 still stays in range.
        assert_eq!(Fixed(1.0).index(4), 3);
        assert_eq!(Fixed(0.3).index(0), 0);
    }

    #[test]
    fn uniform_scales_into_bounds() {
        let v = Fixed(0.5).uniform(3.0, 5.0);
        assert!((v - 4.0).abs() < 1e-12);
    }

    #[test]
    fn int_inclusive_covers_both_ends() {
        assert_eq!(Fixed(0.0).int_inclusive(1, 20), 1);
        assert_eq!(Fixed(0.999).int_inclusive(1, 20), 20);
        assert_eq!(Fixed(0.5).int_inclusive(7, 7), 7);
    }

    #[test]
    fn pick_handles_empty_and_non_empty() {
        let mut src = Fixed(0.7);
        let rng: &mut dyn RandomSource = &mut src;
        assert_eq!(rng.pick::<u8>(&[]), None);
        assert_eq!(rng.pick(&["a", "b", "c"]), Some(&"c"));
    }
}
