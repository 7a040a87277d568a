use rand::Rng;

/// Source of the random decisions made while generating synthetic data.
///
/// Every `rand::Rng` is a source. `SequenceSource` replays fixed values so callers can
/// pin down exact outcomes.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform integer in `low..=high`.
    fn between(&mut self, low: i64, high: i64) -> i64;
}

impl<R: Rng> RandomSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.gen::<f64>() < probability
    }

    fn between(&mut self, low: i64, high: i64) -> i64 {
        self.gen_range(low..=high)
    }
}

pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.index(items.len()))
    }
}

/// Replays unit values in `[0, 1)` in order, wrapping around at the end.
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

impl RandomSource for SequenceSource {
    fn index(&mut self, len: usize) -> usize {
        ((self.next_unit() * len as f64) as usize).min(len - 1)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability
    }

    fn between(&mut self, low: i64, high: i64) -> i64 {
        let span = (high - low + 1) as f64;
        (low + (self.next_unit() * span) as i64).min(high)
    }
}

#[cfg(test)]
mod tests {
    use {
        rand::{SeedableRng, rngs::StdRng},
        super::*,
    };

    #[test]
    fn sequence_source_maps_unit_values() {
        let mut rng = SequenceSource::new(vec![0.0, 0.99, 0.5, 0.7]);

        assert_eq!(rng.index(20), 0);
        assert_eq!(rng.index(20), 19);
        assert!(rng.chance(0.6));
        assert!(!rng.chance(0.6));
    }

    #[test]
    fn sequence_source_wraps_around() {
        let mut rng = SequenceSource::new(vec![0.0, 0.999]);

        assert_eq!(rng.between(1, 60), 1);
        assert_eq!(rng.between(1, 60), 60);
        assert_eq!(rng.between(1, 60), 1);
    }

    #[test]
    fn choose_from_empty_slice_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [&str; 0] = [];

        assert!(choose(&mut rng, &empty).is_none());
        assert_eq!(choose(&mut rng, &["only"]), Some(&"only"));
    }

    #[test]
    fn rng_between_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let days = rng.between(1, 60);
            assert!((1..=60).contains(&days));
        }
    }
}
