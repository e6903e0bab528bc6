/// Uniform random source for picks
use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Produces values uniformly distributed in [0, 1)
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Map a unit sample onto `[0, len)`.
///
/// `len` must be non-zero. Samples at or past 1.0 clamp to the last index.
pub fn index_for(sample: f64, len: usize) -> usize {
    let index = (sample * len as f64).floor() as usize;
    index.min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_index_bounds() {
        assert_eq!(index_for(0.0, 5), 0);
        assert_eq!(index_for(0.2, 5), 1);
        assert_eq!(index_for(0.999999, 5), 4);
        assert_eq!(index_for(1.0, 5), 4);
        assert_eq!(index_for(0.5, 1), 0);
    }

    #[test]
    fn test_negative_sample_maps_to_zero() {
        // Float-to-int casts saturate
        assert_eq!(index_for(-0.5, 5), 0);
    }

    #[test]
    fn test_std_rng_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let sample = rng.next_unit();
            assert!((0.0..1.0).contains(&sample));
        }
    }
}
