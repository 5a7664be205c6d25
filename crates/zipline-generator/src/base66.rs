use crate::seed::SeedSource;
use crate::Generator;
use zipline_core::base66::ShortCodeBase66;

/// Short-code generator encoding a randomly drawn seed in base-66.
///
/// Codes are deterministic per seed; uniqueness across seeds is
/// probabilistic (ten-digit seed space over a 66^n code space) and
/// collisions are left to the registry to reject, not retried here.
#[derive(Debug, Clone)]
pub struct Base66Generator<S> {
    seeds: S,
}

impl<S: SeedSource> Base66Generator<S> {
    pub fn new(seeds: S) -> Self {
        Self { seeds }
    }
}

impl<S: SeedSource> Generator for Base66Generator<S> {
    type Output = ShortCodeBase66;

    fn generate(&self) -> Self::Output {
        ShortCodeBase66::encode(self.seeds.next_seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{FixedSeeds, ThreadRngSeeds, SEED_SPACE};
    use zipline_core::base66::is_alphabet;
    use zipline_core::ShortCode;

    #[test]
    fn fixed_seeds_make_generation_deterministic() {
        let generator = Base66Generator::new(FixedSeeds::new([0, 1, 9_999_999_999]));

        assert_eq!(generator.generate().as_str(), "a");
        assert_eq!(generator.generate().as_str(), "b");
        assert_eq!(
            generator.generate().as_str(),
            ShortCodeBase66::encode(9_999_999_999).as_str()
        );
    }

    #[test]
    fn zero_seed_yields_a_defined_code() {
        let generator = Base66Generator::new(FixedSeeds::new([0]));
        let code: ShortCode = generator.generate().into();
        assert_eq!(code.as_str(), "a");
    }

    #[test]
    fn random_codes_stay_within_the_alphabet() {
        let generator = Base66Generator::new(ThreadRngSeeds);
        for _ in 0..100 {
            let code = generator.generate();
            assert!(!code.as_str().is_empty());
            assert!(is_alphabet(code.as_str()));
        }
    }

    #[test]
    fn full_seed_range_fits_six_characters() {
        let generator = Base66Generator::new(FixedSeeds::new([SEED_SPACE - 1]));
        assert!(generator.generate().as_str().len() <= 6);
    }
}
