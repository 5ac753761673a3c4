//! Problem ordering.
//!
//! The random generator is always passed in. The CLI seeds one generator per
//! process; tests use a fixed seed.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::ProblemSet;

/// Return a uniformly random permutation of `problems`.
///
/// `SliceRandom::shuffle` is the Durstenfeld variant of Fisher-Yates: each
/// position is swapped with a uniformly chosen index from the unshuffled part.
pub fn shuffle_problems<R: Rng + ?Sized>(problems: ProblemSet, rng: &mut R) -> ProblemSet {
    let mut problems = problems.into_inner();
    problems.shuffle(rng);
    tracing::debug!("shuffled {} problems", problems.len());
    ProblemSet::new(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Problem;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn numbered(n: usize) -> ProblemSet {
        (0..n)
            .map(|i| Problem::new(format!("q{i}"), i.to_string()))
            .collect()
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let original = numbered(50);
        let mut rng = StdRng::seed_from_u64(7);

        let shuffled = shuffle_problems(original.clone(), &mut rng);

        assert_eq!(shuffled.len(), original.len());
        let mut before = original.into_inner();
        let mut after = shuffled.into_inner();
        before.sort_by(|a, b| a.question().cmp(b.question()));
        after.sort_by(|a, b| a.question().cmp(b.question()));
        assert_eq!(before, after);
    }

    #[test]
    fn same_seed_same_order() {
        let a = shuffle_problems(numbered(20), &mut StdRng::seed_from_u64(42));
        let b = shuffle_problems(numbered(20), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_points_are_rare() {
        const N: usize = 10;
        const TRIALS: usize = 2000;
        let mut rng = StdRng::seed_from_u64(1);
        let mut fixed = [0usize; N];

        for _ in 0..TRIALS {
            let shuffled = shuffle_problems(numbered(N), &mut rng);
            for (i, problem) in shuffled.iter().enumerate() {
                if problem.answer() == i.to_string() {
                    fixed[i] += 1;
                }
            }
        }

        // Expected rate is 1/N = 0.10 per index.
        for (i, count) in fixed.iter().enumerate() {
            let rate = *count as f64 / TRIALS as f64;
            assert!(rate < 0.15, "index {i} fixed in {rate:.3} of trials");
        }
    }

    #[test]
    fn shuffle_handles_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(shuffle_problems(numbered(0), &mut rng).is_empty());
        assert_eq!(shuffle_problems(numbered(1), &mut rng), numbered(1));
    }
}
