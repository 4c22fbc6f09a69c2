// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::solution::{EvaluableSolution, PermutationSolution};
use std::hash::{Hash, Hasher};

/// A prospective transformation of a solution.
///
/// A move carries both a cost preview and a mutator. Local searches live
/// or die by the preview being cheap: [`evaluate`](Self::evaluate) must
/// answer "what would the cost be?" without touching the solution.
pub trait Move<S: EvaluableSolution> {
    /// The cost the solution would have after applying this move. Must
    /// not mutate `solution`.
    fn evaluate(&self, solution: &S) -> S::Cost;

    /// Transforms `solution` into the post-move state.
    fn apply(&self, solution: &mut S);
}

/// A move with identity, so it can be remembered in a forbidden set.
///
/// Tabu-style strategies store copies of performed moves and test later
/// candidates against them, which needs cloning, hashing and structural
/// equality on top of the plain [`Move`] contract.
pub trait TabuMove<S: EvaluableSolution>: Move<S> + Clone + Eq + Hash {
    /// The move to declare forbidden after this one was made. The
    /// default forbids repeating the move itself; override to forbid
    /// the reversal instead (if we moved a to b, forbid moving b to a).
    fn opposite_of(&self) -> Self {
        self.clone()
    }
}

/// The moves provided for permutation solutions.
///
/// `Swap` is kept normalized (`p1 < p2`, enforced by every constructor
/// and mutator), so two swaps touching the same pair of positions
/// compare equal regardless of argument order. `Invert` is deliberately
/// not normalized: the argument order encodes which circular arc gets
/// reversed, and `Invert(a, b)` is a different move than `Invert(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationMove {
    /// Exchange the elements at two positions.
    Swap { p1: usize, p2: usize },
    /// Reverse the circular run of positions `from..=to`, wrapping past
    /// the end when `from > to`.
    Invert { from: usize, to: usize },
}

impl PermutationMove {
    /// A swap of positions `a` and `b`, stored normalized.
    #[inline]
    pub fn swap(a: usize, b: usize) -> Self {
        PermutationMove::Swap {
            p1: a.min(b),
            p2: a.max(b),
        }
    }

    /// An inversion of the circular run from `from` to `to`, inclusive.
    #[inline]
    pub fn invert(from: usize, to: usize) -> Self {
        PermutationMove::Invert { from, to }
    }

    /// Rewrites this move into the normalized swap of `a` and `b`.
    /// Neighborhoods use this to recycle move slots between refreshes.
    #[inline]
    pub fn set_swap(&mut self, a: usize, b: usize) {
        *self = PermutationMove::swap(a, b);
    }

    /// Stable mix of the two positions, used for hashing. Stable within
    /// a library version; not cryptographic.
    #[inline]
    pub fn signature(&self) -> u64 {
        let (a, b) = match *self {
            PermutationMove::Swap { p1, p2 } => (p1, p2),
            PermutationMove::Invert { from, to } => (from, to),
        };
        ((a as u64) << 16) ^ (b as u64)
    }
}

impl Hash for PermutationMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.signature());
    }
}

/// Number of positions on the circular run from `from` to `to`,
/// inclusive. `from == to` yields 1, so the inversion degenerates to a
/// no-op; the wrap-around case counts past the end of the arrangement.
#[inline]
fn inversion_span(from: usize, to: usize, n: usize) -> usize {
    if from <= to {
        to - from + 1
    } else {
        n + to - from + 1
    }
}

impl<S: PermutationSolution> Move<S> for PermutationMove {
    fn evaluate(&self, solution: &S) -> S::Cost {
        match *self {
            PermutationMove::Swap { p1, p2 } => {
                solution.cost() + solution.evaluate_swap(p1, p2)
            }
            PermutationMove::Invert { from, to } => {
                let n = solution.size();
                let span = inversion_span(from, to, n);
                let mut cost = solution.cost();
                // Each paired swap is previewed against the unchanged
                // arrangement; for objectives whose swap deltas interact,
                // the preview approximates the post-move cost.
                for k in 0..span / 2 {
                    let a = (from + k) % n;
                    let b = (n + to - k) % n;
                    cost = cost + solution.evaluate_swap(a, b);
                }
                cost
            }
        }
    }

    fn apply(&self, solution: &mut S) {
        match *self {
            PermutationMove::Swap { p1, p2 } => solution.apply_swap(p1, p2),
            PermutationMove::Invert { from, to } => {
                let n = solution.size();
                let span = inversion_span(from, to, n);
                for k in 0..span / 2 {
                    let a = (from + k) % n;
                    let b = (n + to - k) % n;
                    solution.apply_swap(a, b);
                }
            }
        }
    }
}

impl<S: PermutationSolution> TabuMove<S> for PermutationMove {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::{Permutation, random_shuffle};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    /// Minimize sum over i of i * pi[i]; swap delta in closed form.
    #[derive(Debug, Clone)]
    struct WeightedOrdering {
        perm: Permutation<i64>,
    }

    impl WeightedOrdering {
        fn new(n: usize) -> Self {
            let mut s = Self {
                perm: Permutation::identity(n),
            };
            s.update_cost();
            s
        }
    }

    impl EvaluableSolution for WeightedOrdering {
        type Cost = i64;

        fn cost(&self) -> i64 {
            self.perm.cost()
        }
    }

    impl PermutationSolution for WeightedOrdering {
        fn permutation(&self) -> &Permutation<i64> {
            &self.perm
        }

        fn permutation_mut(&mut self) -> &mut Permutation<i64> {
            &mut self.perm
        }

        fn compute_cost(&self) -> i64 {
            self.perm
                .as_slice()
                .iter()
                .enumerate()
                .map(|(i, &v)| (i * v) as i64)
                .sum()
        }

        fn evaluate_swap(&self, i: usize, j: usize) -> i64 {
            let (pi, pj) = (self.perm[i] as i64, self.perm[j] as i64);
            (i as i64 - j as i64) * (pj - pi)
        }
    }

    #[test]
    fn swap_constructor_normalizes() {
        assert_eq!(
            PermutationMove::swap(4, 1),
            PermutationMove::Swap { p1: 1, p2: 4 }
        );
        assert_eq!(PermutationMove::swap(1, 4), PermutationMove::swap(4, 1));
    }

    #[test]
    fn set_swap_renormalizes_in_place() {
        let mut m = PermutationMove::swap(0, 0);
        m.set_swap(5, 2);
        assert_eq!(m, PermutationMove::Swap { p1: 2, p2: 5 });
    }

    #[test]
    fn invert_preserves_direction() {
        assert_ne!(PermutationMove::invert(1, 3), PermutationMove::invert(3, 1));
        assert_eq!(
            PermutationMove::invert(3, 1),
            PermutationMove::Invert { from: 3, to: 1 }
        );
    }

    #[test]
    fn cross_variant_moves_are_never_equal() {
        assert_ne!(PermutationMove::swap(1, 2), PermutationMove::invert(1, 2));
    }

    #[test]
    fn signature_is_the_documented_mix() {
        let m = PermutationMove::swap(3, 1);
        assert_eq!(m.signature(), (1u64 << 16) ^ 3);
        let m = PermutationMove::invert(3, 1);
        assert_eq!(m.signature(), (3u64 << 16) ^ 1);
    }

    #[test]
    fn evaluate_is_repeatable_and_non_mutating() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut s = WeightedOrdering::new(9);
        random_shuffle(&mut s, &mut rng);
        let pi_before: Vec<usize> = s.permutation().as_slice().to_vec();
        let cost_before = s.cost();

        for m in [
            PermutationMove::swap(2, 6),
            PermutationMove::invert(1, 5),
            PermutationMove::invert(7, 2),
        ] {
            let first = m.evaluate(&s);
            let second = m.evaluate(&s);
            assert_eq!(first, second);
            assert_eq!(s.permutation().as_slice(), pi_before.as_slice());
            assert_eq!(s.cost(), cost_before);
        }
    }

    #[test]
    fn swap_evaluate_previews_the_post_move_cost() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut s = WeightedOrdering::new(6);
        random_shuffle(&mut s, &mut rng);

        let m = PermutationMove::swap(1, 4);
        let preview = m.evaluate(&s);
        m.apply(&mut s);
        assert_eq!(preview, s.cost());
        assert_eq!(s.cost(), s.compute_cost());
    }

    #[test]
    fn invert_reverses_a_forward_run() {
        let mut s = WeightedOrdering::new(5);
        PermutationMove::invert(1, 3).apply(&mut s);
        assert_eq!(s.permutation().as_slice(), &[0, 3, 2, 1, 4]);
        assert_eq!(s.cost(), s.compute_cost());
    }

    #[test]
    fn invert_wraps_around_the_end() {
        // Reversing the arc through positions 3, 4, 0, 1 pairs (3,1) and (4,0).
        let mut s = WeightedOrdering::new(5);
        PermutationMove::invert(3, 1).apply(&mut s);
        assert_eq!(s.permutation().as_slice(), &[4, 3, 2, 1, 0]);
        assert_eq!(s.cost(), s.compute_cost());
    }

    #[test]
    fn invert_of_a_single_position_is_a_no_op() {
        let mut s = WeightedOrdering::new(5);
        PermutationMove::invert(2, 2).apply(&mut s);
        assert_eq!(s.permutation().as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn invert_apply_matches_the_explicit_swap_sequence() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let n = 8;
        for from in 0..n {
            for to in 0..n {
                if from == to {
                    continue;
                }
                let mut lhs = WeightedOrdering::new(n);
                random_shuffle(&mut lhs, &mut rng);
                let mut rhs = lhs.clone();

                PermutationMove::invert(from, to).apply(&mut lhs);

                let span = if from <= to {
                    to - from + 1
                } else {
                    n + to - from + 1
                };
                for k in 0..span / 2 {
                    rhs.apply_swap((from + k) % n, (n + to - k) % n);
                }

                assert_eq!(lhs.permutation(), rhs.permutation());
                assert_eq!(lhs.cost(), rhs.cost());
            }
        }
    }

    #[test]
    fn opposite_of_defaults_to_the_move_itself() {
        let m = PermutationMove::swap(2, 7);
        let opposite: PermutationMove = TabuMove::<WeightedOrdering>::opposite_of(&m);
        assert_eq!(opposite, m);
    }

    #[test]
    fn moves_work_as_forbidden_set_keys() {
        let mut forbidden: HashSet<PermutationMove> = HashSet::new();
        forbidden.insert(PermutationMove::swap(4, 2));
        assert!(forbidden.contains(&PermutationMove::swap(2, 4)));
        assert!(!forbidden.contains(&PermutationMove::invert(2, 4)));
    }
}
