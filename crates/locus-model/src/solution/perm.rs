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

use crate::solution::EvaluableSolution;
use locus_core::prelude::CostValue;
use num_traits::Zero;
use rand::Rng;
use rand::seq::SliceRandom;

/// Backing store of a permutation solution: an arrangement π of the
/// integers {0, …, n−1} plus the incrementally maintained cost of the
/// current arrangement.
///
/// The store never violates the permutation property: the only mutators
/// are position swaps and whole-permutation shuffles.
#[derive(Debug, PartialEq)]
pub struct Permutation<C> {
    pi: Vec<usize>,
    cached_cost: C,
}

impl<C: CostValue> Permutation<C> {
    /// The identity arrangement (0, 1, …, n−1) with a cached cost of
    /// zero. The cache is meaningless until the owning solution calls
    /// [`PermutationSolution::update_cost`] once.
    pub fn identity(n: usize) -> Self {
        Self {
            pi: (0..n).collect(),
            cached_cost: C::zero(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pi.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pi.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.pi
    }

    /// The cached cost of the current arrangement.
    #[inline]
    pub fn cost(&self) -> C {
        self.cached_cost
    }

    #[inline]
    pub fn set_cost(&mut self, cost: C) {
        self.cached_cost = cost;
    }

    /// Books `delta` into the cached cost, then exchanges positions `i`
    /// and `j`. The delta must have been evaluated against the pre-swap
    /// arrangement.
    #[inline]
    pub fn commit_swap(&mut self, i: usize, j: usize, delta: C) {
        self.cached_cost = self.cached_cost + delta;
        self.pi.swap(i, j);
    }

    /// Fisher-Yates shuffle of π. Leaves the cached cost stale; use
    /// [`random_shuffle`] to shuffle and recompute in one step.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.pi.shuffle(rng);
    }
}

impl<C: Clone> Clone for Permutation<C> {
    fn clone(&self) -> Self {
        Self {
            pi: self.pi.clone(),
            cached_cost: self.cached_cost.clone(),
        }
    }

    fn clone_from(&mut self, other: &Self) {
        self.pi.clone_from(&other.pi);
        self.cached_cost = other.cached_cost.clone();
    }
}

impl<C> std::ops::Index<usize> for Permutation<C> {
    type Output = usize;

    #[inline]
    fn index(&self, position: usize) -> &usize {
        &self.pi[position]
    }
}

/// Skeleton for problems whose solution is a permutation (assignment
/// problems, QAP, TSP and the like).
///
/// Implementers own a [`Permutation`] store and provide the two
/// problem-specific pieces: a full cost recomputation and an incremental
/// swap evaluation. Everything else (cached cost, swap application,
/// shuffling, perturbation) is supplied here.
///
/// Call [`update_cost`](Self::update_cost) once after construction and
/// before searching: the store starts with a zero cache because
/// `compute_cost` usually depends on problem data that is not available
/// to the store itself.
pub trait PermutationSolution: EvaluableSolution {
    fn permutation(&self) -> &Permutation<Self::Cost>;

    fn permutation_mut(&mut self) -> &mut Permutation<Self::Cost>;

    /// Full recomputation of the objective for the current arrangement.
    /// Never called by the hot loop.
    fn compute_cost(&self) -> Self::Cost;

    /// Cost delta of exchanging positions `i` and `j`, evaluated against
    /// the current arrangement without mutating it. Returning deltas
    /// consistent with [`compute_cost`](Self::compute_cost) is the
    /// implementer's obligation; the library does not audit it.
    fn evaluate_swap(&self, i: usize, j: usize) -> Self::Cost;

    /// The problem size n.
    #[inline]
    fn size(&self) -> usize {
        self.permutation().len()
    }

    /// Replaces the cached cost with a full recomputation.
    #[inline]
    fn update_cost(&mut self) {
        let cost = self.compute_cost();
        self.permutation_mut().set_cost(cost);
    }

    /// Exchanges positions `i` and `j` and keeps the cached cost in
    /// sync. The delta is taken against the pre-swap state, so the order
    /// of the two steps matters.
    #[inline]
    fn apply_swap(&mut self, i: usize, j: usize) {
        let delta = self.evaluate_swap(i, j);
        self.permutation_mut().commit_swap(i, j, delta);
    }
}

/// Shuffles the arrangement uniformly and recomputes the cost, the
/// usual way to generate a random starting point.
pub fn random_shuffle<P, R>(solution: &mut P, rng: &mut R)
where
    P: PermutationSolution,
    R: Rng,
{
    solution.permutation_mut().shuffle(rng);
    solution.update_cost();
}

/// Perturbates a solution with `swaps` random position swaps, re-rolling
/// the second index on collision. The cached cost stays in sync because
/// each swap goes through [`PermutationSolution::apply_swap`].
///
/// Requires a problem size of at least 2.
pub fn perturbate<P, R>(solution: &mut P, swaps: usize, rng: &mut R)
where
    P: PermutationSolution,
    R: Rng,
{
    let n = solution.size();
    debug_assert!(n >= 2);
    for _ in 0..swaps {
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n);
        while j == i {
            j = rng.random_range(0..n);
        }
        solution.apply_swap(i, j);
    }
}
