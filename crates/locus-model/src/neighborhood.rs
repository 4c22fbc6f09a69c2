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

use crate::err::NeighborhoodSizeError;
use crate::moves::{Move, PermutationMove};
use crate::solution::{EvaluableSolution, PermutationSolution};
use rand::Rng;

/// A refreshable, iterable set of candidate moves.
///
/// The driver calls [`refresh`](Self::refresh) once per outer iteration
/// and then walks [`moves`](Self::moves) front to back; the order is
/// fixed until the next refresh. Implementations own their move objects
/// and are expected to allocate up front; the steady-state search loop
/// must stay allocation-free.
pub trait MoveManager<S: EvaluableSolution> {
    type Move: Move<S>;

    /// Rebuilds the move set for the given solution. Static
    /// neighborhoods make this a no-op.
    fn refresh(&mut self, solution: &S);

    /// The current move set in iteration order.
    fn moves(&self) -> &[Self::Move];

    #[inline]
    fn len(&self) -> usize {
        self.moves().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.moves().is_empty()
    }
}

/// A stochastic subset of the swap neighborhood.
///
/// Holds exactly `sample_size` swap moves for its entire lifetime; each
/// refresh rewrites them in place with fresh uniform position pairs, so
/// no allocation happens after construction.
#[derive(Debug)]
pub struct StochasticSwapNeighborhood<R> {
    rng: R,
    moves: Vec<PermutationMove>,
}

impl<R: Rng> StochasticSwapNeighborhood<R> {
    /// A neighborhood of `sample_size` random swaps, drawn from `rng` at
    /// every refresh. The generator owns its RNG; callers seed it at the
    /// application boundary.
    pub fn new(rng: R, sample_size: usize) -> Self {
        Self {
            rng,
            moves: vec![PermutationMove::swap(0, 0); sample_size],
        }
    }

    #[inline]
    pub fn sample_size(&self) -> usize {
        self.moves.len()
    }
}

impl<S, R> MoveManager<S> for StochasticSwapNeighborhood<R>
where
    S: PermutationSolution,
    R: Rng,
{
    type Move = PermutationMove;

    /// Rewrites every held move with a fresh pair drawn uniformly from
    /// [0, n), re-rolling the second position on collision. Requires a
    /// problem size of at least 2.
    fn refresh(&mut self, solution: &S) {
        let n = solution.size();
        debug_assert!(n >= 2);
        let rng = &mut self.rng;
        for m in &mut self.moves {
            let p1 = rng.random_range(0..n);
            let mut p2 = rng.random_range(0..n);
            while p2 == p1 {
                p2 = rng.random_range(0..n);
            }
            m.set_swap(p1, p2);
        }
    }

    #[inline]
    fn moves(&self) -> &[PermutationMove] {
        &self.moves
    }
}

/// The exhaustive swap neighborhood: one move per unordered position
/// pair, n·(n−1)/2 in total, allocated once at construction.
#[derive(Debug, Clone)]
pub struct FullSwapNeighborhood {
    moves: Vec<PermutationMove>,
}

impl FullSwapNeighborhood {
    pub fn new(size: usize) -> Result<Self, NeighborhoodSizeError> {
        if size < 2 {
            return Err(NeighborhoodSizeError::new(size));
        }
        let mut moves = Vec::with_capacity(size * (size - 1) / 2);
        for i in 0..size - 1 {
            for j in i + 1..size {
                moves.push(PermutationMove::swap(i, j));
            }
        }
        Ok(Self { moves })
    }
}

impl<S: PermutationSolution> MoveManager<S> for FullSwapNeighborhood {
    type Move = PermutationMove;

    /// Static neighborhood; nothing to rebuild.
    fn refresh(&mut self, _solution: &S) {}

    #[inline]
    fn moves(&self) -> &[PermutationMove] {
        &self.moves
    }
}

/// The exhaustive subsequence-inversion neighborhood: one move per
/// ordered position pair with i ≠ j, n·(n−1) in total, allocated once
/// at construction.
#[derive(Debug, Clone)]
pub struct FullInvertNeighborhood {
    moves: Vec<PermutationMove>,
}

impl FullInvertNeighborhood {
    pub fn new(size: usize) -> Result<Self, NeighborhoodSizeError> {
        if size < 2 {
            return Err(NeighborhoodSizeError::new(size));
        }
        let mut moves = Vec::with_capacity(size * (size - 1));
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    moves.push(PermutationMove::invert(i, j));
                }
            }
        }
        Ok(Self { moves })
    }
}

impl<S: PermutationSolution> MoveManager<S> for FullInvertNeighborhood {
    type Move = PermutationMove;

    /// Static neighborhood; nothing to rebuild.
    fn refresh(&mut self, _solution: &S) {}

    #[inline]
    fn moves(&self) -> &[PermutationMove] {
        &self.moves
    }
}
