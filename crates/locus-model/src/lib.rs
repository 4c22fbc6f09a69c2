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

//! Model layer of the locus local-search framework.
//!
//! Defines the contracts a problem plugs into the search machinery:
//! solutions ([`solution::EvaluableSolution`], the permutation skeleton),
//! moves ([`moves::Move`], [`moves::PermutationMove`]) and neighborhoods
//! ([`neighborhood::MoveManager`] with stochastic and exhaustive
//! generators).

pub mod err;
pub mod moves;
pub mod neighborhood;
pub mod solution;

pub mod prelude {
    pub use crate::err::{NeighborhoodError, NeighborhoodSizeError, NoMovesError};
    pub use crate::moves::{Move, PermutationMove, TabuMove};
    pub use crate::neighborhood::{
        FullInvertNeighborhood, FullSwapNeighborhood, MoveManager, StochasticSwapNeighborhood,
    };
    pub use crate::solution::{
        EvaluableSolution, FeasibleSolution, Permutation, PermutationSolution, perturbate,
        random_shuffle,
    };
}
