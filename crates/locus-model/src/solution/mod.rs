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

pub mod perm;

pub use perm::{Permutation, PermutationSolution, perturbate, random_shuffle};

use locus_core::prelude::CostValue;

/// A point in the search space.
///
/// "Feasible" refers to the region the local search is allowed to walk,
/// not to the constraints of the underlying problem; visiting penalized
/// infeasible states is a legitimate search tactic. This marker is only
/// interesting if you bring your own recorder and termination criteria,
/// since everything shipped here works against [`EvaluableSolution`].
pub trait FeasibleSolution {}

/// A solution with a scalar objective.
///
/// `Clone` doubles as the snapshot mechanism: recorders keep a solution
/// of the same concrete type and overwrite it with
/// [`Clone::clone_from`], so implementers with large buffers should
/// override `clone_from` to reuse the existing allocation.
pub trait EvaluableSolution: Clone {
    /// Scalar cost type, to be minimized.
    type Cost: CostValue;

    /// Cost of the current state.
    ///
    /// Called once per outer search iteration and by termination
    /// criteria; it must be cheap. Expensive bookkeeping belongs in
    /// incremental updates, not here.
    fn cost(&self) -> Self::Cost;
}

impl<S: EvaluableSolution> FeasibleSolution for S {}
