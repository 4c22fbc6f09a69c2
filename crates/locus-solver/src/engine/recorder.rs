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

use locus_core::prelude::CostValue;
use locus_model::solution::EvaluableSolution;

/// Keeps track of solutions worth remembering during a search.
pub trait SolutionRecorder<S: EvaluableSolution> {
    /// Offers the current working solution. Returns true iff this call
    /// improved the recorder's best.
    fn accept(&mut self, solution: &S) -> bool;
}

/// Remembers the best solution ever offered and its cost.
///
/// The recorder owns a snapshot slot of the caller's concrete solution
/// type; construction takes a valid template whose state is irrelevant
/// (the best cost starts unreached) but whose allocations get reused
/// when an improvement is written over it via `clone_from`.
#[derive(Debug, Clone)]
pub struct BestEverRecorder<S: EvaluableSolution> {
    best: S,
    best_cost: S::Cost,
}

impl<S: EvaluableSolution> BestEverRecorder<S> {
    pub fn new(template: S) -> Self {
        Self {
            best: template,
            best_cost: S::Cost::unbounded(),
        }
    }

    /// The best solution seen so far. Meaningless until the first
    /// successful [`accept`](SolutionRecorder::accept).
    #[inline]
    pub fn best(&self) -> &S {
        &self.best
    }

    /// Cost of the best solution seen so far; the unreached sentinel
    /// before the first successful accept.
    #[inline]
    pub fn best_cost(&self) -> S::Cost {
        self.best_cost
    }

    /// Consumes the recorder and hands out the snapshot.
    #[inline]
    pub fn into_best(self) -> S {
        self.best
    }
}

impl<S: EvaluableSolution> SolutionRecorder<S> for BestEverRecorder<S> {
    fn accept(&mut self, solution: &S) -> bool {
        let cost = solution.cost();
        if cost < self.best_cost {
            self.best.clone_from(solution);
            self.best_cost = cost;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Scripted {
        cost: f64,
    }

    impl EvaluableSolution for Scripted {
        type Cost = f64;

        fn cost(&self) -> f64 {
            self.cost
        }
    }

    #[test]
    fn starts_with_an_unreached_best() {
        let recorder = BestEverRecorder::new(Scripted { cost: 123.0 });
        assert_eq!(recorder.best_cost(), f64::unbounded());
    }

    #[test]
    fn keeps_the_minimum_of_a_scripted_sequence() {
        let mut sol = Scripted { cost: 0.0 };
        let mut recorder = BestEverRecorder::new(sol.clone());

        let mut improved = Vec::new();
        for cost in [10.0, 8.0, 9.0, 7.0, 12.0] {
            sol.cost = cost;
            improved.push(recorder.accept(&sol));
        }

        assert_eq!(improved, [true, true, false, true, false]);
        assert_eq!(recorder.best_cost(), 7.0);
        assert_eq!(recorder.best(), &Scripted { cost: 7.0 });
    }

    #[test]
    fn stored_cost_never_increases() {
        let mut sol = Scripted { cost: 0.0 };
        let mut recorder = BestEverRecorder::new(sol.clone());

        let mut previous = f64::unbounded();
        for cost in [5.0, 6.0, 4.0, 4.0, 9.0, 1.0, 2.0] {
            sol.cost = cost;
            recorder.accept(&sol);
            assert!(recorder.best_cost() <= previous);
            previous = recorder.best_cost();
        }
        assert_eq!(recorder.best_cost(), 1.0);
    }

    #[test]
    fn equal_cost_is_not_an_improvement() {
        let sol = Scripted { cost: 2.0 };
        let mut recorder = BestEverRecorder::new(sol.clone());
        assert!(recorder.accept(&sol));
        assert!(!recorder.accept(&sol));
    }

    #[test]
    fn into_best_hands_out_the_snapshot() {
        let mut sol = Scripted { cost: 3.0 };
        let mut recorder = BestEverRecorder::new(sol.clone());
        recorder.accept(&sol);
        sol.cost = 99.0;
        recorder.accept(&sol);
        assert_eq!(recorder.into_best(), Scripted { cost: 3.0 });
    }
}
