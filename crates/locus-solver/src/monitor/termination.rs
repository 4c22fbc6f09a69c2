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
use std::fmt;

/// A stop predicate over the working solution.
///
/// Criteria are stateful: calling [`should_stop`](Self::should_stop)
/// advances internal counters, and [`reset`](Self::reset) restores the
/// initial state for a fresh search.
pub trait TerminationCriterion<S: EvaluableSolution> {
    /// A short identifier for logging and diagnostics.
    fn name(&self) -> &str {
        "TerminationCriterion"
    }

    /// True when the search should end now.
    fn should_stop(&mut self, solution: &S) -> bool;

    /// Restores the criterion to its initial state.
    fn reset(&mut self);
}

impl<'a, S: EvaluableSolution> fmt::Debug for dyn TerminationCriterion<S> + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TerminationCriterion({})", self.name())
    }
}

/// An ordered composition of criteria, evaluated front to back with
/// short-circuit: the first criterion that wants to stop wins and the
/// remaining ones are not consulted (and do not advance their
/// counters). Resets cascade to every member.
pub struct TerminationChain<S: EvaluableSolution> {
    criteria: Vec<Box<dyn TerminationCriterion<S>>>,
}

impl<S: EvaluableSolution> TerminationChain<S> {
    #[inline]
    pub fn new() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    /// Chain-builder: append a criterion and return self.
    #[inline]
    pub fn with<C: TerminationCriterion<S> + 'static>(mut self, criterion: C) -> Self {
        self.criteria.push(Box::new(criterion));
        self
    }

    /// Append a criterion to the end of the chain.
    #[inline]
    pub fn push<C: TerminationCriterion<S> + 'static>(&mut self, criterion: C) {
        self.criteria.push(Box::new(criterion));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl<S: EvaluableSolution> Default for TerminationChain<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EvaluableSolution> TerminationCriterion<S> for TerminationChain<S> {
    fn name(&self) -> &str {
        "TerminationChain"
    }

    fn should_stop(&mut self, solution: &S) -> bool {
        self.criteria.iter_mut().any(|c| c.should_stop(solution))
    }

    fn reset(&mut self) {
        for c in &mut self.criteria {
            c.reset();
        }
    }
}

impl<S: EvaluableSolution> fmt::Debug for TerminationChain<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminationChain")
            .field("len", &self.criteria.len())
            .finish()
    }
}

/// Stops after a fixed number of iterations: the first `max` calls
/// return false and consume budget, the (max+1)-th returns true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationCap {
    max: u64,
    remaining: u64,
}

impl IterationCap {
    pub fn new(max: u64) -> Self {
        Self {
            max,
            remaining: max,
        }
    }

    /// Budget left before the cap fires.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl<S: EvaluableSolution> TerminationCriterion<S> for IterationCap {
    fn name(&self) -> &str {
        "IterationCap"
    }

    fn should_stop(&mut self, _solution: &S) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }

    fn reset(&mut self) {
        self.remaining = self.max;
    }
}

/// Stops after `max` consecutive calls without the cost improving by
/// more than `epsilon` over the best seen so far.
///
/// Keeps a few diagnostics around: the total number of calls that
/// consumed budget, how often the budget was refilled by an improvement,
/// and the longest improvement-free streak observed before a refill
/// (useful as a second guess for tuning `max`).
#[derive(Debug, Clone, Copy)]
pub struct NoImprovement<C> {
    best_cost: C,
    epsilon: C,
    max: u64,
    remaining: u64,
    total_iterations: u64,
    resets: u64,
    second_guess: u64,
}

impl<C: CostValue> NoImprovement<C> {
    pub fn new(max: u64, epsilon: C) -> Self {
        Self {
            best_cost: C::unbounded(),
            epsilon,
            max,
            remaining: max,
            total_iterations: 0,
            resets: 0,
            second_guess: 0,
        }
    }

    /// Calls that consumed no-improvement budget so far.
    #[inline]
    pub fn total_iterations(&self) -> u64 {
        self.total_iterations
    }

    /// How often an improvement refilled the budget.
    #[inline]
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Longest improvement-free streak observed before a refill.
    #[inline]
    pub fn second_guess(&self) -> u64 {
        self.second_guess
    }
}

impl<C, S> TerminationCriterion<S> for NoImprovement<C>
where
    C: CostValue,
    S: EvaluableSolution<Cost = C>,
{
    fn name(&self) -> &str {
        "NoImprovement"
    }

    fn should_stop(&mut self, solution: &S) -> bool {
        let current = solution.cost();
        if current < self.best_cost - self.epsilon {
            self.best_cost = current;
            self.second_guess = self.second_guess.max(self.max - self.remaining);
            self.remaining = self.max;
            self.resets += 1;
        }

        if self.remaining == 0 {
            return true;
        }
        self.total_iterations += 1;
        self.remaining -= 1;
        false
    }

    fn reset(&mut self) {
        self.best_cost = C::unbounded();
        self.remaining = self.max;
        self.total_iterations = 0;
        self.resets = 0;
        self.second_guess = 0;
    }
}

/// Stops as soon as the cost falls below `level + epsilon`.
#[derive(Debug, Clone, Copy)]
pub struct CostThreshold<C> {
    level: C,
    epsilon: C,
}

impl<C: CostValue> CostThreshold<C> {
    pub fn new(level: C, epsilon: C) -> Self {
        Self { level, epsilon }
    }
}

impl<C, S> TerminationCriterion<S> for CostThreshold<C>
where
    C: CostValue,
    S: EvaluableSolution<Cost = C>,
{
    fn name(&self) -> &str {
        "CostThreshold"
    }

    fn should_stop(&mut self, solution: &S) -> bool {
        solution.cost() < self.level + self.epsilon
    }

    fn reset(&mut self) {}
}

/// Never stops the search. Lets the simulated annealing driver run
/// until the temperature floor alone; pointless inside a chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl<S: EvaluableSolution> TerminationCriterion<S> for Never {
    fn name(&self) -> &str {
        "Never"
    }

    fn should_stop(&mut self, _solution: &S) -> bool {
        false
    }

    fn reset(&mut self) {}
}
