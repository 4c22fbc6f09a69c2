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

//! Search machinery of the locus local-search framework: the simulated
//! annealing driver, cooling schedules, the termination chain, solution
//! recorders and search observers.
//!
//! The single-threaded driver borrows everything it coordinates and owns
//! only its RNG; see [`engine::sa::SimulatedAnnealing`] for the loop
//! contract.

pub mod engine;
pub mod monitor;

pub mod prelude {
    pub use crate::engine::cooling::{CoolingSchedule, ExponentialCooling, LinearCooling};
    pub use crate::engine::err::CoolingParameterError;
    pub use crate::engine::recorder::{BestEverRecorder, SolutionRecorder};
    pub use crate::engine::sa::SimulatedAnnealing;
    pub use crate::monitor::observer::{CompositeSearchObserver, NullObserver, SearchObserver};
    pub use crate::monitor::termination::{
        CostThreshold, IterationCap, Never, NoImprovement, TerminationChain, TerminationCriterion,
    };
}
