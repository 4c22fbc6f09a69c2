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

use crate::engine::cooling::CoolingSchedule;
use crate::engine::recorder::SolutionRecorder;
use crate::monitor::observer::{CompositeSearchObserver, SearchObserver};
use crate::monitor::termination::TerminationCriterion;
use locus_model::moves::Move;
use locus_model::neighborhood::MoveManager;
use locus_model::solution::EvaluableSolution;
use num_traits::ToPrimitive;
use rand::Rng;

/// Probability of accepting an uphill step of `delta` at temperature
/// `temperature` with Boltzmann constant `k`. Huge ratios drive the
/// exponent to -inf and the probability cleanly to zero.
#[inline]
fn acceptance_probability(delta: f64, k: f64, temperature: f64) -> f64 {
    (-delta / (k * temperature)).exp()
}

/// Search by simulated annealing.
///
/// The driver owns nothing but its RNG: the working solution, recorder,
/// neighborhood, termination criterion and cooling schedule are borrowed
/// exclusively for the lifetime of the search. Per outer iteration it
/// refreshes the neighborhood, walks the moves in order, Metropolis-tests
/// each cost preview against the current temperature and applies the
/// first winner; then it cools, whether or not anything was accepted.
///
/// The search ends when the termination criterion fires or the
/// temperature falls to the stop temperature, whichever comes first.
/// Cost bookkeeping flows exclusively through the moves' evaluate/apply
/// pair; the driver never recomputes a solution from scratch.
pub struct SimulatedAnnealing<'a, S, N, T, C, Rec, R>
where
    S: EvaluableSolution,
    N: MoveManager<S>,
    T: TerminationCriterion<S>,
    C: CoolingSchedule<S>,
    Rec: SolutionRecorder<S>,
    R: Rng,
{
    working: &'a mut S,
    recorder: &'a mut Rec,
    neighborhood: &'a mut N,
    termination: &'a mut T,
    schedule: &'a mut C,
    rng: R,
    observers: CompositeSearchObserver<S>,
    starting_temperature: f64,
    stop_temperature: f64,
    boltzmann: f64,
    current_temperature: f64,
    iteration: u64,
}

impl<'a, S, N, T, C, Rec, R> SimulatedAnnealing<'a, S, N, T, C, Rec, R>
where
    S: EvaluableSolution,
    N: MoveManager<S>,
    T: TerminationCriterion<S>,
    C: CoolingSchedule<S>,
    Rec: SolutionRecorder<S>,
    R: Rng,
{
    /// A search over `working`, recording incumbents into `recorder`,
    /// proposing from `neighborhood`, gated by `termination` and cooled
    /// by `schedule`, starting at `starting_temperature`.
    ///
    /// The stop temperature defaults to 1e-7 and the Boltzmann constant
    /// to 1.0; adjust with [`with_stop_temperature`](Self::with_stop_temperature)
    /// and [`with_boltzmann_constant`](Self::with_boltzmann_constant).
    pub fn new(
        working: &'a mut S,
        recorder: &'a mut Rec,
        neighborhood: &'a mut N,
        termination: &'a mut T,
        schedule: &'a mut C,
        rng: R,
        starting_temperature: f64,
    ) -> Self {
        Self {
            working,
            recorder,
            neighborhood,
            termination,
            schedule,
            rng,
            observers: CompositeSearchObserver::new(),
            starting_temperature,
            stop_temperature: 1e-7,
            boltzmann: 1.0,
            current_temperature: 0.0,
            iteration: 0,
        }
    }

    /// Temperature floor below which the search stops.
    pub fn with_stop_temperature(mut self, stop_temperature: f64) -> Self {
        self.stop_temperature = stop_temperature;
        self
    }

    /// The "Boltzmann" constant K of the Metropolis test.
    pub fn with_boltzmann_constant(mut self, k: f64) -> Self {
        self.boltzmann = k;
        self
    }

    /// Chain-builder: subscribe an observer to search events.
    pub fn with_observer<O: SearchObserver<S> + Send + 'static>(mut self, observer: O) -> Self {
        self.observers.push(observer);
        self
    }

    /// The current annealing temperature.
    #[inline]
    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }

    #[inline]
    pub fn starting_temperature(&self) -> f64 {
        self.starting_temperature
    }

    #[inline]
    pub fn stop_temperature(&self) -> f64 {
        self.stop_temperature
    }

    #[inline]
    pub fn boltzmann_constant(&self) -> f64 {
        self.boltzmann
    }

    /// Outer iterations run by the last call to [`search`](Self::search).
    #[inline]
    pub fn iterations(&self) -> u64 {
        self.iteration
    }

    /// Runs the annealing process to completion. Minimizes.
    #[tracing::instrument(level = "debug", name = "sa_search", skip(self))]
    pub fn search(&mut self) {
        self.current_temperature = self.starting_temperature;
        self.iteration = 0;
        tracing::debug!(
            t_start = self.starting_temperature,
            t_stop = self.stop_temperature,
            k = self.boltzmann,
            "annealing started"
        );
        self.observers.on_search_start(self.working);

        while !self.termination.should_stop(self.working)
            && self.current_temperature > self.stop_temperature
        {
            self.iteration += 1;
            let base = self.working.cost();

            self.neighborhood.refresh(self.working);
            for m in self.neighborhood.moves() {
                let preview = m.evaluate(self.working);
                // An unrepresentable delta can only come from an absurd
                // cost range; treat it as an infinitely bad move.
                let delta = (preview - base).to_f64().unwrap_or(f64::INFINITY);
                let accepted = delta < 0.0
                    || self.rng.random::<f64>()
                        < acceptance_probability(delta, self.boltzmann, self.current_temperature);
                if accepted {
                    m.apply(self.working);
                    if self.recorder.accept(self.working) {
                        tracing::debug!(
                            iteration = self.iteration,
                            cost = %self.working.cost(),
                            "new incumbent"
                        );
                        self.observers.on_improvement_made(self.iteration, self.working);
                    }
                    self.observers.on_move_made(self.iteration, self.working);
                    break;
                }
            }

            let next = self
                .schedule
                .next_temperature(self.current_temperature, self.working);
            self.current_temperature = next.max(0.0);
        }

        self.observers.on_search_end(self.working);
        tracing::debug!(
            iterations = self.iteration,
            t_final = self.current_temperature,
            "annealing finished"
        );
    }
}
