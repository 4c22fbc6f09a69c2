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

use criterion::{Criterion, criterion_group, criterion_main};
use locus_model::prelude::*;
use locus_solver::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Minimize sum over i of i * pi[i]; the optimum is the reversed
/// ordering.
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

fn bench_full_swap_search(c: &mut Criterion) {
    let n = 32;
    c.bench_function("sa_full_swap_n32", |b| {
        b.iter(|| {
            let mut working = WeightedOrdering::new(n);
            random_shuffle(&mut working, &mut ChaCha8Rng::seed_from_u64(1));
            let mut recorder = BestEverRecorder::new(working.clone());
            let mut neighborhood = FullSwapNeighborhood::new(n).expect("valid size");
            let mut termination = IterationCap::new(250);
            let mut schedule = ExponentialCooling::new(0.95).expect("valid alpha");

            let mut search = SimulatedAnnealing::new(
                &mut working,
                &mut recorder,
                &mut neighborhood,
                &mut termination,
                &mut schedule,
                ChaCha8Rng::seed_from_u64(2),
                50.0,
            );
            search.search();
            black_box(recorder.best_cost())
        })
    });
}

fn bench_stochastic_swap_search(c: &mut Criterion) {
    let n = 64;
    c.bench_function("sa_stochastic_swap_n64", |b| {
        b.iter(|| {
            let mut working = WeightedOrdering::new(n);
            random_shuffle(&mut working, &mut ChaCha8Rng::seed_from_u64(3));
            let mut recorder = BestEverRecorder::new(working.clone());
            let mut neighborhood =
                StochasticSwapNeighborhood::new(ChaCha8Rng::seed_from_u64(4), 48);
            let mut termination = IterationCap::new(500);
            let mut schedule = ExponentialCooling::new(0.97).expect("valid alpha");

            let mut search = SimulatedAnnealing::new(
                &mut working,
                &mut recorder,
                &mut neighborhood,
                &mut termination,
                &mut schedule,
                ChaCha8Rng::seed_from_u64(5),
                50.0,
            );
            search.search();
            black_box(recorder.best_cost())
        })
    });
}

criterion_group!(benches, bench_full_swap_search, bench_stochastic_swap_search);
criterion_main!(benches);
