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

use crate::engine::err::CoolingParameterError;
use locus_model::solution::EvaluableSolution;

/// Annealing schedule: decides the next temperature once per outer
/// search iteration. The working solution is passed along so adaptive
/// schedules can react to the search state.
pub trait CoolingSchedule<S: EvaluableSolution> {
    /// A short identifier for logging and diagnostics.
    fn name(&self) -> &str {
        "CoolingSchedule"
    }

    /// The temperature to use for the next iteration.
    fn next_temperature(&mut self, temperature: f64, solution: &S) -> f64;
}

/// Geometric cooling, T' = α·T with 0 < α < 1. The schedule originally
/// proposed by Kirkpatrick; typical factors sit in 0.9..0.99.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialCooling {
    factor: f64,
}

impl ExponentialCooling {
    pub fn new(alpha: f64) -> Result<Self, CoolingParameterError> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(CoolingParameterError::new("alpha", alpha));
        }
        Ok(Self { factor: alpha })
    }

    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl<S: EvaluableSolution> CoolingSchedule<S> for ExponentialCooling {
    fn name(&self) -> &str {
        "ExponentialCooling"
    }

    #[inline]
    fn next_temperature(&mut self, temperature: f64, _solution: &S) -> f64 {
        temperature * self.factor
    }
}

/// Linear cooling, T' = max(0, T − δ) with δ > 0, after Randelman and
/// Grest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCooling {
    decrement: f64,
}

impl LinearCooling {
    pub fn new(delta: f64) -> Result<Self, CoolingParameterError> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(CoolingParameterError::new("delta", delta));
        }
        Ok(Self { decrement: delta })
    }

    #[inline]
    pub fn decrement(&self) -> f64 {
        self.decrement
    }
}

impl<S: EvaluableSolution> CoolingSchedule<S> for LinearCooling {
    fn name(&self) -> &str {
        "LinearCooling"
    }

    #[inline]
    fn next_temperature(&mut self, temperature: f64, _solution: &S) -> f64 {
        (temperature - self.decrement).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
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
    fn exponential_rejects_factors_outside_the_open_unit_interval() {
        for alpha in [1.0, 1.5, 0.0, -0.3, f64::NAN, f64::INFINITY] {
            let err = ExponentialCooling::new(alpha).unwrap_err();
            assert_eq!(err.parameter(), "alpha");
        }
        assert!(ExponentialCooling::new(0.95).is_ok());
    }

    #[test]
    fn linear_rejects_non_positive_decrements() {
        for delta in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = LinearCooling::new(delta).unwrap_err();
            assert_eq!(err.parameter(), "delta");
        }
        assert!(LinearCooling::new(0.1).is_ok());
    }

    #[test]
    fn exponential_strictly_lowers_positive_temperatures() {
        let sol = Scripted { cost: 0.0 };
        let mut schedule = ExponentialCooling::new(0.9).expect("valid alpha");
        let mut t = 10.0;
        for _ in 0..100 {
            let next = schedule.next_temperature(t, &sol);
            assert!(next < t);
            assert!(next >= 0.0);
            t = next;
        }
        assert!((t - 10.0 * 0.9f64.powi(100)).abs() < 1e-12);
    }

    #[test]
    fn linear_subtracts_and_clamps_at_zero() {
        let sol = Scripted { cost: 0.0 };
        let mut schedule = LinearCooling::new(4.0).expect("valid delta");
        assert_eq!(schedule.next_temperature(10.0, &sol), 6.0);
        assert_eq!(schedule.next_temperature(3.0, &sol), 0.0);
        assert_eq!(schedule.next_temperature(0.0, &sol), 0.0);
    }

    #[test]
    fn schedules_report_their_names() {
        let exp = ExponentialCooling::new(0.5).expect("valid alpha");
        assert_eq!(CoolingSchedule::<Scripted>::name(&exp), "ExponentialCooling");
        let lin = LinearCooling::new(0.5).expect("valid delta");
        assert_eq!(CoolingSchedule::<Scripted>::name(&lin), "LinearCooling");
    }
}
