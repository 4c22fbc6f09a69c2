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

use num_traits::{Bounded, ToPrimitive, Zero};
use std::fmt::{Debug, Display};
use std::ops::{Add, Sub};

/// Scalar objective value to be minimized.
///
/// Everything the search machinery needs from a cost scalar: copyable,
/// ordered, closed under addition and subtraction (incremental cost
/// updates are sums of deltas), convertible to `f64` for the Metropolis
/// test, and bounded from above so `max_value` can stand in for an
/// "unreached" best.
///
/// Blanket-implemented, so `f64` works out of the box and problems with
/// exact integer objectives can use `i32`/`i64` instead.
pub trait CostValue:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Zero
    + Bounded
    + ToPrimitive
    + Debug
    + Display
    + Send
    + 'static
{
    /// The sentinel for "no cost recorded yet". Any real cost compares
    /// strictly below it.
    #[inline]
    fn unbounded() -> Self {
        Self::max_value()
    }
}

impl<T> CostValue for T where
    T: Copy
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Zero
        + Bounded
        + ToPrimitive
        + Debug
        + Display
        + Send
        + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cost_value<C: CostValue>() {}

    #[test]
    fn common_scalars_are_cost_values() {
        assert_cost_value::<f64>();
        assert_cost_value::<f32>();
        assert_cost_value::<i64>();
        assert_cost_value::<i32>();
    }

    #[test]
    fn unbounded_dominates_real_costs() {
        assert!(1e300 < f64::unbounded());
        assert!(i64::MAX - 1 < i64::unbounded());
        assert!(f64::zero() < f64::unbounded());
    }

    #[test]
    fn deltas_convert_to_f64() {
        let d: i64 = 7 - 12;
        assert_eq!(d.to_f64(), Some(-5.0));
        let d: f64 = 0.5 - 0.25;
        assert_eq!(d.to_f64(), Some(0.25));
    }
}
