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

use locus_model::solution::EvaluableSolution;
use std::fmt;

/// Observer for high-level search lifecycle events.
///
/// All methods have default no-op implementations. Every callback gets a
/// read-only view of the working solution; the move-made and
/// improvement-made events additionally carry the outer iteration that
/// produced them. An acceptance that improves the recorded best raises
/// the improvement event first, then the move event.
pub trait SearchObserver<S: EvaluableSolution>: Send {
    /// A short identifier for logging and diagnostics.
    fn name(&self) -> &str {
        "SearchObserver"
    }

    fn on_search_start(&mut self, _solution: &S) {}
    fn on_search_end(&mut self, _solution: &S) {}

    fn on_move_made(&mut self, _iteration: u64, _solution: &S) {}
    fn on_improvement_made(&mut self, _iteration: u64, _solution: &S) {}
}

/// A no-op observer useful as default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl<S: EvaluableSolution> SearchObserver<S> for NullObserver {
    fn name(&self) -> &str {
        "NullObserver"
    }
}

/// An observer that forwards events to a list of boxed observers.
/// Useful to combine independent observers.
pub struct CompositeSearchObserver<S: EvaluableSolution> {
    observers: Vec<Box<dyn SearchObserver<S> + Send>>,
}

impl<S: EvaluableSolution> CompositeSearchObserver<S> {
    #[inline]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Chain-builder: add an observer and return self.
    #[inline]
    pub fn with<O: SearchObserver<S> + Send + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Push an observer into the composite.
    #[inline]
    pub fn push<O: SearchObserver<S> + Send + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the number of inner observers.
    #[inline]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true when there are no inner observers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<S: EvaluableSolution> Default for CompositeSearchObserver<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EvaluableSolution> SearchObserver<S> for CompositeSearchObserver<S> {
    fn name(&self) -> &str {
        "CompositeSearchObserver"
    }

    fn on_search_start(&mut self, solution: &S) {
        for o in &mut self.observers {
            o.on_search_start(solution);
        }
    }

    fn on_search_end(&mut self, solution: &S) {
        for o in &mut self.observers {
            o.on_search_end(solution);
        }
    }

    fn on_move_made(&mut self, iteration: u64, solution: &S) {
        for o in &mut self.observers {
            o.on_move_made(iteration, solution);
        }
    }

    fn on_improvement_made(&mut self, iteration: u64, solution: &S) {
        for o in &mut self.observers {
            o.on_improvement_made(iteration, solution);
        }
    }
}

impl<S: EvaluableSolution> fmt::Debug for CompositeSearchObserver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeSearchObserver")
            .field("len", &self.observers.len())
            .finish()
    }
}

/// Implement pretty printing for trait objects with any lifetime.
/// This avoids requiring concrete types at call sites for logging/diagnostics.
impl<'a, S: EvaluableSolution> fmt::Debug for dyn SearchObserver<S> + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchObserver({})", self.name())
    }
}

impl<'a, S: EvaluableSolution> fmt::Display for dyn SearchObserver<S> + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchObserver({})", self.name())
    }
}
