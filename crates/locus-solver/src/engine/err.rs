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

/// A cooling schedule was constructed with a parameter outside its
/// valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingParameterError {
    parameter: &'static str,
    value: f64,
}

impl CoolingParameterError {
    pub fn new(parameter: &'static str, value: f64) -> Self {
        Self { parameter, value }
    }

    pub fn parameter(&self) -> &'static str {
        self.parameter
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl std::fmt::Display for CoolingParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid cooling parameter {} = {}",
            self.parameter, self.value
        )
    }
}

impl std::error::Error for CoolingParameterError {}
