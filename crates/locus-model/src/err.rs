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

/// A neighborhood generator was asked to cover a problem too small to
/// have any moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeighborhoodSizeError {
    size: usize,
}

impl NeighborhoodSizeError {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl std::fmt::Display for NeighborhoodSizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Neighborhoods require a problem size of at least 2, got {}",
            self.size
        )
    }
}

impl std::error::Error for NeighborhoodSizeError {}

/// Raised by strategies that need a non-empty neighborhood and found
/// none. The simulated annealing driver tolerates empty neighborhoods
/// (it rejects everything and keeps cooling); greedier strategies must
/// surface this instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoMovesError;

impl NoMovesError {
    pub fn new() -> Self {
        Self
    }
}

impl std::fmt::Display for NoMovesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There are no more available moves")
    }
}

impl std::error::Error for NoMovesError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NeighborhoodError {
    InvalidSize(NeighborhoodSizeError),
    NoMoves(NoMovesError),
}

impl std::fmt::Display for NeighborhoodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NeighborhoodError::InvalidSize(e) => write!(f, "{}", e),
            NeighborhoodError::NoMoves(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for NeighborhoodError {}

impl From<NeighborhoodSizeError> for NeighborhoodError {
    fn from(err: NeighborhoodSizeError) -> Self {
        NeighborhoodError::InvalidSize(err)
    }
}

impl From<NoMovesError> for NeighborhoodError {
    fn from(err: NoMovesError) -> Self {
        NeighborhoodError::NoMoves(err)
    }
}
