//! A path: one turn's full sequence of squares.

use std::fmt;
use std::ops::Index;

use crate::square::Square;

/// An ordered sequence of at least two squares: the moving piece's starting
/// square followed by each landing square in turn.
///
/// A path is either a single ordinary diagonal step or a chain of one or
/// more jumps, never a mix. Paths are proposals until executed; the
/// generator returns every candidate and the caller commits exactly one.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<Square>);

impl Path {
    /// Create a path from a square sequence.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the sequence has at least two squares.
    pub fn new(squares: Vec<Square>) -> Path {
        debug_assert!(squares.len() >= 2, "a path needs a start and a landing");
        Path(squares)
    }

    /// Return the square the piece occupies at the start of the turn.
    #[inline]
    pub fn origin(&self) -> Square {
        self.0[0]
    }

    /// Return the square the piece ends the turn on.
    #[inline]
    pub fn destination(&self) -> Square {
        self.0[self.0.len() - 1]
    }

    /// Return the full square sequence, origin first.
    #[inline]
    pub fn squares(&self) -> &[Square] {
        &self.0
    }

    /// Return the number of squares in the path (always >= 2).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a path holds at least its origin and one landing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return `true` if this path is a capture chain (every step a jump).
    ///
    /// Steps within one path are all jumps or all ordinary, so inspecting
    /// the first step suffices.
    pub fn is_capture(&self) -> bool {
        self.0[0].row().abs_diff(self.0[1].row()) == 2
    }
}

impl Index<usize> for Path {
    type Output = Square;

    #[inline]
    fn index(&self, index: usize) -> &Square {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({})", self)
    }
}
