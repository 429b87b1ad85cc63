//! Sampled points and the vertices built from them.

use glam::DVec2;
use std::fmt;

/// An integer coordinate tuple. Immutable once sampled.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point(Box<[i64]>);

impl Point {
    pub fn new(coords: impl Into<Box<[i64]>>) -> Self {
        Self(coords.into())
    }

    pub fn coords(&self) -> &[i64] {
        &self.0
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Euclidean distance from the origin over every coordinate.
    pub fn norm(&self) -> f64 {
        self.0
            .iter()
            .map(|&c| (c as f64) * (c as f64))
            .sum::<f64>()
            .sqrt()
    }

    /// Projection onto the plane of the first two coordinates.
    ///
    /// One-dimensional points lie on the x axis.
    pub fn xy(&self) -> DVec2 {
        let x = self.0.first().copied().unwrap_or(0) as f64;
        let y = self.0.get(1).copied().unwrap_or(0) as f64;
        DVec2::new(x, y)
    }
}

impl From<Vec<i64>> for Point {
    fn from(coords: Vec<i64>) -> Self {
        Self(coords.into_boxed_slice())
    }
}

impl<const N: usize> From<[i64; N]> for Point {
    fn from(coords: [i64; N]) -> Self {
        Self(Box::new(coords))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

/// An accepted point together with its dense, zero-based index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
    pub index: usize,
    pub position: Point,
}

impl Vertex {
    pub fn new(index: usize, position: Point) -> Self {
        Self { index, position }
    }
}
