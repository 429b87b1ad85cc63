//! Rejection sampling of integer points inside a [`Region`].

use super::point::{Point, Vertex};
use super::region::{classify, Classification, Region};
use crate::error::{ConfigError, GenerateError, Result};
use log::{debug, warn};
use rand::Rng;

/// Acceptance rates below this trigger a warning before sampling starts.
const LOW_ACCEPTANCE: f64 = 0.01;

/// Draws uniformly distributed integer points from the box
/// `[-bounds/2, bounds/2]^dim` and keeps those inside the region.
#[derive(Clone, Debug)]
pub struct PointSampler {
    half_extent: i64,
    dim: usize,
    region: Region,
    max_attempts: Option<u64>,
}

impl PointSampler {
    /// Creates a sampler, rejecting any configuration that cannot be sampled.
    pub fn new(bounds: i64, dim: usize, region: Region) -> std::result::Result<Self, ConfigError> {
        if bounds <= 0 {
            return Err(ConfigError::invalid(
                "bounds",
                format!("{bounds} must be positive"),
            ));
        }
        if dim == 0 {
            return Err(ConfigError::invalid("dimension", "must be at least 1"));
        }
        region.validate(dim)?;

        Ok(Self {
            half_extent: bounds.div_euclid(2),
            dim,
            region,
            max_attempts: None,
        })
    }

    /// Give up with [`GenerateError::AttemptsExhausted`] after `max_attempts`
    /// candidates instead of sampling forever.
    ///
    /// `None` keeps sampling until enough points are accepted.
    pub fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Rough fraction of candidates expected to be accepted, for planar regions.
    pub fn acceptance_estimate(&self) -> Option<f64> {
        if self.dim != 2 {
            return None;
        }
        let side = (2 * self.half_extent + 1) as f64;
        self.region.area().map(|area| (area / (side * side)).min(1.0))
    }

    /// Draws a single candidate point.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let coords: Vec<i64> = (0..self.dim)
            .map(|_| rng.gen_range(-self.half_extent..=self.half_extent))
            .collect();
        Point::from(coords)
    }

    /// Samples until `n` points are accepted.
    ///
    /// Vertices are indexed in acceptance order starting at zero. Without an
    /// attempt cap this only returns once enough points are found, which can
    /// take arbitrarily long for regions covering little of the sampling box.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<Vertex>> {
        if let Some(rate) = self.acceptance_estimate() {
            if rate < LOW_ACCEPTANCE {
                warn!(
                    "Region {0} covers about {1:.4}% of the sampling box, sampling may be slow",
                    self.region,
                    rate * 100.0
                );
            }
        }

        let mut vertices = Vec::with_capacity(n);
        let mut attempts: u64 = 0;

        while vertices.len() < n {
            if self.max_attempts.is_some_and(|cap| attempts >= cap) {
                return Err(GenerateError::AttemptsExhausted {
                    accepted: vertices.len(),
                    requested: n,
                    attempts,
                });
            }
            attempts += 1;

            let candidate = self.draw(rng);
            match classify(&candidate, &self.region)? {
                Classification::Accept => vertices.push(Vertex::new(vertices.len(), candidate)),
                Classification::Reject => {}
            }
        }

        if attempts > 0 {
            debug!(
                "Accepted {0} of {1} candidates ({2:.1}%) in {3}",
                n,
                attempts,
                n as f64 / attempts as f64 * 100.0,
                self.region
            );
        }
        Ok(vertices)
    }
}
