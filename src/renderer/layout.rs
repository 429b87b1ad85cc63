//! Projection of sampled coordinates into screen space.

use crate::generator::point::Point;
use glam::Vec2;
use std::collections::BTreeMap;

/// Drawing surface size and the padding kept around the graph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Fraction of the data extent added on every side so nodes aren't clipped.
    pub margin: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            margin: 0.2,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Maps every position's first two coordinates into the viewport.
    ///
    /// The data box is scaled uniformly and centered, with y pointing up.
    pub fn project(&self, positions: &BTreeMap<usize, Point>) -> BTreeMap<usize, Vec2> {
        let planar: Vec<(usize, Vec2)> = positions
            .iter()
            .map(|(&index, p)| (index, p.xy().as_vec2()))
            .collect();

        let mut min = Vec2::INFINITY;
        let mut max = Vec2::NEG_INFINITY;
        for (_, p) in &planar {
            min = min.min(*p);
            max = max.max(*p);
        }

        // A single point or a line still needs a non-zero extent.
        let extent = (max - min).max(Vec2::ONE);
        let padded = extent * (1.0 + 2.0 * self.margin);
        let screen = Vec2::new(self.width as f32, self.height as f32);
        let scale = (screen / padded).min_element();
        let center = (min + max) / 2.0;

        planar
            .into_iter()
            .map(|(index, p)| {
                let offset = (p - center) * scale;
                (index, norm_pos(screen / 2.0 + offset, [self.width, self.height]))
            })
            .collect()
    }
}

/// Flip y so it points down and clamp into the viewport.
pub fn norm_pos(position: Vec2, boundary: [u32; 2]) -> Vec2 {
    let norm_width = position.x.clamp(0.0, boundary[0] as f32);
    let norm_height = (-position.y + boundary[1] as f32).clamp(0.0, boundary[1] as f32);
    Vec2::new(norm_width, norm_height)
}
