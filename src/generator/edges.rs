//! Distance-threshold edge construction.
//!
//! Distances are measured in the plane of the first two coordinates,
//! whatever the dimension of the sampled points.

use super::point::Vertex;
use glam::{DVec2, I64Vec2};
use std::collections::HashMap;

/// An undirected edge between two vertex indices, `source < target`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub length: f64,
}

/// How candidate pairs are enumerated. Both produce the same edges in the
/// same order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EdgeStrategy {
    /// Compare every pair, `n^2 / 2` distance checks.
    #[default]
    BruteForce,
    /// Hash vertices into a grid of `max_dist` sized cells and only compare
    /// vertices in neighbouring cells.
    Bucketed,
}

/// Connects every pair of vertices whose planar distance is at most `max_dist`.
pub fn build_edges(vertices: &[Vertex], max_dist: f64, strategy: EdgeStrategy) -> Vec<Edge> {
    match strategy {
        EdgeStrategy::BruteForce => build_edges_brute_force(vertices, max_dist),
        EdgeStrategy::Bucketed => build_edges_bucketed(vertices, max_dist),
    }
}

pub fn build_edges_brute_force(vertices: &[Vertex], max_dist: f64) -> Vec<Edge> {
    let planar: Vec<DVec2> = vertices.iter().map(|v| v.position.xy()).collect();
    let mut edges = Vec::new();

    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            let length = planar[i].distance(planar[j]);
            if length <= max_dist {
                edges.push(Edge {
                    source: vertices[i].index,
                    target: vertices[j].index,
                    length,
                });
            }
        }
    }
    edges
}

pub fn build_edges_bucketed(vertices: &[Vertex], max_dist: f64) -> Vec<Edge> {
    // Tiny or degenerate thresholds would explode the cell count.
    if !(max_dist >= 1.0) || !max_dist.is_finite() {
        return build_edges_brute_force(vertices, max_dist);
    }

    let planar: Vec<DVec2> = vertices.iter().map(|v| v.position.xy()).collect();
    // Float to int casts saturate, so far away points share the outermost cell.
    let cell_of = |p: DVec2| -> I64Vec2 { (p / max_dist).floor().as_i64vec2() };

    let mut cells: HashMap<I64Vec2, Vec<usize>> = HashMap::new();
    for (slot, p) in planar.iter().enumerate() {
        cells.entry(cell_of(*p)).or_default().push(slot);
    }

    let mut pairs: Vec<(usize, usize, f64)> = Vec::new();
    for (i, p) in planar.iter().enumerate() {
        let cell = cell_of(*p);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let (Some(x), Some(y)) = (cell.x.checked_add(dx), cell.y.checked_add(dy)) else {
                    continue;
                };
                let Some(bucket) = cells.get(&I64Vec2::new(x, y)) else {
                    continue;
                };
                for &j in bucket.iter().filter(|&&j| j > i) {
                    let length = p.distance(planar[j]);
                    if length <= max_dist {
                        pairs.push((i, j, length));
                    }
                }
            }
        }
    }

    // Match the brute force iteration order.
    pairs.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    pairs
        .into_iter()
        .map(|(i, j, length)| Edge {
            source: vertices[i].index,
            target: vertices[j].index,
            length,
        })
        .collect()
}
