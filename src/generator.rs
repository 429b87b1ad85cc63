pub mod edges;
pub mod point;
pub mod region;
pub mod sampler;

use crate::error::{ConfigError, Result};
use edges::{build_edges, Edge, EdgeStrategy};
use log::info;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use point::{Point, Vertex};
use rand::{rngs::StdRng, Rng, SeedableRng};
use region::Region;
use sampler::PointSampler;
use std::collections::BTreeMap;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 2750;

/// Samples `n` points inside `region` and connects every pair within `max_dist`.
///
/// Any configuration error is returned before a single point is drawn.
pub fn assemble<R: Rng + ?Sized>(
    n: usize,
    bounds: i64,
    dim: usize,
    region: Region,
    max_dist: f64,
    rng: &mut R,
) -> Result<GeometricGraph> {
    GeneratorBuilder::new()
        .vertices(n)
        .bounds(bounds)
        .dimensions(dim)
        .region(region)
        .max_distance(max_dist)
        .build()?
        .generate_with(rng)
}

/// A sampled graph: vertices `0..n`, their positions and the distance edges.
///
/// Node `k` of [`GeometricGraph::graph`] has weight `k`, so vertex indices and
/// `NodeIndex` values coincide. Edge weights are the planar pair distances.
#[derive(Clone, Debug)]
pub struct GeometricGraph {
    graph: UnGraph<usize, f64>,
    positions: BTreeMap<usize, Point>,
}

impl GeometricGraph {
    /// Builds a graph from sampled vertices and their edges.
    ///
    /// Vertex indices must be exactly `0..n` in order, and every edge must
    /// join two distinct existing vertices.
    pub fn from_parts(
        vertices: Vec<Vertex>,
        edges: &[Edge],
    ) -> std::result::Result<Self, ConfigError> {
        let n = vertices.len();
        let mut graph = UnGraph::<usize, f64>::with_capacity(n, edges.len());
        let mut positions = BTreeMap::new();

        for (expected, vertex) in vertices.into_iter().enumerate() {
            if vertex.index != expected {
                return Err(ConfigError::invalid(
                    "vertices",
                    format!("found index {} at position {expected}", vertex.index),
                ));
            }
            graph.add_node(vertex.index);
            positions.insert(vertex.index, vertex.position);
        }
        for edge in edges {
            if edge.source >= n || edge.target >= n || edge.source == edge.target {
                return Err(ConfigError::invalid(
                    "edges",
                    format!(
                        "({}, {}) does not join two of the {n} vertices",
                        edge.source, edge.target
                    ),
                ));
            }
            graph.add_edge(
                NodeIndex::new(edge.source),
                NodeIndex::new(edge.target),
                edge.length,
            );
        }

        Ok(Self { graph, positions })
    }

    pub fn graph(&self) -> &UnGraph<usize, f64> {
        &self.graph
    }

    /// Vertex index to sampled coordinates.
    pub fn positions(&self) -> &BTreeMap<usize, Point> {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<&Point> {
        self.positions.get(&index)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Edges as `(i, j)` index pairs with `i < j`, in construction order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph.edge_references().map(|e| {
            let (a, b) = (e.source().index(), e.target().index());
            (a.min(b), a.max(b))
        })
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        if i >= self.vertex_count() || j >= self.vertex_count() {
            return false;
        }
        self.graph
            .find_edge(NodeIndex::new(i), NodeIndex::new(j))
            .is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    pub fn into_parts(self) -> (UnGraph<usize, f64>, BTreeMap<usize, Point>) {
        (self.graph, self.positions)
    }
}

/// A validated generation run. Create one with [`GeneratorBuilder`].
#[derive(Clone, Debug)]
pub struct Generator {
    vertices: usize,
    max_distance: f64,
    seed: u64,
    edge_strategy: EdgeStrategy,
    sampler: PointSampler,
}

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn sampler(&self) -> &PointSampler {
        &self.sampler
    }

    /// Generates a graph from a fresh random source seeded with the configured seed.
    ///
    /// Repeated calls return identical graphs.
    pub fn generate(&self) -> Result<GeometricGraph> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    /// Generates a graph drawing from `rng`, which is left advanced past
    /// every candidate that was drawn.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeometricGraph> {
        info!(
            "Generating {0} vertices in {1} ({2}D), max edge distance {3}",
            self.vertices,
            self.sampler.region(),
            self.sampler.dim(),
            self.max_distance
        );

        let vertices = self.sampler.sample(self.vertices, rng)?;
        let edges = build_edges(&vertices, self.max_distance, self.edge_strategy);
        let graph = GeometricGraph::from_parts(vertices, &edges)?;

        info!(
            "Generated graph with {0} vertices and {1} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// Builder for `Generator`
#[derive(Clone, Debug)]
pub struct GeneratorBuilder {
    vertices: usize,
    bounds: i64,
    dimensions: usize,
    max_distance: f64,
    region: Region,
    seed: u64,
    max_attempts: Option<u64>,
    edge_strategy: EdgeStrategy,
}

impl GeneratorBuilder {
    /// Get a Instance of `GeneratorBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices to sample.
    ///
    /// Default: `75`
    pub fn vertices(mut self, vertices: usize) -> Self {
        self.vertices = vertices;
        self
    }

    /// Width of the sampling box. Coordinates are drawn from
    /// `[-bounds/2, bounds/2]`, rounding the half width down.
    ///
    /// Default: `128`
    pub fn bounds(mut self, bounds: i64) -> Self {
        self.bounds = bounds;
        self
    }

    /// Number of coordinates per point.
    ///
    /// Default: `2`
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Vertices at most this far apart get an edge.
    ///
    /// Default: `10.0`
    pub fn max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Region sampled points must fall into.
    ///
    /// Default: `Disk { inner: 20.0, outer: 40.0 }`
    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Seed for [`Generator::generate`].
    ///
    /// Default: `2750`
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Stop sampling with an error after this many candidates.
    /// `None` samples until enough points are accepted.
    ///
    /// Default: `None`
    pub fn max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Default: [`EdgeStrategy::BruteForce`]
    pub fn edge_strategy(mut self, edge_strategy: EdgeStrategy) -> Self {
        self.edge_strategy = edge_strategy;
        self
    }

    /// Validates the configuration and constructs a `Generator`.
    pub fn build(self) -> std::result::Result<Generator, ConfigError> {
        if self.max_distance.is_nan() || self.max_distance < 0.0 {
            return Err(ConfigError::invalid(
                "max distance",
                format!("{} must be zero or more", self.max_distance),
            ));
        }
        let sampler = PointSampler::new(self.bounds, self.dimensions, self.region)?
            .with_max_attempts(self.max_attempts);

        Ok(Generator {
            vertices: self.vertices,
            max_distance: self.max_distance,
            seed: self.seed,
            edge_strategy: self.edge_strategy,
            sampler,
        })
    }
}

impl Default for GeneratorBuilder {
    /// The demonstration graph: 75 vertices on a ring of radius 20 to 40.
    fn default() -> Self {
        Self {
            vertices: 75,
            bounds: 128,
            dimensions: 2,
            max_distance: 10.0,
            region: Region::Disk {
                inner: 20.0,
                outer: 40.0,
            },
            seed: DEFAULT_SEED,
            max_attempts: None,
            edge_strategy: EdgeStrategy::BruteForce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;

    #[test]
    fn demo_defaults_generate() {
        let graph = Generator::builder().build().unwrap().generate().unwrap();
        assert_eq!(graph.vertex_count(), 75);
        for p in graph.positions().values() {
            assert!((20.0..=40.0).contains(&p.norm()));
        }
    }

    #[test]
    fn generate_is_repeatable() {
        let generator = Generator::builder().seed(11).build().unwrap();
        let a = generator.generate().unwrap();
        let b = generator.generate().unwrap();
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
    }

    #[test]
    fn positions_cover_every_vertex() {
        let graph = Generator::builder()
            .vertices(20)
            .max_distance(0.0)
            .build()
            .unwrap()
            .generate()
            .unwrap();
        assert_eq!(graph.vertex_count(), 20);
        assert_eq!(
            graph.positions().keys().copied().collect::<Vec<_>>(),
            (0..20).collect::<Vec<_>>()
        );
        for node in graph.graph().node_indices() {
            assert_eq!(graph.graph()[node], node.index());
        }
    }

    #[test]
    fn negative_max_distance_is_rejected() {
        assert!(matches!(
            Generator::builder().max_distance(-1.0).build(),
            Err(ConfigError::InvalidParameter { parameter: "max distance", .. })
        ));
    }

    #[test]
    fn assemble_propagates_region_errors() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = assemble(5, 10, 3, Region::Custom, 1.0, &mut rng).unwrap_err();
        assert_eq!(err, GenerateError::Config(ConfigError::Unimplemented("custom")));
    }

    #[test]
    fn has_edge_is_symmetric() {
        let graph = GeometricGraph::from_parts(
            vec![
                Vertex::new(0, Point::from([0, 0])),
                Vertex::new(1, Point::from([1, 0])),
                Vertex::new(2, Point::from([9, 9])),
            ],
            &[Edge {
                source: 0,
                target: 1,
                length: 1.0,
            }],
        )
        .unwrap();
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
        assert!(!graph.has_edge(0, 2));
        assert!(!graph.has_edge(0, 7));
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn from_parts_rejects_sparse_indices() {
        let err = GeometricGraph::from_parts(
            vec![
                Vertex::new(5, Point::from([0, 0])),
                Vertex::new(9, Point::from([1, 0])),
            ],
            &[Edge {
                source: 5,
                target: 9,
                length: 1.0,
            }],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter { parameter: "vertices", .. }
        ));
    }

    #[test]
    fn from_parts_rejects_dangling_and_looping_edges() {
        let vertices = || {
            vec![
                Vertex::new(0, Point::from([0, 0])),
                Vertex::new(1, Point::from([1, 0])),
            ]
        };
        for (source, target) in [(0, 2), (3, 1), (1, 1)] {
            let err = GeometricGraph::from_parts(
                vertices(),
                &[Edge {
                    source,
                    target,
                    length: 1.0,
                }],
            )
            .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidParameter { parameter: "edges", .. }),
                "({source}, {target})"
            );
        }
    }
}
