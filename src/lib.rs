//! Random geometric graphs: integer points sampled inside a region, joined
//! by an edge whenever two of them lie within a distance threshold.
//!
//! # Example
//! ```no_run
//!use rgg::prelude::*;
//!
//!let generator = Generator::builder()
//!    .vertices(75)
//!    .bounds(128)
//!    .region(Region::Disk { inner: 20.0, outer: 40.0 })
//!    .max_distance(10.0)
//!    .seed(2750)
//!    .build()?;
//!
//!let graph = generator.generate()?;
//!
//!let mut renderer = SvgRenderer::new(std::io::stdout());
//!renderer.render(&graph)?;
//!# Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod generator;
pub mod renderer;

/// Exports all the core types of the library.
pub mod prelude {
    pub use crate::error::{ConfigError, GenerateError, RenderError};
    pub use crate::generator::{
        assemble,
        edges::{build_edges, Edge, EdgeStrategy},
        point::{Point, Vertex},
        region::{classify, Classification, Region},
        sampler::PointSampler,
        GeometricGraph, Generator, GeneratorBuilder, DEFAULT_SEED,
    };
    pub use crate::renderer::{layout::Viewport, SvgRenderer, Visualizer};
}
