//! Drawing generated graphs.
//!
//! Rendering is kept behind the [`Visualizer`] trait so the generator never
//! depends on a drawing backend. [`SvgRenderer`] is the bundled backend.

pub mod layout;

use crate::error::RenderError;
use crate::generator::GeometricGraph;
use layout::Viewport;
use log::debug;
use std::io::Write;

/// Something that can present a [`GeometricGraph`].
pub trait Visualizer {
    fn render(&mut self, graph: &GeometricGraph) -> Result<(), RenderError>;
}

/// Writes a graph as a standalone SVG document: nodes at their projected
/// positions, straight edges, no axes.
pub struct SvgRenderer<W: Write> {
    out: W,
    viewport: Viewport,
    node_radius: f32,
    labels: bool,
}

impl<W: Write> SvgRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            viewport: Viewport::default(),
            node_radius: 8.0,
            labels: true,
        }
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn node_radius(mut self, node_radius: f32) -> Self {
        self.node_radius = node_radius;
        self
    }

    /// Draw each vertex index inside its node.
    pub fn labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Visualizer for SvgRenderer<W> {
    fn render(&mut self, graph: &GeometricGraph) -> Result<(), RenderError> {
        let screen = self.viewport.project(graph.positions());
        let Viewport { width, height, .. } = self.viewport;

        writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(self.out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

        writeln!(self.out, r#"<g stroke="black" stroke-width="1">"#)?;
        for (i, j) in graph.edges() {
            let a = screen.get(&i).ok_or(RenderError::MissingPosition(i))?;
            let b = screen.get(&j).ok_or(RenderError::MissingPosition(j))?;
            writeln!(
                self.out,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                a.x, a.y, b.x, b.y
            )?;
        }
        writeln!(self.out, "</g>")?;

        writeln!(self.out, r##"<g fill="#1f78b4">"##)?;
        for (index, p) in &screen {
            writeln!(
                self.out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}"><title>{}</title></circle>"#,
                p.x,
                p.y,
                self.node_radius,
                graph
                    .position(*index)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            )?;
        }
        writeln!(self.out, "</g>")?;

        if self.labels {
            let font_size = self.node_radius;
            writeln!(
                self.out,
                r#"<g font-family="sans-serif" font-size="{font_size}" text-anchor="middle" dominant-baseline="central">"#
            )?;
            for (index, p) in &screen {
                writeln!(
                    self.out,
                    r#"<text x="{:.2}" y="{:.2}">{index}</text>"#,
                    p.x, p.y
                )?;
            }
            writeln!(self.out, "</g>")?;
        }

        writeln!(self.out, "</svg>")?;
        self.out.flush()?;

        debug!(
            "Rendered {0} nodes and {1} edges to SVG",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(())
    }
}
