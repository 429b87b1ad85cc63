use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rgg::prelude::*;

/// With no positional arguments the demonstration graph is generated:
/// 75 vertices in a 128 wide box on a disk of radius 20 to 40, max distance 10.
#[derive(Parser, Debug)]
#[command(name = "rgg")]
#[command(about = "Generate a random geometric graph and draw it as SVG")]
struct Cli {
    /// Number of vertices
    #[arg(requires_all = ["bounds", "dim", "max_dist", "region"])]
    n: Option<usize>,
    /// Width of the integer sampling box
    bounds: Option<i64>,
    /// Dimension of the sampled points
    dim: Option<usize>,
    /// Maximum distance between two connected vertices
    max_dist: Option<f64>,
    /// One of: circle, rect, disk, nbox, custom
    region: Option<String>,
    /// Region measures: radius for circle, two values otherwise
    #[arg(allow_negative_numbers = true)]
    region_args: Vec<f64>,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Fail after this many sampled candidates instead of sampling forever
    #[arg(long)]
    max_attempts: Option<u64>,
    /// Use grid buckets for edge construction
    #[arg(long)]
    bucketed: bool,
    /// Write the SVG here instead of stdout
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Print vertices and edges as text instead of drawing
    #[arg(long)]
    summary: bool,
}

impl Cli {
    fn generator(&self) -> Result<Generator> {
        let mut builder = Generator::builder()
            .seed(self.seed)
            .max_attempts(self.max_attempts)
            .edge_strategy(if self.bucketed {
                EdgeStrategy::Bucketed
            } else {
                EdgeStrategy::BruteForce
            });

        if let (Some(n), Some(bounds), Some(dim), Some(max_dist), Some(region)) =
            (self.n, self.bounds, self.dim, self.max_dist, &self.region)
        {
            builder = builder
                .vertices(n)
                .bounds(bounds)
                .dimensions(dim)
                .max_distance(max_dist)
                .region(Region::from_tag(region, &self.region_args)?);
        } else {
            info!("No arguments given, generating the demonstration graph");
        }

        Ok(builder.build()?)
    }
}

fn write_summary(graph: &GeometricGraph, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "vertices: {}", graph.vertex_count())?;
    for (index, point) in graph.positions() {
        writeln!(out, "  {index}: {point}")?;
    }
    writeln!(out, "edges: {}", graph.edge_count())?;
    for (i, j) in graph.edges() {
        writeln!(out, "  {i} -- {j}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let graph = cli
        .generator()?
        .generate()
        .context("graph generation failed")?;

    if cli.summary {
        let stdout = io::stdout();
        write_summary(&graph, &mut stdout.lock())?;
        return Ok(());
    }

    match &cli.svg {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            SvgRenderer::new(BufWriter::new(file)).render(&graph)?;
            info!("Wrote {}", path.display());
        }
        None => SvgRenderer::new(io::stdout().lock()).render(&graph)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("rgg").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments_runs_demonstration() {
        let generator = parse(&[]).unwrap().generator().unwrap();
        assert_eq!(generator.seed(), DEFAULT_SEED);
        assert_eq!(
            generator.sampler().region(),
            &Region::Disk {
                inner: 20.0,
                outer: 40.0
            }
        );
        assert_eq!(generator.generate().unwrap().vertex_count(), 75);
    }

    #[test]
    fn positionals_map_to_generator() {
        let cli = parse(&["4", "10", "2", "100", "rect", "10", "10", "--seed", "3"]).unwrap();
        let generator = cli.generator().unwrap();
        assert_eq!(generator.seed(), 3);
        assert_eq!(
            generator.sampler().region(),
            &Region::Rectangle {
                length: 10.0,
                width: 10.0
            }
        );

        let graph = generator.generate().unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn circle_takes_a_single_radius() {
        let cli = parse(&["5", "32", "3", "4", "circle", "8"]).unwrap();
        assert_eq!(
            cli.generator().unwrap().sampler().region(),
            &Region::Circle { radius: 8.0 }
        );

        let cli = parse(&["5", "32", "2", "4", "circle", "8", "9"]).unwrap();
        assert!(cli.generator().is_err());
    }

    #[test]
    fn region_errors_surface_from_cli() {
        let cli = parse(&["5", "128", "2", "10", "disk", "40", "20"]).unwrap();
        assert!(cli.generator().is_err());

        let cli = parse(&["5", "128", "2", "10", "hexagon", "1", "2"]).unwrap();
        assert!(cli.generator().is_err());
    }

    #[test]
    fn malformed_arguments_fail_to_parse() {
        assert!(parse(&["many", "128", "2", "10", "circle", "5"]).is_err());
        assert!(parse(&["5", "128", "2", "far", "circle", "5"]).is_err());
        // A vertex count alone is not enough.
        assert!(parse(&["5"]).is_err());
    }

    #[test]
    fn summary_lists_vertices_and_edges() {
        let graph = parse(&["3", "10", "2", "100", "rect", "10", "10"])
            .unwrap()
            .generator()
            .unwrap()
            .generate()
            .unwrap();
        let mut out = Vec::new();
        write_summary(&graph, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("vertices: 3\n"));
        assert!(text.contains("edges: 3\n"));
        assert!(text.contains("  0 -- 1\n"));
    }
}
