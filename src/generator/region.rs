//! Acceptance regions for sampled points.
//!
//! Every region is centered at the origin. [`classify`] is the membership
//! predicate the sampler filters candidates through; [`Region::validate`]
//! catches configurations that could never be sampled before any work starts.

use super::point::Point;
use crate::error::ConfigError;
use std::f64::consts::PI;
use std::fmt;

/// The shape sampled points must fall into.
#[derive(Clone, Debug, PartialEq)]
pub enum Region {
    /// Ball of `radius` around the origin, in any dimension.
    Circle { radius: f64 },
    /// Axis-aligned rectangle, `length` along x and `width` along y. 2D only.
    Rectangle { length: f64, width: f64 },
    /// Annulus between `inner` and `outer` radius, both inclusive.
    Disk { inner: f64, outer: f64 },
    /// Box for 3+ dimensional points. Not implemented.
    NBox { dims: Vec<f64> },
    /// User-defined boundary. Not implemented.
    Custom,
}

/// Outcome of testing a point against a [`Region`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    Accept,
    Reject,
}

impl Classification {
    fn from_bool(inside: bool) -> Self {
        if inside {
            Self::Accept
        } else {
            Self::Reject
        }
    }
}

impl Region {
    /// Short tag naming the region, as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Circle { .. } => "circle",
            Region::Rectangle { .. } => "rect",
            Region::Disk { .. } => "disk",
            Region::NBox { .. } => "nbox",
            Region::Custom => "custom",
        }
    }

    /// Builds a region from its tag and positional arguments.
    ///
    /// `circle` takes a radius, `rect` a length and width, `disk` an inner
    /// and outer radius and `nbox` one extent per dimension.
    pub fn from_tag(tag: &str, args: &[f64]) -> Result<Self, ConfigError> {
        let region = match tag {
            "circle" => {
                expect_arity("circle", 1, args)?;
                Region::Circle { radius: args[0] }
            }
            "rect" | "rectangle" => {
                expect_arity("rect", 2, args)?;
                Region::Rectangle {
                    length: args[0],
                    width: args[1],
                }
            }
            "disk" => {
                expect_arity("disk", 2, args)?;
                Region::Disk {
                    inner: args[0],
                    outer: args[1],
                }
            }
            "nbox" => {
                if args.is_empty() {
                    return Err(ConfigError::RegionArity {
                        region: "nbox",
                        expected: 1,
                        got: 0,
                    });
                }
                Region::NBox {
                    dims: args.to_vec(),
                }
            }
            "custom" => Region::Custom,
            other => return Err(ConfigError::UnknownRegion(other.to_string())),
        };
        Ok(region)
    }

    /// Checks that points of dimension `dim` can be sampled from this region.
    pub fn validate(&self, dim: usize) -> Result<(), ConfigError> {
        match self {
            Region::Circle { radius } => non_negative("circle radius", *radius),
            Region::Rectangle { length, width } => {
                if dim != 2 {
                    return Err(ConfigError::DimensionMismatch {
                        region: self.name(),
                        expected: 2,
                        got: dim,
                    });
                }
                non_negative("rectangle length", *length)?;
                non_negative("rectangle width", *width)
            }
            Region::Disk { inner, outer } => {
                finite("disk inner radius", *inner)?;
                non_negative("disk outer radius", *outer)?;
                if inner > outer {
                    return Err(ConfigError::InvertedDisk {
                        inner: *inner,
                        outer: *outer,
                    });
                }
                Ok(())
            }
            Region::NBox { .. } | Region::Custom => Err(ConfigError::Unimplemented(self.name())),
        }
    }

    /// Planar area of the region, when it has one.
    pub fn area(&self) -> Option<f64> {
        match self {
            Region::Circle { radius } => Some(PI * radius * radius),
            Region::Rectangle { length, width } => Some(length * width),
            Region::Disk { inner, outer } => {
                let inner = inner.max(0.0);
                Some(PI * (outer * outer - inner * inner))
            }
            Region::NBox { .. } | Region::Custom => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Circle { radius } => write!(f, "circle(r={radius})"),
            Region::Rectangle { length, width } => write!(f, "rect({length}x{width})"),
            Region::Disk { inner, outer } => write!(f, "disk({inner}..={outer})"),
            Region::NBox { dims } => write!(f, "nbox({dims:?})"),
            Region::Custom => write!(f, "custom"),
        }
    }
}

/// Decides whether `point` lies inside `region`.
///
/// Errors on regions that cannot classify anything at all; a point outside
/// the region is a [`Classification::Reject`], never an error.
pub fn classify(point: &Point, region: &Region) -> Result<Classification, ConfigError> {
    match region {
        Region::Circle { radius } => Ok(Classification::from_bool(point.norm() <= *radius)),
        Region::Rectangle { length, width } => {
            let [x, y] = point.coords() else {
                return Err(ConfigError::DimensionMismatch {
                    region: region.name(),
                    expected: 2,
                    got: point.dim(),
                });
            };
            let inside = (*x as f64).abs() <= length / 2.0 && (*y as f64).abs() <= width / 2.0;
            Ok(Classification::from_bool(inside))
        }
        Region::Disk { inner, outer } => {
            if inner > outer {
                return Err(ConfigError::InvertedDisk {
                    inner: *inner,
                    outer: *outer,
                });
            }
            let s = point.norm();
            Ok(Classification::from_bool(*inner <= s && s <= *outer))
        }
        Region::NBox { .. } | Region::Custom => Err(ConfigError::Unimplemented(region.name())),
    }
}

fn expect_arity(region: &'static str, expected: usize, args: &[f64]) -> Result<(), ConfigError> {
    if args.len() != expected {
        return Err(ConfigError::RegionArity {
            region,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn finite(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::invalid(parameter, format!("{value} is not finite")));
    }
    Ok(())
}

fn non_negative(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(parameter, value)?;
    if value < 0.0 {
        return Err(ConfigError::invalid(parameter, format!("{value} is negative")));
    }
    Ok(())
}
