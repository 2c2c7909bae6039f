//! The distance method dispatcher and travel-time derivation.
//!
//! [`Metric`] is the closed set of supported distance semantics. Each variant
//! that needs configuration carries its own typed configuration struct, so a
//! fully-constructed `Metric` can always be evaluated without re-checking
//! string-keyed options. The name-driven entry points ([`Metric::parse`],
//! [`distance`], [`travel_time`]) bridge from the untyped [`MethodConfig`]
//! carrier to the typed variants, raising the configuration errors at parse
//! time.

use serde::{Deserialize, Serialize};

use crate::{geometry, number::Float, vectors, DistanceError, Result};

/// The closed set of method names accepted by [`Metric::parse`].
///
/// `manhattan`/`cityblock` and `max`/`chebyshev` are synonym pairs.
pub const METHOD_NAMES: [&str; 12] = [
    "pnorm",
    "manhattan",
    "cityblock",
    "euclidean",
    "sqeuclidean",
    "max",
    "chebyshev",
    "cosine",
    "canberra",
    "braycurtis",
    "sphere",
    "geographical",
];

/// Configuration for the `pnorm` method.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PNormConfig<U> {
    /// The norm exponent, at least 1, with [`Float::INFINITY`] as the
    /// Chebyshev limit. Defaults to 2 when absent.
    pub exponent: Option<U>,
}

impl<U: Float> PNormConfig<U> {
    /// The exponent to compute with: the configured value, or the documented
    /// default of 2.
    pub fn effective_exponent(&self) -> U {
        self.exponent.unwrap_or_else(|| U::ONE.double())
    }
}

/// Configuration for the methods that measure along a sphere's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusConfig<U> {
    /// The sphere radius. Required; there is no default.
    pub radius: U,
}

/// The untyped configuration carrier for the name-driven entry points.
///
/// Which keys are read depends on the selected method: `pnorm` reads
/// `exponent`, `sphere` and `geographical` read `radius`, and every other
/// method ignores the configuration entirely.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MethodConfig<U> {
    /// The p-norm exponent, read by `pnorm`.
    pub exponent: Option<U>,
    /// The sphere radius, read by `sphere` and `geographical`.
    pub radius: Option<U>,
}

/// A distance method, with any configuration its semantics require.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Metric<U: Float> {
    /// The p-norm distance with a configurable exponent.
    PNorm(PNormConfig<U>),
    /// The 1-norm distance, also known as the city-block distance.
    Manhattan,
    /// The 2-norm distance.
    Euclidean,
    /// The square of the Euclidean distance.
    SquaredEuclidean,
    /// The infinity-norm distance, also known as the maximum metric.
    Chebyshev,
    /// One minus the cosine similarity under the 2-norm.
    Cosine,
    /// The Canberra distance.
    Canberra,
    /// The Bray-Curtis distance.
    BrayCurtis,
    /// The n-sphere distance between spherical coordinates, in radians
    /// scaled by the configured radius.
    Sphere(RadiusConfig<U>),
    /// The n-sphere distance between geographic `(latitude, longitude)`
    /// coordinates in degrees, converted through spherical coordinates.
    Geographical(RadiusConfig<U>),
}

impl<U: Float> Metric<U> {
    /// Selects a metric by name, reading any required options from `config`.
    ///
    /// Matching is exact and case-sensitive over [`METHOD_NAMES`]. A `pnorm`
    /// selection without an `exponent` logs a warning and falls back to the
    /// documented default of 2.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::UnknownMethod`] if `name` is not one of
    ///   [`METHOD_NAMES`].
    /// * [`DistanceError::MissingConfiguration`] if `sphere` or
    ///   `geographical` is selected without a `radius`.
    /// * [`DistanceError::InvalidArgument`] if the `radius` is not positive.
    pub fn parse(name: &str, config: &MethodConfig<U>) -> Result<Self> {
        match name {
            "pnorm" => {
                if config.exponent.is_none() {
                    tracing::warn!("no \"exponent\" configured for method \"pnorm\"; defaulting to 2");
                }
                Ok(Self::PNorm(PNormConfig {
                    exponent: config.exponent,
                }))
            }
            "manhattan" | "cityblock" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            "sqeuclidean" => Ok(Self::SquaredEuclidean),
            "max" | "chebyshev" => Ok(Self::Chebyshev),
            "cosine" => Ok(Self::Cosine),
            "canberra" => Ok(Self::Canberra),
            "braycurtis" => Ok(Self::BrayCurtis),
            "sphere" => Ok(Self::Sphere(radius_config("sphere", config)?)),
            "geographical" => Ok(Self::Geographical(radius_config("geographical", config)?)),
            _ => Err(DistanceError::UnknownMethod {
                name: name.to_string(),
                available: &METHOD_NAMES,
            }),
        }
    }

    /// The canonical name of this metric, as accepted by [`Metric::parse`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PNorm(_) => "pnorm",
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::SquaredEuclidean => "sqeuclidean",
            Self::Chebyshev => "chebyshev",
            Self::Cosine => "cosine",
            Self::Canberra => "canberra",
            Self::BrayCurtis => "braycurtis",
            Self::Sphere(_) => "sphere",
            Self::Geographical(_) => "geographical",
        }
    }

    /// Computes the distance between two coordinate vectors under this
    /// metric.
    ///
    /// The `sphere` and `geographical` variants re-validate their
    /// coordinates on every call; nothing is cached between calls.
    ///
    /// See the [`crate::vectors`] module documentation for the behavior on
    /// vectors of unequal length.
    ///
    /// # Errors
    ///
    /// * [`DistanceError::InvalidArgument`] if a configured p-norm exponent
    ///   is below 1.
    /// * [`DistanceError::InvalidCoordinate`] if a coordinate fails the
    ///   validity predicate of a `sphere` or `geographical` metric.
    /// * [`DistanceError::DivisionByZero`] if a zero vector is given to the
    ///   `cosine` metric.
    pub fn distance(&self, x: &[U], y: &[U]) -> Result<U> {
        match self {
            Self::PNorm(config) => vectors::p_norm_distance(x, y, config.effective_exponent()),
            Self::Manhattan => vectors::p_norm_distance(x, y, U::ONE),
            Self::Euclidean => vectors::p_norm_distance(x, y, U::ONE.double()),
            Self::SquaredEuclidean => {
                let d = vectors::p_norm_distance(x, y, U::ONE.double())?;
                Ok(d * d)
            }
            Self::Chebyshev => vectors::p_norm_distance(x, y, U::INFINITY),
            Self::Cosine => vectors::cosine(x, y),
            Self::Canberra => Ok(vectors::canberra(x, y)),
            Self::BrayCurtis => Ok(vectors::bray_curtis(x, y)),
            Self::Sphere(config) => {
                validate_pair(geometry::is_spherical(x), geometry::is_spherical(y), "spherical")?;
                geometry::n_sphere_distance(x, y, config.radius)
            }
            Self::Geographical(config) => {
                validate_pair(
                    geometry::is_geographical(x),
                    geometry::is_geographical(y),
                    "geographical",
                )?;
                let sx = geometry::geo_to_spherical(x[0], x[1]);
                let sy = geometry::geo_to_spherical(y[0], y[1]);
                geometry::n_sphere_distance(&sx, &sy, config.radius)
            }
        }
    }

    /// Derives the travel time between two coordinate vectors as the
    /// distance under this metric divided by `average_speed`.
    ///
    /// The speed is not validated: a zero speed yields infinity and a
    /// negative speed a negative time, as plain arithmetic results.
    ///
    /// # Errors
    ///
    /// Whatever [`Metric::distance`] raises for these inputs.
    pub fn travel_time(&self, average_speed: U, x: &[U], y: &[U]) -> Result<U> {
        Ok(self.distance(x, y)? / average_speed)
    }
}

impl<U: Float> core::fmt::Display for Metric<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reads the required `radius` for `method` out of the untyped carrier.
fn radius_config<U: Float>(method: &'static str, config: &MethodConfig<U>) -> Result<RadiusConfig<U>> {
    let radius = config.radius.ok_or_else(|| DistanceError::MissingConfiguration {
        method,
        key: "radius",
    })?;
    if radius <= U::ZERO {
        return Err(DistanceError::InvalidArgument(format!(
            "the radius must be positive, got {radius}"
        )));
    }
    Ok(RadiusConfig { radius })
}

/// Checks a pair of coordinate validations, naming the offending side(s)
/// with singular/plural agreement.
fn validate_pair(x_is_valid: bool, y_is_valid: bool, kind: &str) -> Result<()> {
    let subject = match (x_is_valid, y_is_valid) {
        (true, true) => return Ok(()),
        (false, false) => "both provided coordinates are",
        (false, true) => "provided coordinate 1 is",
        (true, false) => "provided coordinate 2 is",
    };
    Err(DistanceError::InvalidCoordinate(format!("{subject} not {kind}")))
}

/// Computes the distance between two coordinate vectors under the method
/// selected by `name`, with options read from `config`.
///
/// Equivalent to `Metric::parse(name, config)?.distance(x, y)`.
///
/// # Errors
///
/// Whatever [`Metric::parse`] or [`Metric::distance`] raise for these
/// inputs.
///
/// # Examples
///
/// ```
/// use geodist::{distance, MethodConfig};
///
/// let d: f64 = distance(&[1.0, 1.0], &[2.0, 2.0], "euclidean", &MethodConfig::default()).unwrap();
///
/// assert!((d - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn distance<U: Float>(x: &[U], y: &[U], name: &str, config: &MethodConfig<U>) -> Result<U> {
    Metric::parse(name, config)?.distance(x, y)
}

/// Derives the travel time between two coordinate vectors as their distance
/// under the method selected by `name`, divided by `average_speed`.
///
/// The speed is not validated; see [`Metric::travel_time`].
///
/// # Errors
///
/// Whatever [`Metric::parse`] or [`Metric::distance`] raise for these
/// inputs.
///
/// # Examples
///
/// ```
/// use geodist::{travel_time, MethodConfig};
///
/// let hours: f64 =
///     travel_time(50.0, &[0.0, 0.0], &[30.0, 40.0], "euclidean", &MethodConfig::default()).unwrap();
///
/// assert!((hours - 1.0).abs() < 1e-12);
/// ```
pub fn travel_time<U: Float>(
    average_speed: U,
    x: &[U],
    y: &[U],
    name: &str,
    config: &MethodConfig<U>,
) -> Result<U> {
    Metric::parse(name, config)?.travel_time(average_speed, x, y)
}
