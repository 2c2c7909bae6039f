//! Conversions between geographic and spherical coordinates.

use crate::number::Float;

/// Converts an angle in degrees to radians.
///
/// # Examples
///
/// ```
/// use geodist::geometry::degrees_to_radians;
///
/// let radians: f64 = degrees_to_radians(180.0);
///
/// assert!((radians - std::f64::consts::PI).abs() < f64::EPSILON);
/// ```
pub fn degrees_to_radians<U: Float>(degrees: U) -> U {
    (U::PI * degrees) / U::from(180)
}

/// Converts an angle in radians to degrees. Inverse of
/// [`degrees_to_radians`] up to floating-point tolerance.
pub fn radians_to_degrees<U: Float>(radians: U) -> U {
    (U::from(180) * radians) / U::PI
}

/// Converts a geographic `(latitude, longitude)` pair, in degrees, into a
/// 2-dimensional spherical coordinate `[colatitude, azimuth]`, in radians.
///
/// The convention is `colatitude = π/2 + rad(latitude)` and
/// `azimuth = π + rad(longitude)`. For any latitude in `[-90, 90]` and
/// longitude in `[-180, 180]` the result satisfies
/// [`is_spherical`](crate::geometry::is_spherical).
///
/// # Examples
///
/// ```
/// use geodist::geometry::{geo_to_spherical, is_spherical};
///
/// let coords: [f64; 2] = geo_to_spherical(90.0, 180.0);
///
/// assert!(is_spherical(&coords));
/// assert!((coords[0] - std::f64::consts::PI).abs() < 1e-12);
/// assert!((coords[1] - std::f64::consts::TAU).abs() < 1e-12);
/// ```
pub fn geo_to_spherical<U: Float>(latitude: U, longitude: U) -> [U; 2] {
    [
        U::PI.half() + degrees_to_radians(latitude),
        U::PI + degrees_to_radians(longitude),
    ]
}

/// Converts a 2-dimensional spherical coordinate back into a geographic
/// `[latitude, longitude]` pair in degrees. Inverse of
/// [`geo_to_spherical`].
///
/// # Panics
///
/// If `coords` has fewer than two components.
pub fn spherical_to_geo<U: Float>(coords: &[U]) -> [U; 2] {
    [
        radians_to_degrees(coords[0] - U::PI.half()),
        radians_to_degrees(coords[1] - U::PI),
    ]
}

/// Whether a vector is a valid geographic coordinate: exactly two
/// components, with latitude in `[-90, 90]` degrees and longitude in
/// `[-180, 180]` degrees.
///
/// # Examples
///
/// ```
/// use geodist::geometry::is_geographical;
///
/// assert!(is_geographical(&[41.5_f64, -71.4]));
/// assert!(!is_geographical(&[100.0_f64, 0.0]));
/// assert!(!is_geographical(&[0.0_f64]));
/// ```
pub fn is_geographical<U: Float>(coords: &[U]) -> bool {
    coords.len() == 2 && coords[0].abs() <= U::from(90) && coords[1].abs() <= U::from(180)
}
