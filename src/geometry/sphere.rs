//! Central angles and distances on spheres and n-spheres.

use crate::{number::Float, vectors, DistanceError, Result};

/// The haversine function, `sin²(θ/2)`.
///
/// Total over the reals; used for numerically stable small-angle spherical
/// distance formulas.
///
/// # Examples
///
/// ```
/// use geodist::geometry::haversine;
///
/// let h: f64 = haversine(std::f64::consts::PI);
///
/// assert!((h - 1.0).abs() < 1e-12);
/// ```
pub fn haversine<U: Float>(theta: U) -> U {
    let s = theta.half().sin();
    s * s
}

/// Whether a vector is a valid spherical coordinate: at least two
/// components, all but the last in `[0, π]`, and the last in `[0, 2π]`.
///
/// Empty and single-component vectors are never spherical.
///
/// # Examples
///
/// ```
/// use geodist::geometry::is_spherical;
///
/// assert!(is_spherical(&[std::f64::consts::FRAC_PI_2, 0.0]));
/// assert!(!is_spherical::<f64>(&[]));
/// assert!(!is_spherical(&[1.0_f64]));
/// ```
pub fn is_spherical<U: Float>(coords: &[U]) -> bool {
    match coords.split_last() {
        Some((&azimuth, colatitudes)) if !colatitudes.is_empty() => {
            colatitudes.iter().all(|&a| a >= U::ZERO && a <= U::PI)
                && azimuth >= U::ZERO
                && azimuth <= U::TWO_PI
        }
        _ => false,
    }
}

/// Projects a spherical coordinate of `n` angles onto Cartesian space,
/// producing `n + 1` components on the sphere of the given `radius`.
///
/// This is the standard n-sphere parameterization: component `i` is
/// `radius · sin(θ₀) ⋯ sin(θᵢ₋₁) · cos(θᵢ)`, and the final component
/// replaces the cosine with the sine of the last angle.
///
/// # Errors
///
/// * [`DistanceError::InvalidCoordinate`] if the input fails
///   [`is_spherical`].
///
/// # Examples
///
/// ```
/// use geodist::geometry::spherical_to_cartesian;
///
/// let pole: Vec<f64> = spherical_to_cartesian(&[0.0, 0.0], 1.0).unwrap();
///
/// assert!((pole[0] - 1.0).abs() < 1e-12);
/// assert!(pole[1].abs() < 1e-12);
/// assert!(pole[2].abs() < 1e-12);
/// ```
pub fn spherical_to_cartesian<U: Float>(coords: &[U], radius: U) -> Result<Vec<U>> {
    if !is_spherical(coords) {
        return Err(DistanceError::InvalidCoordinate(format!(
            "{coords:?} is not spherical; a spherical coordinate must satisfy all of: \
             1. it has at least two components; \
             2. every component but the last lies in [0, pi]; \
             3. the last component lies in [0, 2*pi]"
        )));
    }

    let mut cartesian = Vec::with_capacity(coords.len() + 1);
    let mut sin_product = U::ONE;
    for &angle in coords {
        cartesian.push(radius * sin_product * angle.cos());
        sin_product *= angle.sin();
    }
    // sin_product is now the product of the sines of every angle, which is
    // exactly the final component of the parameterization.
    cartesian.push(radius * sin_product);

    Ok(cartesian)
}

/// Computes the central angle between two 2-component spherical points
/// directly from the haversine formula, without the Cartesian embedding.
///
/// The components are taken in `(longitude, latitude)` order, in radians.
/// Numerically preferred over [`central_angle`] for the 2-dimensional case.
///
/// # Panics
///
/// If either input has fewer than two components.
///
/// # References
///
/// * [Haversine formula](https://en.wikipedia.org/wiki/Haversine_formula)
pub fn sphere_central_angle<U: Float>(a: &[U], b: &[U]) -> U {
    let (lng_1, lat_1) = (a[0], a[1]);
    let (lng_2, lat_2) = (b[0], b[1]);

    let hav_theta = haversine(lat_2 - lat_1)
        + haversine(lng_2 - lng_1) * (U::ONE - haversine(lat_1 - lat_2) - haversine(lat_1 + lat_2));

    hav_theta.sqrt().asin().double()
}

/// Computes the central angle between two spherical coordinates of any
/// dimension via their Cartesian embeddings on the sphere of the given
/// `radius`.
///
/// # Errors
///
/// * [`DistanceError::InvalidCoordinate`] if either input fails
///   [`is_spherical`].
pub fn central_angle<U: Float>(a: &[U], b: &[U], radius: U) -> Result<U> {
    let ca = spherical_to_cartesian(a, radius)?;
    let cb = spherical_to_cartesian(b, radius)?;
    vectors::angle(&ca, &cb, U::ONE.double())
}

/// Computes the great-circle distance between two 2-component spherical
/// points: `radius × sphere_central_angle(a, b)`.
///
/// # Examples
///
/// ```
/// use geodist::geometry::great_circle_distance;
///
/// let d: f64 = great_circle_distance(&[0.0, 0.0], &[std::f64::consts::FRAC_PI_2, 0.0], 1.0);
///
/// assert!((d - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn great_circle_distance<U: Float>(a: &[U], b: &[U], radius: U) -> U {
    radius * sphere_central_angle(a, b)
}

/// Computes the distance between two points on the n-sphere of the given
/// `radius`: `radius × central_angle(a, b, radius)`.
///
/// # Errors
///
/// * [`DistanceError::InvalidCoordinate`] if either input fails
///   [`is_spherical`].
pub fn n_sphere_distance<U: Float>(a: &[U], b: &[U], radius: U) -> Result<U> {
    Ok(radius * central_angle(a, b, radius)?)
}
