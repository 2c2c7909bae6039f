//! The p-norm family of vector norms and distances.

use crate::{number::Float, DistanceError, Number, Result};

/// Computes the p-norm of a vector, `(Σ |vᵢ|^p)^(1/p)`.
///
/// A `p` of [`Float::INFINITY`] is the Chebyshev limit and yields
/// `max |vᵢ|`.
///
/// # Arguments
///
/// * `values`: A slice of numbers.
/// * `p`: The norm exponent, at least 1.
///
/// # Errors
///
/// * [`DistanceError::InvalidArgument`] if `p < 1`.
///
/// # Examples
///
/// ```
/// use geodist::vectors::p_norm;
///
/// let values: Vec<f64> = vec![1.0, 1.0, 1.0, 1.0, 1.0];
///
/// let norm: f64 = p_norm(&values, 2.0).unwrap();
///
/// assert!((norm - 5.0_f64.sqrt()).abs() < f64::EPSILON);
/// ```
pub fn p_norm<T: Number, U: Float>(values: &[T], p: U) -> Result<U> {
    if p < U::ONE {
        return Err(DistanceError::InvalidArgument(format!(
            "the p-norm exponent must be greater than or equal to 1, got {p}"
        )));
    }

    if p.is_infinite() {
        Ok(values.iter().fold(U::ZERO, |acc, &v| acc.max(U::from(v).abs())))
    } else {
        let sum = values.iter().fold(U::ZERO, |acc, &v| acc + U::from(v).abs().powf(p));
        Ok(sum.powf(p.inv()))
    }
}

/// Computes the p-norm distance between two vectors, i.e. the p-norm of
/// their elementwise absolute difference.
///
/// This is the workhorse behind the Manhattan (`p = 1`), Euclidean
/// (`p = 2`), and Chebyshev (`p = ∞`) distances, as well as user-supplied
/// exponents.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors.
///
/// # Arguments
///
/// * `x`: A slice of numbers.
/// * `y`: A slice of numbers.
/// * `p`: The norm exponent, at least 1.
///
/// # Errors
///
/// * [`DistanceError::InvalidArgument`] if `p < 1`.
///
/// # Examples
///
/// ```
/// use geodist::vectors::p_norm_distance;
///
/// let x: Vec<f64> = vec![1.0, 1.0];
/// let y: Vec<f64> = vec![2.0, 2.0];
///
/// let distance: f64 = p_norm_distance(&x, &y, 2.0).unwrap();
///
/// assert!((distance - 2.0_f64.sqrt()).abs() < f64::EPSILON);
/// ```
pub fn p_norm_distance<T: Number, U: Float>(x: &[T], y: &[T], p: U) -> Result<U> {
    let diffs = x
        .iter()
        .zip(y.iter())
        .map(|(&a, &b)| a.abs_diff(b))
        .collect::<Vec<_>>();
    p_norm(&diffs, p)
}

/// Computes the Manhattan (city-block) distance between two vectors.
///
/// Equal to `p_norm_distance(x, y, 1)`.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors.
///
/// # Examples
///
/// ```
/// use geodist::vectors::manhattan;
///
/// let x: Vec<f64> = vec![1.0, 1.0];
/// let y: Vec<f64> = vec![2.0, 2.0];
///
/// let distance: f64 = manhattan(&x, &y);
///
/// assert!((distance - 2.0).abs() < f64::EPSILON);
/// ```
pub fn manhattan<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let sum = x
        .iter()
        .zip(y.iter())
        .fold(T::ZERO, |acc, (&a, &b)| acc + a.abs_diff(b));
    U::from(sum)
}

/// Computes the squared Euclidean distance between two vectors.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors.
pub fn euclidean_sq<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    x.iter().zip(y.iter()).fold(U::ZERO, |acc, (&a, &b)| {
        let d = U::from(a) - U::from(b);
        d.mul_add(d, acc)
    })
}

/// Computes the Euclidean distance between two vectors.
///
/// Equal to `p_norm_distance(x, y, 2)`.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors.
///
/// # Examples
///
/// ```
/// use geodist::vectors::euclidean;
///
/// let x: Vec<f32> = vec![0.0, 0.0];
/// let y: Vec<f32> = vec![3.0, 4.0];
///
/// let distance: f32 = euclidean(&x, &y);
///
/// assert!((distance - 5.0).abs() < f32::EPSILON);
/// ```
pub fn euclidean<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    euclidean_sq::<T, U>(x, y).sqrt()
}

/// Computes the Chebyshev distance between two vectors, i.e. the largest
/// absolute difference over any single component.
///
/// Equal to `p_norm_distance(x, y, INFINITY)`.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors.
pub fn chebyshev<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let max = x
        .iter()
        .zip(y.iter())
        .fold(T::ZERO, |acc, (&a, &b)| acc.max(a.abs_diff(b)));
    U::from(max)
}
