//! Angular distances between vectors.

use crate::{number::Float, DistanceError, Number, Result};

use super::p_norm;

/// Computes the cosine of the angle between two vectors under the `p`-norm,
/// i.e. `dot(x, y) / (‖x‖_p * ‖y‖_p)`.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors.
///
/// # Arguments
///
/// * `x`: A slice of numbers.
/// * `y`: A slice of numbers.
/// * `p`: The norm exponent used to normalize the dot product, at least 1.
///
/// # Errors
///
/// * [`DistanceError::DivisionByZero`] if either vector has zero `p`-norm.
/// * [`DistanceError::InvalidArgument`] if `p < 1`.
pub fn cosine_similarity<T: Number, U: Float>(x: &[T], y: &[T], p: U) -> Result<U> {
    let x_norm: U = p_norm(x, p)?;
    let y_norm: U = p_norm(y, p)?;
    if x_norm == U::ZERO || y_norm == U::ZERO {
        return Err(DistanceError::DivisionByZero(
            "angular distances do not support a vector with zero norm".to_string(),
        ));
    }

    let dot = x
        .iter()
        .zip(y.iter())
        .fold(U::ZERO, |acc, (&a, &b)| U::from(a).mul_add(U::from(b), acc));
    Ok(dot / (x_norm * y_norm))
}

/// Computes the angle between two vectors, in radians, as the arccosine of
/// their [`cosine_similarity`] under the `p`-norm.
///
/// The similarity is clamped to `[-1, 1]` before the arccosine, so rounding
/// in the norm computations cannot push the result to `NaN`.
///
/// # Errors
///
/// * [`DistanceError::DivisionByZero`] if either vector has zero `p`-norm.
/// * [`DistanceError::InvalidArgument`] if `p < 1`.
pub fn angle<T: Number, U: Float>(x: &[T], y: &[T], p: U) -> Result<U> {
    let similarity = cosine_similarity(x, y, p)?;
    Ok(similarity.min(U::ONE).max(-U::ONE).acos())
}

/// Computes the Cosine distance between two vectors.
///
/// The cosine distance is defined as `1.0 - c` where `c` is the cosine
/// similarity under the 2-norm. It is 0 for vectors pointing in the same
/// direction and 2 for vectors pointing in opposite directions.
///
/// # Errors
///
/// * [`DistanceError::DivisionByZero`] if either vector has zero norm.
///
/// # Examples
///
/// ```
/// use geodist::vectors::cosine;
///
/// let x: Vec<f32> = vec![1.0, 0.0, 0.0];
/// let y: Vec<f32> = vec![0.0, 1.0, 0.0];
///
/// let distance: f32 = cosine(&x, &y).unwrap();
///
/// assert!((distance - 1.0).abs() < f32::EPSILON);
/// ```
///
/// # References
///
/// * [Cosine similarity](https://en.wikipedia.org/wiki/Cosine_similarity)
pub fn cosine<T: Number, U: Float>(x: &[T], y: &[T]) -> Result<U> {
    Ok(U::ONE - cosine_similarity(x, y, U::ONE.double())?)
}

/// Computes the Canberra distance between two vectors.
///
/// The Canberra distance is the sum, over components, of the absolute
/// difference divided by the sum of absolute values. A component pair that
/// is zero in both vectors contributes `NaN`, which propagates into the
/// result; callers who need to rule this out must screen their inputs.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors.
///
/// # Examples
///
/// ```
/// use geodist::vectors::canberra;
///
/// let x: Vec<f32> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f32> = vec![4.0, 5.0, 6.0];
///
/// let distance: f32 = canberra(&x, &y);
///
/// assert!((distance - 143.0 / 105.0).abs() <= f32::EPSILON);
/// ```
///
/// # References
///
/// * [Canberra distance](https://en.wikipedia.org/wiki/Canberra_distance)
pub fn canberra<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    x.iter()
        .map(|&v| U::from(v))
        .zip(y.iter().map(|&v| U::from(v)))
        .map(|(a, b)| a.abs_diff(b) / (a.abs() + b.abs()))
        .fold(U::ZERO, |acc, v| acc + v)
}

/// Computes the Bray-Curtis distance between two vectors,
/// `Σ |aᵢ - bᵢ| / Σ |aᵢ + bᵢ|`.
///
/// Two all-zero vectors make the denominator zero and the result `NaN`.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors.
///
/// # Examples
///
/// ```
/// use geodist::vectors::bray_curtis;
///
/// let x: Vec<f32> = vec![6.0, 7.0, 4.0];
/// let y: Vec<f32> = vec![10.0, 0.0, 6.0];
///
/// let distance: f32 = bray_curtis(&x, &y);
///
/// assert!((distance - 13.0 / 33.0).abs() <= f32::EPSILON);
/// ```
///
/// # References
///
/// * [Bray-Curtis dissimilarity](https://en.wikipedia.org/wiki/Bray%E2%80%93Curtis_dissimilarity)
pub fn bray_curtis<T: Number, U: Float>(x: &[T], y: &[T]) -> U {
    let [numerator, denominator] = x
        .iter()
        .map(|&v| U::from(v))
        .zip(y.iter().map(|&v| U::from(v)))
        .fold([U::ZERO; 2], |[n, d], (a, b)| {
            [n + a.abs_diff(b), d + (a + b).abs()]
        });
    numerator / denominator
}
