//! Errors raised by distance computations.
//!
//! Every failure is reported synchronously at the point of detection. There
//! are no retries and no partial results; each variant carries enough context
//! to tell which input violated which requirement.

/// A `Result` whose error type is [`DistanceError`].
pub type Result<T> = core::result::Result<T, DistanceError>;

/// Errors that can occur while computing a distance or a travel time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DistanceError {
    /// A numeric argument was outside its valid domain, e.g. a p-norm
    /// exponent below 1 or a non-positive sphere radius.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A coordinate vector failed the spherical or geographic validity
    /// predicate. The message names the offending coordinate(s) and the
    /// criteria they must satisfy.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// A method was selected by name without a configuration key it
    /// requires.
    ///
    /// Resolution: set the named key on the method configuration.
    #[error("method {method:?} requires the configuration key {key:?}")]
    MissingConfiguration {
        /// The method that was selected.
        method: &'static str,
        /// The configuration key it requires.
        key: &'static str,
    },

    /// A method name did not match the closed set of supported methods.
    #[error("method {name:?} not found among available methods: {available:?}")]
    UnknownMethod {
        /// The unrecognized method name.
        name: String,
        /// The full set of supported method names.
        available: &'static [&'static str],
    },

    /// An angular computation would divide by a zero vector norm.
    #[error("division by zero: {0}")]
    DivisionByZero(String),
}
