#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod number;

pub use number::{Float, Number};

mod error;
mod metric;

pub mod geometry;
pub mod vectors;

pub use error::{DistanceError, Result};
pub use metric::{
    distance, travel_time, MethodConfig, Metric, PNormConfig, RadiusConfig, METHOD_NAMES,
};

/// The version of the crate.
pub const VERSION: &str = "0.3.0";
