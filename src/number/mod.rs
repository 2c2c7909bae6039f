//! The `Number` trait is used to represent numbers of different types.
//!
//! We provide implementations for the following types:
//!
//! * All primitive unsigned integers: `u8`, `u16`, `u32`, `u64`, `usize`.
//! * All primitive signed integers: `i8`, `i16`, `i32`, `i64`, `isize`.
//! * All primitive floating point numbers: `f32`, `f64`.
//!
//! The `Float` sub-trait is implemented for `f32` and `f64` only.

mod _float;
mod _number;
mod arithmetic;

pub use _float::Float;
pub use _number::Number;
pub use arithmetic::{Addition, Multiplication};
