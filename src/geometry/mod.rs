//! Geometric primitives for spherical and geographic distances.
//!
//! A *spherical coordinate* of dimension `n ≥ 2` has all but its last
//! component in `[0, π]` and its last component in `[0, 2π]`. A *geographic
//! coordinate* is a `(latitude, longitude)` pair in degrees, with latitude in
//! `[-90, 90]` and longitude in `[-180, 180]`. Validity is a pure predicate
//! over the values and is re-checked on every call that needs it.

mod geography;
mod sphere;

pub use geography::{
    degrees_to_radians, geo_to_spherical, is_geographical, radians_to_degrees, spherical_to_geo,
};
pub use sphere::{
    central_angle, great_circle_distance, haversine, is_spherical, n_sphere_distance,
    sphere_central_angle, spherical_to_cartesian,
};
