//! Distance functions for coordinate vectors.
//!
//! # Potentially unexpected behaviors
//!
//! Computing these distances with vectors of differing or zero dimensionality
//! may give unexpected results. Specifically, when one vector is shorter than
//! the other, elements in the longer vector past the end of the shorter
//! vector are ignored. No length check is performed.

mod angular;
mod lp_norms;

pub use angular::{angle, bray_curtis, canberra, cosine, cosine_similarity};
pub use lp_norms::{chebyshev, euclidean, euclidean_sq, manhattan, p_norm, p_norm_distance};
