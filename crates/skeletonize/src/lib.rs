//! Umbrella crate for the `skeletonize` workspace.
//!
//! Re-exports the raster primitives from `sk-core` and the thinning engines
//! from `sk-thin`.

pub use sk_core::*;
pub use sk_thin::*;
