//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the Gaussian kernel that turns distances between a
//! query point and the samples into weights. It holds no estimator logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian kernel for distance-based weighting.
pub mod kernel;
