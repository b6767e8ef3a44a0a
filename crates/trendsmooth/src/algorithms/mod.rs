//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the Nadaraya-Watson estimator: the kernel-weighted
//! average of the samples at one query point, together with the policy for
//! query points where every weight underflowed.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel-weighted local averaging.
pub mod nadaraya_watson;
