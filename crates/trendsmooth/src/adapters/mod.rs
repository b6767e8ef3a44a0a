//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the user-facing execution modes built on the engine:
//!
//! - **Batch**: One trend curve, resampled on a grid or at query points
//! - **Traces**: Named trajectory traces grouped by dataset (`serde` feature)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single-curve batch adapter.
pub mod batch;

/// Trajectory trace adapter.
#[cfg(feature = "serde")]
pub mod traces;
