//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates inputs, evaluates the estimator over a grid or a set
//! of query points (sequentially, or with rayon under the `parallel`
//! feature), and packages the output.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Grid and query-point evaluation.
pub mod executor;

/// Result type and formatting.
pub mod output;

/// Input and parameter validation.
pub mod validator;
