//! Traces adapter for smoothing named trajectory trends.
//!
//! ## Purpose
//!
//! A trajectory query returns, per dataset, a list of traces: named `(x, y)`
//! series of a feature over time. Before plotting, each trace is replaced by
//! its smoothed resampling. This adapter performs that replacement on the
//! deserialized response, leaving every other attribute untouched.
//!
//! ## Design notes
//!
//! * **Defaults**: The grid runs from time zero to the x of the last sample
//!   of each trace, with 1000 points and sigma 0.7.
//! * **Pass-through**: Unknown trace attributes and unknown response fields
//!   survive a deserialize/serialize round trip.
//! * **Atomic per call**: The first failing trace aborts the call; traces
//!   smoothed before the failure keep their new values.
//!
//! ## Invariants
//!
//! * Trace order within a dataset is preserved.
//! * After a successful call every trace has `steps` points.
//!
//! ## Non-goals
//!
//! * This adapter does not fetch trajectories or render plots.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, collections::BTreeMap, format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{boxed::Box, collections::BTreeMap, string::String, vec::Vec};

// External dependencies
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

// Internal dependencies
use crate::adapters::batch::{BatchSmoother, BatchSmootherBuilder};
use crate::algorithms::nadaraya_watson::ZeroWeightFallback;
use crate::primitives::errors::SmoothError;
use crate::primitives::grid::{GridBounds, GridSpacing};

// ============================================================================
// Data Model
// ============================================================================

/// A named `(x, y)` series of one feature along a trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryTrace {
    /// Display name of the trace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Sample times.
    pub x: Vec<f64>,

    /// Sample values.
    pub y: Vec<f64>,

    /// Plotting attributes carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TrajectoryTrace {
    /// Create a trace without extra attributes.
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            name: Some(name.into()),
            x,
            y,
            extra: Map::new(),
        }
    }

    /// Name used in error messages: the trace name, or `#index` when unnamed.
    fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{index}"),
        }
    }
}

/// Traces grouped by dataset name.
pub type DatasetTraces = BTreeMap<String, Vec<TrajectoryTrace>>;

/// The trajectory query response, with the trend traces typed and every other
/// field kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryResponse {
    /// Trend traces per dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_name_to_traces: Option<DatasetTraces>,

    /// Remaining fields (divergence traces, layout coordinates, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Traces Smoother Builder
// ============================================================================

/// Builder for the traces smoother.
#[derive(Debug, Clone, Default)]
pub struct TracesSmootherBuilder {
    /// Per-trace batch configuration.
    pub batch: BatchSmootherBuilder<f64>,
}

impl TracesSmootherBuilder {
    /// Set the kernel bandwidth.
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.batch = self.batch.sigma(sigma);
        self
    }

    /// Set the number of grid points per trace.
    pub fn steps(mut self, steps: usize) -> Self {
        self.batch = self.batch.steps(steps);
        self
    }

    /// Set how each trace's grid interval is chosen.
    pub fn bounds(mut self, bounds: GridBounds<f64>) -> Self {
        self.batch = self.batch.bounds(bounds);
        self
    }

    /// Set the grid construction mode.
    pub fn spacing(mut self, spacing: GridSpacing) -> Self {
        self.batch = self.batch.spacing(spacing);
        self
    }

    /// Set the policy for query points where every weight underflowed.
    pub fn zero_weight_fallback(mut self, policy: ZeroWeightFallback) -> Self {
        self.batch = self.batch.zero_weight_fallback(policy);
        self
    }

    /// Validate the configuration and build the smoother.
    pub fn build(self) -> Result<TracesSmoother, SmoothError> {
        Ok(TracesSmoother {
            batch: self.batch.build()?,
        })
    }
}

// ============================================================================
// Traces Smoother
// ============================================================================

/// Smooths trajectory traces in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracesSmoother {
    batch: BatchSmoother<f64>,
}

impl TracesSmoother {
    /// The per-trace smoother.
    pub fn batch(&self) -> &BatchSmoother<f64> {
        &self.batch
    }

    /// Replace the samples of one trace with its smoothed resampling.
    pub fn smooth_trace(&self, trace: &mut TrajectoryTrace) -> Result<(), SmoothError> {
        let (x, y) = self.batch.smooth(&trace.x, &trace.y)?.into_parts();
        trace!(
            name = trace.name.as_deref().unwrap_or(""),
            samples = trace.x.len(),
            "smoothed trace"
        );
        trace.x = x;
        trace.y = y;
        Ok(())
    }

    /// Smooth every trace of one dataset.
    pub fn smooth_dataset(
        &self,
        dataset: &str,
        traces: &mut [TrajectoryTrace],
    ) -> Result<(), SmoothError> {
        for (index, trace) in traces.iter_mut().enumerate() {
            self.smooth_trace(trace)
                .map_err(|source| SmoothError::InvalidTrace {
                    dataset: dataset.into(),
                    trace: trace.label(index),
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }

    /// Smooth every trace of every dataset. Returns the number of traces.
    pub fn smooth_datasets(&self, datasets: &mut DatasetTraces) -> Result<usize, SmoothError> {
        let mut count = 0;
        for (dataset, traces) in datasets.iter_mut() {
            self.smooth_dataset(dataset, traces)?;
            count += traces.len();
        }
        debug!(datasets = datasets.len(), traces = count, "smoothed trajectory trends");
        Ok(count)
    }

    /// Smooth the trend traces of a trajectory response, if it has any.
    pub fn smooth_response(&self, response: &mut TrajectoryResponse) -> Result<usize, SmoothError> {
        match response.dataset_name_to_traces.as_mut() {
            Some(datasets) => self.smooth_datasets(datasets),
            None => Ok(0),
        }
    }
}
