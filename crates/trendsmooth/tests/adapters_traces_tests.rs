#![cfg(feature = "serde")]
//! Tests for the traces adapter.
//!
//! These tests verify smoothing of trajectory responses:
//! - Default grid per trace (1000 points from zero to the last sample)
//! - Pass-through of unknown trace attributes and response fields
//! - Error reporting naming the failing dataset and trace
//!
//! ## Test Organization
//!
//! 1. **Smoothing** - Per trace, per dataset, per response
//! 2. **Serialization** - JSON round trips
//! 3. **Errors** - Labels and early abort

use approx::assert_relative_eq;
use serde_json::json;

use trendsmooth::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn sample_response() -> serde_json::Value {
    json!({
        "dataset_name_to_traces": {
            "day_18": [
                { "name": "Krt20", "x": [0.0, 1.0, 2.0, 4.0], "y": [0.1, 0.3, 0.2, 0.6],
                  "mode": "lines", "line": { "width": 1 } },
                { "name": "Sox2", "x": [0.0, 3.0], "y": [1.0, 2.0] }
            ],
            "day_12": [
                { "name": "Krt20", "x": [0.5, 1.5, 6.0], "y": [0.4, 0.1, 0.3] }
            ]
        },
        "ancestor_divergence": [{ "x": [0, 1], "y": [0.5, 0.4] }],
        "cell_set_name_to_color": { "Krt20": "#ff0000" }
    })
}

fn smoother() -> TracesSmoother {
    KernelSmoother::new().adapter(Traces).build().unwrap()
}

// ============================================================================
// Smoothing Tests
// ============================================================================

/// Every trace is resampled on 1000 points from zero to its last sample.
#[test]
fn test_smooth_response_defaults() {
    let mut response: TrajectoryResponse = serde_json::from_value(sample_response()).unwrap();

    let count = smoother().smooth_response(&mut response).unwrap();
    assert_eq!(count, 3);

    let datasets = response.dataset_name_to_traces.as_ref().unwrap();
    let expected_stop = [("day_18", 0, 4.0), ("day_18", 1, 3.0), ("day_12", 0, 6.0)];
    for (dataset, index, stop) in expected_stop {
        let trace = &datasets[dataset][index];
        assert_eq!(trace.x.len(), 1000);
        assert_eq!(trace.y.len(), 1000);
        assert_eq!(trace.x[0], 0.0);
        assert_relative_eq!(trace.x[999], stop, epsilon = 1e-9);
    }
}

/// Trace order within a dataset and trace names are preserved.
#[test]
fn test_smooth_preserves_order_and_names() {
    let mut response: TrajectoryResponse = serde_json::from_value(sample_response()).unwrap();
    smoother().smooth_response(&mut response).unwrap();

    let day_18 = &response.dataset_name_to_traces.as_ref().unwrap()["day_18"];
    let names: Vec<_> = day_18.iter().map(|t| t.name.as_deref().unwrap()).collect();
    assert_eq!(names, vec!["Krt20", "Sox2"]);
}

/// Trace smoothing agrees with the batch smoother.
#[test]
fn test_smooth_trace_matches_batch() {
    let xs = vec![0.0, 1.0, 2.5, 3.0];
    let ys = vec![2.0, 1.0, 0.5, 1.5];
    let mut trace = TrajectoryTrace::new("Pou5f1", xs.clone(), ys.clone());

    let traces = KernelSmoother::new()
        .sigma(0.4)
        .steps(64)
        .adapter(Traces)
        .build()
        .unwrap();
    traces.smooth_trace(&mut trace).unwrap();

    let expected = traces.batch().smooth(&xs, &ys).unwrap();
    assert_eq!(trace.x, expected.x);
    assert_eq!(trace.y, expected.y);
}

/// A response without trend traces is left alone.
#[test]
fn test_smooth_response_without_traces() {
    let mut response: TrajectoryResponse =
        serde_json::from_value(json!({ "points": [1, 2, 3] })).unwrap();
    let before = response.clone();

    assert_eq!(smoother().smooth_response(&mut response).unwrap(), 0);
    assert_eq!(response, before);
}

/// Smoothing a bare dataset map.
#[test]
fn test_smooth_datasets_map() {
    let mut datasets = DatasetTraces::new();
    datasets.insert(
        "all".into(),
        vec![TrajectoryTrace::new("a", vec![0.0, 2.0], vec![1.0, 1.0])],
    );

    let count = KernelSmoother::new()
        .steps(5)
        .adapter(Traces)
        .build()
        .unwrap()
        .smooth_datasets(&mut datasets)
        .unwrap();

    assert_eq!(count, 1);
    let trace = &datasets["all"][0];
    assert_eq!(trace.x, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    for &v in &trace.y {
        assert_relative_eq!(v, 1.0, epsilon = 1e-12);
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

/// Unknown attributes survive smoothing and re-serialization.
#[test]
fn test_round_trip_keeps_extra_fields() {
    let mut response: TrajectoryResponse = serde_json::from_value(sample_response()).unwrap();
    smoother().smooth_response(&mut response).unwrap();

    let out = serde_json::to_value(&response).unwrap();

    assert_eq!(out["cell_set_name_to_color"]["Krt20"], json!("#ff0000"));
    assert_eq!(out["ancestor_divergence"][0]["y"], json!([0.5, 0.4]));

    let krt20 = &out["dataset_name_to_traces"]["day_18"][0];
    assert_eq!(krt20["mode"], json!("lines"));
    assert_eq!(krt20["line"]["width"], json!(1));
    assert_eq!(krt20["x"].as_array().unwrap().len(), 1000);
}

/// Unnamed traces serialize without a name field.
#[test]
fn test_unnamed_trace_serialization() {
    let trace: TrajectoryTrace =
        serde_json::from_value(json!({ "x": [0.0], "y": [1.0] })).unwrap();
    assert_eq!(trace.name, None);

    let out = serde_json::to_value(&trace).unwrap();
    assert!(out.get("name").is_none());
}

// ============================================================================
// Error Tests
// ============================================================================

/// Errors name the dataset and trace that failed.
#[test]
fn test_error_names_trace() {
    let mut response: TrajectoryResponse = serde_json::from_value(json!({
        "dataset_name_to_traces": {
            "day_2": [
                { "name": "ok", "x": [0.0, 1.0], "y": [1.0, 2.0] },
                { "name": "broken", "x": [0.0, 1.0], "y": [1.0] }
            ]
        }
    }))
    .unwrap();

    let err = smoother().smooth_response(&mut response).unwrap_err();

    assert_eq!(
        err,
        SmoothError::InvalidTrace {
            dataset: "day_2".into(),
            trace: "broken".into(),
            source: Box::new(SmoothError::MismatchedInputs { x_len: 2, y_len: 1 }),
        }
    );

    // Traces before the failure were smoothed.
    let traces = &response.dataset_name_to_traces.as_ref().unwrap()["day_2"];
    assert_eq!(traces[0].x.len(), 1000);
    assert_eq!(traces[1].x.len(), 2);
}

/// Unnamed traces are labelled by position.
#[test]
fn test_error_labels_unnamed_trace() {
    let mut traces = vec![
        TrajectoryTrace::new("first", vec![0.0], vec![1.0]),
        serde_json::from_value(json!({ "x": [], "y": [] })).unwrap(),
    ];

    let err = smoother().smooth_dataset("day_7", &mut traces).unwrap_err();

    match err {
        SmoothError::InvalidTrace { dataset, trace, source } => {
            assert_eq!(dataset, "day_7");
            assert_eq!(trace, "#1");
            assert_eq!(*source, SmoothError::EmptyInput);
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Invalid configuration fails at build time.
#[test]
fn test_build_rejects_bad_sigma() {
    let err = KernelSmoother::new()
        .sigma(-1.0)
        .adapter(Traces)
        .build()
        .unwrap_err();
    assert_eq!(err, SmoothError::InvalidSigma(-1.0));
}
