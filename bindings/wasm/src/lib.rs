//! WebAssembly bindings for trendsmooth.

use js_sys::{Float64Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use ::trendsmooth::prelude::{
    Batch, GridSpacing, KernelSmoother, SmoothError, SmoothResult, ZeroWeightFallback,
};

fn to_js(err: SmoothError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_spacing(name: &str) -> Result<GridSpacing, JsValue> {
    match name.to_lowercase().as_str() {
        "direct" => Ok(GridSpacing::Direct),
        "accumulated" | "additive" => Ok(GridSpacing::Accumulated),
        _ => Err(JsValue::from_str(&format!("Unknown grid spacing: {}", name))),
    }
}

fn parse_zero_weight_fallback(name: &str) -> Result<ZeroWeightFallback, JsValue> {
    match name.to_lowercase().as_str() {
        "propagate" | "nan" | "none" => Ok(ZeroWeightFallback::Propagate),
        "nearest" | "nearest_sample" => Ok(ZeroWeightFallback::NearestSample),
        "mean" | "sample_mean" => Ok(ZeroWeightFallback::SampleMean),
        _ => Err(JsValue::from_str(&format!(
            "Unknown zero weight fallback: {}",
            name
        ))),
    }
}

fn parse_steps(val: f64) -> Result<usize, JsValue> {
    if !val.is_finite() || val < 0.0 || val.fract() != 0.0 || val > u32::MAX as f64 {
        return Err(JsValue::from_str(&format!(
            "Invalid steps: {} (must be a non-negative integer)",
            val
        )));
    }
    Ok(val as usize)
}

/// A resampled curve as two `Float64Array`s.
#[wasm_bindgen]
pub struct SmoothResultWasm {
    inner: SmoothResult<f64>,
}

#[wasm_bindgen]
impl SmoothResultWasm {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> Float64Array {
        Float64Array::from(&self.inner.x[..])
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> Float64Array {
        Float64Array::from(&self.inner.y[..])
    }

    #[wasm_bindgen(getter)]
    pub fn sigma(&self) -> f64 {
        self.inner.sigma
    }

    #[wasm_bindgen(getter)]
    pub fn samples(&self) -> u32 {
        self.inner.samples as u32
    }

    #[wasm_bindgen(getter, js_name = undefinedPoints)]
    pub fn undefined_points(&self) -> u32 {
        self.inner.undefined_points() as u32
    }
}

/// Smoothed value of `(xi, yi)` at `x`.
#[wasm_bindgen]
pub fn interpolate(x: f64, xi: &Float64Array, yi: &Float64Array, sigma: f64) -> Result<f64, JsValue> {
    ::trendsmooth::interpolate(x, &xi.to_vec(), &yi.to_vec(), sigma).map_err(to_js)
}

/// Resample the smoothed curve on `steps` points from `start` to `stop`.
#[wasm_bindgen(js_name = kernelSmooth)]
pub fn kernel_smooth(
    xi: &Float64Array,
    yi: &Float64Array,
    stop: f64,
    start: f64,
    steps: u32,
    sigma: f64,
) -> Result<SmoothResultWasm, JsValue> {
    let smoother = KernelSmoother::new()
        .sigma(sigma)
        .steps(steps as usize)
        .range(start, stop)
        .adapter(Batch)
        .build()
        .map_err(to_js)?;

    let result = smoother
        .smooth(&xi.to_vec(), &yi.to_vec())
        .map_err(to_js)?;

    Ok(SmoothResultWasm { inner: result })
}

/// Smooth with an options object: `sigma`, `steps`, `start`, `stop`,
/// `spacing`, `fallback`.
///
/// Without `start`/`stop` the grid runs from 0 to the last sample's x.
#[wasm_bindgen]
pub fn smooth(
    xi: &Float64Array,
    yi: &Float64Array,
    options: &JsValue,
) -> Result<SmoothResultWasm, JsValue> {
    let mut builder = KernelSmoother::new();

    if !options.is_undefined() && !options.is_null() {
        let options = Object::from(options.clone());

        if let Ok(s) = Reflect::get(&options, &JsValue::from_str("sigma"))
            && let Some(val) = s.as_f64()
        {
            builder = builder.sigma(val);
        }
        if let Ok(s) = Reflect::get(&options, &JsValue::from_str("steps"))
            && let Some(val) = s.as_f64()
        {
            builder = builder.steps(parse_steps(val)?);
        }

        let start = Reflect::get(&options, &JsValue::from_str("start"))
            .ok()
            .and_then(|v| v.as_f64());
        let stop = Reflect::get(&options, &JsValue::from_str("stop"))
            .ok()
            .and_then(|v| v.as_f64());
        match (start, stop) {
            (Some(start), Some(stop)) => builder = builder.range(start, stop),
            (None, None) => {}
            _ => {
                return Err(JsValue::from_str(
                    "Options `start` and `stop` must be given together",
                ));
            }
        }

        if let Ok(sp) = Reflect::get(&options, &JsValue::from_str("spacing"))
            && let Some(val) = sp.as_string()
        {
            builder = builder.spacing(parse_spacing(&val)?);
        }
        if let Ok(fb) = Reflect::get(&options, &JsValue::from_str("fallback"))
            && let Some(val) = fb.as_string()
        {
            builder = builder.zero_weight_fallback(parse_zero_weight_fallback(&val)?);
        }
    }

    let smoother = builder.adapter(Batch).build().map_err(to_js)?;
    let result = smoother
        .smooth(&xi.to_vec(), &yi.to_vec())
        .map_err(to_js)?;

    Ok(SmoothResultWasm { inner: result })
}
