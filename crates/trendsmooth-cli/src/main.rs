use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use csv::Trim;
use rayon::prelude::*;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use trendsmooth::prelude::*;
use trendsmooth::{DEFAULT_SIGMA, DEFAULT_STEPS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Gaussian kernel smoothing of trend curves", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Raise the log level (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Smooth one curve read as `x,y` CSV rows
    Curve(CurveArgs),
    /// Smooth every trend trace of a trajectory response (JSON)
    Traces(TracesArgs),
}

#[derive(Parser, Debug)]
struct CurveArgs {
    /// Input CSV (`-` or absent for stdin)
    #[arg(value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Output CSV path (`-` for stdout)
    #[arg(short, long, default_value = "-", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    #[command(flatten)]
    smooth: SmoothArgs,
}

#[derive(Parser, Debug)]
struct TracesArgs {
    /// Input JSON (`-` for stdin)
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output JSON path (`-` for stdout)
    #[arg(short, long, default_value = "-", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Pretty-print the output document
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,

    #[command(flatten)]
    smooth: SmoothArgs,
}

#[derive(Args, Debug, Clone)]
struct SmoothArgs {
    /// Kernel bandwidth
    #[arg(long, default_value_t = DEFAULT_SIGMA)]
    sigma: f64,

    /// Number of grid points
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: usize,

    /// First grid point (requires --stop; overrides --bounds)
    #[arg(long, requires = "stop", allow_negative_numbers = true)]
    start: Option<f64>,

    /// Last grid point (requires --start; overrides --bounds)
    #[arg(long, requires = "start", allow_negative_numbers = true)]
    stop: Option<f64>,

    /// Grid interval when --start/--stop are not given
    #[arg(long, value_enum, default_value_t = BoundsOpt::Origin)]
    bounds: BoundsOpt,

    /// Grid construction mode
    #[arg(long, value_enum, default_value_t = SpacingOpt::Direct)]
    spacing: SpacingOpt,

    /// Value for grid points where every kernel weight underflows
    #[arg(long, value_enum, default_value_t = FallbackOpt::Propagate)]
    fallback: FallbackOpt,

    /// Evaluate grid points in parallel
    #[arg(long, action = ArgAction::SetTrue)]
    parallel: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum BoundsOpt {
    /// From 0 to the x of the last sample
    Origin,
    /// From the smallest to the largest sample x
    Extent,
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum SpacingOpt {
    Direct,
    Accumulated,
}

impl From<SpacingOpt> for GridSpacing {
    fn from(value: SpacingOpt) -> Self {
        match value {
            SpacingOpt::Direct => GridSpacing::Direct,
            SpacingOpt::Accumulated => GridSpacing::Accumulated,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum FallbackOpt {
    Propagate,
    Nearest,
    Mean,
}

impl From<FallbackOpt> for ZeroWeightFallback {
    fn from(value: FallbackOpt) -> Self {
        match value {
            FallbackOpt::Propagate => ZeroWeightFallback::Propagate,
            FallbackOpt::Nearest => ZeroWeightFallback::NearestSample,
            FallbackOpt::Mean => ZeroWeightFallback::SampleMean,
        }
    }
}

impl SmoothArgs {
    fn grid_bounds(&self) -> GridBounds<f64> {
        match (self.start, self.stop) {
            (Some(start), Some(stop)) => GridBounds::Explicit { start, stop },
            _ => match self.bounds {
                BoundsOpt::Origin => GridBounds::OriginToLast,
                BoundsOpt::Extent => GridBounds::DataExtent,
            },
        }
    }

    fn builder(&self) -> KernelSmoother<f64> {
        KernelSmoother::new()
            .sigma(self.sigma)
            .steps(self.steps)
            .bounds(self.grid_bounds())
            .spacing(self.spacing.into())
            .zero_weight_fallback(self.fallback.into())
            .parallel(self.parallel)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Command::Curve(args) => handle_curve(args),
        Command::Traces(args) => handle_traces(args),
    }
}

// ============================================================================
// curve
// ============================================================================

fn handle_curve(args: CurveArgs) -> Result<()> {
    let smoother = args
        .smooth
        .builder()
        .adapter(Batch)
        .build()
        .context("invalid smoothing parameters")?;

    let (x, y) = match args.input.as_deref() {
        Some(path) if !is_stdio(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            parse_curve_csv(file)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        _ => parse_curve_csv(io::stdin().lock()).context("failed to read stdin")?,
    };
    debug!(samples = x.len(), "parsed curve");

    let t0 = Instant::now();
    let result = smoother.smooth(&x, &y)?;
    info!(
        "Smoothed {} samples onto {} points in {:.1} ms",
        result.samples,
        result.len(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    if result.undefined_points() > 0 {
        warn!(
            "{} grid points are undefined (every kernel weight underflowed); see --fallback",
            result.undefined_points()
        );
    }

    let mut out = open_output(&args.output)?;
    write_curve_csv(&mut out, &result.x, &result.y)?;
    out.flush()?;
    if !is_stdio(&args.output) {
        info!("Wrote curve CSV: {}", args.output.display());
    }
    Ok(())
}

/// Parse `x,y` records. Blank lines and `#` comments are skipped; a first
/// record with no numeric field is taken as a header.
fn parse_curve_csv<R: Read>(reader: R) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut first = true;

    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line());

        if first {
            first = false;
            if record.iter().all(|f| f.parse::<f64>().is_err()) {
                debug!(header = ?record, "skipping header row");
                continue;
            }
        }

        if record.len() != 2 {
            bail!("line {}: expected 2 fields `x,y`, got {}", line, record.len());
        }
        let x = record[0]
            .parse::<f64>()
            .with_context(|| format!("line {}: invalid x {:?}", line, &record[0]))?;
        let y = record[1]
            .parse::<f64>()
            .with_context(|| format!("line {}: invalid y {:?}", line, &record[1]))?;
        xs.push(x);
        ys.push(y);
    }

    Ok((xs, ys))
}

fn write_curve_csv<W: Write>(out: W, x: &[f64], y: &[f64]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["x", "y"])?;
    for (xv, yv) in x.iter().zip(y) {
        writer.write_record([xv.to_string(), yv.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

// ============================================================================
// traces
// ============================================================================

fn handle_traces(args: TracesArgs) -> Result<()> {
    let smoother = args
        .smooth
        .builder()
        .adapter(Traces)
        .build()
        .context("invalid smoothing parameters")?;

    let raw = if is_stdio(&args.input) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read {}", args.input.display()))?
    };
    let doc: JsonValue = serde_json::from_str(&raw).context("input is not valid JSON")?;

    let t0 = Instant::now();
    let (doc, count) = smooth_document(&smoother, doc)?;
    info!(
        "Smoothed {} traces in {:.1} ms",
        count,
        t0.elapsed().as_secs_f64() * 1000.0
    );

    let mut out = open_output(&args.output)?;
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &doc)?;
    } else {
        serde_json::to_writer(&mut out, &doc)?;
    }
    writeln!(out)?;
    out.flush()?;
    if !is_stdio(&args.output) {
        info!("Wrote traces JSON: {}", args.output.display());
    }
    Ok(())
}

/// Smooth a trajectory response, or a bare dataset-to-traces map.
fn smooth_document(smoother: &TracesSmoother, doc: JsonValue) -> Result<(JsonValue, usize)> {
    let is_response = doc
        .as_object()
        .map(|obj| obj.contains_key("dataset_name_to_traces"))
        .ok_or_else(|| anyhow!("expected a JSON object"))?;

    if is_response {
        let mut response: TrajectoryResponse =
            serde_json::from_value(doc).context("malformed trajectory response")?;
        let count = match response.dataset_name_to_traces.as_mut() {
            Some(datasets) => smooth_datasets_parallel(smoother, datasets)?,
            None => 0,
        };
        Ok((serde_json::to_value(&response)?, count))
    } else {
        let mut datasets: DatasetTraces =
            serde_json::from_value(doc).context("malformed dataset-to-traces map")?;
        let count = smooth_datasets_parallel(smoother, &mut datasets)?;
        Ok((serde_json::to_value(&datasets)?, count))
    }
}

/// One rayon task per dataset.
fn smooth_datasets_parallel(
    smoother: &TracesSmoother,
    datasets: &mut DatasetTraces,
) -> Result<usize> {
    let counts = datasets
        .par_iter_mut()
        .map(|(name, traces)| {
            smoother
                .smooth_dataset(name, traces)
                .map(|()| traces.len())
        })
        .collect::<Result<Vec<usize>, SmoothError>>()?;
    debug!(datasets = counts.len(), "smoothed datasets");
    Ok(counts.into_iter().sum())
}

// ============================================================================
// I/O helpers
// ============================================================================

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(path) {
        Ok(Box::new(BufWriter::new(io::stdout().lock())))
    } else {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}
